use crate::schedule::DEFAULT_SCHEDULE_PATH;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_name: String,
    pub port: u16,
    pub schedule_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "Hera's Nails & Lashes Advisor API".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            schedule_path: env::var("SCHEDULE_PATH")
                .unwrap_or_else(|_| DEFAULT_SCHEDULE_PATH.to_string())
                .into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "Hera's Nails & Lashes Advisor API".to_string(),
            port: 3000,
            schedule_path: DEFAULT_SCHEDULE_PATH.into(),
        }
    }
}
