use heras_advisor::clock::SystemClock;
use heras_advisor::config::Config;
use heras_advisor::output;
use heras_advisor::prompts::PromptProvider;
use heras_advisor::server::HoursServer;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let provider = PromptProvider::new(config.schedule_path.clone(), Arc::new(SystemClock));

    output::startup_banner(&config.service_name);
    output::config_item("Port", &config.port.to_string());
    output::config_item("Schedule", &config.schedule_path.display().to_string());

    // Hours are baked into the system prompt once, here.
    let prompts = provider.bundle();

    output::section("Business hours");
    output::text_block(&provider.business_hours_info());
    output::open_state(provider.is_business_hours());
    output::status(provider.time_based_greeting());

    let server = HoursServer::new(&config, provider, prompts);
    match server.start().await {
        Ok(addr) => output::ready(&format!("http://localhost:{}", addr.port())),
        Err(e) => {
            output::error(&format!("Could not start server: {}", e));
            std::process::exit(1);
        }
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        output::warn(&format!("Failed to listen for shutdown signal: {}", e));
    }
    output::success("Shutting down");
}
