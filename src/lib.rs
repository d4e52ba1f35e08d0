pub mod clock;
pub mod config;
pub mod language;
pub mod output;
pub mod prompts;
pub mod schedule;
pub mod server;
