//! Configuration structs

mod bot_config;

pub use bot_config::{BotConfig, ConfigError, Environment, PRODUCTION_API_URL, SANDBOX_API_URL};
