//! # guild-common
//!
//! Shared utilities: bot configuration loaded from the environment and
//! tracing subscriber setup.

pub mod config;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{BotConfig, ConfigError, Environment, PRODUCTION_API_URL, SANDBOX_API_URL};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
