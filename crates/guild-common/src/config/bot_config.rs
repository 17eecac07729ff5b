//! Bot configuration
//!
//! Loads credentials, intents and connection tuning from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use guild_core::Intents;

/// REST base URL of the production platform
pub const PRODUCTION_API_URL: &str = "https://api.sgroup.qq.com";

/// REST base URL of the sandbox platform
pub const SANDBOX_API_URL: &str = "https://sandbox.api.sgroup.qq.com";

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Bot configuration
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub app_id: String,
    pub token: String,
    /// REST base URL, without trailing slash
    pub api_base_url: String,
    pub intents: Intents,
    pub shard_id: u32,
    pub shard_count: u32,
    pub rest_timeout: Duration,
    /// Pause before replacing a dropped socket
    pub reconnect_delay: Duration,
    /// Consecutive failed connects before giving up
    pub reconnect_max_attempts: u32,
    pub env: Environment,
}

// Default value functions
fn default_rest_timeout_secs() -> u64 {
    10
}

fn default_reconnect_delay_ms() -> u64 {
    1000
}

fn default_reconnect_max_attempts() -> u32 {
    5
}

impl BotConfig {
    /// Build a sandbox configuration with default tuning
    pub fn new(app_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            token: token.into(),
            api_base_url: SANDBOX_API_URL.to_string(),
            intents: Intents::default(),
            shard_id: 0,
            shard_count: 1,
            rest_timeout: Duration::from_secs(default_rest_timeout_secs()),
            reconnect_delay: Duration::from_millis(default_reconnect_delay_ms()),
            reconnect_max_attempts: default_reconnect_max_attempts(),
            env: Environment::default(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or a value cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_id = lookup("BOT_APP_ID")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingVar("BOT_APP_ID"))?;
        let token = lookup("BOT_TOKEN")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingVar("BOT_TOKEN"))?;

        let sandbox = match lookup("BOT_SANDBOX") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidValue("BOT_SANDBOX", raw))?,
            None => true,
        };

        let intents = match lookup("BOT_INTENTS") {
            Some(raw) => Intents::from_names(&raw)
                .map_err(|e| ConfigError::InvalidValue("BOT_INTENTS", e.to_string()))?,
            None => Intents::default(),
        };

        let shard_id = parse_or(&lookup, "BOT_SHARD_ID", 0)?;
        let shard_count = parse_or(&lookup, "BOT_SHARD_COUNT", 1)?;
        if shard_count == 0 || shard_id >= shard_count {
            return Err(ConfigError::InvalidValue(
                "BOT_SHARD_ID",
                format!("shard {shard_id} out of range for {shard_count} shards"),
            ));
        }

        let env = lookup("APP_ENV")
            .and_then(|s| match s.to_lowercase().as_str() {
                "production" => Some(Environment::Production),
                "development" => Some(Environment::Development),
                _ => None,
            })
            .unwrap_or_default();

        Ok(Self {
            app_id,
            token,
            api_base_url: if sandbox { SANDBOX_API_URL } else { PRODUCTION_API_URL }.to_string(),
            intents,
            shard_id,
            shard_count,
            rest_timeout: Duration::from_secs(parse_or(
                &lookup,
                "BOT_REST_TIMEOUT_SECS",
                default_rest_timeout_secs(),
            )?),
            reconnect_delay: Duration::from_millis(parse_or(
                &lookup,
                "BOT_RECONNECT_DELAY_MS",
                default_reconnect_delay_ms(),
            )?),
            reconnect_max_attempts: parse_or(
                &lookup,
                "BOT_RECONNECT_MAX_ATTEMPTS",
                default_reconnect_max_attempts(),
            )?,
            env,
        })
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_intents(mut self, intents: Intents) -> Self {
        self.intents = intents;
        self
    }

    pub fn with_shard(mut self, shard_id: u32, shard_count: u32) -> Self {
        self.shard_id = shard_id;
        self.shard_count = shard_count;
        self
    }

    pub fn with_rest_timeout(mut self, timeout: Duration) -> Self {
        self.rest_timeout = timeout;
        self
    }

    pub fn with_reconnect(mut self, delay: Duration, max_attempts: u32) -> Self {
        self.reconnect_delay = delay;
        self.reconnect_max_attempts = max_attempts;
        self
    }

    /// Value of the `Authorization` header for REST and the gateway token
    #[must_use]
    pub fn bot_token(&self) -> String {
        format!("Bot {}.{}", self.app_id, self.token)
    }

    #[must_use]
    pub fn is_sandbox(&self) -> bool {
        self.api_base_url == SANDBOX_API_URL
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
