//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub store: StoreConfig,
    pub auth: AuthConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            env: Environment::default(),
            log_format: LogFormat::default(),
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
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

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Document store client settings
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Attempts per transaction before contention is reported as a failure
    #[serde(default = "default_max_transaction_attempts")]
    pub max_transaction_attempts: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_transaction_attempts: default_max_transaction_attempts(),
        }
    }
}

/// Identity provider settings
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            min_password_length: default_min_password_length(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "reddit-clone".to_string()
}

fn default_max_transaction_attempts() -> u32 {
    5
}

fn default_min_password_length() -> usize {
    6
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Every value has a default; malformed values are reported.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let env_name = env::var("APP_ENV").ok();
        let env = match env_name.as_deref() {
            Some(raw) => Environment::parse(raw)
                .ok_or_else(|| ConfigError::InvalidValue("APP_ENV", raw.to_string()))?,
            None => Environment::default(),
        };

        let log_format = match env::var("LOG_FORMAT").ok().as_deref() {
            Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => return Err(ConfigError::InvalidValue("LOG_FORMAT", other.to_string())),
            None if env.is_production() => LogFormat::Json,
            None => LogFormat::Pretty,
        };

        let max_transaction_attempts =
            parse_var("STORE_MAX_TRANSACTION_ATTEMPTS")?.unwrap_or_else(default_max_transaction_attempts);
        if max_transaction_attempts == 0 {
            return Err(ConfigError::InvalidValue(
                "STORE_MAX_TRANSACTION_ATTEMPTS",
                "0".to_string(),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env,
                log_format,
            },
            store: StoreConfig {
                max_transaction_attempts,
            },
            auth: AuthConfig {
                min_password_length: parse_var("AUTH_MIN_PASSWORD_LENGTH")?
                    .unwrap_or_else(default_min_password_length),
            },
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
