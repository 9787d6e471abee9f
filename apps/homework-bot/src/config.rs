//! Settings read from the process environment.

use std::path::PathBuf;
use std::time::Duration;

use clients_practicum::DEFAULT_ENDPOINT;
use homework::TrackerConfig;
use thiserror::Error;
use url::Url;

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

const DEFAULT_LOG_FILE: &str = "homework_bot.log";
const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is missing")]
    Missing(&'static str),
    #[error("environment variable {name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the bot needs, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: Url,
    pub retry_period: Duration,
    pub request_timeout: Duration,
    pub require_current_date: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any name → value lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let practicum_token = required(PRACTICUM_TOKEN)?;
        let telegram_token = required(TELEGRAM_TOKEN)?;
        let telegram_chat_id = required(TELEGRAM_CHAT_ID)?;

        let endpoint = match get("PRACTICUM_ENDPOINT") {
            Some(raw) => Url::parse(&raw).map_err(|e| ConfigError::Invalid {
                name: "PRACTICUM_ENDPOINT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
        };
        let retry_period = Duration::from_secs(secs(
            "RETRY_PERIOD_SECS",
            get("RETRY_PERIOD_SECS"),
            DEFAULT_RETRY_PERIOD_SECS,
        )?);
        let request_timeout = Duration::from_secs(secs(
            "REQUEST_TIMEOUT_SECS",
            get("REQUEST_TIMEOUT_SECS"),
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?);
        let require_current_date = match get("REQUIRE_CURRENT_DATE") {
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "REQUIRE_CURRENT_DATE",
                        value: raw,
                        reason: "expected true or false".to_string(),
                    })
                }
            },
            None => false,
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            retry_period,
            request_timeout,
            require_current_date,
        })
    }

    pub fn tracker(&self) -> TrackerConfig {
        TrackerConfig {
            retry_period: self.retry_period,
            require_current_date: self.require_current_date,
        }
    }
}

/// Log file location; read on its own so logging works before the rest is validated.
pub fn log_file() -> PathBuf {
    std::env::var("LOG_FILE")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
        .into()
}

fn secs(name: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.parse::<u64>() {
        Ok(0) => Err(ConfigError::Invalid {
            name,
            value: raw,
            reason: "must be positive".to_string(),
        }),
        Ok(n) => Ok(n),
        Err(e) => Err(ConfigError::Invalid {
            name,
            value: raw,
            reason: e.to_string(),
        }),
    }
}
