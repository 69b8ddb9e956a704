pub mod logging;

pub use logging::init_logging;

use crate::errors::ConfigError;
use reqwest::Url;
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://localhost:7259/api/v1.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("estate-scout/", env!("CARGO_PKG_VERSION"));

/// Settings for the listing API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    /// Load client configuration from environment variables.
    ///
    /// Reads `ESTATE_API_BASE_URL`, `ESTATE_API_TIMEOUT_SECS` and
    /// `ESTATE_API_USER_AGENT`; unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            env::var("ESTATE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(&base_url)?;

        if let Ok(raw) = env::var("ESTATE_API_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                name: "ESTATE_API_TIMEOUT_SECS",
                reason: format!("{}: {}", raw, e),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Ok(user_agent) = env::var("ESTATE_API_USER_AGENT") {
            config.user_agent = user_agent;
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidValue {
        name: "base URL",
        reason: format!("{}: {}", raw, e),
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidValue {
            name: "base URL",
            reason: format!("{} cannot be used as a base URL", raw),
        });
    }

    Ok(url)
}
