use serde;
use serde_json;
use serde_with;
use std::time::Duration;
use thiserror;
use tokio;
use url::Url;

use crate::types::Locale;

pub const BASE_URL: &str = "https://api.betaseries.com";
pub const DEFAULT_USER_AGENT: &str = concat!("betaseries-rs/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {}", .0)]
    IO(std::io::Error),
    #[error("json decode on config: {}", .0)]
    JsonDecode(serde_json::Error),
    #[error("base_url cannot hold endpoint paths: {}", .0)]
    InvalidBaseUrl(Url),
}

#[serde_with::serde_as]
#[derive(serde::Deserialize, Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub locale: Option<Locale>,
    #[serde(default="defaults::base_url")]
    pub base_url: Url,
    #[serde(default="defaults::user_agent")]
    pub user_agent: String,
    /// Deadline of a single call, in seconds.
    #[serde_as(as="serde_with::DurationSeconds<u64>")]
    #[serde(default="defaults::http_timeout")]
    pub http_timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            token: None,
            locale: None,
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            http_timeout: defaults::http_timeout(),
        }
    }

    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(data).map_err(ConfigError::JsonDecode)?;
        // A url typed without its scheme, e.g. "localhost:8080", parses with "localhost" as the scheme.
        if config.base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl(config.base_url));
        }
        Ok(config)
    }

    pub async fn load(path: &str) -> Result<Self, ConfigError> {
        let data = tokio::fs::read_to_string(path).await.map_err(ConfigError::IO)?;
        Self::from_json(data.as_str())
    }
}

mod defaults {
    use std::time::Duration;
    use url::Url;

    pub fn base_url() -> Url {
        Url::parse(super::BASE_URL).expect("Url is valid")
    }

    pub fn user_agent() -> String {
        super::DEFAULT_USER_AGENT.to_string()
    }

    pub fn http_timeout() -> Duration {
        Duration::from_secs(30)
    }
}
