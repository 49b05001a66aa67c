use std::{env, fmt, time::Duration};

use anyhow::{Context, Result, bail};
use rekt_core::etherscan::ETHERSCAN_URL;

const DEFAULT_SERVER_DOMAIN: &str = "0.0.0.0:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MAX_TIMEOUT_SECS: u64 = 120;

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub etherscan_api_key: String,
    pub etherscan_url: String,
    pub server_domain: String,
    pub request_timeout: Duration,
    pub cors_allow: Vec<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("etherscan_api_key", &"<redacted>")
            .field("etherscan_url", &self.etherscan_url)
            .field("server_domain", &self.server_domain)
            .field("request_timeout", &self.request_timeout)
            .field("cors_allow", &self.cors_allow)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let etherscan_api_key = get("ETHERSCAN_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .context("ETHERSCAN_API_KEY environment variable not set")?;

        let etherscan_url = get("ETHERSCAN_URL").unwrap_or_else(|| ETHERSCAN_URL.to_string());

        let server_domain =
            get("SERVER_DOMAIN").unwrap_or_else(|| DEFAULT_SERVER_DOMAIN.to_string());

        let timeout_secs = match get("REQUEST_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        if !(1..=MAX_TIMEOUT_SECS).contains(&timeout_secs) {
            bail!(
                "REQUEST_TIMEOUT_SECS must be between 1 and {}",
                MAX_TIMEOUT_SECS
            );
        }

        let cors_allow = get("CORS_ALLOW")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            etherscan_api_key,
            etherscan_url,
            server_domain,
            request_timeout: Duration::from_secs(timeout_secs),
            cors_allow,
        })
    }
}
