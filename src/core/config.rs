use anyhow::{Context, Result};
use std::env;
use tracing::debug;

/// Default exchangerate-api.com v6 endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";

/// Runtime configuration for the rate provider.
///
/// Built once at startup from the process environment and injected into
/// the provider, so nothing reads globals after that.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
}

impl AppConfig {
    pub fn new(api_key: &str, base_url: &str) -> Self {
        AppConfig {
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads `EXCHANGE_RATE_API_KEY` (required) and the optional
    /// `EXCHANGE_RATE_API_URL` endpoint override.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("EXCHANGE_RATE_API_KEY")
            .context("EXCHANGE_RATE_API_KEY is not set; get a free key at exchangerate-api.com")?;
        let base_url =
            env::var("EXCHANGE_RATE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        debug!("Loaded configuration from environment");
        Ok(Self::new(&api_key, &base_url))
    }

    /// URL of the latest-rates endpoint with `from` as the base currency.
    pub fn latest_rates_url(&self, from: &str) -> String {
        format!("{}/{}/latest/{}", self.base_url, self.api_key, from)
    }
}
