use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::time::Duration;
use tracing::debug;

use crate::core::config::AppConfig;
use crate::core::rates::{RateError, RateProvider};

/// Bound on how long a single rates request may hang.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    result: String,
    error: Option<ApiErrorBody>,
    #[serde(default)]
    conversion_rates: HashMap<String, Decimal>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    time_last_update_unix: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(rename = "type")]
    kind: String,
}

// ExchangeRateApiProvider implementation for RateProvider
pub struct ExchangeRateApiProvider {
    config: AppConfig,
    client: Client,
}

impl ExchangeRateApiProvider {
    pub fn new(config: &AppConfig) -> Result<Self, RateError> {
        let client = Client::builder()
            .user_agent("fxconv/0.1")
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(ExchangeRateApiProvider {
            config: config.clone(),
            client,
        })
    }

    /// Fetches and decodes the latest-rates payload for `from`.
    ///
    /// The URL embeds the API key, so logging names the base currency
    /// instead.
    async fn latest_rates(&self, from: &str) -> Result<LatestRatesResponse, RateError> {
        let url = self.config.latest_rates_url(from);
        debug!(%from, "Requesting latest rates");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RateError::Http { status, body });
        }

        let text = response.text().await?;
        let data: LatestRatesResponse = serde_json::from_str(&text)?;

        if data.result != "success" {
            // The error body is optional in practice even when the
            // result flags a failure.
            let kind = data.error.map_or_else(|| "unknown".to_string(), |e| e.kind);
            return Err(RateError::Api { kind });
        }

        if let Some(updated) = data.time_last_update_unix {
            debug!(%from, %updated, "Rates last refreshed");
        }

        Ok(data)
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    async fn supported_currencies(&self) -> Result<BTreeSet<String>, RateError> {
        // No dedicated code-list endpoint; the USD quote covers every
        // code the API serves.
        let data = self.latest_rates("USD").await?;
        Ok(data.conversion_rates.into_keys().collect())
    }

    async fn fetch_rate(&self, from: &str, to: &str) -> Result<Decimal, RateError> {
        let data = self.latest_rates(from).await?;
        data.conversion_rates
            .get(to)
            .copied()
            .ok_or_else(|| RateError::UnknownCurrency {
                code: to.to_string(),
            })
    }
}
