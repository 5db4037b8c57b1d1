//! Exchange rate abstractions

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use thiserror::Error;

/// Failures while talking to a rate API.
///
/// Each variant keeps the detail the caller needs to render the failure;
/// nothing in this module prints or logs on its own.
#[derive(Error, Debug)]
pub enum RateError {
    /// The API answered but flagged its own failure, e.g. an invalid key.
    #[error("API reported an error: {kind}")]
    Api { kind: String },

    /// The target code is absent from the returned rate mapping.
    #[error("no rate for currency code: {code}")]
    UnknownCurrency { code: String },

    /// The server answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The request produced no usable response at all.
    #[error("{0}")]
    Transport(reqwest::Error),

    /// The response body was not the JSON shape the API documents.
    #[error("malformed API response: {0}")]
    Decode(#[from] serde_json::Error),
}

// The request URL embeds the API key; it must not reach error output.
impl From<reqwest::Error> for RateError {
    fn from(err: reqwest::Error) -> Self {
        RateError::Transport(err.without_url())
    }
}

/// A live source of conversion rates.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// All currency codes the API currently quotes rates for.
    async fn supported_currencies(&self) -> Result<BTreeSet<String>, RateError>;

    /// Conversion rate such that `amount_in_to = amount_in_from * rate`.
    async fn fetch_rate(&self, from: &str, to: &str) -> Result<Decimal, RateError>;
}
