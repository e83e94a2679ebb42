//! Market data provider interface.

use crate::models::series::PriceSeries;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("price provider API key is not configured")]
    MissingApiKey,

    #[error("ticker symbol is empty")]
    EmptySymbol,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid response body: {0}")]
    Body(#[from] serde_json::Error),

    #[error("provider error {code:?}: {message}")]
    Provider { code: Option<i64>, message: String },

    #[error("response contains no price history")]
    NoData,

    #[error("malformed record: {0}")]
    MalformedRecord(String),
}

impl MarketDataError {
    /// Whether the failure happened before any request left the process.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::MissingApiKey | Self::EmptySymbol)
    }
}

#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Fetch the daily closing-price history for `symbol`, oldest first.
    async fn get_daily_series(&self, symbol: &str) -> Result<PriceSeries, MarketDataError>;
}
