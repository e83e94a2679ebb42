//! Twelve Data REST client for daily price history.
//!
//! Uses the `time_series` endpoint. The free tier allows 8 requests per
//! minute, which is what the batch driver's default delay accounts for.

use crate::config::Config;
use crate::models::series::{PricePoint, PriceSeries};
use crate::services::market_data::{MarketDataError, PriceHistoryProvider};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

const INTERVAL: &str = "1day";
const OUTPUT_SIZE: u32 = 100;

#[derive(Debug, Deserialize)]
struct TimeSeriesResponse {
    values: Option<Vec<TimeSeriesValue>>,
    status: Option<String>,
    code: Option<i64>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TimeSeriesValue {
    datetime: String,
    close: NumberOrString,
}

/// Twelve Data quotes numbers as strings; accept either.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

pub struct TwelveDataClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    timeout: Duration,
}

impl TwelveDataClient {
    pub fn new(config: &Config) -> Self {
        Self::with_client(
            config.twelve_data_base_url.clone(),
            config.twelve_data_api_key.clone(),
            config.request_timeout,
            Client::new(),
        )
    }

    pub fn with_client(
        base_url: Url,
        api_key: Option<String>,
        timeout: Duration,
        client: Client,
    ) -> Self {
        Self {
            client,
            base_url,
            api_key,
            timeout,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/time_series", self.base_url.as_str().trim_end_matches('/'))
    }
}

#[async_trait]
impl PriceHistoryProvider for TwelveDataClient {
    async fn get_daily_series(&self, symbol: &str) -> Result<PriceSeries, MarketDataError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(MarketDataError::EmptySymbol);
        }
        let api_key = self.api_key.as_deref().ok_or(MarketDataError::MissingApiKey)?;

        let output_size = OUTPUT_SIZE.to_string();
        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("symbol", symbol),
                ("interval", INTERVAL),
                ("outputsize", output_size.as_str()),
                ("apikey", api_key),
            ])
            .timeout(self.timeout)
            .send()
            .await
            // The query string carries the API key.
            .map_err(|e| MarketDataError::Request(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::Request(e.without_url()))?;
        let parsed: TimeSeriesResponse = serde_json::from_str(&body)?;
        let series = parse_time_series(parsed)?;

        debug!(symbol = %symbol, count = series.len(), "Fetched {} daily closes for {}", series.len(), symbol);
        Ok(series)
    }
}

fn parse_time_series(response: TimeSeriesResponse) -> Result<PriceSeries, MarketDataError> {
    let values = match response.values {
        Some(values) => values,
        None if response.status.as_deref() == Some("error") => {
            return Err(MarketDataError::Provider {
                code: response.code,
                message: response.message.unwrap_or_default(),
            });
        }
        None => return Err(MarketDataError::NoData),
    };

    let points = values
        .into_iter()
        .map(parse_value)
        .collect::<Result<Vec<_>, _>>()?;

    PriceSeries::new(points).ok_or(MarketDataError::NoData)
}

fn parse_value(value: TimeSeriesValue) -> Result<PricePoint, MarketDataError> {
    let timestamp = parse_datetime(&value.datetime).ok_or_else(|| {
        MarketDataError::MalformedRecord(format!("invalid datetime '{}'", value.datetime))
    })?;

    let close = match value.close {
        NumberOrString::Number(n) => n,
        NumberOrString::String(s) => s.trim().parse::<f64>().map_err(|e| {
            MarketDataError::MalformedRecord(format!("invalid close '{}': {}", s, e))
        })?,
    };

    if !close.is_finite() || close <= 0.0 {
        return Err(MarketDataError::MalformedRecord(format!(
            "non-positive close {} at {}",
            close, value.datetime
        )));
    }

    Ok(PricePoint::new(timestamp, close))
}

/// Accepts `YYYY-MM-DD` and `YYYY-MM-DD HH:MM:SS`, both taken as UTC.
fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.and_utc())
}
