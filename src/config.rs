//! Environment-sourced configuration.
//!
//! Everything is read once at startup into [`Config`] and handed to the
//! collaborators that need it. Missing or malformed values never abort a run:
//! credentials degrade to "disabled" and numeric settings fall back to their
//! defaults.

use std::env;
use std::time::Duration;
use tracing::warn;
use url::Url;

pub const DEFAULT_SYMBOLS: [&str; 5] = ["AAPL", "MSFT", "GOOGL", "AMZN", "NVDA"];
pub const DEFAULT_REQUEST_DELAY_SECONDS: u64 = 8;
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_TWELVE_DATA_BASE_URL: &str = "https://api.twelvedata.com";
pub const DEFAULT_TELEGRAM_API_BASE_URL: &str = "https://api.telegram.org";

/// Deployment environment name, used to pick the log format.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct Config {
    pub twelve_data_api_key: Option<String>,
    pub telegram_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub symbols: Vec<String>,
    pub request_delay: Duration,
    pub request_timeout: Duration,
    pub twelve_data_base_url: Url,
    pub telegram_api_base_url: Url,
    /// Cron expression for daemon mode; `None` runs once.
    pub schedule: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let symbols = get("STOCK_SYMBOLS")
            .map(|raw| parse_symbols(&raw))
            .filter(|symbols| !symbols.is_empty())
            .unwrap_or_else(|| DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect());

        Self {
            twelve_data_api_key: get("TWELVE_DATA_API_KEY"),
            telegram_token: get("TELEGRAM_TOKEN"),
            telegram_chat_id: get("TELEGRAM_CHAT_ID"),
            symbols,
            request_delay: Duration::from_secs(parse_seconds(
                "REQUEST_DELAY_SECONDS",
                get("REQUEST_DELAY_SECONDS"),
                DEFAULT_REQUEST_DELAY_SECONDS,
            )),
            request_timeout: Duration::from_secs(parse_nonzero_seconds(
                "REQUEST_TIMEOUT_SECONDS",
                get("REQUEST_TIMEOUT_SECONDS"),
                DEFAULT_REQUEST_TIMEOUT_SECONDS,
            )),
            twelve_data_base_url: parse_url(
                "TWELVE_DATA_BASE_URL",
                get("TWELVE_DATA_BASE_URL"),
                DEFAULT_TWELVE_DATA_BASE_URL,
            ),
            telegram_api_base_url: parse_url(
                "TELEGRAM_API_BASE_URL",
                get("TELEGRAM_API_BASE_URL"),
                DEFAULT_TELEGRAM_API_BASE_URL,
            ),
            schedule: get("SCHEDULE_CRON"),
        }
    }

    /// Delivery is enabled only when both bot token and chat id are set.
    pub fn delivery_enabled(&self) -> bool {
        self.telegram_token.is_some() && self.telegram_chat_id.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Split a comma-separated ticker list, dropping blanks and upper-casing.
pub fn parse_symbols(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_seconds(key: &str, value: Option<String>, default: u64) -> u64 {
    match value {
        Some(v) => v.parse().unwrap_or_else(|e| {
            warn!(key = key, value = %v, error = %e, "Invalid number, using default {}", default);
            default
        }),
        None => default,
    }
}

/// Like [`parse_seconds`], but zero counts as invalid. A zero timeout would
/// fail every request before it is sent.
fn parse_nonzero_seconds(key: &str, value: Option<String>, default: u64) -> u64 {
    match parse_seconds(key, value, default) {
        0 => {
            warn!(key = key, "Must be greater than zero, using default {}", default);
            default
        }
        seconds => seconds,
    }
}

fn parse_url(key: &str, value: Option<String>, default: &str) -> Url {
    let fallback = || Url::parse(default).expect("default URL is valid");
    match value {
        Some(v) => Url::parse(&v).unwrap_or_else(|e| {
            warn!(key = key, value = %v, error = %e, "Invalid URL, using default {}", default);
            fallback()
        }),
        None => fallback(),
    }
}
