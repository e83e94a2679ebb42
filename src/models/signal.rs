use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::indicators::RsiIndicator;

/// Discrete recommendation derived from RSI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    /// Label used in the delivered report.
    pub fn label(&self) -> &'static str {
        match self {
            Signal::Buy => "BUY 🟢",
            Signal::Sell => "SELL 🔴",
            Signal::Hold => "HOLD 😐",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
        };
        f.write_str(name)
    }
}

/// Result of running the signal engine over one ticker's series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalEvaluation {
    pub symbol: String,
    /// Latest close in the series.
    pub price: f64,
    pub rsi: RsiIndicator,
    pub signal: Signal,
    /// Timestamp of the bar the evaluation refers to.
    pub as_of: DateTime<Utc>,
}
