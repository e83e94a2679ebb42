//! RSI threshold bands

use crate::models::signal::Signal;

/// Oversold/overbought bands used to classify an RSI reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalThresholds {
    /// Strictly below this is BUY.
    pub oversold: f64,
    /// Strictly above this is SELL.
    pub overbought: f64,
}

impl SignalThresholds {
    pub const OVERSOLD: f64 = 35.0;
    pub const OVERBOUGHT: f64 = 65.0;

    /// Classify an RSI value. Both band edges are HOLD.
    pub fn classify(&self, rsi: f64) -> Signal {
        if rsi < self.oversold {
            Signal::Buy
        } else if rsi > self.overbought {
            Signal::Sell
        } else {
            Signal::Hold
        }
    }
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            oversold: Self::OVERSOLD,
            overbought: Self::OVERBOUGHT,
        }
    }
}
