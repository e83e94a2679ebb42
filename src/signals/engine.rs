//! Signal evaluation engine: RSI at the latest bar mapped to BUY/SELL/HOLD.

use crate::indicators::momentum::rsi::{calculate_rsi, DEFAULT_RSI_PERIOD};
use crate::models::series::PriceSeries;
use crate::models::signal::SignalEvaluation;
use crate::signals::thresholds::SignalThresholds;

/// Fewer closes than this and the 14-period averages have no warm-up.
pub const MIN_SERIES_LEN: usize = 30;

#[derive(Debug, Clone, Copy)]
pub struct SignalEngine {
    period: u32,
    thresholds: SignalThresholds,
}

impl SignalEngine {
    pub fn new(period: u32, thresholds: SignalThresholds) -> Self {
        Self { period, thresholds }
    }

    /// Evaluate the latest bar of `series`.
    ///
    /// Returns `None` when the series is shorter than [`MIN_SERIES_LEN`].
    pub fn evaluate(&self, symbol: &str, series: &PriceSeries) -> Option<SignalEvaluation> {
        if series.len() < MIN_SERIES_LEN {
            return None;
        }

        let rsi = calculate_rsi(&series.closes(), self.period)?;
        let latest = series.latest();

        Some(SignalEvaluation {
            symbol: symbol.to_string(),
            price: latest.close,
            signal: self.thresholds.classify(rsi.value),
            rsi,
            as_of: latest.timestamp,
        })
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new(DEFAULT_RSI_PERIOD, SignalThresholds::default())
    }
}
