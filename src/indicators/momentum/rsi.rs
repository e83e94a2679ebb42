//! RSI (Relative Strength Index) indicator

use crate::models::indicators::RsiIndicator;

pub const DEFAULT_RSI_PERIOD: u32 = 14;

/// RSI reported when the window has neither gains nor losses.
pub const NEUTRAL_RSI: f64 = 50.0;

/// Calculate RSI at the most recent close
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Averages are simple means over the trailing `period` price changes.
/// A window with gains and no losses is 100; a window with no movement at
/// all is [`NEUTRAL_RSI`].
pub fn calculate_rsi(closes: &[f64], period: u32) -> Option<RsiIndicator> {
    let period_len = period as usize;
    if period_len == 0 || closes.len() < period_len + 1 {
        return None;
    }

    let mut gains = Vec::with_capacity(closes.len() - 1);
    let mut losses = Vec::with_capacity(closes.len() - 1);

    for window in closes.windows(2) {
        let change = window[1] - window[0];
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(change.abs());
        }
    }

    let avg_gain: f64 = gains.iter().rev().take(period_len).sum::<f64>() / period as f64;
    let avg_loss: f64 = losses.iter().rev().take(period_len).sum::<f64>() / period as f64;

    let value = if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            NEUTRAL_RSI
        } else {
            100.0
        }
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    };

    Some(RsiIndicator { value, period })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(closes: &[f64]) -> Option<RsiIndicator> {
    calculate_rsi(closes, DEFAULT_RSI_PERIOD)
}
