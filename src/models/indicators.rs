use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: u32,
}

impl RsiIndicator {
    /// RSI rounded to two decimals, for display only.
    pub fn rounded(&self) -> f64 {
        (self.value * 100.0).round() / 100.0
    }
}
