//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod series;
pub mod signal;

pub use indicators::RsiIndicator;
pub use series::{PricePoint, PriceSeries};
pub use signal::{Signal, SignalEvaluation};
