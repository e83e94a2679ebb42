//! Signal evaluation interfaces.

pub mod engine;
pub mod thresholds;

pub use engine::*;
pub use thresholds::*;
