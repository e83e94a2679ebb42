//! Technical indicators computed over closing prices.

pub mod momentum;

pub use momentum::*;
