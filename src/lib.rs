//! Daily RSI signals for a fixed list of equities, delivered as a chat report.

pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;
pub mod signals;
