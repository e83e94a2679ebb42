//! Unit tests for signal engine

use crate::common_fixtures::{
    closes_with_window, series_from_closes, window_rsi_20, window_rsi_50, window_rsi_80,
};
use stockpulse::models::signal::Signal;
use stockpulse::signals::engine::{SignalEngine, MIN_SERIES_LEN};

#[test]
fn test_evaluate_insufficient_data() {
    let closes: Vec<f64> = (0..29).map(|i| 100.0 + i as f64).collect();
    let series = series_from_closes(&closes);
    assert!(SignalEngine::default().evaluate("AAPL", &series).is_none());
}

#[test]
fn test_evaluate_minimum_length() {
    let closes: Vec<f64> = (0..MIN_SERIES_LEN).map(|i| 100.0 + i as f64).collect();
    let series = series_from_closes(&closes);
    assert!(SignalEngine::default().evaluate("AAPL", &series).is_some());
}

#[test]
fn test_uptrend_is_sell() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64 * 0.5).collect();
    let series = series_from_closes(&closes);

    let evaluation = SignalEngine::default().evaluate("MSFT", &series).unwrap();
    assert_eq!(evaluation.symbol, "MSFT");
    assert_eq!(evaluation.rsi.value, 100.0);
    assert_eq!(evaluation.signal, Signal::Sell);
    assert_eq!(evaluation.price, 119.5);
    assert_eq!(evaluation.as_of, series.latest().timestamp);
}

#[test]
fn test_downtrend_is_buy() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 - i as f64 * 0.5).collect();
    let evaluation = SignalEngine::default()
        .evaluate("NVDA", &series_from_closes(&closes))
        .unwrap();
    assert_eq!(evaluation.rsi.value, 0.0);
    assert_eq!(evaluation.signal, Signal::Buy);
}

#[test]
fn test_flat_series_is_hold() {
    let evaluation = SignalEngine::default()
        .evaluate("AMZN", &series_from_closes(&[150.0; 35]))
        .unwrap();
    assert_eq!(evaluation.rsi.value, 50.0);
    assert_eq!(evaluation.signal, Signal::Hold);
}

#[test]
fn test_signal_follows_rsi_bands() {
    let engine = SignalEngine::default();
    let cases = [
        (window_rsi_20(), Signal::Buy),
        (window_rsi_50(), Signal::Hold),
        (window_rsi_80(), Signal::Sell),
    ];

    for (window, expected) in cases {
        let series = series_from_closes(&closes_with_window(window));
        let evaluation = engine.evaluate("GOOGL", &series).unwrap();
        assert_eq!(evaluation.signal, expected, "rsi {}", evaluation.rsi.value);
    }
}
