//! Unit tests for the series loader

use crate::common_fixtures::StubProvider;
use std::sync::Arc;
use stockpulse::services::loader::SeriesLoader;

#[test]
fn test_load_returns_series() {
    let provider = Arc::new(StubProvider::new().with_closes("AAPL", vec![1.0, 2.0, 3.0]));
    let loader = SeriesLoader::new(provider.clone());

    let series = tokio_test::block_on(loader.load("AAPL")).expect("series");
    assert_eq!(series.closes(), vec![1.0, 2.0, 3.0]);
    assert_eq!(provider.calls(), vec!["AAPL"]);
}

#[test]
fn test_provider_error_is_absent() {
    let loader = SeriesLoader::new(Arc::new(StubProvider::new()));
    assert!(tokio_test::block_on(loader.load("MISSING")).is_none());
}

#[test]
fn test_outcome_tracks_requests() {
    let loader = SeriesLoader::new(Arc::new(StubProvider::new()));
    let outcome = tokio_test::block_on(loader.load_outcome("MISSING"));
    assert!(outcome.series.is_none());
    assert!(outcome.requested);

    let loader = SeriesLoader::new(Arc::new(StubProvider::new().without_api_key()));
    let outcome = tokio_test::block_on(loader.load_outcome("AAPL"));
    assert!(outcome.series.is_none());
    assert!(!outcome.requested);
}
