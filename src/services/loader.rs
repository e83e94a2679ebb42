//! Series loader: turns every provider failure into an absent series.

use crate::models::series::PriceSeries;
use crate::services::market_data::PriceHistoryProvider;
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of a single load.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub series: Option<PriceSeries>,
    /// False when the provider refused the ticker without contacting its API.
    pub requested: bool,
}

/// Wraps a [`PriceHistoryProvider`] so that a bad ticker never aborts a batch.
///
/// Missing data, transport errors and malformed bodies all come back as
/// `None`. The cause is logged, since it is otherwise invisible in the report.
#[derive(Clone)]
pub struct SeriesLoader {
    provider: Arc<dyn PriceHistoryProvider>,
}

impl SeriesLoader {
    pub fn new(provider: Arc<dyn PriceHistoryProvider>) -> Self {
        Self { provider }
    }

    pub async fn load(&self, ticker: &str) -> Option<PriceSeries> {
        self.load_outcome(ticker).await.series
    }

    /// Like [`load`](Self::load), also reporting whether the provider was hit.
    pub async fn load_outcome(&self, ticker: &str) -> LoadOutcome {
        match self.provider.get_daily_series(ticker).await {
            Ok(series) => {
                debug!(symbol = %ticker, count = series.len(), "Loaded series for {}", ticker);
                LoadOutcome {
                    series: Some(series),
                    requested: true,
                }
            }
            Err(e) => {
                warn!(symbol = %ticker, error = %e, "No usable price history for {}", ticker);
                LoadOutcome {
                    series: None,
                    requested: !e.is_local(),
                }
            }
        }
    }
}
