//! Sequential batch driver: load, evaluate, report, deliver.

use crate::config::{Config, DEFAULT_REQUEST_DELAY_SECONDS, DEFAULT_SYMBOLS};
use crate::models::series::PriceSeries;
use crate::models::signal::SignalEvaluation;
use crate::report::ReportBuilder;
use crate::services::loader::SeriesLoader;
use crate::services::market_data::PriceHistoryProvider;
use crate::services::notifier::Notifier;
use crate::signals::engine::{SignalEngine, MIN_SERIES_LEN};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Configuration for the batch driver
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub symbols: Vec<String>,
    /// Pause between consecutive tickers, for the provider's rate limit.
    pub request_delay: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            request_delay: Duration::from_secs(DEFAULT_REQUEST_DELAY_SECONDS),
        }
    }
}

impl From<&Config> for RuntimeConfig {
    fn from(config: &Config) -> Self {
        Self {
            symbols: config.symbols.clone(),
            request_delay: config.request_delay,
        }
    }
}

pub struct SignalRuntime {
    config: RuntimeConfig,
    loader: SeriesLoader,
    engine: SignalEngine,
    notifier: Arc<dyn Notifier>,
}

impl SignalRuntime {
    pub fn new(
        config: RuntimeConfig,
        provider: Arc<dyn PriceHistoryProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            loader: SeriesLoader::new(provider),
            engine: SignalEngine::default(),
            notifier,
        }
    }

    /// Evaluate every configured ticker in order, skipping those without
    /// enough data.
    pub async fn evaluate_all(&self) -> Vec<SignalEvaluation> {
        let mut evaluations = Vec::new();
        let total = self.config.symbols.len();

        for (index, symbol) in self.config.symbols.iter().enumerate() {
            let outcome = self.loader.load_outcome(symbol).await;
            let evaluation = outcome
                .series
                .as_ref()
                .and_then(|series| self.evaluate_series(symbol, series));

            if let Some(evaluation) = evaluation {
                info!(
                    symbol = %symbol,
                    price = evaluation.price,
                    rsi = evaluation.rsi.value,
                    signal = %evaluation.signal,
                    "{}: RSI {:.2} -> {}",
                    symbol,
                    evaluation.rsi.value,
                    evaluation.signal
                );
                evaluations.push(evaluation);
            }

            // The pause only paces real requests.
            if outcome.requested && index + 1 < total && !self.config.request_delay.is_zero() {
                debug!(delay_ms = self.config.request_delay.as_millis() as u64, "Pausing before next ticker");
                tokio::time::sleep(self.config.request_delay).await;
            }
        }

        evaluations
    }

    fn evaluate_series(&self, symbol: &str, series: &PriceSeries) -> Option<SignalEvaluation> {
        if series.len() < MIN_SERIES_LEN {
            info!(
                symbol = %symbol,
                count = series.len(),
                min = MIN_SERIES_LEN,
                "Skipping {}: not enough closes ({} < {})",
                symbol,
                series.len(),
                MIN_SERIES_LEN
            );
            return None;
        }

        self.engine.evaluate(symbol, series)
    }

    /// Run the batch and return the report text without delivering it.
    pub async fn build_report(&self) -> String {
        let evaluations = self.evaluate_all().await;
        info!(
            evaluated = evaluations.len(),
            configured = self.config.symbols.len(),
            "Evaluated {} of {} tickers",
            evaluations.len(),
            self.config.symbols.len()
        );
        evaluations.iter().collect::<ReportBuilder>().build()
    }

    /// Run the batch, write the report to stdout, then hand it to the notifier.
    pub async fn run_once(&self) -> String {
        let report = self.build_report().await;
        println!("{}", report);
        self.notifier.deliver(&report).await;
        report
    }
}
