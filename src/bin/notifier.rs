//! Stockpulse Notifier
//!
//! Fetches daily closes for the configured tickers, computes RSI signals and
//! sends the report to Telegram. Runs once and exits, or repeats on a cron
//! schedule when SCHEDULE_CRON is set.

use dotenvy::dotenv;
use std::sync::Arc;
use stockpulse::config::{self, Config};
use stockpulse::core::runtime::{RuntimeConfig, SignalRuntime};
use stockpulse::core::scheduler::RunScheduler;
use stockpulse::logging;
use stockpulse::services::market_data::PriceHistoryProvider;
use stockpulse::services::notifier::Notifier;
use stockpulse::services::{TelegramNotifier, TwelveDataClient};
use tokio::signal;
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    let log_format = logging::init_logging();

    let config = Config::from_env();
    info!(
        environment = %config::get_environment(),
        log_format = ?log_format,
        "Starting Stockpulse Notifier"
    );
    info!(
        api_key_present = config.twelve_data_api_key.is_some(),
        telegram_token_present = config.telegram_token.is_some(),
        chat_id_present = config.telegram_chat_id.is_some(),
        "Credentials"
    );
    info!(symbols = ?config.symbols, "Symbols: {}", config.symbols.join(", "));

    if config.twelve_data_api_key.is_none() {
        warn!("TWELVE_DATA_API_KEY is not set - no price data will be loaded");
    }
    if !config.delivery_enabled() {
        warn!("Telegram credentials not set - report will only be printed");
    }

    let provider: Arc<dyn PriceHistoryProvider> = Arc::new(TwelveDataClient::new(&config));
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(&config));
    let runtime = SignalRuntime::new(RuntimeConfig::from(&config), provider, notifier);

    let scheduler = match config.schedule.as_deref() {
        Some(expression) => match RunScheduler::new(expression) {
            Ok(scheduler) => Some(scheduler),
            Err(e) => {
                warn!(error = %e, "Ignoring SCHEDULE_CRON, running once");
                None
            }
        },
        None => None,
    };

    match scheduler {
        Some(scheduler) => {
            info!(cron = %scheduler.expression(), "Scheduled mode");
            tokio::select! {
                _ = scheduler.run(&runtime) => {
                    info!("Scheduler finished");
                }
                _ = signal::ctrl_c() => {
                    info!("Shutting down...");
                }
            }
        }
        None => {
            runtime.run_once().await;
        }
    }

    Ok(())
}
