//! Cron-based scheduler for repeating the batch run

use crate::core::runtime::SignalRuntime;
use chrono::{DateTime, Utc};
use cron::Schedule;
use std::str::FromStr;
use tracing::{info, warn};

/// Repeats [`SignalRuntime::run_once`] on a cron schedule.
///
/// Expressions use the `cron` crate's format with a leading seconds field,
/// e.g. `0 30 21 * * Mon-Fri` for 21:30 UTC on weekdays.
pub struct RunScheduler {
    schedule: Schedule,
    expression: String,
}

impl RunScheduler {
    pub fn new(expression: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let schedule = Schedule::from_str(expression).map_err(|e| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid cron expression '{}': {}", expression, e),
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        info!(cron = %expression, "RunScheduler: created with cron {}", expression);

        Ok(Self {
            schedule,
            expression: expression.to_string(),
        })
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Next scheduled run strictly after `now`.
    pub fn next_run_after(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.schedule.after(&now).next()
    }

    /// Run forever. Returns only if the schedule has no future occurrences.
    pub async fn run(&self, runtime: &SignalRuntime) {
        info!("RunScheduler: started, waiting for cron schedule...");

        loop {
            let now = Utc::now();
            let Some(next_tick) = self.next_run_after(now) else {
                warn!(cron = %self.expression, "RunScheduler: schedule has no future runs, stopping");
                return;
            };

            info!(next_run = %next_tick, "RunScheduler: next run at {}", next_tick);
            let wait = (next_tick - now).to_std().unwrap_or_default();
            tokio::time::sleep(wait).await;

            info!("RunScheduler: cron tick, running batch");
            runtime.run_once().await;
        }
    }
}
