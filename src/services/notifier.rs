//! Report delivery interface.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("messaging endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a report. Fire-and-forget: failures are the implementation's
    /// to log and never reach the caller.
    async fn deliver(&self, message: &str);
}
