//! Subscriber setup for the notifier.
//!
//! Output goes to stderr so stdout carries only the report. The format is
//! JSON in production and pretty ANSI text elsewhere; `LOG_FORMAT` overrides
//! the choice.

use crate::config::get_environment;
use std::str::FromStr;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Used when `RUST_LOG` is unset. The HTTP stack is chatty at `info`.
pub const DEFAULT_FILTER: &str = "info,hyper=warn,reqwest=warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// Format implied by `ENVIRONMENT`.
    pub fn for_environment(environment: &str) -> Self {
        match environment.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Json,
            _ => Self::Pretty,
        }
    }

    /// `LOG_FORMAT` if it names a known format, otherwise the environment's.
    pub fn resolve(log_format: Option<&str>, environment: &str) -> Self {
        log_format
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(|| Self::for_environment(environment))
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "text" => Ok(Self::Pretty),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

/// Install the global subscriber and return the format chosen.
///
/// A second call leaves the first subscriber in place.
pub fn init_logging() -> LogFormat {
    let format = LogFormat::resolve(
        std::env::var("LOG_FORMAT").ok().as_deref(),
        &get_environment(),
    );
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    if installed.is_err() {
        tracing::debug!("Logging already initialised");
    }
    format
}
