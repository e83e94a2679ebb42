//! Telegram Bot API delivery.

use crate::config::Config;
use crate::services::notifier::{DeliveryError, Notifier};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

const PARSE_MODE: &str = "Markdown";

/// Longest text the Bot API accepts in one message, in UTF-16 code units.
pub const MAX_MESSAGE_LEN: usize = 4096;

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

pub struct TelegramNotifier {
    client: Client,
    base_url: Url,
    token: Option<String>,
    chat_id: Option<String>,
    timeout: Duration,
}

impl TelegramNotifier {
    pub fn new(config: &Config) -> Self {
        Self::with_client(
            config.telegram_api_base_url.clone(),
            config.telegram_token.clone(),
            config.telegram_chat_id.clone(),
            config.request_timeout,
            Client::new(),
        )
    }

    pub fn with_client(
        base_url: Url,
        token: Option<String>,
        chat_id: Option<String>,
        timeout: Duration,
        client: Client,
    ) -> Self {
        Self {
            client,
            base_url,
            token,
            chat_id,
            timeout,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.token.is_some() && self.chat_id.is_some()
    }

    /// Send `text` to the configured chat, split into several messages when it
    /// exceeds [`MAX_MESSAGE_LEN`]. Does nothing when either credential is
    /// missing. Stops at the first part that fails.
    pub async fn send_message(&self, text: &str) -> Result<(), DeliveryError> {
        let (Some(token), Some(chat_id)) = (self.token.as_deref(), self.chat_id.as_deref()) else {
            debug!("Telegram credentials not configured, skipping delivery");
            return Ok(());
        };

        // The token is part of the path; never log this URL.
        let url = format!(
            "{}/bot{}/sendMessage",
            self.base_url.as_str().trim_end_matches('/'),
            token
        );

        let parts = split_message(text, MAX_MESSAGE_LEN);
        if parts.len() > 1 {
            debug!(parts = parts.len(), "Report exceeds {} units, splitting", MAX_MESSAGE_LEN);
        }

        for part in &parts {
            let response = self
                .client
                .post(url.as_str())
                .json(&SendMessageRequest {
                    chat_id,
                    text: part,
                    parse_mode: PARSE_MODE,
                })
                .timeout(self.timeout)
                .send()
                .await
                .map_err(|e| DeliveryError::Request(e.without_url()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(DeliveryError::Status(status));
            }
        }

        Ok(())
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn deliver(&self, message: &str) {
        if !self.is_enabled() {
            debug!("Delivery disabled");
            return;
        }

        match self.send_message(message).await {
            Ok(()) => info!(chars = message.chars().count(), "Report delivered"),
            Err(e) => warn!(error = %e, "Report delivery failed"),
        }
    }
}

/// Split `text` into parts of at most `limit` UTF-16 units.
///
/// Breaks fall on line ends so Markdown spans stay whole; only a single line
/// longer than `limit` is cut mid-line. Concatenating the parts gives back
/// `text`.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    // A surrogate pair must fit in one part.
    let limit = limit.max(2);
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.split_inclusive('\n') {
        let line_len: usize = line.chars().map(char::len_utf16).sum();
        if current_len + line_len > limit && !current.is_empty() {
            parts.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if line_len <= limit {
            current.push_str(line);
            current_len += line_len;
            continue;
        }

        for ch in line.chars() {
            let width = ch.len_utf16();
            if current_len + width > limit {
                parts.push(std::mem::take(&mut current));
                current_len = 0;
            }
            current.push(ch);
            current_len += width;
        }
    }

    if !current.is_empty() || parts.is_empty() {
        parts.push(current);
    }
    parts
}
