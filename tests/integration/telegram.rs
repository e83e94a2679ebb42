//! Integration tests for Telegram delivery.

use crate::test_utils::{mock_send_message, server_url, telegram_notifier, BOT_TOKEN, CHAT_ID};
use serde_json::Value;
use std::time::Duration;
use stockpulse::services::notifier::{DeliveryError, Notifier};
use stockpulse::services::telegram::MAX_MESSAGE_LEN;
use stockpulse::services::TelegramNotifier;
use wiremock::MockServer;

#[tokio::test]
async fn sends_markdown_message_to_chat() {
    let server = MockServer::start().await;
    mock_send_message(&server, 200).await;

    let notifier = telegram_notifier(&server);
    notifier.deliver("📊 *Daily Stock Update*\n\nAAPL").await;

    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), format!("/bot{}/sendMessage", BOT_TOKEN));

    let body: Value = serde_json::from_slice(&requests[0].body).expect("json body");
    assert_eq!(body["chat_id"], CHAT_ID);
    assert_eq!(body["text"], "📊 *Daily Stock Update*\n\nAAPL");
    assert_eq!(body["parse_mode"], "Markdown");
}

#[tokio::test]
async fn missing_credentials_disable_delivery() {
    let server = MockServer::start().await;
    mock_send_message(&server, 200).await;

    let notifier = TelegramNotifier::with_client(
        server_url(&server),
        Some(BOT_TOKEN.to_string()),
        None,
        Duration::from_secs(5),
        reqwest::Client::new(),
    );
    assert!(!notifier.is_enabled());
    notifier.deliver("report").await;

    let requests = server.received_requests().await.expect("recorded requests");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn server_error_is_swallowed_by_deliver() {
    let server = MockServer::start().await;
    mock_send_message(&server, 500).await;

    let notifier = telegram_notifier(&server);

    let err = notifier.send_message("report").await.unwrap_err();
    assert!(matches!(err, DeliveryError::Status(status) if status.as_u16() == 500));

    // Fire-and-forget: returns normally.
    notifier.deliver("report").await;

    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn long_report_is_sent_in_parts() {
    let server = MockServer::start().await;
    mock_send_message(&server, 200).await;

    let blocks: Vec<String> = (0..200)
        .map(|i| format!("T{:03}\nPrice: $100.00\nRSI: 50.00\nSignal: HOLD 😐\n", i))
        .collect();
    let report = format!("📊 *Daily Stock Update*\n\n{}", blocks.join("\n"));
    assert!(report.encode_utf16().count() > MAX_MESSAGE_LEN);

    let notifier = telegram_notifier(&server);
    notifier.send_message(&report).await.expect("delivered");

    let requests = server.received_requests().await.expect("recorded requests");
    assert!(requests.len() > 1);

    let texts: Vec<String> = requests
        .iter()
        .map(|r| {
            let body: Value = serde_json::from_slice(&r.body).expect("json body");
            body["text"].as_str().expect("text").to_string()
        })
        .collect();
    assert!(texts.iter().all(|t| t.encode_utf16().count() <= MAX_MESSAGE_LEN));
    assert!(texts[0].starts_with("📊 *Daily Stock Update*"));
    assert_eq!(texts.concat(), report);
}
