//! Telegram Bot API client.
//!
//! Thin HTTP wrapper over the two methods this system uses: `getUpdates`
//! (long polling) and `sendMessage`.

use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

use crate::domain::foundation::ChatId;

use super::types::{ApiResponse, OutgoingMessage, Update};

/// Configuration for the Telegram client.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot access token.
    token: Secret<String>,
    /// Base URL of the Bot API.
    pub api_url: String,
    /// Long-poll wait passed to `getUpdates`, in seconds.
    pub poll_timeout_secs: u64,
}

impl TelegramConfig {
    /// Creates a new configuration with the given bot token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Secret::new(token.into()),
            api_url: "https://api.telegram.org".to_string(),
            poll_timeout_secs: 30,
        }
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_poll_timeout(mut self, secs: u64) -> Self {
        self.poll_timeout_secs = secs;
        self
    }

    fn token(&self) -> &str {
        self.token.expose_secret()
    }
}

/// Errors from the Telegram transport.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("Telegram API error: {0}")]
    Api(String),

    #[error("failed to parse Telegram response: {0}")]
    Parse(String),
}

/// HTTP client for the Bot API.
pub struct TelegramClient {
    config: TelegramConfig,
    client: Client,
}

impl TelegramClient {
    pub fn new(config: TelegramConfig) -> Self {
        // The HTTP timeout must outlast the long-poll wait.
        let client = Client::builder()
            .timeout(Duration::from_secs(config.poll_timeout_secs + 10))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Long-poll wait configured for `getUpdates`.
    pub fn poll_timeout_secs(&self) -> u64 {
        self.config.poll_timeout_secs
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.config.api_url,
            self.config.token(),
            method
        )
    }

    /// Fetches updates after `offset`, blocking server-side up to the
    /// configured poll timeout.
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>, TransportError> {
        let response = self
            .client
            .get(self.method_url("getUpdates"))
            .query(&[
                ("offset", offset.to_string()),
                ("timeout", self.config.poll_timeout_secs.to_string()),
            ])
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let envelope: ApiResponse<Vec<Update>> = response
            .json()
            .await
            .map_err(|e| TransportError::Parse(e.to_string()))?;

        if !envelope.ok {
            return Err(TransportError::Api(
                envelope
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        Ok(envelope.result.unwrap_or_default())
    }

    /// Delivers one text message to a chat.
    pub async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<(), TransportError> {
        let body = OutgoingMessage {
            chat_id: chat_id.as_i64(),
            text,
        };

        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let envelope: ApiResponse<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| TransportError::Parse(e.to_string()))?;

        if !envelope.ok {
            return Err(TransportError::Api(
                envelope
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        Ok(())
    }
}
