//! Telegram transport configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Telegram transport configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot access token
    pub bot_token: Secret<String>,

    /// Bot API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Long-poll wait for getUpdates, in seconds
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout_secs: u64,
}

impl TelegramConfig {
    /// Validate Telegram configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.bot_token.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("TELEGRAM BOT_TOKEN"));
        }
        if !self.api_url.starts_with("http") {
            return Err(ValidationError::InvalidUrl("telegram.api_url"));
        }
        if self.poll_timeout_secs == 0 || self.poll_timeout_secs > 120 {
            return Err(ValidationError::InvalidPollTimeout);
        }
        Ok(())
    }
}

fn default_api_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_poll_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_token(token: &str) -> TelegramConfig {
        TelegramConfig {
            bot_token: Secret::new(token.to_string()),
            api_url: default_api_url(),
            poll_timeout_secs: default_poll_timeout(),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(config_with_token("123:abc").validate().is_ok());
    }

    #[test]
    fn empty_token_fails() {
        assert!(config_with_token("").validate().is_err());
    }

    #[test]
    fn bad_api_url_fails() {
        let mut config = config_with_token("123:abc");
        config.api_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_poll_timeout_fails() {
        let mut config = config_with_token("123:abc");
        config.poll_timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
