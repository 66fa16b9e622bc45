//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `ADSCOUT` prefix and nested values use `__` as the separator.
//!
//! # Example
//!
//! ```no_run
//! use adscout::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod error;
mod keywords;
mod telegram;
mod trends;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use keywords::KeywordsConfig;
pub use telegram::TelegramConfig;
pub use trends::TrendsConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Telegram transport (bot token, API URL, poll timeout)
    pub telegram: TelegramConfig,

    /// Completion service (OpenAI key, model, timeout)
    pub ai: AiConfig,

    /// Keyword dataset location
    #[serde(default)]
    pub keywords: KeywordsConfig,

    /// Trend scraper (benchmarks URL, timeout)
    #[serde(default)]
    pub trends: TrendsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `ADSCOUT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `ADSCOUT__TELEGRAM__BOT_TOKEN=...` -> `telegram.bot_token = ...`
    /// - `ADSCOUT__AI__OPENAI_API_KEY=...` -> `ai.openai_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ADSCOUT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.telegram.validate()?;
        self.ai.validate()?;
        self.keywords.validate()?;
        self.trends.validate()?;
        Ok(())
    }
}
