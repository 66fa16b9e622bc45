//! AdScout - Conversational digital marketing intake assistant.
//!
//! Binary entrypoint: loads configuration, fails fast on missing
//! credentials or an unusable keyword dataset, wires the adapters to the
//! dialogue engine, and runs the Telegram polling loop.

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adscout::adapters::{
    load_keyword_table, DataboxTrendScraper, InMemorySessionStore, OpenAiCompletionClient,
    OpenAiConfig, TelegramClient, TrendScraperConfig, UpdatePoller,
};
use adscout::application::EventDispatcher;
use adscout::config::AppConfig;
use adscout::domain::intake::DialogueEngine;

use secrecy::ExposeSecret;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adscout=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration: missing credentials or invalid values are fatal.
    let config = AppConfig::load()?;
    config.validate()?;

    // Keyword dataset: unreadable at startup is fatal.
    let dataset_path = Path::new(&config.keywords.dataset_path);
    let keywords = Arc::new(load_keyword_table(dataset_path)?);
    tracing::info!(
        path = %dataset_path.display(),
        rows = keywords.len(),
        "Keyword dataset loaded"
    );

    let store = Arc::new(InMemorySessionStore::new());

    let completion = Arc::new(OpenAiCompletionClient::new(
        OpenAiConfig::new(config.ai.openai_api_key.expose_secret().clone())
            .with_model(&config.ai.model)
            .with_base_url(&config.ai.base_url)
            .with_timeout(config.ai.timeout())
            .with_max_retries(config.ai.max_retries)
            .with_max_answer_tokens(config.ai.max_answer_tokens),
    ));

    let trends = Arc::new(DataboxTrendScraper::new(
        TrendScraperConfig::new(&config.trends.url).with_timeout(config.trends.timeout()),
    ));

    let engine = Arc::new(DialogueEngine::new(store, completion, keywords));
    let dispatcher = EventDispatcher::new(engine, trends);

    let client = TelegramClient::new(
        adscout::adapters::TelegramConfig::new(
            config.telegram.bot_token.expose_secret().clone(),
        )
        .with_api_url(&config.telegram.api_url)
        .with_poll_timeout(config.telegram.poll_timeout_secs),
    );

    tracing::info!(model = %config.ai.model, "AdScout assistant started");

    UpdatePoller::new(client, dispatcher).run().await;

    Ok(())
}
