mod config;
mod dictionary;
mod game;
mod models;
mod storage;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use config::Config;
use dictionary::Dictionary;
use storage::KvStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing on stderr so log lines never land in the game screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_bomb=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Word Bomb...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load dictionary
    let dictionary = match Dictionary::load(&config.game.wordlist_path).await {
        Ok(dict) => dict,
        Err(e) => {
            tracing::warn!(
                "Failed to load word list: {}. Starting with an empty dictionary.",
                e
            );
            tracing::warn!(
                "Put a newline-separated word list at {} for a playable game",
                config.game.wordlist_path
            );
            Dictionary::empty()
        }
    };

    if dictionary.is_empty() {
        tracing::warn!("Dictionary is empty; submissions will never be accepted");
    }

    // Open the score/name store
    let store = KvStore::open(&config.storage.data_path);

    ui::run(config, Arc::new(dictionary), store).await
}
