use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::game::{MAX_PASSES, ROUND_DURATION_SECS};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub wordlist_path: String,
    pub round_seconds: u32,
    pub max_passes: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub data_path: String,
}

impl Config {
    /// Build configuration from the environment. Every key is optional; the
    /// defaults give a playable game with the bundled word list.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let game = GameConfig {
            wordlist_path: env::var("WORDLIST_PATH")
                .unwrap_or_else(|_| "./wordlist.txt".to_string()),
            round_seconds: env::var("ROUND_SECONDS")
                .unwrap_or_else(|_| ROUND_DURATION_SECS.to_string())
                .parse()
                .context("ROUND_SECONDS must be a number")?,
            max_passes: env::var("MAX_PASSES")
                .unwrap_or_else(|_| MAX_PASSES.to_string())
                .parse()
                .context("MAX_PASSES must be a number")?,
        };

        let storage = StorageConfig {
            data_path: env::var("DATA_PATH")
                .unwrap_or_else(|_| "./word_bomb_data.json".to_string()),
        };

        Ok(Config { game, storage })
    }
}
