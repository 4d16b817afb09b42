use serde::{Deserialize, Serialize};

/// One leaderboard record. Field names match the stored JSON
/// (`[{"name": "...", "score": 3}, ...]` under the leaderboard key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}
