use crate::models::ScoreEntry;
use crate::storage::{KvStore, StorageError};

/// Key holding the JSON array of score records
pub const SCORES_KEY: &str = "leaderboard";
/// Key holding the last-entered player name
pub const PLAYER_NAME_KEY: &str = "playerName";
/// Leaderboard display cap
pub const LEADERBOARD_LIMIT: usize = 10;

/// Append a finished session's result to the stored score list.
///
/// A corrupt stored list is logged and replaced with a fresh one rather than
/// failing the write.
pub fn append_score(store: &mut KvStore, name: &str, score: u32) -> Result<(), StorageError> {
    let mut scores = load_scores(store);
    scores.push(ScoreEntry {
        name: name.to_string(),
        score,
    });
    store.set(SCORES_KEY, &serde_json::to_string(&scores)?)
}

/// Top scores, best first, capped at [`LEADERBOARD_LIMIT`].
/// Ties keep their stored order.
pub fn top_scores(store: &KvStore) -> Vec<ScoreEntry> {
    let mut scores = load_scores(store);
    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores.truncate(LEADERBOARD_LIMIT);
    scores
}

/// The stored player name, if one has been entered
pub fn player_name(store: &KvStore) -> Option<String> {
    store
        .get(PLAYER_NAME_KEY)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

pub fn set_player_name(store: &mut KvStore, name: &str) -> Result<(), StorageError> {
    store.set(PLAYER_NAME_KEY, name)
}

fn load_scores(store: &KvStore) -> Vec<ScoreEntry> {
    let Some(raw) = store.get(SCORES_KEY) else {
        return Vec::new();
    };

    match serde_json::from_str(raw) {
        Ok(scores) => scores,
        Err(e) => {
            tracing::warn!("Stored score list is unreadable ({}); treating as empty", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_store(dir: &tempfile::TempDir) -> KvStore {
        KvStore::open(dir.path().join("data.json"))
    }

    #[test]
    fn test_no_records_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        assert!(top_scores(&store).is_empty());
    }

    #[test]
    fn test_append_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir);

        append_score(&mut store, "alice", 5).unwrap();
        append_score(&mut store, "bob", 9).unwrap();

        let scores = top_scores(&store);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].name, "bob");
        assert_eq!(scores[1].name, "alice");
    }

    #[test]
    fn test_sorted_descending_with_ties() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir);

        append_score(&mut store, "a", 5).unwrap();
        append_score(&mut store, "b", 9).unwrap();
        append_score(&mut store, "c", 9).unwrap();

        let scores = top_scores(&store);
        // Both 9s come before the 5; order between the ties is unspecified
        assert_eq!(scores[0].score, 9);
        assert_eq!(scores[1].score, 9);
        assert_eq!(scores[2].name, "a");
    }

    #[test]
    fn test_leaderboard_is_capped() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir);

        for i in 0..15u32 {
            append_score(&mut store, &format!("player{}", i), i).unwrap();
        }

        let scores = top_scores(&store);
        assert_eq!(scores.len(), LEADERBOARD_LIMIT);
        assert_eq!(scores[0].score, 14);
        assert_eq!(scores.last().unwrap().score, 5);
    }

    #[test]
    fn test_corrupt_score_list_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir);
        store.set(SCORES_KEY, "not an array").unwrap();

        assert!(top_scores(&store).is_empty());

        // Appending over the corrupt value starts a fresh list
        append_score(&mut store, "alice", 3).unwrap();
        let scores = top_scores(&store);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0], ScoreEntry { name: "alice".to_string(), score: 3 });
    }

    #[test]
    fn test_player_name_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir);

        assert!(player_name(&store).is_none());
        set_player_name(&mut store, "alice").unwrap();
        assert_eq!(player_name(&store).as_deref(), Some("alice"));

        // An empty stored name reads back as no name
        set_player_name(&mut store, "").unwrap();
        assert!(player_name(&store).is_none());
    }
}
