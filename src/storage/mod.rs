use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

pub mod queries;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// File-backed string key-value store.
///
/// The whole store is one JSON object on disk, rewritten atomically on every
/// `set`. Reads are served from memory. A missing or unreadable file opens as
/// an empty store; unparsable contents are discarded with a warning, which is
/// the "corrupt value means no records" rule applied at the file level.
pub struct KvStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl KvStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match File::open(&path) {
            Ok(file) => match serde_json::from_reader(BufReader::new(file)) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(
                        "Data file {} is not valid JSON ({}); starting empty",
                        path.display(),
                        e
                    );
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                tracing::warn!(
                    "Could not read data file {} ({}); starting empty",
                    path.display(),
                    e
                );
                HashMap::new()
            }
        };

        Self { path, entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Store a value and flush the whole map to disk
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn flush(&self) -> Result<(), StorageError> {
        let parent_dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent_dir)?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            serde_json::to_writer(&mut writer, &self.entries)?;
            writer.flush()?;
        }
        temp_file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = KvStore::open(dir.path().join("data.json"));
        assert!(store.get("anything").is_none());
    }

    #[test]
    fn test_set_then_reopen_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let mut store = KvStore::open(&path);
        store.set("playerName", "alice").unwrap();
        store.set("other", "value").unwrap();

        let reopened = KvStore::open(&path);
        assert_eq!(reopened.get("playerName"), Some("alice"));
        assert_eq!(reopened.get("other"), Some("value"));
    }

    #[test]
    fn test_set_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let mut store = KvStore::open(&path);
        store.set("key", "one").unwrap();
        store.set("key", "two").unwrap();
        assert_eq!(store.get("key"), Some("two"));

        let reopened = KvStore::open(&path);
        assert_eq!(reopened.get("key"), Some("two"));
    }

    #[test]
    fn test_corrupt_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{not json at all").unwrap();

        let store = KvStore::open(&path);
        assert!(store.get("key").is_none());
    }
}
