use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use tokio::fs;
use anyhow::Result;

pub struct Dictionary {
    words: HashSet<String>,
    prefixes: Vec<String>,
}

impl Dictionary {
    /// Load dictionary from a newline-separated word list file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let dict = Self::from_words(content.lines());

        tracing::info!(
            "Loaded {} words into dictionary ({} prompt prefixes)",
            dict.len(),
            dict.prefixes.len()
        );

        Ok(dict)
    }

    /// Build a dictionary from an in-memory word sequence
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        let prefixes = derive_prefixes(&words);

        Self { words, prefixes }
    }

    /// Create an empty dictionary (degraded startup and testing)
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
            prefixes: Vec::new(),
        }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.trim().to_lowercase())
    }

    /// Distinct 2-letter word starts usable as prompts, sorted
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Collect the deduplicated first-two-letter prefixes of all words.
/// Entries whose first two characters are not ASCII letters contribute nothing.
fn derive_prefixes(words: &HashSet<String>) -> Vec<String> {
    let set: BTreeSet<String> = words
        .iter()
        .filter_map(|word| {
            let mut chars = word.chars();
            let first = chars.next()?;
            let second = chars.next()?;
            if first.is_ascii_alphabetic() && second.is_ascii_alphabetic() {
                Some([first, second].iter().collect())
            } else {
                None
            }
        })
        .collect();

    set.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::empty();
        assert!(dict.is_empty());
        assert!(!dict.contains("test"));
        assert!(dict.prefixes().is_empty());
    }

    #[test]
    fn test_normalization() {
        let dict = Dictionary::from_words(["  Cat ", "DOG", "dog", ""]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("cat"));
        assert!(dict.contains("Dog"));
        assert!(dict.contains(" dog "));
        assert!(!dict.contains("bird"));
    }

    #[test]
    fn test_prefixes_are_word_heads() {
        let dict = Dictionary::from_words(["cat", "car", "dog", "an"]);
        assert_eq!(dict.prefixes(), &["an", "ca", "do"]);
    }

    #[test]
    fn test_prefixes_exclude_malformed_entries() {
        // Entries that are too short or start with non-letters stay in the word
        // set but never become prompts
        let dict = Dictionary::from_words(["a", "4x4", "e-mail", "it's", "okay"]);
        assert_eq!(dict.prefixes(), &["it", "ok"]);
        assert!(dict.contains("4x4"));
        assert!(dict.contains("a"));
    }

    #[test]
    fn test_prefix_invariant() {
        let dict = Dictionary::from_words(["apple", "apt", "banana", "cot", "x1"]);
        for prefix in dict.prefixes() {
            assert_eq!(prefix.chars().count(), 2);
            assert!(prefix
                .chars()
                .all(|c| c.is_ascii_alphabetic() && c.is_ascii_lowercase()));
            assert!(
                dict.words.iter().any(|w| w.starts_with(prefix.as_str())),
                "prefix '{}' does not start any word",
                prefix
            );
        }
    }

    #[tokio::test]
    async fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Apple\n  pear\n\nPLUM").unwrap();

        let dict = Dictionary::load(file.path()).await.unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("apple"));
        assert!(dict.contains("pear"));
        assert_eq!(dict.prefixes(), &["ap", "pe", "pl"]);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        assert!(Dictionary::load("/nonexistent/wordlist.txt").await.is_err());
    }
}
