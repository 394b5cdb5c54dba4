//! In-memory word dictionary.
//!
//! Entries are kept in insertion order and indexed by their exact,
//! case-sensitive word. An entry is never overwritten or removed once stored.

pub mod counter;
pub mod envelope;
pub mod handle;
pub mod messages;
pub mod service;

use std::collections::hash_map::{self, HashMap};

use serde::{Deserialize, Serialize};

pub use counter::RequestCounter;
pub use envelope::{
    DefinitionField, Envelope, EnvelopeType, OutcomeKind, SearchOutcome, StoreOutcome,
};
pub use handle::ServiceHandle;
pub use messages::Messages;
pub use service::DictionaryService;

/// One word and its definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    pub definition: String,
}

impl Entry {
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }
}

/// Insertion-ordered mapping from word to [`Entry`].
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<Entry>,
    positions: HashMap<String, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, word: &str) -> Option<&Entry> {
        self.positions.get(word).map(|&idx| &self.entries[idx])
    }

    /// Adds `entry` unless its word is already present.
    ///
    /// Returns `false` and leaves the existing entry untouched on a duplicate.
    pub fn insert(&mut self, entry: Entry) -> bool {
        match self.positions.entry(entry.word.clone()) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(slot) => {
                slot.insert(self.entries.len());
                self.entries.push(entry);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order they were first stored.
    #[cfg(test)]
    fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut dictionary = Dictionary::new();
        assert!(dictionary.is_empty());

        assert!(dictionary.insert(Entry::new("cat", "a feline")));

        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.get("cat"), Some(&Entry::new("cat", "a feline")));
        assert!(dictionary.get("dog").is_none());
    }

    #[test]
    fn test_duplicate_insert_keeps_original() {
        let mut dictionary = Dictionary::new();
        dictionary.insert(Entry::new("cat", "a feline"));

        assert!(!dictionary.insert(Entry::new("cat", "something else")));

        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.get("cat").unwrap().definition, "a feline");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut dictionary = Dictionary::new();
        dictionary.insert(Entry::new("Cat", "a capitalised feline"));

        assert!(dictionary.get("cat").is_none());
        assert!(dictionary.insert(Entry::new("cat", "a feline")));
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut dictionary = Dictionary::new();
        for word in ["zebra", "apple", "mango"] {
            dictionary.insert(Entry::new(word, "fruit or animal"));
        }

        let words: Vec<&str> = dictionary.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["zebra", "apple", "mango"]);
    }
}
