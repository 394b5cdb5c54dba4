//! Dictionary lookups and inserts with request accounting.
//!
//! Every `search` and `store` call advances the request counter before any
//! validation, so rejected calls are counted too. The usage page and
//! malformed bodies never reach this type and are not counted.

use std::sync::Arc;

use tracing::{debug, info};

use super::{Dictionary, Entry, Messages, RequestCounter, SearchOutcome, StoreOutcome};

pub struct DictionaryService {
    dictionary: Dictionary,
    counter: RequestCounter,
    messages: Arc<Messages>,
}

impl DictionaryService {
    pub fn new(messages: Arc<Messages>) -> Self {
        Self {
            dictionary: Dictionary::new(),
            counter: RequestCounter::new(),
            messages,
        }
    }

    /// Shared handle onto this service's request counter.
    pub fn counter(&self) -> RequestCounter {
        self.counter.clone()
    }

    pub fn request_count(&self) -> u64 {
        self.counter.current()
    }

    pub fn word_count(&self) -> usize {
        self.dictionary.len()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Looks up `word` by exact match.
    pub fn search(&self, word: &str) -> SearchOutcome {
        let request_count = self.counter.increment();

        if word.is_empty() {
            return SearchOutcome::BadRequest {
                message: self.messages.invalid_word.clone(),
                request_count,
            };
        }

        match self.dictionary.get(word) {
            Some(entry) => SearchOutcome::Success {
                definition: entry.clone(),
                request_count,
            },
            None => {
                debug!(word, request_count, "Word not found");
                SearchOutcome::Warning {
                    message: self.messages.word_not_found(word),
                    request_count,
                }
            }
        }
    }

    /// Adds a new entry. An existing word is never overwritten.
    pub fn store(&mut self, word: &str, definition: &str) -> StoreOutcome {
        let request_count = self.counter.increment();

        if word.is_empty() || definition.is_empty() {
            return StoreOutcome::BadRequest {
                message: self.messages.bad_request.clone(),
                request_count,
            };
        }

        if !self.dictionary.insert(Entry::new(word, definition)) {
            return StoreOutcome::Warning {
                message: self.messages.word_already_exists(word),
                request_count,
            };
        }

        let word_count = self.dictionary.len();
        info!(word_count, request_count, "{}", self.messages.word_added(word));

        StoreOutcome::Success {
            word: word.to_string(),
            definition: definition.to_string(),
            word_count,
            request_count,
        }
    }
}

impl Default for DictionaryService {
    fn default() -> Self {
        Self::new(Arc::new(Messages::default()))
    }
}
