//! Single-locale message catalog.
//!
//! Templates may contain the `%1` placeholder, which is replaced with the
//! word a message refers to. A catalog can be loaded from a TOML file; any
//! key the file leaves out keeps its English default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const PLACEHOLDER: &str = "%1";

const USAGE_HTML: &str = "<h1>Dictionary API</h1>\
<p>Add the query <i>?word=yourWord</i> to the end of url to search for a word</p>\
<p>Post an object with word and definition to add a new word</p>";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub word_not_found: String,
    pub word_already_exists: String,
    pub word_added: String,
    pub bad_request: String,
    pub invalid_word: String,
    pub invalid_json: String,
    pub not_found: String,
    pub usage: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            word_not_found: "The word %1 was not found in our dictionary".to_string(),
            word_already_exists: "The word %1 already exists in our dictionary".to_string(),
            word_added: "The word %1 was added to our dictionary".to_string(),
            bad_request: "Word or definition is missing".to_string(),
            invalid_word: "Invalid word input.".to_string(),
            invalid_json: "Invalid JSON format.".to_string(),
            not_found: "404 Not Found".to_string(),
            usage: USAGE_HTML.to_string(),
        }
    }
}

impl Messages {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Replaces every `%1` in `template` with `arg`.
    pub fn format(template: &str, arg: &str) -> String {
        template.replace(PLACEHOLDER, arg)
    }

    pub fn word_not_found(&self, word: &str) -> String {
        Self::format(&self.word_not_found, word)
    }

    pub fn word_already_exists(&self, word: &str) -> String {
        Self::format(&self.word_already_exists, word)
    }

    pub fn word_added(&self, word: &str) -> String {
        Self::format(&self.word_added, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_substitution() {
        let messages = Messages::default();

        assert_eq!(
            messages.word_not_found("dog"),
            "The word dog was not found in our dictionary"
        );
        assert_eq!(
            messages.word_already_exists("cat"),
            "The word cat already exists in our dictionary"
        );
        assert_eq!(messages.word_added("owl"), "The word owl was added to our dictionary");
    }

    #[test]
    fn test_format_replaces_every_placeholder() {
        assert_eq!(Messages::format("%1 and %1", "x"), "x and x");
        assert_eq!(Messages::format("no placeholder", "x"), "no placeholder");
    }

    #[test]
    fn test_word_containing_placeholder_is_not_expanded_twice() {
        assert_eq!(Messages::format("[%1]", "%1"), "[%1]");
    }

    #[test]
    fn test_partial_catalog_keeps_defaults() {
        let messages = Messages::from_toml_str(
            r#"
            word_not_found = "Le mot %1 est introuvable"
            "#,
        )
        .unwrap();

        assert_eq!(messages.word_not_found("chat"), "Le mot chat est introuvable");
        assert_eq!(messages.bad_request, Messages::default().bad_request);
        assert_eq!(messages.usage, Messages::default().usage);
    }

    #[test]
    fn test_invalid_catalog_is_rejected() {
        let result = Messages::from_toml_str("word_not_found = [1, 2]");
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.toml");
        std::fs::write(&path, "not_found = \"Nothing here\"\n").unwrap();

        let messages = Messages::from_toml_file(&path).unwrap();
        assert_eq!(messages.not_found, "Nothing here");

        let missing = Messages::from_toml_file(dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(crate::error::DictionaryError::Io(_))));
    }
}
