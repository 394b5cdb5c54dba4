use serde::{Deserialize, Serialize};

use super::Entry;

/// Classification shared by every operation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    /// Valid request that could not be acted on (unknown or duplicate word).
    Warning,
    BadRequest,
}

/// Result of looking up a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Success { definition: Entry, request_count: u64 },
    Warning { message: String, request_count: u64 },
    BadRequest { message: String, request_count: u64 },
}

impl SearchOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            SearchOutcome::Success { .. } => OutcomeKind::Success,
            SearchOutcome::Warning { .. } => OutcomeKind::Warning,
            SearchOutcome::BadRequest { .. } => OutcomeKind::BadRequest,
        }
    }

    pub fn request_count(&self) -> u64 {
        match self {
            SearchOutcome::Success { request_count, .. }
            | SearchOutcome::Warning { request_count, .. }
            | SearchOutcome::BadRequest { request_count, .. } => *request_count,
        }
    }
}

/// Result of inserting a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome {
    Success {
        word: String,
        definition: String,
        word_count: usize,
        request_count: u64,
    },
    Warning { message: String, request_count: u64 },
    BadRequest { message: String, request_count: u64 },
}

impl StoreOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            StoreOutcome::Success { .. } => OutcomeKind::Success,
            StoreOutcome::Warning { .. } => OutcomeKind::Warning,
            StoreOutcome::BadRequest { .. } => OutcomeKind::BadRequest,
        }
    }

    pub fn request_count(&self) -> u64 {
        match self {
            StoreOutcome::Success { request_count, .. }
            | StoreOutcome::Warning { request_count, .. }
            | StoreOutcome::BadRequest { request_count, .. } => *request_count,
        }
    }
}

// =====================================================
// Wire envelope
// =====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeType {
    Success,
    Warning,
    Error,
}

/// Search answers with the whole entry, store echoes the definition text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefinitionField {
    Entry(Entry),
    Text(String),
}

/// JSON body of every dictionary response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: EnvelopeType,
    pub request_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<DefinitionField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
}

impl Envelope {
    fn new(kind: EnvelopeType, request_count: u64) -> Self {
        Self {
            kind,
            request_count,
            message: None,
            word: None,
            definition: None,
            word_count: None,
        }
    }

    pub fn success(request_count: u64) -> Self {
        Self::new(EnvelopeType::Success, request_count)
    }

    pub fn warning(request_count: u64, message: impl Into<String>) -> Self {
        Self::new(EnvelopeType::Warning, request_count).with_message(message)
    }

    pub fn error(request_count: u64, message: impl Into<String>) -> Self {
        Self::new(EnvelopeType::Error, request_count).with_message(message)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_word(mut self, word: impl Into<String>) -> Self {
        self.word = Some(word.into());
        self
    }

    pub fn with_definition(mut self, definition: DefinitionField) -> Self {
        self.definition = Some(definition);
        self
    }

    pub fn with_word_count(mut self, word_count: usize) -> Self {
        self.word_count = Some(word_count);
        self
    }
}

impl From<SearchOutcome> for Envelope {
    fn from(outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::Success {
                definition,
                request_count,
            } => Envelope::success(request_count).with_definition(DefinitionField::Entry(definition)),
            SearchOutcome::Warning {
                message,
                request_count,
            } => Envelope::warning(request_count, message),
            SearchOutcome::BadRequest {
                message,
                request_count,
            } => Envelope::error(request_count, message),
        }
    }
}

impl From<StoreOutcome> for Envelope {
    fn from(outcome: StoreOutcome) -> Self {
        match outcome {
            StoreOutcome::Success {
                word,
                definition,
                word_count,
                request_count,
            } => Envelope::success(request_count)
                .with_word(word)
                .with_definition(DefinitionField::Text(definition))
                .with_word_count(word_count),
            StoreOutcome::Warning {
                message,
                request_count,
            } => Envelope::warning(request_count, message),
            StoreOutcome::BadRequest {
                message,
                request_count,
            } => Envelope::error(request_count, message),
        }
    }
}
