pub mod config;
pub mod dictionary;
pub mod error;
pub mod http;

pub use config::ServerConfig;
pub use dictionary::{
    DefinitionField, Dictionary, DictionaryService, Entry, Envelope, EnvelopeType, Messages,
    OutcomeKind, RequestCounter, SearchOutcome, ServiceHandle, StoreOutcome,
};
pub use error::{DictionaryError, Result};
pub use http::{build_router, AppState, DEFINITIONS_PATH};
