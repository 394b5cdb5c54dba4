use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Message catalog error: {0}")]
    Catalog(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dictionary worker is not running")]
    QueueClosed,

    #[error("Dictionary worker dropped the reply")]
    ReplyDropped,
}

pub type Result<T> = std::result::Result<T, DictionaryError>;
