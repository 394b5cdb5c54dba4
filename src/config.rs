use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use tracing::info;

use crate::dictionary::{Messages, ServiceHandle};
use crate::error::{DictionaryError, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 80;

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Pending commands the dictionary worker may buffer
    pub queue_capacity: usize,
    /// Optional TOML catalog overriding the English messages
    pub messages_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            queue_capacity: ServiceHandle::DEFAULT_CAPACITY,
            messages_file: None,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(DictionaryError::Config("host must not be empty".into()));
        }
        if self.queue_capacity == 0 {
            return Err(DictionaryError::Config(
                "queue capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Resolves host and port to the address the listener binds.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                DictionaryError::Config(format!(
                    "{}:{} did not resolve to an address",
                    self.host, self.port
                ))
            })
    }

    pub fn load_messages(&self) -> Result<Messages> {
        match &self.messages_file {
            Some(path) => {
                info!("Loading message catalog from {}", path.display());
                Messages::from_toml_file(path)
            }
            None => Ok(Messages::default()),
        }
    }
}
