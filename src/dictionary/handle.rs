//! Single-writer access to the dictionary.
//!
//! HTTP handlers run concurrently, but the duplicate check and insert of a
//! store must not interleave with another store of the same word. All
//! search and store calls are therefore sent over a tokio mpsc channel to
//! one worker task that owns the [`DictionaryService`] outright.

use tokio::sync::{mpsc, oneshot};

use crate::dictionary::{DictionaryService, RequestCounter, SearchOutcome, StoreOutcome};
use crate::error::{DictionaryError, Result};

/// Commands that can be sent to the dictionary worker.
#[derive(Debug)]
pub enum Command {
    /// Look up a word
    Search {
        word: String,
        respond: oneshot::Sender<SearchOutcome>,
    },
    /// Insert a word
    Store {
        word: String,
        definition: String,
        respond: oneshot::Sender<StoreOutcome>,
    },
    /// Shutdown the worker
    Shutdown,
}

/// Handle for sending commands to the dictionary worker.
/// This is cheaply cloneable and can be shared across tasks.
#[derive(Clone)]
pub struct ServiceHandle {
    sender: mpsc::Sender<Command>,
    counter: RequestCounter,
}

impl ServiceHandle {
    /// Default channel buffer size
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Spawns the worker on the current tokio runtime.
    pub fn spawn(service: DictionaryService) -> Self {
        Self::with_capacity(service, Self::DEFAULT_CAPACITY)
    }

    /// Spawns the worker with a custom channel capacity (at least 1).
    pub fn with_capacity(service: DictionaryService, capacity: usize) -> Self {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        let counter = service.counter();
        let worker = Worker::new(receiver, service);

        tokio::spawn(async move {
            worker.run().await;
        });

        Self { sender, counter }
    }

    pub async fn search(&self, word: impl Into<String>) -> Result<SearchOutcome> {
        let (respond, rx) = oneshot::channel();
        self.sender
            .send(Command::Search {
                word: word.into(),
                respond,
            })
            .await
            .map_err(|_| DictionaryError::QueueClosed)?;
        rx.await.map_err(|_| DictionaryError::ReplyDropped)
    }

    pub async fn store(
        &self,
        word: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<StoreOutcome> {
        let (respond, rx) = oneshot::channel();
        self.sender
            .send(Command::Store {
                word: word.into(),
                definition: definition.into(),
                respond,
            })
            .await
            .map_err(|_| DictionaryError::QueueClosed)?;
        rx.await.map_err(|_| DictionaryError::ReplyDropped)
    }

    /// Current request count, read without queueing behind pending commands.
    pub fn request_count(&self) -> u64 {
        self.counter.current()
    }

    /// Shuts down the worker.
    /// After shutdown, all subsequent search and store calls will fail.
    pub async fn shutdown(&self) -> Result<()> {
        self.sender
            .send(Command::Shutdown)
            .await
            .map_err(|_| DictionaryError::QueueClosed)
    }

    pub fn is_active(&self) -> bool {
        !self.sender.is_closed()
    }
}

/// Worker that processes commands sequentially.
struct Worker {
    receiver: mpsc::Receiver<Command>,
    service: DictionaryService,
}

impl Worker {
    fn new(receiver: mpsc::Receiver<Command>, service: DictionaryService) -> Self {
        Self { receiver, service }
    }

    async fn run(mut self) {
        tracing::debug!("Dictionary worker started");

        while let Some(command) = self.receiver.recv().await {
            match command {
                Command::Search { word, respond } => {
                    let _ = respond.send(self.service.search(&word));
                }
                Command::Store {
                    word,
                    definition,
                    respond,
                } => {
                    let _ = respond.send(self.service.store(&word, &definition));
                }
                Command::Shutdown => {
                    tracing::debug!("Dictionary worker shutting down");
                    break;
                }
            }
        }

        tracing::debug!(
            words = self.service.word_count(),
            requests = self.service.request_count(),
            "Dictionary worker stopped"
        );
    }
}
