use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use dictionary_api::config::{DEFAULT_HOST, DEFAULT_PORT};
use dictionary_api::{build_router, AppState, DictionaryService, ServerConfig, ServiceHandle};
use crate::error::Result;
use crate::dictionary::Messages;

#[derive(Parser)]
#[command(name = "dictionary-api")]
#[command(about = "In-memory word definition HTTP service")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Serve on port 8080
    dictionary-api serve --port 8080

    # Serve with a replacement message catalog
    dictionary-api serve --messages ./lang/en.toml

    # Print the effective message catalog
    dictionary-api messages --file ./lang/en.toml

    # Query a running server
    curl 'http://localhost:8080/api/definitions?word=cat'
    curl -X POST -H 'Content-Type: application/json' \
        -d '{"word":"cat","definition":"a feline"}' \
        http://localhost:8080/api/definitions
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Print the message catalog as TOML
    Messages {
        /// Catalog file to load instead of the built-in English one
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct ServeArgs {
    /// Bind address
    #[arg(long, env = "BIND_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// HTTP port
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Commands the dictionary worker may buffer before callers wait
    #[arg(long, env = "QUEUE_CAPACITY", default_value_t = ServiceHandle::DEFAULT_CAPACITY)]
    pub queue_capacity: usize,

    /// TOML message catalog
    #[arg(long, env = "MESSAGES_FILE")]
    pub messages: Option<PathBuf>,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            queue_capacity: args.queue_capacity,
            messages_file: args.messages,
        }
    }
}

pub async fn serve(config: ServerConfig) -> Result<()> {
    config.validate()?;

    let messages = Arc::new(config.load_messages()?);
    let service = DictionaryService::new(messages.clone());
    let handle = ServiceHandle::with_capacity(service, config.queue_capacity);

    let app = build_router(AppState::new(handle.clone(), messages));

    let address = config.socket_addr()?;
    info!("Binding to {address}");

    let listener = TcpListener::bind(address).await?;
    info!("Dictionary API listening on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    handle.shutdown().await?;
    info!(requests = handle.request_count(), "Server stopped");

    Ok(())
}

pub fn show_messages(file: Option<&Path>) -> anyhow::Result<()> {
    let messages = match file {
        Some(path) => Messages::from_toml_file(path)?,
        None => Messages::default(),
    };

    print!("{}", toml::to_string_pretty(&messages)?);
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
