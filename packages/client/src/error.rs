//! Error types for the chat client.

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Client-specific errors
///
/// Only startup errors end the client. Once the session runs, connection
/// and terminal errors are logged and empty input is ignored.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configuration was rejected
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The line editor could not be initialised
    #[error("Failed to initialize readline: {0}")]
    Readline(#[from] ReadlineError),

    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Writing to the terminal failed
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The endpoint does not use the ws or wss scheme
    #[error("Invalid WebSocket URL '{0}': expected ws:// or wss://")]
    InvalidUrl(String),
}
