//! Error types for the GuessMe client.

use std::path::PathBuf;

use thiserror::Error;

use crate::connection::ConnectionState;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Inbound frame is not valid JSON
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// Template failed to compile or render
    #[error("Template error: {0}")]
    Template(String),

    /// Template file could not be read
    #[error("Missing template '{name}' at {}: {source}", path.display())]
    MissingTemplate {
        name: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    /// Endpoint cannot be resolved to a WebSocket URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Connection error
    #[error(transparent)]
    Connection(#[from] ConnectionError),
}

/// Errors surfaced by the socket layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    /// Sending is only possible while the connection is open
    #[error("Connection is {0}, not open")]
    NotOpen(ConnectionState),

    /// The task driving the socket has stopped
    #[error("Connection task has stopped")]
    TaskStopped,
}

impl From<url::ParseError> for ClientError {
    fn from(e: url::ParseError) -> Self {
        ClientError::InvalidEndpoint(e.to_string())
    }
}
