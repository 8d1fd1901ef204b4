//! Error types for the filedrop client

use thiserror::Error;

/// Failure of a remote store call. Every cause collapses into this one
/// taxonomy; the controller never shows the user anything more specific
/// than a generic failure message, the variants exist for logs.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Server returned status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, TransportError>;
