//! Error types for the completion client.

use thiserror::Error;

/// Result type alias for completion operations.
pub type LlmResult<T> = Result<T, LlmError>;

/// Errors surfaced by the completion client.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("API key not found")]
    MissingApiKey,

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}
