//! Error types for the generation engine.

use thiserror::Error;

/// Result type alias for generation operations.
pub type GenResult<T> = Result<T, GenError>;

/// Errors that can occur while generating a project.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("completion service error: {0}")]
    Llm(#[from] fabriq_llm::LlmError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("the generated file listing contained no usable entries")]
    EmptyListing,

    #[error("audit of '{filename}' did not converge after {rounds} round(s)")]
    AuditNotConverged { filename: String, rounds: usize },
}
