//! # fabriq_llm - Completion client boundary for Fabriq
//!
//! This crate owns the single seam between Fabriq and the remote
//! text-completion service:
//!
//! - [`CompletionClient`]: the trait the generation engine talks to
//! - [`ChatClient`]: the reqwest-backed implementation of the single-turn
//!   chat-completion wire contract
//! - [`MockCompletionClient`]: a scripted implementation for tests
//!
//! Transport failures, non-success statuses, and malformed success bodies
//! each map to a distinct [`LlmError`] variant. The client never retries;
//! callers decide what a failure means.

pub mod client;
pub mod error;
pub mod mock;

pub use client::*;
pub use error::*;
pub use mock::*;
