//! # fabriq_gen - Generation engine for Fabriq
//!
//! Turns one natural-language project description into a tree of generated
//! files via a remote completion service:
//!
//! ```text
//! user prompt ──▶ global context ──▶ file listing ──▶ per-file loop ──▶ disk
//!                (one completion)   (one completion)  (draft, audit,
//!                                                      revise, approve)
//! ```
//!
//! Data flows strictly forward: a per-file audit never revises the global
//! context or the listing. The engine is transport-agnostic — it talks to
//! any [`fabriq_llm::CompletionClient`], which is how the tests drive it
//! with a scripted mock.

pub mod audit;
pub mod context;
pub mod error;
pub mod exec;
pub mod extract;
pub mod listing;
pub mod orchestrator;
pub mod progress;
pub mod prompt;
pub mod structure;
pub mod workspace;

pub use audit::*;
pub use context::*;
pub use error::*;
pub use exec::*;
pub use extract::*;
pub use listing::*;
pub use orchestrator::*;
pub use progress::*;
pub use structure::*;
pub use workspace::*;
