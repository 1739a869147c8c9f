//! Draft/audit/revise loop for a single file.
//!
//! Per file the states are `Drafting -> Auditing <-> Revising -> Approved`.
//! The audit oracle is the remote service itself, so convergence cannot be
//! proven; the loop keeps the "regenerate until approved" semantics beneath
//! an injectable round cap and reports non-convergence as a distinct
//! outcome instead of spinning forever.

use fabriq_llm::CompletionClient;

use crate::error::{GenError, GenResult};
use crate::extract::extract_code;
use crate::listing::FileSpec;
use crate::prompt;

/// Token the audit prompt asks the model to answer with on approval.
pub const APPROVAL_TOKEN: &str = "approved";

/// Verdict of one audit round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditVerdict {
    /// The candidate in flight is final.
    Approved,
    /// The response replaces the candidate and the loop repeats.
    Revision(String),
}

/// Classify an audit response.
///
/// Approval is a case-insensitive substring check, by contract of the audit
/// prompt; anything else is treated wholesale as replacement content.
pub fn classify_response(response: &str) -> AuditVerdict {
    if response.to_lowercase().contains(APPROVAL_TOKEN) {
        AuditVerdict::Approved
    } else {
        AuditVerdict::Revision(response.to_string())
    }
}

/// Tunables for the audit loop.
#[derive(Debug, Clone, Copy)]
pub struct AuditConfig {
    /// Audit rounds allowed per file before giving up.
    pub max_rounds: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self { max_rounds: 32 }
    }
}

/// A file whose content survived the audit loop.
#[derive(Debug, Clone)]
pub struct ApprovedFile {
    pub filename: String,
    pub content: String,
    /// Audit rounds taken, including the approving one.
    pub rounds: usize,
}

/// Draft content for `spec` and audit it until approval.
///
/// The approved content is the candidate in flight when approval was
/// granted, never the approving response itself. Completion failures
/// propagate; exhausting the round cap yields
/// [`GenError::AuditNotConverged`].
pub async fn generate_file(
    client: &dyn CompletionClient,
    spec: &FileSpec,
    global_context: &str,
    config: AuditConfig,
) -> GenResult<ApprovedFile> {
    let draft = client
        .complete(&prompt::draft_prompt(global_context, &spec.filename, &spec.description))
        .await?;
    let mut candidate = extract_code(&draft);

    for round in 1..=config.max_rounds {
        let response = client
            .complete(&prompt::audit_prompt(&candidate, &spec.description))
            .await?;

        match classify_response(&response) {
            AuditVerdict::Approved => {
                tracing::debug!(filename = %spec.filename, round, "audit approved");
                return Ok(ApprovedFile {
                    filename: spec.filename.clone(),
                    content: candidate,
                    rounds: round,
                });
            }
            AuditVerdict::Revision(replacement) => {
                tracing::debug!(filename = %spec.filename, round, "audit requested a revision");
                candidate = extract_code(&replacement);
            }
        }
    }

    Err(GenError::AuditNotConverged {
        filename: spec.filename.clone(),
        rounds: config.max_rounds,
    })
}
