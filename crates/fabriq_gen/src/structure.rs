//! File listing generation.

use fabriq_llm::CompletionClient;

use crate::error::{GenError, GenResult};
use crate::listing::{parse_listing, FileSpec};
use crate::prompt;
use crate::workspace::{ProjectWorkspace, STRUCTURE_ARTIFACT};

/// Ask the model for the project's file listing, persist the raw text as
/// `project_structure.txt`, and parse it.
///
/// An empty parse result is a hard error: it means the service ignored the
/// listing format, and silently proceeding would make the whole run a no-op.
pub async fn generate_listing(
    client: &dyn CompletionClient,
    workspace: &ProjectWorkspace,
    user_prompt: &str,
    instructions: &str,
    global_context: &str,
) -> GenResult<Vec<FileSpec>> {
    let prompt = prompt::listing_prompt(user_prompt, instructions, global_context);
    let raw = client.complete(&prompt).await?;

    workspace.persist_artifact(STRUCTURE_ARTIFACT, &raw)?;

    let listing = parse_listing(&raw);
    if listing.is_empty() {
        return Err(GenError::EmptyListing);
    }

    tracing::info!(entries = listing.len(), "file listing parsed");
    Ok(listing)
}
