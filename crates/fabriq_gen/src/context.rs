//! Global context generation.

use fabriq_llm::CompletionClient;

use crate::error::GenResult;
use crate::prompt;
use crate::workspace::{ProjectWorkspace, CONTEXT_ARTIFACT};

/// Generate the run's global context with a single completion call and
/// persist the raw result as `global_context.txt`.
///
/// The returned text anchors every subsequent prompt of the run and is never
/// modified. A completion failure propagates unchanged and aborts the run.
pub async fn generate_context(
    client: &dyn CompletionClient,
    workspace: &ProjectWorkspace,
    user_prompt: &str,
    instructions: &str,
) -> GenResult<String> {
    let prompt = prompt::context_prompt(user_prompt, instructions);
    let context = client.complete(&prompt).await?;

    workspace.persist_artifact(CONTEXT_ARTIFACT, &context)?;
    tracing::info!(bytes = context.len(), "global context generated");

    Ok(context)
}
