//! Prompt templates for the generation pipeline.
//!
//! Every call to the completion service goes through one of these builders.
//! The templates are the text contract with the model: the listing format
//! and the approval token are load-bearing and covered by tests downstream.

/// Directive appended when asking for the global context.
pub const CONTEXT_DIRECTIVE: &str = "Write a high-level global context for this project: \
its purpose, architecture, main components, and how they fit together. \
This context will accompany every later request about the project.";

/// Directive appended when asking for the file listing.
pub const LISTING_DIRECTIVE: &str = "List every file this project needs, one per line, \
in the exact format \"<filename>: <description>\". \
Use paths relative to the project root. Do not add commentary, numbering, or blank sections.";

/// Directive appended when asking for an audit verdict.
pub const AUDIT_DIRECTIVE: &str = "If the content fully satisfies the description, reply with \
the single word \"approved\". Otherwise reply with the corrected, complete file content and \
no commentary.";

/// Build the prompt for the one-shot global context generation.
pub fn context_prompt(user_prompt: &str, instructions: &str) -> String {
    format!(
        "Project description:\n{user_prompt}\n\n{instructions}\n\n{CONTEXT_DIRECTIVE}"
    )
}

/// Build the prompt for the one-shot file listing generation.
pub fn listing_prompt(user_prompt: &str, instructions: &str, global_context: &str) -> String {
    format!(
        "Global context:\n{global_context}\n\nProject description:\n{user_prompt}\n\n\
{instructions}\n\n{LISTING_DIRECTIVE}"
    )
}

/// Build the prompt that drafts one file.
pub fn draft_prompt(global_context: &str, filename: &str, description: &str) -> String {
    format!(
        "Global context:\n{global_context}\n\nWrite the complete content of the file \
`{filename}`.\nPurpose of the file: {description}\n\nReply with the file content only."
    )
}

/// Build the prompt that audits one candidate.
pub fn audit_prompt(candidate: &str, description: &str) -> String {
    format!(
        "Review the following file content.\nPurpose of the file: {description}\n\n\
--- content ---\n{candidate}\n--- end content ---\n\n{AUDIT_DIRECTIVE}"
    )
}
