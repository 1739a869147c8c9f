//! Run sequencing: context -> structure -> per-file generation.
//!
//! Everything is strictly sequential: one completion request in flight at a
//! time, one file carried through persist/execute before the next begins.
//! The only state shared across files is the read-only global context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use fabriq_llm::CompletionClient;

use crate::audit::{generate_file, AuditConfig};
use crate::context::generate_context;
use crate::error::{GenError, GenResult};
use crate::exec::{interpreter_for, run_script, ExecutionReport};
use crate::listing::FileSpec;
use crate::progress::Spinner;
use crate::structure::generate_listing;
use crate::workspace::ProjectWorkspace;

/// Outcome of one file specification.
#[derive(Debug, Clone)]
pub enum FileOutcome {
    /// Approved and written; optionally executed afterwards.
    Written {
        filename: String,
        path: PathBuf,
        rounds: usize,
        execution: Option<ExecutionReport>,
    },
    /// The audit loop exhausted its round cap; nothing was written.
    NotConverged { filename: String, rounds: usize },
}

/// Per-file outcomes of a completed run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<FileOutcome>,
}

impl RunReport {
    /// Number of files written to disk.
    pub fn written(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Written { .. }))
            .count()
    }

    /// Number of files that never converged.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.written()
    }
}

/// Drives a full generation run.
pub struct Orchestrator {
    client: Arc<dyn CompletionClient>,
    workspace: ProjectWorkspace,
    audit: AuditConfig,
    execute_scripts: bool,
}

impl Orchestrator {
    pub fn new(client: Arc<dyn CompletionClient>, workspace: ProjectWorkspace) -> Self {
        Self {
            client,
            workspace,
            audit: AuditConfig::default(),
            execute_scripts: true,
        }
    }

    /// Override the audit loop tunables.
    pub fn with_audit_config(mut self, audit: AuditConfig) -> Self {
        self.audit = audit;
        self
    }

    /// Enable or disable running generated scripts after writing them.
    pub fn with_script_execution(mut self, execute: bool) -> Self {
        self.execute_scripts = execute;
        self
    }

    /// Run the full pipeline for `user_prompt`.
    ///
    /// Completion-service failures abort the run; a file whose audit never
    /// converges is recorded in the report and skipped.
    pub async fn run(&mut self, user_prompt: &str, instructions: &str) -> GenResult<RunReport> {
        let context =
            generate_context(self.client.as_ref(), &self.workspace, user_prompt, instructions)
                .await?;
        let listing = generate_listing(
            self.client.as_ref(),
            &self.workspace,
            user_prompt,
            instructions,
            &context,
        )
        .await?;

        let spinner = Spinner::start("generating files");
        let result = self.process_listing(&listing, &context).await;
        spinner.finish().await;

        result
    }

    async fn process_listing(
        &mut self,
        listing: &[FileSpec],
        context: &str,
    ) -> GenResult<RunReport> {
        let mut report = RunReport::default();

        for spec in listing {
            tracing::info!(filename = %spec.filename, "generating file");

            match generate_file(self.client.as_ref(), spec, context, self.audit).await {
                Ok(approved) => {
                    let path = self.workspace.write_file(&approved.filename, &approved.content)?;
                    let execution = self.maybe_execute(&approved.filename, &path).await;
                    report.outcomes.push(FileOutcome::Written {
                        filename: approved.filename,
                        path,
                        rounds: approved.rounds,
                        execution,
                    });
                }
                Err(GenError::AuditNotConverged { filename, rounds }) => {
                    tracing::warn!(%filename, rounds, "audit did not converge, skipping file");
                    report.outcomes.push(FileOutcome::NotConverged { filename, rounds });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }

    async fn maybe_execute(&self, filename: &str, path: &Path) -> Option<ExecutionReport> {
        if !self.execute_scripts {
            return None;
        }
        let interpreter = interpreter_for(filename)?;

        let execution = run_script(interpreter, path).await;
        if execution.success() {
            tracing::info!(%filename, interpreter, "script executed successfully");
        } else {
            tracing::warn!(
                %filename,
                interpreter,
                exit_code = ?execution.exit_code,
                stderr = %execution.stderr,
                "script execution failed"
            );
        }
        Some(execution)
    }
}
