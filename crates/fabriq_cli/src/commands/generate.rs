//! `fabriq generate` - the full generation run.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Args;

use fabriq_gen::{AuditConfig, FileOutcome, Orchestrator, ProjectWorkspace, RunReport};
use fabriq_llm::ChatClient;

#[derive(Args)]
pub struct GenerateArgs {
    /// Target directory that will hold the generated project
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Name of the generated project directory
    #[arg(long)]
    pub name: Option<String>,

    /// Natural-language description of the project
    #[arg(long)]
    pub prompt: Option<String>,

    /// Extra guidance appended to every prompt
    #[arg(long, default_value = "")]
    pub instructions: String,

    /// Model identifier override
    #[arg(long)]
    pub model: Option<String>,

    /// Audit rounds allowed per file before giving up
    #[arg(long, default_value_t = 32)]
    pub max_audit_rounds: usize,

    /// Skip running generated .py/.js scripts
    #[arg(long)]
    pub no_exec: bool,
}

pub async fn execute(args: GenerateArgs) -> Result<()> {
    // A local untracked .env file is the expected home of the API key.
    dotenvy::dotenv().ok();

    let mut client = ChatClient::from_env()?;
    if let Some(model) = args.model {
        client = client.with_model(model);
    }

    let target_dir = match args.dir {
        Some(dir) => dir,
        None => {
            let cwd = std::env::current_dir().context("failed to resolve current directory")?;
            let input = prompt_line(&format!("Target directory [{}]: ", cwd.display()))?;
            if input.is_empty() {
                cwd
            } else {
                PathBuf::from(input)
            }
        }
    };

    let project_name = match args.name {
        Some(name) => name,
        None => {
            let input = prompt_line("Project name [project]: ")?;
            if input.is_empty() {
                "project".to_string()
            } else {
                input
            }
        }
    };

    let user_prompt = match args.prompt {
        Some(prompt) => prompt,
        None => prompt_line("Describe the project to generate: ")?,
    };
    if user_prompt.trim().is_empty() {
        bail!("a generation prompt is required");
    }

    let workspace = ProjectWorkspace::bootstrap(&target_dir, &project_name).with_context(|| {
        format!(
            "failed to create project directory under {}",
            target_dir.display()
        )
    })?;

    tracing::info!(
        project = %workspace.root().display(),
        model = client.model(),
        "starting generation run"
    );

    let started = Instant::now();
    let mut orchestrator = Orchestrator::new(Arc::new(client), workspace)
        .with_audit_config(AuditConfig {
            max_rounds: args.max_audit_rounds,
        })
        .with_script_execution(!args.no_exec);
    let report = orchestrator.run(&user_prompt, &args.instructions).await?;

    print_summary(&report, started.elapsed());
    Ok(())
}

/// Print `label` and read one trimmed line from stdin.
fn prompt_line(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read user input")?;
    Ok(input.trim().to_string())
}

fn print_summary(report: &RunReport, elapsed: Duration) {
    println!("\n{}", "=".repeat(60));
    println!("Summary:");
    println!("  Files written: {}", report.written());
    println!("  Not converged: {}", report.failed());
    for outcome in &report.outcomes {
        match outcome {
            FileOutcome::Written {
                filename,
                rounds,
                execution,
                ..
            } => {
                let execution_note = match execution {
                    Some(e) if e.success() => " [executed]",
                    Some(_) => " [execution failed]",
                    None => "",
                };
                println!("  + {} ({} audit round(s)){}", filename, rounds, execution_note);
            }
            FileOutcome::NotConverged { filename, rounds } => {
                println!("  - {} (no approval after {} round(s))", filename, rounds);
            }
        }
    }
    println!("  Duration: {:.2}s", elapsed.as_secs_f64());
    println!("{}", "=".repeat(60));
}
