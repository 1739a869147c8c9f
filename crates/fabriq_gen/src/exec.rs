//! Best-effort execution of generated scripts.
//!
//! Files with a recognized script extension are run with their interpreter
//! after being written. Execution is fire-and-wait with captured output and
//! is strictly demonstrational: a spawn failure or nonzero exit is reported
//! to the caller, never propagated as a run error.

use std::path::Path;

use tokio::process::Command;

/// Captured result of one script run.
#[derive(Debug, Clone)]
pub struct ExecutionReport {
    /// Interpreter binary the script was run with.
    pub interpreter: String,
    /// Exit code, or `None` when the process never ran or was killed.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionReport {
    /// Whether the script ran and exited zero.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Map a filename to the interpreter that runs it, if any.
pub fn interpreter_for(filename: &str) -> Option<&'static str> {
    let extension = Path::new(filename).extension().and_then(|e| e.to_str())?;
    match extension {
        "py" => Some("python3"),
        "js" => Some("node"),
        _ => None,
    }
}

/// Run `path` under `interpreter`, waiting for exit and capturing output.
pub async fn run_script(interpreter: &str, path: &Path) -> ExecutionReport {
    match Command::new(interpreter).arg(path).output().await {
        Ok(output) => ExecutionReport {
            interpreter: interpreter.to_string(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        },
        Err(e) => ExecutionReport {
            interpreter: interpreter.to_string(),
            exit_code: None,
            stdout: String::new(),
            stderr: format!("failed to spawn {}: {}", interpreter, e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpreter_mapping() {
        assert_eq!(interpreter_for("main.py"), Some("python3"));
        assert_eq!(interpreter_for("src/app.js"), Some("node"));
        assert_eq!(interpreter_for("README.md"), None);
        assert_eq!(interpreter_for("Makefile"), None);
        assert_eq!(interpreter_for("data.txt"), None);
    }

    #[tokio::test]
    async fn test_spawn_failure_is_reported_not_raised() {
        let report = run_script(
            "fabriq-nonexistent-interpreter",
            Path::new("whatever.py"),
        )
        .await;

        assert!(!report.success());
        assert_eq!(report.exit_code, None);
        assert!(report.stderr.contains("failed to spawn"));
    }
}
