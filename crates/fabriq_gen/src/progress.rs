//! Cosmetic progress feedback for the file-generation phase.
//!
//! The spinner is a detached tokio task with no data dependency on the
//! audit loop: it neither blocks nor is blocked by generation. The
//! orchestrator owns the handle and stops the task deterministically once
//! the phase completes; there is no shared flag visible elsewhere.

use std::io::{self, Write};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
const TICK: Duration = Duration::from_millis(120);

/// Handle to a running spinner task.
pub struct Spinner {
    stop: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl Spinner {
    /// Spawn the spinner. Frames go to stderr so generated output and log
    /// lines stay clean.
    pub fn start(label: &str) -> Self {
        let (stop, mut stopped) = watch::channel(false);
        let label = label.to_string();

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK);
            let mut frame = 0usize;
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {}", FRAMES[frame % FRAMES.len()], label);
                        let _ = io::stderr().flush();
                        frame += 1;
                    }
                    changed = stopped.changed() => {
                        if changed.is_err() || *stopped.borrow() {
                            break;
                        }
                    }
                }
            }
            // Clear the spinner line before handing the terminal back.
            eprint!("\r{}\r", " ".repeat(label.len() + 2));
            let _ = io::stderr().flush();
        });

        Self { stop, task }
    }

    /// Signal the task to stop and wait for it to clear the line.
    pub async fn finish(self) {
        let _ = self.stop.send(true);
        let _ = self.task.await;
    }
}
