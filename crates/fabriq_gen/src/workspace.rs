//! Filesystem layout for a generation run.
//!
//! A run owns one directory, `<target_dir>/<project_name>/`, holding the two
//! run artifacts plus every generated file. Filenames from the listing may
//! contain path separators; intermediate directories are created on demand.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GenResult;

/// Artifact holding the raw global context.
pub const CONTEXT_ARTIFACT: &str = "global_context.txt";

/// Artifact holding the raw file listing.
pub const STRUCTURE_ARTIFACT: &str = "project_structure.txt";

/// The on-disk home of a generation run.
pub struct ProjectWorkspace {
    root: PathBuf,
    claimed: HashSet<String>,
}

impl ProjectWorkspace {
    /// Create `<target_dir>/<project_name>/` and return the workspace.
    ///
    /// A creation failure here is a fatal startup condition for the run.
    pub fn bootstrap(target_dir: &Path, project_name: &str) -> GenResult<Self> {
        let root = target_dir.join(project_name);
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            claimed: HashSet::new(),
        })
    }

    /// The project directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist a run artifact (raw model output) at the project root.
    pub fn persist_artifact(&self, name: &str, content: &str) -> GenResult<PathBuf> {
        let path = self.root.join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write an approved file, creating intermediate directories as needed.
    ///
    /// Duplicate filenames are resolved last-write-wins: the collision is
    /// logged and the earlier content is overwritten.
    pub fn write_file(&mut self, filename: &str, content: &str) -> GenResult<PathBuf> {
        let path = self.root.join(filename);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        if !self.claimed.insert(filename.to_string()) {
            tracing::warn!(filename, "duplicate filename in listing, overwriting earlier content");
        }

        fs::write(&path, content)?;
        tracing::info!(path = %path.display(), "wrote generated file");
        Ok(path)
    }
}
