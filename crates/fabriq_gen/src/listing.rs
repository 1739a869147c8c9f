//! File listing parsing.
//!
//! The structure phase asks the model for a flat, line-oriented listing in
//! the shape `<filename>: <description>`. Parsing is deliberately lenient:
//! a line that does not fit the shape is dropped, not reported.

use serde::{Deserialize, Serialize};

/// One entry of the parsed file listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSpec {
    /// Relative path of the file to generate. May contain separators.
    pub filename: String,
    /// What the file should contain.
    pub description: String,
}

/// Parse a raw listing into ordered file specifications.
///
/// Each line is split on every colon: the first segment (trimmed) is the
/// filename, the remaining segments rejoined with colons (trimmed) are the
/// description. Lines with fewer than two segments, or where either side
/// trims to empty, are skipped. Order and duplicate filenames are preserved;
/// duplicate resolution happens at write time.
pub fn parse_listing(text: &str) -> Vec<FileSpec> {
    text.lines()
        .filter_map(|line| {
            let segments: Vec<&str> = line.split(':').collect();
            if segments.len() < 2 {
                return None;
            }

            let filename = segments[0].trim();
            let description = segments[1..].join(":");
            let description = description.trim();
            if filename.is_empty() || description.is_empty() {
                return None;
            }

            Some(FileSpec {
                filename: filename.to_string(),
                description: description.to_string(),
            })
        })
        .collect()
}
