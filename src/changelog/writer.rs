//! Prepend new changelog entries.

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::ChangelogError;

use super::entry::ChangelogEntry;

/// Write `entry` at the very top of the changelog, keeping everything below it.
///
/// - Creates the file if it doesn't exist
/// - Rewrites the whole file; prior bytes are preserved verbatim after the entry
///
/// There is no lock and no backup: a failure mid-write can leave the file
/// truncated, and concurrent runs can lose entries.
pub fn prepend_entry(path: &Path, entry: &ChangelogEntry) -> Result<(), ChangelogError> {
    let existing = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Changelog does not exist, creating it");
            String::new()
        }
        Err(e) => return Err(ChangelogError::ReadFailed(e)),
    };

    let mut new_content = entry.render();
    new_content.push_str(&existing);

    std::fs::write(path, new_content).map_err(ChangelogError::WriteFailed)?;

    Ok(())
}

/// Generate a summary message for the user.
pub fn generate_summary(path: &Path, entry: &ChangelogEntry, commit_count: usize) -> String {
    let commit_word = if commit_count == 1 { "commit" } else { "commits" };
    format!(
        "Changelog updated for version {} ({} {}) in {}",
        entry.version,
        commit_count,
        commit_word,
        path.display()
    )
}
