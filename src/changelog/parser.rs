//! Read release versions from an existing changelog using parse-changelog.

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::ChangelogError;

/// Read the release versions already present in a changelog file.
///
/// A missing file has no versions.
pub fn read_existing_versions(path: &Path) -> Result<Vec<String>, ChangelogError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(existing_versions(&content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(ChangelogError::ReadFailed(e)),
    }
}

/// List release versions, newest first, excluding `Unreleased`.
///
/// Content parse-changelog rejects (no releases, duplicate versions, headings
/// it does not recognise) falls back to a plain scan of `## ` headings.
pub fn existing_versions(content: &str) -> Vec<String> {
    match parse_changelog::parse(content) {
        Ok(changelog) => changelog
            .keys()
            .map(|title| extract_version_from_title(title))
            .filter(|version| !is_unreleased(version))
            .collect(),
        Err(e) => {
            debug!(error = %e, "parse-changelog rejected changelog, scanning headings");
            scan_headings(content)
        }
    }
}

fn scan_headings(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| line.strip_prefix("## "))
        .map(extract_version_from_title)
        .filter(|version| !version.is_empty() && !is_unreleased(version))
        .collect()
}

fn is_unreleased(version: &str) -> bool {
    version.eq_ignore_ascii_case("unreleased")
}

/// Extract version number from a changelog section title.
/// e.g., "[1.2.3] - 2024-01-01" -> "1.2.3"
fn extract_version_from_title(title: &str) -> String {
    let title = title.trim();

    // Handle [version] format
    if let Some(rest) = title.strip_prefix('[') {
        if let Some(end) = rest.find(']') {
            return rest[..end].to_string();
        }
    }

    // Handle version - date format
    if let Some(dash_pos) = title.find(" - ") {
        return title[..dash_pos].trim().to_string();
    }

    title.to_string()
}
