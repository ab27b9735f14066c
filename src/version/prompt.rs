//! Version label entry.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;
use semver::Version;

use crate::error::VersionError;

pub const VERSION_PROMPT: &str = "Enter the new version (e.g., 1.0.0)";

/// Use the label given on the command line, or ask for one.
pub fn resolve_version(
    arg: Option<String>,
    suggestion: Option<&Version>,
) -> Result<String, VersionError> {
    match arg {
        Some(label) => non_empty(&label),
        None => prompt_for_version(suggestion),
    }
}

/// Block until the operator enters a version label.
///
/// On a terminal the suggestion is offered as the default. When stdin is
/// piped a single line is read; an empty line accepts the suggestion.
pub fn prompt_for_version(suggestion: Option<&Version>) -> Result<String, VersionError> {
    if io::stdin().is_terminal() {
        let mut input = Input::<String>::new().with_prompt(VERSION_PROMPT);
        if let Some(version) = suggestion {
            input = input.default(version.to_string());
        }
        let label = input.interact_text().map_err(VersionError::Prompt)?;
        return non_empty(&label);
    }

    let mut stdout = io::stdout();
    match suggestion {
        Some(version) => print!("{} [{}]: ", VERSION_PROMPT, version),
        None => print!("{}: ", VERSION_PROMPT),
    }
    stdout.flush().map_err(VersionError::Stdin)?;

    read_version_from(io::stdin().lock(), suggestion)
}

/// Read one line as the version label.
pub fn read_version_from<R: BufRead>(
    mut reader: R,
    suggestion: Option<&Version>,
) -> Result<String, VersionError> {
    let mut line = String::new();
    reader.read_line(&mut line).map_err(VersionError::Stdin)?;

    match (line.trim(), suggestion) {
        ("", Some(version)) => Ok(version.to_string()),
        (label, _) => non_empty(label),
    }
}

fn non_empty(label: &str) -> Result<String, VersionError> {
    let label = label.trim();
    if label.is_empty() {
        return Err(VersionError::Empty);
    }
    Ok(label.to_string())
}
