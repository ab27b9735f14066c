//! Error types for changescribe modules using thiserror.

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to find reference '{0}': {1}")]
    ReferenceNotFound(String, #[source] git2::Error),

    #[error("Invalid commit hash '{0}': {1}")]
    InvalidHash(String, #[source] git2::Error),

    #[error("Failed to parse commit: {0}")]
    ParseCommit(#[source] git2::Error),

    #[error("Failed to walk commit history: {0}")]
    RevwalkError(#[source] git2::Error),

    #[error("Failed to enumerate tags: {0}")]
    TagListFailed(#[source] git2::Error),

    #[error("Failed to diff commit {hash}: {source}")]
    DiffFailed {
        hash: String,
        #[source]
        source: git2::Error,
    },

    #[error("No root commit reachable from HEAD")]
    NoRootCommit,
}

/// Errors from the completion service.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error(
        "No API credential configured. Set OPENAI_API_TOKEN (or OPENAI_API_KEY) to call the completion service"
    )]
    MissingApiKey,

    #[error("Completion request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Completion service returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Completion service returned a malformed response: {0}")]
    InvalidResponse(String),

    #[error("Completion service returned no choices")]
    EmptyResponse,
}

/// Errors from changelog operations.
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read changelog: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to write changelog: {0}")]
    WriteFailed(#[source] std::io::Error),
}

/// Errors from resolving the release version label.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Version label must not be empty")]
    Empty,

    #[error("Failed to read version from terminal: {0}")]
    Prompt(#[source] dialoguer::Error),

    #[error("Failed to read version from stdin: {0}")]
    Stdin(#[source] std::io::Error),
}

/// Any failure that aborts a changelog run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    #[error(transparent)]
    Version(#[from] VersionError),
}
