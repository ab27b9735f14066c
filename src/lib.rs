//! changescribe - Draft a changelog entry from the commits since the last tag.
//!
//! # Overview
//!
//! changescribe reads the git history since the most recent reachable tag,
//! groups commits into categories, asks an OpenAI-compatible chat completion
//! service to write the entry, and prepends it to CHANGELOG.md under a
//! version header.

pub mod changelog;
pub mod config;
pub mod error;
pub mod git;
pub mod llm;
pub mod pipeline;
pub mod version;

// Re-export commonly used types
pub use changelog::{CategorizedCommits, Category, ChangelogEntry};
pub use config::Config;
pub use error::{ChangelogError, CompletionError, GitError, RunError, VersionError};
pub use git::{CommitRecord, GitRepository, HistorySource, ReferencePoint};
pub use llm::{ChangelogGenerator, CompletionService, OpenAiClient};
pub use pipeline::{Pipeline, RunOutcome};
pub use version::BumpType;
