//! Release version labels: semver suggestion and interactive entry.

pub mod bump;
pub mod prompt;

pub use bump::{determine_bump_type, suggest_next_version, version_from_tag, BumpType};
pub use prompt::{prompt_for_version, read_version_from, resolve_version, VERSION_PROMPT};
