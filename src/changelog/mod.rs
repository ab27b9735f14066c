//! Commit categorization and changelog reading/writing.

pub mod category;
pub mod entry;
pub mod parser;
pub mod writer;

pub use category::{categorize, classify, CategorizedCommits, Category};
pub use entry::ChangelogEntry;
pub use parser::read_existing_versions;
pub use writer::prepend_entry;
