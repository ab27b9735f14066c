//! Git history access using git2-rs.

pub mod commits;
pub mod diff;
pub mod history;
pub mod range;
pub mod tags;

pub use commits::{CommitRecord, CommitSummary};
pub use history::{read_history, GitRepository, History, HistorySource, ReferenceKind, ReferencePoint};
pub use tags::get_latest_reachable_tag;
