//! History reading behind a mockable source trait.

use std::fmt;
use std::path::Path;

use git2::{Oid, Repository};
use tracing::debug;

use crate::error::GitError;

use super::commits::{list_commits, CommitRecord, CommitSummary};
use super::diff::{render_name_status, render_show};
use super::range::{find_root_commit, head_oid};
use super::tags::get_latest_reachable_tag;

/// How the lower bound of the commit range was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Tag,
    RootCommit,
}

/// Exclusive lower bound of the range of commits to describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePoint {
    /// Tag name, or the full hash for a root commit.
    pub name: String,
    /// Hash of the commit the reference resolves to.
    pub oid: String,
    pub kind: ReferenceKind,
}

impl ReferencePoint {
    pub fn tag(name: impl Into<String>, oid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            oid: oid.into(),
            kind: ReferenceKind::Tag,
        }
    }

    pub fn root(oid: impl Into<String>) -> Self {
        let oid = oid.into();
        Self {
            name: oid.clone(),
            oid,
            kind: ReferenceKind::RootCommit,
        }
    }
}

impl fmt::Display for ReferencePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Read-only queries against version-control history.
///
/// This abstraction allows feeding fixture commits to the pipeline in tests.
#[cfg_attr(test, mockall::automock)]
pub trait HistorySource {
    /// Most recent tag reachable from HEAD, or the root commit when there is none.
    fn tag_or_root(&self) -> Result<ReferencePoint, GitError>;

    /// Commits after `from` up to and including HEAD, in log order.
    fn commits_in_range(&self, from: &ReferencePoint) -> Result<Vec<CommitSummary>, GitError>;

    /// Header, diffstat and patch for one commit.
    fn diff_for(&self, hash: &str) -> Result<String, GitError>;

    /// Name-status listing for one commit.
    fn status_for(&self, hash: &str) -> Result<String, GitError>;
}

/// Commits since the last release, with the reference they were counted from.
#[derive(Debug, Clone)]
pub struct History {
    pub reference: ReferencePoint,
    pub commits: Vec<CommitRecord>,
}

/// Read every commit since the last tag (or root commit) with its diff and file list.
pub fn read_history<S: HistorySource + ?Sized>(source: &S) -> Result<History, GitError> {
    let reference = source.tag_or_root()?;
    debug!(reference = %reference, kind = ?reference.kind, "Resolved reference point");

    let summaries = source.commits_in_range(&reference)?;

    let mut commits = Vec::with_capacity(summaries.len());
    for summary in summaries {
        let diff = source.diff_for(&summary.hash)?;
        let files_changed = source.status_for(&summary.hash)?;
        debug!(hash = %summary.hash, diff_bytes = diff.len(), "Read commit");

        commits.push(CommitRecord {
            hash: summary.hash,
            message: summary.subject,
            diff,
            files_changed: files_changed.trim().to_string(),
        });
    }

    Ok(History { reference, commits })
}

/// [`HistorySource`] backed by a local git repository.
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open the repository containing `path`, searching parent directories.
    pub fn discover(path: &Path) -> Result<Self, GitError> {
        let repo = Repository::discover(path).map_err(GitError::OpenRepository)?;
        Ok(Self { repo })
    }

    pub fn from_repository(repo: Repository) -> Self {
        Self { repo }
    }

    fn find_commit(&self, hash: &str) -> Result<git2::Commit<'_>, GitError> {
        let oid = parse_oid(hash)?;
        self.repo.find_commit(oid).map_err(GitError::ParseCommit)
    }
}

impl HistorySource for GitRepository {
    fn tag_or_root(&self) -> Result<ReferencePoint, GitError> {
        if let Some(tag) = get_latest_reachable_tag(&self.repo)? {
            return Ok(ReferencePoint::tag(tag.name, tag.oid.to_string()));
        }

        let root = find_root_commit(&self.repo)?;
        Ok(ReferencePoint::root(root.to_string()))
    }

    fn commits_in_range(&self, from: &ReferencePoint) -> Result<Vec<CommitSummary>, GitError> {
        let from_oid = parse_oid(&from.oid)?;
        let to_oid = head_oid(&self.repo)?;
        list_commits(&self.repo, from_oid, to_oid)
    }

    fn diff_for(&self, hash: &str) -> Result<String, GitError> {
        let commit = self.find_commit(hash)?;
        render_show(&self.repo, &commit)
    }

    fn status_for(&self, hash: &str) -> Result<String, GitError> {
        let commit = self.find_commit(hash)?;
        render_name_status(&self.repo, &commit)
    }
}

fn parse_oid(hash: &str) -> Result<Oid, GitError> {
    Oid::from_str(hash).map_err(|e| GitError::InvalidHash(hash.to_string(), e))
}
