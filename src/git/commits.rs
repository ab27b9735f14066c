//! Commit enumeration and the commit record handed to the categorizer.

use git2::{Commit, Oid, Repository};

use crate::error::GitError;

/// A commit read from history, with everything the prompt needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Full hex hash.
    pub hash: String,
    /// Subject line.
    pub message: String,
    /// `git show --stat --patch` style rendering.
    pub diff: String,
    /// Name-status listing of changed files.
    pub files_changed: String,
}

impl CommitRecord {
    /// First 8 characters of the hash.
    pub fn short_hash(&self) -> &str {
        self.hash.get(..8).unwrap_or(&self.hash)
    }
}

/// Hash and subject of a commit, as listed by the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub hash: String,
    pub subject: String,
}

impl CommitSummary {
    /// Create a CommitSummary from a git2 Commit.
    pub fn from_git2_commit(commit: &Commit) -> Self {
        Self {
            hash: commit.id().to_string(),
            subject: commit
                .summary_bytes()
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                .unwrap_or_default(),
        }
    }
}

/// List commits reachable from `to_oid` but not from `from_oid`, newest first.
pub fn list_commits(
    repo: &Repository,
    from_oid: Oid,
    to_oid: Oid,
) -> Result<Vec<CommitSummary>, GitError> {
    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;

    revwalk
        .set_sorting(git2::Sort::TIME)
        .map_err(GitError::RevwalkError)?;
    revwalk.push(to_oid).map_err(GitError::RevwalkError)?;
    revwalk.hide(from_oid).map_err(GitError::RevwalkError)?;

    let mut commits = Vec::new();

    for oid_result in revwalk {
        let oid = oid_result.map_err(GitError::RevwalkError)?;
        let commit = repo.find_commit(oid).map_err(GitError::ParseCommit)?;
        commits.push(CommitSummary::from_git2_commit(&commit));
    }

    Ok(commits)
}
