//! HEAD and root commit resolution.

use git2::{Oid, Repository};
use tracing::debug;

use crate::error::GitError;

/// Resolve HEAD to a commit OID.
pub fn head_oid(repo: &Repository) -> Result<Oid, GitError> {
    let head = repo
        .head()
        .map_err(|e| GitError::ReferenceNotFound("HEAD".to_string(), e))?;

    let commit = head.peel_to_commit().map_err(GitError::ParseCommit)?;
    Ok(commit.id())
}

/// Find the root commit of the history reachable from HEAD.
///
/// Histories with several parentless commits (merged-in unrelated histories)
/// resolve to the oldest one in topological order.
pub fn find_root_commit(repo: &Repository) -> Result<Oid, GitError> {
    let head = head_oid(repo)?;

    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;
    revwalk.push(head).map_err(GitError::RevwalkError)?;
    revwalk
        .set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)
        .map_err(GitError::RevwalkError)?;

    let mut root = None;
    for oid_result in revwalk {
        let oid = oid_result.map_err(GitError::RevwalkError)?;
        let commit = repo.find_commit(oid).map_err(GitError::ParseCommit)?;
        if commit.parent_count() == 0 {
            root = Some(oid);
        }
    }

    let root = root.ok_or(GitError::NoRootCommit)?;
    debug!(root = %root, "Resolved root commit");
    Ok(root)
}
