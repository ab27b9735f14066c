//! Tag enumeration and reachability.

use std::collections::HashMap;

use git2::{Oid, Repository};
use tracing::{debug, warn};

use crate::error::GitError;

/// A git tag resolved to the commit it marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInfo {
    pub name: String,
    /// The tagged commit (annotated tags are peeled).
    pub oid: Oid,
}

/// Get the most recent tag reachable from HEAD.
///
/// Walks commits reachable from `HEAD` newest-first and returns the tag on the
/// first commit that carries one. When several tags point at the same commit
/// the greatest name wins, so `v1.10.0` beats `v1.9.0` only when both sit on
/// one commit.
///
/// Returns `Ok(None)` when the repository has no tags or HEAD is unborn.
pub fn get_latest_reachable_tag(repo: &Repository) -> Result<Option<TagInfo>, GitError> {
    let head_oid = match repo.head().ok().and_then(|head| head.target()) {
        Some(oid) => oid,
        None => return Ok(None),
    };

    let mut tags_by_commit: HashMap<Oid, Vec<TagInfo>> = HashMap::new();
    for tag in get_all_tags(repo)? {
        tags_by_commit.entry(tag.oid).or_default().push(tag);
    }

    if tags_by_commit.is_empty() {
        debug!("No tags found in repository");
        return Ok(None);
    }

    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;
    revwalk.push(head_oid).map_err(GitError::RevwalkError)?;
    revwalk
        .set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)
        .map_err(GitError::RevwalkError)?;

    for oid in revwalk {
        let oid = oid.map_err(GitError::RevwalkError)?;
        if let Some(candidates) = tags_by_commit.get(&oid) {
            let latest = candidates.iter().max_by(|a, b| a.name.cmp(&b.name)).cloned();
            if let Some(tag) = latest {
                debug!(tag = %tag.name, "Found latest reachable tag");
                return Ok(Some(tag));
            }
        }
    }

    debug!("No tag is reachable from HEAD");
    Ok(None)
}

/// Get all tags that resolve to a commit.
///
/// Tags pointing at trees or blobs are skipped.
pub fn get_all_tags(repo: &Repository) -> Result<Vec<TagInfo>, GitError> {
    let mut tags = Vec::new();

    repo.tag_foreach(|oid, name_bytes| {
        let Ok(name_str) = std::str::from_utf8(name_bytes) else {
            warn!("Skipping tag with OID {} - name is not valid UTF-8", oid);
            return true;
        };

        let name = name_str
            .strip_prefix("refs/tags/")
            .unwrap_or(name_str)
            .to_string();

        match repo
            .find_object(oid, None)
            .and_then(|obj| obj.peel_to_commit())
        {
            Ok(commit) => tags.push(TagInfo {
                name,
                oid: commit.id(),
            }),
            Err(e) => {
                debug!(tag = %name, error = %e, "Tag does not point at a commit, skipping");
            }
        }

        true
    })
    .map_err(GitError::TagListFailed)?;

    Ok(tags)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use git2::{Oid, Signature};

    use super::*;

    fn commit(repo: &Repository, repo_dir: &Path, message: &str) -> Oid {
        let file_path = repo_dir.join("test.txt");
        std::fs::write(&file_path, format!("{}\n{}", message, std::process::id()))
            .expect("failed to write test file");

        let mut index = repo.index().expect("failed to open index");
        index
            .add_path(Path::new("test.txt"))
            .expect("failed to add file");
        index.write().expect("failed to write index");

        let tree_id = index.write_tree().expect("failed to write tree");
        let tree = repo.find_tree(tree_id).expect("failed to find tree");
        let sig = Signature::now("Test User", "test@example.com").expect("failed to create sig");
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("failed to create commit")
    }

    fn tag(repo: &Repository, name: &str, oid: Oid) {
        repo.tag_lightweight(
            name,
            &repo.find_object(oid, None).expect("failed to find object"),
            false,
        )
        .expect("failed to create tag");
    }

    #[test]
    fn test_no_tags_returns_none() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let repo = Repository::init(dir.path()).expect("failed to init repo");
        commit(&repo, dir.path(), "feat: first");

        let latest = get_latest_reachable_tag(&repo).expect("failed to resolve tag");
        assert!(latest.is_none());
    }

    #[test]
    fn test_unborn_head_returns_none() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let repo = Repository::init(dir.path()).expect("failed to init repo");

        let latest = get_latest_reachable_tag(&repo).expect("failed to resolve tag");
        assert!(latest.is_none());
    }

    #[test]
    fn test_non_semver_tags_are_considered() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let repo = Repository::init(dir.path()).expect("failed to init repo");

        let first = commit(&repo, dir.path(), "feat: first");
        tag(&repo, "v1.0.0", first);
        let second = commit(&repo, dir.path(), "chore: second");
        tag(&repo, "nightly-2026-02-05", second);
        commit(&repo, dir.path(), "fix: third");

        let latest = get_latest_reachable_tag(&repo)
            .expect("failed to resolve tag")
            .expect("expected a tag");
        assert_eq!(latest.name, "nightly-2026-02-05");
        assert_eq!(latest.oid, second);
    }

    #[test]
    fn test_tag_on_unreachable_branch_is_ignored() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let repo = Repository::init(dir.path()).expect("failed to init repo");

        let first = commit(&repo, dir.path(), "feat: first");
        tag(&repo, "v1.0.0", first);

        // A dangling commit with a tag that HEAD never reaches.
        let sig = Signature::now("Test User", "test@example.com").expect("failed to create sig");
        let tree = repo
            .find_commit(first)
            .and_then(|c| c.tree())
            .expect("failed to find tree");
        let parent = repo.find_commit(first).expect("failed to find commit");
        let dangling = repo
            .commit(None, &sig, &sig, "side", &tree, &[&parent])
            .expect("failed to create dangling commit");
        tag(&repo, "v9.9.9", dangling);

        commit(&repo, dir.path(), "fix: on main");

        let latest = get_latest_reachable_tag(&repo)
            .expect("failed to resolve tag")
            .expect("expected a tag");
        assert_eq!(latest.name, "v1.0.0");
    }

    #[test]
    fn test_annotated_tag_is_peeled_to_commit() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let repo = Repository::init(dir.path()).expect("failed to init repo");

        let first = commit(&repo, dir.path(), "feat: first");
        let sig = Signature::now("Test User", "test@example.com").expect("failed to create sig");
        repo.tag(
            "v2.0.0",
            &repo.find_object(first, None).expect("failed to find object"),
            &sig,
            "Release 2.0.0",
            false,
        )
        .expect("failed to create annotated tag");

        let tags = get_all_tags(&repo).expect("failed to list tags");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].oid, first);
    }

    #[test]
    fn test_same_commit_tags_pick_greatest_name() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let repo = Repository::init(dir.path()).expect("failed to init repo");

        let first = commit(&repo, dir.path(), "feat: first");
        tag(&repo, "v1.0.0", first);
        tag(&repo, "v1.0.1", first);

        let latest = get_latest_reachable_tag(&repo)
            .expect("failed to resolve tag")
            .expect("expected a tag");
        assert_eq!(latest.name, "v1.0.1");
    }
}
