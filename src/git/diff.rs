//! Per-commit diff rendering using git2.
//!
//! The output mirrors `git show --stat --patch` and `git show --name-status`
//! closely enough for a language model; nothing downstream parses it.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use git2::{Commit, Delta, Diff, DiffFormat, DiffStatsFormat, Repository};

use crate::error::GitError;

/// Width passed to libgit2 when formatting the diffstat.
const STAT_WIDTH: usize = 80;

/// Render a commit header, diffstat and unified patch.
pub fn render_show(repo: &Repository, commit: &Commit<'_>) -> Result<String, GitError> {
    let diff = commit_diff(repo, commit)?;

    let mut text = format_header(commit);

    let stats = diff.stats().map_err(|e| diff_failed(commit, e))?;
    let stat_buf = stats
        .to_buf(DiffStatsFormat::FULL, STAT_WIDTH)
        .map_err(|e| diff_failed(commit, e))?;
    if let Some(stat) = stat_buf.as_str() {
        text.push_str(stat);
        text.push('\n');
    }

    append_patch(&diff, &mut text).map_err(|e| diff_failed(commit, e))?;
    Ok(text)
}

/// Render one `<status>\t<path>` line per changed file.
///
/// Renames and copies list both paths: `R\told\tnew`.
pub fn render_name_status(repo: &Repository, commit: &Commit<'_>) -> Result<String, GitError> {
    let diff = commit_diff(repo, commit)?;

    let mut lines = Vec::new();
    for delta in diff.deltas() {
        let letter = status_letter(delta.status());
        let old_path = delta
            .old_file()
            .path()
            .map(|p| p.to_string_lossy().to_string());
        let new_path = delta
            .new_file()
            .path()
            .map(|p| p.to_string_lossy().to_string());

        let line = match delta.status() {
            Delta::Renamed | Delta::Copied => format!(
                "{}\t{}\t{}",
                letter,
                old_path.unwrap_or_default(),
                new_path.unwrap_or_default()
            ),
            _ => format!("{}\t{}", letter, new_path.or(old_path).unwrap_or_default()),
        };
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

/// Diff a commit against its first parent, or the empty tree for root commits.
fn commit_diff<'r>(repo: &'r Repository, commit: &Commit<'_>) -> Result<Diff<'r>, GitError> {
    let tree = commit.tree().map_err(|e| diff_failed(commit, e))?;
    let parent_tree = if commit.parent_count() > 0 {
        let parent = commit.parent(0).map_err(|e| diff_failed(commit, e))?;
        Some(parent.tree().map_err(|e| diff_failed(commit, e))?)
    } else {
        None
    };

    let mut diff = repo
        .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)
        .map_err(|e| diff_failed(commit, e))?;
    diff.find_similar(None).map_err(|e| diff_failed(commit, e))?;

    Ok(diff)
}

fn diff_failed(commit: &Commit<'_>, source: git2::Error) -> GitError {
    GitError::DiffFailed {
        hash: commit.id().to_string(),
        source,
    }
}

fn status_letter(status: Delta) -> char {
    match status {
        Delta::Added | Delta::Untracked => 'A',
        Delta::Deleted => 'D',
        Delta::Renamed => 'R',
        Delta::Copied => 'C',
        Delta::Typechange => 'T',
        Delta::Conflicted => 'U',
        _ => 'M',
    }
}

/// `commit`/`Author`/`Date` lines followed by the indented message.
fn format_header(commit: &Commit<'_>) -> String {
    let author = commit.author();
    let mut header = format!(
        "commit {}\nAuthor: {} <{}>\nDate:   {}\n\n",
        commit.id(),
        String::from_utf8_lossy(author.name_bytes()),
        String::from_utf8_lossy(author.email_bytes()),
        format_commit_time(commit.time())
    );

    let message = String::from_utf8_lossy(commit.message_bytes());
    for line in message.trim_end().lines() {
        header.push_str(format!("    {}", line).trim_end());
        header.push('\n');
    }
    header.push('\n');

    header
}

/// Format a commit time the way `git log` does, in the committer's offset.
fn format_commit_time(time: git2::Time) -> String {
    let offset =
        FixedOffset::east_opt(time.offset_minutes() * 60).unwrap_or_else(|| Utc.fix());

    match DateTime::from_timestamp(time.seconds(), 0) {
        Some(utc) => utc
            .with_timezone(&offset)
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string(),
        None => time.seconds().to_string(),
    }
}

/// Append unified patch text, prefixing content lines with their origin.
fn append_patch(diff: &Diff<'_>, text: &mut String) -> Result<(), git2::Error> {
    diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        let origin = line.origin();
        if origin == '+' || origin == '-' || origin == ' ' {
            text.push(origin);
        }
        text.push_str(&String::from_utf8_lossy(line.content()));
        true
    })
}
