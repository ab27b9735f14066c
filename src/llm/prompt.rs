//! Prompt construction for changelog generation.

use std::borrow::Cow;
use std::fmt::Write;

use crate::changelog::CategorizedCommits;
use crate::git::CommitRecord;

/// Diffs longer than this many lines are cut before they reach the prompt.
pub const MAX_DIFF_LINES: usize = 500;

/// System instruction sent alongside every changelog prompt.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant for software development with expertise in analyzing code changes and writing detailed, accurate changelogs.";

/// Build the full user prompt for the completion service.
pub fn build_prompt(categorized: &CategorizedCommits) -> String {
    let commit_details = render_commit_details(categorized);

    format!(
        r#"You are an experienced software developer writing the changelog for a new release.
You are given git commit information made up of:
1. Commit messages
2. Changed files
3. Code diffs

Write a clear and thorough changelog from this information.
The commits below are already grouped by a simple heuristic. Use the actual code changes to:
- Move a change to a better category when the grouping is wrong
- Add concrete detail about what each commit changed
- Pull key implementation details out of the diffs
- Call out significant changes the commit messages do not make obvious

Commit information:

{commit_details}

Format the changelog in Markdown using these sections:
### Features
- Detailed descriptions of new features, backed by what the diffs show

### Fixes
- Detailed descriptions of bug fixes, backed by what the diffs show

### Breaking Changes
- Detailed descriptions of breaking changes (if any), explaining clearly what changed

### Refactoring
- Notable refactoring (if any)

### Documentation
- Documentation updates (if any)

### Testing
- Test changes (if any)

### Other Changes
- Any other significant changes

Important: write for the people who will read this changelog. Describe changes in user-centric terms wherever possible."#
    )
}

/// Render the categorized commits as a Markdown block.
///
/// Empty categories are omitted; the rest appear in fixed category order.
pub fn render_commit_details(categorized: &CategorizedCommits) -> String {
    let mut out = String::from("# Git Commit Information for Changelog Generation\n\n");

    for (category, commits) in categorized.iter() {
        let _ = writeln!(out, "## {}", category.title());
        for commit in commits {
            render_commit(&mut out, commit);
        }
    }

    out
}

fn render_commit(out: &mut String, commit: &CommitRecord) {
    let _ = writeln!(out, "### Commit: {} - {}", commit.short_hash(), commit.message);

    out.push_str("#### Files Changed:\n");
    let _ = writeln!(out, "```\n{}\n```", commit.files_changed);

    out.push_str("#### Diff Preview:\n");
    let _ = write!(out, "```diff\n{}\n```\n\n", truncate_diff(&commit.diff));
}

/// Keep the first [`MAX_DIFF_LINES`] lines of a diff and note how many were cut.
///
/// Lines are counted by splitting on `\n`, so a trailing newline counts as a
/// final empty line.
pub fn truncate_diff(diff: &str) -> Cow<'_, str> {
    let total = diff.split('\n').count();
    if total <= MAX_DIFF_LINES {
        return Cow::Borrowed(diff);
    }

    let kept: Vec<&str> = diff.split('\n').take(MAX_DIFF_LINES).collect();
    Cow::Owned(format!(
        "{}\n... (diff truncated, showing first {} of {} lines)",
        kept.join("\n"),
        MAX_DIFF_LINES,
        total
    ))
}
