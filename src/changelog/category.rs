//! Heuristic commit categorization.
//!
//! Categories are advisory input to the language model, so a commit landing
//! in the wrong bucket is tolerated rather than reported.

use std::fmt;

use crate::git::CommitRecord;

const FEATURE_PREFIXES: &[&str] = &["feat", "feature"];
const FIX_PREFIXES: &[&str] = &["fix", "bugfix", "bug"];
const REFACTOR_PREFIXES: &[&str] = &["refactor"];
const DOCS_PREFIXES: &[&str] = &["doc", "docs"];
const TEST_PREFIXES: &[&str] = &["test", "tests"];

const FIX_KEYWORDS: &[&str] = &["fix", "bug", "issue", "error", "crash"];
const FEATURE_KEYWORDS: &[&str] = &["feat", "feature", "add", "new", "implement"];

/// Bucket a commit is filed under, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Features,
    Fixes,
    BreakingChanges,
    Refactorings,
    Docs,
    Tests,
    Other,
}

impl Category {
    /// Every category, in prompt order.
    pub const ALL: [Category; 7] = [
        Category::Features,
        Category::Fixes,
        Category::BreakingChanges,
        Category::Refactorings,
        Category::Docs,
        Category::Tests,
        Category::Other,
    ];

    /// Snake-case key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Features => "features",
            Self::Fixes => "fixes",
            Self::BreakingChanges => "breaking_changes",
            Self::Refactorings => "refactorings",
            Self::Docs => "docs",
            Self::Tests => "tests",
            Self::Other => "other",
        }
    }

    /// Heading used in the prompt.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Features => "Features",
            Self::Fixes => "Fixes",
            Self::BreakingChanges => "Breaking Changes",
            Self::Refactorings => "Refactorings",
            Self::Docs => "Docs",
            Self::Tests => "Tests",
            Self::Other => "Other",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Commits grouped by category, each bucket in log order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedCommits {
    buckets: [Vec<CommitRecord>; 7],
}

impl CategorizedCommits {
    /// Commits filed under `category`.
    pub fn get(&self, category: Category) -> &[CommitRecord] {
        &self.buckets[category.index()]
    }

    /// Non-empty buckets in prompt order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[CommitRecord])> {
        Category::ALL
            .iter()
            .map(|&category| (category, self.get(category)))
            .filter(|(_, commits)| !commits.is_empty())
    }

    /// Total number of commits across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Count per category, for non-empty buckets only.
    pub fn count_by_category(&self) -> Vec<(Category, usize)> {
        self.iter().map(|(c, commits)| (c, commits.len())).collect()
    }

    fn push(&mut self, category: Category, commit: CommitRecord) {
        self.buckets[category.index()].push(commit);
    }
}

/// File every commit into exactly one bucket, preserving log order.
pub fn categorize(commits: Vec<CommitRecord>) -> CategorizedCommits {
    let mut categorized = CategorizedCommits::default();
    for commit in commits {
        let category = classify(&commit);
        categorized.push(category, commit);
    }
    categorized
}

/// Pick the bucket for one commit. The first matching rule wins.
pub fn classify(commit: &CommitRecord) -> Category {
    let subject = commit.message.to_lowercase();

    if is_breaking(&subject) {
        return Category::BreakingChanges;
    }

    let prefixed = [
        (FEATURE_PREFIXES, Category::Features),
        (FIX_PREFIXES, Category::Fixes),
        (REFACTOR_PREFIXES, Category::Refactorings),
        (DOCS_PREFIXES, Category::Docs),
        (TEST_PREFIXES, Category::Tests),
    ];
    for (prefixes, category) in prefixed {
        if prefixes.iter().any(|p| subject.starts_with(p)) {
            return category;
        }
    }

    let diff = commit.diff.to_lowercase();
    if FIX_KEYWORDS.iter().any(|k| diff.contains(k)) {
        Category::Fixes
    } else if FEATURE_KEYWORDS.iter().any(|k| diff.contains(k)) {
        Category::Features
    } else {
        Category::Other
    }
}

/// `breaking change` anywhere, or `!` before the first colon.
///
/// Expects an already lowercased subject.
fn is_breaking(subject: &str) -> bool {
    let head = subject.split_once(':').map_or(subject, |(head, _)| head);
    subject.contains("breaking change") || head.contains('!')
}
