//! End-to-end changelog run: history, categories, generation, write.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use semver::Version;
use tracing::{debug, warn};

use crate::changelog::{categorize, prepend_entry, read_existing_versions, ChangelogEntry};
use crate::error::{RunError, VersionError};
use crate::git::{read_history, HistorySource, ReferenceKind, ReferencePoint};
use crate::llm::{ChangelogGenerator, CompletionService};
use crate::version::suggest_next_version;

/// What a run ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing since the reference point; the changelog was not touched.
    NoCommits { reference: ReferencePoint },
    /// Text was generated and printed but not written.
    DryRun {
        reference: ReferencePoint,
        commit_count: usize,
        body: String,
    },
    Written {
        reference: ReferencePoint,
        commit_count: usize,
        entry: ChangelogEntry,
    },
}

/// Wires a history source and a generator to a changelog file.
pub struct Pipeline<H, S> {
    history: H,
    generator: ChangelogGenerator<S>,
    changelog_path: PathBuf,
    dry_run: bool,
    entry_date: Option<NaiveDate>,
}

impl<H: HistorySource, S: CompletionService> Pipeline<H, S> {
    pub fn new(history: H, generator: ChangelogGenerator<S>, changelog_path: impl Into<PathBuf>) -> Self {
        Self {
            history,
            generator,
            changelog_path: changelog_path.into(),
            dry_run: false,
            entry_date: None,
        }
    }

    /// Print the generated text without asking for a version or writing.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Date entries with `date` instead of today.
    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.entry_date = Some(date);
        self
    }

    pub fn changelog_path(&self) -> &Path {
        &self.changelog_path
    }

    /// Run once.
    ///
    /// `choose_version` is only called after text has been generated, and
    /// receives a semver suggestion when the range starts at a semver tag.
    pub async fn run<F>(&self, choose_version: F) -> Result<RunOutcome, RunError>
    where
        F: FnOnce(Option<&Version>) -> Result<String, VersionError>,
    {
        let history = read_history(&self.history)?;
        let reference = history.reference;

        if reference.kind == ReferenceKind::RootCommit {
            println!("No tags found. Using the first commit as reference.");
        }

        if history.commits.is_empty() {
            return Ok(RunOutcome::NoCommits { reference });
        }

        let commit_count = history.commits.len();
        println!("Found {} commits since {}", commit_count, reference);

        let categorized = categorize(history.commits);
        for (category, count) in categorized.count_by_category() {
            debug!(%category, count, "Categorized commits");
        }

        println!("Generating detailed changelog...");
        let body = self.generator.generate(&categorized).await?;

        println!("\nGenerated Changelog:");
        println!("{}", body);

        if self.dry_run {
            return Ok(RunOutcome::DryRun {
                reference,
                commit_count,
                body,
            });
        }

        let suggestion = suggest_next_version(&reference, &categorized);
        let version = choose_version(suggestion.as_ref())?;

        let existing = read_existing_versions(&self.changelog_path)?;
        if existing.iter().any(|v| v == &version) {
            warn!(
                version = %version,
                path = %self.changelog_path.display(),
                "Changelog already has an entry for this version; adding another above it"
            );
        }

        let entry = match self.entry_date {
            Some(date) => ChangelogEntry::new(version, date, body),
            None => ChangelogEntry::today(version, body),
        };
        prepend_entry(&self.changelog_path, &entry)?;

        Ok(RunOutcome::Written {
            reference,
            commit_count,
            entry,
        })
    }
}
