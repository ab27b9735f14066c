//! A dated changelog entry.

use chrono::{Local, NaiveDate};

/// One release section: header line plus the generated Markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub version: String,
    pub date: NaiveDate,
    pub body: String,
}

impl ChangelogEntry {
    pub fn new(version: impl Into<String>, date: NaiveDate, body: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date,
            body: body.into(),
        }
    }

    /// Entry dated with today's local calendar date.
    pub fn today(version: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(version, Local::now().date_naive(), body)
    }

    /// `## [<version>] - <YYYY-MM-DD>`
    pub fn header(&self) -> String {
        format!("## [{}] - {}", self.version, self.date.format("%Y-%m-%d"))
    }

    /// Header, body, then a blank line.
    pub fn render(&self) -> String {
        format!("{}\n{}\n\n", self.header(), self.body)
    }
}
