//! Integration tests for changelog writing and version detection.

use chrono::NaiveDate;

use changescribe::changelog::{prepend_entry, read_existing_versions, ChangelogEntry};

fn entry(version: &str, day: u32, body: &str) -> ChangelogEntry {
    ChangelogEntry::new(version, NaiveDate::from_ymd_opt(2024, 3, day).unwrap(), body)
}

#[test]
fn test_successive_entries_stack_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("CHANGELOG.md");
    let prior = "# Changelog\n\nHand-written history.\n";
    std::fs::write(&path, prior).unwrap();

    let first = entry("1.0.0", 1, "### Features\n- First");
    let second = entry("1.1.0", 2, "### Fixes\n- Second");
    prepend_entry(&path, &first).unwrap();
    prepend_entry(&path, &second).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let expected = format!("{}{}{}", second.render(), first.render(), prior);
    assert_eq!(content, expected);
    assert!(content.starts_with("## [1.1.0] - 2024-03-02\n### Fixes\n- Second\n\n## [1.0.0]"));
}

#[test]
fn test_new_file_contains_only_the_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("CHANGELOG.md");

    prepend_entry(&path, &entry("2.0.0", 5, "Initial release.")).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "## [2.0.0] - 2024-03-05\nInitial release.\n\n");
}

#[test]
fn test_written_versions_are_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("CHANGELOG.md");

    prepend_entry(&path, &entry("0.9.0", 1, "- Older")).unwrap();
    prepend_entry(&path, &entry("1.0.0", 2, "- Newer")).unwrap();

    let versions = read_existing_versions(&path).unwrap();
    assert_eq!(versions, vec!["1.0.0", "0.9.0"]);
}

#[test]
fn test_missing_changelog_has_no_versions() {
    let dir = tempfile::tempdir().unwrap();
    let versions = read_existing_versions(&dir.path().join("CHANGELOG.md")).unwrap();
    assert!(versions.is_empty());
}

#[test]
fn test_unwritable_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be read as a file.
    let result = prepend_entry(dir.path(), &entry("1.0.0", 1, "- x"));
    assert!(result.is_err());
}
