//! Semver suggestion from the last tag and categorized commits.

use semver::Version;

use crate::changelog::{CategorizedCommits, Category};
use crate::git::{ReferenceKind, ReferencePoint};

/// Type of version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

/// Suggest the next version when the range starts at a semver tag.
///
/// - Breaking changes = major bump
/// - Features = minor bump
/// - Anything else = patch bump
///
/// Ranges counted from the root commit, or from a tag that is not semver,
/// get no suggestion. Neither does a tag whose bumped component would overflow.
pub fn suggest_next_version(
    reference: &ReferencePoint,
    categorized: &CategorizedCommits,
) -> Option<Version> {
    if reference.kind != ReferenceKind::Tag {
        return None;
    }

    let base = version_from_tag(&reference.name)?;
    apply_bump_to_version(&base, determine_bump_type(categorized))
}

/// Determine the bump type from the populated categories.
pub fn determine_bump_type(categorized: &CategorizedCommits) -> BumpType {
    if !categorized.get(Category::BreakingChanges).is_empty() {
        BumpType::Major
    } else if !categorized.get(Category::Features).is_empty() {
        BumpType::Minor
    } else {
        BumpType::Patch
    }
}

/// Apply a bump. Pre-release and build metadata are dropped.
///
/// Returns `None` when the bumped component would overflow.
pub fn apply_bump_to_version(base: &Version, bump: BumpType) -> Option<Version> {
    let next = match bump {
        BumpType::Major => Version::new(base.major.checked_add(1)?, 0, 0),
        BumpType::Minor => Version::new(base.major, base.minor.checked_add(1)?, 0),
        BumpType::Patch => Version::new(base.major, base.minor, base.patch.checked_add(1)?),
    };
    Some(next)
}

/// Extract semver version from a tag name.
/// Handles both "v1.2.3" and "1.2.3" formats.
pub fn version_from_tag(tag_name: &str) -> Option<Version> {
    let version_str = tag_name.strip_prefix('v').unwrap_or(tag_name);
    Version::parse(version_str).ok()
}
