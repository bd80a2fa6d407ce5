use std::cmp::Ordering;
use std::fmt;

/// A single macOS release as reported by the release notes or recorded in an issue title.
///
/// Identity is `(major, minor, patch, build)`. The release date is informational
/// and takes no part in equality or in [`MacVersion::is_newer_than`].
#[derive(Debug, Clone, Default)]
pub struct MacVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: String,
    pub release_date: String,
}

impl MacVersion {
    /// Create a version with a build identifier and no release date
    pub fn new(major: u32, minor: u32, patch: u32, build: impl Into<String>) -> Self {
        MacVersion {
            major,
            minor,
            patch,
            build: build.into(),
            release_date: String::new(),
        }
    }

    /// Attach a free-text release date
    pub fn with_release_date(mut self, release_date: impl Into<String>) -> Self {
        self.release_date = release_date.into();
        self
    }

    /// `"{major}.{minor}.{patch}"`, patch always present
    pub fn full_version(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// Whether this release should be reported relative to `other`.
    ///
    /// Compares `(major, minor, patch)` lexicographically. When those are equal,
    /// any difference in build identifier counts as newer, in both directions.
    /// Build identifiers carry no order of their own, so a re-released build with
    /// an earlier-looking identifier is still reported.
    pub fn is_newer_than(&self, other: &MacVersion) -> bool {
        match (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch)) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => self.build != other.build,
        }
    }

    /// True when both share `major.minor.patch`, regardless of build
    pub fn same_release(&self, other: &MacVersion) -> bool {
        (self.major, self.minor, self.patch) == (other.major, other.minor, other.patch)
    }
}

impl PartialEq for MacVersion {
    fn eq(&self, other: &Self) -> bool {
        self.same_release(other) && self.build == other.build
    }
}

impl Eq for MacVersion {}

impl fmt::Display for MacVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.full_version(), self.build)
    }
}

/// Decide whether `latest` still needs an issue.
///
/// True only when `latest` is newer than every tracked version; vacuously true
/// when nothing is tracked yet.
pub fn needs_issue(latest: &MacVersion, tracked: &[MacVersion]) -> bool {
    tracked.iter().all(|other| latest.is_newer_than(other))
}
