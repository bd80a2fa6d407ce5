//! Release notes: where the latest macOS version comes from.
//!
//! [ReleaseSource] is the seam the orchestrator depends on:
//!
//! - [wikipedia::WikipediaReleaseNotes]: downloads and parses the version history page
//! - [mock::MockReleaseSource]: returns a canned result for tests

pub mod mock;
pub mod parser;
pub mod wikipedia;

pub use mock::MockReleaseSource;
pub use parser::{parse_latest_version, parse_release_cell};
pub use wikipedia::{WikipediaReleaseNotes, VERSION_HISTORY_URL};

use crate::domain::MacVersion;
use crate::error::Result;

/// Source of the most recent macOS release
pub trait ReleaseSource {
    /// Fetch the latest release.
    ///
    /// # Errors
    /// * `TrackerError::Fetch` - the source could not be reached
    /// * `TrackerError::Parse` - the source no longer has the expected structure
    fn fetch_latest_version(&self) -> Result<MacVersion>;

    /// Link credited in created issues
    fn source_url(&self) -> &str;
}
