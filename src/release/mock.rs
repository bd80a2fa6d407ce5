use std::cell::Cell;

use crate::domain::MacVersion;
use crate::error::{Result, TrackerError};
use crate::release::ReleaseSource;

/// Release source returning a fixed version or a fixed parse failure
pub struct MockReleaseSource {
    latest: Option<MacVersion>,
    url: String,
    fetches: Cell<usize>,
}

impl MockReleaseSource {
    /// Source that always reports `latest`
    pub fn new(latest: MacVersion) -> Self {
        MockReleaseSource {
            latest: Some(latest),
            url: "https://example.invalid/version-history".to_string(),
            fetches: Cell::new(0),
        }
    }

    /// Source whose page never contains a parsable release
    pub fn failing() -> Self {
        MockReleaseSource {
            latest: None,
            url: "https://example.invalid/version-history".to_string(),
            fetches: Cell::new(0),
        }
    }

    /// Number of fetches performed
    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

impl ReleaseSource for MockReleaseSource {
    fn fetch_latest_version(&self) -> Result<MacVersion> {
        self.fetches.set(self.fetches.get() + 1);
        self.latest
            .clone()
            .ok_or_else(|| TrackerError::parse("Could not find the Releases table"))
    }

    fn source_url(&self) -> &str {
        &self.url
    }
}
