use reqwest::blocking::Client;

use crate::domain::MacVersion;
use crate::error::{Result, TrackerError};
use crate::http;
use crate::release::{parser, ReleaseSource};

/// Page listing every macOS release with its build number
pub const VERSION_HISTORY_URL: &str = "https://en.wikipedia.org/wiki/MacOS_version_history";

/// Browser-like user agent; the wiki rejects some default client agents
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Release source backed by the Wikipedia macOS version history page
pub struct WikipediaReleaseNotes {
    client: Client,
    url: String,
}

impl WikipediaReleaseNotes {
    /// Source reading the default version history page
    pub fn new() -> Result<Self> {
        Self::with_url(VERSION_HISTORY_URL)
    }

    /// Source reading an alternative page with the same layout
    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        Ok(WikipediaReleaseNotes {
            client: http::build_client(BROWSER_USER_AGENT)?,
            url: url.into(),
        })
    }

    fn fetch_html(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| TrackerError::fetch(format!("GET {}: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrackerError::fetch(format!(
                "GET {} returned {}",
                self.url, status
            )));
        }

        response
            .text()
            .map_err(|e| TrackerError::fetch(format!("Reading {}: {}", self.url, e)))
    }
}

impl ReleaseSource for WikipediaReleaseNotes {
    fn fetch_latest_version(&self) -> Result<MacVersion> {
        let html = self.fetch_html()?;
        parser::parse_latest_version(&html)
    }

    fn source_url(&self) -> &str {
        &self.url
    }
}
