//! Issue title rendering and parsing.
//!
//! Titles are the only record of which releases have been reported, so the text
//! written by [`TitleFormat::render`] must always be readable by
//! [`TitlePattern::parse`]. Both directions live here.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use crate::domain::version::MacVersion;
use crate::error::{Result, TrackerError};

/// Default pattern matched against existing issue titles.
///
/// Groups: major, minor, optional patch, build identifier (2+ alphanumerics).
pub const ISSUE_VERSION_PATTERN: &str =
    r"^.*macOS\s+(\d+)\.(\d+)(?:\.(\d+))?\s+([A-Za-z0-9]{2,}).*$";

/// Placeholder replaced by the version descriptor in `ISSUE_TITLE_FORMAT`
pub const TITLE_SLOT: &str = "{}";

/// Text inserted into the title slot: `"macOS {major}.{minor}.{patch} {build}"`
pub fn version_descriptor(version: &MacVersion) -> String {
    format!("macOS {} {}", version.full_version(), version.build)
}

fn default_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        RegexBuilder::new(ISSUE_VERSION_PATTERN)
            .case_insensitive(true)
            .build()
            .expect("default issue title pattern compiles")
    })
}

/// Compiled title pattern with four capture groups
#[derive(Debug, Clone)]
pub struct TitlePattern {
    regex: Regex,
}

impl TitlePattern {
    /// Compile a custom pattern (case-insensitive).
    ///
    /// The pattern must expose at least four capture groups in the order
    /// major, minor, patch, build.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| TrackerError::config(format!("Invalid title pattern: {}", e)))?;

        if regex.captures_len() < 5 {
            return Err(TrackerError::config(format!(
                "Title pattern '{}' needs four capture groups (major, minor, patch, build)",
                pattern
            )));
        }

        Ok(TitlePattern { regex })
    }

    /// Extract a version from an issue title.
    ///
    /// Returns `None` when the title does not match from its start or a number
    /// does not fit in a `u32`. A missing patch group yields patch 0.
    pub fn parse(&self, title: &str) -> Option<MacVersion> {
        let captures = self.regex.captures(title)?;
        if captures.get(0)?.start() != 0 {
            return None;
        }

        let major = captures.get(1)?.as_str().parse::<u32>().ok()?;
        let minor = captures.get(2)?.as_str().parse::<u32>().ok()?;
        let patch = match captures.get(3) {
            Some(m) => m.as_str().parse::<u32>().ok()?,
            None => 0,
        };
        let build = captures.get(4)?.as_str();

        Some(MacVersion::new(major, minor, patch, build))
    }
}

impl Default for TitlePattern {
    fn default() -> Self {
        TitlePattern {
            regex: default_regex().clone(),
        }
    }
}

/// The configured issue title template, e.g. `"New release: {}"`
#[derive(Debug, Clone, PartialEq)]
pub struct TitleFormat {
    template: String,
}

impl TitleFormat {
    /// Validate a template against the default title pattern.
    ///
    /// The template must contain exactly one `{}` slot, and a title rendered
    /// from it must parse back to the same version. Otherwise issues filed with
    /// it would never be recognized as already tracked.
    pub fn new(template: impl Into<String>) -> Result<Self> {
        Self::checked(template, &TitlePattern::default())
    }

    /// Validate a template against a specific title pattern
    pub fn checked(template: impl Into<String>, pattern: &TitlePattern) -> Result<Self> {
        let template = template.into();
        let slots = template.matches(TITLE_SLOT).count();
        if slots != 1 {
            return Err(TrackerError::config(format!(
                "Issue title format '{}' must contain exactly one {{}} slot, found {}",
                template, slots
            )));
        }

        let format = TitleFormat { template };
        let probe = MacVersion::new(12, 3, 4, "21E258");
        let rendered = format.render(&probe);
        if pattern.parse(&rendered).as_ref() != Some(&probe) {
            return Err(TrackerError::config(format!(
                "Issue title format '{}' renders '{}', which does not parse back to {}",
                format.template, rendered, probe
            )));
        }

        Ok(format)
    }

    /// Render the issue title for a release
    pub fn render(&self, version: &MacVersion) -> String {
        self.template
            .replacen(TITLE_SLOT, &version_descriptor(version), 1)
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }
}
