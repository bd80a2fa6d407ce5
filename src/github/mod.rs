//! Issue tracker access.
//!
//! The repository's issues are the system of record for which releases have
//! already been reported; nothing is stored locally. [IssueTracker] abstracts
//! the REST calls so paging and filtering can be exercised without a network:
//!
//! - [client::GithubIssueClient]: the GitHub REST API
//! - [mock::MockIssueTracker]: in-memory pages for tests
//!
//! [list_tracked_versions] walks every page lazily and yields the versions
//! recorded in titles of issues opened by the tracker's own account.

pub mod client;
pub mod mock;

pub use client::GithubIssueClient;
pub use mock::MockIssueTracker;

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::auth::InstallationToken;
use crate::domain::{MacVersion, TitlePattern};
use crate::error::Result;

/// Default GitHub REST API root
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Name fragment expected in the tracker's bot login
pub const APP_NAME: &str = "macos-release-tracker";

/// Suffix GitHub appends to app account logins
pub const BOT_SUFFIX: &str = "[bot]";

/// Issues requested per page
pub const PAGE_SIZE: u32 = 100;

/// Author of an issue as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueAuthor {
    pub login: String,
}

/// The subset of an issue listing entry the tracker reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueSummary {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub user: Option<IssueAuthor>,
}

impl IssueSummary {
    pub fn new(number: u64, title: impl Into<String>, login: impl Into<String>) -> Self {
        IssueSummary {
            number,
            title: title.into(),
            user: Some(IssueAuthor {
                login: login.into(),
            }),
        }
    }

    pub fn author_login(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.login.as_str())
    }
}

/// Payload for creating an issue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// The created issue as returned by the API
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedIssue {
    pub number: u64,
    #[serde(default)]
    pub html_url: String,
}

/// Which issue authors count as the tracker itself
#[derive(Debug, Clone, PartialEq)]
pub enum AuthorFilter {
    /// Login contains `app_name` and ends with `[bot]`
    BotAccount { app_name: String },
    /// Login equals `login` exactly
    Exact { login: String },
}

impl AuthorFilter {
    pub fn bot_account(app_name: impl Into<String>) -> Self {
        AuthorFilter::BotAccount {
            app_name: app_name.into(),
        }
    }

    pub fn exact(login: impl Into<String>) -> Self {
        AuthorFilter::Exact {
            login: login.into(),
        }
    }

    pub fn accepts(&self, login: &str) -> bool {
        match self {
            AuthorFilter::BotAccount { app_name } => {
                login.contains(app_name.as_str()) && login.ends_with(BOT_SUFFIX)
            }
            AuthorFilter::Exact { login: expected } => login == expected,
        }
    }
}

impl Default for AuthorFilter {
    fn default() -> Self {
        AuthorFilter::bot_account(APP_NAME)
    }
}

/// Remote issue storage for one repository
pub trait IssueTracker {
    /// Fetch one page (1-based) of issues in any state, [PAGE_SIZE] per page.
    ///
    /// An empty page means there are no further issues.
    fn list_issues_page(&self, token: &InstallationToken, page: u32) -> Result<Vec<IssueSummary>>;

    /// Create an issue.
    ///
    /// # Errors
    /// * `TrackerError::IssueCreate` - the API rejected the request
    fn create_issue(&self, token: &InstallationToken, issue: &NewIssue) -> Result<CreatedIssue>;
}

/// Lazily paged versions recorded by tracker-authored issues.
///
/// Pages are requested only when the previous one is exhausted. Iteration ends
/// at the first empty page and stops after yielding an error. Starting over
/// means calling [list_tracked_versions] again, which begins at page 1.
pub struct TrackedVersions<'a> {
    tracker: &'a dyn IssueTracker,
    token: &'a InstallationToken,
    pattern: &'a TitlePattern,
    authors: &'a AuthorFilter,
    next_page: u32,
    buffered: std::vec::IntoIter<IssueSummary>,
    finished: bool,
}

impl TrackedVersions<'_> {
    fn recorded_version(&self, issue: &IssueSummary) -> Option<MacVersion> {
        let login = issue.author_login()?;
        if !self.authors.accepts(login) {
            return None;
        }
        self.pattern.parse(&issue.title)
    }
}

impl Iterator for TrackedVersions<'_> {
    type Item = Result<MacVersion>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            while let Some(issue) = self.buffered.next() {
                if let Some(version) = self.recorded_version(&issue) {
                    return Some(Ok(version));
                }
            }

            if self.finished {
                return None;
            }

            match self.tracker.list_issues_page(self.token, self.next_page) {
                Ok(issues) if issues.is_empty() => {
                    self.finished = true;
                    return None;
                }
                Ok(issues) => {
                    self.next_page += 1;
                    self.buffered = issues.into_iter();
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl FusedIterator for TrackedVersions<'_> {}

/// Versions already reported in `tracker`, as matched by `pattern` on titles of
/// issues whose author passes `authors`
pub fn list_tracked_versions<'a>(
    tracker: &'a dyn IssueTracker,
    token: &'a InstallationToken,
    pattern: &'a TitlePattern,
    authors: &'a AuthorFilter,
) -> TrackedVersions<'a> {
    TrackedVersions {
        tracker,
        token,
        pattern,
        authors,
        next_page: 1,
        buffered: Vec::new().into_iter(),
        finished: false,
    }
}
