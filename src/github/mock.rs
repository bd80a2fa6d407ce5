use std::cell::RefCell;

use crate::auth::InstallationToken;
use crate::error::{Result, TrackerError};
use crate::github::{CreatedIssue, IssueSummary, IssueTracker, NewIssue};

/// In-memory issue tracker for testing without the GitHub API
pub struct MockIssueTracker {
    pages: Vec<Vec<IssueSummary>>,
    failing_page: Option<u32>,
    reject_create: bool,
    requested_pages: RefCell<Vec<u32>>,
    created: RefCell<Vec<NewIssue>>,
}

impl MockIssueTracker {
    /// Create a tracker with no issues
    pub fn new() -> Self {
        Self::with_pages(Vec::new())
    }

    /// Serve `pages[0]` as page 1, `pages[1]` as page 2, and so on; later pages are empty
    pub fn with_pages(pages: Vec<Vec<IssueSummary>>) -> Self {
        MockIssueTracker {
            pages,
            failing_page: None,
            reject_create: false,
            requested_pages: RefCell::new(Vec::new()),
            created: RefCell::new(Vec::new()),
        }
    }

    /// Fail when `page` is requested
    pub fn failing_on_page(mut self, page: u32) -> Self {
        self.failing_page = Some(page);
        self
    }

    /// Reject every issue creation
    pub fn rejecting_creates(mut self) -> Self {
        self.reject_create = true;
        self
    }

    /// Pages requested so far, in order
    pub fn requested_pages(&self) -> Vec<u32> {
        self.requested_pages.borrow().clone()
    }

    /// Issues created so far
    pub fn created_issues(&self) -> Vec<NewIssue> {
        self.created.borrow().clone()
    }
}

impl Default for MockIssueTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueTracker for MockIssueTracker {
    fn list_issues_page(&self, _token: &InstallationToken, page: u32) -> Result<Vec<IssueSummary>> {
        self.requested_pages.borrow_mut().push(page);

        if self.failing_page == Some(page) {
            return Err(TrackerError::issue_list(format!(
                "page {} returned 502 Bad Gateway",
                page
            )));
        }

        let index = (page as usize).saturating_sub(1);
        Ok(self.pages.get(index).cloned().unwrap_or_default())
    }

    fn create_issue(&self, _token: &InstallationToken, issue: &NewIssue) -> Result<CreatedIssue> {
        if self.reject_create {
            return Err(TrackerError::issue_create("422 Unprocessable Entity"));
        }

        let mut created = self.created.borrow_mut();
        created.push(issue.clone());
        let number = created.len() as u64;

        Ok(CreatedIssue {
            number,
            html_url: format!("https://github.com/mock/repo/issues/{}", number),
        })
    }
}
