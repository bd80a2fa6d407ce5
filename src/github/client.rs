use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};

use crate::auth::InstallationToken;
use crate::error::{Result, TrackerError};
use crate::github::{CreatedIssue, IssueSummary, IssueTracker, NewIssue, PAGE_SIZE};
use crate::http::{self, API_USER_AGENT, GITHUB_ACCEPT};

/// GitHub REST client for the issues of one repository
pub struct GithubIssueClient {
    client: Client,
    api_base: String,
    repo: String,
}

impl GithubIssueClient {
    /// Client for `repo` (`"owner/repo"`) under `api_base`
    pub fn new(api_base: impl Into<String>, repo: impl Into<String>) -> Result<Self> {
        Ok(GithubIssueClient {
            client: http::build_client(API_USER_AGENT)?,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            repo: repo.into(),
        })
    }

    /// The repository's issues endpoint
    pub fn issues_url(&self) -> String {
        format!("{}/repos/{}/issues", self.api_base, self.repo)
    }
}

fn authorization(token: &InstallationToken) -> String {
    format!("token {}", token.secret())
}

impl IssueTracker for GithubIssueClient {
    fn list_issues_page(&self, token: &InstallationToken, page: u32) -> Result<Vec<IssueSummary>> {
        let url = self.issues_url();
        let per_page = PAGE_SIZE.to_string();
        let page_number = page.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("state", "all"),
                ("per_page", per_page.as_str()),
                ("page", page_number.as_str()),
            ])
            .header(AUTHORIZATION, authorization(token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .send()
            .map_err(|e| TrackerError::issue_list(format!("GET {} page {}: {}", url, page, e)))?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(TrackerError::issue_list(format!(
                "GET {} page {} returned {}: {}",
                url,
                page,
                status,
                http::excerpt(&body)
            )));
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn create_issue(&self, token: &InstallationToken, issue: &NewIssue) -> Result<CreatedIssue> {
        let url = self.issues_url();

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, authorization(token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .json(issue)
            .send()
            .map_err(|e| TrackerError::issue_create(format!("POST {}: {}", url, e)))?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(TrackerError::issue_create(format!(
                "POST {} returned {}: {}",
                url,
                status,
                http::excerpt(&body)
            )));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
