//! Blocking HTTP client construction shared by the page fetcher and the GitHub clients.

use reqwest::blocking::Client;

use crate::error::Result;

/// User agent sent to the GitHub API
pub const API_USER_AGENT: &str = concat!("macos-release-tracker/", env!("CARGO_PKG_VERSION"));

/// Media type requested from the GitHub REST API
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Build a blocking client that keeps no idle connections between requests.
///
/// No timeout is set beyond reqwest's defaults and nothing is retried.
pub fn build_client(user_agent: &str) -> Result<Client> {
    let client = Client::builder()
        .user_agent(user_agent)
        .pool_max_idle_per_host(0)
        .build()?;
    Ok(client)
}

/// Shorten a response body for inclusion in an error message
pub(crate) fn excerpt(body: &str) -> &str {
    const LIMIT: usize = 200;
    match body.char_indices().nth(LIMIT) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
