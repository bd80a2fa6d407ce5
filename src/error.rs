use thiserror::Error;

/// Unified error type for macos-release-tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Failed to fetch release notes: {0}")]
    Fetch(String),

    #[error("Release notes parse error: {0}")]
    Parse(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Issue listing failed: {0}")]
    IssueList(String),

    #[error("Issue creation failed: {0}")]
    IssueCreate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in macos-release-tracker
pub type Result<T> = std::result::Result<T, TrackerError>;

impl TrackerError {
    /// Create a fetch error with context
    pub fn fetch(msg: impl Into<String>) -> Self {
        TrackerError::Fetch(msg.into())
    }

    /// Create a parse error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        TrackerError::Parse(msg.into())
    }

    /// Create an authentication error with context
    pub fn auth(msg: impl Into<String>) -> Self {
        TrackerError::Auth(msg.into())
    }

    /// Create an issue listing error with context
    pub fn issue_list(msg: impl Into<String>) -> Self {
        TrackerError::IssueList(msg.into())
    }

    /// Create an issue creation error with context
    pub fn issue_create(msg: impl Into<String>) -> Self {
        TrackerError::IssueCreate(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TrackerError::Config(msg.into())
    }
}
