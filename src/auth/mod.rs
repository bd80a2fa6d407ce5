//! GitHub App authentication.
//!
//! A run mints one installation token: a short-lived RS256 assertion signed
//! with the app key ([jwt]) is exchanged at the installation token endpoint
//! ([github_app]). Tokens are never cached between runs.

pub mod github_app;
pub mod jwt;
pub mod mock;

pub use github_app::GithubAppCredentials;
pub use jwt::{sign_assertion, AppClaims};
pub use mock::StaticCredentials;

use std::fmt;

use crate::error::Result;

/// Installation access token used for issue API calls
#[derive(Clone, PartialEq, Eq)]
pub struct InstallationToken(String);

impl InstallationToken {
    pub fn new(token: impl Into<String>) -> Self {
        InstallationToken(token.into())
    }

    /// The raw secret, for the Authorization header
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for InstallationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InstallationToken(***)")
    }
}

/// Supplies an installation token for the current run
pub trait CredentialProvider {
    /// Mint a fresh token.
    ///
    /// # Errors
    /// * `TrackerError::Auth` - signing failed or the exchange was rejected
    fn mint_installation_token(&self) -> Result<InstallationToken>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_debug_is_redacted() {
        let token = InstallationToken::new("ghs_secret");
        assert_eq!(format!("{:?}", token), "InstallationToken(***)");
        assert_eq!(token.secret(), "ghs_secret");
    }
}
