use std::cell::Cell;

use crate::auth::{CredentialProvider, InstallationToken};
use crate::error::{Result, TrackerError};

/// Credential provider handing out a fixed token
pub struct StaticCredentials {
    token: Option<String>,
    mints: Cell<usize>,
}

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        StaticCredentials {
            token: Some(token.into()),
            mints: Cell::new(0),
        }
    }

    /// Provider whose exchange is always rejected
    pub fn rejecting() -> Self {
        StaticCredentials {
            token: None,
            mints: Cell::new(0),
        }
    }

    /// Number of tokens requested
    pub fn mint_count(&self) -> usize {
        self.mints.get()
    }
}

impl CredentialProvider for StaticCredentials {
    fn mint_installation_token(&self) -> Result<InstallationToken> {
        self.mints.set(self.mints.get() + 1);
        self.token
            .as_deref()
            .map(InstallationToken::new)
            .ok_or_else(|| TrackerError::auth("401 Unauthorized: A JSON web token could not be decoded"))
    }
}
