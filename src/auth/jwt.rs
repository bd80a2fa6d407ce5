use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// Backdating applied to `iat` to tolerate clock drift against GitHub
pub const CLOCK_SKEW_SECONDS: i64 = 60;

/// Lifetime of the app assertion (GitHub caps this at ten minutes)
pub const ASSERTION_TTL_SECONDS: i64 = 600;

/// Claims of the GitHub App assertion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppClaims {
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

impl AppClaims {
    /// Claims valid from one minute before `now` until ten minutes after it
    pub fn issued_at(app_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        AppClaims {
            iat: (now - Duration::seconds(CLOCK_SKEW_SECONDS)).timestamp(),
            exp: (now + Duration::seconds(ASSERTION_TTL_SECONDS)).timestamp(),
            iss: app_id.into(),
        }
    }
}

/// Sign claims with the app's RSA private key (RS256)
pub fn sign_assertion(claims: &AppClaims, private_key_pem: &str) -> Result<String> {
    let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
        .map_err(|e| TrackerError::auth(format!("Invalid app private key: {}", e)))?;

    encode(&Header::new(Algorithm::RS256), claims, &key)
        .map_err(|e| TrackerError::auth(format!("Failed to sign app assertion: {}", e)))
}
