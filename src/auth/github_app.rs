use chrono::Utc;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;

use crate::auth::jwt::{sign_assertion, AppClaims};
use crate::auth::{CredentialProvider, InstallationToken};
use crate::error::{Result, TrackerError};
use crate::http::{self, API_USER_AGENT, GITHUB_ACCEPT};

#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    token: Option<String>,
}

/// Exchanges a signed app assertion for an installation access token
pub struct GithubAppCredentials {
    client: Client,
    api_base: String,
    app_id: String,
    installation_id: String,
    private_key_pem: String,
}

impl GithubAppCredentials {
    pub fn new(
        api_base: impl Into<String>,
        app_id: impl Into<String>,
        installation_id: impl Into<String>,
        private_key_pem: impl Into<String>,
    ) -> Result<Self> {
        Ok(GithubAppCredentials {
            client: http::build_client(API_USER_AGENT)?,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            app_id: app_id.into(),
            installation_id: installation_id.into(),
            private_key_pem: private_key_pem.into(),
        })
    }

    /// Installation-scoped token endpoint
    pub fn token_url(&self) -> String {
        format!(
            "{}/app/installations/{}/access_tokens",
            self.api_base, self.installation_id
        )
    }
}

impl CredentialProvider for GithubAppCredentials {
    fn mint_installation_token(&self) -> Result<InstallationToken> {
        let claims = AppClaims::issued_at(self.app_id.as_str(), Utc::now());
        let assertion = sign_assertion(&claims, &self.private_key_pem)?;
        let url = self.token_url();

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", assertion))
            .header(ACCEPT, GITHUB_ACCEPT)
            .send()
            .map_err(|e| TrackerError::auth(format!("POST {}: {}", url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| TrackerError::auth(format!("Reading token response: {}", e)))?;
        if !status.is_success() {
            return Err(TrackerError::auth(format!(
                "POST {} returned {}: {}",
                url,
                status,
                http::excerpt(&body)
            )));
        }

        let parsed: AccessTokenResponse = serde_json::from_str(&body)
            .map_err(|e| TrackerError::auth(format!("Malformed token response: {}", e)))?;
        parsed
            .token
            .filter(|token| !token.is_empty())
            .map(InstallationToken::new)
            .ok_or_else(|| TrackerError::auth("Token response has no token field"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::stub::StubServer;

    const KEY: &str = include_str!("../../tests/fixtures/test_app_key.pem");

    #[test]
    fn test_token_url() {
        let creds =
            GithubAppCredentials::new("https://api.github.com/", "12345", "678", KEY).unwrap();
        assert_eq!(
            creds.token_url(),
            "https://api.github.com/app/installations/678/access_tokens"
        );
    }

    #[test]
    fn test_bad_key_fails_before_network() {
        let creds =
            GithubAppCredentials::new("http://127.0.0.1:9", "12345", "678", "garbage").unwrap();
        let err = creds.mint_installation_token().unwrap_err();
        assert!(err.to_string().contains("Invalid app private key"));
    }

    #[test]
    fn test_unreachable_endpoint_is_auth_error() {
        let creds = GithubAppCredentials::new("http://127.0.0.1:9", "12345", "678", KEY).unwrap();
        let err = creds.mint_installation_token().unwrap_err();
        assert!(matches!(err, TrackerError::Auth(_)));
    }

    #[test]
    fn test_exchange_sends_bearer_assertion() {
        let server = StubServer::respond(
            "201 Created",
            r#"{"token":"ghs_abc","expires_at":"2024-05-13T13:00:00Z"}"#,
        );
        let creds = GithubAppCredentials::new(server.url.as_str(), "12345", "678", KEY).unwrap();

        let token = creds.mint_installation_token().unwrap();
        assert_eq!(token.secret(), "ghs_abc");

        let request = server.received();
        assert!(request.starts_with("post /app/installations/678/access_tokens "));
        assert!(request.contains("authorization: bearer eyj"), "{}", request);
        assert!(request.contains("accept: application/vnd.github+json"));
    }

    #[test]
    fn test_rejected_exchange_is_auth_error() {
        let server = StubServer::respond("401 Unauthorized", r#"{"message":"Bad credentials"}"#);
        let creds = GithubAppCredentials::new(server.url.as_str(), "12345", "678", KEY).unwrap();

        let err = creds.mint_installation_token().unwrap_err();
        assert!(matches!(err, TrackerError::Auth(_)));
        let message = err.to_string();
        assert!(message.contains("401"), "{}", message);
        assert!(message.contains("Bad credentials"), "{}", message);
    }

    #[test]
    fn test_response_without_token_is_auth_error() {
        let server = StubServer::respond("201 Created", r#"{"expires_at":"2024-05-13T13:00:00Z"}"#);
        let creds = GithubAppCredentials::new(server.url.as_str(), "12345", "678", KEY).unwrap();

        let err = creds.mint_installation_token().unwrap_err();
        assert!(matches!(err, TrackerError::Auth(_)));
    }

    #[test]
    fn test_token_response_shapes() {
        let ok: AccessTokenResponse =
            serde_json::from_str(r#"{"token":"ghs_abc","expires_at":"2024-05-13T13:00:00Z"}"#)
                .unwrap();
        assert_eq!(ok.token.as_deref(), Some("ghs_abc"));

        let missing: AccessTokenResponse = serde_json::from_str(r#"{"message":"x"}"#).unwrap();
        assert!(missing.token.is_none());
    }
}
