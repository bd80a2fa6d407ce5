use chrono::Utc;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};

use macos_release_tracker::auth::{sign_assertion, AppClaims};
use macos_release_tracker::TrackerError;

const PRIVATE_KEY: &str = include_str!("fixtures/test_app_key.pem");
const PUBLIC_KEY: &str = include_str!("fixtures/test_app_key.pub.pem");

fn verify(token: &str, issuer: &str) -> AppClaims {
    let key = DecodingKey::from_rsa_pem(PUBLIC_KEY.as_bytes()).unwrap();
    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_issuer(&[issuer]);
    decode::<AppClaims>(token, &key, &validation).unwrap().claims
}

#[test]
fn test_assertion_verifies_with_public_key() {
    let claims = AppClaims::issued_at("12345", Utc::now());
    let token = sign_assertion(&claims, PRIVATE_KEY).unwrap();

    let decoded = verify(&token, "12345");
    assert_eq!(decoded, claims);
}

#[test]
fn test_assertion_header_is_rs256() {
    let claims = AppClaims::issued_at("12345", Utc::now());
    let token = sign_assertion(&claims, PRIVATE_KEY).unwrap();

    assert_eq!(decode_header(&token).unwrap().alg, Algorithm::RS256);
}

#[test]
fn test_assertion_window_spans_eleven_minutes() {
    let now = Utc::now();
    let claims = AppClaims::issued_at("12345", now);
    let decoded = verify(&sign_assertion(&claims, PRIVATE_KEY).unwrap(), "12345");

    assert_eq!(decoded.exp - decoded.iat, 660);
    assert!(decoded.iat < now.timestamp());
    assert!(decoded.exp > now.timestamp());
}

#[test]
fn test_public_key_is_not_a_signing_key() {
    let claims = AppClaims::issued_at("12345", Utc::now());
    let err = sign_assertion(&claims, PUBLIC_KEY).unwrap_err();
    assert!(matches!(err, TrackerError::Auth(_)));
    assert!(err.to_string().contains("Invalid app private key"));
}
