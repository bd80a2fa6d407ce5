use std::collections::HashMap;
use std::io::Write;

use serial_test::serial;
use tempfile::NamedTempFile;

use macos_release_tracker::config::{
    Config, APP_ID, APP_PRIVATE_KEY, APP_PRIVATE_KEY_PATH, GITHUB_API_URL_VAR, INSTALLATION_ID,
    ISSUE_LABELS, ISSUE_TITLE_FORMAT, REPO_NAME,
};
use macos_release_tracker::github::GITHUB_API_URL;
use macos_release_tracker::TrackerError;

const PRIVATE_KEY: &str = include_str!("fixtures/test_app_key.pem");

fn env_with(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
    let mut env = HashMap::from([
        (REPO_NAME, "acme/tracker".to_string()),
        (ISSUE_TITLE_FORMAT, "New release: {}".to_string()),
        (APP_ID, "12345".to_string()),
        (INSTALLATION_ID, "678".to_string()),
        (APP_PRIVATE_KEY, PRIVATE_KEY.to_string()),
    ]);
    for (name, value) in pairs {
        env.insert(name, value.to_string());
    }
    env
}

fn load(env: &HashMap<&'static str, String>) -> macos_release_tracker::Result<Config> {
    Config::from_lookup(|name| env.get(name).cloned())
}

#[test]
fn test_private_key_from_file() {
    let mut key_file = NamedTempFile::new().unwrap();
    key_file.write_all(PRIVATE_KEY.as_bytes()).unwrap();
    key_file.flush().unwrap();

    let mut env = env_with(&[(APP_PRIVATE_KEY_PATH, key_file.path().to_str().unwrap())]);
    env.remove(APP_PRIVATE_KEY);

    let config = load(&env).unwrap();
    assert_eq!(config.private_key_pem, PRIVATE_KEY);
}

#[test]
fn test_key_path_takes_precedence_over_inline_key() {
    let mut key_file = NamedTempFile::new().unwrap();
    key_file.write_all(b"from file").unwrap();
    key_file.flush().unwrap();

    let env = env_with(&[(APP_PRIVATE_KEY_PATH, key_file.path().to_str().unwrap())]);

    let config = load(&env).unwrap();
    assert_eq!(config.private_key_pem, "from file");
}

#[test]
fn test_labels_and_api_base() {
    let env = env_with(&[
        (ISSUE_LABELS, " release ,macos"),
        (GITHUB_API_URL_VAR, "https://ghe.example.com/api/v3"),
    ]);

    let config = load(&env).unwrap();
    assert_eq!(config.labels, vec!["release", "macos"]);
    assert_eq!(config.api_base, "https://ghe.example.com/api/v3");
}

#[test]
fn test_invalid_repo_name() {
    for repo in ["tracker", "acme/", "/tracker", "acme/tracker/extra"] {
        let err = load(&env_with(&[(REPO_NAME, repo)])).unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)), "{}: {}", repo, err);
    }
}

#[test]
fn test_title_format_without_slot() {
    let err = load(&env_with(&[(ISSUE_TITLE_FORMAT, "New release")])).unwrap_err();
    assert!(matches!(err, TrackerError::Config(_)));
}

#[test]
fn test_title_format_with_two_slots() {
    let err = load(&env_with(&[(ISSUE_TITLE_FORMAT, "{} and {}")])).unwrap_err();
    assert!(matches!(err, TrackerError::Config(_)));
}

const ALL_VARS: [&str; 8] = [
    REPO_NAME,
    ISSUE_TITLE_FORMAT,
    ISSUE_LABELS,
    APP_ID,
    INSTALLATION_ID,
    APP_PRIVATE_KEY,
    APP_PRIVATE_KEY_PATH,
    GITHUB_API_URL_VAR,
];

fn clear_env() {
    for name in ALL_VARS {
        std::env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_from_process_environment() {
    clear_env();
    std::env::set_var(REPO_NAME, "acme/tracker");
    std::env::set_var(ISSUE_TITLE_FORMAT, "[macOS] {}");
    std::env::set_var(APP_ID, "12345");
    std::env::set_var(INSTALLATION_ID, "678");
    std::env::set_var(APP_PRIVATE_KEY, PRIVATE_KEY);

    let config = Config::from_env().unwrap();
    clear_env();

    assert_eq!(config.repo_name, "acme/tracker");
    assert_eq!(config.title_format.as_str(), "[macOS] {}");
    assert_eq!(config.api_base, GITHUB_API_URL);
}

#[test]
#[serial]
fn test_from_process_environment_missing_repo() {
    clear_env();

    let err = Config::from_env().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Configuration error: Missing environment variable REPO_NAME"
    );
}
