// Environment-driven configuration. Serialized because the process
// environment is global.

use asana_client::config::{API_KEY_ENV, BASE_URL_ENV, DEBUG_ENV, TIMEOUT_SECS_ENV};
use asana_client::{AsanaClientError, ClientConfig};

use std::time::Duration;

use serial_test::serial;

fn clear_env() {
    // SAFETY: every test touching these variables is #[serial].
    unsafe {
        std::env::remove_var(API_KEY_ENV);
        std::env::remove_var(BASE_URL_ENV);
        std::env::remove_var(TIMEOUT_SECS_ENV);
        std::env::remove_var(DEBUG_ENV);
    }
}

fn set(key: &str, value: &str) {
    // SAFETY: see clear_env.
    unsafe { std::env::set_var(key, value) }
}

#[test]
#[serial]
fn given_all_env_vars_when_from_env_then_config_populated() {
    clear_env();
    set(API_KEY_ENV, "0/from-env");
    set(BASE_URL_ENV, "http://localhost:8080/api/1.0");
    set(TIMEOUT_SECS_ENV, "12");
    set(DEBUG_ENV, "true");

    let config = ClientConfig::from_env().unwrap();

    assert_eq!(config.api_key.as_str(), "0/from-env");
    assert_eq!(config.base_url, "http://localhost:8080/api/1.0");
    assert_eq!(config.timeout, Duration::from_secs(12));
    assert!(config.debug);
    clear_env();
}

#[test]
#[serial]
fn given_only_api_key_when_from_env_then_defaults_used() {
    clear_env();
    set(API_KEY_ENV, "0/from-env");

    let config = ClientConfig::from_env().unwrap();

    assert_eq!(config.base_url, asana_client::ASANA_API_BASE_URL);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(!config.debug);
    clear_env();
}

/// **VALUE**: Verifies a missing key is a configuration error, not a panic.
///
/// **WHY THIS MATTERS**: The most common deployment mistake is forgetting the key.
///
/// **BUG THIS CATCHES**: Would catch an `env::var(..).unwrap()` creeping in.
#[test]
#[serial]
fn given_missing_api_key_when_from_env_then_configuration_error() {
    clear_env();

    let result = ClientConfig::from_env();

    match result {
        Err(AsanaClientError::Configuration { message, .. }) => {
            assert!(message.contains(API_KEY_ENV));
        }
        other => panic!("expected Configuration error, got {other:?}"),
    }
}

#[test]
#[serial]
fn given_bad_timeout_when_from_env_then_configuration_error() {
    clear_env();
    set(API_KEY_ENV, "0/from-env");
    set(TIMEOUT_SECS_ENV, "soon");

    let result = ClientConfig::from_env();

    assert!(matches!(result, Err(AsanaClientError::Configuration { .. })));
    clear_env();
}

#[test]
#[serial]
fn given_bad_debug_flag_when_from_env_then_configuration_error() {
    clear_env();
    set(API_KEY_ENV, "0/from-env");
    set(DEBUG_ENV, "maybe");

    let result = ClientConfig::from_env();

    assert!(matches!(result, Err(AsanaClientError::Configuration { .. })));
    clear_env();
}
