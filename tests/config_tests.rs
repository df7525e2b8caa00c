//! Configuration module tests

use ppl_soap_translator::config::settings::{Settings, DEFAULT_REST_BASE_URL};
use ppl_soap_translator::config::AppConfig;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

const ENV_VARS: [&str; 8] = [
    "SERVER_HOST",
    "SERVER_PORT",
    "REST_BASE_URL",
    "MAX_INPUT_SIZE",
    "CORS_ENABLED",
    "ALLOWED_ORIGINS",
    "RUST_LOG",
    "LOG_FORMAT",
];

fn cleanup_test_env() {
    for var in &ENV_VARS {
        env::remove_var(var);
    }
}

// Environment is process-wide, so every env-driven case lives in this one test
#[test]
fn test_settings_from_environment() {
    cleanup_test_env();
    let defaults = Settings::from_env().unwrap();
    assert_eq!(defaults.server.port, 8084);
    assert_eq!(defaults.translator.rest_base_url, DEFAULT_REST_BASE_URL);
    assert_eq!(defaults.request.max_input_size, 1_048_576);
    assert_eq!(defaults.security.allowed_origins, vec!["*".to_string()]);
    assert!(defaults.validate().is_ok());

    env::set_var("SERVER_HOST", "127.0.0.1");
    env::set_var("SERVER_PORT", "9090");
    env::set_var("REST_BASE_URL", "https://sandbox.example.test/myapi2");
    env::set_var("MAX_INPUT_SIZE", "2048");
    env::set_var("CORS_ENABLED", "false");
    env::set_var("ALLOWED_ORIGINS", "https://a.example, https://b.example");
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");

    let settings = Settings::new().unwrap();
    assert_eq!(settings.bind_address(), "127.0.0.1:9090");
    assert_eq!(settings.translator.rest_base_url, "https://sandbox.example.test/myapi2");
    assert_eq!(settings.request.max_input_size, 2048);
    assert!(!settings.security.cors_enabled);
    assert_eq!(
        settings.security.allowed_origins,
        vec!["https://a.example".to_string(), "https://b.example".to_string()]
    );
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.logging.format, "json");

    env::set_var("RUST_LOG", "ppl_soap_translator=trace,tower_http=warn");
    assert!(Settings::new().is_ok());
    env::set_var("RUST_LOG", "debug");

    env::set_var("SERVER_PORT", "not-a-port");
    assert!(Settings::new().is_err());
    env::set_var("SERVER_PORT", "9090");

    env::set_var("LOG_FORMAT", "xml");
    assert!(Settings::new().is_err());
    env::set_var("LOG_FORMAT", "text");

    env::set_var("REST_BASE_URL", "api.example.test");
    assert!(Settings::new().is_err());

    cleanup_test_env();
}

#[test]
fn test_validation_rules() {
    let mut settings = Settings::default();
    settings.server.port = 0;
    assert!(settings.validate().is_err());

    let mut settings = Settings::default();
    settings.logging.level = "info,tower_http=noisy".to_string();
    assert!(settings.validate().is_err());
}

#[test]
fn test_file_overrides_settings() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"server": {{"host": "127.0.0.1", "port": 8100}}, "restBaseUrl": "https://file.example.test"}}"#
    )
    .unwrap();

    let config = AppConfig::load(file.path()).unwrap();
    let mut settings = Settings::default();
    config.apply_to(&mut settings);

    assert_eq!(settings.bind_address(), "127.0.0.1:8100");
    assert_eq!(settings.translator.rest_base_url, "https://file.example.test");
    assert!(settings.validate().is_ok());
}

#[test]
fn test_empty_file_changes_nothing() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{}}").unwrap();

    let config = AppConfig::load(file.path()).unwrap();
    let mut settings = Settings::default();
    config.apply_to(&mut settings);

    assert_eq!(settings.bind_address(), "0.0.0.0:8084");
    assert_eq!(settings.translator.rest_base_url, DEFAULT_REST_BASE_URL);
}

#[test]
fn test_invalid_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    assert!(AppConfig::load(file.path()).is_err());

    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");
    std::fs::write(&second, r#"{"server": {"port": 0}}"#).unwrap();
    assert!(AppConfig::load_first(&[first, second]).is_err());
}
