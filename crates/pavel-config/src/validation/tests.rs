//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = PavelConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_connect_timeout_zero() {
    let mut config = PavelConfig::default();
    config.network.connect_timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("network.connect_timeout_secs"));
}

#[test]
fn catches_request_timeout_too_large() {
    let mut config = PavelConfig::default();
    config.network.request_timeout_secs = Some(7200);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("network.request_timeout_secs"));
}

#[test]
fn accepts_request_timeout_in_range() {
    let mut config = PavelConfig::default();
    config.network.request_timeout_secs = Some(300);
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_base_url_without_scheme() {
    let mut config = PavelConfig::default();
    config.network.base_url = "generativelanguage.googleapis.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("network.base_url"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = PavelConfig::default();
    config.network.connect_timeout_secs = 500;
    config.network.base_url = String::new();
    let err = validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
    let msg = err.to_string();
    assert!(msg.contains("connect_timeout_secs"));
    assert!(msg.contains("base_url"));
    assert!(msg.contains("; "));
}

#[test]
fn issues_lists_each_problem_separately() {
    let mut config = PavelConfig::default();
    config.network.connect_timeout_secs = 0;
    config.network.base_url = "ftp://example.com".into();
    let found = issues(&config);
    assert_eq!(found.len(), 2);
    assert!(issues(&PavelConfig::default()).is_empty());
}
