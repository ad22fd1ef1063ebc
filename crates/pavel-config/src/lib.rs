//! Pavel configuration system.
//!
//! Provides TOML-based configuration with validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pavel_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{PavelConfig, CONFIG_SCHEMA_VERSION};

use pavel_common::ConfigError;
use std::path::Path;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<PavelConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path (the `--config` override).
///
/// Unlike [`load_config`], a missing file is an error rather than a cue to
/// write the default template.
pub fn load_config_from(path: &Path) -> Result<PavelConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PavelConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = PavelConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"model\""));
        assert!(json.contains("\"persona\""));
        assert!(json.contains("\"network\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"flash\""));
    }

    #[test]
    fn config_to_json_omits_unset_request_timeout() {
        let json = config_to_json(&PavelConfig::default());
        assert!(!json.contains("request_timeout_secs"));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_from_missing_path_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[network]\nbase_url = \"ftp://example\"\n").unwrap();
        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = PavelConfig::default();
        let json = config_to_json(&config);
        let parsed: PavelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.model.tier, config.model.tier);
        assert_eq!(parsed.network.base_url, config.network.base_url);
    }
}
