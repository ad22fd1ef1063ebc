use crate::schema::PavelConfig;
use crate::validation;
use pavel_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse config text. Missing keys fall back to their defaults.
pub fn parse_config(source: &str) -> Result<PavelConfig, ConfigError> {
    toml::from_str(source).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Read and parse the file at `path`.
///
/// Out-of-range values are logged one per line and kept; rejecting them is
/// left to the caller.
pub fn load_from_path(path: &Path) -> Result<PavelConfig, ConfigError> {
    let source = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config = parse_config(&source).map_err(|e| match e {
        ConfigError::ParseError(msg) => ConfigError::ParseError(format!("{}: {msg}", path.display())),
        other => other,
    })?;

    for issue in validation::issues(&config) {
        warn!(path = %path.display(), "{issue}");
    }

    info!(path = %path.display(), tier = %config.model.tier, "config loaded");
    Ok(config)
}

/// Load from [`default_config_path`], writing the template on first run.
pub fn load_default() -> Result<PavelConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(PavelConfig::default())
        }
        result => result,
    }
}
