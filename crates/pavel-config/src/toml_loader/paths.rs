//! Where the config file lives, and writing the first-run template.

use pavel_common::ConfigError;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::template::default_config_toml;

/// Environment variable that points Pavel at a different config file.
pub const CONFIG_ENV_VAR: &str = "PAVEL_CONFIG";

/// Resolve the config file path.
///
/// `PAVEL_CONFIG` wins when set and non-empty; otherwise
/// `<config dir>/pavel/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    resolve_config_path(std::env::var_os(CONFIG_ENV_VAR), dirs::config_dir())
}

pub(crate) fn resolve_config_path(
    env_override: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = env_override.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    config_dir
        .map(|dir| dir.join("pavel").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Write the commented template to `path`, creating parent directories.
///
/// An existing file is left untouched.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |e: std::io::Error| {
        ConfigError::ParseError(format!("failed to write default config to {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!(path = %path.display(), "config already present, not overwriting");
            return Ok(());
        }
        Err(e) => return Err(write_error(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(write_error)?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
