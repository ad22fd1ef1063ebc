//! Full configuration validation.
//!
//! Validates numeric ranges and URL shape, collecting every problem into
//! a single `ConfigError`.

mod helpers;
mod network;

#[cfg(test)]
mod tests;

use crate::schema::PavelConfig;
use pavel_common::ConfigError;

/// Every problem found in `config`, in section order.
pub fn issues(config: &PavelConfig) -> Vec<String> {
    let mut errors: Vec<String> = Vec::new();
    network::validate_network(&mut errors, config);
    errors
}

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PavelConfig) -> Result<(), ConfigError> {
    let errors = issues(config);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
