//! Network configuration validation (timeouts, base URL).

use crate::schema::PavelConfig;

use super::helpers::validate_range;

pub(crate) fn validate_network(errors: &mut Vec<String>, config: &PavelConfig) {
    let network = &config.network;

    validate_range(
        errors,
        "network.connect_timeout_secs",
        network.connect_timeout_secs,
        1,
        120,
    );

    if let Some(timeout) = network.request_timeout_secs {
        validate_range(errors, "network.request_timeout_secs", timeout, 1, 3600);
    }

    let url = network.base_url.trim();
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        errors.push(format!(
            "network.base_url = {:?} must start with http:// or https://",
            network.base_url
        ));
    }
}
