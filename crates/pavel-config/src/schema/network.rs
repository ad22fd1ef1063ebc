//! Remote API connection settings.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Network configuration for the generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Base URL of the models collection; `/{model}:generateContent` is appended.
    pub base_url: String,
    /// TCP connect timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds (valid range: 1-3600).
    /// Unset means the call may block until the remote side answers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            connect_timeout_secs: 10,
            request_timeout_secs: None,
        }
    }
}
