//! Gemini API client configuration.

use std::time::Duration;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Connection settings for the Gemini client.
///
/// The API key and model are per-request and live in
/// [`GenerateRequest`](crate::GenerateRequest), not here.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// `None` leaves the call unbounded.
    pub request_timeout: Option<Duration>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: GEMINI_API_BASE.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

impl GeminiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}
