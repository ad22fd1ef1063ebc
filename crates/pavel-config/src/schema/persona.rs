//! Persona seed display configuration.

use serde::{Deserialize, Serialize};

/// Controls how the persona seed turn is stored in the transcript.
///
/// When `show_in_transcript` is true the seed is stored with the `model`
/// role and rendered like any reply. When false it is stored with the
/// `system` role and filtered out of the visible transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaConfig {
    pub show_in_transcript: bool,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            show_in_transcript: true,
        }
    }
}
