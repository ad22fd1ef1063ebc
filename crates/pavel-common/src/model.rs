//! The two remote model tiers offered by the model selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which Gemini model answers a prompt.
///
/// `Flash` is the faster, cheaper tier; `Pro` is the higher-capability tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    #[default]
    Flash,
    Pro,
}

impl ModelTier {
    pub const ALL: [ModelTier; 2] = [ModelTier::Flash, ModelTier::Pro];

    /// Remote model identifier sent in the request path.
    pub fn identifier(self) -> &'static str {
        match self {
            ModelTier::Flash => "gemini-1.5-flash",
            ModelTier::Pro => "gemini-1.5-pro",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModelTier::Flash => "Gemini 1.5 Flash (Fast & Study)",
            ModelTier::Pro => "Gemini 1.5 Pro (PhD Research)",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            ModelTier::Flash => "Good for revision & chat.",
            ModelTier::Pro => "Solves hardest equations. Slower.",
        }
    }
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown model tier '{0}' (expected 'flash' or 'pro')")]
pub struct ParseModelTierError(pub String);

impl FromStr for ModelTier {
    type Err = ParseModelTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flash" | "gemini-1.5-flash" => Ok(ModelTier::Flash),
            "pro" | "gemini-1.5-pro" => Ok(ModelTier::Pro),
            _ => Err(ParseModelTierError(s.to_string())),
        }
    }
}
