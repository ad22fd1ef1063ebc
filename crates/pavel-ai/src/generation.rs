//! Per-request model configuration.

use pavel_common::ModelTier;

use crate::persona::PERSONA;

/// Sampling parameters sent with every request.
///
/// Low temperature favors precise, repeatable derivations; the large
/// output budget leaves room for long proofs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            top_p: 0.95,
            top_k: 64,
            max_output_tokens: 8192,
        }
    }
}

/// Immutable configuration for one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub tier: ModelTier,
    pub generation: GenerationConfig,
    pub system_instruction: String,
}

impl ModelConfig {
    pub fn for_tier(tier: ModelTier) -> Self {
        Self {
            tier,
            generation: GenerationConfig::default(),
            system_instruction: PERSONA.to_string(),
        }
    }

    pub fn identifier(&self) -> &'static str {
        self.tier.identifier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_defaults_are_fixed() {
        let g = GenerationConfig::default();
        assert!((g.temperature - 0.2).abs() < f64::EPSILON);
        assert!((g.top_p - 0.95).abs() < f64::EPSILON);
        assert_eq!(g.top_k, 64);
        assert_eq!(g.max_output_tokens, 8192);
    }

    #[test]
    fn model_config_uses_persona_as_system_instruction() {
        let config = ModelConfig::for_tier(ModelTier::Pro);
        assert_eq!(config.identifier(), "gemini-1.5-pro");
        assert_eq!(config.system_instruction, PERSONA);
    }
}
