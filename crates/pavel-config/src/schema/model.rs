//! Model selector configuration.

use pavel_common::ModelTier;
use serde::{Deserialize, Serialize};

/// Initial selection of the model radio. Switchable at runtime with `/model`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ModelSelectionConfig {
    pub tier: ModelTier,
}
