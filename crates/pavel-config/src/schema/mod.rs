//! Configuration schema types for Pavel.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Generation parameters and the persona text are fixed in code;
//! only the model choice is selectable here.

mod model;
mod network;
mod persona;
mod system;

pub use model::*;
pub use network::*;
pub use persona::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Pavel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PavelConfig {
    pub model: ModelSelectionConfig,
    pub persona: PersonaConfig,
    pub network: NetworkConfig,
    pub logging: LoggingConfig,
}
