pub mod errors;
pub mod id;
pub mod model;

pub use errors::{ConfigError, PavelError};
pub use id::{new_id, SessionId};
pub use model::{ModelTier, ParseModelTierError};

pub type Result<T> = std::result::Result<T, PavelError>;
