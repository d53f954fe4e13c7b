//! # TileSwitch Config
//!
//! TOML configuration for the bridge, the remote-evaluation channel and the
//! stream engine.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
