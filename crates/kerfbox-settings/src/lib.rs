//! kerfbox settings crate
//!
//! Box configuration stored as JSON or TOML, checked and converted into the
//! millimeter parameters of the generator.

pub mod config;
pub mod error;

pub use config::{BoxConfig, ConfigFormat};
pub use error::{SettingsError, SettingsResult};
