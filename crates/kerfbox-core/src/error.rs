//! Error handling for kerfbox
//!
//! Provides the error types shared by every crate of the workspace:
//! - Parameter errors (box dimensions, lid style combinations)
//! - Unit errors (length parsing and unknown unit names)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Errors related to box parameter validation.
///
/// Every variant is fatal: a box with invalid parameters is never drawn.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// Parameters are mutually incompatible.
    #[error("Incompatible parameters: {0}")]
    Incompatible(String),

    /// Dimensions are too small for the requested construction.
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

impl ParameterError {
    pub fn out_of_range(name: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            name: name.into(),
            value,
            min,
            max,
        }
    }

    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while converting user lengths into millimeters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// The unit name is not recognized.
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// The length string could not be parsed.
    #[error("Invalid length '{input}': {reason}")]
    InvalidLength { input: String, reason: String },
}
