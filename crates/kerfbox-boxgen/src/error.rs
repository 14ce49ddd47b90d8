//! Error types for the box generator.
//!
//! Every variant is fatal for the current run. Geometric degeneracies that
//! the generator can resolve on its own (zero length segments, edges too
//! short for joints) never surface here.

use kerfbox_core::ParameterError;
use thiserror::Error;

/// Errors that can occur while building a box.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoxGenError {
    /// A box parameter failed validation.
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// A construction step has no valid geometry for the requested sizes.
    #[error("Geometry error: {0}")]
    Geometry(String),
}

impl BoxGenError {
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Check if this error comes from parameter validation
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Self::Parameter(_))
    }
}

/// Result type alias for box generation.
pub type BoxGenResult<T> = std::result::Result<T, BoxGenError>;
