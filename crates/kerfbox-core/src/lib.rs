//! # kerfbox core
//!
//! Shared types for the kerfbox workspace: 2D points and bounding boxes,
//! the material context (thickness and laser burn) threaded through every
//! geometry call, unit conversion and the error taxonomy.

pub mod error;
pub mod geometry;
pub mod material;
pub mod units;

pub use error::{ParameterError, UnitError};
pub use geometry::{BoundingBox, Point};
pub use material::MaterialContext;
pub use units::{parse_length, LengthUnit};
