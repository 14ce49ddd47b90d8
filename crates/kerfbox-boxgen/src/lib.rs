//! # kerfbox box generator
//!
//! Geometry engine of kerfbox. Turns box parameters into labelled SVG cut
//! paths for a laser cutter.
//!
//! ## Building blocks
//!
//! - **Path builder**: relative path commands, bounding box tracking and SVG data
//! - **Corners and notch lines**: finger joints compensated for the laser burn
//! - **Box faces**: rectangular faces with their lid and hinge variants
//! - **Flex faces**: sides merged into one band around rounded corners
//! - **Ellipse**: notched elliptic arcs and flex bands for the coffin lid
//! - **Hinges**: steel hinge placement and knuckle parts
//! - **Notch fit**: notch sizing along an arbitrary path
//!
//! ## Generator
//!
//! [`GenericBox`] validates a [`BoxParams`] and draws every part into an
//! [`SvgDocument`].

pub mod box_face;
pub mod corner;
pub mod document;
pub mod ellipse;
pub mod error;
pub mod flex_face;
pub mod flex_lines;
pub mod generic_box;
pub mod hinge;
pub mod notch_fit;
pub mod notch_line;
pub mod path_builder;

pub use box_face::{BoxFace, EdgeJoints, FaceCorners, FaceStyle};
pub use corner::CornerPoint;
pub use document::{EmittedPath, SvgDocument};
pub use ellipse::{Ellipse, EllipseNotches};
pub use error::{BoxGenError, BoxGenResult};
pub use flex_face::{FlexBand, FlexFace, FlexSegment};
pub use flex_lines::FlexLines;
pub use generic_box::{
    calc_notch_pos, compute_joint_size, BoxParams, CornerRadii, GenericBox, JointSizes, LidStyle,
    NotchPos, PageLayout,
};
pub use hinge::{place_hinges, Hinge};
pub use notch_fit::{fit_notch_size, FreePath, FreePathNotches, NotchFitOutcome};
pub use notch_line::{Endpoint, NotchLine};
pub use path_builder::{PathBuilder, Quadrant};
