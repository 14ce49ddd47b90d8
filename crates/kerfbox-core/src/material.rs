//! Sheet material description shared by every generator.

use serde::{Deserialize, Serialize};

/// Wood hinge knuckle radius, in multiples of the thickness.
pub const WOOD_HINGE_SIZE: f64 = 3.0;
/// Radius of the axis hole inside a wood hinge knuckle, in multiples of the thickness.
pub const WOOD_HINGE_INTERNAL_CIRCLE: f64 = 2.0;
/// Height of the rectangular slot under a wood hinge axis, in multiples of the thickness.
pub const WOOD_HINGE_RECT: f64 = 1.5;
/// Play between steel hinge knuckles (mm).
pub const STEEL_HINGE_SPACING: f64 = 0.3;
/// Radius of the steel hinge axis hole (mm). Sized for 2.3mm nails.
pub const STEEL_HINGE_AXIS_RADIUS: f64 = 1.3;
/// Segments shorter than this are not emitted (mm).
pub const MIN_MOVE: f64 = 0.01;
/// Control point ratio approximating a quarter circle with one cubic Bezier.
pub const BEZIER_CIRCLE_K: f64 = 0.551916;
/// Gap left between two parts on the page (mm).
pub const LAYOUT_GAP: f64 = 2.0;

/// Material thickness and laser kerf, fixed for a whole generation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialContext {
    /// Sheet thickness (mm)
    pub thickness: f64,
    /// Width of material removed by the beam (mm)
    pub burn: f64,
}

impl MaterialContext {
    pub fn new(thickness: f64, burn: f64) -> Self {
        Self { thickness, burn }
    }

    /// Shorthand for the thickness, used everywhere in joint arithmetic
    #[inline]
    pub fn t(&self) -> f64 {
        self.thickness
    }

    /// Radius of a wood hinge knuckle
    pub fn wood_hinge_radius(&self) -> f64 {
        WOOD_HINGE_SIZE * self.thickness
    }

    /// Cut left around a wood hinge knuckle, enlarged by the kerf on both sides
    pub fn wood_hinge_cut(&self) -> f64 {
        WOOD_HINGE_SIZE * self.thickness + 2.0 * self.burn
    }

    /// Width taken by one steel hinge: five knuckles plus their play
    pub fn steel_hinge_width(&self) -> f64 {
        5.0 * self.thickness + 3.0 * STEEL_HINGE_SPACING
    }
}

impl Default for MaterialContext {
    fn default() -> Self {
        Self {
            thickness: 3.0,
            burn: 0.1,
        }
    }
}
