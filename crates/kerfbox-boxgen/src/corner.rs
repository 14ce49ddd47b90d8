//! Face corners.
//!
//! A corner knows where the finger joint lines of its two adjoining edges
//! stop, depending on whether each axis is internal or external at that
//! corner, on an optional rounding radius and on the wood hinge knuckle
//! which replaces the two upper corners of hinged faces.

use crate::path_builder::{PathBuilder, Quadrant};
use kerfbox_core::material::{MIN_MOVE, WOOD_HINGE_SIZE};
use kerfbox_core::{MaterialContext, Point};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct CornerPoint {
    thickness: f64,
    x_internal: bool,
    y_internal: bool,
    wood_hinge: bool,
    radius: f64,
    center: Point,
    corner: Point,
    start_joint: Point,
    end_joint: Point,
    quadrant: Quadrant,
}

impl CornerPoint {
    /// Corner at `position` in the face frame.
    ///
    /// Components not greater than the thickness designate the low (top or
    /// left) side of the face.
    pub fn new(
        material: &MaterialContext,
        position: Point,
        radius: f64,
        x_internal: bool,
        y_internal: bool,
    ) -> Self {
        Self::build(material, position, radius, x_internal, y_internal, false)
    }

    /// Upper corner replaced by three quarters of a wood hinge knuckle
    pub fn wood_hinge(
        material: &MaterialContext,
        position: Point,
        radius: f64,
        x_internal: bool,
        y_internal: bool,
    ) -> Self {
        Self::build(material, position, radius, x_internal, y_internal, true)
    }

    fn build(
        material: &MaterialContext,
        position: Point,
        radius: f64,
        x_internal: bool,
        y_internal: bool,
        wood_hinge: bool,
    ) -> Self {
        let t = material.thickness;
        let mut radius = radius.max(0.0);
        let left = position.x <= t;
        let top = position.y <= t;

        // The circle center does not move with the internal/external status
        let center = Point::new(
            if left { position.x + radius } else { position.x - radius },
            if top { position.y + radius } else { position.y - radius },
        );

        let corner_x = if x_internal {
            position.x
        } else {
            if radius > 0.0 {
                // x axis only, the radius must grow once
                radius += t;
            }
            if left {
                position.x - t
            } else {
                position.x + t
            }
        };
        let corner_y = if y_internal {
            position.y
        } else if top {
            position.y - t
        } else {
            position.y + t
        };

        let (quadrant, mut start_joint, mut end_joint) = match (left, top) {
            (true, true) => (
                Quadrant::UpperLeft,
                Point::new(position.x + radius, corner_y),
                Point::new(corner_x, position.y + radius),
            ),
            (false, true) => (
                Quadrant::UpperRight,
                Point::new(corner_x, position.y + radius),
                Point::new(position.x - radius, corner_y),
            ),
            (true, false) => (
                Quadrant::LowerLeft,
                Point::new(corner_x, position.y - radius),
                Point::new(position.x + radius, corner_y),
            ),
            (false, false) => (
                Quadrant::LowerRight,
                Point::new(position.x - radius, corner_y),
                Point::new(corner_x, position.y - radius),
            ),
        };

        if wood_hinge {
            let knuckle = WOOD_HINGE_SIZE * t;
            match quadrant {
                Quadrant::UpperLeft => {
                    end_joint.y = corner_y + knuckle;
                    start_joint.x = corner_x + knuckle;
                }
                Quadrant::UpperRight => {
                    end_joint.x = corner_x - knuckle;
                    start_joint.y = corner_y + knuckle;
                }
                _ => {}
            }
        }

        debug!(
            "corner {:?}: corner=({:.3}, {:.3}) center=({:.3}, {:.3}) start=({:.3}, {:.3}) end=({:.3}, {:.3}) wood_hinge={}",
            quadrant,
            corner_x,
            corner_y,
            center.x,
            center.y,
            start_joint.x,
            start_joint.y,
            end_joint.x,
            end_joint.y,
            wood_hinge
        );

        Self {
            thickness: t,
            x_internal,
            y_internal,
            wood_hinge,
            radius,
            center,
            corner: Point::new(corner_x, corner_y),
            start_joint,
            end_joint,
            quadrant,
        }
    }

    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Actual corner of the contour once internal/external status is applied
    pub fn corner(&self) -> Point {
        self.corner
    }

    /// Where the joint line leaving this corner starts
    pub fn start_joint(&self) -> Point {
        self.start_joint
    }

    /// Where the joint line arriving at this corner ends
    pub fn end_joint(&self) -> Point {
        self.end_joint
    }

    pub fn x_internal(&self) -> bool {
        self.x_internal
    }

    pub fn y_internal(&self) -> bool {
        self.y_internal
    }

    pub fn is_wood_hinge(&self) -> bool {
        self.wood_hinge
    }

    /// Move the start of the outgoing joint line
    pub fn shift_start_joint(mut self, dx: f64, dy: f64) -> Self {
        self.start_joint = self.start_joint + Point::new(dx, dy);
        self
    }

    /// Move the end of the incoming joint line
    pub fn shift_end_joint(mut self, dx: f64, dy: f64) -> Self {
        self.end_joint = self.end_joint + Point::new(dx, dy);
        self
    }

    /// Draw the corner. The cursor must be at [`Self::end_joint`]; it ends at
    /// [`Self::start_joint`].
    pub fn draw(&self, path: &mut PathBuilder) {
        let t = self.thickness;
        if self.wood_hinge {
            let knuckle = WOOD_HINGE_SIZE * t;
            match self.quadrant {
                Quadrant::UpperLeft => {
                    let xc = self.corner.x - t;
                    path.line_h_rel(-t);
                    path.quarter_circle(xc, self.corner.y, knuckle, Quadrant::LowerLeft);
                    path.quarter_circle(xc, self.corner.y, knuckle, Quadrant::UpperLeft);
                    path.quarter_circle(xc, self.corner.y, knuckle, Quadrant::UpperRight);
                    return;
                }
                Quadrant::UpperRight => {
                    let xc = self.corner.x + t;
                    path.line_h_rel(t);
                    path.quarter_circle(xc, self.corner.y, knuckle, Quadrant::UpperLeft);
                    path.quarter_circle(xc, self.corner.y, knuckle, Quadrant::UpperRight);
                    path.quarter_circle(xc, self.corner.y, knuckle, Quadrant::LowerRight);
                    path.line_h_rel(-t);
                    return;
                }
                // lower corners never carry a knuckle
                _ => return,
            }
        }
        if self.radius > 0.0 {
            path.quarter_circle(self.center.x, self.center.y, self.radius, self.quadrant);
            return;
        }
        if self.end_joint.distance_to(&self.corner) > MIN_MOVE {
            path.line_to_point(self.corner);
        }
        if self.start_joint.distance_to(&self.corner) > MIN_MOVE {
            path.line_to_point(self.start_joint);
        }
    }
}
