//! Straight edges with finger joints.
//!
//! The number of joints on an edge depends on the internal/external status
//! of both ends: odd when both ends share the same status, even otherwise.
//! Joint lines are centered on the edge.

use kerfbox_core::{MaterialContext, Point};
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use tracing::debug;

/// One end of a notch line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoint {
    pub point: Point,
    pub internal: bool,
}

impl Endpoint {
    pub fn new(x: f64, y: f64, internal: bool) -> Self {
        Self {
            point: Point::new(x, y),
            internal,
        }
    }

    pub fn internal(x: f64, y: f64) -> Self {
        Self::new(x, y, true)
    }

    pub fn external(x: f64, y: f64) -> Self {
        Self::new(x, y, false)
    }
}

/// Which part of the joint pattern is drawn. Half lines are used where a
/// rounded flex band starts or stops in the middle of a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HalfLine {
    #[default]
    Full,
    FirstHalf,
    SecondHalf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotchLine {
    thickness: f64,
    burn: f64,
    start: Point,
    end: Point,
    start_internal: bool,
    end_internal: bool,
    angle: f64,
    joint_size: f64,
    half: HalfLine,
    joint_count: usize,
    start_joint: Point,
    end_joint: Point,
}

impl NotchLine {
    pub fn new(
        material: &MaterialContext,
        start: Endpoint,
        end: Endpoint,
        angle: f64,
        joint_size: f64,
    ) -> Self {
        Self::with_half(material, start, end, angle, joint_size, HalfLine::Full)
    }

    pub fn with_half(
        material: &MaterialContext,
        start: Endpoint,
        end: Endpoint,
        angle: f64,
        joint_size: f64,
        half: HalfLine,
    ) -> Self {
        let t = material.thickness;
        let mut line = Self {
            thickness: t,
            burn: material.burn,
            start: start.point,
            end: end.point,
            start_internal: start.internal,
            end_internal: end.internal,
            angle,
            joint_size,
            half,
            joint_count: 0,
            start_joint: start.point,
            end_joint: end.point,
        };
        let size = start.point.distance_to(&end.point);
        let j = joint_size;

        if j == 0.0 {
            if half != HalfLine::Full {
                line.end = line.start.midpoint(&line.end);
                line.end_joint = line.end;
            }
        } else if start.internal == end.internal {
            line.joint_count = if size < 3.0 * j {
                0
            } else {
                2 * ((size - j) / (2.0 * j)).floor() as usize + 1
            };
            line.center_joints(size);
            match half {
                HalfLine::Full => {}
                HalfLine::FirstHalf => {
                    line.end = line.start.midpoint(&line.end);
                    line.joint_count = line.joint_count / 2 + 1;
                    line.end_joint = line
                        .start_joint
                        .offset_polar(angle, (line.joint_count as f64 - 0.5) * j);
                    if line.joint_count % 2 == 0 {
                        // Parity changed, the end gets the opposite status
                        let side = if line.start_internal {
                            angle - FRAC_PI_2
                        } else {
                            angle + FRAC_PI_2
                        };
                        line.end_joint = line.end_joint.offset_polar(side, t);
                        line.end = line.end_joint;
                    }
                }
                HalfLine::SecondHalf => {
                    line.start = line.start.midpoint(&line.end);
                    line.joint_count = line.joint_count / 2 + 1;
                    line.start_joint = line.start.offset_polar(angle, -0.5 * j);
                    if line.joint_count % 2 == 0 && line.end_internal {
                        line.start_internal = false;
                        line.start_joint = line.start_joint.offset_polar(angle - FRAC_PI_2, t);
                    } else {
                        line.start_internal = true;
                        line.start_joint = line.start_joint.offset_polar(angle + FRAC_PI_2, t);
                    }
                }
            }
        } else {
            line.joint_count = if size < 2.0 * j {
                0
            } else {
                2 * (size / (2.0 * j)).floor() as usize
            };
            line.center_joints(size);
        }

        debug!(
            "notch line ({:.3}, {:.3}) -> ({:.3}, {:.3}) size={:.3} joint={:.3} count={} half={:?}",
            line.start.x, line.start.y, line.end.x, line.end.y, size, j, line.joint_count, half
        );
        line
    }

    fn center_joints(&mut self, size: f64) {
        let delta = (size - self.joint_count as f64 * self.joint_size) / 2.0;
        self.start_joint = self.start.offset_polar(self.angle, delta);
        self.end_joint = self.end.offset_polar(self.angle, -delta);
    }

    pub fn joint_count(&self) -> usize {
        self.joint_count
    }

    pub fn joint_size(&self) -> f64 {
        self.joint_size
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn start_internal(&self) -> bool {
        self.start_internal
    }

    pub fn end_internal(&self) -> bool {
        self.end_internal
    }

    pub fn start_joint(&self) -> Point {
        self.start_joint
    }

    pub fn end_joint(&self) -> Point {
        self.end_joint
    }

    /// Total length covered by the joints
    pub fn joint_span(&self) -> f64 {
        self.joint_count as f64 * self.joint_size
    }

    /// Take the joint layout of the right edge of the same face, so a left
    /// edge ending on a wood hinge stays in phase with its opposite side.
    pub(crate) fn follow_right_edge(&mut self, right: &NotchLine) {
        self.start_joint.y = right.end_joint.y;
        self.end.y = right.start.y;
        self.joint_size = right.joint_size;
        self.joint_count = right.joint_count;
    }

    /// Mirror of [`Self::follow_right_edge`] for a right edge under a hinge
    pub(crate) fn follow_left_edge(&mut self, left: &NotchLine) {
        self.start_joint.y = left.end_joint.y;
        self.end_joint.y = left.start_joint.y;
        self.start.y = left.end.y;
        self.joint_size = left.joint_size;
        self.joint_count = left.joint_count;
    }

    /// Shorten a vertical line to leave room for a hinge cut of `cut_size`
    /// at one of its ends.
    ///
    /// Joints are removed two at a time until the last joint is at least
    /// 1.5 thickness away from the cut. If three or fewer joints would be
    /// left, all joints are removed.
    pub fn shorten_for_hinge(&mut self, cut_size: f64, cut_on_start: bool) {
        let t = self.thickness;
        let j = self.joint_size;
        // top and bottom lines are always external in y
        let cut = cut_size - t;
        let downward = (self.angle - FRAC_PI_2).abs() < 1e-6;
        let mut count = 1usize;

        match (downward, cut_on_start) {
            (true, true) => {
                let mut ypos = self.end_joint.y;
                let limit = cut + self.start.y + 1.5 * t;
                while ypos > limit && j > 0.0 {
                    ypos -= 2.0 * j;
                    count += 2;
                }
                if count > 3 {
                    count -= 2;
                    self.start_joint.y = self.end_joint.y - count as f64 * j;
                    self.joint_count = count;
                } else {
                    self.joint_count = 0;
                }
                self.start.y += cut;
            }
            (true, false) => {
                let mut ypos = self.start_joint.y;
                let limit = self.end.y - cut - 1.5 * t;
                while ypos < limit && j > 0.0 {
                    ypos += 2.0 * j;
                    count += 2;
                }
                if count > 3 {
                    count -= 2;
                    self.end_joint.y = self.start_joint.y + count as f64 * j;
                    self.joint_count = count;
                } else {
                    self.joint_count = 0;
                }
                self.end.y -= cut;
                if self.end.y < self.end_joint.y {
                    self.end_joint.y = self.end.y;
                }
            }
            (false, true) => {
                let mut ypos = self.end_joint.y;
                let limit = self.start.y - cut - 1.5 * t;
                while ypos < limit && j > 0.0 {
                    ypos += 2.0 * j;
                    count += 2;
                }
                if count > 3 {
                    count -= 2;
                    self.start_joint.y = self.end_joint.y + count as f64 * j;
                    self.joint_count = count;
                } else {
                    self.joint_count = 0;
                }
                self.start.y -= cut;
            }
            (false, false) => {
                let mut ypos = self.start_joint.y;
                let limit = self.end.y + cut + 1.5 * t;
                while ypos > limit && j > 0.0 {
                    ypos -= 2.0 * j;
                    count += 2;
                }
                if count > 3 {
                    count -= 2;
                    self.end_joint.y = self.start_joint.y - count as f64 * j;
                    self.joint_count = count;
                } else {
                    self.joint_count = 0;
                }
                self.end.y += cut;
                if self.end.y < self.end_joint.y {
                    self.end_joint.y = self.end.y;
                }
            }
        }
        debug!(
            "notch line shortened: cut={:.3} on_start={} start_y={:.3} end_y={:.3} count={} joints=({:.3}, {:.3})",
            cut,
            cut_on_start,
            self.start.y,
            self.end.y,
            self.joint_count,
            self.start_joint.y,
            self.end_joint.y
        );
    }

    /// Draw the line. The cursor must already be at [`Self::start`].
    ///
    /// Each tooth is widened or narrowed by the burn so that mating parts
    /// fit once the kerf is removed.
    pub fn draw(&self, path: &mut crate::path_builder::PathBuilder) {
        if self.joint_count == 0 {
            path.line_to_point(self.end);
            return;
        }
        let t = self.thickness;
        let j = self.joint_size;
        let (mut joint_angle, mut delta_burn) = if self.start_internal {
            (self.angle - FRAC_PI_2, self.burn)
        } else {
            (self.angle + FRAC_PI_2, -self.burn)
        };
        let (cos, sin) = (self.angle.cos(), self.angle.sin());

        path.line_to_point(self.start_joint.offset_polar(self.angle, j + delta_burn));
        for i in (1..self.joint_count).rev() {
            path.line_rel(t * joint_angle.cos(), t * joint_angle.sin());
            joint_angle += PI;
            if joint_angle > TAU {
                joint_angle -= TAU;
            }
            delta_burn = -delta_burn;
            if self.half == HalfLine::FirstHalf && i == 1 {
                let len = j / 2.0 + delta_burn;
                path.line_rel(len * cos, len * sin);
            } else if i > 1 {
                // the last tooth is closed by the final absolute move
                let len = j + delta_burn;
                path.line_rel(len * cos, len * sin);
            }
        }
        path.line_to_point(self.end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_builder::PathBuilder;

    fn material() -> MaterialContext {
        MaterialContext::new(3.0, 0.0)
    }

    #[test]
    fn test_same_status_gives_odd_count() {
        let m = material();
        let line = NotchLine::new(
            &m,
            Endpoint::internal(0.0, 0.0),
            Endpoint::internal(50.0, 0.0),
            0.0,
            10.0,
        );
        assert_eq!(line.joint_count(), 5);
        assert_eq!(line.start_joint(), Point::new(0.0, 0.0));

        let line = NotchLine::new(
            &m,
            Endpoint::internal(0.0, 0.0),
            Endpoint::internal(45.0, 0.0),
            0.0,
            10.0,
        );
        assert_eq!(line.joint_count(), 3);
        assert!((line.start_joint().x - 7.5).abs() < 1e-9);
        assert!((line.end_joint().x - 37.5).abs() < 1e-9);
    }

    #[test]
    fn test_mixed_status_gives_even_count() {
        let m = material();
        let line = NotchLine::new(
            &m,
            Endpoint::internal(0.0, 0.0),
            Endpoint::external(0.0, 45.0),
            FRAC_PI_2,
            10.0,
        );
        assert_eq!(line.joint_count(), 4);
        assert!((line.start_joint().y - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_short_edge_is_plain() {
        let m = material();
        let line = NotchLine::new(
            &m,
            Endpoint::internal(0.0, 0.0),
            Endpoint::internal(25.0, 0.0),
            0.0,
            10.0,
        );
        assert_eq!(line.joint_count(), 0);
        let mut path = PathBuilder::new(Point::ORIGIN, None);
        path.move_to(0.0, 0.0);
        line.draw(&mut path);
        assert_eq!(path.commands().len(), 2);
        assert_eq!(path.cursor(), Point::new(25.0, 0.0));
    }

    #[test]
    fn test_half_line_without_joints_stops_at_middle() {
        let m = material();
        let line = NotchLine::with_half(
            &m,
            Endpoint::external(-10.0, -3.0),
            Endpoint::external(10.0, -3.0),
            0.0,
            0.0,
            HalfLine::FirstHalf,
        );
        assert_eq!(line.end(), Point::new(0.0, -3.0));
    }

    #[test]
    fn test_first_half_line() {
        let m = material();
        // 5 joints on the full edge, 3 on the first half
        let line = NotchLine::with_half(
            &m,
            Endpoint::internal(0.0, 0.0),
            Endpoint::internal(50.0, 0.0),
            0.0,
            10.0,
            HalfLine::FirstHalf,
        );
        assert_eq!(line.joint_count(), 3);
        assert_eq!(line.end(), Point::new(25.0, 0.0));
        assert!((line.end_joint().x - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_second_half_even_count_flips_start() {
        let m = material();
        // 7 joints on the full edge, 4 on the second half
        let line = NotchLine::with_half(
            &m,
            Endpoint::internal(0.0, 0.0),
            Endpoint::internal(70.0, 0.0),
            0.0,
            10.0,
            HalfLine::SecondHalf,
        );
        assert_eq!(line.joint_count(), 4);
        assert!(!line.start_internal());
        assert!((line.start_joint().x - 30.0).abs() < 1e-9);
        assert!((line.start_joint().y + 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_draw_ends_exactly_on_end() {
        let m = MaterialContext::new(3.0, 0.1);
        let line = NotchLine::new(
            &m,
            Endpoint::internal(0.0, 0.0),
            Endpoint::internal(50.0, 0.0),
            0.0,
            10.0,
        );
        let mut path = PathBuilder::new(Point::ORIGIN, None);
        path.move_to(0.0, 0.0);
        line.draw(&mut path);
        assert_eq!(path.cursor(), Point::new(50.0, 0.0));
        // first tooth widened by the burn
        assert_eq!(
            path.commands()[1],
            crate::path_builder::PathCommand::LineTo(Point::new(10.1, 0.0))
        );
        // one absolute move in, 4 perpendicular moves, 3 runs, one absolute move out
        assert_eq!(path.commands().len(), 1 + 1 + 4 + 3 + 1);
        // teeth of an internal edge go outward (negative y for a top edge)
        let bbox = path.bounding_box();
        assert!((bbox.min_y + 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_shorten_downward_cut_on_start() {
        let m = material();
        let mut line = NotchLine::new(
            &m,
            Endpoint::internal(0.0, 0.0),
            Endpoint::internal(0.0, 110.0),
            FRAC_PI_2,
            10.0,
        );
        assert_eq!(line.joint_count(), 11);
        line.shorten_for_hinge(9.0, true);
        assert_eq!(line.joint_count() % 2, 1);
        assert!(line.joint_count() >= 5);
        assert_eq!(line.start().y, 6.0);
        // last joint stays clear of the cut
        assert!(line.start_joint().y >= line.start().y + 1.5 * 3.0 - 2.0 * 10.0);
        assert!((line.end_joint().y - line.start_joint().y - line.joint_span()).abs() < 1e-9);
    }

    #[test]
    fn test_shorten_short_line_drops_all_joints() {
        let m = material();
        let mut line = NotchLine::new(
            &m,
            Endpoint::internal(0.0, 30.0),
            Endpoint::internal(0.0, 0.0),
            -FRAC_PI_2,
            10.0,
        );
        assert_eq!(line.joint_count(), 3);
        line.shorten_for_hinge(9.0, false);
        assert_eq!(line.joint_count(), 0);
        assert_eq!(line.end().y, 6.0);
    }
}
