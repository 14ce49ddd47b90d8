//! Path accumulator for one cut contour.
//!
//! Every absolute coordinate handed to the builder is expressed in the
//! part's local frame; the builder subtracts its page offset before
//! recording. The cursor and bounding box are kept in emitted (page)
//! coordinates.

use crate::document::SvgDocument;
use kerfbox_core::material::BEZIER_CIRCLE_K;
use kerfbox_core::{BoundingBox, Point};
use std::fmt::Write as _;

/// One of the four canonical quarter circles, named after the circle
/// quadrant the arc sweeps through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    UpperLeft,
    UpperRight,
    LowerRight,
    LowerLeft,
}

/// A recorded drawing command, coordinates already offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    MoveRel(Point),
    LineTo(Point),
    LineRel(Point),
    HorizontalRel(f64),
    VerticalRel(f64),
    CurveTo { c1: Point, c2: Point, end: Point },
    CurveRel { c1: Point, c2: Point, end: Point },
    Close,
}

impl PathCommand {
    /// True for commands which draw a straight segment
    pub fn is_line(&self) -> bool {
        matches!(
            self,
            Self::LineTo(_) | Self::LineRel(_) | Self::HorizontalRel(_) | Self::VerticalRel(_)
        )
    }
}

/// Format a coordinate the way it appears in path data: rounded to 3
/// decimals, no trailing zeros, never `-0`.
pub fn fmt_coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

fn fmt_point(p: Point) -> String {
    format!("{},{}", fmt_coord(p.x), fmt_coord(p.y))
}

#[derive(Debug, Clone)]
pub struct PathBuilder {
    offset: Point,
    label: Option<String>,
    cursor: Point,
    bbox: BoundingBox,
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    /// New builder whose local origin lands at `-offset` on the page
    pub fn new(offset: Point, label: Option<String>) -> Self {
        Self {
            offset,
            label,
            cursor: Point::ORIGIN,
            bbox: BoundingBox::at(Point::new(-offset.x, -offset.y)),
            commands: Vec::new(),
        }
    }

    pub fn labelled(offset: Point, label: impl Into<String>) -> Self {
        Self::new(offset, Some(label.into()))
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Last emitted point, in page coordinates
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Cursor position expressed back in the local frame
    pub fn local_cursor(&self) -> Point {
        self.cursor + self.offset
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn emitted(&self, x: f64, y: f64) -> Point {
        Point::new(x - self.offset.x, y - self.offset.y)
    }

    fn visit(&mut self, p: Point) {
        self.cursor = p;
        self.bbox.include(p);
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        let p = self.emitted(x, y);
        self.commands.push(PathCommand::MoveTo(p));
        self.visit(p);
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        let p = self.emitted(x, y);
        self.commands.push(PathCommand::LineTo(p));
        self.visit(p);
    }

    pub fn move_to_point(&mut self, p: Point) {
        self.move_to(p.x, p.y);
    }

    pub fn line_to_point(&mut self, p: Point) {
        self.line_to(p.x, p.y);
    }

    pub fn line_rel(&mut self, dx: f64, dy: f64) {
        self.commands.push(PathCommand::LineRel(Point::new(dx, dy)));
        let p = self.cursor + Point::new(dx, dy);
        self.visit(p);
    }

    pub fn line_h_rel(&mut self, dx: f64) {
        self.commands.push(PathCommand::HorizontalRel(dx));
        self.cursor.x += dx;
        self.bbox.include_x(self.cursor.x);
    }

    pub fn line_v_rel(&mut self, dy: f64) {
        self.commands.push(PathCommand::VerticalRel(dy));
        self.cursor.y += dy;
        self.bbox.include_y(self.cursor.y);
    }

    /// Isolated segment: move to the first point then draw to the second
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.move_to(x1, y1);
        self.line_to(x2, y2);
    }

    /// Relative isolated segment: move by `(dx1, dy1)` then draw by `(dx2, dy2)`
    pub fn line_rel_pair(&mut self, dx1: f64, dy1: f64, dx2: f64, dy2: f64) {
        self.commands.push(PathCommand::MoveRel(Point::new(dx1, dy1)));
        let p = self.cursor + Point::new(dx1, dy1);
        self.visit(p);
        self.line_rel(dx2, dy2);
    }

    /// Cubic Bezier in the local frame. Only the end point joins the bounding box.
    pub fn bezier_to(&mut self, c1: Point, c2: Point, end: Point) {
        let end = self.emitted(end.x, end.y);
        self.commands.push(PathCommand::CurveTo {
            c1: self.emitted(c1.x, c1.y),
            c2: self.emitted(c2.x, c2.y),
            end,
        });
        self.visit(end);
    }

    pub fn bezier_rel(&mut self, c1: Point, c2: Point, end: Point) {
        self.commands.push(PathCommand::CurveRel { c1, c2, end });
        let p = self.cursor + end;
        self.visit(p);
    }

    /// Quarter circle as a single Bezier, starting from the current cursor
    pub fn quarter_circle(&mut self, xc: f64, yc: f64, radius: f64, quadrant: Quadrant) {
        let k = radius * BEZIER_CIRCLE_K;
        let r = radius;
        let (c1, c2, end) = match quadrant {
            Quadrant::UpperLeft => (
                Point::new(xc - r, yc - k),
                Point::new(xc - k, yc - r),
                Point::new(xc, yc - r),
            ),
            Quadrant::UpperRight => (
                Point::new(xc + k, yc - r),
                Point::new(xc + r, yc - k),
                Point::new(xc + r, yc),
            ),
            Quadrant::LowerRight => (
                Point::new(xc + r, yc + k),
                Point::new(xc + k, yc + r),
                Point::new(xc, yc + r),
            ),
            Quadrant::LowerLeft => (
                Point::new(xc - k, yc + r),
                Point::new(xc - r, yc + k),
                Point::new(xc - r, yc),
            ),
        };
        self.bezier_to(c1, c2, end);
    }

    /// Full circle made of four quarters, starting at `(xc + r, yc)`
    pub fn circle(&mut self, xc: f64, yc: f64, radius: f64) {
        self.move_to(xc + radius, yc);
        for quadrant in [
            Quadrant::LowerRight,
            Quadrant::LowerLeft,
            Quadrant::UpperLeft,
            Quadrant::UpperRight,
        ] {
            self.quarter_circle(xc, yc, radius, quadrant);
        }
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Serialized path data (`d` attribute)
    pub fn data(&self) -> String {
        let mut out = String::new();
        for cmd in &self.commands {
            let _ = match cmd {
                PathCommand::MoveTo(p) => write!(out, " M {}", fmt_point(*p)),
                PathCommand::MoveRel(p) => write!(out, " m {}", fmt_point(*p)),
                PathCommand::LineTo(p) => write!(out, " L {}", fmt_point(*p)),
                PathCommand::LineRel(p) => write!(out, " l {}", fmt_point(*p)),
                PathCommand::HorizontalRel(dx) => write!(out, " h {}", fmt_coord(*dx)),
                PathCommand::VerticalRel(dy) => write!(out, " v {}", fmt_coord(*dy)),
                PathCommand::CurveTo { c1, c2, end } => write!(
                    out,
                    " C {} {} {}",
                    fmt_point(*c1),
                    fmt_point(*c2),
                    fmt_point(*end)
                ),
                PathCommand::CurveRel { c1, c2, end } => write!(
                    out,
                    " c {} {} {}",
                    fmt_point(*c1),
                    fmt_point(*c2),
                    fmt_point(*end)
                ),
                PathCommand::Close => write!(out, " z"),
            };
        }
        out
    }

    /// Hand the finished contour to the document and return its bounding box
    pub fn emit(self, document: &mut SvgDocument) -> BoundingBox {
        let bbox = self.bbox;
        let data = self.data();
        document.add_path(self.label, data, bbox);
        bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_applied_to_absolute_commands() {
        let mut path = PathBuilder::labelled(Point::new(10.0, -5.0), "Front");
        path.move_to(10.0, 0.0);
        path.line_to(20.0, 5.0);
        assert_eq!(path.cursor(), Point::new(10.0, 10.0));
        assert_eq!(path.local_cursor(), Point::new(20.0, 5.0));
        assert_eq!(path.data(), " M 0,5 L 10,10");
    }

    #[test]
    fn test_initial_bounding_box_is_local_origin() {
        let mut path = PathBuilder::new(Point::new(3.0, 4.0), None);
        assert_eq!(path.bounding_box(), BoundingBox::new(-3.0, -4.0, -3.0, -4.0));
        path.move_to(10.0, 10.0);
        assert_eq!(path.bounding_box(), BoundingBox::new(-3.0, -4.0, 7.0, 6.0));
    }

    #[test]
    fn test_relative_moves_track_cursor() {
        let mut path = PathBuilder::new(Point::ORIGIN, None);
        path.move_to(1.0, 1.0);
        path.line_h_rel(4.0);
        path.line_v_rel(-3.0);
        path.line_rel(-1.0, 0.5);
        assert_eq!(path.cursor(), Point::new(4.0, -1.5));
        assert_eq!(path.bounding_box(), BoundingBox::new(0.0, -2.0, 5.0, 1.0));
        assert_eq!(path.data(), " M 1,1 h 4 v -3 l -1,0.5");
    }

    #[test]
    fn test_coordinates_rounded() {
        assert_eq!(fmt_coord(1.23456), "1.235");
        assert_eq!(fmt_coord(-0.0001), "0");
        assert_eq!(fmt_coord(2.5), "2.5");
    }

    #[test]
    fn test_circle_is_four_curves_back_to_start() {
        let mut path = PathBuilder::new(Point::ORIGIN, None);
        path.circle(5.0, 5.0, 2.0);
        assert_eq!(path.commands().len(), 5);
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(7.0, 5.0)));
        assert!((path.cursor().x - 7.0).abs() < 1e-12);
        assert!((path.cursor().y - 5.0).abs() < 1e-12);
        // only end points count for the bounding box
        assert_eq!(path.bounding_box(), BoundingBox::new(0.0, 0.0, 7.0, 7.0));
    }

    #[test]
    fn test_quarter_circle_end_points() {
        let mut path = PathBuilder::new(Point::ORIGIN, None);
        path.move_to(-1.0, 0.0);
        path.quarter_circle(0.0, 0.0, 1.0, Quadrant::UpperLeft);
        assert_eq!(path.cursor(), Point::new(0.0, -1.0));
        path.quarter_circle(0.0, 0.0, 1.0, Quadrant::UpperRight);
        assert_eq!(path.cursor(), Point::new(1.0, 0.0));
        path.quarter_circle(0.0, 0.0, 1.0, Quadrant::LowerRight);
        assert_eq!(path.cursor(), Point::new(0.0, 1.0));
        path.quarter_circle(0.0, 0.0, 1.0, Quadrant::LowerLeft);
        assert_eq!(path.cursor(), Point::new(-1.0, 0.0));
    }

    #[test]
    fn test_isolated_segments() {
        let mut path = PathBuilder::new(Point::ORIGIN, None);
        path.line(0.0, 0.0, 0.0, 8.0);
        path.line_rel_pair(2.0, 0.0, 0.0, -8.0);
        path.close();
        assert_eq!(path.data(), " M 0,0 L 0,8 m 2,0 l 0,-8 z");
        assert_eq!(path.cursor(), Point::new(2.0, 0.0));
    }
}
