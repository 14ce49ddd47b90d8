//! Flat faces made of four corners and four finger joint edges.
//!
//! Every face of the box shares the same contour: top left corner, top
//! edge, top right corner, right edge and so on clockwise. The variants
//! (holes for divider walls, hinge cut-outs, sliding lid groove...) are
//! expressed as a [`FaceStyle`] applied to that single contour.

use crate::corner::CornerPoint;
use crate::document::SvgDocument;
use crate::hinge::Hinge;
use crate::notch_line::{Endpoint, NotchLine};
use crate::path_builder::PathBuilder;
use kerfbox_core::material::{
    BEZIER_CIRCLE_K, STEEL_HINGE_SPACING, WOOD_HINGE_INTERNAL_CIRCLE, WOOD_HINGE_RECT,
    WOOD_HINGE_SIZE,
};
use kerfbox_core::{BoundingBox, MaterialContext, Point};
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::debug;

/// The four corners of a face, clockwise from the top left
#[derive(Debug, Clone, PartialEq)]
pub struct FaceCorners {
    pub top_left: CornerPoint,
    pub top_right: CornerPoint,
    pub bottom_right: CornerPoint,
    pub bottom_left: CornerPoint,
}

impl FaceCorners {
    /// Square corners of a `width` x `height` rectangle, all with the same
    /// internal/external status
    pub fn rectangle(
        material: &MaterialContext,
        width: f64,
        height: f64,
        x_internal: bool,
        y_internal: bool,
    ) -> Self {
        Self::rounded(material, width, height, [0.0; 4], x_internal, y_internal)
    }

    /// Rounded rectangle, radii clockwise from the top left
    pub fn rounded(
        material: &MaterialContext,
        width: f64,
        height: f64,
        radii: [f64; 4],
        x_internal: bool,
        y_internal: bool,
    ) -> Self {
        let corner = |x: f64, y: f64, r: f64| {
            CornerPoint::new(material, Point::new(x, y), r, x_internal, y_internal)
        };
        Self {
            top_left: corner(0.0, 0.0, radii[0]),
            top_right: corner(width, 0.0, radii[1]),
            bottom_right: corner(width, height, radii[2]),
            bottom_left: corner(0.0, height, radii[3]),
        }
    }
}

/// Finger joint size of each edge, 0 for a plain edge
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeJoints {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgeJoints {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// How the common contour of a face is altered
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaceStyle<'a> {
    /// Corners and finger joints only
    Plain,
    /// Rectangular holes receiving the tabs of divider walls, one column
    /// per slot boundary. With hinges, the top edge gets the hinge cut-outs.
    WithHoles {
        n_slot: usize,
        slot_size: f64,
        /// Shift of the first column, when the face is shortened by a rounded corner
        hole_offset: f64,
        z_joint: f64,
        hinges: Option<&'a [Hinge]>,
    },
    /// Top edge notched to leave room for steel hinges
    HingeCutout(&'a [Hinge]),
    /// Back face of a box with a sliding lid: lowered top edge
    SlidingLidBack,
    /// Back face of a box with a wood hinge lid
    WoodHingeBack,
    /// Back face of a wood hinge lid
    WoodHingeLidBack,
    /// Side face of a wood hinge lid, rounded cut on the back bottom corner
    WoodHingeLidSide { right: bool },
    /// Back face of a box with steel hinges: knuckles on the top edge
    SteelHingeBack(&'a [Hinge]),
    /// Back face of a steel hinge lid: knuckles on the bottom edge
    SteelHingeLidBack(&'a [Hinge]),
}

/// Rectangular hole shrunk by half the burn on every side
pub fn draw_hole(path: &mut PathBuilder, x0: f64, y0: f64, dx: f64, dy: f64, burn: f64) {
    path.move_to(x0 + burn / 2.0, y0 + burn / 2.0);
    path.line_v_rel(dy - burn);
    path.line_h_rel(dx - burn);
    path.line_v_rel(-dy + burn);
    path.line_h_rel(-dx + burn);
}

/// Axis hole of a wood hinge knuckle centered on `(x, -t)` and the slot
/// under it, extending toward `direction` (1 right, -1 left)
pub(crate) fn draw_knuckle_axis(
    path: &mut PathBuilder,
    material: &MaterialContext,
    x: f64,
    direction: f64,
) {
    let t = material.thickness;
    path.circle(x, -t, WOOD_HINGE_INTERNAL_CIRCLE * t);
    path.move_to(x, -t);
    path.line_v_rel(-WOOD_HINGE_RECT * t);
    path.line_h_rel(direction * t);
    path.line_v_rel(WOOD_HINGE_RECT * t);
    path.line_h_rel(-direction * t);
}

#[derive(Debug, Clone)]
pub struct BoxFace {
    name: String,
    material: MaterialContext,
    corners: FaceCorners,
    top: NotchLine,
    right: NotchLine,
    bottom: NotchLine,
    left: NotchLine,
    origin: Point,
}

impl BoxFace {
    /// New face whose upper left extent lands on `origin` in page coordinates.
    pub fn new(
        material: &MaterialContext,
        name: impl Into<String>,
        corners: FaceCorners,
        joints: EdgeJoints,
        origin: Point,
    ) -> Self {
        let t = material.thickness;
        let FaceCorners {
            top_left: tl,
            top_right: tr,
            bottom_right: br,
            bottom_left: bl,
        } = &corners;
        let endpoint = |p: Point, internal: bool| Endpoint::new(p.x, p.y, internal);

        let top = NotchLine::new(
            material,
            endpoint(tl.start_joint(), tl.y_internal()),
            endpoint(tr.end_joint(), tr.y_internal()),
            0.0,
            joints.top,
        );
        let right = NotchLine::new(
            material,
            endpoint(tr.start_joint(), tr.x_internal()),
            endpoint(br.end_joint(), br.x_internal()),
            FRAC_PI_2,
            joints.right,
        );
        let bottom = NotchLine::new(
            material,
            endpoint(br.start_joint(), br.y_internal()),
            endpoint(bl.end_joint(), bl.y_internal()),
            PI,
            joints.bottom,
        );
        let left = NotchLine::new(
            material,
            endpoint(bl.start_joint(), bl.x_internal()),
            endpoint(tl.end_joint(), tl.x_internal()),
            -FRAC_PI_2,
            joints.left,
        );

        // Shift the origin so that external corners and joints stay inside the part extent
        let mut origin = origin;
        if tl.is_wood_hinge() {
            origin.x += (WOOD_HINGE_SIZE + 1.0) * t;
            origin.y += WOOD_HINGE_SIZE * t;
        } else if tr.is_wood_hinge() {
            origin.y += WOOD_HINGE_SIZE * t;
            origin.x += t;
        } else if !tl.x_internal() || !bl.x_internal() || left.joint_count() > 0 {
            origin.x += t;
        }
        if !tl.y_internal() || !tr.y_internal() || top.joint_count() > 0 {
            origin.y += t;
        }

        let name = name.into();
        debug!("face {} at ({:.3}, {:.3})", name, origin.x, origin.y);
        Self {
            name,
            material: *material,
            corners,
            top,
            right,
            bottom,
            left,
            origin,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Page position of the local origin
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn corners(&self) -> &FaceCorners {
        &self.corners
    }

    pub fn top_line(&self) -> &NotchLine {
        &self.top
    }

    pub fn right_line(&self) -> &NotchLine {
        &self.right
    }

    pub fn bottom_line(&self) -> &NotchLine {
        &self.bottom
    }

    pub fn left_line(&self) -> &NotchLine {
        &self.left
    }

    /// Empty path in this face's frame
    pub fn new_path(&self) -> PathBuilder {
        PathBuilder::labelled(Point::new(-self.origin.x, -self.origin.y), self.name.clone())
    }

    /// Draw, close and emit the face. Returns its bounding box.
    pub fn render(self, style: FaceStyle<'_>, document: &mut SvgDocument) -> BoundingBox {
        let mut path = self.new_path();
        self.trace(style, &mut path);
        path.close();
        let bbox = path.emit(document);
        debug!(
            "face bbox ({:.3}, {:.3}) - ({:.3}, {:.3})",
            bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y
        );
        bbox
    }

    /// Draw the contour into `path` without closing it, so a second contour
    /// can share the same path.
    pub fn trace(mut self, style: FaceStyle<'_>, path: &mut PathBuilder) {
        match style {
            FaceStyle::Plain => self.trace_plain(path),
            FaceStyle::WithHoles {
                n_slot,
                slot_size,
                hole_offset,
                z_joint,
                hinges,
            } => {
                match hinges {
                    Some(hinges) => self.trace_hinge_cutout(path, hinges),
                    None => self.trace_plain(path),
                }
                self.trace_wall_holes(path, n_slot, slot_size, hole_offset, z_joint);
            }
            FaceStyle::HingeCutout(hinges) => self.trace_hinge_cutout(path, hinges),
            FaceStyle::SlidingLidBack => self.trace_sliding_lid_back(path),
            FaceStyle::WoodHingeBack => self.trace_wood_hinge_back(path),
            FaceStyle::WoodHingeLidBack => self.trace_wood_hinge_lid_back(path),
            FaceStyle::WoodHingeLidSide { right } => self.trace_wood_hinge_lid_side(path, right),
            FaceStyle::SteelHingeBack(hinges) => self.trace_steel_hinge_back(path, hinges),
            FaceStyle::SteelHingeLidBack(hinges) => self.trace_steel_hinge_lid_back(path, hinges),
        }
    }

    /// Right edge, bottom corners, bottom edge and left edge
    fn trace_lower_contour(&self, path: &mut PathBuilder) {
        self.right.draw(path);
        self.corners.bottom_right.draw(path);
        self.bottom.draw(path);
        self.corners.bottom_left.draw(path);
        self.left.draw(path);
    }

    fn trace_plain(&mut self, path: &mut PathBuilder) {
        let t = self.material.thickness;
        let cut = WOOD_HINGE_SIZE * t;
        if self.corners.top_left.is_wood_hinge() {
            // the knuckle moved the left joints, realign them on the right edge
            self.left.follow_right_edge(&self.right);
            self.left.shorten_for_hinge(cut, false);
        }
        if self.corners.top_right.is_wood_hinge() {
            self.right.follow_left_edge(&self.left);
            self.right.shorten_for_hinge(cut, true);
        }

        let c = &self.corners;
        path.move_to_point(c.top_left.end_joint());
        c.top_left.draw(path);
        self.top.draw(path);
        c.top_right.draw(path);
        self.trace_lower_contour(path);

        if c.top_left.is_wood_hinge() {
            draw_knuckle_axis(path, &self.material, -t, 1.0);
        }
        if c.top_right.is_wood_hinge() {
            draw_knuckle_axis(path, &self.material, c.top_right.corner().x + t, -1.0);
        }
    }

    fn trace_hinge_cutout(&self, path: &mut PathBuilder, hinges: &[Hinge]) {
        let t = self.material.thickness;
        let c = &self.corners;
        path.move_to_point(c.top_left.end_joint());
        c.top_left.draw(path);
        for hinge in hinges {
            let x = hinge.position - 1.0;
            path.line_to(x, 0.0);
            path.line_v_rel(4.5 * t + 1.0);
            path.line_h_rel(5.0 * t + 2.5 * STEEL_HINGE_SPACING + 2.0);
            path.line_v_rel(-4.5 * t - 1.0);
        }
        path.line_to(c.top_right.corner().x, 0.0);
        c.top_right.draw(path);
        self.trace_lower_contour(path);
    }

    /// Holes for the tabs of the perpendicular divider walls
    fn trace_wall_holes(
        &self,
        path: &mut PathBuilder,
        n_slot: usize,
        slot_size: f64,
        hole_offset: f64,
        z_joint: f64,
    ) {
        let t = self.material.thickness;
        let height = self.corners.bottom_right.end_joint().y;
        let line = NotchLine::new(
            &self.material,
            Endpoint::internal(0.0, 0.0),
            Endpoint::internal(height, 0.0),
            FRAC_PI_2,
            z_joint,
        );
        let j = line.joint_size();
        let start = line.start_joint().y + j;
        debug!(
            "wall holes: slots={} size={:.3} joints={} start={:.3}",
            n_slot,
            slot_size,
            line.joint_count(),
            start
        );
        for i in 1..n_slot {
            let x = i as f64 * (slot_size + t) - hole_offset - t;
            for k in 0..line.joint_count() / 2 {
                draw_hole(
                    path,
                    x,
                    start + 2.0 * j * k as f64,
                    t,
                    j,
                    self.material.burn,
                );
            }
        }
    }

    fn trace_sliding_lid_back(&self, path: &mut PathBuilder) {
        let t = self.material.thickness;
        let c = &self.corners;
        path.move_to_point(c.top_left.end_joint());
        c.top_left.draw(path);
        path.line_v_rel(t);
        path.line_h_rel(c.top_right.end_joint().x);
        path.line_v_rel(-t);
        c.top_right.draw(path);
        self.trace_lower_contour(path);
    }

    fn trace_wood_hinge_back(&mut self, path: &mut PathBuilder) {
        let t = self.material.thickness;
        let cut = self.material.wood_hinge_cut();
        self.right.shorten_for_hinge(cut, true);
        self.left.shorten_for_hinge(cut, false);
        path.move_to(0.0, -t);
        path.line_to(self.corners.top_right.end_joint().x, -t);
        path.line_v_rel(cut);
        path.line_h_rel(t);
        self.trace_lower_contour(path);
        path.line_h_rel(t);
        path.line_to(0.0, -t);
    }

    fn trace_wood_hinge_lid_back(&mut self, path: &mut PathBuilder) {
        let t = self.material.thickness;
        let cut = self.material.wood_hinge_cut();
        self.right.shorten_for_hinge(cut, false);
        self.left.shorten_for_hinge(cut, true);
        let c = &self.corners;
        path.move_to_point(c.top_left.end_joint());
        c.top_left.draw(path);
        self.top.draw(path);
        c.top_right.draw(path);
        self.right.draw(path);

        let br = c.bottom_right.corner();
        let bl = c.bottom_left.corner();
        let br_x = c.bottom_right.end_joint().x;
        path.line_h_rel(-t);
        path.line_to(br_x - t, br.y - WOOD_HINGE_RECT * t);
        path.line_h_rel(t);
        path.line_v_rel(WOOD_HINGE_RECT * t);
        path.line_to(br_x - t, br.y);
        path.line_to(-t, bl.y);
        path.line_v_rel(-WOOD_HINGE_RECT * t);
        path.line_h_rel(t);
        path.line_to(0.0, bl.y - cut);
        path.line_h_rel(-t);
        self.left.draw(path);
        path.line_to(-t, -t);
    }

    fn trace_wood_hinge_lid_side(&mut self, path: &mut PathBuilder, right: bool) {
        let t = self.material.thickness;
        let cut = self.material.wood_hinge_cut();
        if right {
            self.right.shorten_for_hinge(cut, false);
        } else {
            self.left.shorten_for_hinge(cut, true);
        }
        let k = BEZIER_CIRCLE_K;
        let c = &self.corners;
        path.move_to_point(c.top_left.end_joint());
        c.top_left.draw(path);
        self.top.draw(path);
        c.top_right.draw(path);
        self.right.draw(path);

        let tr_x = c.top_right.corner().x;
        let br_y = c.bottom_right.corner().y;
        let bl_y = c.bottom_left.corner().y;
        if right {
            path.line_to(tr_x, br_y - 0.95 * cut);
            path.bezier_to(
                Point::new(tr_x - 0.23 * cut, br_y - 0.9 * cut),
                Point::new(tr_x - cut + t, br_y - k * cut),
                Point::new(tr_x - cut + t, br_y),
            );
            path.line_to(0.0, bl_y);
        } else {
            path.line_to(tr_x, br_y);
            path.line_to(cut - t, bl_y);
            path.bezier_to(
                Point::new(cut - t, bl_y - k * cut),
                Point::new(0.23 * cut, bl_y - 0.9 * cut),
                Point::new(0.0, bl_y - 0.95 * cut),
            );
        }
        self.left.draw(path);
        path.line_to(0.0, -t);
    }

    fn trace_steel_hinge_back(&self, path: &mut PathBuilder, hinges: &[Hinge]) {
        let t = self.material.thickness;
        let s = STEEL_HINGE_SPACING;
        path.move_to(-t, -t);
        for hinge in hinges {
            path.line_to(hinge.position + t, -t);
            path.line_v_rel(2.5 * t);
            path.line_h_rel(t);
            for _ in 0..2 {
                path.line_v_rel(-t + 0.5 * s);
                path.line_h_rel(t + s);
                path.line_v_rel(t - 0.5 * s);
                path.line_h_rel(t);
            }
            path.line_v_rel(-2.5 * t);
        }
        path.line_to(self.corners.top_right.corner().x, -t);
        self.trace_lower_contour(path);
        path.line_to(-t, -t);

        // axis holes of the three knuckles held by the box
        for hinge in hinges {
            for x in [
                hinge.position + t,
                hinge.position + 3.0 * t + s,
                hinge.position + 5.0 * t + 2.0 * s,
            ] {
                axis_slot(path, x, 3.5 * t, t);
            }
        }
    }

    fn trace_steel_hinge_lid_back(&self, path: &mut PathBuilder, hinges: &[Hinge]) {
        let t = self.material.thickness;
        let s = STEEL_HINGE_SPACING;
        let c = &self.corners;
        path.move_to_point(c.top_left.end_joint());
        c.top_left.draw(path);
        self.top.draw(path);
        c.top_right.draw(path);
        self.right.draw(path);
        c.bottom_right.draw(path);

        let z = c.bottom_right.corner().y;
        for hinge in hinges.iter().rev() {
            let x = hinge.position + t;
            path.line_to(x + 5.0 * t + 2.5 * s, z);
            path.line_v_rel(-1.5 * t - 0.5 * s);
            for _ in 0..2 {
                path.line_h_rel(-t - s);
                path.line_v_rel(-t + 0.5 * s);
                path.line_h_rel(-t);
                path.line_v_rel(t - 0.5 * s);
            }
            path.line_h_rel(-t - s);
            path.line_v_rel(1.5 * t + 0.5 * s);
        }
        path.line_to_point(c.bottom_left.end_joint());
        c.bottom_left.draw(path);
        self.left.draw(path);
        path.line_to(-t, -t);

        // axis holes of the two knuckles held by the lid
        for hinge in hinges {
            let x = hinge.position + 2.0 * t;
            axis_slot(path, x + 0.5 * s, z - 3.5 * t, t);
            axis_slot(path, x + 2.0 * t + 1.5 * s, z - 3.5 * t, t);
        }
    }

    /// Sliding lid groove strip drawn beside a side face, at `origin`.
    /// Returns the strip bounding box.
    pub fn render_side_line_notches(
        &self,
        origin: Point,
        document: &mut SvgDocument,
    ) -> BoundingBox {
        let t = self.material.thickness;
        let width = self.corners.top_right.center().x - self.corners.top_left.center().x;
        let strip = BoxFace::new(
            &self.material,
            format!("{}LidJoint", self.name),
            FaceCorners::rectangle(&self.material, width, t, true, true),
            EdgeJoints::new(0.0, 0.0, self.top.joint_size(), 0.0),
            origin,
        );
        strip.render(FaceStyle::Plain, document)
    }
}

/// Square hole of side `size` whose lower left corner is `(x, y)`
fn axis_slot(path: &mut PathBuilder, x: f64, y: f64, size: f64) {
    path.move_to(x, y);
    path.line_h_rel(size);
    path.line_v_rel(-size);
    path.line_h_rel(-size);
    path.line_v_rel(size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hinge::place_hinges;

    fn material() -> MaterialContext {
        MaterialContext::new(3.0, 0.1)
    }

    fn plain(width: f64, height: f64, joint: f64, xi: bool, yi: bool) -> BoxFace {
        let m = material();
        BoxFace::new(
            &m,
            "Face",
            FaceCorners::rectangle(&m, width, height, xi, yi),
            EdgeJoints::new(joint, joint, joint, joint),
            Point::ORIGIN,
        )
    }

    #[test]
    fn test_external_face_origin_shift() {
        let face = plain(40.0, 30.0, 5.0, false, false);
        assert_eq!(face.origin(), Point::new(3.0, 3.0));
        let face = plain(40.0, 30.0, 0.0, true, true);
        assert_eq!(face.origin(), Point::ORIGIN);
    }

    #[test]
    fn test_plain_face_extent() {
        let mut doc = SvgDocument::new();
        let bbox = plain(40.0, 30.0, 5.0, false, false).render(FaceStyle::Plain, &mut doc);
        assert!((bbox.min_x - 0.0).abs() < 0.2);
        assert!((bbox.min_y - 0.0).abs() < 0.2);
        assert!((bbox.width() - 46.0).abs() < 0.2);
        assert!((bbox.height() - 36.0).abs() < 0.2);
        let data = &doc.find("Face").unwrap().data;
        assert!(data.trim_start().starts_with('M'));
        assert!(data.ends_with(" z"));
    }

    #[test]
    fn test_internal_plain_face_without_joints_is_rectangle() {
        let mut doc = SvgDocument::new();
        let bbox = plain(40.0, 30.0, 0.0, true, true).render(FaceStyle::Plain, &mut doc);
        assert_eq!(bbox, BoundingBox::new(0.0, 0.0, 40.0, 30.0));
        let path = doc.find("Face").unwrap();
        assert_eq!(path.data.matches(" L ").count(), 4);
    }

    #[test]
    fn test_holes_added_per_inner_slot_boundary() {
        let m = material();
        let face = BoxFace::new(
            &m,
            "Int_Back",
            FaceCorners::rectangle(&m, 54.0, 40.0, false, true),
            EdgeJoints::new(0.0, 5.0, 0.0, 5.0),
            Point::ORIGIN,
        );
        let z_line = NotchLine::new(
            &m,
            Endpoint::internal(0.0, 0.0),
            Endpoint::internal(40.0, 0.0),
            FRAC_PI_2,
            5.0,
        );
        let mut doc = SvgDocument::new();
        face.render(
            FaceStyle::WithHoles {
                n_slot: 3,
                slot_size: 16.0,
                hole_offset: 0.0,
                z_joint: 5.0,
                hinges: None,
            },
            &mut doc,
        );
        let moves = doc.find("Int_Back").unwrap().data.matches(" M ").count();
        // one move for the contour, one per hole
        assert_eq!(moves, 1 + 2 * (z_line.joint_count() / 2));
    }

    #[test]
    fn test_steel_hinge_back_has_axis_holes() {
        let m = material();
        let hinges = place_hinges(&m, 2, 50.0).unwrap();
        let face = BoxFace::new(
            &m,
            "Back",
            FaceCorners::rectangle(&m, 106.0, 40.0, false, false),
            EdgeJoints::new(0.0, 5.0, 5.0, 5.0),
            Point::ORIGIN,
        );
        let mut doc = SvgDocument::new();
        face.render(FaceStyle::SteelHingeBack(&hinges), &mut doc);
        let moves = doc.find("Back").unwrap().data.matches(" M ").count();
        assert_eq!(moves, 1 + 3 * hinges.len());
    }

    #[test]
    fn test_wood_hinge_left_face_draws_knuckle() {
        let m = material();
        let mut corners = FaceCorners::rectangle(&m, 60.0, 40.0, true, false);
        corners.top_left = CornerPoint::wood_hinge(&m, Point::ORIGIN, 0.0, true, false);
        let face = BoxFace::new(
            &m,
            "Left",
            corners,
            EdgeJoints::new(0.0, 5.0, 5.0, 5.0),
            Point::ORIGIN,
        );
        assert_eq!(face.origin(), Point::new(12.0, 12.0));
        let mut doc = SvgDocument::new();
        let bbox = face.render(FaceStyle::Plain, &mut doc);
        // knuckle of radius 3t around (-t, -t)
        assert!(bbox.min_x <= 12.0 - 12.0 + 1e-9);
        assert!(bbox.min_y <= 12.0 - 12.0 + 1e-9);
    }

    #[test]
    fn test_side_line_notches_strip() {
        let m = material();
        let face = BoxFace::new(
            &m,
            "Left",
            FaceCorners::rectangle(&m, 60.0, 40.0, true, false),
            EdgeJoints::new(5.0, 5.0, 5.0, 5.0),
            Point::ORIGIN,
        );
        let mut doc = SvgDocument::new();
        let bbox = face.render_side_line_notches(Point::new(0.0, 100.0), &mut doc);
        assert_eq!(doc.labels(), vec!["LeftLidJoint"]);
        assert!((bbox.min_x - 0.0).abs() < 1e-9);
        assert!(bbox.max_y > 100.0 + 3.0);
    }
}
