//! Flex bands: one strip wrapping several sides around rounded corners.
//!
//! The band is a chain of segments, each made of a straight run with finger
//! joints followed by the developed length of a rounded corner, where the
//! living hinge cuts go. The top edge is walked forward, the bottom edge
//! backward.

use crate::box_face::{draw_knuckle_axis, BoxFace, EdgeJoints, FaceCorners, FaceStyle};
use crate::document::SvgDocument;
use crate::error::{BoxGenError, BoxGenResult};
use crate::flex_lines::FlexLines;
use crate::notch_line::{Endpoint, HalfLine, NotchLine};
use crate::path_builder::{PathBuilder, Quadrant};
use kerfbox_core::material::{BEZIER_CIRCLE_K, LAYOUT_GAP, WOOD_HINGE_SIZE};
use kerfbox_core::{BoundingBox, MaterialContext, Point};
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::debug;

/// One side of the box inside a flex band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexSegment {
    /// Side length, rounded corners included
    pub length: f64,
    /// Joint size of the top edge
    pub top_joint: f64,
    /// Radius of the rounded corner ending this segment
    pub radius: f64,
    /// Joint size of the bottom edge
    pub bottom_joint: f64,
    /// The band ends on a wood hinge knuckle at this segment
    pub wood_hinge: bool,
}

impl FlexSegment {
    pub fn new(length: f64, top_joint: f64, radius: f64, bottom_joint: f64) -> Self {
        Self {
            length,
            top_joint,
            radius,
            bottom_joint,
            wood_hinge: false,
        }
    }

    pub fn with_wood_hinge(mut self, wood_hinge: bool) -> Self {
        self.wood_hinge = wood_hinge;
        self
    }

    fn developed_corner(&self) -> f64 {
        self.radius * FRAC_PI_2
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlexBand {
    pub name: String,
    /// Status of the vertical edge starting the band
    pub start_internal: bool,
    /// Status of the vertical edge ending the band
    pub end_internal: bool,
    pub segments: Vec<FlexSegment>,
}

impl FlexBand {
    pub fn new(
        name: impl Into<String>,
        start_internal: bool,
        end_internal: bool,
        segments: Vec<FlexSegment>,
    ) -> Self {
        Self {
            name: name.into(),
            start_internal,
            end_internal,
            segments,
        }
    }
}

/// Room left for the clips closing a band wrapping the whole box, and the
/// clip size and count fitting in it
pub fn clip_layout(height: f64, thickness: f64) -> (f64, f64, usize) {
    let zone = height - 2.0 * thickness;
    let size = if zone < 50.0 { 10.0 } else { 18.0 };
    let count = if zone > 0.0 {
        (zone / size).floor() as usize
    } else {
        0
    };
    (zone, size, count)
}

#[derive(Debug, Clone)]
pub struct FlexFace {
    material: MaterialContext,
    band: FlexBand,
    is_lid: bool,
    height: f64,
    z_joint: f64,
    origin: Point,
}

impl FlexFace {
    pub fn new(
        material: &MaterialContext,
        band: FlexBand,
        is_lid: bool,
        height: f64,
        z_joint: f64,
        origin: Point,
    ) -> Self {
        let t = material.thickness;
        let knuckle = WOOD_HINGE_SIZE * t;
        let mut origin = Point::new(origin.x + t, origin.y + t);
        if !is_lid {
            let first = band.segments.first().map_or(false, |s| s.wood_hinge);
            let last = band.segments.len() > 1
                && band.segments.last().map_or(false, |s| s.wood_hinge);
            if first {
                origin.x += knuckle;
                origin.y += knuckle;
            } else if last {
                origin.y += knuckle;
            }
        }
        Self {
            material: *material,
            band,
            is_lid,
            height,
            z_joint,
            origin,
        }
    }

    /// Label of the emitted path
    pub fn label(&self) -> String {
        if self.is_lid {
            format!("Lid_{}", self.band.name)
        } else {
            self.band.name.clone()
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    fn new_path(&self) -> PathBuilder {
        PathBuilder::labelled(Point::new(-self.origin.x, -self.origin.y), self.label())
    }

    fn top_line(&self, x0: f64, x1: f64, joint: f64) -> NotchLine {
        let t = self.material.thickness;
        NotchLine::new(
            &self.material,
            Endpoint::external(x0, -t),
            Endpoint::external(x1, -t),
            0.0,
            joint,
        )
    }

    fn bottom_line(&self, x0: f64, x1: f64, joint: f64, half: HalfLine) -> NotchLine {
        let y = self.height + self.material.thickness;
        NotchLine::with_half(
            &self.material,
            Endpoint::external(x0, y),
            Endpoint::external(x1, y),
            PI,
            joint,
            half,
        )
    }

    /// Draw a band with at least one straight corner, i.e. with two free
    /// vertical edges. Returns the bounding box.
    pub fn render(&self, document: &mut SvgDocument) -> BoundingBox {
        let t = self.material.thickness;
        let h = self.height;
        let cut = WOOD_HINGE_SIZE * t;
        let k = BEZIER_CIRCLE_K;
        let segments = &self.band.segments;
        let n = segments.len();
        let joints = |s: &FlexSegment| {
            if self.is_lid {
                (s.bottom_joint, s.top_joint)
            } else {
                (s.top_joint, s.bottom_joint)
            }
        };
        let mut path = self.new_path();
        let mut flex_positions = Vec::new();
        let mut left_circle = false;
        let mut left_circle_cut = false;
        let mut right_circle = None;
        let mut right_circle_cut = false;
        let mut last_radius = 0.0;
        let mut xpos = 0.0;

        debug!(
            "flex face {} lid={} segments={} height={:.3}",
            self.band.name, self.is_lid, n, h
        );

        let start_path = |path: &mut PathBuilder| {
            if self.band.start_internal {
                path.move_to(0.0, -t);
            } else {
                path.move_to(-t, -t);
                path.line_to(0.0, -t);
            }
        };

        for (i, seg) in segments.iter().enumerate() {
            let (top_joint, _) = joints(seg);
            let run = seg.length - last_radius - seg.radius;
            let first = i == 0;
            let last = i == n - 1;
            if first && seg.wood_hinge && !self.is_lid {
                left_circle = true;
                path.move_to(0.0, (WOOD_HINGE_SIZE - 1.0) * t);
                path.line_h_rel(-t);
                for quadrant in [Quadrant::LowerLeft, Quadrant::UpperLeft, Quadrant::UpperRight] {
                    path.quarter_circle(-t, -t, cut, quadrant);
                }
                path.line_to(seg.length - seg.radius, -t);
                xpos += run;
            } else if last && seg.wood_hinge && !self.is_lid {
                path.line_to(xpos + seg.length - last_radius - (WOOD_HINGE_SIZE - 1.0) * t, -t);
                xpos += seg.length - last_radius;
                let xc = xpos + t;
                for quadrant in [Quadrant::UpperLeft, Quadrant::UpperRight, Quadrant::LowerRight] {
                    path.quarter_circle(xc, -t, cut, quadrant);
                }
                path.line_h_rel(-t);
                right_circle = Some(xc);
            } else {
                if first {
                    start_path(&mut path);
                    left_circle_cut = seg.wood_hinge;
                }
                if last && seg.wood_hinge {
                    right_circle_cut = true;
                }
                self.top_line(xpos, xpos + run, top_joint).draw(&mut path);
                xpos += run;
            }
            if seg.radius > 0.0 {
                path.line_to(xpos + seg.developed_corner(), -t);
                flex_positions.push((xpos, seg.radius));
            }
            xpos += seg.developed_corner();
            last_radius = seg.radius;
        }

        // Right vertical edge
        if right_circle.is_none() {
            if !self.band.end_internal {
                path.line_to(xpos + t, -t);
                xpos += t;
            }
            path.line_to(xpos, 0.0);
        }
        let end = Endpoint::new(xpos, h, self.band.end_internal);
        let mut v_line = NotchLine::new(
            &self.material,
            Endpoint::new(xpos, 0.0, self.band.end_internal),
            end,
            FRAC_PI_2,
            self.z_joint,
        );
        if right_circle.is_some() {
            v_line.shorten_for_hinge(cut, true);
        } else if right_circle_cut {
            v_line.shorten_for_hinge(cut, false);
        }
        v_line.draw(&mut path);
        if right_circle_cut {
            // the knuckle center is shifted by t, hence less than a full quarter
            path.line_to(xpos, h + t - 0.95 * cut);
            path.bezier_to(
                Point::new(xpos - 0.23 * cut, h + t - 0.9 * cut),
                Point::new(xpos - cut + t, h + t - k * cut),
                Point::new(xpos - cut + t, h + t),
            );
        } else {
            path.line_to(xpos, h + t);
        }

        // Bottom edge, backward
        if !self.band.end_internal {
            path.line_to(xpos - t, h + t);
            xpos -= t;
        }
        for i in (0..n).rev() {
            let seg = &segments[i];
            let (_, bottom_joint) = joints(seg);
            let next_radius = if i > 0 { segments[i - 1].radius } else { 0.0 };
            if seg.radius > 0.0 {
                path.line_to(xpos - seg.developed_corner(), h + t);
                xpos -= seg.developed_corner();
            }
            if i == 0 && left_circle_cut {
                path.line_to(cut - t, h + t);
                xpos = 0.0;
            } else {
                let run = seg.length - seg.radius - next_radius;
                self.bottom_line(xpos, xpos - run, bottom_joint, HalfLine::Full)
                    .draw(&mut path);
                xpos -= run;
            }
        }

        // Left vertical edge
        if !left_circle_cut {
            if !self.band.start_internal {
                path.line_to(xpos - t, h + t);
                xpos -= t;
            }
            path.line_to(xpos, h);
        }
        let mut v_line = NotchLine::new(
            &self.material,
            Endpoint::new(xpos, h, self.band.start_internal),
            Endpoint::new(xpos, 0.0, self.band.start_internal),
            -FRAC_PI_2,
            self.z_joint,
        );
        if left_circle {
            v_line.shorten_for_hinge(cut, false);
        } else if left_circle_cut {
            v_line.shorten_for_hinge(cut, true);
            path.bezier_to(
                Point::new(cut - t, h + t - k * cut),
                Point::new(0.23 * cut, h + t - 0.9 * cut),
                Point::new(0.0, h + t - 0.95 * cut),
            );
        }
        v_line.draw(&mut path);
        if left_circle {
            path.line_to(xpos, cut - t);
        } else {
            path.line_to(xpos, -t);
        }

        if left_circle {
            draw_knuckle_axis(&mut path, &self.material, -t, 1.0);
        }
        if let Some(xc) = right_circle {
            draw_knuckle_axis(&mut path, &self.material, xc, -1.0);
        }
        self.finish(path, flex_positions, document)
    }

    /// Draw a band wrapping the four rounded corners. The band starts and
    /// ends at the middle of the back, where clips hold it closed.
    ///
    /// Segments are back, right, front, left and back again.
    pub fn render_all_rounded(&self, document: &mut SvgDocument) -> BoxGenResult<BoundingBox> {
        let t = self.material.thickness;
        let h = self.height;
        let segments = &self.band.segments;
        if segments.len() != 5 {
            return Err(BoxGenError::geometry(format!(
                "a band wrapping the whole box needs 5 segments, got {}",
                segments.len()
            )));
        }
        let (zone, clip_size, clip_count) = clip_layout(h, t);
        if clip_count == 0 {
            return Err(BoxGenError::geometry("box is not high enough, no room for clips"));
        }
        debug!(
            "rounded flex face: clip size={:.3} count={}",
            clip_size, clip_count
        );
        let clip_margin = (zone - clip_count as f64 * clip_size) / 2.0;

        let mut path = self.new_path();
        let mut flex_positions = Vec::new();

        // first half of the back
        let back = &segments[0];
        let mut last_radius = segments[3].radius;
        let half = (back.length - back.radius - last_radius) / 2.0;
        let first_line = NotchLine::with_half(
            &self.material,
            Endpoint::external(-half, -t),
            Endpoint::external(half, -t),
            0.0,
            back.top_joint,
            HalfLine::SecondHalf,
        );
        let start = if first_line.start_internal() {
            Point::ORIGIN
        } else {
            Point::new(0.0, -t)
        };
        path.move_to_point(start);
        first_line.draw(&mut path);
        let mut xpos = half;
        flex_positions.push((xpos, back.radius));
        if back.radius > 0.0 {
            path.line_to(xpos + back.developed_corner(), -t);
        }
        xpos += back.developed_corner();
        last_radius = back.radius;

        for seg in &segments[1..4] {
            let run = seg.length - last_radius - seg.radius;
            self.top_line(xpos, xpos + run, seg.top_joint).draw(&mut path);
            xpos += run;
            if seg.radius > 0.0 {
                path.line_to(xpos + seg.developed_corner(), -t);
                flex_positions.push((xpos, seg.radius));
            }
            xpos += seg.developed_corner();
            last_radius = seg.radius;
        }

        // second half of the back, the band ends at its middle
        let back_end = &segments[4];
        let run = back_end.length - last_radius - back_end.radius;
        NotchLine::with_half(
            &self.material,
            Endpoint::external(xpos, -t),
            Endpoint::external(xpos + run, -t),
            0.0,
            back_end.top_joint,
            HalfLine::FirstHalf,
        )
        .draw(&mut path);
        xpos += run / 2.0;

        path.line_to(xpos, t);
        path.line_v_rel(clip_margin);
        for _ in 0..clip_count {
            draw_clip(&mut path, clip_size, 1.0);
        }

        // bottom edge, backward
        let next_radius = segments[3].radius;
        let half_end = (back_end.length - next_radius - back_end.radius) / 2.0;
        let line = self.bottom_line(
            xpos + half_end,
            xpos - half_end,
            back_end.bottom_joint,
            HalfLine::SecondHalf,
        );
        if line.start_internal() {
            path.line_to(xpos, h);
        } else {
            path.line_to(xpos, h + t);
        }
        line.draw(&mut path);
        xpos -= half_end;

        for i in (1..4).rev() {
            let seg = &segments[i];
            let next_radius = segments[i - 1].radius;
            if seg.radius > 0.0 {
                path.line_to(xpos - seg.developed_corner(), h + t);
                xpos -= seg.developed_corner();
            }
            let run = seg.length - seg.radius - next_radius;
            self.bottom_line(xpos, xpos - run, seg.bottom_joint, HalfLine::Full)
                .draw(&mut path);
            xpos -= run;
        }

        path.line_to(xpos - back.developed_corner(), h + t);
        xpos -= back.developed_corner();
        let run = back.length - back.radius - last_radius;
        self.bottom_line(xpos, xpos - run, back.bottom_joint, HalfLine::FirstHalf)
            .draw(&mut path);
        xpos -= run / 2.0;
        path.line_to(xpos, h);
        path.line_v_rel(-clip_margin - t);
        for _ in 0..clip_count {
            draw_clip(&mut path, clip_size, -1.0);
        }
        path.line_to_point(start);

        Ok(self.finish(path, flex_positions, document))
    }

    fn finish(
        &self,
        mut path: PathBuilder,
        flex_positions: Vec<(f64, f64)>,
        document: &mut SvgDocument,
    ) -> BoundingBox {
        for (x, radius) in flex_positions {
            FlexLines::new(&self.material, self.height, radius).draw(&mut path, x);
        }
        path.close();
        let bbox = path.emit(document);
        debug!(
            "flex face {} bbox ({:.3}, {:.3}) - ({:.3}, {:.3})",
            self.label(),
            bbox.min_x,
            bbox.min_y,
            bbox.max_x,
            bbox.max_y
        );
        bbox
    }

    /// Sliding lid groove strips, one per segment with top joints, stacked
    /// right of the band whose bounding box is `face_bbox`
    pub fn render_side_line_notches(
        &self,
        face_bbox: &BoundingBox,
        document: &mut SvgDocument,
    ) -> BoundingBox {
        let t = self.material.thickness;
        let mut extent = *face_bbox;
        let mut y = face_bbox.min_y;
        let mut last_radius = 0.0;
        let mut index = 0;
        for seg in &self.band.segments {
            if seg.top_joint > 0.0 {
                index += 1;
                let width = seg.length - seg.radius - last_radius;
                let strip = BoxFace::new(
                    &self.material,
                    format!("{}LidJoint{}", self.band.name, index),
                    FaceCorners::rectangle(&self.material, width, t, true, true),
                    EdgeJoints::new(0.0, 0.0, seg.top_joint, 0.0),
                    Point::new(face_bbox.max_x + LAYOUT_GAP, y),
                );
                let bbox = strip.render(FaceStyle::Plain, document);
                extent = extent.union(&bbox);
                y += 2.0 * t + LAYOUT_GAP;
            }
            last_radius = seg.radius;
        }
        extent
    }
}

/// Clip holding the two ends of a closed band, `size` long and a quarter
/// as wide. `direction` is 1 to draw downward, -1 upward.
fn draw_clip(path: &mut PathBuilder, size: f64, direction: f64) {
    let s = size;
    let d = direction;
    let rel = |x: f64, y: f64| Point::new(s * x, s * y * d);
    path.line_v_rel(s * 0.3075 * d);
    path.bezier_rel(
        rel(0.0, 0.036241333),
        rel(0.045356111, 0.052734333),
        rel(0.0685556, 0.025),
    );
    path.line_rel(s * 0.132166667, -s * 0.157555556 * d);
    path.bezier_rel(
        rel(0.016710556, -0.02),
        rel(0.05, -0.008),
        rel(0.05, 0.017795167),
    );
    path.line_v_rel(s * 0.615 * d);
    path.bezier_rel(
        rel(0.0, 0.026),
        rel(-0.032335, 0.037760389),
        rel(-0.05, 0.017795167),
    );
    path.line_rel(-s * 0.132166667, -s * 0.157555556 * d);
    path.bezier_rel(
        rel(-0.023437778, -0.027777778),
        rel(-0.068576667, -0.011284722),
        rel(-0.068576667, 0.025),
    );
    path.line_v_rel(s * 0.3075 * d);
}
