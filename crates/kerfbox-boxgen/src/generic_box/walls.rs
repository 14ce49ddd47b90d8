//! Internal walls doubling the sides, and the divider walls between slots.

use super::{GenericBox, NotchPos, Sheet};
use crate::box_face::{BoxFace, EdgeJoints, FaceCorners, FaceStyle};
use crate::notch_line::{Endpoint, NotchLine};
use crate::path_builder::PathBuilder;
use kerfbox_core::material::LAYOUT_GAP;
use kerfbox_core::{BoundingBox, Point};
use std::f64::consts::FRAC_PI_2;
use tracing::debug;

/// Shortening of an internal wall at one end, and the joint size of that end
fn wall_end(radius: f64, thickness: f64, joined: bool, z_joint: f64) -> (f64, f64) {
    if radius > 0.0 {
        (radius, 0.0)
    } else {
        (thickness, if joined { z_joint } else { 0.0 })
    }
}

impl GenericBox {
    /// Walls lining the sides, holding the tabs of the dividers
    pub(super) fn build_internal_walls(&self, sheet: &mut Sheet) {
        if !self.walls_front_back && !self.walls_left_right {
            return;
        }
        let m = &self.material;
        let t = m.thickness;
        let r = &self.radii;
        let jz = self.joints.z;
        let zw = self.z_walls;
        let ypos = sheet.layout.bottom();
        let mut xpos = 0.0;

        if self.walls_front_back {
            let lr = self.walls_left_right;
            let hinges = if self.params.lid.uses_steel_hinges() {
                Some(self.hinges.as_slice())
            } else {
                None
            };
            for (name, left_radius, right_radius, hinges) in [
                ("Int_Back", r.back_left, r.back_right, hinges),
                ("Int_Front", r.front_left, r.front_right, None),
            ] {
                let (d1, left_joint) = wall_end(left_radius, t, lr, jz);
                let (d2, right_joint) = wall_end(right_radius, t, lr, jz);
                let wall = BoxFace::new(
                    m,
                    name,
                    FaceCorners::rectangle(m, self.params.x - d1 - d2, zw, false, true),
                    EdgeJoints::new(0.0, right_joint, 0.0, left_joint),
                    Point::new(xpos, ypos),
                );
                let bbox = sheet.draw_face(
                    wall,
                    FaceStyle::WithHoles {
                        n_slot: self.params.n_slot_x,
                        slot_size: self.x_slot,
                        hole_offset: d1 - t,
                        z_joint: jz,
                        hinges,
                    },
                );
                xpos = bbox.max_x + LAYOUT_GAP;
            }
        }

        if self.walls_left_right {
            let fb = self.walls_front_back;
            for (name, start_radius, end_radius) in [
                ("Int_Left", r.back_left, r.front_left),
                ("Int_Right", r.front_right, r.back_right),
            ] {
                let (d1, left_joint) = wall_end(start_radius, t, fb, jz);
                let (d2, right_joint) = wall_end(end_radius, t, fb, jz);
                let wall = BoxFace::new(
                    m,
                    name,
                    FaceCorners::rectangle(m, self.params.y - d1 - d2, zw, true, true),
                    EdgeJoints::new(0.0, right_joint, 0.0, left_joint),
                    Point::new(xpos, ypos),
                );
                let bbox = sheet.draw_face(
                    wall,
                    FaceStyle::WithHoles {
                        n_slot: self.params.n_slot_y,
                        slot_size: self.y_slot,
                        hole_offset: d1 - t,
                        z_joint: jz,
                        hinges: None,
                    },
                );
                xpos = bbox.max_x + LAYOUT_GAP;
            }
        }
    }

    /// Column walls (along y) then row walls (along x). Columns are cut
    /// from the top and rows from the bottom so that they interlock.
    pub(super) fn build_dividers(
        &self,
        sheet: &mut Sheet,
        columns: &[NotchPos],
        rows: &[NotchPos],
    ) {
        let t = self.material.thickness;
        let (x, y) = (self.params.x, self.params.y);
        let mut ypos = sheet.layout.bottom();
        let mut xpos = 0.0;
        for i in 0..self.params.n_slot_x.saturating_sub(1) {
            self.draw_column_wall(sheet, i, columns, Point::new(xpos, ypos));
            xpos += y + LAYOUT_GAP;
        }

        xpos = 0.0;
        ypos += self.z_walls + t + LAYOUT_GAP;
        for i in 0..self.params.n_slot_y.saturating_sub(1) {
            self.draw_row_wall(sheet, i, rows, Point::new(xpos, ypos));
            xpos += x + LAYOUT_GAP;
        }
    }

    fn divider_path(&self, label: String, origin: Point) -> PathBuilder {
        let t = self.material.thickness;
        PathBuilder::labelled(Point::new(-(origin.x + t), -origin.y), label)
    }

    /// Right edge of a divider, from the top right corner to the bottom one
    fn divider_right_edge(&self, path: &mut PathBuilder, length: f64) {
        let t = self.material.thickness;
        let z = self.z_walls;
        path.line_to(length, 0.0);
        path.line_to(length, t);
        NotchLine::new(
            &self.material,
            Endpoint::internal(length, 0.0),
            Endpoint::internal(length, z),
            FRAC_PI_2,
            self.joints.z,
        )
        .draw(path);
        path.line_to(length, z);
    }

    /// Left edge of a divider, back to the start point
    fn divider_left_edge(&self, path: &mut PathBuilder) {
        let t = self.material.thickness;
        let z = self.z_walls;
        path.line_to(0.0, z);
        path.line_to(0.0, z - t);
        NotchLine::new(
            &self.material,
            Endpoint::internal(0.0, z),
            Endpoint::internal(0.0, 0.0),
            -FRAC_PI_2,
            self.joints.z,
        )
        .draw(path);
        path.line_to(0.0, 0.0);
        path.close();
    }

    fn draw_column_wall(
        &self,
        sheet: &mut Sheet,
        index: usize,
        notches: &[NotchPos],
        origin: Point,
    ) -> BoundingBox {
        let t = self.material.thickness;
        let z = self.z_walls;
        let length = self.params.y - 2.0 * t;
        let mut path = self.divider_path(format!("COL_WALL_{}", index + 1), origin);
        path.move_to(0.0, 0.0);
        // half height cuts where the row walls cross
        for _ in 1..self.params.n_slot_y {
            path.line_h_rel(self.y_slot);
            path.line_v_rel(z / 2.0);
            path.line_h_rel(t);
            path.line_v_rel(-z / 2.0);
        }
        self.divider_right_edge(&mut path, length);
        for notch in notches.iter().rev() {
            draw_tab(&mut path, notch, z, t);
        }
        self.divider_left_edge(&mut path);
        let bbox = sheet.emit(path);
        debug!("COL_WALL_{} at {:?}", index + 1, bbox);
        bbox
    }

    fn draw_row_wall(
        &self,
        sheet: &mut Sheet,
        index: usize,
        notches: &[NotchPos],
        origin: Point,
    ) -> BoundingBox {
        let t = self.material.thickness;
        let z = self.z_walls;
        let length = self.params.x - 2.0 * t;
        let mut path = self.divider_path(format!("ROW_WALL_{}", index + 1), origin);
        path.move_to(0.0, 0.0);
        self.divider_right_edge(&mut path, length);
        // tabs go right to left, with a cut at each column crossing
        let mut slot = self.params.n_slot_x - 1;
        for notch in notches.iter().rev() {
            if notch.slot != slot {
                path.line_to(slot as f64 * (self.x_slot + t), z);
                path.line_v_rel(-z / 2.0);
                path.line_h_rel(-t);
                path.line_v_rel(z / 2.0);
                slot = notch.slot;
            }
            draw_tab(&mut path, notch, z, t);
        }
        self.divider_left_edge(&mut path);
        let bbox = sheet.emit(path);
        debug!("ROW_WALL_{} at {:?}", index + 1, bbox);
        bbox
    }
}

/// Tab under a divider going into a bottom plate hole, drawn right to left
fn draw_tab(path: &mut PathBuilder, notch: &NotchPos, z: f64, t: f64) {
    path.line_to(notch.start + notch.size, z);
    path.line_v_rel(t);
    path.line_h_rel(-notch.size);
    path.line_v_rel(-t);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_end_against_rounded_corner() {
        assert_eq!(wall_end(10.0, 3.0, true, 8.0), (10.0, 0.0));
        assert_eq!(wall_end(0.0, 3.0, true, 8.0), (3.0, 8.0));
        assert_eq!(wall_end(0.0, 3.0, false, 8.0), (3.0, 0.0));
    }
}
