//! Coffin lid: two sides topped by a half ellipse, and a top plate whose
//! middle is a flex band bending over the ellipses.

use super::{GenericBox, Sheet};
use crate::ellipse::Ellipse;
use crate::notch_line::{Endpoint, NotchLine};
use crate::path_builder::PathBuilder;
use kerfbox_core::material::{LAYOUT_GAP, STEEL_HINGE_SPACING};
use kerfbox_core::{BoundingBox, Point};
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::debug;

impl GenericBox {
    pub(super) fn build_coffin_lid(&self, sheet: &mut Sheet) {
        let t = self.material.thickness;
        let y = self.params.y;
        // the lid frame includes the top plate thickness
        let z_lid = self.z_lid + t;
        let ypos = sheet.layout.bottom();
        let mut xpos = 0.0;
        self.draw_coffin_side("Lid_Left", z_lid, Point::new(xpos, ypos), sheet);
        xpos += y + 2.0 * t + LAYOUT_GAP;
        self.draw_coffin_side("Lid_Right", z_lid, Point::new(xpos, ypos), sheet);
        xpos += y + 2.0 * t + LAYOUT_GAP;
        self.draw_coffin_top(z_lid, Point::new(xpos, ypos), sheet);
    }

    fn dome(&self) -> Ellipse {
        Ellipse::new(&self.material, self.params.y / 2.0, self.params.z_dome_lid)
    }

    /// Rectangle `y` by `z_lid` under a notched half ellipse, drawn from its
    /// bottom left corner
    fn draw_coffin_side(
        &self,
        name: &str,
        z_lid: f64,
        origin: Point,
        sheet: &mut Sheet,
    ) -> BoundingBox {
        let m = &self.material;
        let t = m.thickness;
        let y = self.params.y;
        let page = Point::new(origin.x + t, origin.y + z_lid + self.params.z_dome_lid + t);
        let mut path = PathBuilder::labelled(Point::new(-page.x, -page.y), name);

        path.move_to(0.0, 0.0);
        NotchLine::new(
            m,
            Endpoint::internal(0.0, 0.0),
            Endpoint::internal(0.0, -z_lid),
            -FRAC_PI_2,
            self.joints.z,
        )
        .draw(&mut path);
        let plan = self.dome().draw_notched(&mut path, PI, 2.0 * PI, Point::new(0.0, -z_lid));
        debug!(
            "{}: dome of {:.3}mm, {} notches of {:.3}",
            name, plan.length, plan.notch_count, plan.notch_size
        );
        NotchLine::new(
            m,
            Endpoint::internal(y, -z_lid),
            Endpoint::internal(y, 0.0),
            FRAC_PI_2,
            self.joints.z,
        )
        .draw(&mut path);
        path.line_to(0.0, 0.0);
        path.close();
        sheet.emit(path)
    }

    /// Top plate: straight front and back parts joined by the flex band.
    /// Laid with the box x axis vertical.
    fn draw_coffin_top(&self, z_lid: f64, origin: Point, sheet: &mut Sheet) -> BoundingBox {
        let m = &self.material;
        let t = m.thickness;
        let x = self.params.x;
        let jz = self.joints.z;
        let s = STEEL_HINGE_SPACING;
        let dome = self.dome();
        let plan = dome.compute_notches(PI, 2.0 * PI);
        let l = plan.length;
        let mut path = PathBuilder::labelled(Point::new(-origin.x, -(origin.y + t)), "Coffin_Top");

        // hinge axis holes first, they are small and cut best before the contour
        for hinge in &self.hinges {
            let hp = hinge.position + 2.0 * t;
            for y0 in [hp + 0.5 * s, hp + 2.0 * t + 1.5 * s] {
                path.move_to(3.5 * t, y0);
                path.line_v_rel(t);
                path.line_h_rel(t);
                path.line_v_rel(-t);
                path.line_h_rel(-t);
            }
        }

        path.move_to(z_lid, x + t);
        NotchLine::new(
            m,
            Endpoint::external(z_lid, x + t),
            Endpoint::external(0.0, x + t),
            PI,
            jz,
        )
        .draw(&mut path);
        // back edge, right to left, with the hinge knuckle cuts
        for hinge in self.hinges.iter().rev() {
            let hp = hinge.position + t;
            path.line_to(0.0, hp + 5.0 * t + 2.5 * s);
            path.line_h_rel(1.5 * t + 0.5 * s);
            path.line_v_rel(-t - s);
            for _ in 0..2 {
                path.line_h_rel(t - 0.5 * s);
                path.line_v_rel(-t);
                path.line_h_rel(-t + 0.5 * s);
                path.line_v_rel(-t - s);
            }
            path.line_h_rel(-1.5 * t - 0.5 * s);
        }
        path.line_to(0.0, -t);
        NotchLine::new(
            m,
            Endpoint::external(0.0, -t),
            Endpoint::external(z_lid, -t),
            0.0,
            jz,
        )
        .draw(&mut path);
        dome.draw_flex(
            &mut path,
            &plan,
            x,
            self.params.skip_flex_lines,
            Point::new(z_lid, -t),
        );
        NotchLine::new(
            m,
            Endpoint::internal(z_lid + l, x + t),
            Endpoint::internal(2.0 * z_lid + l, x + t),
            0.0,
            jz,
        )
        .draw(&mut path);
        path.line_to(2.0 * z_lid + l, -t);
        NotchLine::new(
            m,
            Endpoint::internal(2.0 * z_lid + l, -t),
            Endpoint::internal(z_lid + l, -t),
            PI,
            jz,
        )
        .draw(&mut path);
        // not closed: the path ends on the band top edge, a closing line
        // would cross the band
        sheet.emit(path)
    }
}
