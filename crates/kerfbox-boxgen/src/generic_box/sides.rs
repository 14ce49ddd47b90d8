//! The four sides and the lid parts drawn above them.
//!
//! A side between two square vertical edges is a flat face. Rounded edges
//! merge the adjoining sides into one flex band, which gives 16 cases
//! depending on which of the four edges are rounded.

use super::{GenericBox, LidStyle, Sheet};
use crate::box_face::{BoxFace, EdgeJoints, FaceCorners, FaceStyle};
use crate::corner::CornerPoint;
use crate::error::BoxGenResult;
use crate::flex_face::{FlexBand, FlexFace, FlexSegment};
use kerfbox_core::material::LAYOUT_GAP;
use kerfbox_core::{BoundingBox, Point};
use tracing::debug;

impl GenericBox {
    pub(super) fn build_sides(&self, sheet: &mut Sheet) -> BoxGenResult<()> {
        let m = &self.material;
        let t = m.thickness;
        let (x, y, z, z_lid) = (self.params.x, self.params.y, self.z, self.z_lid);
        let r = &self.radii;
        let j = &self.joints;
        let top = &self.top;
        let lid = self.params.lid;
        let wood = lid == LidStyle::WoodHinge;
        let sliding = lid == LidStyle::Sliding;
        let seg = FlexSegment::new;
        // sliding lid sides leave room above them for the groove strip
        let groove_drop = if sliding { 2.0 * t + LAYOUT_GAP } else { 0.0 };

        let ypos = sheet.layout.bottom();
        let mut yposface = ypos;
        let mut xpos = 0.0;
        let mut bands = Vec::new();

        if r.front_left == 0.0 && r.front_right == 0.0 {
            if self.has_lid {
                let face = BoxFace::new(
                    m,
                    "Lid_Front",
                    FaceCorners::rectangle(m, x, z_lid, false, false),
                    EdgeJoints::new(j.x, j.z, top.front, j.z),
                    Point::new(xpos, ypos),
                );
                sheet.draw_face(face, FaceStyle::Plain);
                yposface = sheet.layout.bottom();
            }
            let face = BoxFace::new(
                m,
                "Front",
                FaceCorners::rectangle(m, x, z, false, false),
                EdgeJoints::new(top.front, j.z, j.x, j.z),
                Point::new(xpos, yposface),
            );
            xpos = sheet.draw_face(face, FaceStyle::Plain).max_x + LAYOUT_GAP;
        } else if r.front_left == 0.0 {
            bands.push(if r.back_right == 0.0 {
                FlexBand::new(
                    "Flex_Front_Right",
                    false,
                    true,
                    vec![
                        seg(x, top.front, r.front_right, j.x),
                        seg(y, top.right, 0.0, j.y).with_wood_hinge(wood),
                    ],
                )
            } else if r.back_left == 0.0 {
                FlexBand::new(
                    "Flex_Front_Right_Back",
                    false,
                    false,
                    vec![
                        seg(x, top.front, r.front_right, j.x),
                        seg(y, top.right, r.back_right, j.y),
                        seg(x, top.back, 0.0, j.x),
                    ],
                )
            } else {
                FlexBand::new(
                    "Flex_Front_Right_Back_Left",
                    false,
                    true,
                    vec![
                        seg(x, top.front, r.front_right, j.x),
                        seg(y, top.right, r.back_right, j.y),
                        seg(x, top.back, r.back_left, j.x),
                        seg(y, top.left, 0.0, j.y),
                    ],
                )
            });
        }

        if r.back_left == 0.0 && r.back_right == 0.0 {
            if self.has_lid {
                let face = BoxFace::new(
                    m,
                    "Lid_Back",
                    FaceCorners::rectangle(m, x, z_lid, false, false),
                    EdgeJoints::new(j.x, j.z, top.back, j.z),
                    Point::new(xpos, ypos),
                );
                let style = if wood {
                    FaceStyle::WoodHingeLidBack
                } else {
                    FaceStyle::SteelHingeLidBack(&self.hinges)
                };
                sheet.draw_face(face, style);
                if yposface == ypos {
                    yposface = sheet.layout.bottom();
                }
            }
            let square = FaceCorners::rectangle(m, x, z, false, false);
            let (corners, joints, style) = match lid {
                LidStyle::Sliding => (
                    FaceCorners {
                        top_left: self.corner(0.0, 0.0, 0.0, false, true),
                        top_right: self.corner(x, 0.0, 0.0, false, true),
                        bottom_right: self.corner(x, z, 0.0, false, false),
                        bottom_left: self.corner(0.0, z, 0.0, false, false),
                    },
                    EdgeJoints::new(top.back, j.z, j.x, j.z),
                    FaceStyle::SlidingLidBack,
                ),
                LidStyle::WoodHinge => (
                    square,
                    EdgeJoints::new(0.0, j.z, j.x, j.z),
                    FaceStyle::WoodHingeBack,
                ),
                LidStyle::SteelHinge | LidStyle::Coffin => (
                    square,
                    EdgeJoints::new(0.0, j.z, j.x, j.z),
                    FaceStyle::SteelHingeBack(&self.hinges),
                ),
                LidStyle::Without | LidStyle::Simple => (
                    square,
                    EdgeJoints::new(top.back, j.z, j.x, j.z),
                    FaceStyle::Plain,
                ),
            };
            let face = BoxFace::new(m, "Back", corners, joints, Point::new(xpos, yposface));
            xpos = sheet.draw_face(face, style).max_x + LAYOUT_GAP;
        } else if r.back_right == 0.0 {
            bands.push(if r.front_left == 0.0 {
                FlexBand::new(
                    "Flex_Back_Left",
                    false,
                    true,
                    vec![
                        seg(x, top.back, r.back_left, j.x),
                        seg(y, top.left, 0.0, j.y),
                    ],
                )
            } else if r.front_right == 0.0 {
                FlexBand::new(
                    "Flex_Back_Left_Front",
                    false,
                    false,
                    vec![
                        seg(x, top.back, r.back_left, j.x),
                        seg(y, top.left, r.front_left, j.y),
                        seg(x, top.front, 0.0, j.x),
                    ],
                )
            } else {
                FlexBand::new(
                    "Flex_Back_Left_Front_Right",
                    false,
                    true,
                    vec![
                        seg(x, top.back, r.back_left, j.x),
                        seg(y, top.left, r.front_left, j.y),
                        seg(x, top.front, r.front_right, j.x),
                        seg(y, top.right, 0.0, j.y),
                    ],
                )
            });
        }

        if r.back_left == 0.0 && r.front_left == 0.0 {
            if self.has_lid {
                let face = BoxFace::new(
                    m,
                    "Lid_Left",
                    FaceCorners::rectangle(m, y, z_lid, true, false),
                    EdgeJoints::new(j.y, j.z, top.left, j.z),
                    Point::new(xpos, ypos),
                );
                let style = if wood {
                    FaceStyle::WoodHingeLidSide { right: false }
                } else {
                    FaceStyle::Plain
                };
                sheet.draw_face(face, style);
            }
            let top_left = if wood {
                CornerPoint::wood_hinge(m, Point::ORIGIN, 0.0, true, false)
            } else {
                self.corner(0.0, 0.0, 0.0, true, false)
            };
            let face = BoxFace::new(
                m,
                "Left",
                FaceCorners {
                    top_left,
                    top_right: self.corner(y, 0.0, 0.0, true, false),
                    bottom_right: self.corner(y, z, 0.0, true, false),
                    bottom_left: self.corner(0.0, z, 0.0, true, false),
                },
                EdgeJoints::new(top.left, j.z, j.y, j.z),
                Point::new(xpos, yposface + groove_drop),
            );
            if sliding {
                let strip =
                    face.render_side_line_notches(Point::new(xpos, yposface), &mut sheet.document);
                sheet.place(strip);
            }
            xpos = sheet.draw_face(face, FaceStyle::Plain).max_x + LAYOUT_GAP;
        } else if r.back_left == 0.0 {
            bands.push(if r.front_right == 0.0 {
                FlexBand::new(
                    "Flex_Left_Front",
                    true,
                    false,
                    vec![
                        seg(y, top.left, r.front_left, j.y).with_wood_hinge(wood),
                        seg(x, top.front, 0.0, j.x),
                    ],
                )
            } else if r.back_right == 0.0 {
                FlexBand::new(
                    "Flex_Left_Front_Right",
                    true,
                    true,
                    vec![
                        seg(y, top.left, r.front_left, j.y).with_wood_hinge(wood),
                        seg(x, top.front, r.front_right, j.x),
                        seg(y, top.right, 0.0, j.y).with_wood_hinge(wood),
                    ],
                )
            } else {
                FlexBand::new(
                    "Flex_Left_Front_Right_Back",
                    true,
                    false,
                    vec![
                        seg(y, top.left, r.front_left, j.y),
                        seg(x, top.front, r.front_right, j.x),
                        seg(y, top.right, r.back_right, j.y),
                        seg(x, top.back, 0.0, j.x),
                    ],
                )
            });
        }

        if r.back_right == 0.0 && r.front_right == 0.0 {
            if self.has_lid {
                let face = BoxFace::new(
                    m,
                    "Lid_Right",
                    FaceCorners::rectangle(m, y, z_lid, true, false),
                    EdgeJoints::new(j.y, j.z, top.right, j.z),
                    Point::new(xpos, ypos),
                );
                let style = if wood {
                    FaceStyle::WoodHingeLidSide { right: true }
                } else {
                    FaceStyle::Plain
                };
                sheet.draw_face(face, style);
            }
            let top_right = if wood {
                CornerPoint::wood_hinge(m, Point::new(y, 0.0), 0.0, true, false)
            } else {
                self.corner(y, 0.0, 0.0, true, false)
            };
            let face = BoxFace::new(
                m,
                "Right",
                FaceCorners {
                    top_left: self.corner(0.0, 0.0, 0.0, true, false),
                    top_right,
                    bottom_right: self.corner(y, z, 0.0, true, false),
                    bottom_left: self.corner(0.0, z, 0.0, true, false),
                },
                EdgeJoints::new(top.right, j.z, j.y, j.z),
                Point::new(xpos, yposface + groove_drop),
            );
            if sliding {
                let strip =
                    face.render_side_line_notches(Point::new(xpos, yposface), &mut sheet.document);
                sheet.place(strip);
            }
            xpos = sheet.draw_face(face, FaceStyle::Plain).max_x + LAYOUT_GAP;
        } else if r.front_right == 0.0 {
            bands.push(if r.back_left == 0.0 {
                FlexBand::new(
                    "Flex_Right_Back",
                    true,
                    false,
                    vec![
                        seg(y, top.right, r.back_right, j.y),
                        seg(x, top.back, 0.0, j.x),
                    ],
                )
            } else if r.front_left == 0.0 {
                FlexBand::new(
                    "Flex_Right_Back_Left",
                    true,
                    true,
                    vec![
                        seg(y, top.right, r.back_right, j.y),
                        seg(x, top.back, r.back_left, j.x),
                        seg(y, top.left, 0.0, j.y),
                    ],
                )
            } else {
                FlexBand::new(
                    "Flex_Right_Back_Left_Front",
                    true,
                    true,
                    vec![
                        seg(y, top.right, r.back_right, j.y),
                        seg(x, top.back, r.back_left, j.x),
                        seg(y, top.left, r.front_left, j.y),
                        seg(x, top.front, 0.0, j.x),
                    ],
                )
            });
        }

        let all_rounded =
            r.back_left > 0.0 && r.back_right > 0.0 && r.front_right > 0.0 && r.front_left > 0.0;
        if all_rounded {
            let band = FlexBand::new(
                "Flex_All",
                true,
                true,
                vec![
                    seg(x, top.back, r.back_right, j.x),
                    seg(y, top.right, r.front_right, j.y),
                    seg(x, top.front, r.front_left, j.x),
                    seg(y, top.left, r.back_left, j.y),
                    seg(x, top.back, r.back_right, j.x),
                ],
            );
            let face = FlexFace::new(m, band, false, z, j.z, Point::new(xpos, ypos));
            let bbox = face.render_all_rounded(&mut sheet.document)?;
            sheet.place(bbox);
            return Ok(());
        }

        debug!(
            "flex bands: {:?}",
            bands.iter().map(|b| b.name.as_str()).collect::<Vec<_>>()
        );
        let mut last: Option<(FlexFace, BoundingBox)> = None;
        for band in bands {
            if self.has_lid {
                let lid_face =
                    FlexFace::new(m, band.clone(), true, z_lid, j.z, Point::new(xpos, ypos));
                let bbox = lid_face.render(&mut sheet.document);
                sheet.place(bbox);
                if yposface == ypos {
                    yposface = bbox.max_y + LAYOUT_GAP;
                }
            }
            let face = FlexFace::new(m, band, false, z, j.z, Point::new(xpos, yposface));
            let bbox = face.render(&mut sheet.document);
            sheet.place(bbox);
            xpos = bbox.max_x + LAYOUT_GAP;
            last = Some((face, bbox));
        }
        // a sliding lid allows at most one band, the one holding the front
        if let (true, Some((face, bbox))) = (sliding, last) {
            let strips = face.render_side_line_notches(&bbox, &mut sheet.document);
            sheet.place(strips);
        }
        Ok(())
    }
}
