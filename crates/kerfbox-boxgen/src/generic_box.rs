//! Generic box generator
//!
//! Builds every part of a box with finger joints: top and bottom plates,
//! the four sides (flat faces or flex bands around rounded corners), the
//! lid parts of the chosen lid style, the divider walls and the steel hinge
//! knuckles. All parameters are checked in [`GenericBox::new`], so a box
//! that passes construction always draws completely.

mod coffin;
mod layout;
mod sides;
mod types;
mod walls;

pub use layout::PageLayout;
pub use types::{BoxParams, CornerRadii, JointSizes, LidStyle, NotchPos};

use crate::box_face::{draw_hole, BoxFace, EdgeJoints, FaceCorners, FaceStyle};
use crate::corner::CornerPoint;
use crate::document::SvgDocument;
use crate::error::{BoxGenError, BoxGenResult};
use crate::flex_face::clip_layout;
use crate::hinge::{draw_knuckle, place_hinges, Hinge, KNUCKLES_PER_HINGE};
use crate::path_builder::PathBuilder;
use kerfbox_core::material::LAYOUT_GAP;
use kerfbox_core::{BoundingBox, MaterialContext, ParameterError, Point};
use tracing::{debug, info};

/// Smallest slot, and smallest straight run of a side, that still holds joints (mm)
pub const MIN_SLOT_SIZE: f64 = 18.0;

/// Height given up by divider walls so that a sliding lid moves freely (mm)
const SLIDING_WALL_PLAY: f64 = 0.2;

/// Joint sizes of the top edges of the four sides
#[derive(Debug, Clone, Copy, PartialEq)]
struct TopJoints {
    front: f64,
    back: f64,
    left: f64,
    right: f64,
}

/// Output document and placement state of one generation run
struct Sheet {
    document: SvgDocument,
    layout: PageLayout,
}

impl Sheet {
    fn new() -> Self {
        Self {
            document: SvgDocument::new(),
            layout: PageLayout::new(),
        }
    }

    /// Record a drawn part in the layout
    fn place(&mut self, bbox: BoundingBox) -> BoundingBox {
        self.layout.add(&bbox);
        bbox
    }

    fn draw_face(&mut self, face: BoxFace, style: FaceStyle<'_>) -> BoundingBox {
        let bbox = face.render(style, &mut self.document);
        self.place(bbox)
    }

    fn emit(&mut self, path: PathBuilder) -> BoundingBox {
        let bbox = path.emit(&mut self.document);
        self.place(bbox)
    }
}

/// Base finger size for an edge of `length`
fn basic_joint_size(length: f64) -> f64 {
    if length <= 100.0 {
        5.0
    } else {
        5.0 * (length / 100.0).powf(0.8)
    }
}

/// Pick finger joint sizes from the box size, trying to use the same size on
/// every axis while keeping at least three joints on each edge.
pub fn compute_joint_size(
    x_box: f64,
    y_box: f64,
    z_box: f64,
    radii: &CornerRadii,
) -> BoxGenResult<JointSizes> {
    let x = (x_box - radii.back_left - radii.back_right)
        .min(x_box - radii.front_right - radii.front_left);
    if x < MIN_SLOT_SIZE {
        return Err(ParameterError::InvalidDimensions(
            "box length too small, should be at least 18mm + round radius".to_string(),
        )
        .into());
    }
    let y = (y_box - radii.back_left - radii.front_left)
        .min(y_box - radii.front_right - radii.back_right);
    if y < MIN_SLOT_SIZE {
        return Err(ParameterError::InvalidDimensions(
            "box depth too small, should be at least 18mm + round radius".to_string(),
        )
        .into());
    }

    let mut size_x = basic_joint_size(x);
    let mut size_y = basic_joint_size(y);
    if size_x > size_y && y >= 3.0 * size_x + 1.0 {
        size_y = size_x;
    }
    if size_y > size_x && x >= 3.0 * size_y + 1.0 {
        size_x = size_y;
    }
    let largest = if size_x > size_y { size_x } else { size_y };
    let size_z = if z_box > 3.0 * largest + 1.0 {
        largest
    } else {
        (z_box - 1.0) / 3.0
    };
    Ok(JointSizes {
        x: size_x,
        y: size_y,
        z: size_z,
    })
}

/// Holes of the bottom plate receiving the tabs of one divider wall,
/// relative to the internal side of the box.
pub fn calc_notch_pos(thickness: f64, n_slot: usize, slot_size: f64) -> Vec<NotchPos> {
    let (per_slot, notch_size) = if slot_size < 25.0 {
        (1, slot_size / 3.0)
    } else {
        let unit = if slot_size < 80.0 { 5.0 } else { 10.0 };
        let mut notch_number = slot_size / unit;
        if notch_number % 2.0 == 0.0 {
            notch_number -= 1.0;
        }
        (
            (notch_number / 2.0).floor() as usize,
            slot_size / notch_number,
        )
    };
    let mut list = Vec::with_capacity(n_slot * per_slot);
    for slot in 0..n_slot {
        for i in 0..per_slot {
            list.push(NotchPos {
                start: slot as f64 * (slot_size + thickness)
                    + notch_size
                    + 2.0 * i as f64 * notch_size,
                size: notch_size,
                slot,
            });
        }
    }
    list
}

/// A validated box, ready to be drawn
#[derive(Debug, Clone)]
pub struct GenericBox {
    params: BoxParams,
    material: MaterialContext,
    radii: CornerRadii,
    /// Height of the sides once the lid style is accounted for
    z: f64,
    z_lid: f64,
    /// Height of the divider walls
    z_walls: f64,
    joints: JointSizes,
    top: TopJoints,
    x_slot: f64,
    y_slot: f64,
    walls_front_back: bool,
    walls_left_right: bool,
    /// Lid faces are drawn above the matching sides
    has_lid: bool,
    hinges: Vec<Hinge>,
}

impl GenericBox {
    /// Validate `params` and resolve joint sizes, wall heights and hinges.
    pub fn new(params: BoxParams) -> BoxGenResult<Self> {
        Self::check_inputs(&params)?;
        let t = params.thickness;
        let material = MaterialContext::new(t, params.burn);
        let radii = params.effective_radii();
        let max_radius = radii.max();

        let x_slot = (params.x - (1.0 + params.n_slot_x as f64) * t) / params.n_slot_x as f64;
        let y_slot = (params.y - (1.0 + params.n_slot_y as f64) * t) / params.n_slot_y as f64;
        if x_slot < MIN_SLOT_SIZE || y_slot < MIN_SLOT_SIZE {
            return Err(ParameterError::InvalidDimensions(format!(
                "each slot should be at least 18mm large, here x_slot_size={:.3} y_slot_size={:.3}",
                x_slot, y_slot
            ))
            .into());
        }
        if x_slot < max_radius || y_slot < max_radius {
            return Err(ParameterError::InvalidDimensions(format!(
                "slot size should be greater than rounded corner radius, here x_slot_size={:.3} y_slot_size={:.3}",
                x_slot, y_slot
            ))
            .into());
        }

        let joints = if params.auto_size_joints {
            compute_joint_size(params.x, params.y, params.z, &radii)?
        } else {
            JointSizes {
                x: params.x_joint,
                y: params.y_joint,
                z: params.z_joint,
            }
        };
        let mut top = TopJoints {
            front: joints.x,
            back: joints.x,
            left: joints.y,
            right: joints.y,
        };
        debug!(
            "joints x={:.3} y={:.3} z={:.3}, slots x={}x{:.3} y={}x{:.3}",
            joints.x, joints.y, joints.z, params.n_slot_x, x_slot, params.n_slot_y, y_slot
        );

        let mut z = params.z;
        let mut z_lid = params.z_lid;
        let mut z_walls = params.z;
        let walls_front_back = params.n_slot_x > 1;
        let mut walls_left_right = params.n_slot_y > 1;
        let mut has_lid = false;

        match params.lid {
            LidStyle::Sliding => {
                if radii.has_rounded_back() {
                    return Err(ParameterError::Incompatible(
                        "Sliding lid is incompatible with rounded corners on back".to_string(),
                    )
                    .into());
                }
                // the side walls carry the grooves
                walls_left_right = true;
                z += t;
                z_walls -= SLIDING_WALL_PLAY;
                top.front = 0.0;
            }
            LidStyle::Without => {
                top = TopJoints {
                    front: 0.0,
                    back: 0.0,
                    left: 0.0,
                    right: 0.0,
                };
                z -= t;
            }
            LidStyle::WoodHinge | LidStyle::SteelHinge | LidStyle::Coffin => {
                if radii.has_rounded_back() {
                    return Err(ParameterError::Incompatible(
                        "real lid option is incompatible with rounded corners on back".to_string(),
                    )
                    .into());
                }
                top = TopJoints {
                    front: 0.0,
                    back: 0.0,
                    left: 0.0,
                    right: 0.0,
                };
                z -= t;
                z_lid -= t;
                if params.lid == LidStyle::Coffin {
                    if radii.has_rounded_front() {
                        return Err(ParameterError::Incompatible(
                            "coffin lid option is incompatible with rounded corners".to_string(),
                        )
                        .into());
                    }
                    if params.z_dome_lid <= 0.0 {
                        return Err(ParameterError::invalid(
                            "z_dome_lid",
                            "coffin dome height should be positive",
                        )
                        .into());
                    }
                } else {
                    has_lid = true;
                }
            }
            LidStyle::Simple => {}
        }

        let hinges = if params.lid.uses_steel_hinges() {
            place_hinges(&material, params.n_slot_x, x_slot)?
        } else {
            Vec::new()
        };

        // a band wrapping the whole box is closed by clips
        let all_rounded = radii.back_left > 0.0
            && radii.back_right > 0.0
            && radii.front_right > 0.0
            && radii.front_left > 0.0;
        if all_rounded && clip_layout(z, t).2 == 0 {
            return Err(BoxGenError::geometry("box is not high enough, no room for clips"));
        }

        Ok(Self {
            params,
            material,
            radii,
            z,
            z_lid,
            z_walls,
            joints,
            top,
            x_slot,
            y_slot,
            walls_front_back,
            walls_left_right,
            has_lid,
            hinges,
        })
    }

    /// Checks independent of the box geometry
    fn check_inputs(params: &BoxParams) -> BoxGenResult<()> {
        if !(1.0..=10.0).contains(&params.thickness) {
            return Err(
                ParameterError::out_of_range("thickness", params.thickness, 1.0, 10.0).into(),
            );
        }
        for (name, value) in [("x", params.x), ("y", params.y), ("z", params.z)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::invalid(name, "should be a positive length").into());
            }
        }
        if !params.burn.is_finite() || params.burn < 0.0 {
            return Err(ParameterError::invalid("burn", "should not be negative").into());
        }
        if params.n_slot_x == 0 {
            return Err(ParameterError::invalid("n_slot_x", "should be at least 1").into());
        }
        if params.n_slot_y == 0 {
            return Err(ParameterError::invalid("n_slot_y", "should be at least 1").into());
        }
        Ok(())
    }

    pub fn params(&self) -> &BoxParams {
        &self.params
    }

    pub fn material(&self) -> &MaterialContext {
        &self.material
    }

    pub fn joints(&self) -> JointSizes {
        self.joints
    }

    /// Width of the compartments along x and y
    pub fn slot_sizes(&self) -> (f64, f64) {
        (self.x_slot, self.y_slot)
    }

    pub fn hinges(&self) -> &[Hinge] {
        &self.hinges
    }

    /// Height of the sides, once the lid style is accounted for
    pub fn side_height(&self) -> f64 {
        self.z
    }

    /// Height of the divider walls
    pub fn wall_height(&self) -> f64 {
        self.z_walls
    }

    /// Draw every part of the box.
    pub fn generate(&self) -> BoxGenResult<SvgDocument> {
        info!(
            "generating {}x{}x{} box, lid {}, {}x{} slots",
            self.params.x,
            self.params.y,
            self.params.z,
            self.params.lid,
            self.params.n_slot_x,
            self.params.n_slot_y
        );
        let mut sheet = Sheet::new();
        self.build_top(&mut sheet);
        let (columns, rows) = self.build_bottom(&mut sheet);
        self.build_sides(&mut sheet)?;
        if self.params.lid == LidStyle::Coffin {
            self.build_coffin_lid(&mut sheet);
        }
        self.build_internal_walls(&mut sheet);
        self.build_dividers(&mut sheet, &columns, &rows);
        if self.params.lid.uses_steel_hinges() {
            self.build_hinge_knuckles(&mut sheet);
        }
        info!("box done, {} parts", sheet.document.len());
        Ok(sheet.document)
    }

    fn corner(
        &self,
        x: f64,
        y: f64,
        radius: f64,
        x_internal: bool,
        y_internal: bool,
    ) -> CornerPoint {
        CornerPoint::new(&self.material, Point::new(x, y), radius, x_internal, y_internal)
    }

    fn build_top(&self, sheet: &mut Sheet) {
        let m = &self.material;
        let t = m.thickness;
        let (x, y) = (self.params.x, self.params.y);
        let r = &self.radii;
        let j = &self.joints;

        match self.params.lid {
            LidStyle::Without | LidStyle::Coffin => {}
            LidStyle::Sliding => {
                // finger strip glued under the lid back edge
                let strip = BoxFace::new(
                    m,
                    "Lid_Joints",
                    FaceCorners {
                        top_left: self.corner(0.0, 0.0, 0.0, true, true),
                        top_right: self.corner(x + 2.0 * t, 0.0, 0.0, true, true),
                        bottom_right: self
                            .corner(x + 2.0 * t, t, 0.0, true, true)
                            .shift_start_joint(-t, 0.0),
                        bottom_left: self.corner(0.0, t, 0.0, true, true).shift_end_joint(t, 0.0),
                    },
                    EdgeJoints::new(0.0, 0.0, j.x, 0.0),
                    Point::ORIGIN,
                );
                sheet.draw_face(strip, FaceStyle::Plain);

                let lid = BoxFace::new(
                    m,
                    "Lid_Top",
                    FaceCorners {
                        top_left: self.corner(0.0, 0.0, r.back_left, true, false),
                        top_right: self.corner(x, 0.0, r.back_right, true, false),
                        bottom_right: self.corner(x, y, r.front_right, true, true),
                        bottom_left: self.corner(0.0, y, r.front_left, true, true),
                    },
                    EdgeJoints::new(j.x, 0.0, 0.0, 0.0),
                    Point::new(t, sheet.layout.bottom()),
                );
                sheet.draw_face(lid, FaceStyle::Plain);
            }
            LidStyle::Simple | LidStyle::WoodHinge | LidStyle::SteelHinge => {
                let radii = [r.back_left, r.back_right, r.front_right, r.front_left];
                let top = BoxFace::new(
                    m,
                    "Lid_Top",
                    FaceCorners::rounded(m, x, y, radii, true, true),
                    EdgeJoints::new(j.x, j.y, j.x, j.y),
                    Point::ORIGIN,
                );
                let mut path = top.new_path();
                top.trace(FaceStyle::Plain, &mut path);
                if self.params.lid == LidStyle::Simple {
                    // the frame opening, in the same path
                    let opening = BoxFace::new(
                        m,
                        "Lid_Int",
                        FaceCorners {
                            top_left: self.corner(t, t, r.back_left - t, true, true),
                            top_right: self.corner(x - t, t, r.back_right - t, true, true),
                            bottom_right: self.corner(x - t, y - t, r.front_right - t, true, true),
                            bottom_left: self.corner(t, y - t, r.front_left - t, true, true),
                        },
                        EdgeJoints::default(),
                        Point::ORIGIN,
                    );
                    opening.trace(FaceStyle::Plain, &mut path);
                }
                path.close();
                sheet.emit(path);

                if self.params.lid == LidStyle::Simple {
                    let lid = BoxFace::new(
                        m,
                        "Lid",
                        FaceCorners::rounded(m, x, y, radii, false, false),
                        EdgeJoints::default(),
                        Point::new(sheet.layout.right() + t + LAYOUT_GAP, 0.0),
                    );
                    sheet.draw_face(lid, FaceStyle::Plain);
                }
            }
        }
    }

    /// Bottom plate with the holes of the divider walls. Returns the hole
    /// positions under the column walls and under the row walls.
    fn build_bottom(&self, sheet: &mut Sheet) -> (Vec<NotchPos>, Vec<NotchPos>) {
        let m = &self.material;
        let t = m.thickness;
        let r = &self.radii;
        let j = &self.joints;
        // seen from outside, left and right are swapped
        let bottom = BoxFace::new(
            m,
            "Bottom",
            FaceCorners::rounded(
                m,
                self.params.x,
                self.params.y,
                [r.back_right, r.back_left, r.front_left, r.front_right],
                true,
                true,
            ),
            EdgeJoints::new(j.x, j.y, j.x, j.y),
            Point::new(sheet.layout.right(), 0.0),
        );
        let mut path = bottom.new_path();
        bottom.trace(FaceStyle::Plain, &mut path);

        let columns = calc_notch_pos(t, self.params.n_slot_y, self.y_slot);
        debug!("column notches: {:?}", columns);
        for i in 1..self.params.n_slot_x {
            for notch in &columns {
                draw_hole(
                    &mut path,
                    i as f64 * (self.x_slot + t),
                    notch.start + t,
                    t,
                    notch.size,
                    m.burn,
                );
            }
        }
        let rows = calc_notch_pos(t, self.params.n_slot_x, self.x_slot);
        debug!("row notches: {:?}", rows);
        for i in 1..self.params.n_slot_y {
            for notch in &rows {
                draw_hole(
                    &mut path,
                    notch.start + t,
                    i as f64 * (self.y_slot + t),
                    notch.size,
                    t,
                    m.burn,
                );
            }
        }
        path.close();
        sheet.emit(path);
        (columns, rows)
    }

    /// Five knuckles per steel hinge, in a row under everything else
    fn build_hinge_knuckles(&self, sheet: &mut Sheet) {
        let t = self.material.thickness;
        let y = sheet.layout.bottom() + LAYOUT_GAP;
        let mut x = LAYOUT_GAP;
        for (n, _) in self.hinges.iter().enumerate() {
            for i in 0..KNUCKLES_PER_HINGE {
                let bbox = draw_knuckle(
                    &self.material,
                    n * KNUCKLES_PER_HINGE + i,
                    Point::new(x, y),
                    &mut sheet.document,
                );
                sheet.place(bbox);
                x += 3.5 * t + LAYOUT_GAP;
            }
            x += 3.0;
        }
    }
}
