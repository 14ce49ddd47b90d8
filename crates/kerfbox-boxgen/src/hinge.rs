//! Steel hinge placement and the knuckle parts cut for each hinge.

use crate::document::SvgDocument;
use crate::error::{BoxGenError, BoxGenResult};
use crate::path_builder::PathBuilder;
use kerfbox_core::material::{BEZIER_CIRCLE_K, STEEL_HINGE_AXIS_RADIUS};
use kerfbox_core::{BoundingBox, MaterialContext, ParameterError, Point};
use tracing::debug;

/// Knuckles cut for every hinge
pub const KNUCKLES_PER_HINGE: usize = 5;

/// One steel hinge along the back edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hinge {
    /// Index of the slot (column) holding the hinge
    pub slot: usize,
    /// Position inside the slot
    pub offset: f64,
    /// Position from the internal back left corner
    pub position: f64,
}

/// Place the hinges along the back of a box with `n_slot` columns of
/// `slot_size` each.
///
/// A single narrow column gets one centered hinge. Otherwise two hinges are
/// placed in the first and last column, or in the second and the one before
/// last when there are more than six columns.
pub fn place_hinges(
    material: &MaterialContext,
    n_slot: usize,
    slot_size: f64,
) -> BoxGenResult<Vec<Hinge>> {
    let t = material.thickness;
    let width = material.steel_hinge_width();
    if width > slot_size - 3.0 {
        return Err(ParameterError::invalid(
            "x_slot_size",
            format!(
                "no space for hinge within slots, slots should be at least {:.3}mm wide",
                width + 3.0
            ),
        )
        .into());
    }
    if n_slot == 0 {
        return Err(BoxGenError::geometry("hinges need at least one slot"));
    }

    let last = n_slot - 1;
    let mirrored = |slot: usize, offset: f64| Hinge {
        slot,
        offset: slot_size - offset,
        position: slot as f64 * (slot_size + t) + slot_size - offset - width,
    };

    let hinges = if n_slot == 1 && slot_size < 2.0 * width + 30.0 {
        let offset = (slot_size - width) / 2.0;
        vec![Hinge {
            slot: 0,
            offset,
            position: offset,
        }]
    } else if n_slot <= 2 {
        // about one third into the slot, unless that is too close to the wall
        let mut offset = (slot_size / 3.0 - width / 2.0).max(2.0);
        if offset < 8.0 {
            offset = (slot_size / 2.5 - width / 2.0).max(2.0);
        }
        vec![
            Hinge {
                slot: 0,
                offset,
                position: offset,
            },
            mirrored(last, offset),
        ]
    } else if n_slot <= 6 {
        let offset = (slot_size - width) / 2.0;
        vec![
            Hinge {
                slot: 0,
                offset,
                position: offset,
            },
            mirrored(last, offset),
        ]
    } else {
        let offset = (slot_size - width) / 2.0;
        let second = n_slot - 2;
        vec![
            Hinge {
                slot: 1,
                offset,
                position: slot_size + t + offset,
            },
            Hinge {
                slot: second,
                offset,
                position: second as f64 * (slot_size + t) + slot_size - offset - width,
            },
        ]
    };
    debug!("hinge width={:.3} hinges={:?}", width, hinges);
    Ok(hinges)
}

/// Draw one knuckle of a steel hinge with its axis hole. `origin` is the
/// page position of the part's upper left corner.
pub fn draw_knuckle(
    material: &MaterialContext,
    index: usize,
    origin: Point,
    document: &mut SvgDocument,
) -> BoundingBox {
    let t = material.thickness;
    let k = BEZIER_CIRCLE_K;
    let mut path = PathBuilder::labelled(
        Point::new(-(origin.x + 2.0 * t), -origin.y),
        format!("HingeElt_{}", index),
    );
    path.move_to(0.0, 0.0);
    path.line_v_rel(t);
    path.line_h_rel(-t);
    path.line_v_rel(t);
    path.line_h_rel(t);
    path.line_v_rel(t);
    // outer half circle of radius 1.5t, then a 2t quarter back to the stem
    let r = 1.5 * t;
    path.bezier_to(
        Point::new(r * k, 3.0 * t),
        Point::new(r, 3.0 * t + r * k),
        Point::new(r, 4.5 * t),
    );
    path.bezier_to(
        Point::new(r, 4.5 * t + r * k),
        Point::new(r * (1.0 - k), 6.0 * t),
        Point::new(0.0, 6.0 * t),
    );
    let r = 2.0 * t;
    path.bezier_to(
        Point::new(-r * k, 6.0 * t),
        Point::new(-r, 6.0 * t - r * k),
        Point::new(-r, 4.0 * t),
    );
    path.line_to(-r, t);
    path.bezier_to(
        Point::new(-r, t * (1.0 - k)),
        Point::new(-t * (1.0 + k), 0.0),
        Point::new(-t, 0.0),
    );
    path.line_to(0.0, 0.0);
    path.circle(0.0, 4.5 * t, STEEL_HINGE_AXIS_RADIUS);
    path.close();
    path.emit(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_narrow_slot_gets_one_centered_hinge() {
        let m = MaterialContext::new(3.0, 0.1);
        let hinges = place_hinges(&m, 1, 40.0).unwrap();
        assert_eq!(hinges.len(), 1);
        let width = m.steel_hinge_width();
        assert!((hinges[0].position - (40.0 - width) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_two_slots_are_mirrored() {
        let m = MaterialContext::new(3.0, 0.1);
        let hinges = place_hinges(&m, 2, 50.0).unwrap();
        assert_eq!(hinges.len(), 2);
        assert_eq!(hinges[0].slot, 0);
        assert_eq!(hinges[1].slot, 1);
        let width = m.steel_hinge_width();
        // both hinges sit at the same distance from their outer wall
        let box_inner = 2.0 * 50.0 + 3.0;
        let left_gap = hinges[0].position;
        let right_gap = box_inner - (hinges[1].position + width);
        assert!((left_gap - right_gap).abs() < 1e-9);
    }

    #[test]
    fn test_many_slots_use_inner_columns() {
        let m = MaterialContext::new(3.0, 0.1);
        let hinges = place_hinges(&m, 8, 30.0).unwrap();
        assert_eq!(hinges[0].slot, 1);
        assert_eq!(hinges[1].slot, 6);
        assert!(hinges[0].position > 30.0);
    }

    #[test]
    fn test_slot_too_narrow_for_hinge() {
        let m = MaterialContext::new(3.0, 0.1);
        let err = place_hinges(&m, 2, 18.0).unwrap_err();
        assert!(err.is_parameter_error());
        assert!(err.to_string().contains("no space for hinge"));
    }

    #[test]
    fn test_knuckle_encloses_axis_hole() {
        let m = MaterialContext::new(3.0, 0.1);
        let mut doc = SvgDocument::new();
        let bbox = draw_knuckle(&m, 0, Point::new(10.0, 20.0), &mut doc);
        assert_eq!(doc.labels(), vec!["HingeElt_0"]);
        // stem spans 6t vertically from the origin row
        assert!((bbox.min_y - 20.0).abs() < 1e-9);
        assert!((bbox.max_y - 38.0).abs() < 1e-9);
        assert!((bbox.min_x - 10.0).abs() < 1e-9);
    }
}
