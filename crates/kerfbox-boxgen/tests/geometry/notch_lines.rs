use kerfbox_boxgen::{Endpoint, NotchLine, PathBuilder};
use kerfbox_core::{MaterialContext, Point};
use proptest::prelude::*;

proptest! {
    #[test]
    fn joint_count_parity_follows_end_status(
        length in 10.0f64..300.0,
        joint in 2.0f64..20.0,
        start_internal: bool,
        end_internal: bool,
    ) {
        let m = MaterialContext::new(3.0, 0.0);
        let line = NotchLine::new(
            &m,
            Endpoint::new(0.0, 0.0, start_internal),
            Endpoint::new(length, 0.0, end_internal),
            0.0,
            joint,
        );
        let count = line.joint_count();
        if start_internal == end_internal {
            prop_assert!(count == 0 || count % 2 == 1);
        } else {
            prop_assert_eq!(count % 2, 0);
        }
        prop_assert!(line.joint_span() <= length + 1e-9);
    }

    #[test]
    fn teeth_stay_within_one_thickness(
        length in 10.0f64..300.0,
        joint in 2.0f64..20.0,
        thickness in 1.0f64..10.0,
        start_internal: bool,
        end_internal: bool,
    ) {
        let m = MaterialContext::new(thickness, 0.0);
        let line = NotchLine::new(
            &m,
            Endpoint::new(0.0, 0.0, start_internal),
            Endpoint::new(length, 0.0, end_internal),
            0.0,
            joint,
        );
        let mut path = PathBuilder::new(Point::ORIGIN, None);
        path.move_to(0.0, 0.0);
        line.draw(&mut path);
        let bbox = path.bounding_box();
        prop_assert!(bbox.height() <= thickness + 1e-9);
        prop_assert!(bbox.min_x >= -1e-9);
        prop_assert!(bbox.max_x <= length + 1e-9);
        let end = path.local_cursor();
        prop_assert!((end.x - length).abs() < 1e-9);
        prop_assert!(end.y.abs() < 1e-9);
    }
}

#[test]
fn test_joints_are_centered() {
    let m = MaterialContext::new(3.0, 0.0);
    let line = NotchLine::new(
        &m,
        Endpoint::internal(0.0, 0.0),
        Endpoint::internal(0.0, 70.0),
        std::f64::consts::FRAC_PI_2,
        10.0,
    );
    assert_eq!(line.joint_count(), 5);
    let margin_start = line.start_joint().y - line.start().y;
    let margin_end = line.end().y - line.end_joint().y;
    assert!((margin_start - margin_end).abs() < 1e-9);
    assert!((margin_start - 10.0).abs() < 1e-9);
}
