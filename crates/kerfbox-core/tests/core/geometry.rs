use kerfbox_core::{BoundingBox, Point};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Point> {
    (-500.0f64..500.0, -500.0f64..500.0).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn union_contains_both_boxes(a in point(), b in point(), c in point(), d in point()) {
        let mut first = BoundingBox::at(a);
        first.include(b);
        let mut second = BoundingBox::at(c);
        second.include(d);
        let union = first.union(&second);
        for p in [a, b, c, d] {
            prop_assert!(union.contains(p, 1e-9));
        }
        prop_assert!(union.width() >= first.width());
        prop_assert!(union.height() >= second.height());
    }

    #[test]
    fn polar_offset_keeps_distance(p in point(), angle in -7.0f64..7.0, length in 0.0f64..100.0) {
        let q = p.offset_polar(angle, length);
        prop_assert!((p.distance_to(&q) - length).abs() < 1e-9);
    }
}

#[test]
fn test_midpoint() {
    let m = Point::new(0.0, 0.0).midpoint(&Point::new(10.0, -4.0));
    assert_eq!(m, Point::new(5.0, -2.0));
    assert_eq!(Point::from((1.0, 2.0)) + Point::new(1.0, 1.0), Point::new(2.0, 3.0));
}
