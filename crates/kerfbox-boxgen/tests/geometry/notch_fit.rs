use kerfbox_boxgen::notch_fit::{MAX_ITERATIONS, TOLERANCE};
use kerfbox_boxgen::{fit_notch_size, FreePath};
use kerfbox_core::Point;
use proptest::prelude::*;

proptest! {
    #[test]
    fn straight_lengths_fit_at_first_try(length in 20.0f64..500.0, target in 5.0f64..20.0) {
        let fit = fit_notch_size(length, target, |size, count| length - (count - 1) as f64 * size);
        prop_assert!(fit.converged);
        prop_assert_eq!(fit.iterations, 1);
        prop_assert!((fit.notch_size * fit.notch_count as f64 - length).abs() < 1e-6);
    }

    #[test]
    fn search_is_always_bounded(length in 20.0f64..500.0, offset in 0.5f64..30.0) {
        let fit = fit_notch_size(length, 10.0, |size, _| size + offset);
        prop_assert!(fit.iterations <= MAX_ITERATIONS);
        prop_assert!(fit.notch_size.is_finite());
    }
}

#[test]
fn test_square_path_notches() {
    let path = FreePath::new(
        vec![
            Point::new(0.0, 0.0),
            Point::new(60.0, 0.0),
            Point::new(60.0, 60.0),
            Point::new(0.0, 60.0),
        ],
        0.0,
    )
    .unwrap();
    assert!((path.length() - 180.0).abs() < 1e-9);
    let notches = path.fit_notches(10.0);
    assert!(notches.fit.error() <= TOLERANCE || !notches.fit.converged);
    assert_eq!(notches.points.len(), notches.fit.notch_count);
    assert_eq!(notches.points[0], Point::ORIGIN);
}
