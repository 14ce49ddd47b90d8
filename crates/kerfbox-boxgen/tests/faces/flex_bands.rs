use kerfbox_boxgen::{FlexBand, FlexFace, FlexSegment, SvgDocument};
use kerfbox_core::{MaterialContext, Point};

fn band() -> FlexBand {
    FlexBand::new(
        "Flex_Front_Right_Back",
        false,
        false,
        vec![
            FlexSegment::new(80.0, 8.0, 10.0, 8.0),
            FlexSegment::new(60.0, 8.0, 10.0, 8.0),
            FlexSegment::new(80.0, 8.0, 0.0, 8.0),
        ],
    )
}

#[test]
fn test_band_and_its_lid_share_the_length() {
    let m = MaterialContext::new(3.0, 0.1);
    let mut doc = SvgDocument::new();
    let lid = FlexFace::new(&m, band(), true, 20.0, 8.0, Point::ORIGIN).render(&mut doc);
    let side = FlexFace::new(&m, band(), false, 40.0, 8.0, Point::new(0.0, lid.max_y + 2.0))
        .render(&mut doc);
    assert_eq!(doc.labels(), vec!["Lid_Flex_Front_Right_Back", "Flex_Front_Right_Back"]);
    // only the teeth of the vertical ends may differ
    assert!((lid.width() - side.width()).abs() <= 6.5);
    assert!(side.min_y >= lid.max_y);
    assert!(side.height() > lid.height());
}

#[test]
fn test_sliding_groove_strips_follow_the_band() {
    let m = MaterialContext::new(3.0, 0.1);
    let mut doc = SvgDocument::new();
    let face = FlexFace::new(&m, band(), false, 40.0, 8.0, Point::ORIGIN);
    let bbox = face.render(&mut doc);
    let extent = face.render_side_line_notches(&bbox, &mut doc);
    let labels = doc.labels();
    assert_eq!(
        &labels[1..],
        &[
            "Flex_Front_Right_BackLidJoint1",
            "Flex_Front_Right_BackLidJoint2",
            "Flex_Front_Right_BackLidJoint3"
        ]
    );
    assert!(extent.max_x > bbox.max_x);
}
