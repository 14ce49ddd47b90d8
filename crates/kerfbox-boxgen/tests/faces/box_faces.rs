use kerfbox_boxgen::{
    place_hinges, BoxFace, CornerPoint, EdgeJoints, FaceCorners, FaceStyle, SvgDocument,
};
use kerfbox_core::{MaterialContext, Point};

fn material() -> MaterialContext {
    MaterialContext::new(3.0, 0.1)
}

fn back_face(origin: Point) -> BoxFace {
    let m = material();
    BoxFace::new(
        &m,
        "Back",
        FaceCorners::rectangle(&m, 100.0, 40.0, false, false),
        EdgeJoints::new(0.0, 8.0, 8.0, 8.0),
        origin,
    )
}

#[test]
fn test_page_origin_translates_the_part() {
    let mut doc = SvgDocument::new();
    let at_zero = back_face(Point::ORIGIN).render(FaceStyle::Plain, &mut doc);
    let moved = back_face(Point::new(120.0, 50.0)).render(FaceStyle::Plain, &mut doc);
    assert!((moved.min_x - at_zero.min_x - 120.0).abs() < 1e-9);
    assert!((moved.min_y - at_zero.min_y - 50.0).abs() < 1e-9);
    assert!((moved.width() - at_zero.width()).abs() < 1e-9);
    assert_eq!(doc.labels(), vec!["Back", "Back"]);
}

#[test]
fn test_every_back_style_emits_one_closed_path() {
    let m = material();
    let hinges = place_hinges(&m, 1, 94.0).unwrap();
    let styles = [
        FaceStyle::Plain,
        FaceStyle::SlidingLidBack,
        FaceStyle::WoodHingeBack,
        FaceStyle::WoodHingeLidBack,
        FaceStyle::SteelHingeBack(&hinges),
        FaceStyle::SteelHingeLidBack(&hinges),
        FaceStyle::HingeCutout(&hinges),
    ];
    for style in styles {
        let mut doc = SvgDocument::new();
        let bbox = back_face(Point::ORIGIN).render(style, &mut doc);
        assert_eq!(doc.len(), 1, "{:?}", style);
        assert!(doc.paths()[0].data.ends_with(" z"), "{:?}", style);
        assert!(bbox.width() >= 100.0 - 1e-9, "{:?}", style);
    }
}

#[test]
fn test_wood_hinge_lid_sides_are_mirrored() {
    let m = material();
    let side = |right: bool| {
        let mut doc = SvgDocument::new();
        let face = BoxFace::new(
            &m,
            if right { "Lid_Right" } else { "Lid_Left" },
            FaceCorners::rectangle(&m, 60.0, 20.0, true, false),
            EdgeJoints::new(8.0, 8.0, 0.0, 8.0),
            Point::ORIGIN,
        );
        face.render(FaceStyle::WoodHingeLidSide { right }, &mut doc);
        doc
    };
    let left = side(false);
    let right = side(true);
    assert!(left.find("Lid_Left").is_some());
    assert!(right.find("Lid_Right").is_some());
    assert_ne!(left.paths()[0].data, right.paths()[0].data);
}

#[test]
fn test_wood_hinge_corner_moves_the_origin() {
    let m = material();
    let mut corners = FaceCorners::rectangle(&m, 60.0, 40.0, true, false);
    corners.top_right = CornerPoint::wood_hinge(&m, Point::new(60.0, 0.0), 0.0, true, false);
    let face = BoxFace::new(
        &m,
        "Right",
        corners,
        EdgeJoints::new(0.0, 8.0, 8.0, 8.0),
        Point::ORIGIN,
    );
    // knuckle height plus the external top edge
    assert_eq!(face.origin(), Point::new(3.0, 12.0));
}
