use kerfbox_core::units::parse_length;
use kerfbox_core::{LengthUnit, UnitError};

#[test]
fn test_label_round_trip() {
    for unit in [
        LengthUnit::Mm,
        LengthUnit::Cm,
        LengthUnit::M,
        LengthUnit::In,
        LengthUnit::Pt,
        LengthUnit::Px,
        LengthUnit::Pc,
        LengthUnit::Ft,
        LengthUnit::Yd,
    ] {
        assert_eq!(unit.label().parse::<LengthUnit>().unwrap(), unit);
        assert!((unit.from_mm(unit.to_mm(3.5)) - 3.5).abs() < 1e-9);
    }
}

#[test]
fn test_box_in_inches() {
    let x = parse_length("4 1/2", LengthUnit::In).unwrap();
    assert!((x - 4.5).abs() < 1e-9);
    assert!((LengthUnit::In.to_mm(x) - 114.3).abs() < 1e-9);
}

#[test]
fn test_bad_input() {
    assert!(matches!(
        "furlong".parse::<LengthUnit>(),
        Err(UnitError::UnknownUnit(_))
    ));
    assert!(matches!(
        parse_length("1/0", LengthUnit::In),
        Err(UnitError::InvalidLength { .. })
    ));
    assert!(parse_length("abc", LengthUnit::Mm).is_err());
}
