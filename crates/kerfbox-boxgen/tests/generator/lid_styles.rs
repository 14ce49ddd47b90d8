use kerfbox_boxgen::{BoxParams, CornerRadii, GenericBox, LidStyle};

fn labels_for(lid: LidStyle) -> Vec<String> {
    let params = BoxParams {
        lid,
        ..BoxParams::default()
    };
    let doc = GenericBox::new(params).unwrap().generate().unwrap();
    doc.labels().into_iter().map(str::to_string).collect()
}

fn has(labels: &[String], label: &str) -> bool {
    labels.iter().any(|l| l == label)
}

#[test]
fn test_simple_lid_parts() {
    let labels = labels_for(LidStyle::Simple);
    for label in ["Lid_Top", "Lid", "Bottom", "Front", "Back", "Left", "Right"] {
        assert!(has(&labels, label), "missing {} in {:?}", label, labels);
    }
}

#[test]
fn test_open_box_has_no_lid() {
    let labels = labels_for(LidStyle::Without);
    assert!(!labels.iter().any(|l| l.starts_with("Lid")), "{:?}", labels);
    assert!(has(&labels, "Bottom"));
    assert!(has(&labels, "Front"));
}

#[test]
fn test_sliding_lid_parts() {
    let labels = labels_for(LidStyle::Sliding);
    for label in [
        "Lid_Joints",
        "Lid_Top",
        "LeftLidJoint",
        "RightLidJoint",
        "Int_Left",
        "Int_Right",
    ] {
        assert!(has(&labels, label), "missing {} in {:?}", label, labels);
    }
}

#[test]
fn test_wood_hinge_lid_parts() {
    let labels = labels_for(LidStyle::WoodHinge);
    for label in ["Lid_Top", "Lid_Front", "Lid_Back", "Lid_Left", "Lid_Right"] {
        assert!(has(&labels, label), "missing {} in {:?}", label, labels);
    }
    assert!(!labels.iter().any(|l| l.starts_with("HingeElt")));
}

#[test]
fn test_steel_hinge_knuckles() {
    let params = BoxParams {
        lid: LidStyle::SteelHinge,
        ..BoxParams::default()
    };
    let generator = GenericBox::new(params).unwrap();
    let doc = generator.generate().unwrap();
    let knuckles = doc
        .labels()
        .iter()
        .filter(|l| l.starts_with("HingeElt_"))
        .count();
    assert_eq!(knuckles, 5 * generator.hinges().len());
    assert!(doc.find("Lid_Back").is_some());
}

#[test]
fn test_coffin_lid_parts() {
    let labels = labels_for(LidStyle::Coffin);
    for label in ["Lid_Left", "Lid_Right", "Coffin_Top", "Back"] {
        assert!(has(&labels, label), "missing {} in {:?}", label, labels);
    }
    assert!(!has(&labels, "Lid_Top"));
    assert!(!has(&labels, "Lid_Front"));
}

#[test]
fn test_hinged_lid_rejects_rounded_back_before_drawing() {
    let params = BoxParams {
        lid: LidStyle::WoodHinge,
        straight_corners: false,
        radii: CornerRadii::new(5.0, 0.0, 0.0, 0.0),
        ..BoxParams::default()
    };
    let err = GenericBox::new(params).unwrap_err();
    assert!(err.is_parameter_error());
    assert!(err.to_string().contains("rounded corners on back"));
}

#[test]
fn test_svg_output_lists_every_part() {
    let doc = GenericBox::new(BoxParams::default())
        .unwrap()
        .generate()
        .unwrap();
    let svg = doc.to_svg();
    assert!(svg.starts_with("<?xml"));
    for label in doc.labels() {
        assert!(svg.contains(&format!("id=\"{}\"", label)), "{}", label);
    }
}
