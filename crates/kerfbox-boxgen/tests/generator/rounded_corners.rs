use kerfbox_boxgen::{BoxParams, CornerRadii, GenericBox, LidStyle};

fn labels_for(radii: CornerRadii, lid: LidStyle) -> Vec<String> {
    let params = BoxParams {
        x: 80.0,
        y: 80.0,
        z: 40.0,
        lid,
        straight_corners: false,
        radii,
        ..BoxParams::default()
    };
    let doc = GenericBox::new(params).unwrap().generate().unwrap();
    doc.labels().into_iter().map(str::to_string).collect()
}

fn flex_labels(labels: &[String]) -> Vec<&str> {
    labels
        .iter()
        .map(String::as_str)
        .filter(|l| l.starts_with("Flex_"))
        .collect()
}

#[test]
fn test_all_rounded_single_band() {
    let labels = labels_for(CornerRadii::uniform(10.0), LidStyle::Simple);
    assert_eq!(flex_labels(&labels), vec!["Flex_All"]);
    for side in ["Front", "Back", "Left", "Right"] {
        assert!(!labels.iter().any(|l| l == side));
    }
}

#[test]
fn test_rounded_front_merges_three_sides() {
    let labels = labels_for(CornerRadii::new(0.0, 0.0, 10.0, 10.0), LidStyle::Simple);
    assert_eq!(flex_labels(&labels), vec!["Flex_Left_Front_Right"]);
    assert!(labels.iter().any(|l| l == "Back"));
    assert!(!labels.iter().any(|l| l == "Front"));
}

#[test]
fn test_one_rounded_corner() {
    let labels = labels_for(CornerRadii::new(0.0, 0.0, 10.0, 0.0), LidStyle::Simple);
    assert_eq!(flex_labels(&labels), vec!["Flex_Front_Right"]);
    for side in ["Back", "Left"] {
        assert!(labels.iter().any(|l| l == side), "missing {}", side);
    }

    let labels = labels_for(CornerRadii::new(10.0, 0.0, 0.0, 0.0), LidStyle::Simple);
    assert_eq!(flex_labels(&labels), vec!["Flex_Back_Left"]);
}

#[test]
fn test_three_rounded_corners() {
    let labels = labels_for(CornerRadii::new(10.0, 10.0, 0.0, 10.0), LidStyle::Simple);
    assert_eq!(flex_labels(&labels), vec!["Flex_Right_Back_Left_Front"]);
}

#[test]
fn test_opposite_rounded_corners_make_two_bands() {
    let labels = labels_for(CornerRadii::new(10.0, 0.0, 10.0, 0.0), LidStyle::Simple);
    let mut bands = flex_labels(&labels);
    bands.sort_unstable();
    assert_eq!(bands, vec!["Flex_Back_Left", "Flex_Front_Right"]);
}

#[test]
fn test_wood_hinge_with_rounded_front() {
    let labels = labels_for(CornerRadii::new(0.0, 0.0, 10.0, 10.0), LidStyle::WoodHinge);
    assert_eq!(
        flex_labels(&labels),
        vec!["Flex_Left_Front_Right"]
    );
    assert!(labels.iter().any(|l| l == "Lid_Flex_Left_Front_Right"));
    assert!(labels.iter().any(|l| l == "Lid_Back"));
}
