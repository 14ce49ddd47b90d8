use kerfbox_boxgen::{BoxParams, GenericBox, LidStyle};

fn grid(n_slot_x: usize, n_slot_y: usize) -> BoxParams {
    BoxParams {
        x: 120.0,
        y: 90.0,
        z: 50.0,
        lid: LidStyle::Without,
        n_slot_x,
        n_slot_y,
        ..BoxParams::default()
    }
}

#[test]
fn test_grid_walls() {
    let doc = GenericBox::new(grid(3, 2)).unwrap().generate().unwrap();
    let labels = doc.labels();
    for label in [
        "Int_Back",
        "Int_Front",
        "Int_Left",
        "Int_Right",
        "COL_WALL_1",
        "COL_WALL_2",
        "ROW_WALL_1",
    ] {
        assert!(labels.contains(&label), "missing {} in {:?}", label, labels);
    }
    assert!(!labels.contains(&"COL_WALL_3"));
    assert!(!labels.contains(&"ROW_WALL_2"));
}

#[test]
fn test_single_slot_has_no_walls() {
    let doc = GenericBox::new(grid(1, 1)).unwrap().generate().unwrap();
    assert!(!doc.labels().iter().any(|l| l.starts_with("Int_") || l.contains("WALL")));
}

#[test]
fn test_dividers_below_every_side() {
    let doc = GenericBox::new(grid(3, 2)).unwrap().generate().unwrap();
    let front = doc.find("Front").unwrap().bbox;
    let column = doc.find("COL_WALL_1").unwrap().bbox;
    let row = doc.find("ROW_WALL_1").unwrap().bbox;
    assert!(column.min_y >= front.max_y);
    assert!(row.min_y >= column.max_y);
}

#[test]
fn test_bottom_holes_per_divider_tab() {
    let generator = GenericBox::new(grid(3, 1)).unwrap();
    let (x_slot, _) = generator.slot_sizes();
    let columns = kerfbox_boxgen::calc_notch_pos(3.0, 1, generator.slot_sizes().1);
    let doc = generator.generate().unwrap();
    let bottom = &doc.find("Bottom").unwrap().data;
    // one contour plus one hole per column notch and inner column boundary
    assert_eq!(bottom.matches(" M ").count(), 1 + 2 * columns.len());
    assert!(x_slot >= 18.0);
}
