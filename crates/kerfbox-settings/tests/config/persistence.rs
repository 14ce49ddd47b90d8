use kerfbox_boxgen::{GenericBox, LidStyle};
use kerfbox_core::LengthUnit;
use kerfbox_settings::{BoxConfig, SettingsError};
use tempfile::TempDir;

fn sample() -> BoxConfig {
    BoxConfig {
        unit: LengthUnit::Cm,
        x: 12.0,
        y: 9.0,
        z: 5.0,
        thickness: 0.3,
        burn: 0.01,
        lid_type: LidStyle::SteelHinge,
        n_slot_x: 3,
        ..BoxConfig::default()
    }
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("box.json");
    sample().save_to_file(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"lid_type\": \"SteelHinge\""));
    assert!(content.contains("\"unit\": \"cm\""));
    assert_eq!(BoxConfig::load_from_file(&path).unwrap(), sample());
}

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("box.toml");
    sample().save_to_file(&path).unwrap();
    assert_eq!(BoxConfig::load_from_file(&path).unwrap(), sample());
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("box.yaml");
    let err = sample().save_to_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedFormat(_)));
    assert!(!path.exists());
}

#[test]
fn test_invalid_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("box.json");
    std::fs::write(&path, "{ \"x\": 0.0 }").unwrap();
    assert!(matches!(
        BoxConfig::load_from_file(&path),
        Err(SettingsError::InvalidSetting { .. })
    ));

    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        BoxConfig::load_from_file(&path),
        Err(SettingsError::JsonError(_))
    ));

    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        BoxConfig::load_from_file(&missing),
        Err(SettingsError::IoError(_))
    ));
}

#[test]
fn test_loaded_config_builds_a_box() {
    let params = sample().to_params().unwrap();
    assert!((params.x - 120.0).abs() < 1e-9);
    let generator = GenericBox::new(params).unwrap();
    let doc = generator.generate().unwrap();
    assert!(doc.find("COL_WALL_2").is_some());
    assert!(doc.find("Lid_Back").is_some());
}
