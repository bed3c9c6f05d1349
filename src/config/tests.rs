use std::io::Write;

use super::{load_chart_settings, ChartSettings, ConfigError};

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let settings =
        load_chart_settings(dir.path().join("charts.toml")).expect("defaults expected");

    let defaults = ChartSettings::default();
    assert_eq!(settings.width_px, defaults.width_px);
    assert_eq!(settings.height_px, defaults.height_px);
    assert_eq!(settings.crop_padding_px, defaults.crop_padding_px);
}

#[test]
fn loads_settings_from_toml_with_partial_overrides() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("charts.toml");
    let mut file = std::fs::File::create(&path).expect("config file should be created");
    writeln!(file, "[chart]\nwidth_px = 1200").expect("config should be written");

    let settings = load_chart_settings(&path).expect("config should load");
    assert_eq!(settings.width_px, 1200);
    assert_eq!(settings.height_px, ChartSettings::default().height_px);
}

#[test]
fn rejects_out_of_range_dimensions() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("charts.toml");
    std::fs::write(&path, "[chart]\nwidth_px = 10\n").expect("config should be written");

    let error = load_chart_settings(&path).err().expect("validation should fail");
    assert!(matches!(error, ConfigError::Validation(_)));
    assert!(error.to_string().contains("chart.width_px"));
}

#[test]
fn rejects_malformed_toml() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("charts.toml");
    std::fs::write(&path, "[chart\nwidth_px = ").expect("config should be written");

    let error = load_chart_settings(&path).err().expect("parse should fail");
    assert!(matches!(error, ConfigError::Parse { .. }));
}
