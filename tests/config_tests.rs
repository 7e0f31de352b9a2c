use swatchkit::color::{BlendMode, ColorFormat};
use swatchkit::config::{Config, PROJECT_CONFIG_FILENAME};

use std::fs;
use tempfile::TempDir;

#[test]
fn test_project_config_merges_over_personal() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let personal = temp_dir.path().join("config.toml");
    fs::write(
        &personal,
        "format = \"rgb\"\nblend_mode = \"logarithmic\"\nblend_amount = 30.0\n",
    )
    .expect("Failed to write personal config");

    let mut project = Config::default();
    project
        .update(Some(ColorFormat::Hsl), None, None, Some(90.0))
        .expect("Failed to update project config");
    project
        .save_as_project_config(temp_dir.path())
        .expect("Failed to save project config");

    let config = Config::load_from(&personal, &temp_dir.path().join(PROJECT_CONFIG_FILENAME))
        .expect("Failed to load config");

    assert_eq!(config.format(), Some(ColorFormat::Hsl));
    assert_eq!(config.blend_mode(), BlendMode::Logarithmic);
    assert!((config.blend_amount() - 30.0).abs() < f64::EPSILON);
    assert!((config.rotation() - 90.0).abs() < f64::EPSILON);
}

#[test]
fn test_config_drives_operations() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let project = temp_dir.path().join(PROJECT_CONFIG_FILENAME);
    fs::write(&project, "rotation = 120.0\nformat = \"rgb\"\n")
        .expect("Failed to write project config");

    let config = Config::load_from(&temp_dir.path().join("none.toml"), &project)
        .expect("Failed to load config");

    let spun = swatchkit::spin("#ff0000", config.rotation()).expect("spin failed");
    let converted = swatchkit::convert(&spun, config.format().unwrap_or_default())
        .expect("convert failed");
    assert_eq!(converted, "rgb(0, 255, 0)");
}
