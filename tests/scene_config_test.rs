//! Integration tests for loading scene configs from disk and reporting
//! shaded colors.

use pretty_assertions::assert_eq;
use std::io::Write;

use radiant::error::ConfigError;
use radiant::models::SceneConfig;
use radiant::report::ColorReport;
use radiant::Color;

const SCENE: &str = r##"
exposure: 2.0
background: "#000"
lights:
  - color: "#ffffff"
    intensity: 0.25
  - color: "#ff0000"
    intensity: 0.25
surfaces:
  wall: "#ff0080"
  ceiling: "fff"
  floor: "#808080"
"##;

fn write_scene(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_scene_from_file() {
    let file = write_scene(SCENE);

    let scene = SceneConfig::load(file.path()).unwrap();

    assert_eq!(scene.exposure, 2.0);
    assert_eq!(scene.background, Color::BLACK);
    assert_eq!(scene.lights.len(), 2);
    assert_eq!(
        scene.surfaces.keys().collect::<Vec<_>>(),
        vec!["ceiling", "floor", "wall"]
    );
    assert_eq!(scene.irradiance(), Color::new(0.5, 0.25, 0.25));
}

#[test]
fn test_shade_reports() {
    let file = write_scene(SCENE);
    let scene = SceneConfig::load(file.path()).unwrap();

    let reports: Vec<String> = scene
        .shade_all()
        .into_iter()
        .map(|(name, color)| ColorReport::new(name, color).to_string())
        .collect();

    assert_eq!(
        reports,
        vec![
            "ceiling: (1.0000, 0.5000, 0.5000) -> rgba(255, 127, 127, 1) #ff7f7f".to_string(),
            "floor: (0.5020, 0.2510, 0.2510) -> rgba(128, 64, 64, 1) #804040".to_string(),
            "wall: (1.0000, 0.0000, 0.2510) -> rgba(255, 0, 64, 1) #ff0040".to_string(),
        ]
    );
}

#[test]
fn test_shade_single_surface_matches_shade_all() {
    let file = write_scene(SCENE);
    let scene = SceneConfig::load(file.path()).unwrap();

    for (name, color) in scene.shade_all() {
        assert_eq!(scene.shade(&name).unwrap(), color);
    }
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yaml");

    let err = SceneConfig::load(&path).unwrap_err();
    match err {
        ConfigError::Io { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_load_invalid_color() {
    let file = write_scene("background: \"#12\"\n");

    let err = SceneConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)));
    assert!(err.to_string().contains("bad color string: 12"), "{err}");
}
