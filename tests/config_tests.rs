/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use hydrogen_orbitals::config::{AppConfig, ConfigError, DensityRowConfig};
use hydrogen_orbitals::grid::Plane;
use hydrogen_orbitals::plot::Colormap;
use hydrogen_orbitals::wavefunction::OrbitalKind;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::tempdir;

/// Test helper to write a configuration file into a temporary directory
fn create_config_file(content: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("orbitals.json");
    let mut file = File::create(&file_path).unwrap();
    writeln!(file, "{}", content).unwrap();
    (dir, file_path)
}

#[test]
fn test_partial_file_keeps_defaults() {
    let (_dir, path) = create_config_file(
        r#"{
            "params": { "z": 2.0 },
            "output_dir": "figures",
            "radial": { "r_max": 10.0, "curves": [ { "n": 3, "l": 2 } ] }
        }"#,
    );

    let config = AppConfig::from_file(&path).unwrap();
    assert_eq!(config.params.z, 2.0);
    assert_eq!(config.params.a0, 1.0);
    assert_eq!(config.params.origin_epsilon, 1e-12);
    assert_eq!(config.radial.r_max, 10.0);
    assert_eq!(config.radial.samples, 1000);
    assert_eq!(config.radial.curves.len(), 1);
    assert_eq!(config.radial.curves[0].display_label(), "3d");
    assert_eq!(config.density, AppConfig::default().density);
    assert_eq!(
        config.density_path(),
        PathBuf::from("figures").join("3d_density_comparison.png")
    );
}

#[test]
fn test_custom_density_row() {
    let (_dir, path) = create_config_file(
        r#"{
            "density": {
                "rows": [
                    {
                        "orbital": { "type": "hydrogenic", "n": 3, "l": 2, "m": 1, "basis": "real" },
                        "half_width": 20.0,
                        "samples": 64,
                        "colormap": "inferno",
                        "contour_levels": [0.1, 0.5],
                        "contour_planes": ["xz", "yz"]
                    }
                ]
            }
        }"#,
    );

    let config = AppConfig::from_file(&path).unwrap();
    let row = &config.density.rows[0];
    assert!(matches!(
        row.orbital,
        OrbitalKind::Hydrogenic { n: 3, l: 2, m: 1, .. }
    ));
    assert_eq!(row.colormap, Colormap::Inferno);
    assert_eq!(row.color_range, [0.0, 1.0]);
    assert_eq!(row.contour_planes, vec![Plane::Xz, Plane::Yz]);
    assert!(row.colorbar);
    assert!(row.tag.is_none());
}

#[test]
fn test_json_round_trip_of_defaults() {
    let config = AppConfig::default();
    let json = config.to_json().unwrap();
    assert_eq!(AppConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_invalid_configurations() {
    let cases = [
        r#"{ "params": { "z": 0.0 } }"#,
        r#"{ "params": { "a0": -1.0 } }"#,
        r#"{ "radial": { "samples": 1 } }"#,
        r#"{ "radial": { "curves": [] } }"#,
        r#"{ "radial": { "curves": [ { "n": 2, "l": 2 } ] } }"#,
        r#"{ "density": { "rows": [] } }"#,
        r#"{ "density": { "size": { "width_in": 1.0, "height_in": 1.0, "dpi": 0 } } }"#,
    ];
    for case in cases {
        assert!(
            matches!(AppConfig::from_json(case), Err(ConfigError::Invalid(_))),
            "accepted {}",
            case
        );
    }

    assert!(matches!(
        AppConfig::from_json("{ not json"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        AppConfig::from_file("/nonexistent/orbitals.json"),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_invalid_row_is_reported_by_index() {
    let mut config = AppConfig::default();
    config.density.rows.push(DensityRowConfig {
        color_range: [0.5, 0.5],
        ..DensityRowConfig::one_s()
    });

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("density row 2"));
}
