/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use hydrogen_orbitals::config::{
    DensityFigureConfig, DensityRowConfig, FigureSize, RadialFigureConfig,
};
use hydrogen_orbitals::plot::{
    radial_curves, render_density_figure, render_radial_figure, ColorScale, Colormap, PlotError,
};
use hydrogen_orbitals::wavefunction::EvalParams;
use tempfile::tempdir;

fn small_density_config() -> DensityFigureConfig {
    DensityFigureConfig {
        size: FigureSize::new(6.0, 4.0, 60),
        rows: vec![
            DensityRowConfig {
                samples: 24,
                ..DensityRowConfig::one_s()
            },
            DensityRowConfig {
                samples: 30,
                ..DensityRowConfig::two_p_zero()
            },
        ],
        ..DensityFigureConfig::default()
    }
}

#[test]
#[ignore = "needs system fonts"]
fn test_render_density_figure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("density.png");

    let summary =
        render_density_figure(&small_density_config(), &EvalParams::default(), &path).unwrap();
    assert_eq!(summary.path, path);
    assert_eq!(summary.size.pixels(), (360, 240));
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
#[ignore = "needs system fonts"]
fn test_render_radial_figure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("radial.png");
    let config = RadialFigureConfig {
        samples: 200,
        ..RadialFigureConfig::default()
    };

    let summary = render_radial_figure(&config, &EvalParams::default(), &path).unwrap();
    assert!(summary.to_string().contains("1000×600 px"));
    assert!(path.exists());
}

#[test]
fn test_radial_curves_scale_with_charge() {
    let config = RadialFigureConfig::default();
    let (r, hydrogen) = radial_curves(&config, &EvalParams::default()).unwrap();
    let (_, helium_ion) = radial_curves(&config, &EvalParams::with_charge(2.0)).unwrap();

    // P_1s peaks at a0 / Z
    let peak_radius = |density: &ndarray::Array1<f64>| {
        let (index, _) = density
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .unwrap();
        r[index]
    };
    assert!((peak_radius(&hydrogen[0].1) - 1.0).abs() < 0.03);
    assert!((peak_radius(&helium_ion[0].1) - 0.5).abs() < 0.03);
}

#[test]
fn test_color_scale_requires_increasing_range() {
    assert!(ColorScale::new(0.0, 1.0, Colormap::Viridis).is_ok());
    assert!(matches!(
        ColorScale::new(0.3, -0.3, Colormap::Plasma),
        Err(PlotError::InvalidScale(_))
    ));
}
