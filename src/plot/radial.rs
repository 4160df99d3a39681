/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Radial probability density figure

use super::errors::{drawing_error, PlotError, Result};
use super::style::Typography;
use super::{prepare_output, FigureSummary};
use crate::config::RadialFigureConfig;
use crate::wavefunction::{EvalParams, RadialWavefunction};
use log::{debug, info};
use ndarray::Array1;
use plotters::prelude::*;
use std::path::Path;

/// Headroom above the tallest curve
const Y_HEADROOM: f64 = 1.05;

/// Sample P_{n,l}(r) for every configured curve on [0, r_max]
///
/// Returns the radial grid and one (label, density) pair per curve.
pub fn radial_curves(
    config: &RadialFigureConfig,
    params: &EvalParams,
) -> Result<(Array1<f64>, Vec<(String, Array1<f64>)>)> {
    let r = Array1::linspace(0.0, config.r_max, config.samples);
    let curves = config
        .curves
        .iter()
        .map(|curve| {
            let radial = RadialWavefunction::new(curve.n, curve.l, params.z, params.a0)?;
            Ok::<_, PlotError>((curve.display_label(), radial.evaluate_density(&r)))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((r, curves))
}

/// Render the radial density figure to `path`
pub fn render_radial_figure(
    config: &RadialFigureConfig,
    params: &EvalParams,
    path: &Path,
) -> Result<FigureSummary> {
    prepare_output(path)?;
    let (width_px, height_px) = config.size.pixels();
    info!(
        "Rendering {} radial curves ({}×{} px) to {}",
        config.curves.len(),
        width_px,
        height_px,
        path.display()
    );

    let (r, curves) = radial_curves(config, params)?;
    let peak = curves
        .iter()
        .flat_map(|(_, density)| density.iter().copied())
        .fold(0.0_f64, f64::max);
    let y_max = if peak > 0.0 { peak * Y_HEADROOM } else { 1.0 };
    debug!("Radial density peak {:.4}", peak);

    let typography = Typography::new(config.size.dpi);
    let root = BitMapBackend::new(path, (width_px, height_px)).into_drawing_area();
    root.fill(&WHITE).map_err(drawing_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, typography.font(14.0))
        .margin(typography.px(10.0))
        .x_label_area_size(typography.px(36.0))
        .y_label_area_size(typography.px(48.0))
        .build_cartesian_2d(0.0..config.r_max, 0.0..y_max)
        .map_err(drawing_error)?;

    chart
        .configure_mesh()
        .x_desc("r [a₀]")
        .y_desc("P_nl(r)")
        .axis_desc_style(typography.font(12.0))
        .label_style(typography.font(10.0))
        .bold_line_style(BLACK.mix(0.3))
        .light_line_style(TRANSPARENT)
        .draw()
        .map_err(drawing_error)?;

    let width = typography.px(config.line_width);
    let legend_length = typography.px(20.0) as i32;
    for (index, (label, density)) in curves.iter().enumerate() {
        let tab = colorous::CATEGORY10[index % colorous::CATEGORY10.len()];
        let color = RGBColor(tab.r, tab.g, tab.b);

        chart
            .draw_series(LineSeries::new(
                r.iter().copied().zip(density.iter().copied()),
                color.stroke_width(width),
            ))
            .map_err(drawing_error)?
            .label(label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + legend_length, y)], color.stroke_width(width))
            });
    }

    chart
        .configure_series_labels()
        .label_font(typography.font(10.0))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()
        .map_err(drawing_error)?;

    root.present().map_err(drawing_error)?;
    info!("Radial figure written to {}", path.display());

    Ok(FigureSummary::new(path, config.size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RadialCurve;
    use approx::assert_relative_eq;

    #[test]
    fn test_radial_curves_follow_config() {
        let config = RadialFigureConfig::default();
        let (r, curves) = radial_curves(&config, &EvalParams::default()).unwrap();
        assert_eq!(r.len(), 1000);
        assert_relative_eq!(r[999], 20.0);

        let labels: Vec<&str> = curves.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(labels, vec!["1s", "2s", "2p"]);

        // the 1s radial density peaks at the Bohr radius
        let (_, one_s) = &curves[0];
        let peak_index = one_s
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        assert!((r[peak_index] - 1.0).abs() < 0.03);
    }

    #[test]
    fn test_invalid_curve_is_rejected() {
        let config = RadialFigureConfig {
            curves: vec![RadialCurve::new(2, 2)],
            ..RadialFigureConfig::default()
        };
        assert!(matches!(
            radial_curves(&config, &EvalParams::default()),
            Err(PlotError::Wavefunction(_))
        ));
    }
}
