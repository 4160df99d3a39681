/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Orthogonal-section density figure
//!
//! Each configured row evaluates one orbital on its own grid, normalizes the
//! density by the maximum of the whole 3D field and draws the XY, XZ and YZ
//! sections through the grid midpoint side by side.

use super::colormap::ColorScale;
use super::errors::{drawing_error, Result};
use super::panel::{draw_colorbar, draw_slice_panel, SlicePanel};
use super::style::Typography;
use super::{prepare_output, FigureSummary};
use crate::config::{DensityFigureConfig, DensityRowConfig};
use crate::grid::{contour_lines, evaluate_density, Plane};
use crate::wavefunction::{EvalParams, Orbital};
use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Share of the first panel's width kept for the image when a colorbar is attached
const IMAGE_WIDTH_PERCENT: u32 = 82;

const COLORBAR_LABEL: &str = "|ψ|² (normalized)";

/// Render the density comparison figure to `path`
pub fn render_density_figure(
    config: &DensityFigureConfig,
    params: &EvalParams,
    path: &Path,
) -> Result<FigureSummary> {
    prepare_output(path)?;
    let (width_px, height_px) = config.size.pixels();
    info!(
        "Rendering {}-row density figure ({}×{} px) to {}",
        config.rows.len(),
        width_px,
        height_px,
        path.display()
    );

    let typography = Typography::new(config.size.dpi);
    let root = BitMapBackend::new(path, (width_px, height_px)).into_drawing_area();
    root.fill(&WHITE).map_err(drawing_error)?;
    let body = root
        .titled(&config.title, typography.font(14.0))
        .map_err(drawing_error)?;

    let columns = Plane::ALL.len();
    let panels = body.split_evenly((config.rows.len(), columns));
    for (row, areas) in config.rows.iter().zip(panels.chunks(columns)) {
        draw_density_row(row, params, areas, &typography)?;
    }

    root.present().map_err(drawing_error)?;
    info!("Density figure written to {}", path.display());

    Ok(FigureSummary::new(path, config.size))
}

fn draw_density_row<DB: DrawingBackend>(
    row: &DensityRowConfig,
    params: &EvalParams,
    areas: &[DrawingArea<DB, Shift>],
    typography: &Typography,
) -> Result<()> {
    let label = Orbital::new(row.orbital, *params)?.label();
    let scale = ColorScale::new(row.color_range[0], row.color_range[1], row.colormap)?;
    let field = evaluate_density(row.orbital, *params, row.half_width, row.samples)?;

    for (column, (plane, area)) in Plane::ALL.iter().zip(areas).enumerate() {
        let slice = field.slice(*plane);
        let contours = if row.contour_planes.contains(plane) {
            contour_lines(&slice, &row.contour_levels)
        } else {
            Vec::new()
        };

        let panel = SlicePanel {
            title: format!("{}: {}", label, slice.caption()),
            scale,
            contours: &contours,
            tag: if column == 0 { row.tag.as_deref() } else { None },
        };

        if column == 0 && row.colorbar {
            let (width, _) = area.dim_in_pixel();
            let (image, bar) = area.split_horizontally(width * IMAGE_WIDTH_PERCENT / 100);
            draw_slice_panel(&image, &slice, &panel, typography)?;
            draw_colorbar(&bar, &scale, COLORBAR_LABEL, typography)?;
        } else {
            draw_slice_panel(area, &slice, &panel, typography)?;
        }
    }

    Ok(())
}
