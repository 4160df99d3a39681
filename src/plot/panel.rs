/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Heatmap panels for 2D sections, with contour overlays and colorbars

use super::colormap::ColorScale;
use super::errors::{drawing_error, Result};
use super::style::Typography;
use crate::grid::{ContourLine, Slice2D};
use plotters::coord::Shift;
use plotters::prelude::*;

/// Number of color bands in a colorbar
const COLORBAR_STEPS: usize = 256;

/// What to draw on top of a section image
pub(crate) struct SlicePanel<'a> {
    pub title: String,
    pub scale: ColorScale,
    pub contours: &'a [ContourLine],
    /// Bold letter in the upper-left corner
    pub tag: Option<&'a str>,
}

/// Draw `slice` as a color-mapped image filling `area`
pub(crate) fn draw_slice_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    slice: &Slice2D,
    panel: &SlicePanel<'_>,
    typography: &Typography,
) -> Result<()> {
    let ((h0, h1), (v0, v1)) = slice.extent();
    let (h_name, v_name, _) = slice.plane.axis_names();

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, typography.font(12.0))
        .margin(typography.px(6.0))
        .x_label_area_size(typography.px(28.0))
        .y_label_area_size(typography.px(32.0))
        .build_cartesian_2d(h0..h1, v0..v1)
        .map_err(drawing_error)?;

    let h = &slice.horizontal;
    let v = &slice.vertical;
    let dh = half_step(h0, h1, h.len());
    let dv = half_step(v0, v1, v.len());
    let scale = panel.scale;

    // each sample becomes a cell centred on its coordinate, clipped to the extent
    chart
        .draw_series(slice.values.indexed_iter().map(|((i, j), &value)| {
            Rectangle::new(
                [
                    ((h[i] - dh).max(h0), (v[j] - dv).max(v0)),
                    ((h[i] + dh).min(h1), (v[j] + dv).min(v1)),
                ],
                scale.color(value).filled(),
            )
        }))
        .map_err(drawing_error)?;

    chart
        .configure_mesh()
        .x_desc(format!("{} [a₀]", h_name))
        .y_desc(format!("{} [a₀]", v_name))
        .axis_desc_style(typography.font(11.0))
        .label_style(typography.font(9.0))
        .bold_line_style(BLACK.mix(0.3))
        .light_line_style(TRANSPARENT)
        .x_labels(7)
        .y_labels(7)
        .draw()
        .map_err(drawing_error)?;

    let contour_style = WHITE.mix(0.5).stroke_width(typography.px(0.5));
    for line in panel.contours {
        chart
            .draw_series(
                line.segments
                    .iter()
                    .map(|segment| PathElement::new(vec![segment[0], segment[1]], contour_style)),
            )
            .map_err(drawing_error)?;
    }

    if let Some(tag) = panel.tag {
        let anchor = (h0 + 0.05 * (h1 - h0), v1 - 0.05 * (v1 - v0));
        chart
            .draw_series(std::iter::once(Text::new(
                tag.to_string(),
                anchor,
                typography.bold(16.0).color(&WHITE),
            )))
            .map_err(drawing_error)?;
    }

    Ok(())
}

/// Draw a vertical colorbar for `scale` filling `area`
pub(crate) fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    scale: &ColorScale,
    label: &str,
    typography: &Typography,
) -> Result<()> {
    let (min, max) = (scale.min(), scale.max());

    // top margin lines the bar up with the neighbouring panel below its caption
    let mut chart = ChartBuilder::on(area)
        .margin_top(typography.px(6.0) + 2 * typography.px(12.0))
        .margin_bottom(typography.px(6.0))
        .x_label_area_size(typography.px(28.0))
        .right_y_label_area_size(typography.px(44.0))
        .build_cartesian_2d(0.0..1.0, min..max)
        .map_err(drawing_error)?
        .set_secondary_coord(0.0..1.0, min..max);

    chart
        .configure_mesh()
        .disable_x_axis()
        .disable_y_axis()
        .disable_x_mesh()
        .disable_y_mesh()
        .draw()
        .map_err(drawing_error)?;

    chart
        .configure_secondary_axes()
        .y_desc(label)
        .axis_desc_style(typography.font(10.0))
        .label_style(typography.font(9.0))
        .draw()
        .map_err(drawing_error)?;

    let step = (max - min) / COLORBAR_STEPS as f64;
    chart
        .draw_series((0..COLORBAR_STEPS).map(|k| {
            let low = min + k as f64 * step;
            Rectangle::new(
                [(0.0, low), (1.0, low + step)],
                scale.color(low + 0.5 * step).filled(),
            )
        }))
        .map_err(drawing_error)?;

    Ok(())
}

fn half_step(min: f64, max: f64, samples: usize) -> f64 {
    if samples < 2 {
        return 0.5 * (max - min);
    }
    0.5 * (max - min) / (samples - 1) as f64
}
