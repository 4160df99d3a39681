/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Iso-line extraction on 2D sections (marching squares)

use super::slice::Slice2D;
use log::debug;

/// A straight piece of an iso-line, in slice coordinates
pub type Segment = [(f64, f64); 2];

/// All segments of one iso-level
#[derive(Debug, Clone)]
pub struct ContourLine {
    pub level: f64,
    pub segments: Vec<Segment>,
}

/// Extract the iso-line `values == level` from a slice
///
/// Each grid cell contributes up to two segments whose endpoints are linearly
/// interpolated along the cell edges. Saddle cells are split using the cell
/// average.
pub fn contour_segments(slice: &Slice2D, level: f64) -> Vec<Segment> {
    let (nh, nv) = slice.values.dim();
    let mut segments = Vec::new();
    if nh < 2 || nv < 2 {
        return segments;
    }

    let h = &slice.horizontal;
    let v = &slice.vertical;
    let f = &slice.values;

    for i in 0..nh - 1 {
        for j in 0..nv - 1 {
            let corners = [
                ((h[i], v[j]), f[[i, j]]),
                ((h[i + 1], v[j]), f[[i + 1, j]]),
                ((h[i + 1], v[j + 1]), f[[i + 1, j + 1]]),
                ((h[i], v[j + 1]), f[[i, j + 1]]),
            ];

            // bottom, right, top, left
            let crossings: Vec<Option<(f64, f64)>> = (0..4)
                .map(|e| edge_crossing(corners[e], corners[(e + 1) % 4], level))
                .collect();
            let points: Vec<(f64, f64)> = crossings.iter().flatten().copied().collect();

            match points.len() {
                2 => segments.push([points[0], points[1]]),
                4 => {
                    let center = corners.iter().map(|c| c.1).sum::<f64>() / 4.0;
                    let corner_above = corners[0].1 >= level;
                    let [bottom, right, top, left] = [points[0], points[1], points[2], points[3]];
                    if (center >= level) == corner_above {
                        // corners 1 and 3 are isolated
                        segments.push([bottom, right]);
                        segments.push([top, left]);
                    } else {
                        // corners 0 and 2 are isolated
                        segments.push([left, bottom]);
                        segments.push([right, top]);
                    }
                }
                _ => {}
            }
        }
    }

    segments
}

/// Extract one [`ContourLine`] per level
pub fn contour_lines(slice: &Slice2D, levels: &[f64]) -> Vec<ContourLine> {
    let lines: Vec<ContourLine> = levels
        .iter()
        .map(|&level| ContourLine {
            level,
            segments: contour_segments(slice, level),
        })
        .collect();

    debug!(
        "Contours on {}: {} segments over {} levels",
        slice.plane,
        lines.iter().map(|l| l.segments.len()).sum::<usize>(),
        levels.len()
    );

    lines
}

fn edge_crossing(
    (pa, a): ((f64, f64), f64),
    (pb, b): ((f64, f64), f64),
    level: f64,
) -> Option<(f64, f64)> {
    if (a >= level) == (b >= level) {
        return None;
    }
    let t = (level - a) / (b - a);
    Some((pa.0 + t * (pb.0 - pa.0), pa.1 + t * (pb.1 - pa.1)))
}
