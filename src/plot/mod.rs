/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Figure rendering
//!
//! This module turns density fields and radial curves into PNG figures with
//! plotters. Colors come from colorous gradients mapped onto fixed scales.

mod colormap;
mod density;
mod errors;
mod panel;
mod radial;
mod style;

pub use colormap::{ColorScale, Colormap};
pub use density::render_density_figure;
pub use errors::{PlotError, Result};
pub use radial::{radial_curves, render_radial_figure};

use crate::config::FigureSize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Where a figure was written and at what size
#[derive(Debug, Clone, PartialEq)]
pub struct FigureSummary {
    pub path: PathBuf,
    pub size: FigureSize,
}

impl FigureSummary {
    fn new(path: &Path, size: FigureSize) -> Self {
        Self {
            path: path.to_path_buf(),
            size,
        }
    }
}

impl fmt::Display for FigureSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.size.pixels();
        write!(
            f,
            "'{}' ({}×{} in at {} DPI, {}×{} px)",
            self.path.display(),
            self.size.width_in,
            self.size.height_in,
            self.size.dpi,
            w,
            h
        )
    }
}

/// Create the parent directory of `path` if needed
fn prepare_output(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
