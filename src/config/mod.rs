/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Figure configuration
//!
//! The defaults produce the standard figures: a 2×3 grid of 1s and 2p₀
//! sections and a radial density plot of the 1s, 2s and 2p shells. Any field
//! can be overridden from a JSON file; omitted fields keep their defaults.

mod errors;

pub use errors::{ConfigError, Result};

use crate::grid::Plane;
use crate::plot::Colormap;
use crate::wavefunction::{EvalParams, OrbitalKind, QuantumState};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Physical size and resolution of an output image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
}

impl FigureSize {
    pub fn new(width_in: f64, height_in: f64, dpi: u32) -> Self {
        Self {
            width_in,
            height_in,
            dpi,
        }
    }

    /// Image size in pixels
    pub fn pixels(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi as f64).round() as u32,
            (self.height_in * self.dpi as f64).round() as u32,
        )
    }

    fn validate(&self, figure: &str) -> Result<()> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.width_in) || !valid(self.height_in) || self.dpi == 0 {
            return Err(ConfigError::Invalid(format!(
                "{} figure size must be positive, got {}×{} in at {} DPI",
                figure, self.width_in, self.height_in, self.dpi
            )));
        }
        Ok(())
    }
}

/// One row of the density figure: an orbital shown in three sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityRowConfig {
    pub orbital: OrbitalKind,
    /// The grid spans [-half_width, half_width] on every axis
    pub half_width: f64,
    /// Samples per axis
    pub samples: usize,
    #[serde(default)]
    pub colormap: Colormap,
    /// Fixed color scale bounds for the normalized density
    #[serde(default = "default_color_range")]
    pub color_range: [f64; 2],
    #[serde(default)]
    pub contour_levels: Vec<f64>,
    /// Sections that get contour overlays
    #[serde(default)]
    pub contour_planes: Vec<Plane>,
    /// Panel letter drawn on the first section
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default = "default_true")]
    pub colorbar: bool,
}

fn default_color_range() -> [f64; 2] {
    [0.0, 1.0]
}

fn default_true() -> bool {
    true
}

impl DensityRowConfig {
    /// 1s on ±6 a0 with 200 samples, viridis in [0, 1]
    pub fn one_s() -> Self {
        Self {
            orbital: OrbitalKind::OneS,
            half_width: 6.0,
            samples: 200,
            colormap: Colormap::Viridis,
            color_range: [0.0, 1.0],
            contour_levels: Vec::new(),
            contour_planes: Vec::new(),
            tag: Some("A".to_string()),
            colorbar: true,
        }
    }

    /// 2p₀ on ±12 a0 with 300 samples, plasma in [-0.3, 0.3], contours on XZ
    pub fn two_p_zero() -> Self {
        Self {
            orbital: OrbitalKind::TwoPZero,
            half_width: 12.0,
            samples: 300,
            colormap: Colormap::Plasma,
            color_range: [-0.3, 0.3],
            contour_levels: (0..11).map(|i| -0.25 + 0.05 * i as f64).collect(),
            contour_planes: vec![Plane::Xz],
            tag: Some("B".to_string()),
            colorbar: true,
        }
    }

    fn validate(&self, row: usize) -> Result<()> {
        if !self.half_width.is_finite() || self.half_width <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "density row {}: half_width must be positive, got {}",
                row, self.half_width
            )));
        }
        if self.samples < 2 {
            return Err(ConfigError::Invalid(format!(
                "density row {}: at least 2 samples per axis are required, got {}",
                row, self.samples
            )));
        }
        let [min, max] = self.color_range;
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ConfigError::Invalid(format!(
                "density row {}: color_range must satisfy min < max, got [{}, {}]",
                row, min, max
            )));
        }
        Ok(())
    }
}

/// The 3D density comparison figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityFigureConfig {
    pub file_name: String,
    pub title: String,
    pub size: FigureSize,
    pub rows: Vec<DensityRowConfig>,
}

impl Default for DensityFigureConfig {
    fn default() -> Self {
        Self {
            file_name: "3d_density_comparison.png".to_string(),
            title: "Probability density |ψ_nlm|² of the 1s and 2p₀ states of a hydrogen-like atom"
                .to_string(),
            size: FigureSize::new(16.0, 10.0, 400),
            rows: vec![DensityRowConfig::one_s(), DensityRowConfig::two_p_zero()],
        }
    }
}

/// One curve of the radial density figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialCurve {
    pub n: i32,
    pub l: i32,
    #[serde(default)]
    pub label: Option<String>,
}

impl RadialCurve {
    pub fn new(n: i32, l: i32) -> Self {
        Self { n, l, label: None }
    }

    /// Explicit label, or the shell name such as "2p"
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => QuantumState::hydrogen(self.n, self.l, 0)
                .map(|state| state.shell_label())
                .unwrap_or_else(|_| format!("n={}, l={}", self.n, self.l)),
        }
    }
}

/// The radial probability density figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadialFigureConfig {
    pub file_name: String,
    pub title: String,
    pub size: FigureSize,
    /// Curves are sampled on [0, r_max]
    pub r_max: f64,
    pub samples: usize,
    /// Line width in points
    pub line_width: f64,
    pub curves: Vec<RadialCurve>,
}

impl Default for RadialFigureConfig {
    fn default() -> Self {
        Self {
            file_name: "radial_density.png".to_string(),
            title: "Radial probability density".to_string(),
            size: FigureSize::new(10.0, 6.0, 100),
            r_max: 20.0,
            samples: 1000,
            line_width: 2.0,
            curves: vec![
                RadialCurve::new(1, 0),
                RadialCurve::new(2, 0),
                RadialCurve::new(2, 1),
            ],
        }
    }
}

/// Top-level configuration for every figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Nuclear charge, Bohr radius and origin offset shared by all figures
    pub params: EvalParams,
    pub output_dir: PathBuf,
    pub density: DensityFigureConfig,
    pub radial: RadialFigureConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            params: EvalParams::default(),
            output_dir: PathBuf::from("."),
            density: DensityFigureConfig::default(),
            radial: RadialFigureConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read and validate a JSON configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(text: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Pretty-printed JSON, suitable as a starting point for a config file
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every figure for values that cannot be rendered
    pub fn validate(&self) -> Result<()> {
        self.params
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        self.density.size.validate("density")?;
        if self.density.rows.is_empty() {
            return Err(ConfigError::Invalid(
                "density figure needs at least one row".to_string(),
            ));
        }
        for (i, row) in self.density.rows.iter().enumerate() {
            row.validate(i)?;
        }

        self.radial.size.validate("radial")?;
        if !self.radial.r_max.is_finite() || self.radial.r_max <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "radial r_max must be positive, got {}",
                self.radial.r_max
            )));
        }
        if self.radial.samples < 2 {
            return Err(ConfigError::Invalid(format!(
                "radial figure needs at least 2 samples, got {}",
                self.radial.samples
            )));
        }
        if self.radial.curves.is_empty() {
            return Err(ConfigError::Invalid(
                "radial figure needs at least one curve".to_string(),
            ));
        }
        for curve in &self.radial.curves {
            QuantumState::hydrogen(curve.n, curve.l, 0)
                .map_err(|e| ConfigError::Invalid(format!("radial curve: {}", e)))?;
        }

        Ok(())
    }

    /// Output path of the density figure
    pub fn density_path(&self) -> PathBuf {
        self.output_dir.join(&self.density.file_name)
    }

    /// Output path of the radial figure
    pub fn radial_path(&self) -> PathBuf {
        self.output_dir.join(&self.radial.file_name)
    }
}
