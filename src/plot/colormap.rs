/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Colormaps and fixed-range color scales

use super::errors::{PlotError, Result};
use colorous::Gradient;
use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

/// Perceptual gradients available for density images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Colormap {
    #[default]
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
    Turbo,
    Greys,
}

impl Colormap {
    pub fn gradient(&self) -> Gradient {
        match self {
            Colormap::Viridis => colorous::VIRIDIS,
            Colormap::Plasma => colorous::PLASMA,
            Colormap::Inferno => colorous::INFERNO,
            Colormap::Magma => colorous::MAGMA,
            Colormap::Cividis => colorous::CIVIDIS,
            Colormap::Turbo => colorous::TURBO,
            Colormap::Greys => colorous::GREYS,
        }
    }
}

/// Maps values in [min, max] onto a colormap; values outside are clamped
#[derive(Debug, Clone, Copy)]
pub struct ColorScale {
    min: f64,
    max: f64,
    colormap: Colormap,
}

impl ColorScale {
    pub fn new(min: f64, max: f64, colormap: Colormap) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(PlotError::InvalidScale(format!(
                "expected finite min < max, got [{}, {}]",
                min, max
            )));
        }
        Ok(Self { min, max, colormap })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Position of `value` within the scale, clamped to [0, 1]
    pub fn fraction(&self, value: f64) -> f64 {
        if value.is_nan() {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    pub fn color(&self, value: f64) -> RGBColor {
        let (r, g, b) = self
            .colormap
            .gradient()
            .eval_continuous(self.fraction(value))
            .as_tuple();
        RGBColor(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_clamps() {
        let scale = ColorScale::new(-0.3, 0.3, Colormap::Plasma).unwrap();
        assert_eq!(scale.fraction(-1.0), 0.0);
        assert_eq!(scale.fraction(0.3), 1.0);
        assert_eq!(scale.fraction(5.0), 1.0);
        assert!((scale.fraction(0.0) - 0.5).abs() < 1e-12);
        assert_eq!(scale.fraction(f64::NAN), 0.0);
    }

    #[test]
    fn test_color_endpoints_match_gradient() {
        let scale = ColorScale::new(0.0, 1.0, Colormap::Viridis).unwrap();
        let low = colorous::VIRIDIS.eval_continuous(0.0);
        let high = colorous::VIRIDIS.eval_continuous(1.0);
        let RGBColor(r, g, b) = scale.color(-3.0);
        assert_eq!((r, g, b), low.as_tuple());
        let RGBColor(r, g, b) = scale.color(2.0);
        assert_eq!((r, g, b), high.as_tuple());
    }

    #[test]
    fn test_invalid_scales() {
        assert!(ColorScale::new(1.0, 1.0, Colormap::Viridis).is_err());
        assert!(ColorScale::new(1.0, 0.0, Colormap::Viridis).is_err());
        assert!(ColorScale::new(0.0, f64::INFINITY, Colormap::Viridis).is_err());
    }
}
