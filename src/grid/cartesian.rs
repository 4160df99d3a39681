/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Symmetric Cartesian sampling grids

use super::errors::{GridError, Result};
use ndarray::Array1;

/// A cubic grid on [-h, h]³ with the same evenly spaced axis for x, y and z
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianGrid {
    half_width: f64,
    axis: Array1<f64>,
}

impl CartesianGrid {
    /// Create a grid of `samples` points per axis spanning [-half_width, half_width]
    pub fn new(half_width: f64, samples: usize) -> Result<Self> {
        if !half_width.is_finite() || half_width <= 0.0 {
            return Err(GridError::InvalidGrid(format!(
                "half width must be finite and positive, got {}",
                half_width
            )));
        }
        if samples < 2 {
            return Err(GridError::InvalidGrid(format!(
                "at least 2 samples per axis are required, got {}",
                samples
            )));
        }

        Ok(Self {
            half_width,
            axis: Array1::linspace(-half_width, half_width, samples),
        })
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Number of samples per axis
    pub fn samples(&self) -> usize {
        self.axis.len()
    }

    /// Sample coordinates shared by the x, y and z axes
    pub fn axis(&self) -> &Array1<f64> {
        &self.axis
    }

    /// Distance between neighbouring samples
    pub fn spacing(&self) -> f64 {
        2.0 * self.half_width / (self.samples() - 1) as f64
    }

    /// Index of the slice through the middle of the grid
    ///
    /// For an even sample count this is the first sample above zero.
    pub fn mid_index(&self) -> usize {
        self.samples() / 2
    }

    /// Total number of points in the 3D grid
    pub fn point_count(&self) -> usize {
        self.samples().pow(3)
    }
}
