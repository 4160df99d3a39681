/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Probability density fields on Cartesian grids

use super::cartesian::CartesianGrid;
use super::errors::{GridError, Result};
use super::slice::{Plane, Slice2D};
use crate::wavefunction::{EvalParams, Orbital, OrbitalKind};
use log::{debug, warn};
use ndarray::{Array3, Axis};

/// |ψ|² sampled on a [`CartesianGrid`], indexed `[x, y, z]`
#[derive(Debug, Clone)]
pub struct DensityField {
    grid: CartesianGrid,
    values: Array3<f64>,
}

impl DensityField {
    /// Wrap precomputed values; the shape must be (n, n, n) for an n-sample grid
    pub fn from_values(grid: CartesianGrid, values: Array3<f64>) -> Result<Self> {
        let n = grid.samples();
        if values.dim() != (n, n, n) {
            return Err(GridError::InvalidGrid(format!(
                "field shape {:?} does not match a {}-sample grid",
                values.dim(),
                n
            )));
        }
        Ok(Self { grid, values })
    }

    pub fn grid(&self) -> &CartesianGrid {
        &self.grid
    }

    pub fn values(&self) -> &Array3<f64> {
        &self.values
    }

    /// Maximum absolute value over the whole 3D field
    pub fn max_abs(&self) -> f64 {
        self.values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    /// Divide the field by its maximum absolute value and return that maximum
    ///
    /// Every slice is scaled by the same 3D maximum, so brightness stays comparable
    /// between sections. An all-zero field is left unchanged.
    pub fn normalize(&mut self) -> f64 {
        let max = self.max_abs();
        if max > 0.0 && max.is_finite() {
            self.values.mapv_inplace(|v| v / max);
        } else {
            warn!("Density field maximum is {}, skipping normalization", max);
        }
        max
    }

    /// Section through the middle of the grid
    pub fn slice(&self, plane: Plane) -> Slice2D {
        self.extract(plane, self.grid.mid_index())
    }

    /// Section at `index` along the axis held fixed by `plane`
    pub fn slice_at(&self, plane: Plane, index: usize) -> Result<Slice2D> {
        let n = self.grid.samples();
        if index >= n {
            return Err(GridError::InvalidGrid(format!(
                "slice index {} out of range for {} samples",
                index, n
            )));
        }
        Ok(self.extract(plane, index))
    }

    fn extract(&self, plane: Plane, index: usize) -> Slice2D {
        let axis = self.grid.axis();
        Slice2D {
            plane,
            index,
            coordinate: axis[index],
            horizontal: axis.clone(),
            vertical: axis.clone(),
            values: self
                .values
                .index_axis(Axis(plane.fixed_axis()), index)
                .to_owned(),
        }
    }

    /// The XY, XZ and YZ sections through the middle of the grid
    pub fn mid_slices(&self) -> [Slice2D; 3] {
        Plane::ALL.map(|plane| self.slice(plane))
    }
}

/// Evaluate |ψ|² of `orbital` at every point of `grid`
pub fn density_field(orbital: &Orbital, grid: &CartesianGrid) -> DensityField {
    let n = grid.samples();
    debug!(
        "Evaluating {} density on {}³ grid ({} points, ~{} MiB)",
        orbital.label(),
        n,
        grid.point_count(),
        grid.point_count() * std::mem::size_of::<f64>() / (1024 * 1024)
    );

    let axis = grid.axis();
    let values = Array3::from_shape_fn((n, n, n), |(i, j, k)| {
        orbital.density(axis[i], axis[j], axis[k])
    });

    DensityField {
        grid: grid.clone(),
        values,
    }
}

/// Build the grid, evaluate the orbital density and normalize it by its maximum
pub fn evaluate_density(
    kind: OrbitalKind,
    params: EvalParams,
    half_width: f64,
    samples: usize,
) -> Result<DensityField> {
    let orbital = Orbital::new(kind, params)?;
    let grid = CartesianGrid::new(half_width, samples)?;

    let mut field = density_field(&orbital, &grid);
    let max = field.normalize();
    debug!("{} density maximum before normalization: {:e}", orbital.label(), max);

    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_uses_global_maximum() {
        let grid = CartesianGrid::new(1.0, 3).unwrap();
        let mut values = Array3::zeros((3, 3, 3));
        values[[1, 1, 1]] = 4.0;
        values[[0, 0, 0]] = 2.0;
        values[[2, 0, 1]] = -8.0;
        let mut field = DensityField::from_values(grid, values).unwrap();

        assert_relative_eq!(field.normalize(), 8.0);
        assert_relative_eq!(field.values()[[1, 1, 1]], 0.5);
        assert_relative_eq!(field.values()[[2, 0, 1]], -1.0);

        // the XY section through the centre keeps its value relative to the whole field
        let xy = field.slice(Plane::Xy);
        assert_relative_eq!(xy.max(), 0.5);
    }

    #[test]
    fn test_zero_field_is_not_normalized() {
        let grid = CartesianGrid::new(1.0, 3).unwrap();
        let mut field = DensityField::from_values(grid, Array3::zeros((3, 3, 3))).unwrap();
        assert_eq!(field.normalize(), 0.0);
        assert!(field.values().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let grid = CartesianGrid::new(1.0, 3).unwrap();
        assert!(DensityField::from_values(grid, Array3::zeros((3, 3, 2))).is_err());
    }

    #[test]
    fn test_slice_orientation() {
        let grid = CartesianGrid::new(1.0, 3).unwrap();
        // encode the index triple into the value
        let values = Array3::from_shape_fn((3, 3, 3), |(i, j, k)| (100 * i + 10 * j + k) as f64);
        let field = DensityField::from_values(grid, values).unwrap();

        let xy = field.slice(Plane::Xy);
        assert_eq!(xy.values[[2, 0]], 201.0);
        let xz = field.slice(Plane::Xz);
        assert_eq!(xz.values[[2, 0]], 210.0);
        let yz = field.slice(Plane::Yz);
        assert_eq!(yz.values[[2, 0]], 120.0);

        assert!(field.slice_at(Plane::Xy, 3).is_err());
    }
}
