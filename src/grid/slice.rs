/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Orthogonal 2D sections of a 3D field

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A coordinate plane through the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    /// Constant z
    Xy,
    /// Constant y
    Xz,
    /// Constant x
    Yz,
}

impl Plane {
    /// The three sections in display order
    pub const ALL: [Plane; 3] = [Plane::Xy, Plane::Xz, Plane::Yz];

    /// Field axis held fixed by this plane (0 = x, 1 = y, 2 = z)
    pub fn fixed_axis(&self) -> usize {
        match self {
            Plane::Xy => 2,
            Plane::Xz => 1,
            Plane::Yz => 0,
        }
    }

    /// Names of the (horizontal, vertical, fixed) axes
    pub fn axis_names(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            Plane::Xy => ("x", "y", "z"),
            Plane::Xz => ("x", "z", "y"),
            Plane::Yz => ("y", "z", "x"),
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, v, _) = self.axis_names();
        write!(f, "{}{}", h.to_uppercase(), v.to_uppercase())
    }
}

/// A 2D section of a field, with `values[[i, j]]` at (`horizontal[i]`, `vertical[j]`)
#[derive(Debug, Clone)]
pub struct Slice2D {
    pub plane: Plane,
    /// Index along the fixed axis
    pub index: usize,
    /// Coordinate of the fixed axis at `index`
    pub coordinate: f64,
    pub horizontal: Array1<f64>,
    pub vertical: Array1<f64>,
    pub values: Array2<f64>,
}

impl Slice2D {
    /// Horizontal and vertical extents as ((min, max), (min, max))
    pub fn extent(&self) -> ((f64, f64), (f64, f64)) {
        let bounds = |axis: &Array1<f64>| {
            let first = axis.first().copied().unwrap_or(0.0);
            let last = axis.last().copied().unwrap_or(0.0);
            (first.min(last), first.max(last))
        };
        (bounds(&self.horizontal), bounds(&self.vertical))
    }

    /// Largest value in the section
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Caption such as "XZ (y=0.0)"
    pub fn caption(&self) -> String {
        let (_, _, fixed) = self.plane.axis_names();
        // avoid "-0.0" for round-off just below zero
        let coordinate = if self.coordinate.abs() < 0.05 {
            0.0
        } else {
            self.coordinate
        };
        format!("{} ({}={:.1})", self.plane, fixed, coordinate)
    }
}
