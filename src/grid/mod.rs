/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Sampling grids and density fields
//!
//! This module builds symmetric Cartesian grids, evaluates orbital densities
//! over them, and cuts the resulting 3D fields into the orthogonal sections and
//! contour lines used for plotting.

mod cartesian;
mod contour;
mod errors;
mod field;
mod slice;

pub use cartesian::CartesianGrid;
pub use contour::{contour_lines, contour_segments, ContourLine, Segment};
pub use errors::{GridError, Result};
pub use field::{density_field, evaluate_density, DensityField};
pub use slice::{Plane, Slice2D};
