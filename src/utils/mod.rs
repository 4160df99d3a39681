/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Utility functions for orbital calculations
//!
//! This module provides the constants and special functions used throughout
//! the crate.

pub mod constants;
pub mod errors;
pub mod math;

pub use errors::{Result, UtilsError};
pub use math::{
    associated_legendre, factorial_ratio, generalized_laguerre, integrate_simpson,
    integrate_trapezoid, real_spherical_harmonic, spherical_harmonic,
};
