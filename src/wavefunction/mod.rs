/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Hydrogen-like wavefunctions
//!
//! This module provides the analytic radial wavefunctions R_{n,l}(r), the radial
//! probability density, the closed-form 1s and 2p₀ states in Cartesian
//! coordinates, and a general (n, l, m) orbital evaluator built from them.

mod closed_form;
mod errors;
mod orbital;
mod quantum;
mod radial;

pub use closed_form::{psi_1s, psi_1s_field, psi_2p0, psi_2p0_field};
pub use errors::{Result, WavefunctionError};
pub use orbital::{AngularBasis, Orbital, OrbitalKind};
pub use quantum::{EvalParams, QuantumState};
pub use radial::{
    radial_extent, radial_normalization, radial_probability_density, radial_wavefunction,
    radius_from_cartesian, scaled_radius, RadialWavefunction,
};
