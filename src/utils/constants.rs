/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Physical and numerical constants, in atomic units (ħ = mₑ = e = a₀ = 1)

/// Bohr radius in the working length unit
pub const BOHR_RADIUS: f64 = 1.0;

/// Nuclear charge of hydrogen
pub const HYDROGEN_CHARGE: f64 = 1.0;

/// Offset added to |r| before dividing by it, so the origin never produces 0/0
pub const ORIGIN_EPSILON: f64 = 1e-12;
