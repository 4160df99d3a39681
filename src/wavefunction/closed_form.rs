/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Closed-form 1s and 2p₀ wavefunctions in Cartesian coordinates
//!
//! Both forms add `params.origin_epsilon` to r, so the origin is evaluated
//! without a 0/0 in cos θ = z/r.

use super::quantum::EvalParams;
use ndarray::{Array, ArrayBase, Data, Dimension, Zip};
use std::f64::consts::PI;

/// ψ_1s(x, y, z) = ((Z/a0)³/π)^{1/2} e^{-Zr/a0}
pub fn psi_1s(x: f64, y: f64, z: f64, params: &EvalParams) -> f64 {
    let r = guarded_radius(x, y, z, params);
    let za = params.z / params.a0;
    (za.powi(3) / PI).sqrt() * (-za * r).exp()
}

/// ψ_2p₀(x, y, z) = R₂₁(r) Y₁₀(θ)
///
/// R₂₁(r) = (Z/a0)^{3/2} (Zr/a0) e^{-Zr/(2a0)} / (2√6) and Y₁₀ = √(3/4π) cos θ.
pub fn psi_2p0(x: f64, y: f64, z: f64, params: &EvalParams) -> f64 {
    let r = guarded_radius(x, y, z, params);
    let za = params.z / params.a0;

    let cos_theta = z / r;
    let y10 = (3.0 / (4.0 * PI)).sqrt() * cos_theta;
    let r21 = za.powf(1.5) * (za * r) * (-za * r / 2.0).exp() / (2.0 * 6.0_f64.sqrt());

    r21 * y10
}

/// [`psi_1s`] over coordinate arrays of equal shape
pub fn psi_1s_field<S1, S2, S3, D>(
    x: &ArrayBase<S1, D>,
    y: &ArrayBase<S2, D>,
    z: &ArrayBase<S3, D>,
    params: &EvalParams,
) -> Array<f64, D>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    S3: Data<Elem = f64>,
    D: Dimension,
{
    Zip::from(x)
        .and(y)
        .and(z)
        .map_collect(|&x, &y, &z| psi_1s(x, y, z, params))
}

/// [`psi_2p0`] over coordinate arrays of equal shape
pub fn psi_2p0_field<S1, S2, S3, D>(
    x: &ArrayBase<S1, D>,
    y: &ArrayBase<S2, D>,
    z: &ArrayBase<S3, D>,
    params: &EvalParams,
) -> Array<f64, D>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    S3: Data<Elem = f64>,
    D: Dimension,
{
    Zip::from(x)
        .and(y)
        .and(z)
        .map_collect(|&x, &y, &z| psi_2p0(x, y, z, params))
}

/// |r| plus the origin offset
pub(crate) fn guarded_radius(x: f64, y: f64, z: f64, params: &EvalParams) -> f64 {
    (x * x + y * y + z * z).sqrt() + params.origin_epsilon
}
