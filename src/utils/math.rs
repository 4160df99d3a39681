/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Mathematical utility functions for orbital calculations
//!
//! This module provides the special functions needed by the analytic hydrogenic
//! wavefunctions (generalized Laguerre and associated Legendre polynomials,
//! spherical harmonics) together with the quadrature rules used to check
//! normalization.

use super::errors::{Result, UtilsError};
use num_complex::Complex64;
use std::f64::consts::{PI, SQRT_2};

/// Ratio of factorials `numerator! / denominator!`
///
/// Computed as a floating-point product over the non-shared factors, so large
/// arguments lose precision gracefully instead of overflowing an integer.
pub fn factorial_ratio(numerator: u32, denominator: u32) -> f64 {
    if numerator >= denominator {
        ((denominator + 1)..=numerator).fold(1.0, |acc, k| acc * k as f64)
    } else {
        1.0 / ((numerator + 1)..=denominator).fold(1.0, |acc, k| acc * k as f64)
    }
}

/// Generalized (associated) Laguerre polynomial L_k^(α)(x)
///
/// Uses the three-term recurrence
/// (k+1) L_{k+1} = (2k+1+α−x) L_k − (k+α) L_{k−1},
/// starting from L_0 = 1 and L_1 = 1 + α − x.
///
/// # Arguments
///
/// * `k` - The degree of the polynomial
/// * `alpha` - The order α (α > −1 for orthogonality, any value evaluates)
/// * `x` - The evaluation point
pub fn generalized_laguerre(k: u32, alpha: f64, x: f64) -> f64 {
    if k == 0 {
        return 1.0;
    }

    let mut l_prev = 1.0;
    let mut l_curr = 1.0 + alpha - x;

    for i in 1..k {
        let i = i as f64;
        let l_next = ((2.0 * i + 1.0 + alpha - x) * l_curr - (i + alpha) * l_prev) / (i + 1.0);
        l_prev = l_curr;
        l_curr = l_next;
    }

    l_curr
}

/// Associated Legendre polynomial P_l^m(x), including the Condon-Shortley phase
///
/// # Arguments
///
/// * `l` - The degree of the polynomial (l ≥ 0)
/// * `m` - The order of the polynomial (|m| ≤ l)
/// * `x` - The input value (-1 ≤ x ≤ 1)
///
/// # Returns
///
/// The value of P_l^m(x) or an error if parameters are invalid
pub fn associated_legendre(l: i32, m: i32, x: f64) -> Result<f64> {
    if l < 0 || m.abs() > l || !(-1.0..=1.0).contains(&x) {
        return Err(UtilsError::Generic(format!(
            "Invalid parameters for associated Legendre polynomial: l={}, m={}, x={}",
            l, m, x
        )));
    }

    let abs_m = m.unsigned_abs();
    let p_abs = legendre_recurrence(l as u32, abs_m, x);

    if m >= 0 {
        return Ok(p_abs);
    }

    // P_l^(-m) = (-1)^m * (l-m)!/(l+m)! * P_l^m
    let factor = if abs_m % 2 == 0 { 1.0 } else { -1.0 };
    let ratio = factorial_ratio(l as u32 - abs_m, l as u32 + abs_m);
    Ok(factor * ratio * p_abs)
}

/// P_l^m(x) for 0 ≤ m ≤ l and |x| ≤ 1, without validation
fn legendre_recurrence(l: u32, m: u32, x: f64) -> f64 {
    // P_m^m(x) = (-1)^m (2m-1)!! (1-x²)^(m/2)
    let somx2 = ((1.0 - x) * (1.0 + x)).sqrt();
    let mut pmm = 1.0;
    for i in 1..=m {
        pmm *= -((2 * i - 1) as f64) * somx2;
    }

    if l == m {
        return pmm;
    }

    let mut pmm1 = x * (2 * m + 1) as f64 * pmm;

    if l == m + 1 {
        return pmm1;
    }

    let mut pll = 0.0;
    for ll in (m + 2)..=l {
        pll = ((2 * ll - 1) as f64 * x * pmm1 - (ll + m - 1) as f64 * pmm) / (ll - m) as f64;
        pmm = pmm1;
        pmm1 = pll;
    }

    pll
}

/// Spherical harmonic Y_l^m(θ, φ)
///
/// # Arguments
///
/// * `l` - The degree (l ≥ 0)
/// * `m` - The order (-l ≤ m ≤ l)
/// * `theta` - The polar angle in radians (0 ≤ θ ≤ π)
/// * `phi` - The azimuthal angle in radians
///
/// # Returns
///
/// The complex value of Y_l^m(θ, φ) or an error if parameters are invalid
pub fn spherical_harmonic(l: i32, m: i32, theta: f64, phi: f64) -> Result<Complex64> {
    if l < 0 || m.abs() > l {
        return Err(UtilsError::Generic(format!(
            "Invalid parameters for spherical harmonic: l={}, m={}",
            l, m
        )));
    }

    Ok(spherical_harmonic_unchecked(
        l as u32,
        m,
        theta.cos(),
        phi,
    ))
}

/// Real spherical harmonic in the chemistry convention
///
/// m > 0 gives the cos(mφ)-like combination, m < 0 the sin(|m|φ)-like one and
/// m = 0 reduces to Y_l0.
pub fn real_spherical_harmonic(l: i32, m: i32, theta: f64, phi: f64) -> Result<f64> {
    if l < 0 || m.abs() > l {
        return Err(UtilsError::Generic(format!(
            "Invalid parameters for real spherical harmonic: l={}, m={}",
            l, m
        )));
    }

    Ok(real_spherical_harmonic_unchecked(
        l as u32,
        m,
        theta.cos(),
        phi,
    ))
}

/// Y_l^m as a function of cos θ, for callers that have already validated (l, m)
pub(crate) fn spherical_harmonic_unchecked(l: u32, m: i32, cos_theta: f64, phi: f64) -> Complex64 {
    let abs_m = m.unsigned_abs();
    let cos_theta = cos_theta.clamp(-1.0, 1.0);
    let p_lm = legendre_recurrence(l, abs_m, cos_theta);

    let norm = ((2 * l + 1) as f64 * factorial_ratio(l - abs_m, l + abs_m) / (4.0 * PI)).sqrt();

    let exp_imp = Complex64::new(0.0, m as f64 * phi).exp();

    // Y_l^(-m) = (-1)^m conj(Y_l^m)
    let phase = if m >= 0 || abs_m % 2 == 0 { 1.0 } else { -1.0 };

    norm * phase * p_lm * exp_imp
}

pub(crate) fn real_spherical_harmonic_unchecked(l: u32, m: i32, cos_theta: f64, phi: f64) -> f64 {
    let y = spherical_harmonic_unchecked(l, m.abs(), cos_theta, phi);
    match m {
        0 => y.re,
        m if m > 0 => SQRT_2 * y.re,
        _ => SQRT_2 * y.im,
    }
}

/// Performs numerical integration using the trapezoidal rule
///
/// # Arguments
///
/// * `f` - The function to integrate
/// * `a` - The lower bound of integration
/// * `b` - The upper bound of integration
/// * `n` - The number of intervals
///
/// # Returns
///
/// The approximate value of the integral
pub fn integrate_trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    if a == b || n == 0 {
        return 0.0;
    }

    let h = (b - a) / n as f64;
    let mut sum = 0.5 * (f(a) + f(b));

    for i in 1..n {
        let x = a + i as f64 * h;
        sum += f(x);
    }

    sum * h
}

/// Performs numerical integration using Simpson's rule
///
/// # Arguments
///
/// * `f` - The function to integrate
/// * `a` - The lower bound of integration
/// * `b` - The upper bound of integration
/// * `n` - The number of intervals (must be even and non-zero)
///
/// # Returns
///
/// The approximate value of the integral or an error if n is not even
pub fn integrate_simpson<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    if n == 0 || n % 2 != 0 {
        return Err(UtilsError::Math(format!(
            "Number of intervals for Simpson's rule must be even and non-zero, got {}",
            n
        )));
    }

    if a == b {
        return Ok(0.0);
    }

    let h = (b - a) / n as f64;
    let mut sum = f(a) + f(b);

    // Add 4 times the odd-indexed points
    for i in (1..n).step_by(2) {
        let x = a + i as f64 * h;
        sum += 4.0 * f(x);
    }

    // Add 2 times the even-indexed points (excluding endpoints)
    for i in (2..n).step_by(2) {
        let x = a + i as f64 * h;
        sum += 2.0 * f(x);
    }

    Ok(sum * h / 3.0)
}
