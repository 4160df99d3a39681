/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Analytic radial wavefunctions of hydrogen-like atoms
//!
//! R_{n,l}(r) = (2Z/(n a0))^{3/2} sqrt[(n-l-1)! / (2n (n+l)!)] e^{-ρ/2} ρ^l L_{n-l-1}^{2l+1}(ρ),
//! with ρ = 2Zr/(n a0) and L the generalized Laguerre polynomial.

use super::errors::Result;
use super::quantum::{validate_positive, validate_quantum_numbers};
use crate::utils::math::{factorial_ratio, generalized_laguerre, integrate_simpson};
use ndarray::{Array, ArrayBase, Data, Dimension, Zip};

/// A validated radial wavefunction R_{n,l} with its normalization precomputed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialWavefunction {
    n: u32,
    l: u32,
    z: f64,
    a0: f64,
    /// Full normalization constant
    norm: f64,
}

impl RadialWavefunction {
    /// Create the radial wavefunction for (n, l) with nuclear charge `z` and Bohr radius `a0`
    ///
    /// Fails when n ≤ 0, l is outside [0, n-1], or z / a0 are not positive.
    pub fn new(n: i32, l: i32, z: f64, a0: f64) -> Result<Self> {
        validate_quantum_numbers(n, l, 0)?;
        validate_positive("nuclear charge Z", z)?;
        validate_positive("Bohr radius a0", a0)?;

        let (n, l) = (n as u32, l as u32);
        let k = 2.0 * z / (n as f64 * a0);
        let norm = k.powf(1.5) * (factorial_ratio(n - l - 1, n + l) / (2.0 * n as f64)).sqrt();

        Ok(Self { n, l, z, a0, norm })
    }

    /// Principal quantum number
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Orbital quantum number
    pub fn l(&self) -> u32 {
        self.l
    }

    /// Dimensionless radius ρ = 2Zr/(n a0)
    pub fn scaled_radius(&self, r: f64) -> f64 {
        2.0 * self.z * r / (self.n as f64 * self.a0)
    }

    /// R_{n,l}(r)
    pub fn value(&self, r: f64) -> f64 {
        let rho = self.scaled_radius(r);
        let laguerre = generalized_laguerre(self.n - self.l - 1, (2 * self.l + 1) as f64, rho);
        self.norm * (-rho / 2.0).exp() * rho.powi(self.l as i32) * laguerre
    }

    /// P_{n,l}(r) = r² |R_{n,l}(r)|²
    pub fn probability_density(&self, r: f64) -> f64 {
        let value = self.value(r);
        r * r * value * value
    }

    /// R_{n,l} evaluated elementwise over an array of radii
    pub fn evaluate<S, D>(&self, r: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        r.mapv(|r| self.value(r))
    }

    /// P_{n,l} evaluated elementwise over an array of radii
    pub fn evaluate_density<S, D>(&self, r: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        r.mapv(|r| self.probability_density(r))
    }
}

/// Dimensionless radius ρ = 2Zr/(n a0), elementwise
pub fn scaled_radius<S, D>(r: &ArrayBase<S, D>, n: i32, z: f64, a0: f64) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let scale = 2.0 * z / (n as f64 * a0);
    r.mapv(|r| scale * r)
}

/// Normalized radial wavefunction R_{n,l}(r), elementwise
///
/// # Errors
///
/// Returns [`WavefunctionError::InvalidQuantumNumbers`](super::WavefunctionError) when
/// n ≤ 0 or l is outside [0, n-1].
pub fn radial_wavefunction<S, D>(
    r: &ArrayBase<S, D>,
    n: i32,
    l: i32,
    z: f64,
    a0: f64,
) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    Ok(RadialWavefunction::new(n, l, z, a0)?.evaluate(r))
}

/// Radial probability density P_{n,l}(r) = r² |R_{n,l}(r)|², elementwise
pub fn radial_probability_density<S, D>(
    r: &ArrayBase<S, D>,
    n: i32,
    l: i32,
    z: f64,
    a0: f64,
) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    Ok(RadialWavefunction::new(n, l, z, a0)?.evaluate_density(r))
}

/// r = sqrt(x² + y² + z²), elementwise
///
/// # Panics
///
/// Panics if the three arrays do not have the same shape.
pub fn radius_from_cartesian<S1, S2, S3, D>(
    x: &ArrayBase<S1, D>,
    y: &ArrayBase<S2, D>,
    z: &ArrayBase<S3, D>,
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
        .map_collect(|&x, &y, &z| (x * x + y * y + z * z).sqrt())
}

/// ∫₀^r_max |R_{n,l}(r)|² r² dr by Simpson's rule
///
/// Approaches 1 as `r_max` grows; `intervals` must be even.
pub fn radial_normalization(
    n: i32,
    l: i32,
    z: f64,
    a0: f64,
    r_max: f64,
    intervals: usize,
) -> Result<f64> {
    let radial = RadialWavefunction::new(n, l, z, a0)?;
    let integral = integrate_simpson(|r| radial.probability_density(r), 0.0, r_max, intervals)?;
    Ok(integral)
}

/// Cut-off radius for shell n past which the radial density of any l is negligible
pub fn radial_extent(n: i32, z: f64, a0: f64) -> f64 {
    let n = n.max(1) as f64;
    (25.0 * n + 4.0 * n * n) * a0 / z
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use std::f64::consts::PI;

    #[test]
    fn test_1s_closed_form() {
        let radial = RadialWavefunction::new(1, 0, 1.0, 1.0).unwrap();
        for &r in &[0.0, 0.5, 1.0, 2.5, 7.0] {
            // R_10 = 2 e^{-r}, and R_10 Y_00 = e^{-r}/√π
            let expected = 2.0 * f64::exp(-r);
            assert_relative_eq!(radial.value(r), expected, epsilon = 1e-12);
            assert_relative_eq!(
                radial.value(r) / (4.0 * PI).sqrt(),
                f64::exp(-r) / PI.sqrt(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_2s_closed_form() {
        let radial = RadialWavefunction::new(2, 0, 1.0, 1.0).unwrap();
        for &r in &[0.0, 1.0, 2.0, 4.0] {
            let expected = (1.0 / (2.0 * 2.0_f64.sqrt())) * (2.0 - r) * f64::exp(-r / 2.0);
            assert_relative_eq!(radial.value(r), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_node_count_of_3s() {
        let radial = RadialWavefunction::new(3, 0, 1.0, 1.0).unwrap();
        let r = Array::linspace(0.01, 30.0, 3000);
        let values = radial.evaluate(&r);
        let sign_changes = values
            .as_slice()
            .unwrap()
            .windows(2)
            .filter(|w| w[0].signum() != w[1].signum())
            .count();
        assert_eq!(sign_changes, 2);
    }

    #[test]
    fn test_array_functions_agree_with_struct() {
        let r = array![0.0, 0.3, 1.2, 5.0];
        let values = radial_wavefunction(&r, 3, 1, 2.0, 1.0).unwrap();
        let radial = RadialWavefunction::new(3, 1, 2.0, 1.0).unwrap();
        for (v, &ri) in values.iter().zip(r.iter()) {
            assert_relative_eq!(*v, radial.value(ri));
        }

        let rho = scaled_radius(&r, 3, 2.0, 1.0);
        assert_relative_eq!(rho[2], 2.0 * 2.0 * 1.2 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_scale_parameters() {
        assert!(RadialWavefunction::new(1, 0, 0.0, 1.0).is_err());
        assert!(RadialWavefunction::new(1, 0, 1.0, -1.0).is_err());
    }
}
