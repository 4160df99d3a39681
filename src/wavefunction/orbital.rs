/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Three-dimensional orbital evaluators
//!
//! An [`Orbital`] is validated once at construction and then evaluated
//! pointwise without further checks, which keeps dense 3D grids cheap.

use super::closed_form::{guarded_radius, psi_1s, psi_2p0};
use super::errors::Result;
use super::quantum::{EvalParams, QuantumState};
use super::radial::RadialWavefunction;
use crate::utils::math::{real_spherical_harmonic_unchecked, spherical_harmonic_unchecked};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Angular part used by general hydrogenic orbitals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngularBasis {
    /// Complex Y_l^m with the Condon-Shortley phase
    #[default]
    Complex,
    /// Real (tesseral) harmonics
    Real,
}

/// Which wavefunction an [`Orbital`] evaluates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrbitalKind {
    /// Closed-form ground state
    OneS,
    /// Closed-form 2p state with m = 0
    TwoPZero,
    /// R_{n,l}(r) Y_l^m(θ, φ) for any valid (n, l, m)
    Hydrogenic {
        n: i32,
        l: i32,
        m: i32,
        #[serde(default)]
        basis: AngularBasis,
    },
}

impl OrbitalKind {
    /// Quantum numbers (n, l, m) of this kind
    pub fn quantum_numbers(&self) -> (i32, i32, i32) {
        match *self {
            OrbitalKind::OneS => (1, 0, 0),
            OrbitalKind::TwoPZero => (2, 1, 0),
            OrbitalKind::Hydrogenic { n, l, m, .. } => (n, l, m),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Evaluator {
    OneS,
    TwoPZero,
    Hydrogenic {
        radial: RadialWavefunction,
        m: i32,
        basis: AngularBasis,
    },
}

/// A validated orbital ready for pointwise evaluation
#[derive(Debug, Clone, Copy)]
pub struct Orbital {
    kind: OrbitalKind,
    state: QuantumState,
    params: EvalParams,
    evaluator: Evaluator,
}

impl Orbital {
    /// Validate `kind` and `params` and prepare the evaluator
    pub fn new(kind: OrbitalKind, params: EvalParams) -> Result<Self> {
        params.validate()?;

        let (n, l, m) = kind.quantum_numbers();
        let state = QuantumState::new(n, l, m, params.z)?;

        let evaluator = match kind {
            OrbitalKind::OneS => Evaluator::OneS,
            OrbitalKind::TwoPZero => Evaluator::TwoPZero,
            OrbitalKind::Hydrogenic { n, l, m, basis } => Evaluator::Hydrogenic {
                radial: RadialWavefunction::new(n, l, params.z, params.a0)?,
                m,
                basis,
            },
        };

        Ok(Self {
            kind,
            state,
            params,
            evaluator,
        })
    }

    pub fn kind(&self) -> OrbitalKind {
        self.kind
    }

    pub fn state(&self) -> QuantumState {
        self.state
    }

    pub fn params(&self) -> &EvalParams {
        &self.params
    }

    /// Spectroscopic label of the underlying state
    pub fn label(&self) -> String {
        self.state.label()
    }

    /// ψ(x, y, z)
    pub fn wavefunction(&self, x: f64, y: f64, z: f64) -> Complex64 {
        match self.evaluator {
            Evaluator::OneS => Complex64::new(psi_1s(x, y, z, &self.params), 0.0),
            Evaluator::TwoPZero => Complex64::new(psi_2p0(x, y, z, &self.params), 0.0),
            Evaluator::Hydrogenic { radial, m, basis } => {
                let r = guarded_radius(x, y, z, &self.params);
                let cos_theta = z / r;
                let phi = y.atan2(x);
                let l = radial.l();
                let radial_part = radial.value(r);

                match basis {
                    AngularBasis::Complex => {
                        radial_part * spherical_harmonic_unchecked(l, m, cos_theta, phi)
                    }
                    AngularBasis::Real => Complex64::new(
                        radial_part * real_spherical_harmonic_unchecked(l, m, cos_theta, phi),
                        0.0,
                    ),
                }
            }
        }
    }

    /// |ψ(x, y, z)|²
    pub fn density(&self, x: f64, y: f64, z: f64) -> f64 {
        match self.evaluator {
            Evaluator::OneS => psi_1s(x, y, z, &self.params).powi(2),
            Evaluator::TwoPZero => psi_2p0(x, y, z, &self.params).powi(2),
            Evaluator::Hydrogenic { .. } => self.wavefunction(x, y, z).norm_sqr(),
        }
    }
}
