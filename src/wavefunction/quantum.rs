/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Quantum state descriptors and evaluation parameters

use super::errors::{Result, WavefunctionError};
use crate::utils::constants::{BOHR_RADIUS, HYDROGEN_CHARGE, ORIGIN_EPSILON};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spectroscopic letters for l = 0, 1, 2, ...
const ORBITAL_LETTERS: &[char] = &['s', 'p', 'd', 'f', 'g', 'h', 'i', 'k'];

/// A hydrogen-like state (n, l, m) around a nucleus of charge Z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantumState {
    /// Principal quantum number
    pub n: i32,
    /// Orbital angular momentum quantum number
    pub l: i32,
    /// Magnetic quantum number
    pub m: i32,
    /// Nuclear charge
    pub z: f64,
}

impl QuantumState {
    /// Create a validated quantum state
    pub fn new(n: i32, l: i32, m: i32, z: f64) -> Result<Self> {
        validate_quantum_numbers(n, l, m)?;
        validate_positive("nuclear charge Z", z)?;
        Ok(Self { n, l, m, z })
    }

    /// Create a validated state of atomic hydrogen (Z = 1)
    pub fn hydrogen(n: i32, l: i32, m: i32) -> Result<Self> {
        Self::new(n, l, m, HYDROGEN_CHARGE)
    }

    /// Spectroscopic label such as "1s", "2p₀" or "3d₋₂"
    ///
    /// The m subscript is omitted for s states.
    pub fn label(&self) -> String {
        let mut label = self.shell_label();
        if self.l > 0 {
            label.push_str(&subscript(self.m));
        }
        label
    }

    /// Subshell label without the magnetic quantum number, such as "2p"
    pub fn shell_label(&self) -> String {
        format!("{}{}", self.n, orbital_letter(self.l))
    }
}

impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Z={})", self.label(), self.z)
    }
}

/// Parameters shared by every wavefunction evaluator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalParams {
    /// Nuclear charge
    pub z: f64,
    /// Bohr radius in the working length unit
    pub a0: f64,
    /// Offset added to |r| before any division by r
    pub origin_epsilon: f64,
}

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            z: HYDROGEN_CHARGE,
            a0: BOHR_RADIUS,
            origin_epsilon: ORIGIN_EPSILON,
        }
    }
}

impl EvalParams {
    /// Default parameters with a different nuclear charge
    pub fn with_charge(z: f64) -> Self {
        Self {
            z,
            ..Self::default()
        }
    }

    /// Check that Z and a0 are positive and the origin offset is non-negative
    pub fn validate(&self) -> Result<()> {
        validate_positive("nuclear charge Z", self.z)?;
        validate_positive("Bohr radius a0", self.a0)?;
        if !self.origin_epsilon.is_finite() || self.origin_epsilon < 0.0 {
            return Err(WavefunctionError::InvalidParameter(format!(
                "origin offset must be finite and non-negative, got {}",
                self.origin_epsilon
            )));
        }
        Ok(())
    }
}

/// Check n ≥ 1, 0 ≤ l ≤ n-1 and |m| ≤ l
pub(crate) fn validate_quantum_numbers(n: i32, l: i32, m: i32) -> Result<()> {
    let reason = if n <= 0 {
        "principal quantum number n must be positive"
    } else if l < 0 || l >= n {
        "orbital quantum number l must satisfy 0 <= l <= n-1"
    } else if m.abs() > l {
        "magnetic quantum number m must satisfy |m| <= l"
    } else {
        return Ok(());
    };

    Err(WavefunctionError::InvalidQuantumNumbers {
        n,
        l,
        m,
        reason: reason.to_string(),
    })
}

pub(crate) fn validate_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WavefunctionError::InvalidParameter(format!(
            "{} must be finite and positive, got {}",
            name, value
        )))
    }
}

fn orbital_letter(l: i32) -> char {
    usize::try_from(l)
        .ok()
        .and_then(|l| ORBITAL_LETTERS.get(l).copied())
        .unwrap_or('?')
}

fn subscript(value: i32) -> String {
    const DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
    let mut out = String::new();
    if value < 0 {
        out.push('₋');
    }
    for digit in value.unsigned_abs().to_string().chars() {
        if let Some(d) = digit.to_digit(10) {
            out.push(DIGITS[d as usize]);
        }
    }
    out
}
