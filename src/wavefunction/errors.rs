/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for wavefunction evaluation

use thiserror::Error;

/// Result type for wavefunction evaluation
pub type Result<T> = std::result::Result<T, WavefunctionError>;

/// Error type for wavefunction-related operations
#[derive(Error, Debug)]
pub enum WavefunctionError {
    /// Quantum numbers outside n ≥ 1, 0 ≤ l < n, |m| ≤ l
    #[error("Invalid quantum numbers (n={n}, l={l}, m={m}): {reason}")]
    InvalidQuantumNumbers {
        n: i32,
        l: i32,
        m: i32,
        reason: String,
    },

    /// Nuclear charge, Bohr radius or origin offset out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Propagation of error from utils module
    #[error("Utils error: {0}")]
    UtilsError(#[from] crate::utils::errors::UtilsError),
}
