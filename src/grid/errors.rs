/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for grid construction and field evaluation

use thiserror::Error;

/// Result type for grid operations
pub type Result<T> = std::result::Result<T, GridError>;

/// Error type for grid-related operations
#[derive(Error, Debug)]
pub enum GridError {
    /// Domain or sample count that cannot form a grid
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Propagation of error from wavefunction module
    #[error("Wavefunction error: {0}")]
    Wavefunction(#[from] crate::wavefunction::WavefunctionError),
}
