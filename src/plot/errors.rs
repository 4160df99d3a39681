/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for figure rendering

use thiserror::Error;

/// Result type for plotting
pub type Result<T> = std::result::Result<T, PlotError>;

/// Error type for plotting operations
#[derive(Error, Debug)]
pub enum PlotError {
    /// Failure reported by the drawing backend
    #[error("Drawing error: {0}")]
    Drawing(String),

    /// Color scale with an empty or non-finite range
    #[error("Invalid color scale: {0}")]
    InvalidScale(String),

    /// Propagation of error from grid module
    #[error("Grid error: {0}")]
    Grid(#[from] crate::grid::GridError),

    /// Propagation of error from wavefunction module
    #[error("Wavefunction error: {0}")]
    Wavefunction(#[from] crate::wavefunction::WavefunctionError),

    /// Output directory could not be prepared
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convert a plotters error into a [`PlotError`]
pub(crate) fn drawing_error<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Drawing(err.to_string())
}
