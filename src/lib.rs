/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # hydrogen-orbitals
//!
//! Analytic wavefunctions and probability densities of hydrogen-like atoms,
//! together with the figures used to inspect them.
//!
//! The pipeline is linear: build a sampling grid, evaluate a closed-form
//! wavefunction at every point, normalize the density and render it.
//!
//! ```
//! use hydrogen_orbitals::wavefunction::RadialWavefunction;
//!
//! let r10 = RadialWavefunction::new(1, 0, 1.0, 1.0).unwrap();
//! assert!((r10.value(0.0) - 2.0).abs() < 1e-12);
//! ```

pub mod cli;
pub mod config;
pub mod grid;
pub mod plot;
pub mod utils;
pub mod wavefunction;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
