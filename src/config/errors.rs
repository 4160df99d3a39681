/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for configuration loading

use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Error type for configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON for [`AppConfig`](super::AppConfig)
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration parses but describes an impossible figure
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
