//! Error types for the pawcalc_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for pawcalc_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A weight, age or multiplier that cannot be used for arithmetic
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unknown breed slug
    #[error("Not found: {0}")]
    NotFound(String),

    /// A result was requested before the wizard reached its results step
    #[error("Calculation incomplete: {0}")]
    Incomplete(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Breed registry validation error
    #[error("Registry validation error: {0}")]
    RegistryValidation(String),
}
