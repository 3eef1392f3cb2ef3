//! Error types for insured-registry.
//!
//! Neither the registry nor the console treats these as fatal: an empty
//! registry and rejected input are both reported to the user and the menu
//! loop continues. Only configuration and I/O failures end the program.

use thiserror::Error;

/// The main error type for insured-registry operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Registry Errors ===
    /// The registry holds no insured persons.
    #[error("registry is empty")]
    EmptyRegistry,

    // === Input Errors ===
    /// User input was rejected by the console validators.
    #[error("invalid {field}: {message}")]
    Validation {
        /// Name of the field being read.
        field: &'static str,
        /// Message shown to the user.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Reading from or writing to the console failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for insured-registry operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new input validation error.
    #[must_use]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Check if this error signals an empty registry.
    #[must_use]
    pub fn is_empty_registry(&self) -> bool {
        matches!(self, Self::EmptyRegistry)
    }

    /// Check if this error is a rejected input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
