//! # Error Types
//!
//! Structured error types for footing_core. These errors are designed to be
//! informative for both humans and tooling, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use footing_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_1: f64) -> CalcResult<()> {
//!     if length_1 <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "length_1".to_string(),
//!             value: length_1.to_string(),
//!             reason: "Footing length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for footing_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// An element needs a local coordinates system that was never attached
    #[error("Missing coordinates system: {element} has no local coordinates system attached")]
    MissingCoordinatesSystem { element: String },

    /// Index lookup outside of a coordinates system's locations
    #[error("Location not found: index {index} out of range (system holds {len} locations)")]
    LocationNotFound { index: usize, len: usize },

    /// Reinforcement layer id not present
    #[error("Reinforcement layer not found: id {id}")]
    LayerNotFound { id: u32 },

    /// Reinforcement has no layers to aggregate
    #[error("Empty reinforcement: can't complete {operation}")]
    EmptyReinforcement { operation: String },

    /// Calculation failed (section insufficient, degenerate geometry, etc.)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a MissingCoordinatesSystem error
    pub fn missing_coordinates_system(element: impl Into<String>) -> Self {
        CalcError::MissingCoordinatesSystem {
            element: element.into(),
        }
    }

    /// Create an EmptyReinforcement error
    pub fn empty_reinforcement(operation: impl Into<String>) -> Self {
        CalcError::EmptyReinforcement {
            operation: operation.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Configuration errors are fatal; only file access may succeed on retry
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::MissingCoordinatesSystem { .. } => "MISSING_COORDINATES_SYSTEM",
            CalcError::LocationNotFound { .. } => "LOCATION_NOT_FOUND",
            CalcError::LayerNotFound { .. } => "LAYER_NOT_FOUND",
            CalcError::EmptyReinforcement { .. } => "EMPTY_REINFORCEMENT",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}
