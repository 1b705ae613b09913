//! # Error Types
//!
//! Structured error types for edu_core. The geometry engine itself never
//! errors (degenerate input propagates as NaN, see [`crate::geometry`]);
//! these types cover the persistence layer and interactive input validation.
//!
//! ## Example
//!
//! ```rust
//! use edu_core::errors::{EduError, EduResult};
//!
//! fn validate_side(side: f64) -> EduResult<()> {
//!     if side <= 0.0 {
//!         return Err(EduError::invalid_input(
//!             "side",
//!             side.to_string(),
//!             "El lado debe ser positivo",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for edu_core operations
pub type EduResult<T> = Result<T, EduError>;

/// Structured error type for edu_core operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by the UI layer.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EduError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Progress file I/O error
    #[error("Storage error: {operation} on '{path}' - {reason}")]
    StorageError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl EduError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EduError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a StorageError
    pub fn storage_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EduError::StorageError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EduError::InvalidInput { .. } => "INVALID_INPUT",
            EduError::StorageError { .. } => "STORAGE_ERROR",
            EduError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
