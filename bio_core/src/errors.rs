//! # Error Types
//!
//! Structured error types for bio_core. The calculators themselves never
//! fail (degenerate divisors degrade to zero, see the calculation modules),
//! so the error surface is limited to exporting results.
//!
//! ## Example
//!
//! ```rust
//! use bio_core::errors::{CalcError, CalcResult};
//!
//! fn check(code: &str) -> CalcResult<()> {
//!     if code.is_empty() {
//!         return Err(CalcError::serialization("empty payload"));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bio_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for export operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by callers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// CSV or JSON encoding failed
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Export file could not be written
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },
}

impl CalcError {
    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
        }
    }
}
