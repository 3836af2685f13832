//! # Error Types
//!
//! Structured error types for beam_core. Every failure the engine can produce
//! is a programmer-input error: inputs are validated at registration time and
//! propagated immediately, with no retry semantics.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{BeamError, BeamResult};
//!
//! fn validate_span(length: f64) -> BeamResult<()> {
//!     if length <= 0.0 {
//!         return Err(BeamError::invalid_input(
//!             "length",
//!             length.to_string(),
//!             "Beam length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Structured error type for beam analysis operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// An input value is invalid (non-positive beam constant, bad dimension, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A load or boundary-condition location falls outside its valid range
    #[error("'{field}' location {location} is outside the valid range [{min}, {max}]")]
    OutOfRange {
        field: String,
        location: f64,
        min: f64,
        max: f64,
    },

    /// The boundary-condition set cannot determine the two integration constants
    #[error("Boundary conditions cannot determine integration constants: {reason}")]
    InsufficientConstraints { reason: String },

    /// Angle/deflection constants were requested before a successful solve()
    #[error("Integration constants for {analysis} analysis requested before solve()")]
    NotSolved { analysis: String },
}

impl BeamError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BeamError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(field: impl Into<String>, location: f64, min: f64, max: f64) -> Self {
        BeamError::OutOfRange {
            field: field.into(),
            location,
            min,
            max,
        }
    }

    /// Create an InsufficientConstraints error
    pub fn insufficient_constraints(reason: impl Into<String>) -> Self {
        BeamError::InsufficientConstraints {
            reason: reason.into(),
        }
    }

    /// Create a NotSolved error
    pub fn not_solved(analysis: impl Into<String>) -> Self {
        BeamError::NotSolved {
            analysis: analysis.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::InvalidInput { .. } => "INVALID_INPUT",
            BeamError::OutOfRange { .. } => "OUT_OF_RANGE",
            BeamError::InsufficientConstraints { .. } => "INSUFFICIENT_CONSTRAINTS",
            BeamError::NotSolved { .. } => "NOT_SOLVED",
        }
    }
}
