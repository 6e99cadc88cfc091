//! Store error types
//!
//! Error taxonomy:
//! - `InvalidArgument` — wrong shape for a parameter
//! - `ModelAlreadyExists` — bulk definition targeting a defined model
//! - `UnknownModel` — operation against an undefined model
//! - `Validation` — a record failed its model's declaration
//! - `Unimplemented` — abstract contract method not overridden
//!
//! All errors surface synchronously at the point of detection; no
//! operation swallows an error or exposes a partial-success state.

use serde_json::Value;
use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by record store operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// A parameter had the wrong shape or type
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Bulk schema definition targeted an already-defined model.
    /// `define_model` is the sanctioned way to redefine one.
    #[error("Model '{0}' already exists; use define_model to redefine it")]
    ModelAlreadyExists(String),

    /// The named model is not defined
    #[error("Model '{0}' is not defined")]
    UnknownModel(String),

    /// A record in an insert batch failed its model's declaration
    #[error("Validation failed for record {index}: field '{field}' does not satisfy '{expression}'")]
    Validation {
        /// Position of the offending record within the insert batch
        index: usize,
        /// Field that failed the check
        field: String,
        /// Type expression the field was checked against
        expression: String,
        /// Offending value, if the field was present
        target: Option<Value>,
    },

    /// Abstract contract method invoked without a backend override
    #[error("Operation '{op}' is not implemented by this backend")]
    Unimplemented {
        /// Name of the unimplemented operation
        op: &'static str,
    },
}

impl StoreError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an unknown-model error.
    pub fn unknown_model(model: impl Into<String>) -> Self {
        Self::UnknownModel(model.into())
    }

    /// Create an unimplemented-operation error.
    pub fn unimplemented(op: &'static str) -> Self {
        Self::Unimplemented { op }
    }

    /// Maps a checker failure for the batch record at `index` into the
    /// store taxonomy. A malformed declaration is the caller's parameter
    /// problem, not the record's, so it maps to `InvalidArgument`.
    pub(crate) fn from_check(index: usize, err: SchemaError) -> Self {
        match err {
            SchemaError::Parse { .. } => {
                Self::InvalidArgument(format!("malformed declaration: {}", err))
            }
            SchemaError::Mismatch(failure) => Self::Validation {
                index,
                field: failure.field,
                expression: failure.expression,
                target: failure.target,
            },
        }
    }
}
