//! Schema error types for the declaration checker
//!
//! Two failure classes:
//! - `Parse` — the declaration string itself is malformed
//! - `Mismatch` — the record does not satisfy a well-formed declaration
//!
//! A `Mismatch` carries the structured detail a caller needs to act on:
//! the field name, the type expression it failed, and the offending value
//! when one was present.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Structured detail for a failed type check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckFailure {
    /// Field name that failed the check ("$root" for a non-object record)
    pub field: String,
    /// Type expression the field was checked against, as written
    pub expression: String,
    /// Offending value, if the field was present
    pub target: Option<Value>,
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Some(value) => write!(
                f,
                "field '{}' does not satisfy '{}' (got {})",
                self.field, self.expression, value
            ),
            None => write!(f, "field '{}' is missing (expected '{}')", self.field, self.expression),
        }
    }
}

/// Errors produced by declaration parsing and record checking
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SchemaError {
    /// Declaration string is malformed
    #[error("Malformed declaration at offset {position}: {message}")]
    Parse {
        /// Byte offset of the failing segment within the declaration
        position: usize,
        /// What was wrong with it
        message: String,
    },

    /// Record does not satisfy the declaration
    #[error("Type check failed: {0}")]
    Mismatch(CheckFailure),
}

impl SchemaError {
    /// Create a parse error for the segment starting at `position`.
    pub fn parse(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }

    /// Create a mismatch error for a field and its type expression.
    pub fn mismatch(
        field: impl Into<String>,
        expression: impl Into<String>,
        target: Option<Value>,
    ) -> Self {
        Self::Mismatch(CheckFailure {
            field: field.into(),
            expression: expression.into(),
            target,
        })
    }

    /// Returns the check failure detail, if this is a mismatch.
    pub fn failure(&self) -> Option<&CheckFailure> {
        match self {
            Self::Mismatch(failure) => Some(failure),
            Self::Parse { .. } => None,
        }
    }
}
