//! Declaration checking subsystem for memodb
//!
//! The store validates records against per-model declaration strings
//! ("name:string;priority:integer"). This subsystem owns that concern:
//! the declaration grammar, its parser, and the `TypeChecker` capability
//! the store calls through.
//!
//! # Design Principles
//!
//! - Checking happens before any mutation
//! - Checking is deterministic and side-effect free
//! - No coercion, no defaults
//! - Failures carry the field, the expression, and the offending value

mod checker;
mod errors;
mod parser;
mod types;

pub use checker::{DeclarationChecker, TypeChecker};
pub use errors::{CheckFailure, SchemaError, SchemaResult};
pub use parser::parse_declaration;
pub use types::{Declaration, FieldDecl, FieldType};
