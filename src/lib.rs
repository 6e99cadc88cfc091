//! memodb - a strict, minimal, in-memory schema-validated record store
//!
//! Callers define named models with declarative field-type schemas, then
//! insert, select, update, and delete JSON records against them with
//! predicate-based filtering. No persistence, no network layer.

pub mod schema;
pub mod store;
