//! Abstract record store contract
//!
//! The full operation set lives on one trait so alternative backends
//! (persistent, networked) stay polymorphic with the in-memory one.
//! Every method defaults to `Unimplemented`, letting a backend adopt the
//! contract incrementally and still be used as a `dyn RecordStore`.

use std::collections::BTreeMap;

use serde_json::Value;

use super::args::{Documents, Filters};
use super::errors::{StoreError, StoreResult};

/// The record store capability: schema definition plus predicate-driven
/// CRUD over per-model record sequences.
///
/// Predicates receive the store itself as a `&dyn RecordStore` handle, so
/// a filter may consult other models while matching.
pub trait RecordStore {
    /// Defines several models at once. Never overwrites: an entry naming
    /// an existing model fails the call with `ModelAlreadyExists`.
    ///
    /// `structures` must be a JSON object mapping model names to
    /// declaration strings. Returns the full schema map on success.
    fn define_schema(&mut self, structures: Value) -> StoreResult<BTreeMap<String, String>> {
        let _ = structures;
        Err(StoreError::unimplemented("define_schema"))
    }

    /// Defines or redefines a single model. Unconditionally overwrites any
    /// existing declaration; records already stored under the model survive.
    fn define_model(&mut self, model: &str, declaration: &str) -> StoreResult<()> {
        let _ = (model, declaration);
        Err(StoreError::unimplemented("define_model"))
    }

    /// Validates and appends a batch of records. All-or-nothing: if any
    /// record fails validation, nothing is appended. Returns the sequence
    /// length immediately before and after the appends.
    fn insert(&mut self, model: &str, documents: Documents) -> StoreResult<(usize, usize)> {
        let _ = (model, documents);
        Err(StoreError::unimplemented("insert"))
    }

    /// Returns clones of the records matching all predicates, in their
    /// stored relative order. Never exposes or mutates the backing sequence.
    fn select(&self, model: &str, filters: Filters) -> StoreResult<Vec<Value>> {
        let _ = (model, filters);
        Err(StoreError::unimplemented("select"))
    }

    /// Replaces every matching record with `replacement` (whole-record
    /// replacement, not a merge; all matches end up holding the same
    /// value). Returns the ascending list of replaced positions.
    ///
    /// `replacement` is not validated against the model's declaration.
    fn update(&mut self, model: &str, filters: Filters, replacement: Value) -> StoreResult<Vec<usize>> {
        let _ = (model, filters, replacement);
        Err(StoreError::unimplemented("update"))
    }

    /// Removes every matching record. Returns the ascending list of removed
    /// positions, as they stood before any removal.
    fn delete(&mut self, model: &str, filters: Filters) -> StoreResult<Vec<usize>> {
        let _ = (model, filters);
        Err(StoreError::unimplemented("delete"))
    }
}
