//! In-memory record store backend
//!
//! One `MemoryStore` owns, per model, a declaration string and an ordered
//! `Vec` of records. Both maps are created together at definition time and
//! live for the store's lifetime; there is no model deletion.
//!
//! Not thread-safe: external synchronization is required for concurrent
//! mutation. Every operation runs to completion synchronously, so no call
//! ever observes a torn state from another.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, trace};

use crate::schema::{DeclarationChecker, TypeChecker};

use super::args::{Documents, Filters};
use super::backend::RecordStore;
use super::errors::{StoreError, StoreResult};

/// The in-memory backend of the `RecordStore` contract.
pub struct MemoryStore {
    /// Declaration checker the insert path validates through
    checker: Box<dyn TypeChecker>,
    /// Model name -> normalized declaration string
    schema: BTreeMap<String, String>,
    /// Model name -> records in insertion order
    data: BTreeMap<String, Vec<Value>>,
}

impl MemoryStore {
    /// Creates an empty store using the shipped declaration checker.
    pub fn new() -> Self {
        Self::with_checker(Box::new(DeclarationChecker))
    }

    /// Creates an empty store validating through a custom checker.
    pub fn with_checker(checker: Box<dyn TypeChecker>) -> Self {
        Self {
            checker,
            schema: BTreeMap::new(),
            data: BTreeMap::new(),
        }
    }

    /// Returns the current schema map.
    pub fn schema(&self) -> &BTreeMap<String, String> {
        &self.schema
    }

    /// Returns the number of records stored under `model`, or `None` if
    /// the model has no record sequence.
    pub fn count(&self, model: &str) -> Option<usize> {
        self.data.get(model).map(Vec::len)
    }

    /// Collects the positions of all records under `model` matching the
    /// filter set. Shared scan phase of update and delete; mutation happens
    /// only after the scan completes, so positions stay stable.
    fn matching_indices(&self, model: &str, filters: &Filters) -> Vec<usize> {
        let records = self.data.get(model).map(Vec::as_slice).unwrap_or(&[]);
        records
            .iter()
            .enumerate()
            .filter(|&(_, record)| filters.matches(record, self))
            .map(|(index, _)| index)
            .collect()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryStore {
    fn define_schema(&mut self, structures: Value) -> StoreResult<BTreeMap<String, String>> {
        let entries = match structures {
            Value::Object(map) => map,
            Value::Array(_) => {
                return Err(StoreError::invalid_argument(
                    "structures must be an object, not an array",
                ));
            }
            other => {
                return Err(StoreError::invalid_argument(format!(
                    "structures must be an object, got {}",
                    json_type_name(&other)
                )));
            }
        };

        for (model, declaration) in entries {
            if self.schema.contains_key(&model) {
                return Err(StoreError::ModelAlreadyExists(model));
            }
            let declaration = declaration.as_str().ok_or_else(|| {
                StoreError::invalid_argument(format!(
                    "declaration for model '{}' must be a string, got {}",
                    model,
                    json_type_name(&declaration)
                ))
            })?;
            debug!(model = %model, "model defined");
            self.schema
                .insert(model.clone(), normalize_declaration(declaration).to_string());
            self.data.entry(model).or_default();
        }

        Ok(self.schema.clone())
    }

    fn define_model(&mut self, model: &str, declaration: &str) -> StoreResult<()> {
        let redefined = self
            .schema
            .insert(model.to_string(), normalize_declaration(declaration).to_string())
            .is_some();
        // Records survive a redefinition; only a brand-new model gets an
        // empty sequence.
        self.data.entry(model.to_string()).or_default();
        debug!(model, redefined, "model defined");
        Ok(())
    }

    fn insert(&mut self, model: &str, documents: Documents) -> StoreResult<(usize, usize)> {
        let declaration = self
            .schema
            .get(model)
            .ok_or_else(|| StoreError::unknown_model(model))?
            .clone();

        let batch = documents.into_inner();

        // Validation pass first: either every candidate passes or nothing
        // is appended.
        for (index, candidate) in batch.iter().enumerate() {
            if !candidate.is_object() {
                return Err(StoreError::invalid_argument(format!(
                    "insert item {} must be an object, got {}",
                    index,
                    json_type_name(candidate)
                )));
            }
            self.checker
                .check(candidate, &declaration)
                .map_err(|err| StoreError::from_check(index, err))?;
        }

        let records = self.data.entry(model.to_string()).or_default();
        let before = records.len();
        records.extend(batch);
        let after = records.len();

        debug!(model, before, after, "insert");
        Ok((before, after))
    }

    fn select(&self, model: &str, filters: Filters) -> StoreResult<Vec<Value>> {
        if !self.schema.contains_key(model) {
            return Err(StoreError::unknown_model(model));
        }

        let records = self.data.get(model).map(Vec::as_slice).unwrap_or(&[]);
        let selected: Vec<Value> = records
            .iter()
            .filter(|&record| filters.matches(record, self))
            .cloned()
            .collect();

        trace!(model, matched = selected.len(), "select");
        Ok(selected)
    }

    fn update(&mut self, model: &str, filters: Filters, replacement: Value) -> StoreResult<Vec<usize>> {
        // Existence is checked against the record collection here, not the
        // schema map; see the contract notes on the trait.
        if !self.data.contains_key(model) {
            return Err(StoreError::unknown_model(model));
        }

        let modified = self.matching_indices(model, &filters);

        let records = self
            .data
            .get_mut(model)
            .ok_or_else(|| StoreError::unknown_model(model))?;
        for &index in &modified {
            records[index] = replacement.clone();
        }

        debug!(model, modified = modified.len(), "update");
        Ok(modified)
    }

    fn delete(&mut self, model: &str, filters: Filters) -> StoreResult<Vec<usize>> {
        if !self.data.contains_key(model) {
            return Err(StoreError::unknown_model(model));
        }

        let removed = self.matching_indices(model, &filters);

        let records = self
            .data
            .get_mut(model)
            .ok_or_else(|| StoreError::unknown_model(model))?;
        // Remove one element per index, highest first, so pending indices
        // are not shifted by earlier removals.
        for &index in removed.iter().rev() {
            records.remove(index);
        }

        debug!(model, removed = removed.len(), "delete");
        Ok(removed)
    }
}

/// Strips leading whitespace, then trailing whitespace and statement
/// separators, before a declaration is stored.
fn normalize_declaration(raw: &str) -> &str {
    raw.trim_start()
        .trim_end_matches(|c: char| c == ';' || c.is_whitespace())
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "number"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
