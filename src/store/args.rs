//! Argument normalization for store operations
//!
//! Every operation that accepts "one or many" — records for insert,
//! predicates for select/update/delete — normalizes to a sequence up
//! front so the operation body handles a single shape.

use serde_json::Value;

use super::backend::RecordStore;

/// A caller-supplied filter: side-effect-free test over a record and the
/// store handle. Never persisted.
pub type Predicate = Box<dyn Fn(&Value, &dyn RecordStore) -> bool>;

/// An insert payload, normalized to a batch.
///
/// A lone object becomes a one-element batch; a JSON array is taken as a
/// batch of its elements. Non-object elements are rejected by `insert`
/// itself, not here.
#[derive(Debug, Clone, Default)]
pub struct Documents(Vec<Value>);

impl Documents {
    /// Number of records in the batch
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the batch is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the batch, yielding the records in input order.
    pub fn into_inner(self) -> Vec<Value> {
        self.0
    }
}

impl From<Value> for Documents {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Documents(items),
            other => Documents(vec![other]),
        }
    }
}

impl From<Vec<Value>> for Documents {
    fn from(items: Vec<Value>) -> Self {
        Documents(items)
    }
}

/// A predicate set with AND semantics: a record matches only if every
/// predicate returns true. The empty set matches every record.
#[derive(Default)]
pub struct Filters {
    predicates: Vec<Predicate>,
}

impl Filters {
    /// A filter set that matches every record.
    pub fn any() -> Self {
        Self::default()
    }

    /// A single-predicate filter.
    pub fn one<F>(predicate: F) -> Self
    where
        F: Fn(&Value, &dyn RecordStore) -> bool + 'static,
    {
        Self {
            predicates: vec![Box::new(predicate)],
        }
    }

    /// A filter over an explicit predicate sequence.
    pub fn all(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }

    /// Adds one more predicate; the record must now satisfy this too.
    pub fn and<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Value, &dyn RecordStore) -> bool + 'static,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Number of predicates in the set
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// True if the set is empty (matches everything)
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Evaluates the conjunction for one record, short-circuiting on the
    /// first predicate that returns false.
    pub fn matches(&self, record: &Value, store: &dyn RecordStore) -> bool {
        self.predicates.iter().all(|predicate| predicate(record, store))
    }
}

impl std::fmt::Debug for Filters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filters").field("predicates", &self.predicates.len()).finish()
    }
}
