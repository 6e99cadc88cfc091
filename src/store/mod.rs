//! Record store subsystem for memodb
//!
//! Per-model schemas plus predicate-driven CRUD over ordered record
//! sequences. The abstract contract lives on the `RecordStore` trait;
//! `MemoryStore` is the shipped in-memory backend.
//!
//! # Invariants
//!
//! - Model names are unique; bulk definition never overwrites
//! - Insert validates the whole batch before appending anything
//! - Select never mutates and never exposes the backing sequence
//! - Update and delete compute positions on a full scan, then mutate
//! - Record identity is purely positional

mod args;
mod backend;
mod errors;
mod memory;

pub use args::{Documents, Filters, Predicate};
pub use backend::RecordStore;
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
