//! # Storage Layer
//!
//! This module defines the storage abstraction for recz. The [`DataStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole collection in one JSON array file
//!   - Opened once per invocation, read-write, created if absent
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! A compact JSON array of record objects:
//!
//! ```text
//! [{"id":"1","email":"a@x.com","age":30}, ...]
//! ```
//!
//! An empty file decodes as an empty collection. Saves overwrite the full
//! contents (seek to start, truncate, write); there is no partial update.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface for collection storage.
///
/// The collection is always moved wholesale: `load` materializes every
/// record, `save` replaces the persisted contents completely.
pub trait DataStore {
    /// Load the full collection, preserving stored order.
    fn load(&mut self) -> Result<Vec<Record>>;

    /// Overwrite the persisted collection with `records`.
    fn save(&mut self, records: &[Record]) -> Result<()>;
}
