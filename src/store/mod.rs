// Copyright (c) 2025 - Cowboy AI, Inc.
//! Record store abstraction
//!
//! The remote collection is a flat, schemaless document store addressed
//! over HTTP: one collection, opaque string ids, JSON bodies, no joins, no
//! transactions, no server-side filtering. This module defines the seam
//! the rest of the crate talks through and its two implementations:
//!
//! - [`HttpRecordStore`]: the real client (Firebase RTDB REST dialect)
//! - [`MemoryRecordStore`]: an in-process stand-in with the same observable
//!   semantics, used by tests, demos, and offline runs
//!
//! Records cross this boundary as raw `serde_json::Value`; normalization
//! happens above, in `domain::normalize`.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::errors::CatalogResult;

mod http;
mod memory;

pub use http::HttpRecordStore;
pub use memory::MemoryRecordStore;

/// Raw id-keyed collection snapshot as returned by a list call
pub type RawRecords = Map<String, Value>;

/// CRUD seam over the remote document collection
///
/// Implementations perform no validation or normalization; they move raw
/// JSON and surface transport-level failures as typed errors. Writes are
/// single-document and unconditional: there is no locking primitive, and
/// read-modify-write callers inherit the lost-update hazard documented on
/// the mutation coordinator.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch the whole collection as an id-keyed map
    ///
    /// An empty collection yields an empty map, not an error.
    async fn list(&self) -> CatalogResult<RawRecords>;

    /// Fetch a single record, `None` when the id does not exist
    async fn get(&self, id: &str) -> CatalogResult<Option<Value>>;

    /// Create a record; the store mints and returns the new id
    async fn create(&self, record: Value) -> CatalogResult<String>;

    /// Merge the given top-level fields into a record
    ///
    /// Fields absent from `fields` are left untouched; a field set to JSON
    /// `null` is removed, per the store dialect.
    async fn patch(&self, id: &str, fields: Value) -> CatalogResult<()>;

    /// Replace a record wholesale
    async fn put(&self, id: &str, record: Value) -> CatalogResult<()>;

    /// Delete a record; deleting an absent id succeeds
    async fn delete(&self, id: &str) -> CatalogResult<()>;
}
