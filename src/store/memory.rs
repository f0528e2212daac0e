// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory record store
//!
//! Mirrors the observable semantics of the HTTP dialect (null-for-absent,
//! minted ids, merge-with-null-removes patches) so the coordinator and
//! facade can be exercised without a network. Used by the test suite and
//! the demo programs; also usable as an offline backend.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::{CatalogError, CatalogResult};

use super::{RawRecords, RecordStore};

/// In-process record store with the remote dialect's semantics
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    records: Arc<RwLock<RawRecords>>,
}

impl MemoryRecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with id-keyed records
    pub fn seeded(records: RawRecords) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Insert a record under a fixed id, replacing any existing one
    pub async fn seed_record(&self, id: impl Into<String>, record: Value) {
        self.records.write().await.insert(id.into(), record);
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// True when the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn list(&self) -> CatalogResult<RawRecords> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: &str) -> CatalogResult<Option<Value>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn create(&self, record: Value) -> CatalogResult<String> {
        let id = Uuid::new_v4().to_string();
        self.records.write().await.insert(id.clone(), record);
        Ok(id)
    }

    async fn patch(&self, id: &str, fields: Value) -> CatalogResult<()> {
        let fields = match fields {
            Value::Object(fields) => fields,
            other => {
                return Err(CatalogError::MalformedData(format!(
                    "patch body must be an object, got {other}"
                )))
            }
        };

        let mut records = self.records.write().await;
        let entry = records
            .entry(id.to_string())
            .or_insert_with(|| Value::Object(Default::default()));

        // a non-object record is overwritten wholesale, as the remote does
        if !entry.is_object() {
            *entry = Value::Object(Default::default());
        }
        if let Value::Object(target) = entry {
            for (key, value) in fields {
                if value.is_null() {
                    target.remove(&key);
                } else {
                    target.insert(key, value);
                }
            }
        }

        Ok(())
    }

    async fn put(&self, id: &str, record: Value) -> CatalogResult<()> {
        self.records.write().await.insert(id.to_string(), record);
        Ok(())
    }

    async fn delete(&self, id: &str) -> CatalogResult<()> {
        self.records.write().await.remove(id);
        Ok(())
    }
}
