// In memory implementation of the RecordStore port.
//
// Purpose
// - Hold the process-wide dataset shared by every request.
//
// Responsibilities
// - Keep records in insertion order.
// - Serialise writers through a RwLock so concurrent requests never interleave a scan and a mutation.
// - Reject inserts whose id is already present.

use crate::shared::core::record::{Record, RecordPatch};
use crate::shared::infrastructure::record_store::{RecordStore, StoreError};
use tokio::sync::RwLock;

pub struct InMemoryRecordStore<R: Record> {
    records: RwLock<Vec<R>>,
}

impl<R: Record> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> InMemoryRecordStore<R> {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    pub fn seeded(records: Vec<R>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait::async_trait]
impl<R: Record> RecordStore<R> for InMemoryRecordStore<R> {
    async fn list(&self) -> Vec<R> {
        self.records.read().await.clone()
    }

    async fn find_by_key(&self, key: &str) -> Result<R, StoreError> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.matches_key(key))
            .cloned()
            .ok_or_else(|| StoreError::not_found(key))
    }

    async fn insert(&self, record: R) -> Result<R, StoreError> {
        let mut guard = self.records.write().await;
        if guard.iter().any(|r| r.id() == record.id()) {
            return Err(StoreError::Duplicate { id: record.id() });
        }
        tracing::debug!(resource = R::RESOURCE, id = record.id(), "record inserted");
        guard.push(record.clone());
        Ok(record)
    }

    async fn full_update(&self, record: R) -> Result<R, StoreError> {
        let mut guard = self.records.write().await;
        let id = record.id();
        let stored = guard
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(id))?;
        stored.replace_with(record);
        tracing::debug!(resource = R::RESOURCE, id, "record replaced");
        Ok(stored.clone())
    }

    async fn partial_update(&self, patch: R::Patch) -> Result<R, StoreError> {
        let mut guard = self.records.write().await;
        let id = patch.id();
        let stored = guard
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(id))?;
        stored.apply_patch(patch);
        tracing::debug!(resource = R::RESOURCE, id, "record patched");
        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> Result<R, StoreError> {
        let mut guard = self.records.write().await;
        let index = guard
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(id))?;
        tracing::debug!(resource = R::RESOURCE, id, "record deleted");
        Ok(guard.remove(index))
    }

    async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}
