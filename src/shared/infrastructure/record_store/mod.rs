use crate::shared::core::record::Record;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("record not found with key: {key}")]
    NotFound { key: String },

    #[error("record already exists with id: {id}")]
    Duplicate { id: i64 },
}

impl StoreError {
    pub fn not_found(key: impl ToString) -> Self {
        StoreError::NotFound {
            key: key.to_string(),
        }
    }
}

#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> Vec<R>;

    async fn find_by_key(&self, key: &str) -> Result<R, StoreError>;

    async fn insert(&self, record: R) -> Result<R, StoreError>;

    async fn full_update(&self, record: R) -> Result<R, StoreError>;

    async fn partial_update(&self, patch: R::Patch) -> Result<R, StoreError>;

    /// Removes the record with `id` and returns it.
    async fn delete(&self, id: i64) -> Result<R, StoreError>;

    async fn len(&self) -> usize;
}

pub mod in_memory;
