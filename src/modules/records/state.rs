use crate::shared::core::record::Record;
use crate::shared::inbound::response::ResponseStyle;
use crate::shared::infrastructure::record_store::RecordStore;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use std::sync::Arc;

/// Handler state for one record resource.
pub struct RecordsState<R: Record> {
    pub store: Arc<dyn RecordStore<R>>,
    pub style: ResponseStyle,
}

impl<R: Record> Clone for RecordsState<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            style: self.style,
        }
    }
}

impl<R: Record> RecordsState<R> {
    pub fn new(store: Arc<dyn RecordStore<R>>, style: ResponseStyle) -> Self {
        Self { store, style }
    }

    pub fn in_memory(seed: Vec<R>, style: ResponseStyle) -> Self {
        Self::new(Arc::new(InMemoryRecordStore::seeded(seed)), style)
    }
}
