use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use snip_core::error::{Result, StoreError};
use snip_core::{Alias, RecordId, UrlDeleter, UrlGetter, UrlSaver};
use std::sync::atomic::{AtomicI64, Ordering};

/// In-memory implementation of the store contract using DashMap.
///
/// Check-and-insert goes through DashMap's entry API, which holds the shard
/// lock for the key for the whole operation, so two saves of the same alias
/// cannot both succeed.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: DashMap<String, String>,
    last_id: AtomicI64,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl UrlSaver for InMemoryStore {
    async fn save_url(&self, target_url: &str, alias: &Alias) -> Result<RecordId> {
        match self.records.entry(alias.as_str().to_owned()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists(alias.to_string())),
            Entry::Vacant(slot) => {
                let id = RecordId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
                slot.insert(target_url.to_owned());
                Ok(id)
            }
        }
    }
}

#[async_trait]
impl UrlGetter for InMemoryStore {
    async fn get_url(&self, alias: &Alias) -> Result<String> {
        self.records
            .get(alias.as_str())
            .map(|target_url| target_url.clone())
            .ok_or_else(|| StoreError::NotFound(alias.to_string()))
    }
}

#[async_trait]
impl UrlDeleter for InMemoryStore {
    async fn delete_url(&self, alias: &Alias) -> Result<()> {
        self.records
            .remove(alias.as_str())
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(alias.to_string()))
    }
}
