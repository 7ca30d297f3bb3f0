use std::collections::BTreeMap;

use tokio::sync::Mutex;

use crate::error::StorageError;
use crate::store::{BoxFuture, KvStore};

/// In-process store. Contents are lost when it is dropped.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<BTreeMap<String, BTreeMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection.
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .await
            .get(collection)
            .map_or(0, |docs| docs.len())
    }
}

impl KvStore for MemoryStore {
    fn get<'a>(
        &'a self,
        collection: &'a str,
        id: &'a str,
    ) -> BoxFuture<'a, Result<Vec<u8>, StorageError>> {
        Box::pin(async move {
            self.collections
                .lock()
                .await
                .get(collection)
                .and_then(|docs| docs.get(id))
                .cloned()
                .ok_or_else(|| StorageError::not_found(collection, id))
        })
    }

    fn list<'a>(
        &'a self,
        collection: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Vec<u8>>, StorageError>> {
        Box::pin(async move {
            Ok(self
                .collections
                .lock()
                .await
                .get(collection)
                .map(|docs| docs.values().cloned().collect())
                .unwrap_or_default())
        })
    }

    fn put<'a>(
        &'a self,
        collection: &'a str,
        id: &'a str,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            self.collections
                .lock()
                .await
                .entry(collection.to_string())
                .or_default()
                .insert(id.to_string(), body);
            Ok(())
        })
    }
}
