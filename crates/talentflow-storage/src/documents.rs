use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::store::KvStore;

/// Load one JSON document.
pub async fn load<T: DeserializeOwned>(
    store: &dyn KvStore,
    collection: &str,
    id: &str,
) -> Result<T, StorageError> {
    let body = store.get(collection, id).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Load every document in a collection.
pub async fn load_all<T: DeserializeOwned>(
    store: &dyn KvStore,
    collection: &str,
) -> Result<Vec<T>, StorageError> {
    store
        .list(collection)
        .await?
        .iter()
        .map(|body| serde_json::from_slice(body).map_err(StorageError::from))
        .collect()
}

/// Save one JSON document, overwriting any previous version.
pub async fn save<T: Serialize>(
    store: &dyn KvStore,
    collection: &str,
    id: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    store.put(collection, id, body).await
}
