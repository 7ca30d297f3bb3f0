use std::future::Future;
use std::pin::Pin;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Flat key-value persistence, one namespace per collection.
///
/// Implemented by [`crate::memory::MemoryStore`] for tests and
/// [`crate::fs::FileStore`] for on-disk data. Bodies are opaque bytes; the
/// typed helpers in [`crate::documents`] handle JSON.
pub trait KvStore: Send + Sync {
    /// Fetch one document. Missing ids are `StorageError::NotFound`.
    fn get<'a>(
        &'a self,
        collection: &'a str,
        id: &'a str,
    ) -> BoxFuture<'a, Result<Vec<u8>, StorageError>>;

    /// All documents in a collection, ordered by id.
    fn list<'a>(&'a self, collection: &'a str) -> BoxFuture<'a, Result<Vec<Vec<u8>>, StorageError>>;

    /// Insert or overwrite a document.
    fn put<'a>(
        &'a self,
        collection: &'a str,
        id: &'a str,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<(), StorageError>>;
}
