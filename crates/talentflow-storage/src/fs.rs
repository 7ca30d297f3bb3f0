use std::io::ErrorKind;
use std::path::PathBuf;

use talentflow_core::keys;

use crate::error::StorageError;
use crate::store::{BoxFuture, KvStore};

/// Stores each document as `{root}/{collection}/{id}.json`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, collection: &str, id: &str) -> PathBuf {
        self.root.join(keys::document(collection, id))
    }
}

impl KvStore for FileStore {
    fn get<'a>(
        &'a self,
        collection: &'a str,
        id: &'a str,
    ) -> BoxFuture<'a, Result<Vec<u8>, StorageError>> {
        Box::pin(async move {
            let path = self.path(collection, id);
            match tokio::fs::read(&path).await {
                Ok(body) => {
                    tracing::debug!(path = %path.display(), "document read");
                    Ok(body)
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    Err(StorageError::not_found(collection, id))
                }
                Err(source) => Err(StorageError::Read {
                    key: keys::document(collection, id),
                    source,
                }),
            }
        })
    }

    fn list<'a>(
        &'a self,
        collection: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Vec<u8>>, StorageError>> {
        Box::pin(async move {
            let dir = self.root.join(collection);
            let list_err = |source: std::io::Error| StorageError::List {
                collection: collection.to_string(),
                source,
            };

            let mut entries = match tokio::fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
                Err(e) => return Err(list_err(e)),
            };

            let mut paths = Vec::new();
            while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "json") {
                    paths.push(path);
                }
            }
            paths.sort();

            let mut bodies = Vec::with_capacity(paths.len());
            for path in &paths {
                let body = tokio::fs::read(path).await.map_err(|source| StorageError::Read {
                    key: path.display().to_string(),
                    source,
                })?;
                bodies.push(body);
            }

            tracing::debug!(collection, count = bodies.len(), "collection listed");
            Ok(bodies)
        })
    }

    fn put<'a>(
        &'a self,
        collection: &'a str,
        id: &'a str,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            let path = self.path(collection, id);
            let write_err = |source: std::io::Error| StorageError::Write {
                key: keys::document(collection, id),
                source,
            };

            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
            }

            // Write to a temp file then rename so readers never see a torn document
            let tmp_path = path.with_extension("json.tmp");
            tokio::fs::write(&tmp_path, &body).await.map_err(write_err)?;
            tokio::fs::rename(&tmp_path, &path).await.map_err(write_err)?;

            tracing::debug!(path = %path.display(), "document written");
            Ok(())
        })
    }
}
