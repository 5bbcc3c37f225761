//! Document store over a raw key/value storage backend.
//!
//! Documents are JSON objects addressed by `(collection, id)` and stored under
//! `<prefix>/<collection>/<id>.json`. Each collection also carries an index
//! document at `<prefix>/<collection>/_index.json` holding the ordered list of
//! member ids, since the backends have no query capability of their own.
//!
//! Nothing here is transactional: index maintenance is a plain
//! read-modify-write and concurrent writers to the same key race with
//! last-writer-wins semantics.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;

const INDEX_DOCUMENT: &str = "_index";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage backend error for {key}: {message}")]
    Backend { key: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn backend(key: &str, message: impl ToString) -> Self {
        StoreError::Backend {
            key: key.to_string(),
            message: message.to_string(),
        }
    }
}

/// Raw key/value persistence of JSON values.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Short name used in startup logs.
    fn name(&self) -> &'static str;

    /// Read the value stored under `key`, `None` when nothing is stored.
    async fn read(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Overwrite the value stored under `key`.
    async fn write(&self, key: &str, value: &Value) -> Result<(), StoreError>;

    /// Store `value` only if `key` is vacant. Returns `false` when the key
    /// was already taken.
    async fn write_if_absent(&self, key: &str, value: &Value) -> Result<bool, StoreError>;
}

#[derive(Clone)]
pub struct DocumentStore {
    backend: Arc<dyn StorageBackend>,
    prefix: String,
}

impl DocumentStore {
    pub fn new(backend: Arc<dyn StorageBackend>, prefix: &str) -> Self {
        Self {
            backend,
            prefix: prefix.trim_matches('/').to_string(),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn document_key(&self, collection: &str, id: &str) -> String {
        if self.prefix.is_empty() {
            format!("{}/{}.json", collection, id)
        } else {
            format!("{}/{}/{}.json", self.prefix, collection, id)
        }
    }

    pub fn index_key(&self, collection: &str) -> String {
        self.document_key(collection, INDEX_DOCUMENT)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<T>, StoreError> {
        let key = self.document_key(collection, id);
        match self.backend.read(&key).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Full overwrite of the document, no partial update.
    pub async fn put<T: Serialize>(
        &self,
        collection: &str,
        id: &str,
        document: &T,
    ) -> Result<(), StoreError> {
        let key = self.document_key(collection, id);
        let value = serde_json::to_value(document)?;
        self.backend.write(&key, &value).await
    }

    /// Create the document only if nothing is stored under its key yet.
    pub async fn put_if_absent<T: Serialize>(
        &self,
        collection: &str,
        id: &str,
        document: &T,
    ) -> Result<bool, StoreError> {
        let key = self.document_key(collection, id);
        let value = serde_json::to_value(document)?;
        self.backend.write_if_absent(&key, &value).await
    }

    /// Ids listed in the collection index, empty when no index exists yet.
    pub async fn list_ids(&self, collection: &str) -> Result<Vec<String>, StoreError> {
        let key = self.index_key(collection);
        match self.backend.read(&key).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    pub async fn add_to_index(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let mut ids = self.list_ids(collection).await?;
        if !ids.iter().any(|existing| existing == id) {
            ids.push(id.to_string());
        }
        self.write_index(collection, &ids).await
    }

    pub async fn remove_from_index(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let mut ids = self.list_ids(collection).await?;
        ids.retain(|existing| existing != id);
        self.write_index(collection, &ids).await
    }

    /// Fetch every document listed in the collection index.
    ///
    /// Index entries whose document is gone or does not decode are skipped,
    /// so one bad document cannot hide the rest of the collection.
    pub async fn get_all<T: DeserializeOwned>(
        &self,
        collection: &str,
    ) -> Result<Vec<T>, StoreError> {
        let ids = self.list_ids(collection).await?;
        let mut documents = Vec::with_capacity(ids.len());

        for id in ids {
            let key = self.document_key(collection, &id);
            let Some(value) = self.backend.read(&key).await? else {
                log::warn!("Index of {} lists missing document {}", collection, id);
                continue;
            };

            match serde_json::from_value(value) {
                Ok(document) => documents.push(document),
                Err(e) => log::warn!("Skipping undecodable document {}: {}", key, e),
            }
        }

        Ok(documents)
    }

    async fn write_index(&self, collection: &str, ids: &[String]) -> Result<(), StoreError> {
        let key = self.index_key(collection);
        let value = serde_json::to_value(ids)?;
        self.backend.write(&key, &value).await
    }
}
