use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use super::store::{StorageBackend, StoreError};

/// Process-local storage used when no object store is configured.
///
/// Contents live for the lifetime of the process only.
#[derive(Default)]
pub struct MemoryBackend {
    objects: RwLock<HashMap<String, Value>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the raw value stored under `key`.
    pub fn snapshot(&self, key: &str) -> Option<Value> {
        self.objects
            .read()
            .ok()
            .and_then(|objects| objects.get(key).cloned())
    }

    /// Store a raw value, bypassing document serialization.
    pub fn insert_raw(&self, key: &str, value: Value) {
        if let Ok(mut objects) = self.objects.write() {
            objects.insert(key.to_string(), value);
        }
    }

    pub fn len(&self) -> usize {
        self.objects.read().map(|objects| objects.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned(key: &str) -> StoreError {
    StoreError::backend(key, "in-memory store lock poisoned")
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn read(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let objects = self.objects.read().map_err(|_| poisoned(key))?;
        Ok(objects.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let mut objects = self.objects.write().map_err(|_| poisoned(key))?;
        objects.insert(key.to_string(), value.clone());
        Ok(())
    }

    async fn write_if_absent(&self, key: &str, value: &Value) -> Result<bool, StoreError> {
        let mut objects = self.objects.write().map_err(|_| poisoned(key))?;
        if objects.contains_key(key) {
            return Ok(false);
        }
        objects.insert(key.to_string(), value.clone());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_read_write_roundtrip() {
        let backend = MemoryBackend::new();
        assert!(backend.is_empty());
        assert_eq!(backend.read("a/b.json").await.unwrap(), None);

        backend.write("a/b.json", &json!({"x": 1})).await.unwrap();
        assert_eq!(backend.read("a/b.json").await.unwrap(), Some(json!({"x": 1})));
        assert_eq!(backend.len(), 1);
    }

    #[tokio::test]
    async fn test_write_if_absent_does_not_overwrite() {
        let backend = MemoryBackend::new();
        assert!(backend.write_if_absent("k", &json!(1)).await.unwrap());
        assert!(!backend.write_if_absent("k", &json!(2)).await.unwrap());
        assert_eq!(backend.snapshot("k"), Some(json!(1)));
    }

    #[test]
    fn test_name() {
        assert_eq!(MemoryBackend::new().name(), "memory");
    }
}
