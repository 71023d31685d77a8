use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::traits::{Storage, StorageError, StorageResult};
use mediaudit_core::ObjectMeta;

/// In-process storage backend holding only key -> size metadata.
///
/// Used by tests and dry runs; never talks to a network. Keys can be marked
/// unavailable to exercise the non-not-found error path.
#[derive(Default)]
pub struct MemoryStorage {
    objects: RwLock<HashMap<String, u64>>,
    unavailable: RwLock<HashSet<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an object with the given byte size.
    pub fn insert(&self, storage_key: impl Into<String>, size_bytes: u64) {
        self.objects
            .write()
            .expect("memory storage lock poisoned")
            .insert(storage_key.into(), size_bytes);
    }

    /// Make head calls for this key fail with a backend error instead of
    /// not-found.
    pub fn set_unavailable(&self, storage_key: impl Into<String>) {
        self.unavailable
            .write()
            .expect("memory storage lock poisoned")
            .insert(storage_key.into());
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn head_object(&self, storage_key: &str) -> StorageResult<ObjectMeta> {
        if self
            .unavailable
            .read()
            .expect("memory storage lock poisoned")
            .contains(storage_key)
        {
            return Err(StorageError::BackendError(format!(
                "backend unavailable: {}",
                storage_key
            )));
        }

        match self
            .objects
            .read()
            .expect("memory storage lock poisoned")
            .get(storage_key)
        {
            Some(&size_bytes) => Ok(ObjectMeta { size_bytes }),
            None => Err(StorageError::NotFound(storage_key.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_head_present_object() {
        let storage = MemoryStorage::new();
        storage.insert("videos/a.mp4", 5000);

        let meta = storage.head_object("videos/a.mp4").await.unwrap();
        assert_eq!(meta.size_bytes, 5000);
    }

    #[tokio::test]
    async fn test_head_absent_object_is_not_found() {
        let storage = MemoryStorage::new();
        let err = storage.head_object("videos/missing.mp4").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unavailable_key_is_backend_error() {
        let storage = MemoryStorage::new();
        storage.insert("videos/a.mp4", 5000);
        storage.set_unavailable("videos/a.mp4");

        let err = storage.head_object("videos/a.mp4").await.unwrap_err();
        assert!(matches!(err, StorageError::BackendError(_)));
    }
}
