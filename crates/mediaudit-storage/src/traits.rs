//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must
//! implement. Backends must be safe for concurrent read-only use: the
//! runner issues head calls from multiple tasks against one shared client.

use async_trait::async_trait;
use thiserror::Error;

use mediaudit_core::ObjectMeta;

/// Storage operation errors
///
/// `NotFound` is the only classification the checker treats specially;
/// every other variant means the store could not be asked and the asset
/// stays unverified.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Read-only object metadata lookup.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Fetch existence and byte size for a storage key without
    /// transferring content. Absent objects return `StorageError::NotFound`.
    async fn head_object(&self, storage_key: &str) -> StorageResult<ObjectMeta>;
}
