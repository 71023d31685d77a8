use std::sync::Arc;

use crate::{MemoryStorage, S3Storage, Storage, StorageBackend, StorageError, StorageResult};
use mediaudit_core::AuditConfig;

/// Create a storage backend based on configuration
pub fn create_storage(config: &AuditConfig) -> StorageResult<Arc<dyn Storage>> {
    match config.storage_backend {
        StorageBackend::S3 => {
            let bucket = config
                .s3_bucket
                .clone()
                .ok_or_else(|| StorageError::ConfigError("S3_BUCKET not configured".to_string()))?;

            let storage = S3Storage::new(bucket, config.s3_region.clone(), config.s3_endpoint.clone())?;
            Ok(Arc::new(storage))
        }

        StorageBackend::Memory => Ok(Arc::new(MemoryStorage::new())),
    }
}
