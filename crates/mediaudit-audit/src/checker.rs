use std::sync::Arc;

use mediaudit_core::{AssetOutcome, AssetRole, AuditPolicy};
use mediaudit_storage::{Storage, StorageError};

/// Validates one (role, key) pair against the object store.
///
/// Checks run in a fixed priority order: presence of the reference, then
/// existence in storage, then extension, then size. A missing reference is
/// reported as missing data rather than a storage miss, and a wrong
/// extension wins over an undersized object.
pub struct AssetChecker {
    store: Arc<dyn Storage>,
    policy: AuditPolicy,
}

impl AssetChecker {
    pub fn new(store: Arc<dyn Storage>, policy: AuditPolicy) -> Self {
        Self { store, policy }
    }

    /// Classify a single asset slot. Exactly one read-only head call is
    /// made, and none at all when the reference itself is missing.
    pub async fn check_asset(&self, role: AssetRole, key: Option<&str>) -> AssetOutcome {
        let key = match key {
            Some(k) if !AuditPolicy::is_missing_reference(Some(k)) => k,
            _ => return AssetOutcome::DataMissing,
        };

        let meta = match self.store.head_object(key).await {
            Ok(meta) => meta,
            Err(StorageError::NotFound(_)) => return AssetOutcome::StorageMissing,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    key = %key,
                    role = %role,
                    "Object store head failed; slot left unverified"
                );
                return AssetOutcome::Inconclusive;
            }
        };

        let ext = AuditPolicy::extension_of(key);
        if !self.policy.allows(role, &ext) {
            return AssetOutcome::WrongExtension;
        }

        // Exclusive threshold: the object must be strictly larger.
        if meta.size_bytes <= self.policy.min_size_bytes(role) {
            return AssetOutcome::TooSmall;
        }

        AssetOutcome::Ok(meta)
    }
}
