//! Mediaudit Storage Library
//!
//! Object store access for the auditor. The audit only ever needs object
//! metadata (existence and byte size), so the trait is a single read-only
//! head call; no content is downloaded.

pub mod factory;
pub mod memory;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use mediaudit_core::StorageBackend;
pub use memory::MemoryStorage;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
