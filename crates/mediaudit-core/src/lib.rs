//! Mediaudit Core Library
//!
//! This crate provides the domain models, validation policy, configuration,
//! and error types shared across all mediaudit components.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod policy;
pub mod storage_types;

// Re-export commonly used types
pub use catalog::CatalogSource;
pub use config::AuditConfig;
pub use error::AuditError;
pub use models::{AssetOutcome, AssetRole, ObjectMeta, ProjectRecord, ProjectStatus, SlotDefect};
pub use policy::{AuditPolicy, MISSING_SENTINEL};
pub use storage_types::StorageBackend;
