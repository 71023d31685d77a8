//! Error types module
//!
//! Faults that abort a run: fetching a catalog page, writing the report, or
//! bad configuration. Per-asset classification results are ordinary values
//! (`AssetOutcome`), never errors.
//!
//! The `Catalog` variant wraps `sqlx::Error` when the `sqlx` feature is
//! enabled (the default); without it the variant carries a message string.

use std::io;

#[cfg(feature = "sqlx")]
use sqlx::Error as SqlxError;

#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[cfg(feature = "sqlx")]
    #[error("Catalog error: {0}")]
    Catalog(#[source] SqlxError),

    #[cfg(not(feature = "sqlx"))]
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(feature = "sqlx")]
impl From<SqlxError> for AuditError {
    fn from(err: SqlxError) -> Self {
        AuditError::Catalog(err)
    }
}

impl From<io::Error> for AuditError {
    fn from(err: io::Error) -> Self {
        AuditError::Report(format!("IO error: {}", err))
    }
}
