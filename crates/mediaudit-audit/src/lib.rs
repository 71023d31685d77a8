//! Mediaudit Audit Library
//!
//! The validation core: per-asset checks against the object store, the
//! per-project aggregation that decides reportability, the batch runner,
//! and the CSV report sink.

pub mod checker;
pub mod report;
pub mod runner;
pub mod validator;

// Re-export commonly used types
pub use checker::AssetChecker;
pub use report::CsvReportSink;
pub use runner::{AuditRunner, AuditSummary};
pub use validator::ProjectValidator;
