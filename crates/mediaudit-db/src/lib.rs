//! Mediaudit DB Library
//!
//! Catalog access over MySQL. The auditor only reads: one paged select per
//! run against the project catalog.

pub mod catalog;

pub use catalog::{connect_pool, CatalogRepository};
