//! Core module: catalog models, queries, static data and reporting

pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod report;

pub use catalog::{Catalog, CatalogRecord, ComplexityDistribution, Distribution};
pub use data::{integration_catalog, module_catalog};
pub use error::CatalogError;

/// Returns the current version of the `EduVerse` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
