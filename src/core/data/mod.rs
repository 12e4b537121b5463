//! Built-in catalogs
//!
//! Both catalogs are assembled from literal data the first time they are
//! requested and stay read-only for the rest of the process.

mod integrations;
mod modules;

use crate::core::catalog::Catalog;
use crate::core::models::{ApiIntegration, Module};
use std::sync::LazyLock;

pub use integrations::all_integrations;
pub use modules::{all_modules, cybersecurity_modules, engineering_modules, k12_modules};

static MODULE_CATALOG: LazyLock<Catalog<Module>> = LazyLock::new(|| {
    Catalog::new("module", all_modules()).expect("Built-in module catalog has duplicate names")
});

static INTEGRATION_CATALOG: LazyLock<Catalog<ApiIntegration>> = LazyLock::new(|| {
    Catalog::new("API", all_integrations()).expect("Built-in API catalog has duplicate names")
});

/// The built-in module catalog
///
/// # Panics
/// Panics on first access if the compiled-in module list contains duplicate
/// names.
#[must_use]
pub fn module_catalog() -> &'static Catalog<Module> {
    &MODULE_CATALOG
}

/// The built-in API integration catalog
///
/// # Panics
/// Panics on first access if the compiled-in API list contains duplicate names.
#[must_use]
pub fn integration_catalog() -> &'static Catalog<ApiIntegration> {
    &INTEGRATION_CATALOG
}
