//! Data models for `EduVerse`

pub mod integration;
pub mod module;

pub use integration::{ApiCategory, ApiIntegration, Complexity};
pub use module::{Module, ModuleCategory};
