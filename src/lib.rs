//! Shared library for `EduVerse`
//! Contains the catalog data-access layer, report generation and configuration
//! used by the command-line browser.

pub mod core;
pub mod shared;

pub use crate::core::config;
pub use crate::core::get_version;
