//! Overview report generation
//!
//! Renders both catalogs and their distributions as a single overview
//! document in Markdown (with Mermaid charts) or HTML.

pub mod formats;
pub mod visualization;

use crate::core::catalog::{Catalog, ComplexityDistribution, Distribution};
use crate::core::data::{integration_catalog, module_catalog};
use crate::core::models::{ApiCategory, ApiIntegration, Module, ModuleCategory};
use std::path::Path;
use thiserror::Error;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};
pub use visualization::MermaidGenerator;

/// Introductory paragraph shown at the top of every report
pub const OVERVIEW_TEXT: &str = "EduVerse is a comprehensive modular learning ecosystem designed to \
provide innovative educational experiences across various disciplines. The platform offers \
specialized modules targeting K-12 education, cybersecurity, and engineering disciplines, with \
integration capabilities for numerous educational APIs.";

/// Closing advice under the implementation notes
pub const INTEGRATION_ADVICE: &str = "All API integrations should implement proper error \
handling, rate limiting consideration, and caching where appropriate.";

/// One entry of the technology stack table
#[derive(Debug, Clone, Copy)]
pub struct TechStackItem {
    /// Concern (e.g., "Database")
    pub area: &'static str,
    /// Chosen technology
    pub choice: &'static str,
}

/// Planned technology stack for the platform
pub const TECH_STACK: [TechStackItem; 6] = [
    TechStackItem {
        area: "Web Framework",
        choice: "Django/Flask for backend development",
    },
    TechStackItem {
        area: "Frontend Integration",
        choice: "React/Vue.js for dynamic user interfaces",
    },
    TechStackItem {
        area: "Database",
        choice: "Supabase for managing user data and content",
    },
    TechStackItem {
        area: "Authentication",
        choice: "Supabase/PyAuth for secure user authentication",
    },
    TechStackItem {
        area: "API Consumption",
        choice: "Python's requests library for external API interaction",
    },
    TechStackItem {
        area: "Gamification",
        choice: "Pygame or Unity integration for advanced features",
    },
];

/// Errors raised while rendering or writing a report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Writing the report file failed
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// The HTML template failed to render
    #[error("Failed to render template: {0}")]
    Template(#[from] askama::Error),

    /// The requested format is not supported
    #[error("Unknown report format: {0}")]
    UnknownFormat(String),
}

/// Data context for report generation
///
/// Borrows both catalogs and precomputes their distributions so every
/// format renders from the same numbers.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Module catalog
    pub modules: &'a Catalog<Module>,
    /// API integration catalog
    pub apis: &'a Catalog<ApiIntegration>,
    /// Modules per category
    pub module_distribution: Distribution<ModuleCategory>,
    /// APIs per category
    pub api_distribution: Distribution<ApiCategory>,
    /// APIs per complexity level
    pub complexity_distribution: ComplexityDistribution,
}

impl<'a> ReportContext<'a> {
    /// Create a report context over two catalogs
    #[must_use]
    pub fn new(modules: &'a Catalog<Module>, apis: &'a Catalog<ApiIntegration>) -> Self {
        Self {
            modules,
            apis,
            module_distribution: modules.distribution_by_category(),
            api_distribution: apis.distribution_by_category(),
            complexity_distribution: apis.distribution_by_complexity(),
        }
    }

    /// Number of modules
    #[must_use]
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Number of API integrations
    #[must_use]
    pub fn api_count(&self) -> usize {
        self.apis.len()
    }
}

impl ReportContext<'static> {
    /// Context over the built-in catalogs
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(module_catalog(), integration_catalog())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String, ReportError>;

    /// Render and write the report to `output_path`
    ///
    /// # Errors
    /// Returns an error if rendering or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), ReportError> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }
}
