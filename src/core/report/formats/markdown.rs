//! Markdown report generator
//!
//! Generates the overview report in Markdown with embedded Mermaid charts.
//! These reports render well in GitHub, GitLab, and VS Code.

use crate::core::catalog::{CatalogCategory, CatalogRecord, Distribution};
use crate::core::get_version;
use crate::core::models::Complexity;
use crate::core::report::visualization::MermaidGenerator;
use crate::core::report::{
    ReportContext, ReportError, ReportGenerator, INTEGRATION_ADVICE, OVERVIEW_TEXT, TECH_STACK,
};
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/overview.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        // Header
        output = output.replace("{{version}}", get_version());
        output = output.replace("{{overview}}", OVERVIEW_TEXT);
        output = output.replace("{{module_count}}", &ctx.module_count().to_string());
        output = output.replace("{{api_count}}", &ctx.api_count().to_string());
        output = output.replace(
            "{{module_category_count}}",
            &ctx.module_distribution.len().to_string(),
        );
        output = output.replace(
            "{{api_category_count}}",
            &ctx.api_distribution.len().to_string(),
        );

        // Distributions
        output = output.replace(
            "{{module_distribution_table}}",
            &Self::distribution_table("Category", "Number of Modules", &ctx.module_distribution),
        );
        output = output.replace(
            "{{module_distribution_chart}}",
            &MermaidGenerator::category_pie(
                "Module Distribution by Category",
                &ctx.module_distribution,
            ),
        );
        output = output.replace(
            "{{api_distribution_table}}",
            &Self::distribution_table("Category", "Number of APIs", &ctx.api_distribution),
        );
        output = output.replace(
            "{{api_distribution_chart}}",
            &MermaidGenerator::category_pie("API Distribution by Category", &ctx.api_distribution),
        );
        output = output.replace("{{complexity_table}}", &Self::complexity_table(ctx));
        output = output.replace(
            "{{complexity_chart}}",
            &MermaidGenerator::complexity_bar(
                "API Implementation Complexity",
                &ctx.complexity_distribution,
            ),
        );

        output = output.replace("{{implementation_notes}}", &Self::implementation_notes());
        output = output.replace("{{tech_stack}}", &Self::tech_stack_table());

        // Detail sections last: record text may itself contain braces
        output = output.replace("{{module_sections}}", &Self::module_sections(ctx));
        output = output.replace("{{api_sections}}", &Self::api_sections(ctx));

        output
    }

    /// Two-column table of a category distribution
    fn distribution_table<K: CatalogCategory>(
        key_header: &str,
        count_header: &str,
        dist: &Distribution<K>,
    ) -> String {
        let mut table = String::new();
        let _ = writeln!(table, "| {key_header} | {count_header} |");
        table.push_str("|---|---|\n");
        for (key, count) in dist.iter() {
            let _ = writeln!(table, "| {} | {count} |", key.label());
        }
        table
    }

    fn complexity_table(ctx: &ReportContext) -> String {
        let mut table = String::from("| Complexity | Number of APIs |\n|---|---|\n");
        for (level, count) in ctx.complexity_distribution.iter() {
            let _ = writeln!(table, "| {level} | {count} |");
        }
        table
    }

    fn implementation_notes() -> String {
        let mut notes = String::new();
        for level in Complexity::ALL {
            let _ = writeln!(
                notes,
                "- **{level} complexity**: {}",
                level.implementation_note()
            );
        }
        let _ = writeln!(notes, "\n{INTEGRATION_ADVICE}");
        notes
    }

    fn tech_stack_table() -> String {
        let mut table = String::from("| Area | Technology |\n|---|---|\n");
        for item in &TECH_STACK {
            let _ = writeln!(table, "| {} | {} |", item.area, item.choice);
        }
        table
    }

    /// Modules grouped by category, one subsection per module
    fn module_sections(ctx: &ReportContext) -> String {
        let mut out = String::new();
        for (category, modules) in ctx.modules.group_by_category() {
            let _ = writeln!(out, "### {category}\n");
            for module in modules {
                let _ = writeln!(out, "#### {}\n", module.heading());
                let _ = writeln!(out, "**Description:** {}\n", module.description);
                out.push_str("**Key Features:**\n\n");
                for feature in &module.features {
                    let _ = writeln!(out, "- {feature}");
                }
                out.push('\n');
            }
        }
        out
    }

    /// API integrations grouped by category
    fn api_sections(ctx: &ReportContext) -> String {
        let mut out = String::new();
        for (category, apis) in ctx.apis.group_by_category() {
            let _ = writeln!(out, "### {category}\n");
            for api in apis {
                let _ = writeln!(out, "#### {}\n", api.name);
                let _ = writeln!(out, "**Description:** {}\n", api.description);
                out.push_str("**Use Cases:**\n\n");
                for use_case in &api.use_cases {
                    let _ = writeln!(out, "- {use_case}");
                }
                let _ = writeln!(
                    out,
                    "\n**Implementation Complexity:** {}\n",
                    api.implementation_complexity
                );
                let _ = writeln!(out, "**Documentation:** [Link]({})\n", api.documentation_url);
            }
        }
        out
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, ReportError> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_placeholders_substituted() {
        let report = MarkdownReporter::new()
            .render(&ReportContext::builtin())
            .unwrap();
        assert!(!report.contains("{{"), "unsubstituted placeholder left in report");
    }

    #[test]
    fn test_complexity_table_rows() {
        let table = MarkdownReporter::complexity_table(&ReportContext::builtin());
        assert!(table.contains("| Low | 1 |"));
        assert!(table.contains("| Medium | 4 |"));
        assert!(table.contains("| High | 2 |"));
    }
}
