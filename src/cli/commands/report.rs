//! Report command handler
//!
//! Renders the catalog overview in Markdown or HTML and writes it to disk.

use eduverse::config::Config;
use eduverse::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// File stem used when no output path is given
const DEFAULT_REPORT_STEM: &str = "eduverse_overview";

/// Run the report command.
///
/// # Arguments
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, md, html)
/// * `config` - Configuration containing the default reports directory
///
/// # Errors
/// Returns a user-facing message if the format is unknown or the report
/// cannot be written.
pub fn run(output_file: Option<&Path>, format_str: &str, config: &Config) -> Result<(), String> {
    let format: ReportFormat = format_str
        .parse()
        .map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    let output_path = match output_file {
        Some(path) => path.to_path_buf(),
        None => default_output_path(config, format)?,
    };

    let ctx = ReportContext::builtin();
    write_report(&ctx, format, &output_path)
        .inspect_err(|e| error!("Report generation failed for {}: {e}", output_path.display()))?;

    println!("✓ Report generated: {}", output_path.display());
    info!("Report exported to: {}", output_path.display());

    print_summary(&ctx);
    Ok(())
}

/// `<reports_dir>/eduverse_overview.<ext>`, creating the directory if needed
fn default_output_path(config: &Config, format: ReportFormat) -> Result<PathBuf, String> {
    let reports_dir = config.reports_dir();
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;
    Ok(reports_dir.join(format!("{DEFAULT_REPORT_STEM}.{}", format.extension())))
}

/// Write the report to a file in the specified format
fn write_report(ctx: &ReportContext, format: ReportFormat, output_path: &Path) -> Result<(), String> {
    match format {
        ReportFormat::Markdown => MarkdownReporter::new()
            .generate(ctx, output_path)
            .map_err(|e| format!("✗ Failed to generate Markdown report: {e}")),
        ReportFormat::Html => HtmlReporter::new()
            .generate(ctx, output_path)
            .map_err(|e| format!("✗ Failed to generate HTML report: {e}")),
    }
}

/// Print a summary of the report
fn print_summary(ctx: &ReportContext) {
    println!("\n=== Summary ===");
    println!(
        "Modules: {} across {} categories",
        ctx.module_count(),
        ctx.module_distribution.len()
    );
    println!(
        "API Integrations: {} across {} categories",
        ctx.api_count(),
        ctx.api_distribution.len()
    );
    let complexity: Vec<String> = ctx
        .complexity_distribution
        .iter()
        .map(|(level, count)| format!("{level} {count}"))
        .collect();
    println!("Complexity: {}", complexity.join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_reports_dir(dir: &Path) -> Config {
        let mut config = Config::from_defaults();
        config.paths.reports_dir = dir.to_string_lossy().to_string();
        config
    }

    #[test]
    fn test_default_path_uses_reports_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("reports");
        let config = config_with_reports_dir(&nested);

        let path = default_output_path(&config, ReportFormat::Markdown).unwrap();
        assert_eq!(path, nested.join("eduverse_overview.md"));
        assert!(nested.is_dir());
    }

    #[test]
    fn test_run_writes_html_report() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_with_reports_dir(tmp.path());

        run(None, "html", &config).unwrap();
        let html = std::fs::read_to_string(tmp.path().join("eduverse_overview.html")).unwrap();
        assert!(html.contains("MathQuest Land"));
    }

    #[test]
    fn test_run_rejects_unknown_format() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_with_reports_dir(tmp.path());
        let err = run(None, "pdf", &config).unwrap_err();
        assert!(err.contains("Use: markdown or html"));
    }
}
