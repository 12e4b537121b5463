//! Mermaid chart generator for catalog distributions
//!
//! Generates Mermaid `pie` and `xychart-beta` blocks that render in GitHub,
//! GitLab, and other Markdown viewers.

use crate::core::catalog::{CatalogCategory, ComplexityDistribution, Distribution};
use std::fmt::Write;

/// Generator for Mermaid chart syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Pie chart of a category distribution, slices in distribution order
    #[must_use]
    pub fn category_pie<K: CatalogCategory>(title: &str, dist: &Distribution<K>) -> String {
        Self::pie_chart(title, dist.iter().map(|(k, count)| (k.label(), count)))
    }

    /// Bar chart of the complexity distribution (Low, Medium, High)
    #[must_use]
    pub fn complexity_bar(title: &str, dist: &ComplexityDistribution) -> String {
        Self::bar_chart(
            title,
            "Number of APIs",
            dist.iter().map(|(level, count)| (level.as_str(), count)),
        )
    }

    /// Pie chart from `(label, value)` pairs
    #[must_use]
    pub fn pie_chart<'a>(title: &str, slices: impl IntoIterator<Item = (&'a str, usize)>) -> String {
        let mut output = String::from("```mermaid\n");
        let _ = writeln!(output, "pie title {}", Self::sanitize_label(title));
        for (label, value) in slices {
            let _ = writeln!(output, "    \"{}\" : {value}", Self::sanitize_label(label));
        }
        output.push_str("```\n");
        output
    }

    /// Vertical bar chart from `(label, value)` pairs
    ///
    /// The y-axis runs from 0 to the largest value (at least 1).
    #[must_use]
    pub fn bar_chart<'a>(
        title: &str,
        y_label: &str,
        bars: impl IntoIterator<Item = (&'a str, usize)>,
    ) -> String {
        let (labels, values): (Vec<&str>, Vec<usize>) = bars.into_iter().unzip();
        let y_max = values.iter().copied().max().unwrap_or(0).max(1);

        let x_axis: Vec<String> = labels
            .iter()
            .map(|l| format!("\"{}\"", Self::sanitize_label(l)))
            .collect();
        let data: Vec<String> = values.iter().map(ToString::to_string).collect();

        let mut output = String::from("```mermaid\nxychart-beta\n");
        let _ = writeln!(output, "    title \"{}\"", Self::sanitize_label(title));
        let _ = writeln!(output, "    x-axis [{}]", x_axis.join(", "));
        let _ = writeln!(
            output,
            "    y-axis \"{}\" 0 --> {y_max}",
            Self::sanitize_label(y_label)
        );
        let _ = writeln!(output, "    bar [{}]", data.join(", "));
        output.push_str("```\n");
        output
    }

    /// Make a label safe inside a double-quoted Mermaid string
    fn sanitize_label(label: &str) -> String {
        label
            .chars()
            .map(|c| match c {
                '"' => '\'',
                '\n' | '\r' => ' ',
                _ => c,
            })
            .collect()
    }
}
