//! HTML report generator
//!
//! Renders the overview through an askama template. The output is a single
//! self-contained page: CSS bar charts for the distributions and a
//! collapsible `<details>` panel per record. All catalog text is HTML-escaped
//! by the template engine.

use askama::Template;

use crate::core::catalog::{CatalogCategory, Distribution};
use crate::core::get_version;
use crate::core::models::{ApiIntegration, Complexity, Module};
use crate::core::report::{
    ReportContext, ReportError, ReportGenerator, TechStackItem, INTEGRATION_ADVICE, OVERVIEW_TEXT,
    TECH_STACK,
};

/// Colours cycled across category bars
const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// One bar of a CSS bar chart
struct Bar {
    label: &'static str,
    count: usize,
    /// Width relative to the largest bar, 0-100
    percent: usize,
    color: &'static str,
}

struct ModuleGroup<'a> {
    category: &'static str,
    modules: Vec<&'a Module>,
}

struct ApiGroup<'a> {
    category: &'static str,
    apis: Vec<&'a ApiIntegration>,
}

struct Note {
    level: &'static str,
    text: &'static str,
}

#[derive(Template)]
#[template(path = "overview.html")]
struct OverviewPage<'a> {
    version: &'a str,
    overview: &'a str,
    advice: &'a str,
    module_count: usize,
    api_count: usize,
    module_bars: Vec<Bar>,
    api_bars: Vec<Bar>,
    complexity_bars: Vec<Bar>,
    notes: Vec<Note>,
    tech_stack: &'a [TechStackItem],
    module_groups: Vec<ModuleGroup<'a>>,
    api_groups: Vec<ApiGroup<'a>>,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn percent(count: usize, max: usize) -> usize {
        if max == 0 {
            0
        } else {
            count * 100 / max
        }
    }

    fn category_bars<K: CatalogCategory>(dist: &Distribution<K>) -> Vec<Bar> {
        let max = dist.max();
        dist.iter()
            .zip(PALETTE.iter().copied().cycle())
            .map(|((key, count), color)| Bar {
                label: key.label(),
                count,
                percent: Self::percent(count, max),
                color,
            })
            .collect()
    }

    /// Bars ordered by count, largest first; ties keep distribution order
    fn sorted_by_count(mut bars: Vec<Bar>) -> Vec<Bar> {
        bars.sort_by(|a, b| b.count.cmp(&a.count));
        bars
    }

    fn complexity_bars(ctx: &ReportContext) -> Vec<Bar> {
        let dist = &ctx.complexity_distribution;
        let max = dist.max();
        dist.iter()
            .map(|(level, count)| Bar {
                label: level.as_str(),
                count,
                percent: Self::percent(count, max),
                color: level.color(),
            })
            .collect()
    }

    fn page<'a>(ctx: &'a ReportContext<'a>) -> OverviewPage<'a> {
        OverviewPage {
            version: get_version(),
            overview: OVERVIEW_TEXT,
            advice: INTEGRATION_ADVICE,
            module_count: ctx.module_count(),
            api_count: ctx.api_count(),
            module_bars: Self::sorted_by_count(Self::category_bars(&ctx.module_distribution)),
            api_bars: Self::category_bars(&ctx.api_distribution),
            complexity_bars: Self::complexity_bars(ctx),
            notes: Complexity::ALL
                .into_iter()
                .map(|level| Note {
                    level: level.as_str(),
                    text: level.implementation_note(),
                })
                .collect(),
            tech_stack: &TECH_STACK,
            module_groups: ctx
                .modules
                .group_by_category()
                .into_iter()
                .map(|(category, modules)| ModuleGroup {
                    category: category.as_str(),
                    modules,
                })
                .collect(),
            api_groups: ctx
                .apis
                .group_by_category()
                .into_iter()
                .map(|(category, apis)| ApiGroup {
                    category: category.as_str(),
                    apis,
                })
                .collect(),
        }
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, ReportError> {
        Ok(Self::page(ctx).render()?)
    }
}
