//! Catalog query handlers shared by the `modules` and `apis` commands

use crate::args::{CatalogQuery, OutputFormat};
use eduverse::core::catalog::{Catalog, CatalogCategory, CatalogRecord};
use eduverse::core::models::ApiIntegration;
use serde::Serialize;
use std::fmt::Display;
use tracing::{debug, warn};

/// Run one catalog query and print the result
///
/// # Errors
/// Returns a user-facing message if a category label or record name is unknown
pub fn run<R>(catalog: &Catalog<R>, query: CatalogQuery, output: OutputFormat) -> Result<(), String>
where
    R: CatalogRecord + Display + Serialize,
{
    debug!("{} catalog query: {query:?}", catalog.kind());
    match query {
        CatalogQuery::Categories => categories(catalog, output),
        CatalogQuery::List { category: None } => list_grouped(catalog, output),
        CatalogQuery::List {
            category: Some(label),
        } => list_category(catalog, &label, output),
        CatalogQuery::Show { name } => show(catalog, &name, output),
        CatalogQuery::Names => names(catalog, output),
        CatalogQuery::Distribution => distribution(catalog, output),
    }
}

/// Print the API count per implementation complexity
///
/// # Errors
/// Returns a message if JSON serialization fails
pub fn complexity(catalog: &Catalog<ApiIntegration>, output: OutputFormat) -> Result<(), String> {
    let dist = catalog.distribution_by_complexity();
    if output == OutputFormat::Json {
        return print_json(&dist);
    }

    println!("\n=== Implementation Complexity ===\n");
    for (level, count) in dist.iter() {
        println!("  {:<8} {count:>3}", level.as_str());
    }
    println!("  {:<8} {:>3}", "Total", dist.total());
    Ok(())
}

fn categories<R: CatalogRecord>(catalog: &Catalog<R>, output: OutputFormat) -> Result<(), String> {
    let labels: Vec<&str> = catalog
        .list_categories()
        .into_iter()
        .map(CatalogCategory::label)
        .collect();
    if output == OutputFormat::Json {
        return print_json(&labels);
    }
    for label in labels {
        println!("{label}");
    }
    Ok(())
}

fn list_grouped<R>(catalog: &Catalog<R>, output: OutputFormat) -> Result<(), String>
where
    R: CatalogRecord + Serialize,
{
    if output == OutputFormat::Json {
        return print_json(&catalog.records());
    }
    for (category, records) in catalog.group_by_category() {
        println!("\n=== {category} ===");
        for record in records {
            println!("  {}", record.heading());
        }
    }
    Ok(())
}

fn list_category<R>(catalog: &Catalog<R>, label: &str, output: OutputFormat) -> Result<(), String>
where
    R: CatalogRecord + Serialize,
{
    let category = R::Category::from_label(label).map_err(|e| {
        warn!("Rejected {} category filter: {label}", catalog.kind());
        format!("✗ {e}")
    })?;
    let records = catalog.filter_by_category(category);
    if output == OutputFormat::Json {
        return print_json(&records);
    }

    println!("\n=== {category} ({}) ===", records.len());
    for record in records {
        println!("  {}", record.heading());
    }
    Ok(())
}

fn show<R>(catalog: &Catalog<R>, name: &str, output: OutputFormat) -> Result<(), String>
where
    R: CatalogRecord + Display + Serialize,
{
    let Some(record) = catalog.find_by_name(name) else {
        warn!("No {} named '{name}'", catalog.kind());
        return Err(format!(
            "✗ {}\n  Available: {}",
            R::not_found(name),
            catalog.list_all_names().join(", ")
        ));
    };
    if output == OutputFormat::Json {
        return print_json(record);
    }
    print!("{record}");
    Ok(())
}

fn names<R: CatalogRecord>(catalog: &Catalog<R>, output: OutputFormat) -> Result<(), String> {
    let names = catalog.list_all_names();
    if output == OutputFormat::Json {
        return print_json(&names);
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}

fn distribution<R: CatalogRecord>(
    catalog: &Catalog<R>,
    output: OutputFormat,
) -> Result<(), String> {
    let dist = catalog.distribution_by_category();
    if output == OutputFormat::Json {
        return print_json(&dist);
    }

    let width = dist
        .keys()
        .iter()
        .map(|k| k.label().len())
        .max()
        .unwrap_or(0)
        .max("Total".len());
    println!("\n=== {} Distribution ===\n", capitalize(catalog.kind()));
    for (category, count) in dist.iter() {
        println!("  {:<width$} {count:>3}", category.label());
    }
    println!("  {:<width$} {:>3}", "Total", dist.total());
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("✗ Failed to serialize output: {e}"))?;
    println!("{json}");
    Ok(())
}

/// Uppercase the first character ("module" -> "Module")
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
