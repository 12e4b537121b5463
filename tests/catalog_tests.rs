//! Integration tests for catalog queries over the built-in data

use eduverse::core::catalog::{Catalog, CatalogCategory, CatalogRecord};
use eduverse::core::models::{ApiCategory, Complexity, ModuleCategory};
use eduverse::core::{integration_catalog, module_catalog, CatalogError};

/// Every category's filter result matches only that category, and together
/// they cover the catalog exactly once
fn assert_partition<R: CatalogRecord + PartialEq>(catalog: &Catalog<R>) {
    let mut covered = 0;
    for category in catalog.list_categories() {
        let members = catalog.filter_by_category(category);
        assert!(!members.is_empty());
        assert!(members.iter().all(|r| r.category() == category));
        covered += members.len();
    }
    assert_eq!(covered, catalog.len());
    for record in catalog {
        let members = catalog.filter_by_category(record.category());
        assert!(members.iter().any(|m| *m == record));
    }
}

fn assert_find_round_trip<R: CatalogRecord + PartialEq + std::fmt::Debug>(catalog: &Catalog<R>) {
    for record in catalog {
        assert_eq!(catalog.find_by_name(record.name()), Some(record));
    }
    assert!(catalog.find_by_name("NonexistentXYZ").is_none());
}

fn assert_sorted_unique<R: CatalogRecord>(catalog: &Catalog<R>) {
    let labels: Vec<&str> = catalog
        .list_categories()
        .into_iter()
        .map(CatalogCategory::label)
        .collect();
    assert!(labels.windows(2).all(|w| w[0] < w[1]), "{labels:?}");
}

#[test]
fn test_filter_partitions_module_catalog() {
    assert_partition(module_catalog());
}

#[test]
fn test_filter_partitions_integration_catalog() {
    assert_partition(integration_catalog());
}

#[test]
fn test_find_by_name_round_trip() {
    assert_find_round_trip(module_catalog());
    assert_find_round_trip(integration_catalog());
}

#[test]
fn test_not_found_errors() {
    use eduverse::core::models::{ApiIntegration, Module};

    assert_eq!(
        Module::not_found("NonexistentXYZ").to_string(),
        "Module not found: 'NonexistentXYZ'"
    );
    assert_eq!(
        ApiIntegration::not_found("NonexistentXYZ"),
        CatalogError::IntegrationNotFound("NonexistentXYZ".to_string())
    );
}

#[test]
fn test_category_distribution_sums_to_len() {
    let modules = module_catalog();
    assert_eq!(modules.distribution_by_category().total(), modules.len());

    let apis = integration_catalog();
    assert_eq!(apis.distribution_by_category().total(), apis.len());
}

#[test]
fn test_module_distribution_in_first_occurrence_order() {
    let dist = module_catalog().distribution_by_category();
    assert_eq!(
        dist.keys(),
        vec![
            ModuleCategory::K12FoundationalLearning,
            ModuleCategory::CybersecurityEducation,
            ModuleCategory::CivilEngineering,
            ModuleCategory::MechanicalEngineering,
            ModuleCategory::ChemicalEngineering,
            ModuleCategory::BiomedicalEngineering,
        ]
    );
    assert_eq!(dist.counts(), vec![8, 2, 2, 2, 1, 2]);
}

#[test]
fn test_api_distribution() {
    let dist = integration_catalog().distribution_by_category();
    assert_eq!(dist.get(ApiCategory::EducationalContent), Some(2));
    assert_eq!(dist.get(ApiCategory::CybersecurityTools), Some(3));
    assert_eq!(dist.get(ApiCategory::DataVisualizationAndInteraction), Some(2));
}

#[test]
fn test_complexity_distribution() {
    let apis = integration_catalog();
    let dist = apis.distribution_by_complexity();

    assert_eq!(dist.get(Complexity::Low), 1);
    assert_eq!(dist.get(Complexity::Medium), 4);
    assert_eq!(dist.get(Complexity::High), 2);
    assert_eq!(dist.total(), apis.len());

    let levels: Vec<Complexity> = dist.iter().map(|(level, _)| level).collect();
    assert_eq!(levels, Complexity::ALL);
}

#[test]
fn test_complexity_distribution_keeps_zero_levels() {
    let apis: Vec<_> = integration_catalog()
        .iter()
        .filter(|api| api.implementation_complexity != Complexity::Low)
        .cloned()
        .collect();
    let catalog = Catalog::new("API", apis).unwrap();
    let dist = catalog.distribution_by_complexity();

    assert_eq!(dist.get(Complexity::Low), 0);
    let json = serde_json::to_value(&dist).unwrap();
    assert_eq!(json["Low"], 0);
    assert_eq!(json["Medium"], 4);
    assert_eq!(json["High"], 2);
}

#[test]
fn test_list_categories_sorted_and_unique() {
    assert_sorted_unique(module_catalog());
    assert_sorted_unique(integration_catalog());
    assert_eq!(module_catalog().list_categories().len(), 6);
}

#[test]
fn test_list_all_names_in_catalog_order() {
    let names = module_catalog().list_all_names();
    assert_eq!(names.len(), 17);
    assert_eq!(names.first(), Some(&"Playtory"));
    assert_eq!(names.last(), Some(&"BioDesign Studio"));

    let api_names = integration_catalog().list_all_names();
    assert_eq!(
        api_names,
        vec![
            "Khan Academy API",
            "Quizlet API",
            "PhishTank API",
            "Google Safe Browsing API",
            "VirusTotal API",
            "Blockly",
            "Urban Institute's Education Data API",
        ]
    );
}

#[test]
fn test_mathquest_land_lookup() {
    let module = module_catalog()
        .find_by_name("MathQuest Land")
        .expect("MathQuest Land should exist");
    assert_eq!(module.category, ModuleCategory::K12FoundationalLearning);
    assert_eq!(module.category.label(), "K-12 Foundational Learning");
    assert_eq!(module.age_range, "6-12 years");
}

#[test]
fn test_filter_by_label() {
    let modules = module_catalog();
    let civil = modules.filter_by_category_label("Civil Engineering");
    let names: Vec<&str> = civil.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["CivilVerse", "Failure Vault"]);

    assert!(modules.filter_by_category_label("Underwater Basket Weaving").is_empty());
    assert!(modules.filter_by_category_label("civil engineering").is_empty());
}

#[test]
fn test_filter_unused_category_is_empty() {
    let apis: Vec<_> = integration_catalog()
        .iter()
        .filter(|api| api.category == ApiCategory::EducationalContent)
        .cloned()
        .collect();
    let catalog = Catalog::new("API", apis).unwrap();
    assert!(catalog
        .filter_by_category(ApiCategory::CybersecurityTools)
        .is_empty());
}

#[test]
fn test_empty_catalog_queries() {
    let catalog: Catalog<eduverse::core::models::Module> = Catalog::empty("module");
    assert!(catalog.list_categories().is_empty());
    assert!(catalog.list_all_names().is_empty());
    assert!(catalog.distribution_by_category().is_empty());
    assert!(catalog.find_by_name("MathQuest Land").is_none());
}

#[test]
fn test_duplicate_names_rejected() {
    let mut modules: Vec<_> = module_catalog().iter().cloned().collect();
    modules.push(modules[0].clone());
    let err = Catalog::new("module", modules).unwrap_err();
    assert_eq!(
        err,
        CatalogError::DuplicateName {
            catalog: "module",
            name: "Playtory".to_string(),
        }
    );
}

#[test]
fn test_catalog_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| module_catalog().distribution_by_category().total()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 17);
    }
}
