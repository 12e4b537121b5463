//! Read-only catalog of records with category and name queries
//!
//! A [`Catalog`] wraps an immutable list of records. Every query is a pure
//! function of that list: nothing is cached and nothing is mutated, so the
//! same catalog can be shared freely between readers.

pub mod distribution;

pub use distribution::{ComplexityDistribution, Distribution};

use crate::core::error::{CatalogError, CatalogResult};
use crate::core::models::ApiIntegration;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// A closed set of category tags
pub trait CatalogCategory: Copy + Eq + fmt::Display + 'static {
    /// Display label, also used for sorting and label-based filtering
    fn label(self) -> &'static str;

    /// Every member of the enumeration
    fn all() -> &'static [Self];

    /// Parse a label, ignoring ASCII case and surrounding whitespace
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownCategory`] listing the valid labels.
    fn from_label(value: &str) -> CatalogResult<Self> {
        let wanted = value.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let labels: Vec<&str> = Self::all().iter().map(|&c| c.label()).collect();
                CatalogError::unknown_category(value, &labels)
            })
    }
}

/// A record that can be stored in a [`Catalog`]
pub trait CatalogRecord {
    /// Category enumeration used by this record type
    type Category: CatalogCategory;

    /// Unique name within the catalog
    fn name(&self) -> &str;

    /// Category tag
    fn category(&self) -> Self::Category;

    /// One-line heading for collapsed listings; defaults to the name
    fn heading(&self) -> String {
        self.name().to_string()
    }

    /// Error reported when a lookup for `name` finds nothing
    fn not_found(name: &str) -> CatalogError;
}

/// An immutable, ordered collection of records
#[derive(Debug, Clone)]
pub struct Catalog<R> {
    kind: &'static str,
    records: Vec<R>,
}

impl<R: CatalogRecord> Catalog<R> {
    /// Build a catalog, rejecting duplicate record names
    ///
    /// # Arguments
    /// * `kind` - Short catalog name used in error messages (e.g., "module")
    /// * `records` - Records in presentation order
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateName`] if two records share a name.
    pub fn new(kind: &'static str, records: Vec<R>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.name()) {
                return Err(CatalogError::DuplicateName {
                    catalog: kind,
                    name: record.name().to_string(),
                });
            }
        }
        Ok(Self { kind, records })
    }

    /// An empty catalog
    #[must_use]
    pub const fn empty(kind: &'static str) -> Self {
        Self {
            kind,
            records: Vec::new(),
        }
    }

    /// Short catalog name (e.g., "module", "API")
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the catalog holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in catalog order
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Iterate records in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Categories present in the catalog, deduplicated and sorted by label
    #[must_use]
    pub fn list_categories(&self) -> Vec<R::Category> {
        let unique: BTreeMap<&'static str, R::Category> = self
            .records
            .iter()
            .map(|r| (r.category().label(), r.category()))
            .collect();
        unique.into_values().collect()
    }

    /// Records tagged with `category`, in catalog order
    #[must_use]
    pub fn filter_by_category(&self, category: R::Category) -> Vec<&R> {
        self.records
            .iter()
            .filter(|r| r.category() == category)
            .collect()
    }

    /// Records whose category label equals `label` exactly
    ///
    /// Unknown labels simply match nothing.
    #[must_use]
    pub fn filter_by_category_label(&self, label: &str) -> Vec<&R> {
        self.records
            .iter()
            .filter(|r| r.category().label() == label)
            .collect()
    }

    /// First record whose name equals `name` exactly
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&R> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// Record count per category, keyed in order of first occurrence
    #[must_use]
    pub fn distribution_by_category(&self) -> Distribution<R::Category> {
        self.records.iter().map(CatalogRecord::category).collect()
    }

    /// Records grouped by category, groups in order of first occurrence
    #[must_use]
    pub fn group_by_category(&self) -> Vec<(R::Category, Vec<&R>)> {
        let mut groups: Vec<(R::Category, Vec<&R>)> = Vec::new();
        for record in &self.records {
            let category = record.category();
            if let Some((_, members)) = groups.iter_mut().find(|(c, _)| *c == category) {
                members.push(record);
            } else {
                groups.push((category, vec![record]));
            }
        }
        groups
    }

    /// Every record name, in catalog order
    #[must_use]
    pub fn list_all_names(&self) -> Vec<&str> {
        self.records.iter().map(CatalogRecord::name).collect()
    }
}

impl Catalog<ApiIntegration> {
    /// Integration count per complexity level, with zero counts included
    #[must_use]
    pub fn distribution_by_complexity(&self) -> ComplexityDistribution {
        self.records
            .iter()
            .map(|api| api.implementation_complexity)
            .collect()
    }
}

impl<'a, R> IntoIterator for &'a Catalog<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ApiCategory, Complexity, Module, ModuleCategory};

    fn module(name: &str, category: ModuleCategory) -> Module {
        Module::new(name, "desc", &["feature"], category, "10+ years")
    }

    fn small_catalog() -> Catalog<Module> {
        Catalog::new(
            "module",
            vec![
                module("Zeta", ModuleCategory::MechanicalEngineering),
                module("Alpha", ModuleCategory::CivilEngineering),
                module("Beta", ModuleCategory::MechanicalEngineering),
                module("Gamma", ModuleCategory::BiomedicalEngineering),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = Catalog::new(
            "module",
            vec![
                module("Same", ModuleCategory::CivilEngineering),
                module("Same", ModuleCategory::ChemicalEngineering),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateName {
                catalog: "module",
                name: "Same".to_string()
            }
        );
    }

    #[test]
    fn test_list_categories_sorted_by_label() {
        let categories = small_catalog().list_categories();
        assert_eq!(
            categories,
            vec![
                ModuleCategory::BiomedicalEngineering,
                ModuleCategory::CivilEngineering,
                ModuleCategory::MechanicalEngineering,
            ]
        );
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = small_catalog();
        let names: Vec<&str> = catalog
            .filter_by_category(ModuleCategory::MechanicalEngineering)
            .into_iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["Zeta", "Beta"]);
        assert!(catalog
            .filter_by_category(ModuleCategory::ChemicalEngineering)
            .is_empty());
    }

    #[test]
    fn test_filter_by_label() {
        let catalog = small_catalog();
        assert_eq!(catalog.filter_by_category_label("Civil Engineering").len(), 1);
        assert!(catalog.filter_by_category_label("civil engineering").is_empty());
        assert!(catalog.filter_by_category_label("Astrology").is_empty());
    }

    #[test]
    fn test_find_by_name() {
        let catalog = small_catalog();
        assert_eq!(
            catalog.find_by_name("Beta").map(|m| m.category),
            Some(ModuleCategory::MechanicalEngineering)
        );
        assert!(catalog.find_by_name("beta").is_none());
        assert!(catalog.find_by_name("").is_none());
    }

    #[test]
    fn test_distribution_and_grouping_follow_first_occurrence() {
        let catalog = small_catalog();
        let dist = catalog.distribution_by_category();
        assert_eq!(
            dist.keys(),
            vec![
                ModuleCategory::MechanicalEngineering,
                ModuleCategory::CivilEngineering,
                ModuleCategory::BiomedicalEngineering,
            ]
        );
        assert_eq!(dist.counts(), vec![2, 1, 1]);

        let groups = catalog.group_by_category();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].0, ModuleCategory::MechanicalEngineering);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn test_list_all_names_in_catalog_order() {
        assert_eq!(
            small_catalog().list_all_names(),
            vec!["Zeta", "Alpha", "Beta", "Gamma"]
        );
    }

    #[test]
    fn test_empty_catalog_is_total() {
        let catalog: Catalog<Module> = Catalog::empty("module");
        assert!(catalog.is_empty());
        assert!(catalog.list_categories().is_empty());
        assert!(catalog.list_all_names().is_empty());
        assert!(catalog.distribution_by_category().is_empty());
        assert!(catalog.find_by_name("anything").is_none());
    }

    #[test]
    fn test_complexity_distribution_on_empty_catalog() {
        let catalog: Catalog<ApiIntegration> = Catalog::empty("API");
        let dist = catalog.distribution_by_complexity();
        assert_eq!(dist, ComplexityDistribution::default());
        assert_eq!(dist.iter().count(), 3);
    }

    #[test]
    fn test_complexity_distribution_counts() {
        let apis = vec![
            ApiIntegration::new("A", ApiCategory::CybersecurityTools, "", &[], Complexity::High, ""),
            ApiIntegration::new("B", ApiCategory::CybersecurityTools, "", &[], Complexity::Low, ""),
            ApiIntegration::new("C", ApiCategory::EducationalContent, "", &[], Complexity::High, ""),
        ];
        let catalog = Catalog::new("API", apis).unwrap();
        let dist = catalog.distribution_by_complexity();
        assert_eq!(dist.low, 1);
        assert_eq!(dist.medium, 0);
        assert_eq!(dist.high, 2);
    }
}
