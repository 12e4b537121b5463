//! Record counts per category and per complexity level

use super::CatalogCategory;
use crate::core::models::Complexity;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Count of records per category, keyed in order of first occurrence
///
/// Catalogs hold a handful of categories, so entries live in a `Vec` and
/// lookups are linear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution<K> {
    entries: Vec<(K, usize)>,
}

impl<K: CatalogCategory> Distribution<K> {
    /// Create an empty distribution
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Count one occurrence of `key`, appending it if unseen
    pub fn record(&mut self, key: K) {
        if let Some((_, count)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            *count += 1;
        } else {
            self.entries.push((key, 1));
        }
    }

    /// Count for `key`, or `None` if it never occurred
    #[must_use]
    pub fn get(&self, key: K) -> Option<usize> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, count)| *count)
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Largest single count (0 when empty)
    #[must_use]
    pub fn max(&self) -> usize {
        self.entries.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }

    /// Number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been counted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, count)` pairs in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (K, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Keys in first-occurrence order
    #[must_use]
    pub fn keys(&self) -> Vec<K> {
        self.entries.iter().map(|(k, _)| *k).collect()
    }

    /// Counts aligned with [`keys`](Self::keys)
    #[must_use]
    pub fn counts(&self) -> Vec<usize> {
        self.entries.iter().map(|(_, count)| *count).collect()
    }
}

impl<K: CatalogCategory> Default for Distribution<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: CatalogCategory> FromIterator<K> for Distribution<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut dist = Self::new();
        for key in iter {
            dist.record(key);
        }
        dist
    }
}

/// Serializes as a JSON object `{ label: count }`, preserving key order
impl<K: CatalogCategory> Serialize for Distribution<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key.label(), count)?;
        }
        map.end()
    }
}

/// Count of API integrations per complexity level
///
/// Every level is a field, so levels without any integration still report 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ComplexityDistribution {
    /// Integrations rated Low
    #[serde(rename = "Low")]
    pub low: usize,
    /// Integrations rated Medium
    #[serde(rename = "Medium")]
    pub medium: usize,
    /// Integrations rated High
    #[serde(rename = "High")]
    pub high: usize,
}

impl ComplexityDistribution {
    /// Count one integration at `level`
    pub fn record(&mut self, level: Complexity) {
        match level {
            Complexity::Low => self.low += 1,
            Complexity::Medium => self.medium += 1,
            Complexity::High => self.high += 1,
        }
    }

    /// Count for `level`
    #[must_use]
    pub const fn get(&self, level: Complexity) -> usize {
        match level {
            Complexity::Low => self.low,
            Complexity::Medium => self.medium,
            Complexity::High => self.high,
        }
    }

    /// Sum over all levels
    #[must_use]
    pub const fn total(&self) -> usize {
        self.low + self.medium + self.high
    }

    /// Largest single count
    #[must_use]
    pub fn max(&self) -> usize {
        self.low.max(self.medium).max(self.high)
    }

    /// Iterate `(level, count)` pairs: Low, Medium, High
    pub fn iter(&self) -> impl Iterator<Item = (Complexity, usize)> + '_ {
        Complexity::ALL.into_iter().map(|level| (level, self.get(level)))
    }
}

impl FromIterator<Complexity> for ComplexityDistribution {
    fn from_iter<I: IntoIterator<Item = Complexity>>(iter: I) -> Self {
        let mut dist = Self::default();
        for level in iter {
            dist.record(level);
        }
        dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ModuleCategory;

    #[test]
    fn test_distribution_keeps_first_occurrence_order() {
        let dist: Distribution<ModuleCategory> = [
            ModuleCategory::CivilEngineering,
            ModuleCategory::BiomedicalEngineering,
            ModuleCategory::CivilEngineering,
        ]
        .into_iter()
        .collect();

        assert_eq!(
            dist.keys(),
            vec![
                ModuleCategory::CivilEngineering,
                ModuleCategory::BiomedicalEngineering
            ]
        );
        assert_eq!(dist.counts(), vec![2, 1]);
        assert_eq!(dist.total(), 3);
        assert_eq!(dist.max(), 2);
        assert_eq!(dist.get(ModuleCategory::ChemicalEngineering), None);
    }

    #[test]
    fn test_empty_distribution() {
        let dist: Distribution<ModuleCategory> = Distribution::new();
        assert!(dist.is_empty());
        assert_eq!(dist.total(), 0);
        assert_eq!(dist.max(), 0);
    }

    #[test]
    fn test_distribution_serializes_in_order() {
        let dist: Distribution<ModuleCategory> = [
            ModuleCategory::MechanicalEngineering,
            ModuleCategory::CivilEngineering,
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&dist).unwrap();
        assert_eq!(
            json,
            r#"{"Mechanical Engineering":1,"Civil Engineering":1}"#
        );
    }

    #[test]
    fn test_complexity_distribution_has_zero_entries() {
        let dist: ComplexityDistribution = [Complexity::High, Complexity::High]
            .into_iter()
            .collect();
        let pairs: Vec<_> = dist.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Complexity::Low, 0),
                (Complexity::Medium, 0),
                (Complexity::High, 2)
            ]
        );
        assert_eq!(dist.total(), 2);

        let json = serde_json::to_string(&dist).unwrap();
        assert_eq!(json, r#"{"Low":0,"Medium":0,"High":2}"#);
    }
}
