//! Educational module model

use crate::core::catalog::{CatalogCategory, CatalogRecord};
use crate::core::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Topic group a module belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleCategory {
    /// Story and game based learning for ages 5-12
    #[serde(rename = "K-12 Foundational Learning")]
    K12FoundationalLearning,
    /// Cyber hygiene and privacy education
    #[serde(rename = "Cybersecurity Education")]
    CybersecurityEducation,
    /// City-building and structural analysis
    #[serde(rename = "Civil Engineering")]
    CivilEngineering,
    /// Machines and thermodynamics
    #[serde(rename = "Mechanical Engineering")]
    MechanicalEngineering,
    /// Industrial chemistry challenges
    #[serde(rename = "Chemical Engineering")]
    ChemicalEngineering,
    /// Human systems and medical devices
    #[serde(rename = "Biomedical Engineering")]
    BiomedicalEngineering,
}

impl ModuleCategory {
    /// Every module category, in declaration order
    pub const ALL: [Self; 6] = [
        Self::K12FoundationalLearning,
        Self::CybersecurityEducation,
        Self::CivilEngineering,
        Self::MechanicalEngineering,
        Self::ChemicalEngineering,
        Self::BiomedicalEngineering,
    ];

    /// Human-readable label, as shown in listings and reports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::K12FoundationalLearning => "K-12 Foundational Learning",
            Self::CybersecurityEducation => "Cybersecurity Education",
            Self::CivilEngineering => "Civil Engineering",
            Self::MechanicalEngineering => "Mechanical Engineering",
            Self::ChemicalEngineering => "Chemical Engineering",
            Self::BiomedicalEngineering => "Biomedical Engineering",
        }
    }
}

impl CatalogCategory for ModuleCategory {
    fn label(self) -> &'static str {
        self.as_str()
    }

    fn all() -> &'static [Self] {
        &Self::ALL
    }
}

impl fmt::Display for ModuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// An educational module offered by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Unique module name (e.g., "MathQuest Land")
    pub name: String,

    /// One-paragraph summary
    pub description: String,

    /// Key features, in presentation order
    pub features: Vec<String>,

    /// Topic group
    pub category: ModuleCategory,

    /// Informal target age range (e.g., "6-12 years")
    pub age_range: String,
}

impl Module {
    /// Create a new module
    ///
    /// # Arguments
    /// * `name` - Unique module name
    /// * `description` - Summary text
    /// * `features` - Key features in order
    /// * `category` - Topic group
    /// * `age_range` - Informal age range
    #[must_use]
    pub fn new(
        name: &str,
        description: &str,
        features: &[&str],
        category: ModuleCategory,
        age_range: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            features: features.iter().map(ToString::to_string).collect(),
            category,
            age_range: age_range.to_string(),
        }
    }
}

impl CatalogRecord for Module {
    type Category = ModuleCategory;

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> ModuleCategory {
        self.category
    }

    /// "Name - age range"
    fn heading(&self) -> String {
        format!("{} - {}", self.name, self.age_range)
    }

    fn not_found(name: &str) -> CatalogError {
        CatalogError::ModuleNotFound(name.to_string())
    }
}

/// Detail panel: name followed by indented fields and a feature list
impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  Category:    {}", self.category)?;
        writeln!(f, "  Age Range:   {}", self.age_range)?;
        writeln!(f, "  Description: {}", self.description)?;
        writeln!(f, "  Key Features:")?;
        for feature in &self.features {
            writeln!(f, "    - {feature}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Module {
        Module::new(
            "CivilVerse",
            "Collaborative city-building simulations.",
            &["3D city modeling", "Infrastructure planning"],
            ModuleCategory::CivilEngineering,
            "14+ years",
        )
    }

    #[test]
    fn test_module_creation() {
        let module = sample();
        assert_eq!(module.name, "CivilVerse");
        assert_eq!(module.features.len(), 2);
        assert_eq!(module.features[0], "3D city modeling");
        assert_eq!(module.category, ModuleCategory::CivilEngineering);
        assert_eq!(module.heading(), "CivilVerse - 14+ years");
    }

    #[test]
    fn test_not_found_error() {
        assert_eq!(
            Module::not_found("Ghost"),
            CatalogError::ModuleNotFound("Ghost".to_string())
        );
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!(
            "k-12 foundational learning".parse::<ModuleCategory>(),
            Ok(ModuleCategory::K12FoundationalLearning)
        );
        assert_eq!(
            " Civil Engineering ".parse::<ModuleCategory>(),
            Ok(ModuleCategory::CivilEngineering)
        );
    }

    #[test]
    fn test_category_parse_rejects_unknown() {
        let err = "Underwater Basket Weaving"
            .parse::<ModuleCategory>()
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory { .. }));
        assert!(err.to_string().contains("Biomedical Engineering"));
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&ModuleCategory::K12FoundationalLearning).unwrap();
        assert_eq!(json, "\"K-12 Foundational Learning\"");
    }

    #[test]
    fn test_detail_panel_lists_features() {
        let text = sample().to_string();
        assert!(text.starts_with("CivilVerse\n"));
        assert!(text.contains("Category:    Civil Engineering"));
        assert!(text.contains("    - Infrastructure planning\n"));
    }
}
