//! Third-party API integration model

use crate::core::catalog::{CatalogCategory, CatalogRecord};
use crate::core::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of an API integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiCategory {
    /// Lesson, exercise and flashcard providers
    #[serde(rename = "Educational Content")]
    EducationalContent,
    /// Threat intelligence and URL/file scanning services
    #[serde(rename = "Cybersecurity Tools")]
    CybersecurityTools,
    /// Visual programming and open data sources
    #[serde(rename = "Data Visualization and Interaction")]
    DataVisualizationAndInteraction,
}

impl ApiCategory {
    /// Every API category, in declaration order
    pub const ALL: [Self; 3] = [
        Self::EducationalContent,
        Self::CybersecurityTools,
        Self::DataVisualizationAndInteraction,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EducationalContent => "Educational Content",
            Self::CybersecurityTools => "Cybersecurity Tools",
            Self::DataVisualizationAndInteraction => "Data Visualization and Interaction",
        }
    }
}

impl CatalogCategory for ApiCategory {
    fn label(self) -> &'static str {
        self.as_str()
    }

    fn all() -> &'static [Self] {
        &Self::ALL
    }
}

impl fmt::Display for ApiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// Estimated effort to integrate an API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Complexity {
    /// Basic HTTP requests and simple response parsing
    Low,
    /// Authentication, pagination or richer data structures
    Medium,
    /// Complex authentication, webhooks or heavy data processing
    High,
}

impl Complexity {
    /// All levels, lowest first
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Label as displayed ("Low", "Medium", "High")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Guidance shown alongside the complexity chart
    #[must_use]
    pub const fn implementation_note(self) -> &'static str {
        match self {
            Self::Low => "Typically requires basic HTTP requests and simple response parsing.",
            Self::Medium => {
                "May involve authentication, pagination, or more complex data structures."
            }
            Self::High => {
                "Requires complex authentication, webhook implementations, or extensive data processing."
            }
        }
    }

    /// Chart colour for this level
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "#4CAF50",
            Self::Medium => "#FFC107",
            Self::High => "#F44336",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(CatalogError::UnknownComplexity(s.to_string())),
        }
    }
}

/// A third-party API the platform can integrate with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiIntegration {
    /// Unique API name (e.g., "Quizlet API")
    pub name: String,

    /// Classification
    pub category: ApiCategory,

    /// One-line summary
    pub description: String,

    /// Example uses within the platform, in presentation order
    pub use_cases: Vec<String>,

    /// Estimated integration effort
    pub implementation_complexity: Complexity,

    /// Link to the provider's documentation (not validated)
    pub documentation_url: String,
}

impl ApiIntegration {
    /// Create a new API integration record
    #[must_use]
    pub fn new(
        name: &str,
        category: ApiCategory,
        description: &str,
        use_cases: &[&str],
        implementation_complexity: Complexity,
        documentation_url: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            category,
            description: description.to_string(),
            use_cases: use_cases.iter().map(ToString::to_string).collect(),
            implementation_complexity,
            documentation_url: documentation_url.to_string(),
        }
    }
}

impl CatalogRecord for ApiIntegration {
    type Category = ApiCategory;

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> ApiCategory {
        self.category
    }

    fn not_found(name: &str) -> CatalogError {
        CatalogError::IntegrationNotFound(name.to_string())
    }
}

impl fmt::Display for ApiIntegration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  Category:      {}", self.category)?;
        writeln!(f, "  Description:   {}", self.description)?;
        writeln!(f, "  Use Cases:")?;
        for use_case in &self.use_cases {
            writeln!(f, "    - {use_case}")?;
        }
        writeln!(
            f,
            "  Implementation Complexity: {}",
            self.implementation_complexity
        )?;
        writeln!(f, "  Documentation: {}", self.documentation_url)
    }
}
