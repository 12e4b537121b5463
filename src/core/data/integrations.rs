//! API integration catalog contents

use crate::core::models::ApiCategory::{
    CybersecurityTools, DataVisualizationAndInteraction, EducationalContent,
};
use crate::core::models::ApiIntegration;
use crate::core::models::Complexity::{High, Low, Medium};

/// Every API integration, in presentation order
#[must_use]
pub fn all_integrations() -> Vec<ApiIntegration> {
    vec![
        ApiIntegration::new(
            "Khan Academy API",
            EducationalContent,
            "Access to a vast library of educational videos and exercises.",
            &[
                "Supplement custom learning paths with Khan Academy resources",
                "Import specific exercises for module-aligned practice",
                "Map Khan Academy content to EduVerse learning objectives",
            ],
            Medium,
            "https://api-explorer.khanacademy.org/",
        ),
        ApiIntegration::new(
            "Quizlet API",
            EducationalContent,
            "Integration of flashcards and study sets across various subjects.",
            &[
                "Import subject-specific flashcards into modules",
                "Allow students to create and share study sets",
                "Enable spaced repetition learning within the platform",
            ],
            Low,
            "https://quizlet.com/api/2.0/docs",
        ),
        ApiIntegration::new(
            "PhishTank API",
            CybersecurityTools,
            "Real-time phishing URL data for simulations.",
            &[
                "Create realistic phishing simulation exercises",
                "Update cybersecurity modules with current threat examples",
                "Train students to identify phishing patterns",
            ],
            Medium,
            "https://phishtank.org/api_info.php",
        ),
        ApiIntegration::new(
            "Google Safe Browsing API",
            CybersecurityTools,
            "Checking URLs against Google's constantly updated lists of unsafe web resources.",
            &[
                "Implement URL safety checking in student research activities",
                "Demonstrate real-time threat detection",
                "Build safe browsing simulations",
            ],
            Medium,
            "https://developers.google.com/safe-browsing",
        ),
        ApiIntegration::new(
            "VirusTotal API",
            CybersecurityTools,
            "Aggregated data on malicious files and URLs.",
            &[
                "Demonstrate multi-engine virus scanning",
                "Analyze potentially malicious files in a safe environment",
                "Compare detection rates across security vendors",
            ],
            High,
            "https://developers.virustotal.com/reference",
        ),
        ApiIntegration::new(
            "Blockly",
            DataVisualizationAndInteraction,
            "Visual programming interface for creating interactive coding lessons.",
            &[
                "Create drag-and-drop programming exercises",
                "Build logic challenges for younger students",
                "Design algorithm visualization activities",
            ],
            Medium,
            "https://developers.google.com/blockly",
        ),
        ApiIntegration::new(
            "Urban Institute's Education Data API",
            DataVisualizationAndInteraction,
            "Access to a wide range of educational data for analysis and visualization.",
            &[
                "Incorporate real educational statistics into lessons",
                "Create data visualization exercises for students",
                "Build comparative analyses across educational institutions",
            ],
            High,
            "https://educationdata.urban.org/documentation/",
        ),
    ]
}
