//! Module catalog contents, defined per topic group

use crate::core::models::Module;
use crate::core::models::ModuleCategory::{
    BiomedicalEngineering, ChemicalEngineering, CivilEngineering, CybersecurityEducation,
    K12FoundationalLearning, MechanicalEngineering,
};

/// K-12 foundational learning modules
#[must_use]
pub fn k12_modules() -> Vec<Module> {
    vec![
        Module::new(
            "Playtory",
            "Story-based learning where subjects like math, science, and language arts are taught through interactive narratives.",
            &["Interactive narratives", "Cross-subject integration", "Personalized reading levels"],
            K12FoundationalLearning,
            "5-12 years",
        ),
        Module::new(
            "MathQuest Land",
            "Gamified math adventures tailored to each grade level, promoting problem-solving skills.",
            &["Grade-specific challenges", "Adaptive difficulty", "Real-world applications"],
            K12FoundationalLearning,
            "6-12 years",
        ),
        Module::new(
            "EcoSchool Sim",
            "A sustainability simulator teaching environmental science through managing a virtual school ecosystem.",
            &["Resource management", "Environmental impact tracking", "Sustainable design challenges"],
            K12FoundationalLearning,
            "8-12 years",
        ),
        Module::new(
            "SkillSprint",
            "Micro-challenges focusing on specific academic and life skills, with daily tasks and animations.",
            &["Daily challenges", "Skill progression tracking", "Animated tutorials"],
            K12FoundationalLearning,
            "5-12 years",
        ),
        Module::new(
            "ParentPal",
            "Bridging home and school by translating classroom concepts into fun home activities for parents and children.",
            &["Home activity suggestions", "Parent-teacher communication", "Progress tracking"],
            K12FoundationalLearning,
            "5-12 years",
        ),
        Module::new(
            "YoungChangemakers",
            "Empowering students to tackle community challenges through digital teamwork and action plans.",
            &["Project-based learning", "Community engagement", "Digital collaboration tools"],
            K12FoundationalLearning,
            "9-12 years",
        ),
        Module::new(
            "EduMentorMatch",
            "A peer learning marketplace connecting older students with younger ones for tutoring and mentorship.",
            &["Peer matching algorithm", "Guided mentorship materials", "Progress tracking"],
            K12FoundationalLearning,
            "8-12 years",
        ),
        Module::new(
            "ThinkTank Jr.",
            "A platform hosting monthly real-world challenges, encouraging students to propose innovative solutions.",
            &["Monthly challenges", "Solution submission system", "Collaborative workspaces"],
            K12FoundationalLearning,
            "9-12 years",
        ),
    ]
}

/// Cybersecurity education modules
#[must_use]
pub fn cybersecurity_modules() -> Vec<Module> {
    vec![
        Module::new(
            "CyberSafe Campus",
            "A gamified platform teaching cyber hygiene through simulations like phishing emails and password tests.",
            &["Phishing simulations", "Password strength analysis", "Safe browsing habits"],
            CybersecurityEducation,
            "10+ years",
        ),
        Module::new(
            "PrivEd Protocol",
            "A privacy-centric LMS where students control their data using zero-knowledge encryption and decentralized identities.",
            &["Data privacy controls", "Zero-knowledge encryption", "Decentralized identity management"],
            CybersecurityEducation,
            "14+ years",
        ),
    ]
}

/// Civil, mechanical, chemical and biomedical engineering modules
#[must_use]
pub fn engineering_modules() -> Vec<Module> {
    vec![
        Module::new(
            "CivilVerse",
            "Collaborative city-building simulations focusing on zoning laws, infrastructure, and sustainability.",
            &["3D city modeling", "Infrastructure planning", "Collaborative design"],
            CivilEngineering,
            "14+ years",
        ),
        Module::new(
            "Failure Vault",
            "Exploration of real-world structural failures, analyzing causes and proposing improvements.",
            &["Case studies", "Failure analysis tools", "Improvement proposals"],
            CivilEngineering,
            "16+ years",
        ),
        Module::new(
            "RetroFix Garage",
            "Reverse engineering vintage machines through 3D exploded views and challenges.",
            &["3D mechanical models", "Interactive disassembly", "Engineering principles"],
            MechanicalEngineering,
            "14+ years",
        ),
        Module::new(
            "ThermoMentor",
            "Interactive thermodynamics tutor with drag-and-drop diagrams and animated lessons.",
            &["Animated thermodynamic processes", "Interactive diagrams", "Problem-solving exercises"],
            MechanicalEngineering,
            "16+ years",
        ),
        Module::new(
            "ChemDAO Classroom",
            "A decentralized platform for solving real industrial chemical challenges with token-based rewards.",
            &["Real industry challenges", "Token reward system", "Collaborative problem solving"],
            ChemicalEngineering,
            "16+ years",
        ),
        Module::new(
            "BodyVerse Blueprint",
            "A game where students build virtual human systems, simulate diseases, and test treatments.",
            &["Human anatomy modeling", "Disease simulation", "Treatment testing"],
            BiomedicalEngineering,
            "14+ years",
        ),
        Module::new(
            "BioDesign Studio",
            "Crowdsourced innovation hub connecting students with real biomedical challenges from hospitals and NGOs.",
            &["Real-world challenges", "Mentorship connections", "Prototype development"],
            BiomedicalEngineering,
            "16+ years",
        ),
    ]
}

/// Every module: K-12, then cybersecurity, then engineering
#[must_use]
pub fn all_modules() -> Vec<Module> {
    let mut modules = k12_modules();
    modules.extend(cybersecurity_modules());
    modules.extend(engineering_modules());
    modules
}
