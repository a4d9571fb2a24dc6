//! Fixed vocabularies shared by the extractors

use serde::{Deserialize, Serialize};
use std::fmt;

/// A recognized résumé section header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Objective,
    Education,
    Experience,
    WorkExperience,
    ProfessionalExperience,
    Projects,
    Skills,
    Certifications,
    Publications,
    Awards,
    Achievements,
    Languages,
    Interests,
}

/// Header vocabulary in matching order.
///
/// Order matters: a line is assigned to the first entry it matches, so
/// "experience" is tested before "work experience".
pub const SECTION_HEADERS: &[SectionKind] = &[
    SectionKind::Summary,
    SectionKind::Objective,
    SectionKind::Education,
    SectionKind::Experience,
    SectionKind::WorkExperience,
    SectionKind::ProfessionalExperience,
    SectionKind::Projects,
    SectionKind::Skills,
    SectionKind::Certifications,
    SectionKind::Publications,
    SectionKind::Awards,
    SectionKind::Achievements,
    SectionKind::Languages,
    SectionKind::Interests,
];

/// Experience sections in priority order
pub const EXPERIENCE_SECTIONS: &[SectionKind] = &[
    SectionKind::Experience,
    SectionKind::WorkExperience,
    SectionKind::ProfessionalExperience,
];

/// Skills looked up in the full text when there is no skills section
pub const COMMON_SKILLS: &[&str] = &[
    "sql",
    "python",
    "excel",
    "microsoft excel",
    "power bi",
    "tableau",
    "jira",
    "confluence",
    "pandas",
    "numpy",
    "matplotlib",
    "seaborn",
    "scikit-learn",
    "machine learning",
    "statistics",
    "html",
    "css",
    "javascript",
    "git",
    "github",
    "agile",
    "stakeholder management",
    "financial analysis",
    "market research",
    "data analysis",
    "business intelligence",
];

impl SectionKind {
    /// Lowercase header text as it appears in a document
    pub fn header(&self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Objective => "objective",
            SectionKind::Education => "education",
            SectionKind::Experience => "experience",
            SectionKind::WorkExperience => "work experience",
            SectionKind::ProfessionalExperience => "professional experience",
            SectionKind::Projects => "projects",
            SectionKind::Skills => "skills",
            SectionKind::Certifications => "certifications",
            SectionKind::Publications => "publications",
            SectionKind::Awards => "awards",
            SectionKind::Achievements => "achievements",
            SectionKind::Languages => "languages",
            SectionKind::Interests => "interests",
        }
    }

    /// Exact (case-insensitive, trimmed) header match
    pub fn from_header(text: &str) -> Option<Self> {
        let lowered = text.trim().to_lowercase();
        SECTION_HEADERS
            .iter()
            .copied()
            .find(|kind| kind.header() == lowered)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}
