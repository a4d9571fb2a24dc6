//! Profile assembly: runs every extractor over one prepared document

use crate::config::ParsingConfig;
use crate::processing::contact::{extract_contact_info, ContactInfo};
use crate::processing::document::ResumeDocument;
use crate::processing::education::{parse_education, EducationEntry};
use crate::processing::experience::{parse_experience, ExperienceEntry};
use crate::processing::lists::{parse_certifications, parse_languages};
use crate::processing::name::guess_name;
use crate::processing::skills::{skills_from_section, skills_from_vocabulary};
use crate::processing::vocabulary::{SectionKind, EXPERIENCE_SECTIONS};
use log::debug;
use serde::{Deserialize, Serialize};

/// Structured profile recovered from a résumé
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub contact: ContactInfo,
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
}

/// Heuristic résumé parser. Never fails: missing sections produce empty
/// collections.
#[derive(Debug, Clone, Default)]
pub struct ResumeParser {
    config: ParsingConfig,
}

impl ResumeParser {
    pub fn new(config: ParsingConfig) -> Self {
        Self { config }
    }

    pub fn parse(&self, raw: &str) -> Profile {
        self.parse_document(&ResumeDocument::new(raw))
    }

    pub fn parse_document(&self, doc: &ResumeDocument) -> Profile {
        let profile = Profile {
            name: guess_name(doc.lines(), &self.config),
            contact: extract_contact_info(doc.text(), self.config.max_portfolio_urls),
            skills: self.extract_skills(doc),
            education: parse_education(doc.section_lines(SectionKind::Education)),
            experience: Self::extract_experience(doc),
            certifications: parse_certifications(doc.section_lines(SectionKind::Certifications)),
            languages: parse_languages(doc.section_lines(SectionKind::Languages)),
        };

        debug!(
            "Parsed profile: {} skills, {} education, {} experience entries",
            profile.skills.len(),
            profile.education.len(),
            profile.experience.len()
        );
        profile
    }

    fn extract_skills(&self, doc: &ResumeDocument) -> Vec<String> {
        if doc.has_section(SectionKind::Skills) {
            skills_from_section(doc.section_lines(SectionKind::Skills), self.config.max_skill_chars)
        } else {
            skills_from_vocabulary(doc.text())
        }
    }

    /// Only the first present experience section is read
    fn extract_experience(doc: &ResumeDocument) -> Vec<ExperienceEntry> {
        EXPERIENCE_SECTIONS
            .iter()
            .find(|kind| doc.has_section(**kind))
            .map(|kind| parse_experience(doc.section_lines(*kind)))
            .unwrap_or_default()
    }
}

/// Parse raw résumé text with the default heuristics
pub fn parse_profile(raw: &str) -> Profile {
    ResumeParser::default().parse(raw)
}
