//! Document structures shared by the extractors

use crate::processing::sections::SectionMap;
use crate::processing::text_processor::{normalize, split_lines};
use crate::processing::vocabulary::SectionKind;
use log::debug;

/// A résumé prepared for extraction: normalized text, its lines and the
/// sections located in them. Built once per parse and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeDocument {
    text: String,
    lines: Vec<String>,
    sections: SectionMap,
}

impl ResumeDocument {
    pub fn new(raw: &str) -> Self {
        let text = normalize(raw);
        let lines = split_lines(&text);
        let sections = SectionMap::locate(&lines);

        debug!(
            "Prepared document: {} characters, {} lines, sections {:?}",
            text.chars().count(),
            lines.len(),
            sections.kinds()
        );

        Self {
            text,
            lines,
            sections,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn sections(&self) -> &SectionMap {
        &self.sections
    }

    /// Body lines of a section; empty when the section is absent
    pub fn section_lines(&self, kind: SectionKind) -> &[String] {
        self.sections.lines(kind, &self.lines).unwrap_or(&[])
    }

    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.sections.contains(kind)
    }
}
