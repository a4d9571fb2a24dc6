//! Education entries from the education section

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static DEGREE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:b\.?e\.?|b\.?tech|bachelor|m\.?e\.?|m\.?tech|master|mba|b\.?sc|m\.?sc|ph\.?d)\b",
    )
    .expect("valid degree regex")
});
static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("valid year regex"));
static INSTITUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)university|college|institute|iit|nit").expect("valid institution regex")
});
static GRADE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:cgpa|gpa|percentage)[: ]+([0-9.]{1,4})").expect("valid grade regex")
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

impl EducationEntry {
    pub fn is_empty(&self) -> bool {
        self.degree.is_none()
            && self.institution.is_none()
            && self.year.is_none()
            && self.grade.is_none()
    }
}

/// Builds entries line by line; a degree line closes the entry in progress
#[derive(Debug, Default)]
struct EducationAccumulator {
    current: EducationEntry,
    entries: Vec<EducationEntry>,
}

impl EducationAccumulator {
    fn feed(&mut self, line: &str) {
        if DEGREE.is_match(line) {
            self.flush();
            self.current.degree = Some(line.to_string());
        }

        if let Some(year) = YEAR.find_iter(line).last() {
            self.current.year = Some(year.as_str().to_string());
        }
        if INSTITUTION.is_match(line) {
            self.current.institution = Some(line.to_string());
        }
        if let Some(grade) = GRADE.captures(line).and_then(|caps| caps.get(1)) {
            self.current.grade = Some(grade.as_str().to_string());
        }
    }

    fn flush(&mut self) {
        let entry = std::mem::take(&mut self.current);
        if !entry.is_empty() {
            self.entries.push(entry);
        }
    }

    fn finish(mut self) -> Vec<EducationEntry> {
        self.flush();
        self.entries
    }
}

/// Parse the lines of an education section into entries
pub fn parse_education(section: &[String]) -> Vec<EducationEntry> {
    let mut accumulator = EducationAccumulator::default();
    for line in section {
        accumulator.feed(line);
    }
    accumulator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_single_entry() {
        let entries = parse_education(&section(&[
            "B.Tech in Computer Science",
            "XYZ Institute of Technology",
            "2021",
            "CGPA: 8.5",
        ]));

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert!(entry.degree.as_deref().unwrap().starts_with("B.Tech"));
        assert_eq!(entry.institution.as_deref(), Some("XYZ Institute of Technology"));
        assert_eq!(entry.year.as_deref(), Some("2021"));
        assert_eq!(entry.grade.as_deref(), Some("8.5"));
    }

    #[test]
    fn test_degree_line_starts_new_entry() {
        let entries = parse_education(&section(&[
            "Master of Science, Data Science",
            "State University, 2020",
            "Bachelor of Arts",
            "City College 2014 - 2018",
            "Percentage: 78",
        ]));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].degree.as_deref(), Some("Master of Science, Data Science"));
        assert_eq!(entries[0].institution.as_deref(), Some("State University, 2020"));
        assert_eq!(entries[0].year.as_deref(), Some("2020"));
        assert_eq!(entries[0].grade, None);
        assert_eq!(entries[1].year.as_deref(), Some("2018"));
        assert_eq!(entries[1].grade.as_deref(), Some("78"));
    }

    #[test]
    fn test_fields_on_degree_line() {
        let entries = parse_education(&section(&["MBA, Harvard University, 2015, GPA 3.9"]));

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].year.as_deref(), Some("2015"));
        assert_eq!(entries[0].grade.as_deref(), Some("3.9"));
        assert!(entries[0].institution.is_some());
    }

    #[test]
    fn test_fields_before_first_degree_form_an_entry() {
        let entries = parse_education(&section(&["Springfield College", "PhD in Physics"]));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].degree, None);
        assert_eq!(entries[0].institution.as_deref(), Some("Springfield College"));
        assert_eq!(entries[1].degree.as_deref(), Some("PhD in Physics"));
    }

    #[test]
    fn test_institution_markers_match_inside_words() {
        let entries = parse_education(&section(&["B.E. Mechanical", "NITK Surathkal"]));

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].institution.as_deref(), Some("NITK Surathkal"));
    }

    #[test]
    fn test_empty_section() {
        assert!(parse_education(&[]).is_empty());
        assert!(parse_education(&section(&["Relevant coursework"])).is_empty());
    }

    #[test]
    fn test_absent_fields_not_serialized() {
        let entry = EducationEntry {
            degree: Some("BSc".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!({ "degree": "BSc" }));
    }
}
