//! Work experience entries from the experience section
//!
//! Every line is classified once, then folded into an accumulator that is
//! flushed whenever a new role header shows up.

use crate::processing::dates::parse_date_range;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*•] ").expect("valid bullet regex"));
static AT_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s@\s|\sat\s").expect("valid at-split regex"));
static DASH_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s-\s|\s\|\s").expect("valid dash-split regex"));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    pub bullets: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
}

impl ExperienceEntry {
    /// Whether the entry has anything that identifies a position
    pub fn is_started(&self) -> bool {
        self.role.is_some() || self.company.is_some() || !self.bullets.is_empty()
    }
}

/// What a single experience line contributes
#[derive(Debug, Clone, PartialEq)]
pub enum ExperienceLine<'a> {
    Bullet(&'a str),
    Dates(String),
    Header {
        role: &'a str,
        company: Option<&'a str>,
    },
    Description(&'a str),
    Ignored,
}

impl<'a> ExperienceLine<'a> {
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ExperienceLine::Ignored;
        }

        if BULLET.is_match(line) {
            return ExperienceLine::Bullet(line.trim_start_matches(&['-', '*', '•', ' '][..]));
        }

        let dates = parse_date_range(line);
        if !dates.is_empty() {
            return ExperienceLine::Dates(dates);
        }

        if looks_like_header(line) {
            let (role, company) = split_header(line);
            return ExperienceLine::Header { role, company };
        }

        if line.chars().count() > 10 {
            ExperienceLine::Description(line)
        } else {
            ExperienceLine::Ignored
        }
    }
}

fn looks_like_header(line: &str) -> bool {
    let lowered = line.to_lowercase();
    if lowered.contains('@') || lowered.contains(" at ") {
        return true;
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    let capitalized = words
        .iter()
        .filter(|word| word.chars().next().is_some_and(char::is_uppercase))
        .count();
    capitalized >= 3 && words.len() <= 12
}

/// "Role @ Company", "Role at Company", "Role - Company", "Role | Company",
/// otherwise the whole line is the role
fn split_header(line: &str) -> (&str, Option<&str>) {
    for splitter in [&*AT_SPLIT, &*DASH_SPLIT] {
        let parts: Vec<&str> = splitter.split(line).collect();
        if let [role, company] = parts.as_slice() {
            return (role.trim(), Some(company.trim()));
        }
    }
    (line, None)
}

#[derive(Debug, Default)]
struct ExperienceAccumulator {
    current: ExperienceEntry,
    entries: Vec<ExperienceEntry>,
}

impl ExperienceAccumulator {
    fn apply(&mut self, line: ExperienceLine<'_>) {
        match line {
            ExperienceLine::Bullet(text) => self.current.bullets.push(text.to_string()),
            ExperienceLine::Dates(dates) => self.current.dates = Some(dates),
            ExperienceLine::Header { role, company } => {
                if self.current.is_started() {
                    self.flush();
                }
                self.current.role = Some(role.to_string());
                self.current.company = company.map(str::to_string);
            }
            ExperienceLine::Description(text) => self.current.description.push(text.to_string()),
            ExperienceLine::Ignored => {}
        }
    }

    fn flush(&mut self) {
        let entry = std::mem::take(&mut self.current);
        if entry.is_started() {
            self.entries.push(entry);
        }
    }

    fn finish(mut self) -> Vec<ExperienceEntry> {
        self.flush();
        self.entries
    }
}

/// Parse the lines of an experience section into entries.
///
/// Dates and description lines seen before the first header stay with the
/// entry that header opens. An entry that never gets a role, company or
/// bullet is dropped.
pub fn parse_experience(section: &[String]) -> Vec<ExperienceEntry> {
    let mut accumulator = ExperienceAccumulator::default();
    for line in section {
        accumulator.apply(ExperienceLine::classify(line));
    }
    accumulator.finish()
}
