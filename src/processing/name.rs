//! Candidate name detection from the top of the document

use crate::config::ParsingConfig;
use crate::processing::vocabulary::SectionKind;
use regex::Regex;
use std::sync::LazyLock;

static CONTACT_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)@|http|www").expect("valid contact marker regex"));
static ALL_CAPS_BANNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z ]{2,}$").expect("valid banner regex"));

/// Pick the first leading line that reads like a person's name.
///
/// Returns an empty string when no line qualifies.
pub fn guess_name(lines: &[String], config: &ParsingConfig) -> String {
    lines
        .iter()
        .take(config.name_scan_lines)
        .find(|line| is_name_candidate(line, config))
        .cloned()
        .unwrap_or_default()
}

fn is_name_candidate(line: &str, config: &ParsingConfig) -> bool {
    if line.chars().count() > config.name_max_chars {
        return false;
    }
    if CONTACT_MARKERS.is_match(line) || SectionKind::from_header(line).is_some() {
        return false;
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() || words.len() > 5 {
        return false;
    }

    let capitalized = words
        .iter()
        .filter(|word| word.chars().next().is_some_and(char::is_uppercase))
        .count();
    if (capitalized as f32) / (words.len() as f32) < config.name_min_capitalized_ratio {
        return false;
    }

    // all-caps lines are banners or headings, not names
    !ALL_CAPS_BANNER.is_match(line)
}
