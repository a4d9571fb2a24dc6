//! Skills extraction: explicit section first, vocabulary lookup otherwise

use crate::processing::vocabulary::COMMON_SKILLS;
use aho_corasick::AhoCorasick;
use log::debug;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Delimiters shared by the skills and languages lists
pub(crate) static LIST_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;|/\n\u{2022}\u{00B7}\u{25AA}-]").expect("valid delimiter regex"));

static SKILL_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(COMMON_SKILLS)
        .expect("valid skill patterns")
});

/// Skills from the body of a skills section.
///
/// Tokens are lowercased, de-duplicated in first-seen order and dropped when
/// longer than `max_chars` characters.
pub fn skills_from_section(section: &[String], max_chars: usize) -> Vec<String> {
    let block = section.join(" ");
    let tokens = LIST_DELIMITERS
        .split(&block)
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty() && token.chars().count() <= max_chars);

    dedup_preserving_order(tokens)
}

/// Vocabulary skills that occur anywhere in `text`, in vocabulary order.
///
/// Plain substring matching: "excel" is found inside "microsoft excel" and
/// "git" inside "github".
pub fn skills_from_vocabulary(text: &str) -> Vec<String> {
    let found: HashSet<usize> = SKILL_MATCHER
        .find_overlapping_iter(text)
        .map(|mat| mat.pattern().as_usize())
        .collect();
    debug!("Vocabulary fallback matched {} skills", found.len());

    COMMON_SKILLS
        .iter()
        .enumerate()
        .filter(|(id, _)| found.contains(id))
        .map(|(_, skill)| skill.to_string())
        .collect()
}

pub(crate) fn dedup_preserving_order(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(item.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_section_tokens() {
        let skills = skills_from_section(
            &section(&["Python, SQL; Tableau | Power BI,", "Git/GitHub • Excel;", "python"]),
            40,
        );
        assert_eq!(
            skills,
            vec!["python", "sql", "tableau", "power bi", "git", "github", "excel"]
        );
    }

    #[test]
    fn test_hyphen_splits_tokens() {
        let skills = skills_from_section(&section(&["- Rust", "- scikit-learn"]), 40);
        assert_eq!(skills, vec!["rust", "scikit", "learn"]);
    }

    #[test]
    fn test_long_tokens_dropped() {
        let long = "a very long description of something that is clearly not a skill, Docker";
        let skills = skills_from_section(&section(&[long]), 40);
        assert_eq!(skills, vec!["docker"]);
    }

    #[test]
    fn test_lines_are_joined_with_spaces() {
        // a line break alone does not separate two skills
        let skills = skills_from_section(&section(&["Rust", "Go"]), 40);
        assert_eq!(skills, vec!["rust go"]);
    }

    #[test]
    fn test_vocabulary_fallback() {
        let skills = skills_from_vocabulary("Proficient in Python and SQL");
        assert!(skills.contains(&"python".to_string()));
        assert!(skills.contains(&"sql".to_string()));
    }

    #[test]
    fn test_vocabulary_order_and_overlaps() {
        let skills = skills_from_vocabulary("Microsoft Excel wizard, code on GitHub, some SQL");
        assert_eq!(skills, vec!["sql", "excel", "microsoft excel", "git", "github"]);
    }

    #[test]
    fn test_vocabulary_no_match() {
        assert!(skills_from_vocabulary("Gardening and cooking").is_empty());
    }
}
