//! Certification and language lists

use crate::processing::skills::LIST_DELIMITERS;

/// One certification per line, bullet glyphs stripped, duplicates kept
pub fn parse_certifications(section: &[String]) -> Vec<String> {
    section
        .iter()
        .map(|line| line.trim_matches(&['-', '*', '•', ' '][..]).trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Languages split on the skills delimiters.
///
/// Unlike skills, the original casing is kept and nothing is de-duplicated.
pub fn parse_languages(section: &[String]) -> Vec<String> {
    let block = section.join(" ");
    LIST_DELIMITERS
        .split(&block)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_certifications() {
        let certs = parse_certifications(&section(&[
            "- AWS Certified Solutions Architect",
            "• CKA -",
            "* ",
            "- AWS Certified Solutions Architect",
        ]));

        assert_eq!(
            certs,
            vec![
                "AWS Certified Solutions Architect",
                "CKA",
                "AWS Certified Solutions Architect"
            ]
        );
    }

    #[test]
    fn test_languages_keep_case_and_duplicates() {
        let languages = parse_languages(&section(&["English, Hindi; French |", "English"]));
        assert_eq!(languages, vec!["English", "Hindi", "French", "English"]);
    }

    #[test]
    fn test_empty_sections() {
        assert!(parse_certifications(&[]).is_empty());
        assert!(parse_languages(&[]).is_empty());
    }
}
