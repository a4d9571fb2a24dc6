//! Contact details pulled from the whole normalized text

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
});

static PHONES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        // Indian mobile: optional +91 / trunk 0, ten digits starting 6-9
        Regex::new(r"(?:\+?91[\- ]?)?(?:0[\- ]?)?[6-9]\d{9}").expect("valid mobile regex"),
        // generic international
        Regex::new(r"\+\d{1,3}[\- ]?\(?\d{1,4}\)?[\- ]?\d{3,4}[\- ]?\d{3,4}")
            .expect("valid international phone regex"),
    ]
});

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[\w\-./?=&%#]+").expect("valid url regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub linkedin: Vec<String>,
    pub github: Vec<String>,
    pub portfolio: Vec<String>,
}

/// Extract emails, phone numbers and profile URLs.
///
/// Emails are de-duplicated case-insensitively but keep the casing of their
/// first appearance. At most one LinkedIn and one GitHub URL are kept; every
/// other URL goes to `portfolio`, capped at `max_portfolio`.
pub fn extract_contact_info(text: &str, max_portfolio: usize) -> ContactInfo {
    let mut seen_emails = HashSet::new();
    let emails = EMAIL
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|email| seen_emails.insert(email.to_lowercase()))
        .map(str::to_string)
        .collect();

    let mut seen_phones = HashSet::new();
    let phones = PHONES
        .iter()
        .flat_map(|regex| regex.find_iter(text))
        .map(|m| WHITESPACE_RUN.replace_all(m.as_str(), " ").trim().to_string())
        .filter(|phone| seen_phones.insert(phone.clone()))
        .collect();

    let mut seen_urls = HashSet::new();
    let urls: Vec<&str> = URL
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|url| seen_urls.insert(*url))
        .collect();

    let linkedin = urls
        .iter()
        .find(|url| url.contains("linkedin.com"))
        .map(|url| url.to_string());
    let github = urls
        .iter()
        .find(|url| url.contains("github.com"))
        .map(|url| url.to_string());
    let portfolio = urls
        .iter()
        .filter(|url| !url.contains("linkedin.com") && !url.contains("github.com"))
        .take(max_portfolio)
        .map(|url| url.to_string())
        .collect();

    ContactInfo {
        emails,
        phones,
        linkedin: linkedin.into_iter().collect(),
        github: github.into_iter().collect(),
        portfolio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_line() {
        let info = extract_contact_info(
            "Contact: a@b.com, +919812345678, https://linkedin.com/in/x",
            3,
        );

        assert_eq!(info.emails, vec!["a@b.com"]);
        assert_eq!(info.linkedin, vec!["https://linkedin.com/in/x"]);
        assert!(info.phones.iter().any(|p| p.contains("9812345678")));
        assert!(info.github.is_empty());
        assert!(info.portfolio.is_empty());
    }

    #[test]
    fn test_email_dedup_is_case_insensitive() {
        let info = extract_contact_info("Jane@Example.com\njane@example.com\nops@example.org", 3);
        assert_eq!(info.emails, vec!["Jane@Example.com", "ops@example.org"]);
    }

    #[test]
    fn test_phones_are_deduplicated() {
        let info = extract_contact_info("Phone: +44 20 7946 0958\nAlt: +44 20 7946 0958", 3);
        assert_eq!(info.phones, vec!["+44 20 7946 0958"]);
    }

    #[test]
    fn test_url_classification() {
        let text = "https://github.com/jane https://github.com/other \
                    https://linkedin.com/in/jane https://a.dev https://b.dev \
                    https://c.dev https://d.dev";
        let info = extract_contact_info(text, 3);

        assert_eq!(info.github, vec!["https://github.com/jane"]);
        assert_eq!(info.linkedin, vec!["https://linkedin.com/in/jane"]);
        assert_eq!(
            info.portfolio,
            vec!["https://a.dev", "https://b.dev", "https://c.dev"]
        );
    }

    #[test]
    fn test_nothing_found() {
        assert_eq!(extract_contact_info("No contact details here", 3), ContactInfo::default());
    }
}
