//! Keyword coverage of a job description by a résumé

use crate::config::ScoringConfig;
use crate::processing::text_processor::Tokenizer;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Percentage (0-100) of `job_top_keywords` found in the résumé
    pub coverage: f64,
    pub job_top_keywords: Vec<String>,
    pub found_in_resume: Vec<String>,
}

pub struct KeywordScorer {
    tokenizer: Tokenizer,
    top_keywords: usize,
}

impl KeywordScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(config.min_keyword_chars),
            top_keywords: config.top_keywords,
        }
    }

    /// Most frequent job keywords, ties broken by first occurrence
    pub fn top_keywords(&self, job_text: &str) -> Vec<String> {
        let tokens = self.tokenizer.tokenize(job_text);

        // token -> (count, first position)
        let mut stats: HashMap<&str, (usize, usize)> = HashMap::new();
        for (position, token) in tokens.iter().enumerate() {
            stats.entry(token.as_str()).or_insert((0, position)).0 += 1;
        }

        let mut ranked: Vec<(&str, (usize, usize))> = stats.into_iter().collect();
        ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));

        ranked
            .into_iter()
            .take(self.top_keywords)
            .map(|(token, _)| token.to_string())
            .collect()
    }

    pub fn score(&self, resume_text: &str, job_text: &str) -> MatchResult {
        let job_top_keywords = self.top_keywords(job_text);
        let resume_tokens: HashSet<String> = self.tokenizer.tokenize(resume_text).into_iter().collect();

        let found_in_resume: Vec<String> = job_top_keywords
            .iter()
            .filter(|keyword| resume_tokens.contains(*keyword))
            .cloned()
            .collect();

        let coverage = coverage_percentage(found_in_resume.len(), job_top_keywords.len());
        debug!(
            "Keyword coverage {:.2}% ({}/{})",
            coverage,
            found_in_resume.len(),
            job_top_keywords.len()
        );

        MatchResult {
            coverage,
            job_top_keywords,
            found_in_resume,
        }
    }
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

/// `found / total` as a percentage rounded to two decimals, 0 for no keywords
fn coverage_percentage(found: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percentage = found as f64 * 100.0 / total as f64;
    (percentage * 100.0).round() / 100.0
}

/// Score a résumé against a job description with the default policy
pub fn keyword_score(resume_text: &str, job_text: &str) -> MatchResult {
    KeywordScorer::default().score(resume_text, job_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB: &str = "Senior Rust engineer. Rust services, Kubernetes clusters, \
                       Postgres tuning. Kubernetes experience required. Rust!";

    #[test]
    fn test_top_keywords_ranking() {
        let scorer = KeywordScorer::default();
        let top = scorer.top_keywords(JOB);

        assert_eq!(top[0], "rust");
        assert_eq!(top[1], "kubernetes");
        // equal counts keep document order
        assert_eq!(top[2], "senior");
        assert!(!top.contains(&"required".to_string()));
    }

    #[test]
    fn test_top_keywords_limit() {
        let scorer = KeywordScorer::new(&ScoringConfig {
            top_keywords: 2,
            min_keyword_chars: 3,
        });
        assert_eq!(scorer.top_keywords(JOB), vec!["rust", "kubernetes"]);
    }

    #[test]
    fn test_score() {
        let resume = "Built Rust services on Kubernetes for five years.";
        let result = keyword_score(resume, JOB);

        assert!(result.found_in_resume.contains(&"rust".to_string()));
        assert!(result.found_in_resume.contains(&"kubernetes".to_string()));
        assert!(result.found_in_resume.contains(&"services".to_string()));
        assert!(!result.found_in_resume.contains(&"postgres".to_string()));

        let expected = coverage_percentage(result.found_in_resume.len(), result.job_top_keywords.len());
        assert_eq!(result.coverage, expected);
        assert!(result.coverage > 0.0 && result.coverage < 100.0);
    }

    #[test]
    fn test_found_is_subset_of_top() {
        let result = keyword_score("rust kubernetes postgres senior", JOB);

        for keyword in &result.found_in_resume {
            assert!(result.job_top_keywords.contains(keyword));
        }
        assert!((0.0..=100.0).contains(&result.coverage));
    }

    #[test]
    fn test_full_and_empty_coverage() {
        assert_eq!(keyword_score("Rust", "Rust, rust and RUST").coverage, 100.0);
        assert_eq!(keyword_score("Python", "Rust").coverage, 0.0);

        let empty = keyword_score("anything", "");
        assert_eq!(empty.coverage, 0.0);
        assert!(empty.job_top_keywords.is_empty());
    }

    #[test]
    fn test_coverage_rounding() {
        assert_eq!(coverage_percentage(1, 3), 33.33);
        assert_eq!(coverage_percentage(2, 3), 66.67);
        assert_eq!(coverage_percentage(0, 0), 0.0);
    }
}
