//! Text normalization, line segmentation and keyword tokenization

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

static LINE_EDGE_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *\n *").expect("valid line edge regex"));
static BLANK_LINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid blank line regex"));

/// Canonicalize raw extracted text into a line-oriented form.
///
/// The result contains no carriage returns, tabs or non-breaking spaces,
/// no line with leading or trailing spaces, and at most one blank line
/// between paragraphs.
pub fn normalize(raw: &str) -> String {
    let text: String = raw
        .chars()
        .map(|c| match c {
            '\r' => '\n',
            '\u{00A0}' | '\t' => ' ',
            _ => c,
        })
        .collect();

    let text = LINE_EDGE_SPACES.replace_all(&text, "\n");
    let text = BLANK_LINE_RUNS.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Split text into non-empty trimmed lines
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Word tokenizer used by the keyword scorer
pub struct Tokenizer {
    stop_words: HashSet<&'static str>,
    min_chars: usize,
}

impl Tokenizer {
    pub fn new(min_chars: usize) -> Self {
        Self {
            stop_words: Self::create_stop_words(),
            min_chars,
        }
    }

    /// Lowercased words, in document order, with stopwords, short tokens and
    /// purely numeric tokens removed
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        lowered
            .unicode_words()
            .filter(|word| word.chars().count() >= self.min_chars)
            .filter(|word| word.chars().any(char::is_alphabetic))
            .filter(|word| !self.is_stop_word(word))
            .map(str::to_string)
            .collect()
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// English stopwords plus filler that shows up in every job posting
    fn create_stop_words() -> HashSet<&'static str> {
        [
            "a", "about", "above", "after", "again", "against", "all", "also", "am", "an",
            "and", "any", "are", "as", "at", "be", "because", "been", "before", "being",
            "below", "between", "both", "but", "by", "can", "could", "did", "do", "does",
            "doing", "down", "during", "each", "etc", "few", "for", "from", "further",
            "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his",
            "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "may",
            "me", "more", "most", "must", "my", "no", "nor", "not", "now", "of", "off",
            "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own",
            "per", "same", "shall", "she", "should", "so", "some", "such", "than", "that",
            "the", "their", "theirs", "them", "then", "there", "these", "they", "this",
            "those", "through", "to", "too", "under", "until", "up", "upon", "us", "very",
            "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom",
            "why", "will", "with", "within", "without", "would", "you", "your", "yours",
            // posting filler
            "ability", "able", "apply", "candidate", "candidates", "company", "including",
            "job", "looking", "must", "preferred", "required", "requirements", "role",
            "strong", "work", "working", "years", "year", "plus", "join", "team", "well",
        ]
        .into_iter()
        .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(3)
    }
}
