//! Date range recognition for experience entries

use regex::Regex;
use std::sync::LazyLock;

const MONTH: &str = r"(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)";
const YEAR: &str = r"(?:19|20)\d{2}";
const SEPARATOR: &str = r" *(?:-|–|—|to) *";

/// Tried in order; the first hit wins
static DATE_RANGES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        format!("{MONTH} *{YEAR}{SEPARATOR}{MONTH} *{YEAR}"),
        format!("{MONTH} *{YEAR}{SEPARATOR}present"),
        format!("{YEAR}{SEPARATOR}{YEAR}"),
        format!("{YEAR}{SEPARATOR}present"),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid date range regex"))
    .collect()
});

/// The lowercased date range found in `line`, or an empty string
pub fn parse_date_range(line: &str) -> String {
    let lowered = line.to_lowercase();

    DATE_RANGES
        .iter()
        .find_map(|regex| regex.find(&lowered))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
