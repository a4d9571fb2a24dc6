//! Section detection by header matching

use crate::processing::vocabulary::{SectionKind, SECTION_HEADERS};
use std::collections::HashMap;
use std::ops::Range;

/// Line ranges of the sections found in a document.
///
/// Each range is the half-open body `[header + 1, next header)` within the
/// line sequence it was built from. A header that occurs more than once
/// keeps the range of its last occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionMap {
    ranges: HashMap<SectionKind, Range<usize>>,
}

/// A header line found while scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderOccurrence {
    pub kind: SectionKind,
    pub line_index: usize,
}

impl SectionMap {
    /// Scan `lines` for header lines and build the section ranges
    pub fn locate(lines: &[String]) -> Self {
        let mut occurrences = find_headers(lines);
        occurrences.sort_by_key(|occurrence| occurrence.line_index);

        let mut ranges = HashMap::new();
        for (i, occurrence) in occurrences.iter().enumerate() {
            let end = occurrences
                .get(i + 1)
                .map_or(lines.len(), |next| next.line_index);
            ranges.insert(occurrence.kind, occurrence.line_index + 1..end);
        }

        Self { ranges }
    }

    pub fn get(&self, kind: SectionKind) -> Option<Range<usize>> {
        self.ranges.get(&kind).cloned()
    }

    pub fn contains(&self, kind: SectionKind) -> bool {
        self.ranges.contains_key(&kind)
    }

    /// Body lines of a section, `None` when the header was not found
    pub fn lines<'a>(&self, kind: SectionKind, lines: &'a [String]) -> Option<&'a [String]> {
        self.get(kind).map(|range| &lines[range])
    }

    /// Detected sections ordered by position in the document
    pub fn kinds(&self) -> Vec<SectionKind> {
        let mut found: Vec<(SectionKind, usize)> = self
            .ranges
            .iter()
            .map(|(kind, range)| (*kind, range.start))
            .collect();
        found.sort_by_key(|(_, start)| *start);
        found.into_iter().map(|(kind, _)| kind).collect()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Header lines in document order, at most one header per line
pub fn find_headers(lines: &[String]) -> Vec<HeaderOccurrence> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(line_index, line)| {
            match_header(line).map(|kind| HeaderOccurrence { kind, line_index })
        })
        .collect()
}

/// First vocabulary entry the line equals or starts with
pub fn match_header(line: &str) -> Option<SectionKind> {
    let lowered = line.to_lowercase();
    let candidate = lowered.trim_matches(|c| c == ':' || c == ' ').trim();

    SECTION_HEADERS.iter().copied().find(|kind| {
        let header = kind.header();
        candidate == header || candidate.starts_with(header)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_section_detection() {
        let doc = lines(&[
            "Jane Roe",
            "Summary:",
            "Backend developer",
            "Experience",
            "Engineer at Acme",
            "Built things",
            "SKILLS",
            "Rust, SQL",
        ]);
        let sections = SectionMap::locate(&doc);

        assert_eq!(sections.len(), 3);
        assert_eq!(sections.get(SectionKind::Summary), Some(2..3));
        assert_eq!(sections.get(SectionKind::Experience), Some(4..6));
        assert_eq!(sections.get(SectionKind::Skills), Some(7..8));
        assert!(!sections.contains(SectionKind::Education));
        assert_eq!(
            sections.kinds(),
            vec![SectionKind::Summary, SectionKind::Experience, SectionKind::Skills]
        );
    }

    #[test]
    fn test_ranges_end_at_next_header() {
        let doc = lines(&[
            "Education", "BSc", "2019", "Skills", "Go", "Languages", "English", "Interests",
        ]);
        let sections = SectionMap::locate(&doc);
        let mut headers = find_headers(&doc);
        headers.sort_by_key(|h| h.line_index);

        for pair in headers.windows(2) {
            let range = sections.get(pair[0].kind).unwrap();
            assert_eq!(range.start, pair[0].line_index + 1);
            assert_eq!(range.end, pair[1].line_index);
        }
        assert_eq!(sections.get(SectionKind::Interests), Some(8..8));
        assert_eq!(sections.lines(SectionKind::Interests, &doc).unwrap().len(), 0);
    }

    #[test]
    fn test_prefix_match_counts_as_header() {
        assert_eq!(match_header("Skills & Tools"), Some(SectionKind::Skills));
        assert_eq!(match_header("  Certifications: "), Some(SectionKind::Certifications));
        // prefix matching also catches prose that happens to start with a header word
        assert_eq!(match_header("Experienced in Rust"), Some(SectionKind::Experience));
        assert_eq!(match_header("Hobbies"), None);
    }

    #[test]
    fn test_first_vocabulary_entry_wins() {
        assert_eq!(match_header("Work Experience"), Some(SectionKind::WorkExperience));
        // "experience" is tested before "experience ..." variants that start with it
        assert_eq!(match_header("Experience Summary"), Some(SectionKind::Experience));
        // "summary" precedes everything else in the vocabulary
        assert_eq!(match_header("Summary of Skills"), Some(SectionKind::Summary));
    }

    #[test]
    fn test_repeated_header_last_occurrence_wins() {
        let doc = lines(&["Skills", "Rust", "Education", "MSc", "Skills", "Python", "SQL"]);
        let sections = SectionMap::locate(&doc);

        assert_eq!(sections.get(SectionKind::Skills), Some(5..7));
        // the earlier occurrence still closes the section before it
        assert_eq!(sections.get(SectionKind::Education), Some(3..4));
    }

    #[test]
    fn test_no_headers() {
        let sections = SectionMap::locate(&lines(&["Just a line", "Another one"]));
        assert!(sections.is_empty());
        assert!(sections.lines(SectionKind::Skills, &[]).is_none());
    }
}
