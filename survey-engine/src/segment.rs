//! Cutting the flattened order at page breaks.

use std::ops::Range;

/// The answerable items of a flattened order, plus where page breaks cut it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments<T> {
    /// Every answerable item, in order. Page breaks are not included.
    pub responses: Vec<T>,

    /// Non-empty, consecutive ranges into `responses`.
    pub ranges: Vec<Range<usize>>,
}

impl<T> Segments<T> {
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Iterate over the segments as slices of `responses`.
    pub fn iter(&self) -> impl Iterator<Item = &[T]> {
        self.ranges.iter().map(|range| &self.responses[range.clone()])
    }
}

/// Split `items` after every page break, dropping the page breaks and any
/// segment left empty.
///
/// Leading, trailing and consecutive page breaks therefore contribute
/// nothing; a sequence made only of page breaks yields no segments at all.
pub fn segment<T>(
    items: impl IntoIterator<Item = T>,
    is_page_break: impl Fn(&T) -> bool,
) -> Segments<T> {
    let mut responses = Vec::new();
    let mut ranges = Vec::new();
    let mut start = 0;

    for item in items {
        if is_page_break(&item) {
            if responses.len() > start {
                ranges.push(start..responses.len());
            }
            start = responses.len();
        } else {
            responses.push(item);
        }
    }
    if responses.len() > start {
        ranges.push(start..responses.len());
    }

    Segments { responses, ranges }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `'|'` marks a page break.
    fn cut(layout: &str) -> Segments<char> {
        segment(layout.chars(), |&c| c == '|')
    }

    fn as_strings(segments: &Segments<char>) -> Vec<String> {
        segments.iter().map(|s| s.iter().collect()).collect()
    }

    #[test]
    fn no_page_breaks() {
        let segments = cut("abcde");
        assert_eq!(segments.ranges, vec![0..5]);
        assert_eq!(segments.responses.len(), 5);
    }

    #[test]
    fn breaks_split_and_vanish() {
        let segments = cut("abcde|fg|h");
        assert_eq!(as_strings(&segments), vec!["abcde", "fg", "h"]);
        assert_eq!(segments.responses, "abcdefgh".chars().collect::<Vec<_>>());
    }

    #[test]
    fn consecutive_leading_and_trailing_breaks() {
        let segments = cut("||ab|||c||");
        assert_eq!(as_strings(&segments), vec!["ab", "c"]);
    }

    #[test]
    fn only_page_breaks() {
        let segments = cut("||||||||||");
        assert!(segments.is_empty());
        assert!(segments.responses.is_empty());
    }

    #[test]
    fn nothing_at_all() {
        assert!(cut("").is_empty());
    }
}
