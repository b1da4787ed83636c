//! Case-insensitive literal matching by lowercasing both sides.

use std::ops::Range;

pub(crate) fn fold(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Lowercased copy of a string that remembers where each byte came from.
pub(crate) struct Folded<'a> {
    source: &'a str,
    lowered: String,
    /// Source byte offset of the char each lowered byte was produced from.
    origin: Vec<usize>,
}

impl<'a> Folded<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        let mut lowered = String::with_capacity(source.len());
        let mut origin = Vec::with_capacity(source.len());
        for (offset, c) in source.char_indices() {
            for lower in c.to_lowercase() {
                lowered.push(lower);
                origin.extend(std::iter::repeat(offset).take(lower.len_utf8()));
            }
        }
        Self {
            source,
            lowered,
            origin,
        }
    }

    /// Source byte range covering the lowered match at `lowered[at..at + len]`.
    fn source_range(&self, at: usize, len: usize) -> Range<usize> {
        let start = self.origin[at];
        let last = self.origin[at + len - 1];
        let end = self.source[last..]
            .chars()
            .next()
            .map_or(self.source.len(), |c| last + c.len_utf8());
        start..end
    }

    /// First occurrence of an already folded `needle`.
    pub(crate) fn find(&self, needle: &str) -> Option<Range<usize>> {
        if needle.is_empty() {
            return None;
        }
        let at = self.lowered.find(needle)?;
        Some(self.source_range(at, needle.len()))
    }

    /// Non-overlapping occurrences of an already folded `needle`, in order.
    pub(crate) fn find_all(&self, needle: &str) -> Vec<Range<usize>> {
        let mut found: Vec<Range<usize>> = Vec::new();
        if needle.is_empty() {
            return found;
        }
        let mut from = 0;
        while let Some(rel) = self.lowered[from..].find(needle) {
            let at = from + rel;
            let range = self.source_range(at, needle.len());
            if found.last().map_or(true, |prev| range.start >= prev.end) {
                found.push(range);
            }
            from = at + needle.len();
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_matches_back_to_source_bytes() {
        let text = "Ça va, ÉLDER élder";
        let folded = Folded::new(text);
        let needle = fold("Élder");
        let ranges = folded.find_all(&needle);
        assert_eq!(ranges.len(), 2);
        assert_eq!(&text[ranges[0].clone()], "ÉLDER");
        assert_eq!(&text[ranges[1].clone()], "élder");
        assert_eq!(folded.find(&fold("ça")), Some(0..3));
    }

    #[test]
    fn expanding_lowercase_stays_on_char_boundaries() {
        // 'İ' lowercases to two chars.
        let text = "xİy";
        let folded = Folded::new(text);
        let range = folded.find("i").expect("match inside expansion");
        assert_eq!(&text[range], "İ");
        assert_eq!(folded.find("zz"), None);
        assert!(folded.find_all("").is_empty());
    }
}
