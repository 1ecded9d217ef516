//! Repeated regex matching with explicit offsets.
//!
//! `match_all` keeps every bit of search state local to the call. The compiled
//! pattern is only borrowed, so one `Regex` (usually a `LazyLock` static) can be
//! shared by unrelated callers without one call leaking a search position into
//! the next.

use regex::Regex;

/// A single match on the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatch<'t> {
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset right after the match (`start + len`).
    pub end: usize,
    /// Capture groups 1..n, `None` for groups that did not participate.
    pub groups: Vec<Option<&'t str>>,
}

impl TextMatch<'_> {
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// All matches on a text. The input is stored once for the whole set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatches<'t> {
    pub input: &'t str,
    pub matches: Vec<TextMatch<'t>>,
}

impl<'t> TextMatches<'t> {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextMatch<'t>> {
        self.matches.iter()
    }
}

impl<'a, 't> IntoIterator for &'a TextMatches<'t> {
    type Item = &'a TextMatch<'t>;
    type IntoIter = std::slice::Iter<'a, TextMatch<'t>>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

/// Returns every non-overlapping match of `pattern` on `text`.
///
/// A zero-length match moves the search position forward by one character, so
/// patterns like `a*` or `(?m)^` always terminate.
pub fn match_all<'t>(text: &'t str, pattern: &Regex) -> TextMatches<'t> {
    let mut matches = Vec::new();
    let mut cursor = 0;

    while cursor <= text.len() {
        let Some(captures) = pattern.captures_at(text, cursor) else {
            break;
        };
        let Some(whole) = captures.get(0) else {
            break;
        };

        matches.push(TextMatch {
            start: whole.start(),
            end: whole.end(),
            groups: captures
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str()))
                .collect(),
        });

        cursor = if whole.is_empty() {
            match text[whole.end()..].chars().next() {
                Some(c) => whole.end() + c.len_utf8(),
                None => break,
            }
        } else {
            whole.end()
        };
    }

    TextMatches {
        input: text,
        matches,
    }
}
