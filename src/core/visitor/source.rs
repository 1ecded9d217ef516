use std::sync::LazyLock;

use regex::Regex;

/// Line breaks as swc's source map counts them: `\r\n`, `\r` and `\n`.
static LINE_BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new("\r\n|[\r\n]").unwrap());

/// The source unit a session traverses: its path and its raw lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    path: String,
    lines: Vec<String>,
}

impl SourceUnit {
    pub fn new(path: impl Into<String>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: LINE_BREAK_REGEX.split(text).map(String::from).collect(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the 1-indexed line `number`, if it exists.
    pub fn line(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_is_one_indexed() {
        let source = SourceUnit::new("a.js", "first\nsecond\r\nthird\rfourth");

        assert_eq!(source.path(), "a.js");
        assert_eq!(source.line(0), None);
        assert_eq!(source.line(1), Some("first"));
        assert_eq!(source.line(2), Some("second"));
        assert_eq!(source.line(4), Some("fourth"));
        assert_eq!(source.line(5), None);
    }

    #[test]
    fn test_unicode_separators_stay_on_their_line() {
        let source = SourceUnit::new("a.js", "var s = 'a\u{2028}b\u{2029}c';\nnext");
        assert_eq!(source.line(1), Some("var s = 'a\u{2028}b\u{2029}c';"));
        assert_eq!(source.line(2), Some("next"));
        assert_eq!(source.line(3), None);
    }

    #[test]
    fn test_trailing_newline_yields_empty_line() {
        let source = SourceUnit::new("a.js", "x\n");
        assert_eq!(source.line(2), Some(""));
        assert_eq!(source.line(3), None);
    }
}
