//! Section splitting for raw doclet comments.
//!
//! The comment text goes through three layers:
//!
//! 1. the `/** ... */` envelope is removed (if the caller passed it),
//! 2. every line loses its leading decoration (indentation plus one `*`),
//! 3. the body is cut before every tag (`@word`) that starts a line.
//!
//! The result is a normalized rendition of the comment. Indentation is not
//! preserved, and every section is trimmed.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::matching::match_all;

/// Doclet envelope, optionally indented: `/** body */`.
static DOCLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)[\t\x0B\x0C ]*/\*\*(.+?)\*/").unwrap());

/// Line decoration: horizontal whitespace followed by a single `*`.
static DOCLINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^[\t\x0B\x0C ]*\*(.*)$").unwrap());

/// Line break and a run of whitespace/`*` (group 1) before a tag marker.
/// The `@` belongs to the next section.
static DOCSPLIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\n\r][\s*]*)@").unwrap());

/// The character that opens every tag.
pub const TAG_MARKER: char = '@';

/// Removes the comment envelope and the per-line decoration.
pub fn clean_comment(comment: &str) -> String {
    let body = DOCLET_REGEX.replace_all(comment, "$1");
    DOCLINE_REGEX.replace_all(&body, "$1").into_owned()
}

/// Splits a raw comment into its description and tag sections.
///
/// Always returns at least one section. Text before the first tag forms the
/// leading section, even when it is empty.
pub fn split_sections(comment: &str) -> Vec<String> {
    let body = clean_comment(comment);
    let mut sections = Vec::new();
    let mut start = 0;

    for split in &match_all(&body, &DOCSPLIT_REGEX) {
        sections.push(body[start..split.start].trim().to_string());
        let separator = split.groups[0].map_or(0, str::len);
        start = split.start + separator;
    }
    sections.push(body[start..].trim().to_string());

    sections
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_description_and_param() {
        let comment = "*\n * Adds two numbers.\n *\n * @param {number} a\n *        The first.\n ";
        assert_eq!(
            split_sections(comment),
            vec!["Adds two numbers.", "@param {number} a\n        The first."]
        );
    }

    #[test]
    fn test_without_tags() {
        let comment = "*\n * Just a description\n * over two lines.\n ";
        assert_eq!(
            split_sections(comment),
            vec!["Just a description\n over two lines."]
        );
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(split_sections("   "), vec![""]);
        assert_eq!(split_sections(""), vec![""]);
    }

    #[test]
    fn test_full_envelope_is_stripped() {
        let comment = "    /**\n     * Text\n     * @private\n     */";
        assert_eq!(split_sections(comment), vec!["Text", "@private"]);
    }

    #[test]
    fn test_single_line_doclet() {
        assert_eq!(split_sections("* A one-liner "), vec!["A one-liner"]);
    }

    #[test]
    fn test_leading_tag_keeps_empty_description() {
        let comment = "*\n * @function foo\n * @param {string} bar\n ";
        assert_eq!(
            split_sections(comment),
            vec!["", "@function foo", "@param {string} bar"]
        );
    }

    #[test]
    fn test_inline_at_sign_does_not_split() {
        let comment = "*\n * Mail me at someone@example.com\n * or {@link Foo}.\n ";
        assert_eq!(
            split_sections(comment),
            vec!["Mail me at someone@example.com\n or {@link Foo}."]
        );
    }

    #[test]
    fn test_crlf_line_breaks() {
        let comment = "*\r\n * Text\r\n * @since 1.0\r\n ";
        assert_eq!(split_sections(comment), vec!["Text", "@since 1.0"]);
    }

    #[test]
    fn test_tag_without_decoration() {
        let comment = "*\n Text\n@return {void}\n";
        assert_eq!(split_sections(comment), vec!["Text", "@return {void}"]);
    }

    #[test]
    fn test_clean_comment_keeps_text_after_marker() {
        assert_eq!(clean_comment("*\n * a * b\n"), "\n a * b\n");
    }
}
