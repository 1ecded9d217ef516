//! Common utility functions shared across the codebase.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Serializes a value to JSON, never failing.
///
/// `indent` is the number of spaces per nesting level; `None` or `Some(0)`
/// produce compact output. If the value cannot be serialized, the error is
/// rendered inline as `"[<error>]"` instead.
///
/// # Examples
///
/// ```
/// use jsdoctree::utils::stringify;
///
/// assert_eq!(stringify(&["a", "b"], None), r#"["a","b"]"#);
/// assert_eq!(stringify(&[1], Some(2)), "[\n  1\n]");
/// ```
pub fn stringify<T: Serialize + ?Sized>(value: &T, indent: Option<usize>) -> String {
    let result = match indent {
        None | Some(0) => serde_json::to_string(value),
        Some(width) => {
            let indent = " ".repeat(width);
            let mut buf = Vec::new();
            let mut ser =
                Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
            value
                .serialize(&mut ser)
                .map(|_| String::from_utf8_lossy(&buf).into_owned())
        }
    };

    result.unwrap_or_else(|e| format!("[{}]", e))
}

/// Pluralizes `word` with a trailing `s` unless `count` is one.
pub fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::utils::*;

    #[test]
    fn test_stringify_compact() {
        let value = json!({ "name": "Highcharts.Chart", "line": 4 });
        assert_eq!(
            stringify(&value, None),
            r#"{"name":"Highcharts.Chart","line":4}"#
        );
        assert_eq!(stringify(&value, Some(0)), stringify(&value, None));
    }

    #[test]
    fn test_stringify_indented() {
        let value = json!({ "a": [1] });
        assert_eq!(stringify(&value, Some(4)), "{\n    \"a\": [\n        1\n    ]\n}");
    }

    #[test]
    fn test_stringify_failure_is_inline() {
        // JSON object keys must be strings.
        let mut map = BTreeMap::new();
        map.insert((1, 2), "pair");

        let rendered = stringify(&map, None);
        assert!(rendered.starts_with('['));
        assert!(rendered.ends_with(']'));
        assert!(rendered.contains("key must be a string"));
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(0, "file"), "files");
        assert_eq!(plural(1, "file"), "file");
        assert_eq!(plural(3, "doclet"), "doclets");
    }
}
