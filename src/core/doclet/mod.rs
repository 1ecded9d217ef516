//! Parsed documentation comments.
//!
//! A [`Doclet`] is built once per `/** ... */` comment. It keeps the raw
//! comment, the split sections and the line of code that follows the comment.
//! The only field that changes after construction is the code name, which is
//! set at most once while the file is traversed.
//!
//! ## Module Structure
//!
//! - `sections`: The text pipeline turning a raw comment into sections

pub mod sections;

use std::fmt;

use serde::Serialize;

pub use sections::{TAG_MARKER, clean_comment, split_sections};

/// The character that marks a block comment as a doclet (`/**`).
pub const DOCLET_SIGIL: char = '*';

/// Returns true if the comment text (without `/*` and `*/`) is a doclet.
pub fn is_doclet_comment(text: &str) -> bool {
    text.starts_with(DOCLET_SIGIL)
}

/// One parsed documentation comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Doclet {
    comment: String,
    sections: Vec<String>,
    code: String,
    code_line: usize,
    code_name: Option<String>,
}

impl Doclet {
    /// Creates a doclet from the raw comment and the code line following it.
    ///
    /// `code` and `code_line` are stored as given.
    pub fn new(comment: impl Into<String>, code: impl Into<String>, code_line: usize) -> Self {
        let comment = comment.into();
        let sections = split_sections(&comment);
        Self {
            comment,
            sections,
            code: code.into(),
            code_line,
            code_name: None,
        }
    }

    /// The raw comment text, with or without the slashes.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// The parsed sections. Never empty.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// The code line following the comment.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// 1-based number of the code line following the comment.
    pub fn code_line(&self) -> usize {
        self.code_line
    }

    /// Name of the first identifier found on the code line, if any.
    pub fn code_name(&self) -> Option<&str> {
        self.code_name.as_deref()
    }

    /// Sets the code name unless one is already set.
    ///
    /// Returns true if this call set the name.
    pub fn set_code_name(&mut self, name: impl Into<String>) -> bool {
        if self.code_name.is_some() {
            return false;
        }
        self.code_name = Some(name.into());
        true
    }

    /// All tag sections in source order.
    pub fn tags(&self) -> impl Iterator<Item = Tag<'_>> {
        self.sections.iter().filter_map(|s| Tag::parse(s))
    }

    /// The first tag with the given name (without `@`).
    pub fn tag(&self, name: &str) -> Option<Tag<'_>> {
        self.tags().find(|tag| tag.name == name)
    }
}

impl fmt::Display for Doclet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sections.join("\n\n"))
    }
}

/// A tag section such as `@param {string} name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Tag name without the marker, e.g. `param`.
    pub name: &'a str,
    /// Everything after the tag name, trimmed.
    pub body: &'a str,
}

impl<'a> Tag<'a> {
    /// Parses a section that starts with the tag marker.
    pub fn parse(section: &'a str) -> Option<Self> {
        let rest = section.strip_prefix(TAG_MARKER)?;
        let name_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let name = &rest[..name_end];
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name,
            body: rest[name_end..].trim(),
        })
    }
}
