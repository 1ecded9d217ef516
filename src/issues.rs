//! Issue types and the diagnostic sink.
//!
//! Rules never build issues directly. They hand a location, a message
//! template with `{{ name }}` placeholders and a data record to a
//! [`DiagnosticSink`]; [`IssueCollector`] is the sink used by the CLI.

use std::{collections::BTreeMap, sync::LazyLock};

use enum_dispatch::enum_dispatch;
use regex::{Captures, Regex};
use serde_json::Value;

use crate::core::{doclet::Doclet, visitor::SourceUnit};
use crate::utils::stringify;

// ============================================================
// Rule
// ============================================================

/// Rule identifier for each issue type. Every issue is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    MemberFullname,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MemberFullname => write!(f, "member-fullname"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Locations
// ============================================================

/// A position in a source file, with the line text for context display.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceContext {
    pub file_path: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, in characters.
    pub col: usize,
    pub source_line: String,
}

impl SourceContext {
    /// Points at the code a doclet documents, on its first non-blank character.
    pub fn for_doclet(source: &SourceUnit, doclet: &Doclet) -> Self {
        let code = doclet.code();
        let indent = code.chars().take_while(|c| c.is_whitespace()).count();
        Self {
            file_path: source.path().to_string(),
            line: doclet.code_line(),
            col: indent + 1,
            source_line: code.to_string(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A problem a rule found in a doclet.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DocletIssue {
    pub context: SourceContext,
    pub rule: Rule,
    /// The rendered message.
    pub message: String,
}

/// File could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

/// An issue found during a check.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Issue {
    Doclet(DocletIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }
}

impl Report for DocletIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn report_rule(&self) -> Rule {
        self.rule
    }

    fn hint(&self) -> Option<&str> {
        match self.rule {
            Rule::MemberFullname => {
                Some("use the full name, or move the doclet into the scope it belongs to")
            }
            Rule::ParseError => None,
        }
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_rule(&self) -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Diagnostic Sink
// ============================================================

/// Named values substituted into a message template.
pub type DiagnosticData = BTreeMap<String, Value>;

/// Receives diagnostics from rules.
pub trait DiagnosticSink {
    fn report(
        &mut self,
        rule: Rule,
        location: SourceContext,
        template: &str,
        data: &DiagnosticData,
    );
}

/// Collects diagnostics as [`Issue`]s.
#[derive(Debug, Default)]
pub struct IssueCollector {
    issues: Vec<Issue>,
}

impl IssueCollector {
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}

impl DiagnosticSink for IssueCollector {
    fn report(
        &mut self,
        rule: Rule,
        location: SourceContext,
        template: &str,
        data: &DiagnosticData,
    ) {
        self.issues.push(Issue::Doclet(DocletIssue {
            context: location,
            rule,
            message: render_template(template, data),
        }));
    }
}

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([^{}\s]+)\s*\}\}").unwrap());

/// Replaces `{{ name }}` placeholders with values from `data`.
///
/// Strings are inserted as they are, other values as JSON. Placeholders
/// without a value are left untouched.
pub fn render_template(template: &str, data: &DiagnosticData) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| match data.get(&caps[1]) {
            Some(Value::String(s)) => s.clone(),
            Some(value) => stringify(value, None),
            None => caps[0].to_string(),
        })
        .into_owned()
}
