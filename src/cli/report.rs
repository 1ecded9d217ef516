//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow jsdoctree to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, DumpSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation};
use crate::utils::plural;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(compare_issues);

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(source_files: usize) {
    print_success_to(source_files, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(source_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} - no issues found",
            source_files,
            plural(source_files, "file")
        )
        .green()
    );
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col, source_line) = extract_location_info(&loc);

    // Print message and rule (cargo-style)
    let _ = writeln!(
        writer,
        "{}: {}  {}",
        "error".bold().red(),
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line:col
    if line > 0 {
        let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);
    } else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
    }

    // Print source context if available
    if let Some(source_line) = source_line {
        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // Caret pointing to the column (col is 1-based)
        let prefix = if col > 1 {
            source_line.chars().take(col - 1).collect::<String>()
        } else {
            String::new()
        };
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            "^".red(),
            width = max_line_width,
            padding = caret_padding
        );
    }

    // Print hint if present
    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} {}",
        FAILURE_MARK.red(),
        issues.len(),
        plural(issues.len(), "error").red()
    );
}

fn extract_location_info<'a>(
    loc: &'a ReportLocation<'a>,
) -> (&'a str, usize, usize, Option<&'a str>) {
    match loc {
        ReportLocation::Source(ctx) => (
            ctx.file_path(),
            ctx.line(),
            ctx.col(),
            Some(&ctx.source_line),
        ),
        ReportLocation::File { path } => (path, 0, 0, None),
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    let a_loc = a.location();
    let b_loc = b.location();
    let (a_path, a_line, a_col, _) = extract_location_info(&a_loc);
    let (b_path, b_line, b_col, _) = extract_location_info(&b_loc);

    a_path
        .cmp(b_path)
        .then_with(|| a_line.cmp(&b_line))
        .then_with(|| a_col.cmp(&b_col))
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Check => {
            report(&result.issues);
            if result.issues.is_empty() {
                print_success(result.source_files_checked);
            }
        }
        CommandSummary::Dump(summary) => {
            print_dump(summary);
            // Keep stdout parseable; problems go to stderr.
            report_to(&result.issues, &mut io::stderr().lock());
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }

    print_parse_warning(result.parse_error_count, verbose);
}

fn print_dump(summary: &DumpSummary) {
    print!("{}", summary.output);
    if !summary.output.ends_with('\n') {
        println!();
    }
}

fn print_init(summary: &InitSummary) {
    if let Some(error) = &summary.error {
        eprintln!("Error: {}", error);
    } else if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::cli::report::*;
    use crate::issues::{DocletIssue, ParseErrorIssue, Rule, SourceContext};

    fn render(issues: &[Issue]) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        report_to(issues, &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_doclet_issue() {
        let issue = Issue::Doclet(DocletIssue {
            context: SourceContext {
                file_path: "src/format.js".to_string(),
                line: 12,
                col: 5,
                source_line: "    function format() {".to_string(),
            },
            rule: Rule::MemberFullname,
            message: "Member name \"format\" is bad.".to_string(),
        });

        assert_eq!(
            render(&[issue]),
            "\
error: Member name \"format\" is bad.  member-fullname
  --> src/format.js:12:5
   |
12 |     function format() {
   |     ^
   = hint: use the full name, or move the doclet into the scope it belongs to

\u{2718} 1 error
"
        );
    }

    #[test]
    fn test_report_parse_error() {
        let issue = Issue::ParseError(ParseErrorIssue {
            file_path: "broken.js".to_string(),
            error: "Failed to parse broken.js".to_string(),
        });

        assert_eq!(
            render(&[issue]),
            "\
error: Failed to parse broken.js  parse-error
  --> broken.js

\u{2718} 1 error
"
        );
    }

    #[test]
    fn test_report_nothing() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_success_message() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_success_to(1, &mut out);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\u{2713} Checked 1 source file - no issues found\n"
        );
    }

    #[test]
    fn test_parse_warning_hidden_in_verbose_mode() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_parse_warning_to(2, true, &mut out);
        assert!(out.is_empty());

        print_parse_warning_to(2, false, &mut out);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "warning: 2 file(s) could not be parsed (use -v for details)\n"
        );
    }
}
