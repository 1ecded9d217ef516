//! Member full-name rule.
//!
//! A doclet that is not nested in a documented scope has to declare its
//! member with a full name, e.g. `@function Highcharts.format` instead of
//! `@function format`.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;

use crate::{
    core::{doclet::Doclet, visitor::DocletVisit},
    issues::{DiagnosticData, DiagnosticSink, Rule, SourceContext},
};

pub const MESSAGE: &str = "Member name \"{{ name }}\" has to start with {{ prefixes }}, if it is not part of an existing scope.";

/// Tags whose body starts with the member name.
const TYPELESS_TAGS: &[&str] = &["function", "interface", "module", "name", "namespace"];

/// Tags whose body is `{Type} name`.
const TYPED_TAGS: &[&str] = &["typedef"];

static TYPELESS_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\w.]+)").unwrap());

static TYPED_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{[^}]+\}\s+\[?([\w.]+)").unwrap());

/// The member name a doclet declares, if any.
///
/// Typeless tags win over typed ones, in source order within each group.
pub fn declared_name(doclet: &Doclet) -> Option<&str> {
    let typeless = doclet
        .tags()
        .filter(|tag| TYPELESS_TAGS.contains(&tag.name))
        .find_map(|tag| TYPELESS_NAME_REGEX.captures(tag.body)?.get(1));

    let name = match typeless {
        Some(name) => name,
        None => doclet
            .tags()
            .filter(|tag| TYPED_TAGS.contains(&tag.name))
            .find_map(|tag| TYPED_NAME_REGEX.captures(tag.body)?.get(1))?,
    };

    Some(name.as_str())
}

/// Renders prefixes as `"A.", "B.", or "C."`.
pub fn format_prefixes(prefixes: &[String]) -> String {
    let quoted: Vec<String> = prefixes.iter().map(|p| format!("\"{}\"", p)).collect();
    match quoted.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} or {}", first, second),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    }
}

/// Checks one doclet node. Only doclets directly below the root are
/// considered; nested doclets belong to an existing scope.
pub fn check_member_fullname(
    visit: DocletVisit<'_>,
    prefixes: &[String],
    sink: &mut impl DiagnosticSink,
) {
    if visit.tree.node(visit.node).depth() != 1 {
        return;
    }
    let Some(doclet) = visit.doclet() else {
        return;
    };
    let Some(name) = declared_name(doclet) else {
        return;
    };
    if prefixes.iter().any(|prefix| name.starts_with(prefix.as_str())) {
        return;
    }

    let data: DiagnosticData = [
        ("name".to_string(), json!(name)),
        ("prefixes".to_string(), json!(format_prefixes(prefixes))),
    ]
    .into_iter()
    .collect();

    sink.report(
        Rule::MemberFullname,
        SourceContext::for_doclet(visit.source, doclet),
        MESSAGE,
        &data,
    );
}
