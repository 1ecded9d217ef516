//! Rule implementations for jsdoctree.
//!
//! Rules are plain functions over a single doclet node. They run while the
//! tree is being built, through the session listener, and report through a
//! [`DiagnosticSink`].
//!
//! ## Module Structure
//!
//! - `member_fullname`: Top-level members must use a full, prefixed name

pub mod member_fullname;

use crate::{
    config::Config,
    core::visitor::DocletVisit,
    issues::{DiagnosticSink, Rule},
};

pub use member_fullname::check_member_fullname;

/// Runs every enabled doclet rule on one node.
pub fn check_doclet(
    visit: DocletVisit<'_>,
    rules: &[Rule],
    config: &Config,
    sink: &mut impl DiagnosticSink,
) {
    for rule in rules {
        match rule {
            Rule::MemberFullname => check_member_fullname(visit, &config.scope_prefixes, sink),
            // Reported by the pipeline, not per doclet.
            Rule::ParseError => {}
        }
    }
}
