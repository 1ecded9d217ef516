use std::{collections::BTreeMap, fmt::Write as _};

use anyhow::Result;

use super::super::args::{DumpCommand, DumpFormat};
use super::{CommandResult, CommandSummary, DumpSummary, helper::finish};
use crate::{
    core::{AllFileDocs, DocContext, DocTree},
    utils::stringify,
};

const ANONYMOUS: &str = "<anonymous>";

pub fn dump(cmd: DumpCommand) -> Result<CommandResult> {
    let ctx = if cmd.files.is_empty() {
        DocContext::new(&cmd.common)?
    } else {
        DocContext::with_files(&cmd.common, &cmd.files)?
    };

    let traversal = ctx.traverse(&[]);
    let output = match cmd.format {
        DumpFormat::Text => render_text(&traversal.docs),
        DumpFormat::Json => render_json(&traversal.docs),
    };

    Ok(finish(
        CommandSummary::Dump(DumpSummary { output }),
        traversal.issues,
        ctx.files.len(),
        true,
    ))
}

/// Renders every file as an outline: one entry per doclet, indented by the
/// number of documented scopes around it, followed by its sections.
pub fn render_text(docs: &AllFileDocs) -> String {
    let mut out = String::new();

    for (path, file) in docs {
        let _ = writeln!(out, "{}", path);
        if file.tree.is_empty() {
            let _ = writeln!(out, "  (no doclets)");
        }

        for (id, doclet) in file.tree.doclets() {
            let level = file
                .tree
                .ancestors(id)
                .filter(|ancestor| file.tree.doclet(*ancestor).is_some())
                .count();
            let indent = "  ".repeat(level + 1);

            let _ = writeln!(
                out,
                "{}{}: {}",
                indent,
                doclet.code_line(),
                doclet.code_name().unwrap_or(ANONYMOUS)
            );
            for line in doclet.sections().iter().flat_map(|s| s.lines()) {
                let _ = writeln!(out, "{}  | {}", indent, line);
            }
        }
    }

    out
}

/// Renders all trees as one JSON object keyed by file path.
pub fn render_json(docs: &AllFileDocs) -> String {
    let trees: BTreeMap<&str, &DocTree> = docs
        .iter()
        .map(|(path, file)| (path.as_str(), &file.tree))
        .collect();
    stringify(&trees, Some(2))
}
