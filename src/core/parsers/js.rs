use anyhow::{Result, anyhow};
use std::path::Path;
use std::sync::Arc;
use swc_common::{
    FileName, Globals, SourceMap,
    comments::{Comment, CommentKind, SingleThreadedComments},
};
use swc_ecma_ast::Program;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

use crate::core::visitor::SourceUnit;

/// A parsed source file together with everything a traversal needs.
///
/// Comments are copied out of swc's `SingleThreadedComments` so the value can
/// be sent across threads.
pub struct ParsedSource {
    pub program: Program,
    pub source_map: Arc<SourceMap>,
    /// Block comments sorted by position.
    pub block_comments: Vec<Comment>,
    /// Raw lines of the file, for code lookups.
    pub unit: SourceUnit,
}

/// Pick the swc syntax for a file based on its extension.
///
/// `.ts`/`.mts`/`.cts` parse as TypeScript, `.tsx` as TSX, anything else as
/// JavaScript with JSX enabled.
pub fn syntax_for_path(file_path: &str) -> Syntax {
    match Path::new(file_path).extension().and_then(|e| e.to_str()) {
        Some("ts" | "mts" | "cts") => Syntax::Typescript(TsSyntax::default()),
        Some("tsx") => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
    }
}

/// Parse a JS/TS source string into a program and its block comments.
///
/// Accepts a shared SourceMap so files can be parsed in parallel, each with
/// its own map.
pub fn parse_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    let unit = SourceUnit::new(file_path, &code);

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(
            syntax_for_path(file_path),
            StringInput::from(&*source_file),
            Some(&comments),
        );

        let program = parser
            .parse_program()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e.kind()))?;

        let block_comments = collect_block_comments(&comments);

        Ok(ParsedSource {
            program,
            source_map,
            block_comments,
            unit,
        })
    })
}

/// Copies all block comments out of swc's comment store, in source order.
fn collect_block_comments(comments: &SingleThreadedComments) -> Vec<Comment> {
    let (leading, trailing) = comments.borrow_all();
    let mut block_comments: Vec<Comment> = leading
        .values()
        .chain(trailing.values())
        .flatten()
        .filter(|cmt| cmt.kind == CommentKind::Block)
        .cloned()
        .collect();

    block_comments.sort_by_key(|cmt| cmt.span.lo);
    block_comments.dedup_by_key(|cmt| cmt.span.lo);
    block_comments
}
