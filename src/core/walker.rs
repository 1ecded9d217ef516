//! swc adapter: turns an AST walk into visitor events.
//!
//! This is the only place that knows about swc node types. The walker keeps
//! the ordering contract of [`VisitorSession`]:
//!
//! - block comments are emitted before the first node that starts after them,
//!   and before a scope closes if they sit inside it,
//! - declaration names (`function foo`, `class Foo`, method keys) are reported
//!   before the scope of the declaration opens,
//! - scope events are anchored on the first line of the construct and always
//!   come in enter/exit pairs.
//!
//! Scopes are opened for functions, arrow functions, methods, constructors,
//! accessors and class bodies.

use swc_common::{BytePos, SourceMap, Spanned, comments::Comment};
use swc_ecma_ast::{
    ArrowExpr, Class, ClassMember, Constructor, Expr, Function, GetterProp, Ident, IdentName,
    ModuleItem, PropOrSpread, SetterProp, Stmt,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::parsers::js::ParsedSource;
use crate::core::tree::DocTree;
use crate::core::visitor::{Event, VisitorSession};

/// Builds the doclet tree of a parsed file, without a listener.
pub fn build_doc_tree(parsed: &ParsedSource) -> DocTree {
    let mut session = VisitorSession::new(parsed.unit.clone());
    walk(parsed, &mut session);
    session.finish()
}

/// Walks a parsed file and feeds every event into `session`.
pub fn walk(parsed: &ParsedSource, session: &mut VisitorSession<'_>) {
    let mut walker = EventWalker {
        source_map: &parsed.source_map,
        comments: &parsed.block_comments,
        next_comment: 0,
        session,
    };
    parsed.program.visit_with(&mut walker);
    walker.flush_comments(BytePos(u32::MAX));
}

struct EventWalker<'a, 's, 'l> {
    source_map: &'a SourceMap,
    comments: &'a [Comment],
    /// Index of the first comment not yet emitted.
    next_comment: usize,
    session: &'s mut VisitorSession<'l>,
}

impl EventWalker<'_, '_, '_> {
    fn line_of(&self, pos: BytePos) -> usize {
        self.source_map.lookup_char_pos(pos).line
    }

    /// Emits every pending comment that ends at or before `pos`.
    fn flush_comments(&mut self, pos: BytePos) {
        let comments = self.comments;
        while let Some(comment) = comments.get(self.next_comment) {
            if comment.span.hi > pos {
                break;
            }
            self.next_comment += 1;

            // `hi` points past the closing `*/`; the comment ends one byte earlier.
            let end = if comment.span.hi > comment.span.lo {
                comment.span.hi - BytePos(1)
            } else {
                comment.span.hi
            };
            let line = self.line_of(end);
            self.session.dispatch(Event::Comment {
                text: &comment.text,
                line,
            });
        }
    }

    fn identifier(&mut self, name: &str, lo: BytePos) {
        self.flush_comments(lo);
        let line = self.line_of(lo);
        self.session.dispatch(Event::Identifier { name, line });
    }

    /// Runs `body` inside a scope opened on the line of `lo` and closed at `hi`.
    fn scoped(&mut self, lo: BytePos, hi: BytePos, body: impl FnOnce(&mut Self)) {
        self.flush_comments(lo);
        let line = self.line_of(lo);
        self.session.dispatch(Event::ScopeEnter { line });
        body(self);
        self.flush_comments(hi);
        self.session.dispatch(Event::ScopeExit);
    }
}

impl Visit for EventWalker<'_, '_, '_> {
    fn visit_module_item(&mut self, node: &ModuleItem) {
        self.flush_comments(node.span().lo);
        node.visit_children_with(self);
    }

    fn visit_stmt(&mut self, node: &Stmt) {
        self.flush_comments(node.span().lo);
        node.visit_children_with(self);
    }

    fn visit_class_member(&mut self, node: &ClassMember) {
        self.flush_comments(node.span().lo);
        node.visit_children_with(self);
    }

    fn visit_prop_or_spread(&mut self, node: &PropOrSpread) {
        self.flush_comments(node.span().lo);
        node.visit_children_with(self);
    }

    fn visit_expr(&mut self, node: &Expr) {
        self.flush_comments(node.span().lo);
        node.visit_children_with(self);
    }

    fn visit_ident(&mut self, node: &Ident) {
        self.identifier(&node.sym, node.span.lo);
    }

    fn visit_ident_name(&mut self, node: &IdentName) {
        self.identifier(&node.sym, node.span.lo);
    }

    fn visit_function(&mut self, node: &Function) {
        self.scoped(node.span.lo, node.span.hi, |this| {
            node.visit_children_with(this);
        });
    }

    fn visit_arrow_expr(&mut self, node: &ArrowExpr) {
        self.scoped(node.span.lo, node.span.hi, |this| {
            node.visit_children_with(this);
        });
    }

    fn visit_class(&mut self, node: &Class) {
        self.scoped(node.span.lo, node.span.hi, |this| {
            node.visit_children_with(this);
        });
    }

    fn visit_constructor(&mut self, node: &Constructor) {
        self.flush_comments(node.span.lo);
        node.key.visit_with(self);
        self.scoped(node.span.lo, node.span.hi, |this| {
            node.params.visit_with(this);
            node.body.visit_with(this);
        });
    }

    fn visit_getter_prop(&mut self, node: &GetterProp) {
        self.flush_comments(node.span.lo);
        node.key.visit_with(self);
        self.scoped(node.span.lo, node.span.hi, |this| {
            node.body.visit_with(this);
        });
    }

    fn visit_setter_prop(&mut self, node: &SetterProp) {
        self.flush_comments(node.span.lo);
        node.key.visit_with(self);
        self.scoped(node.span.lo, node.span.hi, |this| {
            node.param.visit_with(this);
            node.body.visit_with(this);
        });
    }
}
