//! The per-file visitor session.
//!
//! A session owns the tree under construction and a cursor pointing at the
//! currently open node. Comment events attach doclet nodes under the cursor
//! without moving it. The most recently attached doclet under the cursor is
//! the anchor: identifier events on its code line name it, and a scope event
//! on its code line opens a scope node below it that becomes the new cursor.
//! Constructs that do not start on the anchor's code line are transparent.

use thiserror::Error;
use tracing::trace;

use super::{Event, SourceUnit};
use crate::core::doclet::{Doclet, is_doclet_comment};
use crate::core::tree::{DocTree, NodeId};

/// Errors raised while setting up a session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VisitorError {
    /// The session was built without a source unit to traverse.
    #[error("Traversal context is missing")]
    MissingContext,
}

/// What a listener receives for every new doclet node.
#[derive(Debug, Clone, Copy)]
pub struct DocletVisit<'a> {
    /// The tree as it is at the moment the node was attached.
    pub tree: &'a DocTree,
    /// The new node. It always holds a doclet.
    pub node: NodeId,
    /// The unit the session traverses.
    pub source: &'a SourceUnit,
}

impl<'a> DocletVisit<'a> {
    pub fn doclet(&self) -> Option<&'a Doclet> {
        self.tree.doclet(self.node)
    }
}

/// Receives doclet nodes while the traversal is still running.
pub trait DocletListener {
    fn on_doclet(&mut self, visit: DocletVisit<'_>);
}

impl<F> DocletListener for F
where
    F: FnMut(DocletVisit<'_>),
{
    fn on_doclet(&mut self, visit: DocletVisit<'_>) {
        self(visit)
    }
}

/// Builder for [`VisitorSession`].
#[derive(Default)]
pub struct VisitorSessionBuilder<'l> {
    source: Option<SourceUnit>,
    listener: Option<Box<dyn DocletListener + 'l>>,
}

impl<'l> VisitorSessionBuilder<'l> {
    pub fn source(mut self, source: SourceUnit) -> Self {
        self.source = Some(source);
        self
    }

    pub fn listener(mut self, listener: impl DocletListener + 'l) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Builds the session. Fails if no source unit was given.
    pub fn build(self) -> Result<VisitorSession<'l>, VisitorError> {
        let source = self.source.ok_or(VisitorError::MissingContext)?;
        let tree = DocTree::new();
        let cursor = tree.root();
        Ok(VisitorSession {
            source,
            tree,
            cursor,
            scopes: Vec::new(),
            listener: self.listener,
        })
    }
}

/// Builds one doclet tree from the events of a single traversal.
pub struct VisitorSession<'l> {
    source: SourceUnit,
    tree: DocTree,
    cursor: NodeId,
    /// One entry per open scope: the cursor to restore on exit if the scope
    /// pushed a node, `None` for transparent scopes.
    scopes: Vec<Option<NodeId>>,
    listener: Option<Box<dyn DocletListener + 'l>>,
}

impl<'l> VisitorSession<'l> {
    pub fn builder() -> VisitorSessionBuilder<'l> {
        VisitorSessionBuilder::default()
    }

    /// Creates a session without a listener.
    pub fn new(source: SourceUnit) -> Self {
        let tree = DocTree::new();
        let cursor = tree.root();
        Self {
            source,
            tree,
            cursor,
            scopes: Vec::new(),
            listener: None,
        }
    }

    pub fn source(&self) -> &SourceUnit {
        &self.source
    }

    pub fn tree(&self) -> &DocTree {
        &self.tree
    }

    /// The currently open node.
    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    /// Ends the traversal and hands out the tree.
    pub fn finish(self) -> DocTree {
        self.tree
    }

    /// Applies one event.
    pub fn dispatch(&mut self, event: Event<'_>) {
        trace!(event = %event.kind(), line = ?event.line(), "dispatch");
        match event {
            Event::Comment { text, line } => self.visit_comment(text, line),
            Event::Identifier { name, line } => self.visit_identifier(name, line),
            Event::ScopeEnter { line } => self.visit_scope_enter(line),
            Event::ScopeExit => self.visit_scope_exit(),
        }
    }

    fn visit_comment(&mut self, text: &str, line: usize) {
        if !is_doclet_comment(text) {
            return;
        }

        let code_line = line + 1;
        let code = self.source.line(code_line).unwrap_or_default();
        let doclet = Doclet::new(text, code, code_line);
        let node = self.tree.append(self.cursor, Some(doclet));

        trace!(
            file = self.source.path(),
            code_line,
            depth = self.tree.node(node).depth(),
            "doclet attached"
        );

        if let Some(listener) = self.listener.as_mut() {
            listener.on_doclet(DocletVisit {
                tree: &self.tree,
                node,
                source: &self.source,
            });
        }
    }

    fn visit_identifier(&mut self, name: &str, line: usize) {
        if let Some(anchor) = self.anchor(line)
            && let Some(doclet) = self.tree.doclet_mut(anchor)
        {
            doclet.set_code_name(name);
        }
    }

    fn visit_scope_enter(&mut self, line: usize) {
        match self.anchor(line) {
            Some(anchor) => {
                let scope = self.tree.append(anchor, None);
                self.scopes.push(Some(self.cursor));
                self.cursor = scope;
            }
            None => self.scopes.push(None),
        }
    }

    fn visit_scope_exit(&mut self) {
        match self.scopes.pop() {
            Some(Some(previous)) => self.cursor = previous,
            Some(None) => {}
            None => {
                if let Some(parent) = self.tree.node(self.cursor).parent() {
                    self.cursor = parent;
                }
            }
        }
    }

    /// The last doclet node under the cursor, if its code starts on `line`.
    fn anchor(&self, line: usize) -> Option<NodeId> {
        let candidate = self.tree.last_child(self.cursor)?;
        let doclet = self.tree.doclet(candidate)?;
        (doclet.code_line() == line).then_some(candidate)
    }
}
