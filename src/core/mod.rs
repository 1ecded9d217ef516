//! Core engine: doclet parsing and tree construction.
//!
//! ## Module Structure
//!
//! - `matching`: Stateless `match_all` over compiled patterns
//! - `doclet`: Doclet record and comment section splitter
//! - `tree`: Arena-backed doclet tree
//! - `visitor`: Event-driven session that builds the tree
//! - `parsers`: swc parsing of source files
//! - `walker`: Translates an swc AST walk into visitor events
//! - `file_scanner`: Source file discovery
//! - `context`: Config loading and parallel per-file traversal

pub mod context;
pub mod doclet;
pub mod file_scanner;
pub mod matching;
pub mod parsers;
pub mod tree;
pub mod visitor;
pub mod walker;

pub use context::{AllFileDocs, DocContext, FileDocs, Traversal};
pub use doclet::{Doclet, Tag};
pub use tree::{DocTree, Node, NodeId};
