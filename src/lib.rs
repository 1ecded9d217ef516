//! jsdoctree - JSDoc doclet trees for JavaScript and TypeScript sources
//!
//! jsdoctree parses documentation comments into doclets and attaches each
//! doclet to the construct it documents, building a tree that mirrors the
//! lexical nesting of the source. Rules run on the doclets as the tree is
//! built.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Doclet parsing, visitor session and swc adapter
//! - `issues`: Issue types, diagnostic sink and message templates
//! - `rules`: Doclet rules
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod utils;
