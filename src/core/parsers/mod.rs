//! Source file parsers.
//!
//! - `js`: JS/JSX/TS/TSX parser (uses swc for AST generation)

pub mod js;
