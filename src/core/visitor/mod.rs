//! Structural visitor: builds doclet trees from lexical events.
//!
//! The visitor knows nothing about the parser that drives it. A traversal
//! engine translates its own callbacks into [`Event`]s and feeds them to a
//! [`VisitorSession`], one session per source unit.
//!
//! ## Module Structure
//!
//! - `event`: The event vocabulary
//! - `session`: Session state, cursor protocol and listener hook
//! - `source`: 1-indexed line table of the traversed unit

mod event;
mod session;
mod source;

pub use event::{Event, EventKind};
pub use session::{
    DocletListener, DocletVisit, VisitorError, VisitorSession, VisitorSessionBuilder,
};
pub use source::SourceUnit;
