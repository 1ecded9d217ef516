use std::fmt;

/// Lexical events a traversal engine reports to a [`VisitorSession`].
///
/// Events must arrive in source order: the comment ending on line `n` before
/// any identifier or scope event of a construct starting on line `n + 1`, and
/// scope events properly nested.
///
/// [`VisitorSession`]: super::VisitorSession
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// A block comment. `text` excludes `/*` and `*/`; `line` is the line the
    /// comment ends on.
    Comment { text: &'a str, line: usize },
    /// An identifier token ending on `line`.
    Identifier { name: &'a str, line: usize },
    /// A construct opening a lexical scope on `line`.
    ScopeEnter { line: usize },
    /// The end of the innermost open scope.
    ScopeExit,
}

impl Event<'_> {
    /// The line the event is anchored to, if it carries one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Event::Comment { line, .. }
            | Event::Identifier { line, .. }
            | Event::ScopeEnter { line } => Some(*line),
            Event::ScopeExit => None,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::Comment { .. } => EventKind::Comment,
            Event::Identifier { .. } => EventKind::Identifier,
            Event::ScopeEnter { .. } => EventKind::ScopeEnter,
            Event::ScopeExit => EventKind::ScopeExit,
        }
    }
}

/// Payload-free event discriminant, as logged by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Comment,
    Identifier,
    ScopeEnter,
    ScopeExit,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Comment => write!(f, "comment"),
            EventKind::Identifier => write!(f, "identifier"),
            EventKind::ScopeEnter => write!(f, "scope-enter"),
            EventKind::ScopeExit => write!(f, "scope-exit"),
        }
    }
}
