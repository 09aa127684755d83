//! Injection Snippets
//!
//! Hosts instrument generated code by configuring snippets that are placed
//! around every statement and at the top of every loop iteration. The
//! placeholder `%1` in a snippet is replaced by the quoted uid of the
//! block the snippet belongs to.
//!
//! Early exits (`break`, `continue`, `return`) would skip the suffix of the
//! blocks they leave. [`Exit`] tells the statement translator which
//! enclosing snippets must be replayed ahead of the jump; see
//! `EmitContext::exit_injection`.

use crate::util::single_quote;

/// Placeholder for the block identity inside a snippet.
pub const ID_PLACEHOLDER: &str = "%1";

/// Configured instrumentation snippets. `None` means "emit nothing".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Injection {
    /// Emitted before each statement.
    pub statement_prefix: Option<String>,
    /// Emitted after each statement.
    pub statement_suffix: Option<String>,
    /// Emitted at the top of every loop iteration.
    pub loop_trap: Option<String>,
}

impl Injection {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_statement_prefix(mut self, snippet: impl Into<String>) -> Self {
        self.statement_prefix = Some(snippet.into());
        self
    }

    #[must_use]
    pub fn with_statement_suffix(mut self, snippet: impl Into<String>) -> Self {
        self.statement_suffix = Some(snippet.into());
        self
    }

    #[must_use]
    pub fn with_loop_trap(mut self, snippet: impl Into<String>) -> Self {
        self.loop_trap = Some(snippet.into());
        self
    }

    /// Whether no snippet is configured.
    pub fn is_empty(&self) -> bool {
        self.statement_prefix.is_none() && self.statement_suffix.is_none() && self.loop_trap.is_none()
    }
}

/// Substitute the quoted `uid` for every placeholder in `snippet`.
pub fn inject_id(snippet: &str, uid: &str) -> String {
    snippet.replace(ID_PLACEHOLDER, &single_quote(uid))
}

/// How control leaves the current statement.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Exit {
    /// Falls through to the next statement.
    Normal,
    /// Leaves the innermost loop.
    Break,
    /// Jumps to the next iteration of the innermost loop.
    Continue,
    /// Leaves the enclosing procedure.
    Return,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inject_id_quotes_uid() {
        assert_eq!(inject_id("trace(%1);\n", "b1"), "trace('b1');\n");
        assert_eq!(inject_id("a(%1, %1)", "x'y"), r"a('x\'y', 'x\'y')");
        assert_eq!(inject_id("tick();", "b1"), "tick();");
    }

    #[test]
    fn empty_by_default() {
        assert!(Injection::new().is_empty());
        assert!(!Injection::new().with_loop_trap("t();").is_empty());
    }
}
