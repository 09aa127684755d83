//! The Target Seam
//!
//! A target language is a [`Generator`]: one `translate` function that
//! dispatches on [`BlockKind`](blox_ir::BlockKind) and calls back into the
//! [`EmitContext`] for child code, names, helpers, and injection.

use blox_ir::Block;

use crate::util::prefix_lines;
use crate::{EmitContext, EmitResult, Fragment};

/// What a rule produced for one block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Translation {
    /// An expression together with its precedence.
    Value(Fragment),
    /// One or more complete statement lines, each newline-terminated.
    Statement(String),
    /// The rule emitted nothing inline (e.g. it registered a definition).
    Nothing,
    /// The target has no rule for this kind.
    Unsupported,
}

impl Translation {
    /// Shorthand for `Translation::Value(Fragment::new(text, precedence))`.
    pub fn value(text: impl Into<String>, precedence: crate::Precedence) -> Self {
        Translation::Value(Fragment::new(text, precedence))
    }
}

/// A target language.
pub trait Generator {
    /// Target name, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Translate a single block. Must not follow `next`; the statement
    /// translator does that.
    fn translate<'a>(
        &self,
        ctx: &mut EmitContext<'a>,
        block: &'a Block,
    ) -> EmitResult<Translation>;

    /// Runs once per compilation before any block is translated.
    fn init(&self, _ctx: &mut EmitContext<'_>) -> EmitResult<()> {
        Ok(())
    }

    /// Turn a top-level expression into a statement.
    fn scrub_naked_value(&self, line: &str) -> String {
        format!("{line};\n")
    }

    /// Render a block comment as line comments.
    fn comment(&self, text: &str) -> String {
        let mut out = prefix_lines(text, "// ");
        out.push('\n');
        out
    }
}
