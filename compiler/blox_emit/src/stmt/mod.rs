//! Statement Translator
//!
//! Walks statement stacks through `next`, surrounds each statement with the
//! configured prefix and suffix snippets, and keeps the stack of enclosing
//! loops and procedures that early exits need.
//!
//! Injection layout:
//!
//! ```text
//! <prefix(stmt)>           automatic, unless the kind places its own
//! <stmt>
//!   <loop trap(loop)>      top of every loop body
//!   ...body...
//!   <suffix(loop)>         bottom of every loop body
//!   <exit snippets> break; replayed before an early exit
//! <suffix(stmt)>
//! ```

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

use blox_ir::{Block, BlockId};

use crate::context::{Frame, FrameKind};
use crate::stack::ensure_sufficient_stack;
use crate::util::prefix_lines;
use crate::{EmitContext, EmitError, EmitResult, Exit, Translation};

impl<'a> EmitContext<'a> {
    /// Translate the statement stack starting at `first`.
    ///
    /// Disabled blocks are skipped. Value blocks found in statement position
    /// are terminated with [`Generator::scrub_naked_value`].
    ///
    /// # Errors
    ///
    /// [`EmitError::UnsupportedBlock`] for a statement block the target has
    /// no rule for; any error raised by a rule.
    ///
    /// [`Generator::scrub_naked_value`]: crate::Generator::scrub_naked_value
    pub fn block_to_code(&mut self, first: BlockId) -> EmitResult<String> {
        let graph = self.graph;
        let generator = self.generator;
        let mut out = String::new();
        let mut current = Some(first);

        while let Some(id) = current {
            let block = graph.get(id);
            current = block.next_block();
            if block.is_disabled() {
                continue;
            }

            match ensure_sufficient_stack(|| generator.translate(self, block))? {
                Translation::Value(fragment) => {
                    if fragment.text.is_empty() {
                        continue;
                    }
                    out.push_str(&self.comment_for(block));
                    out.push_str(&generator.scrub_naked_value(&fragment.text));
                }
                Translation::Statement(code) => {
                    out.push_str(&self.comment_for(block));
                    self.push_injected(&mut out, block, &code);
                }
                Translation::Nothing => {}
                Translation::Unsupported => {
                    return Err(EmitError::UnsupportedBlock {
                        block: block.uid().to_string(),
                        kind: block.kind().type_name(),
                        target: generator.name(),
                    });
                }
            }
        }
        Ok(out)
    }

    /// Code of statement slot `slot`, indented one level.
    pub fn statement(&mut self, block: &Block, slot: &str) -> EmitResult<String> {
        let Some(first) = block.statement_block(slot) else {
            return Ok(String::new());
        };
        let code = self.block_to_code(first)?;
        Ok(prefix_lines(&code, self.indent()))
    }

    /// Code of a loop body: the slot's statements inside a loop frame,
    /// with the loop trap on top and the loop's own suffix at the bottom.
    pub fn loop_body(&mut self, block: &'a Block, slot: &str) -> EmitResult<String> {
        self.frames.push(Frame {
            kind: FrameKind::Loop,
            block,
        });
        let body = self.statement(block, slot);
        self.frames.pop();
        Ok(self.add_loop_trap(body?, block))
    }

    /// Wrap an already indented loop body with the trap and the loop's
    /// suffix.
    pub fn add_loop_trap(&self, body: String, block: &Block) -> String {
        let indent = self.indent();
        let mut out = String::with_capacity(body.len());
        if let Some(trap) = self.loop_trap(block) {
            out.push_str(&prefix_lines(&trap, indent));
        }
        out.push_str(&body);
        if !block.kind().suppresses_injection() {
            if let Some(suffix) = self.statement_suffix(block) {
                out.push_str(&prefix_lines(&suffix, indent));
            }
        }
        out
    }

    /// Code of a procedure body: the slot's statements inside a procedure
    /// frame. Loops inside do not see loops outside.
    pub fn procedure_body(&mut self, block: &'a Block, slot: &str) -> EmitResult<String> {
        self.frames.push(Frame {
            kind: FrameKind::Procedure,
            block,
        });
        let body = self.statement(block, slot);
        self.frames.pop();
        body
    }

    /// Snippets to replay ahead of an early exit from `block`.
    ///
    /// The exiting block's own suffix (and its prefix, when the kind places
    /// its own), then the innermost loop's suffix for `Break`/`Continue`
    /// or the innermost procedure's prefix and suffix for `Return`.
    /// Unindented; the caller places it.
    pub fn exit_injection(&self, block: &Block, exit: Exit) -> String {
        if exit == Exit::Normal {
            return String::new();
        }

        let mut out = String::new();
        if block.kind().suppresses_injection() {
            out.extend(self.statement_prefix(block));
        }
        out.extend(self.statement_suffix(block));

        match exit {
            Exit::Break | Exit::Continue => {
                if let Some(looped) = self.enclosing(FrameKind::Loop) {
                    if !looped.kind().suppresses_injection() {
                        out.extend(self.statement_suffix(looped));
                    }
                }
            }
            Exit::Return => {
                if let Some(procedure) = self.enclosing(FrameKind::Procedure) {
                    out.extend(self.statement_prefix(procedure));
                    out.extend(self.statement_suffix(procedure));
                }
            }
            Exit::Normal => {}
        }
        out
    }

    /// The innermost enclosing loop, if any within the current procedure.
    pub fn enclosing_loop(&self) -> Option<&'a Block> {
        self.enclosing(FrameKind::Loop)
    }

    /// The innermost enclosing procedure, if any.
    pub fn enclosing_procedure(&self) -> Option<&'a Block> {
        self.enclosing(FrameKind::Procedure)
    }

    fn enclosing(&self, kind: FrameKind) -> Option<&'a Block> {
        for frame in self.frames.iter().rev() {
            if frame.kind == kind {
                return Some(frame.block);
            }
            if frame.kind == FrameKind::Procedure {
                return None;
            }
        }
        None
    }

    fn push_injected(&self, out: &mut String, block: &Block, code: &str) {
        if block.kind().suppresses_injection() {
            out.push_str(code);
            return;
        }
        out.extend(self.statement_prefix(block));
        out.push_str(code);
        out.extend(self.statement_suffix(block));
    }
}
