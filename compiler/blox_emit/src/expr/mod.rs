//! Expression Translator
//!
//! Children are translated on demand and come back as [`Fragment`]s. The
//! parent states the precedence of the operator it is about to place
//! around the child, and the child is parenthesized only if it does not
//! bind strictly tighter (see [`PrecedenceTable::needs_parens`]).
//!
//! An empty input never produces empty text. Rules either handle `None`
//! from [`EmitContext::value`] themselves (some have operand-specific
//! identities) or use [`EmitContext::value_or`] to get the configured
//! fallback literal for the expected [`ValueKind`].
//!
//! [`PrecedenceTable::needs_parens`]: crate::PrecedenceTable::needs_parens


use blox_ir::{Block, BlockId};
use tracing::{trace, warn};

use crate::stack::ensure_sufficient_stack;
use crate::{EmitContext, EmitResult, Fragment, Precedence, Translation, ValueKind};

impl EmitContext<'_> {
    /// Translate `id` as an expression embedded at `outer`.
    ///
    /// Blocks that cannot produce a value translate to the `Any` fallback.
    pub fn translate_expression(&mut self, id: BlockId, outer: Precedence) -> EmitResult<Fragment> {
        match self.raw_expression(id)? {
            Some(fragment) => Ok(fragment.embed(outer, &self.config.precedence)),
            None => Ok(Fragment::atomic(self.config.fallbacks.literal(ValueKind::Any))),
        }
    }

    /// Code of the value input `slot`, embedded at `outer`.
    ///
    /// `None` when the input is empty, disabled, or holds a block that
    /// produces no value.
    pub fn value(&mut self, block: &Block, slot: &str, outer: Precedence) -> EmitResult<Option<String>> {
        let Some(child) = block.input_block(slot) else {
            return Ok(None);
        };
        let fragment = self.raw_expression(child)?;
        Ok(fragment.map(|f| f.embed(outer, &self.config.precedence).text))
    }

    /// Like [`EmitContext::value`], substituting the fallback literal for
    /// `kind` when the input is empty.
    pub fn value_or(
        &mut self,
        block: &Block,
        slot: &str,
        outer: Precedence,
        kind: ValueKind,
    ) -> EmitResult<String> {
        if let Some(code) = self.value(block, slot, outer)? {
            return Ok(code);
        }
        let fallback = self.config.fallbacks.literal(kind);
        trace!(block = block.uid(), slot, fallback, "empty input");
        Ok(fallback.to_string())
    }

    /// The fragment for `id` before parenthesization.
    fn raw_expression(&mut self, id: BlockId) -> EmitResult<Option<Fragment>> {
        let graph = self.graph;
        let generator = self.generator;
        let block = graph.get(id);
        if block.is_disabled() {
            return Ok(None);
        }

        let translation = ensure_sufficient_stack(|| generator.translate(self, block))?;
        match translation {
            Translation::Value(fragment) if fragment.text.is_empty() => Ok(None),
            Translation::Value(fragment) => Ok(Some(fragment)),
            Translation::Statement(_) | Translation::Nothing => {
                warn!(
                    block = block.uid(),
                    kind = block.kind().type_name(),
                    "statement block used as a value"
                );
                Ok(None)
            }
            Translation::Unsupported => {
                warn!(
                    block = block.uid(),
                    kind = block.kind().type_name(),
                    generator = generator.name(),
                    "no rule for value block"
                );
                Ok(None)
            }
        }
    }
}
