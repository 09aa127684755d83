//! Emission Context
//!
//! All mutable state of one compilation run: the identifier table, the
//! definitions registry, and the stack of enclosing loops and procedures
//! that early exits consult. A context is built per `compile` call and
//! dropped with it, so nothing leaks from one run into the next.
//!
//! The translators live in `expr` and `stmt` as further `impl` blocks.

use blox_ir::{Block, BlockGraph};
use smallvec::SmallVec;

use crate::definitions::{DefinitionKey, Definitions};
use crate::inject::inject_id;
use crate::names::{NameKind, NameTable};
use crate::{EmitConfig, EmitResult, Generator};

/// Kind of an enclosing construct.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum FrameKind {
    Loop,
    Procedure,
}

/// An enclosing loop or procedure, innermost last.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Frame<'a> {
    pub(crate) kind: FrameKind,
    pub(crate) block: &'a Block,
}

/// State of one compilation run.
pub struct EmitContext<'a> {
    pub(crate) graph: &'a BlockGraph,
    pub(crate) generator: &'a dyn Generator,
    pub(crate) config: &'a EmitConfig,
    names: NameTable,
    definitions: Definitions,
    pub(crate) frames: SmallVec<[Frame<'a>; 8]>,
}

impl<'a> EmitContext<'a> {
    pub fn new(graph: &'a BlockGraph, generator: &'a dyn Generator, config: &'a EmitConfig) -> Self {
        EmitContext {
            graph,
            generator,
            config,
            names: NameTable::new(config.reserved_words.iter().cloned()),
            definitions: Definitions::new(),
            frames: SmallVec::new(),
        }
    }

    #[inline]
    pub fn graph(&self) -> &'a BlockGraph {
        self.graph
    }

    #[inline]
    pub fn config(&self) -> &'a EmitConfig {
        self.config
    }

    /// The indentation unit.
    #[inline]
    pub fn indent(&self) -> &'a str {
        &self.config.indent
    }

    /// Concrete identifier for a user variable.
    pub fn variable_name(&mut self, name: &str) -> String {
        self.names.bind(NameKind::Variable, name)
    }

    /// Concrete identifier for a user procedure.
    pub fn procedure_name(&mut self, name: &str) -> String {
        self.names.bind(NameKind::Procedure, name)
    }

    /// A never-used identifier derived from `hint` (loop counters, cached
    /// bounds).
    pub fn fresh_name(&mut self, hint: &str) -> String {
        self.names.fresh(hint)
    }

    pub fn names(&self) -> &NameTable {
        &self.names
    }

    pub fn names_mut(&mut self) -> &mut NameTable {
        &mut self.names
    }

    /// Make a helper available and return the name to call it by.
    ///
    /// See [`Definitions::provide`].
    pub fn provide_helper(&mut self, key: &str, template: &[&str]) -> EmitResult<String> {
        self.definitions
            .provide(&mut self.names, key, template, &self.config.indent)
    }

    /// Register a non-helper definition.
    pub fn define(&mut self, key: DefinitionKey, code: String) {
        self.definitions.define(key, code);
    }

    pub fn definitions(&self) -> &Definitions {
        &self.definitions
    }

    pub(crate) fn into_definitions(self) -> Definitions {
        self.definitions
    }

    /// The configured statement prefix for `block`, with its uid filled in.
    pub fn statement_prefix(&self, block: &Block) -> Option<String> {
        let snippet = self.config.injection.statement_prefix.as_deref()?;
        Some(inject_id(snippet, block.uid()))
    }

    /// The configured statement suffix for `block`, with its uid filled in.
    pub fn statement_suffix(&self, block: &Block) -> Option<String> {
        let snippet = self.config.injection.statement_suffix.as_deref()?;
        Some(inject_id(snippet, block.uid()))
    }

    /// The configured loop trap for `block`, with its uid filled in.
    pub fn loop_trap(&self, block: &Block) -> Option<String> {
        let snippet = self.config.injection.loop_trap.as_deref()?;
        Some(inject_id(snippet, block.uid()))
    }

    /// The comment lines for `block`, or an empty string.
    pub fn comment_for(&self, block: &Block) -> String {
        block
            .comment_text()
            .map(|text| self.generator.comment(text))
            .unwrap_or_default()
    }
}
