//! Blocks
//!
//! One node of the block graph. Field values are the editor's raw strings
//! (dropdown keys, numbers as typed, variable names); value inputs and
//! statement slots point at child blocks by [`BlockId`].

use rustc_hash::FxHashMap;

use crate::{BlockId, BlockKind};

/// Shape data that varies per block instance.
///
/// The editor stores this alongside the block when a mutator changes its
/// inputs: how many `ADD{n}` items a join has, how many `IF{n}` branches an
/// `if` has, which parameters a procedure takes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mutation {
    /// Item count for variadic blocks (`text_join`, `lists_create_with`).
    pub items: u32,
    /// Number of `else if` branches after the first `if`.
    pub else_if: u32,
    /// Whether an `else` branch is present.
    pub has_else: bool,
    /// Procedure parameter names (definitions and calls).
    pub params: Vec<String>,
    /// Whether a conditional return carries a value.
    pub has_return: bool,
}

impl Mutation {
    /// Create an empty mutation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the item count.
    #[must_use]
    pub fn items(mut self, items: u32) -> Self {
        self.items = items;
        self
    }

    /// Set the number of `else if` branches.
    #[must_use]
    pub fn else_if(mut self, count: u32) -> Self {
        self.else_if = count;
        self
    }

    /// Mark the `else` branch as present.
    #[must_use]
    pub fn with_else(mut self) -> Self {
        self.has_else = true;
        self
    }

    /// Set the procedure parameter names.
    #[must_use]
    pub fn params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether a conditional return carries a value.
    #[must_use]
    pub fn has_return(mut self, has_return: bool) -> Self {
        self.has_return = has_return;
        self
    }
}

/// A single block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    uid: String,
    kind: BlockKind,
    fields: FxHashMap<String, String>,
    inputs: FxHashMap<String, BlockId>,
    statements: FxHashMap<String, BlockId>,
    next: Option<BlockId>,
    disabled: bool,
    comment: Option<String>,
    mutation: Mutation,
}

impl Block {
    /// Create a block with the editor identity `uid`.
    pub fn new(uid: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            uid: uid.into(),
            kind,
            fields: FxHashMap::default(),
            inputs: FxHashMap::default(),
            statements: FxHashMap::default(),
            next: None,
            disabled: false,
            comment: None,
            mutation: Mutation::default(),
        }
    }

    /// Set a field value.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Connect a child block to a value input.
    #[must_use]
    pub fn input(mut self, name: impl Into<String>, child: BlockId) -> Self {
        self.inputs.insert(name.into(), child);
        self
    }

    /// Connect the first block of a statement stack to a statement slot.
    #[must_use]
    pub fn statement(mut self, name: impl Into<String>, child: BlockId) -> Self {
        self.statements.insert(name.into(), child);
        self
    }

    /// Chain the following statement block.
    #[must_use]
    pub fn followed_by(mut self, next: BlockId) -> Self {
        self.next = Some(next);
        self
    }

    /// Mark the block as disabled (it emits nothing).
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Attach a user comment.
    #[must_use]
    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comment = Some(text.into());
        self
    }

    /// Attach mutation data.
    #[must_use]
    pub fn mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    /// Editor identity, substituted into injection snippets.
    #[inline]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    #[inline]
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Value of a field, if the block has it.
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Whether the block carries a field (even an empty one).
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Child connected to a value input.
    pub fn input_block(&self, name: &str) -> Option<BlockId> {
        self.inputs.get(name).copied()
    }

    /// First block of a statement slot.
    pub fn statement_block(&self, name: &str) -> Option<BlockId> {
        self.statements.get(name).copied()
    }

    /// The block chained after this one.
    #[inline]
    pub fn next_block(&self) -> Option<BlockId> {
        self.next
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn comment_text(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    #[inline]
    pub fn mutation_data(&self) -> &Mutation {
        &self.mutation
    }
}
