//! Blox IR - Block Graph Types
//!
//! The visual program a user composes in the block editor, flattened into
//! an arena the emitter can walk:
//! - `BlockId` indices instead of owned child pointers
//! - `BlockKind`, the closed set of node kinds a generator dispatches on
//! - `Block`, one node with its fields, value inputs and statement slots
//! - `BlockGraph`, the arena plus top-level stacks and workspace variables
//!
//! # Ownership
//!
//! The graph is built by the editor side (or by tests) and handed to the
//! emitter by shared reference. The emitter never mutates it. A graph must
//! be acyclic: a block that is its own descendant is a caller bug.

mod block;
mod block_id;
mod graph;
mod kind;

pub use block::{Block, Mutation};
pub use block_id::BlockId;
pub use graph::BlockGraph;
pub use kind::BlockKind;
