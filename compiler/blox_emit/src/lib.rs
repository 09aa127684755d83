//! Blox Code Emission Engine
//!
//! Turns a [`BlockGraph`](blox_ir::BlockGraph) into target-language source
//! text. The engine is target independent; a target plugs in as a
//! [`Generator`] and calls back into the [`EmitContext`] for everything
//! that needs shared state:
//!
//! - child expressions with correct parenthesization ([`Precedence`],
//!   [`PrecedenceTable`], [`Fragment`]),
//! - nested statement bodies with instrumentation snippets ([`Injection`],
//!   [`Exit`]),
//! - collision-free identifiers ([`NameTable`]),
//! - deduplicated helper functions and procedure definitions
//!   ([`Definitions`]).
//!
//! [`Compiler`] runs one compilation per call and returns an
//! [`EmittedDocument`].

mod config;
mod context;
mod definitions;
mod driver;
mod error;
mod expr;
mod generator;
mod inject;
mod names;
mod precedence;
mod stack;
mod stmt;
pub mod util;

#[cfg(test)]
mod test_helpers;

pub use config::{EmitConfig, Fallbacks, ValueKind, DEFAULT_INDENT};
pub use context::EmitContext;
pub use definitions::{Definition, DefinitionKey, Definitions, NAME_PLACEHOLDER};
pub use driver::{Compiler, EmittedDocument};
pub use error::{field, EmitError, EmitResult};
pub use generator::{Generator, Translation};
pub use inject::{inject_id, Exit, Injection, ID_PLACEHOLDER};
pub use names::{safe_name, NameKind, NameTable};
pub use precedence::{Fragment, Precedence, PrecedenceTable};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, and nothing after the first call.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_ok() {
            use tracing_subscriber::prelude::*;
            use tracing_subscriber::{fmt, registry, EnvFilter};

            registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
