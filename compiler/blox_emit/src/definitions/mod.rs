//! Definitions Registry
//!
//! Collects everything that goes ahead of the main code: the variable
//! declaration line, helper functions, and procedure definitions. Entries
//! keep the order in which they were first registered.
//!
//! Helpers are materialized at most once per compilation. The first request
//! allocates a fresh identifier, substitutes it for [`NAME_PLACEHOLDER`] in
//! the template, re-indents the body, and stores the result. Later requests
//! for the same key return the same identifier.

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

use rustc_hash::FxHashMap;

use crate::names::NameTable;
use crate::{EmitError, EmitResult};

/// Placeholder for the helper's own name inside a helper template.
pub const NAME_PLACEHOLDER: &str = "{{name}}";

/// Identity of a definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DefinitionKey {
    /// The variable declaration block.
    Variables,
    /// A helper function, keyed by its desired name.
    Helper(String),
    /// A user procedure, keyed by its concrete name.
    Procedure(String),
}

/// One registered definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Definition {
    pub key: DefinitionKey,
    pub code: String,
}

#[derive(Debug)]
struct ProvidedHelper {
    name: String,
    template: String,
}

/// Ordered registry of definitions for one compilation.
#[derive(Debug, Default)]
pub struct Definitions {
    entries: Vec<Definition>,
    index: FxHashMap<DefinitionKey, usize>,
    helpers: FxHashMap<String, ProvidedHelper>,
}

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make helper `key` available and return the name to call it by.
    ///
    /// `template` lines are joined with newlines. Leading two-space units
    /// are rewritten to `indent`.
    ///
    /// # Errors
    ///
    /// [`EmitError::HelperConflict`] if `key` was already provided with a
    /// different template.
    pub fn provide(
        &mut self,
        names: &mut NameTable,
        key: &str,
        template: &[&str],
        indent: &str,
    ) -> EmitResult<String> {
        let template = template.join("\n");
        if let Some(existing) = self.helpers.get(key) {
            if existing.template != template {
                return Err(EmitError::HelperConflict {
                    key: key.to_string(),
                });
            }
            return Ok(existing.name.clone());
        }

        let name = names.fresh(key);
        let code = reindent(&template.replace(NAME_PLACEHOLDER, &name), indent);
        tracing::debug!(helper = key, %name, "materialized helper");
        self.define(DefinitionKey::Helper(key.to_string()), code);
        self.helpers.insert(
            key.to_string(),
            ProvidedHelper {
                name: name.clone(),
                template,
            },
        );
        Ok(name)
    }

    /// Register a definition, replacing the code of an existing entry with
    /// the same key in place.
    pub fn define(&mut self, key: DefinitionKey, code: String) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].code = code;
            return;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(Definition { key, code });
    }

    pub fn get(&self, key: &DefinitionKey) -> Option<&Definition> {
        self.index.get(key).map(|&slot| &self.entries[slot])
    }

    /// Definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the registry, yielding the code of every entry in order.
    pub fn into_codes(self) -> Vec<String> {
        self.entries.into_iter().map(|d| d.code).collect()
    }
}

/// Rewrite each leading two-space unit of every line as `indent`.
fn reindent(text: &str, indent: &str) -> String {
    if indent == "  " {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let spaces = line.len() - line.trim_start_matches(' ').len();
        for _ in 0..spaces / 2 {
            out.push_str(indent);
        }
        out.push_str(&line[spaces - spaces % 2..]);
    }
    out
}
