//! Identifier Allocation
//!
//! Maps abstract names (variable and procedure names as the user typed
//! them) to concrete identifiers that are legal in the target, unique
//! across the output, and not reserved words.
//!
//! Binding is keyed case-insensitively by `(kind, name)`, so `Count` and
//! `count` share one identifier while a variable and a procedure both
//! called `count` get distinct ones. Concrete names are never reused within
//! a compilation: a shadowing binding always gets a fresh identifier, and
//! popping its scope only restores the outer mapping.


use std::fmt::Write;

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

/// Namespace of an abstract name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NameKind {
    Variable,
    Procedure,
}

type NameKey = (NameKind, String);

/// A binding displaced by [`NameTable::shadow`], restored on pop.
#[derive(Debug)]
struct Displaced {
    key: NameKey,
    previous: Option<String>,
}

/// Allocator for concrete identifiers.
#[derive(Debug, Default)]
pub struct NameTable {
    reserved: FxHashSet<String>,
    bindings: FxHashMap<NameKey, String>,
    taken: FxHashSet<String>,
    scopes: SmallVec<[Vec<Displaced>; 4]>,
}

impl NameTable {
    /// Create a table that refuses the given reserved words.
    pub fn new<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NameTable {
            reserved: reserved.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Add a reserved word.
    pub fn reserve(&mut self, word: impl Into<String>) {
        self.reserved.insert(word.into());
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(name)
    }

    /// Whether `name` was already handed out.
    pub fn is_taken(&self, name: &str) -> bool {
        self.taken.contains(name)
    }

    /// Concrete identifier for an abstract name, allocating it on first use.
    ///
    /// Idempotent: the same `(kind, name)` always yields the same identifier
    /// (modulo scopes opened with [`NameTable::shadow`]).
    pub fn bind(&mut self, kind: NameKind, name: &str) -> String {
        let key = (kind, name.to_lowercase());
        if let Some(existing) = self.bindings.get(&key) {
            return existing.clone();
        }
        let concrete = self.fresh(name);
        tracing::trace!(?kind, name, %concrete, "bound name");
        self.bindings.insert(key, concrete.clone());
        concrete
    }

    /// Identifier currently bound to an abstract name, if any.
    pub fn lookup(&self, kind: NameKind, name: &str) -> Option<&str> {
        self.bindings
            .get(&(kind, name.to_lowercase()))
            .map(String::as_str)
    }

    /// A never-before-used identifier derived from `hint`.
    ///
    /// The sanitized hint is used as-is if free; otherwise numeric suffixes
    /// are tried starting at 2.
    pub fn fresh(&mut self, hint: &str) -> String {
        let base = safe_name(hint);
        let mut candidate = base.clone();
        let mut suffix = 1u32;
        while self.taken.contains(&candidate) || self.reserved.contains(&candidate) {
            suffix += 1;
            candidate.clear();
            let _ = write!(candidate, "{base}{suffix}");
        }
        self.taken.insert(candidate.clone());
        candidate
    }

    /// Open a scope for [`NameTable::shadow`].
    pub fn push_scope(&mut self) {
        self.scopes.push(Vec::new());
    }

    /// Bind `name` to a fresh identifier for the innermost scope.
    ///
    /// Without an open scope the binding is permanent.
    pub fn shadow(&mut self, kind: NameKind, name: &str) -> String {
        let key = (kind, name.to_lowercase());
        let concrete = self.fresh(name);
        let previous = self.bindings.insert(key.clone(), concrete.clone());
        if let Some(scope) = self.scopes.last_mut() {
            scope.push(Displaced { key, previous });
        }
        concrete
    }

    /// Close the innermost scope, restoring the bindings it shadowed.
    pub fn pop_scope(&mut self) {
        debug_assert!(!self.scopes.is_empty(), "pop_scope without push_scope");
        let Some(scope) = self.scopes.pop() else {
            return;
        };
        for Displaced { key, previous } in scope.into_iter().rev() {
            match previous {
                Some(outer) => {
                    self.bindings.insert(key, outer);
                }
                None => {
                    self.bindings.remove(&key);
                }
            }
        }
    }

    /// Number of open scopes.
    pub fn scope_depth(&self) -> usize {
        self.scopes.len()
    }
}

/// Turn arbitrary text into a legal identifier.
///
/// Spaces become `_`; other characters a URI would escape become `_XX` per
/// UTF-8 byte; remaining punctuation becomes `_`. A leading digit gets a
/// `my_` prefix and empty input becomes `unnamed`.
pub fn safe_name(name: &str) -> String {
    if name.is_empty() {
        return "unnamed".to_string();
    }
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
        } else if c == ' ' || is_uri_safe_punctuation(c) {
            out.push('_');
        } else {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                let _ = write!(out, "_{byte:02X}");
            }
        }
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert_str(0, "my_");
    }
    out
}

/// Punctuation that survives URI encoding unescaped.
fn is_uri_safe_punctuation(c: char) -> bool {
    ";,/?:@&=+$-.!~*'()#".contains(c)
}
