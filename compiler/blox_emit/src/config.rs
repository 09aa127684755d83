//! Emission Configuration
//!
//! Everything a target and an embedding host can tune without writing a
//! rule: reserved words, the precedence override table, the indentation
//! unit, injection snippets, and the literals used for empty inputs.

use crate::inject::Injection;
use crate::precedence::PrecedenceTable;

/// Default indentation unit.
pub const DEFAULT_INDENT: &str = "  ";

/// Value category a rule expects from an input.
///
/// Selects the fallback literal substituted for an empty input.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueKind {
    Number,
    Boolean,
    Text,
    List,
    Colour,
    Any,
}

/// Fallback literal per [`ValueKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fallbacks {
    pub number: String,
    pub boolean: String,
    pub text: String,
    pub list: String,
    pub colour: String,
    pub any: String,
}

impl Default for Fallbacks {
    fn default() -> Self {
        Fallbacks {
            number: "0".to_string(),
            boolean: "false".to_string(),
            text: "''".to_string(),
            list: "[]".to_string(),
            colour: "'#000000'".to_string(),
            any: "null".to_string(),
        }
    }
}

impl Fallbacks {
    /// The literal to emit for an empty input of `kind`.
    pub fn literal(&self, kind: ValueKind) -> &str {
        match kind {
            ValueKind::Number => &self.number,
            ValueKind::Boolean => &self.boolean,
            ValueKind::Text => &self.text,
            ValueKind::List => &self.list,
            ValueKind::Colour => &self.colour,
            ValueKind::Any => &self.any,
        }
    }
}

/// Configuration for one compilation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitConfig {
    /// Words no generated identifier may equal.
    pub reserved_words: Vec<String>,

    /// Parenthesization overrides for this target.
    pub precedence: PrecedenceTable,

    /// Indentation unit for nested statement bodies.
    pub indent: String,

    /// Instrumentation snippets. Empty by default.
    pub injection: Injection,

    /// Literals substituted for empty inputs.
    pub fallbacks: Fallbacks,
}

impl Default for EmitConfig {
    fn default() -> Self {
        EmitConfig {
            reserved_words: Vec::new(),
            precedence: PrecedenceTable::new(),
            indent: DEFAULT_INDENT.to_string(),
            injection: Injection::default(),
            fallbacks: Fallbacks::default(),
        }
    }
}

impl EmitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add reserved words (comma separated lists are split).
    #[must_use]
    pub fn with_reserved_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for chunk in words {
            self.reserved_words.extend(
                chunk
                    .as_ref()
                    .split(',')
                    .map(str::trim)
                    .filter(|w| !w.is_empty())
                    .map(str::to_string),
            );
        }
        self
    }

    #[must_use]
    pub fn with_precedence(mut self, precedence: PrecedenceTable) -> Self {
        self.precedence = precedence;
        self
    }

    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    #[must_use]
    pub fn with_injection(mut self, injection: Injection) -> Self {
        self.injection = injection;
        self
    }

    #[must_use]
    pub fn with_fallbacks(mut self, fallbacks: Fallbacks) -> Self {
        self.fallbacks = fallbacks;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = EmitConfig::default();
        assert_eq!(config.indent, "  ");
        assert!(config.injection.is_empty());
        assert_eq!(config.fallbacks.literal(ValueKind::Number), "0");
        assert_eq!(config.fallbacks.literal(ValueKind::Text), "''");
        assert_eq!(config.fallbacks.literal(ValueKind::Any), "null");
    }

    #[test]
    fn reserved_words_split_on_commas() {
        let config = EmitConfig::new().with_reserved_words(["if,else, while", "trace"]);
        assert_eq!(config.reserved_words, vec!["if", "else", "while", "trace"]);
    }
}
