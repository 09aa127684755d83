//! Precedence and Parenthesization
//!
//! Every expression fragment carries the precedence of its outermost
//! operator. When a parent embeds a child it states the precedence of the
//! operator it will place around the child; the child is wrapped in
//! parentheses unless it binds strictly tighter.
//!
//! Precedences are two-level: a `class` (lower binds tighter) and a `rank`
//! that distinguishes operators sharing a class. Only the class takes part
//! in the tighter/looser comparison. The rank lets a target list override
//! pairs such as "addition inside addition needs no parentheses" without
//! also excusing "subtraction inside addition".

/// Binding strength of an operator. Lower class binds tighter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Debug)]
pub struct Precedence {
    class: u8,
    rank: u8,
}

impl Precedence {
    /// Literals, identifiers, and anything already parenthesized.
    pub const ATOMIC: Precedence = Precedence::new(0, 0);

    /// No enclosing operator (a statement context, an argument list, an
    /// index expression). Also the loosest possible child.
    pub const NONE: Precedence = Precedence::new(99, 0);

    pub const fn new(class: u8, rank: u8) -> Self {
        Precedence { class, rank }
    }

    #[inline]
    pub const fn class(self) -> u8 {
        self.class
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Whether `self` binds strictly tighter than `other`.
    #[inline]
    pub const fn binds_tighter_than(self, other: Precedence) -> bool {
        self.class < other.class
    }
}

/// Target-specific parenthesization rules.
///
/// Holds the pairs `(outer, inner)` for which a same-class embedding does
/// not need parentheses even though the two operators tie.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrecedenceTable {
    overrides: Vec<(Precedence, Precedence)>,
}

impl PrecedenceTable {
    /// A table with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow `inner` to sit directly inside `outer` without parentheses.
    #[must_use]
    pub fn with_override(mut self, outer: Precedence, inner: Precedence) -> Self {
        self.overrides.push((outer, inner));
        self
    }

    /// Registered `(outer, inner)` override pairs.
    pub fn overrides(&self) -> &[(Precedence, Precedence)] {
        &self.overrides
    }

    /// Whether a child at `inner` must be parenthesized when embedded
    /// where the parent expects `outer`.
    ///
    /// Strictly tighter children are never wrapped. Anything else is,
    /// unless both sides share the atomic or the none class, or the exact
    /// `(outer, inner)` pair is registered as an override.
    pub fn needs_parens(&self, inner: Precedence, outer: Precedence) -> bool {
        if inner.binds_tighter_than(outer) {
            return false;
        }
        let class = inner.class();
        if class == outer.class()
            && (class == Precedence::ATOMIC.class() || class == Precedence::NONE.class())
        {
            return false;
        }
        !self.overrides.contains(&(outer, inner))
    }
}

/// A rendered expression and the precedence of its outermost operator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub precedence: Precedence,
}

impl Fragment {
    pub fn new(text: impl Into<String>, precedence: Precedence) -> Self {
        Fragment {
            text: text.into(),
            precedence,
        }
    }

    /// A fragment that never needs parentheses.
    pub fn atomic(text: impl Into<String>) -> Self {
        Fragment::new(text, Precedence::ATOMIC)
    }

    /// Text of this fragment as it must appear inside an `outer` context.
    pub fn embed(self, outer: Precedence, table: &PrecedenceTable) -> Fragment {
        if table.needs_parens(self.precedence, outer) {
            Fragment::atomic(format!("({})", self.text))
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MUL: Precedence = Precedence::new(5, 1);
    const DIV: Precedence = Precedence::new(5, 2);
    const SUB: Precedence = Precedence::new(6, 1);
    const ADD: Precedence = Precedence::new(6, 2);

    fn table() -> PrecedenceTable {
        PrecedenceTable::new()
            .with_override(ADD, ADD)
            .with_override(MUL, MUL)
    }

    #[test]
    fn tighter_child_is_bare() {
        assert!(!table().needs_parens(MUL, ADD));
        assert!(!table().needs_parens(Precedence::ATOMIC, ADD));
        assert!(!table().needs_parens(ADD, Precedence::NONE));
    }

    #[test]
    fn looser_child_is_wrapped() {
        assert!(table().needs_parens(ADD, MUL));
        assert!(table().needs_parens(Precedence::NONE, ADD));
    }

    #[test]
    fn tie_wraps_unless_overridden() {
        let table = table();
        assert!(!table.needs_parens(ADD, ADD));
        assert!(!table.needs_parens(MUL, MUL));
        assert!(table.needs_parens(SUB, ADD));
        assert!(table.needs_parens(ADD, SUB));
        assert!(table.needs_parens(SUB, SUB));
        assert!(table.needs_parens(DIV, MUL));
    }

    #[test]
    fn override_can_excuse_a_looser_child() {
        const MEMBER: Precedence = Precedence::new(1, 2);
        const CALL: Precedence = Precedence::new(2, 0);
        let table = PrecedenceTable::new().with_override(MEMBER, CALL);
        assert!(!table.needs_parens(CALL, MEMBER));
        assert!(PrecedenceTable::new().needs_parens(CALL, MEMBER));
    }

    #[test]
    fn atomic_and_none_ties_are_bare() {
        let table = PrecedenceTable::new();
        assert!(!table.needs_parens(Precedence::ATOMIC, Precedence::ATOMIC));
        assert!(!table.needs_parens(Precedence::NONE, Precedence::NONE));
    }

    #[test]
    fn embed_wraps_and_becomes_atomic() {
        let sum = Fragment::new("a + b", ADD);
        let wrapped = sum.clone().embed(MUL, &table());
        assert_eq!(wrapped, Fragment::atomic("(a + b)"));
        assert_eq!(sum.clone().embed(ADD, &table()), sum);
    }
}
