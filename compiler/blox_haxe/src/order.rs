//! Haxe operator precedence.
//!
//! The class is the integer part of the decimal order values block editors
//! traditionally use, the rank their first decimal: `MEMBER` is 1.2,
//! `UNARY_NEGATION` is 4.3.

use blox_emit::{Precedence, PrecedenceTable};

pub const ATOMIC: Precedence = Precedence::ATOMIC;
/// `new ...`
pub const NEW: Precedence = Precedence::new(1, 1);
/// `a.b`, `a[b]`
pub const MEMBER: Precedence = Precedence::new(1, 2);
pub const FUNCTION_CALL: Precedence = Precedence::new(2, 0);
pub const INCREMENT: Precedence = Precedence::new(3, 0);
pub const DECREMENT: Precedence = Precedence::new(3, 0);
pub const BITWISE_NOT: Precedence = Precedence::new(4, 1);
pub const UNARY_PLUS: Precedence = Precedence::new(4, 2);
pub const UNARY_NEGATION: Precedence = Precedence::new(4, 3);
pub const LOGICAL_NOT: Precedence = Precedence::new(4, 4);
pub const EXPONENTIATION: Precedence = Precedence::new(5, 0);
pub const MULTIPLICATION: Precedence = Precedence::new(5, 1);
pub const DIVISION: Precedence = Precedence::new(5, 2);
pub const MODULUS: Precedence = Precedence::new(5, 3);
pub const SUBTRACTION: Precedence = Precedence::new(6, 1);
pub const ADDITION: Precedence = Precedence::new(6, 2);
pub const BITWISE_SHIFT: Precedence = Precedence::new(7, 0);
pub const RELATIONAL: Precedence = Precedence::new(8, 0);
pub const IN: Precedence = Precedence::new(8, 0);
pub const EQUALITY: Precedence = Precedence::new(9, 0);
pub const BITWISE_AND: Precedence = Precedence::new(10, 0);
pub const BITWISE_XOR: Precedence = Precedence::new(11, 0);
pub const BITWISE_OR: Precedence = Precedence::new(12, 0);
pub const LOGICAL_AND: Precedence = Precedence::new(13, 0);
pub const LOGICAL_OR: Precedence = Precedence::new(14, 0);
pub const CONDITIONAL: Precedence = Precedence::new(15, 0);
pub const ASSIGNMENT: Precedence = Precedence::new(16, 0);
pub const COMMA: Precedence = Precedence::new(17, 0);
pub const NONE: Precedence = Precedence::NONE;

/// Same-class embeddings that read correctly without parentheses.
pub fn table() -> PrecedenceTable {
    PrecedenceTable::new()
        // a.b(), a.b.c
        .with_override(FUNCTION_CALL, MEMBER)
        .with_override(FUNCTION_CALL, FUNCTION_CALL)
        .with_override(MEMBER, FUNCTION_CALL)
        .with_override(MEMBER, MEMBER)
        // !!a
        .with_override(LOGICAL_NOT, LOGICAL_NOT)
        // a * b * c
        .with_override(MULTIPLICATION, MULTIPLICATION)
        // a + b + c
        .with_override(ADDITION, ADDITION)
        .with_override(LOGICAL_AND, LOGICAL_AND)
        .with_override(LOGICAL_OR, LOGICAL_OR)
}
