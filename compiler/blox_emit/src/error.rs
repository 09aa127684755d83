//! Emission errors.
//!
//! Only configuration-class failures are errors. An empty value input is
//! not: the expression translator substitutes a fallback literal and moves
//! on, so an incomplete graph still yields well-formed code.

use blox_ir::Block;

/// Result alias used throughout the emitter.
pub type EmitResult<T> = Result<T, EmitError>;

/// A fatal emission error. Aborts the whole compilation run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    /// A rule received a discriminant it has no case for
    /// (an operator, a flow kind, an indexing mode).
    #[error("block `{block}` ({kind}): unknown {field} `{value}`")]
    UnknownMode {
        block: String,
        kind: &'static str,
        field: String,
        value: String,
    },

    /// A rule needed a field the block does not carry.
    #[error("block `{block}` ({kind}): missing field `{field}`")]
    MissingField {
        block: String,
        kind: &'static str,
        field: String,
    },

    /// A statement block has no rule in the active target.
    #[error("block `{block}`: {target} has no rule for statement block `{kind}`")]
    UnsupportedBlock {
        block: String,
        kind: &'static str,
        target: &'static str,
    },

    /// Two rules asked for the same helper key with different bodies.
    #[error("helper `{key}` requested with two different bodies")]
    HelperConflict { key: String },
}

impl EmitError {
    /// Build an [`EmitError::UnknownMode`] for `block`.
    pub fn unknown_mode(block: &Block, field: &str, value: &str) -> Self {
        EmitError::UnknownMode {
            block: block.uid().to_string(),
            kind: block.kind().type_name(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Build an [`EmitError::MissingField`] for `block`.
    pub fn missing_field(block: &Block, field: &str) -> Self {
        EmitError::MissingField {
            block: block.uid().to_string(),
            kind: block.kind().type_name(),
            field: field.to_string(),
        }
    }
}

/// Value of a field the rule cannot do without.
pub fn field<'b>(block: &'b Block, name: &str) -> EmitResult<&'b str> {
    block
        .field_value(name)
        .ok_or_else(|| EmitError::missing_field(block, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blox_ir::BlockKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn unknown_mode_message_names_block_and_value() {
        let block = Block::new("b7", BlockKind::MathSingle).field("OP", "CUBE");
        let err = EmitError::unknown_mode(&block, "OP", "CUBE");
        assert_eq!(err.to_string(), "block `b7` (math_single): unknown OP `CUBE`");
    }

    #[test]
    fn field_reports_missing() {
        let block = Block::new("b1", BlockKind::VariablesGet);
        assert_eq!(
            field(&block, "VAR"),
            Err(EmitError::MissingField {
                block: "b1".into(),
                kind: "variables_get",
                field: "VAR".into(),
            })
        );
    }

    #[test]
    fn field_returns_value() {
        let block = Block::new("b1", BlockKind::VariablesGet).field("VAR", "x");
        assert_eq!(field(&block, "VAR"), Ok("x"));
    }
}
