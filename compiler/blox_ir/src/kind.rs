//! Block Kinds
//!
//! The closed set of node kinds the editor can place. Generators dispatch
//! on this enum with an exhaustive `match`, so adding a kind is a compile
//! error in every target until it gets a rule (or an explicit
//! "unsupported" arm).

/// Declares `BlockKind` together with its editor type-name mapping.
macro_rules! block_kinds {
    ($( $(#[$meta:meta])* $variant:ident => $name:literal, )*) => {
        /// Kind of a block, one per editor block type.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        pub enum BlockKind {
            $( $(#[$meta])* $variant, )*
        }

        impl BlockKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [BlockKind] = &[$( BlockKind::$variant, )*];

            /// The editor's type string for this kind (e.g. `"math_arithmetic"`).
            pub const fn type_name(self) -> &'static str {
                match self {
                    $( BlockKind::$variant => $name, )*
                }
            }

            /// Look up a kind by its editor type string.
            pub fn from_type_name(name: &str) -> Option<BlockKind> {
                match name {
                    $( $name => Some(BlockKind::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

block_kinds! {
    // Logic
    If => "controls_if",
    IfElse => "controls_ifelse",
    LogicCompare => "logic_compare",
    LogicOperation => "logic_operation",
    LogicNegate => "logic_negate",
    LogicBoolean => "logic_boolean",
    LogicNull => "logic_null",
    LogicTernary => "logic_ternary",

    // Loops
    Repeat => "controls_repeat",
    RepeatExt => "controls_repeat_ext",
    WhileUntil => "controls_whileUntil",
    For => "controls_for",
    ForEach => "controls_forEach",
    /// `break` / `continue`, selected by the `FLOW` field.
    FlowStatements => "controls_flow_statements",

    // Math
    MathNumber => "math_number",
    MathArithmetic => "math_arithmetic",
    MathSingle => "math_single",
    MathRound => "math_round",
    MathTrig => "math_trig",
    MathConstant => "math_constant",
    MathNumberProperty => "math_number_property",
    MathChange => "math_change",
    MathOnList => "math_on_list",
    MathModulo => "math_modulo",
    MathConstrain => "math_constrain",
    MathRandomInt => "math_random_int",
    MathRandomFloat => "math_random_float",
    MathAtan2 => "math_atan2",

    // Text
    Text => "text",
    TextMultiline => "text_multiline",
    TextJoin => "text_join",
    TextAppend => "text_append",
    TextLength => "text_length",
    TextIsEmpty => "text_isEmpty",
    TextIndexOf => "text_indexOf",
    TextCharAt => "text_charAt",
    TextGetSubstring => "text_getSubstring",
    TextChangeCase => "text_changeCase",
    TextTrim => "text_trim",
    TextPrint => "text_print",
    TextPrompt => "text_prompt",
    TextPromptExt => "text_prompt_ext",
    TextCount => "text_count",
    TextReplace => "text_replace",
    TextReverse => "text_reverse",

    // Lists
    ListsCreateEmpty => "lists_create_empty",
    ListsCreateWith => "lists_create_with",
    ListsLength => "lists_length",

    // Colour
    ColourPicker => "colour_picker",
    ColourRandom => "colour_random",
    ColourRgb => "colour_rgb",
    ColourBlend => "colour_blend",

    // Procedures
    ProceduresDefReturn => "procedures_defreturn",
    ProceduresDefNoReturn => "procedures_defnoreturn",
    ProceduresCallReturn => "procedures_callreturn",
    ProceduresCallNoReturn => "procedures_callnoreturn",
    ProceduresIfReturn => "procedures_ifreturn",

    // Variables
    VariablesGet => "variables_get",
    VariablesSet => "variables_set",
    VariablesGetDynamic => "variables_get_dynamic",
    VariablesSetDynamic => "variables_set_dynamic",
}

impl BlockKind {
    /// Whether this kind places its own prefix/suffix injection snippets.
    ///
    /// The statement translator skips automatic injection around these
    /// blocks; their rules insert the snippets at the exact points that
    /// execute (before the condition chain, at the top of each branch,
    /// ahead of a `break`).
    pub const fn suppresses_injection(self) -> bool {
        matches!(
            self,
            BlockKind::If | BlockKind::IfElse | BlockKind::FlowStatements
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn type_names_round_trip() {
        for &kind in BlockKind::ALL {
            assert_eq!(BlockKind::from_type_name(kind.type_name()), Some(kind));
        }
    }

    #[test]
    fn type_names_are_unique() {
        let mut names: Vec<_> = BlockKind::ALL.iter().map(|k| k.type_name()).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn unknown_type_name() {
        assert_eq!(BlockKind::from_type_name("math_nonsense"), None);
        assert_eq!(BlockKind::from_type_name(""), None);
    }

    #[test]
    fn injection_suppression() {
        assert!(BlockKind::If.suppresses_injection());
        assert!(BlockKind::FlowStatements.suppresses_injection());
        assert!(!BlockKind::WhileUntil.suppresses_injection());
        assert!(!BlockKind::ProceduresIfReturn.suppresses_injection());
    }
}
