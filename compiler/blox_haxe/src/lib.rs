//! Haxe Target
//!
//! The per-block translation rules for Haxe, plugged into the
//! [`blox_emit`] engine as a [`Generator`]. Dispatch is an exhaustive
//! `match` on [`BlockKind`]; list blocks have no Haxe rules yet and report
//! themselves unsupported.
//!
//! ```text
//! let generator = HaxeGenerator::new();
//! let doc = Compiler::new(&generator, blox_haxe::config()).compile(&graph)?;
//! ```

mod colour;
mod logic;
mod loops;
mod math;
pub mod order;
mod procedures;
pub mod quote;
mod reserved;
mod text;
mod variables;

use blox_emit::{EmitConfig, EmitContext, EmitResult, Generator, Translation};
use blox_ir::{Block, BlockKind};

pub use reserved::RESERVED_WORDS;

/// Ready-to-use configuration for the Haxe target: reserved words and
/// precedence overrides, two-space indentation, no injection.
pub fn config() -> EmitConfig {
    EmitConfig::new()
        .with_reserved_words(RESERVED_WORDS)
        .with_precedence(order::table())
}

/// The Haxe code generator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HaxeGenerator {
    one_based_index: bool,
}

impl Default for HaxeGenerator {
    fn default() -> Self {
        HaxeGenerator {
            one_based_index: true,
        }
    }
}

impl HaxeGenerator {
    /// A generator with one-based text indices, as the editor shows them.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose whether index inputs (`text_charAt`, `text_indexOf`, ...)
    /// count from one.
    #[must_use]
    pub fn with_one_based_index(mut self, one_based: bool) -> Self {
        self.one_based_index = one_based;
        self
    }

    pub fn one_based_index(&self) -> bool {
        self.one_based_index
    }
}

impl Generator for HaxeGenerator {
    fn name(&self) -> &'static str {
        "haxe"
    }

    fn init(&self, ctx: &mut EmitContext<'_>) -> EmitResult<()> {
        tracing::trace!(one_based_index = self.one_based_index, "haxe init");
        variables::declare_workspace_variables(ctx);
        Ok(())
    }

    fn translate<'a>(
        &self,
        ctx: &mut EmitContext<'a>,
        block: &'a Block,
    ) -> EmitResult<Translation> {
        match block.kind() {
            BlockKind::If | BlockKind::IfElse => logic::controls_if(ctx, block),
            BlockKind::LogicCompare => logic::compare(ctx, block),
            BlockKind::LogicOperation => logic::operation(ctx, block),
            BlockKind::LogicNegate => logic::negate(ctx, block),
            BlockKind::LogicBoolean => logic::boolean(block),
            BlockKind::LogicNull => Ok(Translation::value("null", order::ATOMIC)),
            BlockKind::LogicTernary => logic::ternary(ctx, block),

            BlockKind::Repeat | BlockKind::RepeatExt => loops::repeat(ctx, block),
            BlockKind::WhileUntil => loops::while_until(ctx, block),
            BlockKind::For => loops::count_for(ctx, block),
            BlockKind::ForEach => loops::for_each(ctx, block),
            BlockKind::FlowStatements => loops::flow_statement(ctx, block),

            BlockKind::MathNumber => math::number(block),
            BlockKind::MathArithmetic => math::arithmetic(ctx, block),
            BlockKind::MathSingle | BlockKind::MathRound | BlockKind::MathTrig => {
                math::single(ctx, block)
            }
            BlockKind::MathConstant => math::constant(block),
            BlockKind::MathNumberProperty => math::number_property(ctx, block),
            BlockKind::MathChange => math::change(ctx, block),
            BlockKind::MathOnList => math::on_list(ctx, block),
            BlockKind::MathModulo => math::modulo(ctx, block),
            BlockKind::MathConstrain => math::constrain(ctx, block),
            BlockKind::MathRandomInt => math::random_int(ctx, block),
            BlockKind::MathRandomFloat => {
                Ok(Translation::value("Math.random()", order::FUNCTION_CALL))
            }
            BlockKind::MathAtan2 => math::atan2(ctx, block),

            BlockKind::Text => text::literal(block),
            BlockKind::TextMultiline => text::multiline(block),
            BlockKind::TextJoin => text::join(ctx, block),
            BlockKind::TextAppend => text::append(ctx, block),
            BlockKind::TextLength => text::length(ctx, block),
            BlockKind::TextIsEmpty => text::is_empty(ctx, block),
            BlockKind::TextIndexOf => text::index_of(self, ctx, block),
            BlockKind::TextCharAt => text::char_at(self, ctx, block),
            BlockKind::TextGetSubstring => text::get_substring(self, ctx, block),
            BlockKind::TextChangeCase => text::change_case(ctx, block),
            BlockKind::TextTrim => text::trim(ctx, block),
            BlockKind::TextPrint => text::print(ctx, block),
            BlockKind::TextPrompt | BlockKind::TextPromptExt => text::prompt(ctx, block),
            BlockKind::TextCount => text::count(ctx, block),
            BlockKind::TextReplace => text::replace(ctx, block),
            BlockKind::TextReverse => text::reverse(ctx, block),

            BlockKind::ListsCreateEmpty | BlockKind::ListsCreateWith | BlockKind::ListsLength => {
                Ok(Translation::Unsupported)
            }

            BlockKind::ColourPicker => colour::picker(block),
            BlockKind::ColourRandom => colour::random(ctx),
            BlockKind::ColourRgb => colour::rgb(ctx, block),
            BlockKind::ColourBlend => colour::blend(ctx, block),

            BlockKind::ProceduresDefReturn | BlockKind::ProceduresDefNoReturn => {
                procedures::define(ctx, block)
            }
            BlockKind::ProceduresCallReturn => procedures::call_return(ctx, block),
            BlockKind::ProceduresCallNoReturn => procedures::call_no_return(ctx, block),
            BlockKind::ProceduresIfReturn => procedures::if_return(ctx, block),

            BlockKind::VariablesGet | BlockKind::VariablesGetDynamic => {
                variables::get(ctx, block)
            }
            BlockKind::VariablesSet | BlockKind::VariablesSetDynamic => {
                variables::set(ctx, block)
            }
        }
    }
}
