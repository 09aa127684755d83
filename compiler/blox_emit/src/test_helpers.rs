//! A small C-like target for exercising the engine without a real
//! language table. Only compiled in test builds.

use blox_ir::{Block, BlockGraph, BlockId, BlockKind};

use crate::util::prefix_lines;
use crate::{
    field, Compiler, DefinitionKey, EmitConfig, EmitContext, EmitError, EmitResult, Exit,
    Generator, Precedence, PrecedenceTable, Translation, ValueKind,
};

pub(crate) const CALL: Precedence = Precedence::new(2, 0);
pub(crate) const NEG: Precedence = Precedence::new(4, 3);
pub(crate) const MUL: Precedence = Precedence::new(5, 1);
pub(crate) const SUB: Precedence = Precedence::new(6, 1);
pub(crate) const ADD: Precedence = Precedence::new(6, 2);
pub(crate) const ASSIGN: Precedence = Precedence::new(16, 0);

pub(crate) const RANDOM_INT: &[&str] = &[
    "function {{name}}(a, b) {",
    "  return a + rand() % (b - a + 1);",
    "}",
];

pub(crate) struct Toy;

impl Generator for Toy {
    fn name(&self) -> &'static str {
        "toy"
    }

    fn translate<'a>(
        &self,
        ctx: &mut EmitContext<'a>,
        block: &'a Block,
    ) -> EmitResult<Translation> {
        let translation = match block.kind() {
            BlockKind::MathNumber => {
                let n = field(block, "NUM")?;
                let precedence = if n.starts_with('-') { NEG } else { Precedence::ATOMIC };
                Translation::value(n, precedence)
            }
            BlockKind::MathArithmetic => {
                let op = field(block, "OP")?;
                let (symbol, precedence) = match op {
                    "ADD" => (" + ", ADD),
                    "MINUS" => (" - ", SUB),
                    "MULTIPLY" => (" * ", MUL),
                    "POWER" => {
                        let a = ctx.value_or(block, "A", Precedence::NONE, ValueKind::Number)?;
                        let b = ctx.value_or(block, "B", Precedence::NONE, ValueKind::Number)?;
                        return Ok(Translation::value(format!("pow({a}, {b})"), CALL));
                    }
                    other => return Err(EmitError::unknown_mode(block, "OP", other)),
                };
                let a = ctx.value_or(block, "A", precedence, ValueKind::Number)?;
                let b = ctx.value_or(block, "B", precedence, ValueKind::Number)?;
                Translation::value(format!("{a}{symbol}{b}"), precedence)
            }
            BlockKind::MathSingle => {
                let arg = ctx.value_or(block, "NUM", NEG, ValueKind::Number)?;
                Translation::value(format!("-{arg}"), NEG)
            }
            BlockKind::MathRandomInt => {
                let helper = ctx.provide_helper("randomInt", RANDOM_INT)?;
                let from = ctx.value_or(block, "FROM", Precedence::NONE, ValueKind::Number)?;
                let to = ctx.value_or(block, "TO", Precedence::NONE, ValueKind::Number)?;
                Translation::value(format!("{helper}({from}, {to})"), CALL)
            }
            BlockKind::LogicBoolean => {
                let text = if field(block, "BOOL")? == "TRUE" { "true" } else { "false" };
                Translation::value(text, Precedence::ATOMIC)
            }
            BlockKind::VariablesGet => {
                let name = ctx.variable_name(field(block, "VAR")?);
                Translation::value(name, Precedence::ATOMIC)
            }
            BlockKind::VariablesSet => {
                let value = ctx.value_or(block, "VALUE", ASSIGN, ValueKind::Number)?;
                let name = ctx.variable_name(field(block, "VAR")?);
                Translation::Statement(format!("{name} = {value};\n"))
            }
            BlockKind::TextPrint => {
                let arg = ctx.value_or(block, "TEXT", Precedence::NONE, ValueKind::Text)?;
                Translation::Statement(format!("print({arg});\n"))
            }
            BlockKind::WhileUntil => {
                let cond = ctx.value_or(block, "BOOL", Precedence::NONE, ValueKind::Boolean)?;
                let body = ctx.loop_body(block, "DO")?;
                Translation::Statement(format!("while ({cond}) {{\n{body}}}\n"))
            }
            BlockKind::FlowStatements => {
                let (exit, keyword) = match field(block, "FLOW")? {
                    "BREAK" => (Exit::Break, "break"),
                    "CONTINUE" => (Exit::Continue, "continue"),
                    other => return Err(EmitError::unknown_mode(block, "FLOW", other)),
                };
                let xfix = ctx.exit_injection(block, exit);
                Translation::Statement(format!("{xfix}{keyword};\n"))
            }
            BlockKind::ProceduresDefNoReturn => {
                let name = ctx.procedure_name(field(block, "NAME")?);
                let body = ctx.procedure_body(block, "STACK")?;
                ctx.define(
                    DefinitionKey::Procedure(name.clone()),
                    format!("function {name}() {{\n{body}}}"),
                );
                Translation::Nothing
            }
            BlockKind::ProceduresIfReturn => {
                let cond = ctx.value_or(block, "CONDITION", Precedence::NONE, ValueKind::Boolean)?;
                let xfix = prefix_lines(&ctx.exit_injection(block, Exit::Return), ctx.indent());
                let indent = ctx.indent();
                Translation::Statement(format!("if ({cond}) {{\n{xfix}{indent}return;\n}}\n"))
            }
            _ => Translation::Unsupported,
        };
        Ok(translation)
    }
}

pub(crate) fn toy_config() -> EmitConfig {
    EmitConfig::new()
        .with_reserved_words(["while", "print", "function"])
        .with_precedence(
            PrecedenceTable::new()
                .with_override(ADD, ADD)
                .with_override(MUL, MUL),
        )
}

pub(crate) fn num(graph: &mut BlockGraph, n: &str) -> BlockId {
    let uid = format!("n{}", graph.len());
    graph.add(Block::new(uid, BlockKind::MathNumber).field("NUM", n))
}

pub(crate) fn arith(graph: &mut BlockGraph, op: &str, a: BlockId, b: BlockId) -> BlockId {
    let uid = format!("op{}", graph.len());
    graph.add(
        Block::new(uid, BlockKind::MathArithmetic)
            .field("OP", op)
            .input("A", a)
            .input("B", b),
    )
}

/// Translate `id` at the loosest context with the toy target.
pub(crate) fn expression(graph: &BlockGraph, id: BlockId) -> EmitResult<String> {
    let config = toy_config();
    let mut ctx = EmitContext::new(graph, &Toy, &config);
    Ok(ctx.translate_expression(id, Precedence::NONE)?.text)
}

/// Compile `graph` with the toy target and `config`.
pub(crate) fn compile_with(graph: &BlockGraph, config: EmitConfig) -> EmitResult<String> {
    Ok(Compiler::new(&Toy, config).compile(graph)?.text)
}
