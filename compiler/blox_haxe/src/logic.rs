//! Conditionals and boolean expressions.

use blox_emit::util::prefix_lines;
use blox_emit::{field, EmitContext, EmitError, EmitResult, Translation, ValueKind};
use blox_ir::{Block, BlockKind};

use crate::order;

/// `if` / `else if` / `else` chain.
///
/// Places its own injection: the prefix once ahead of the chain and the
/// suffix at the top of every branch. With a suffix configured an empty
/// `else` is emitted so the suffix also runs when no condition holds.
pub(crate) fn controls_if<'a>(
    ctx: &mut EmitContext<'a>,
    block: &'a Block,
) -> EmitResult<Translation> {
    let mutation = block.mutation_data();
    let has_else = mutation.has_else || block.kind() == BlockKind::IfElse;
    let suffix = ctx
        .statement_suffix(block)
        .map(|s| prefix_lines(&s, ctx.indent()))
        .unwrap_or_default();

    let mut code = ctx.statement_prefix(block).unwrap_or_default();
    for n in 0..=mutation.else_if {
        let condition =
            ctx.value_or(block, &format!("IF{n}"), order::NONE, ValueKind::Boolean)?;
        let branch = ctx.statement(block, &format!("DO{n}"))?;
        if n > 0 {
            code.push_str(" else ");
        }
        code.push_str(&format!("if ({condition}) {{\n{suffix}{branch}}}"));
    }

    if has_else || !suffix.is_empty() {
        let branch = ctx.statement(block, "ELSE")?;
        code.push_str(&format!(" else {{\n{suffix}{branch}}}"));
    }
    code.push('\n');
    Ok(Translation::Statement(code))
}

pub(crate) fn compare(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let op = field(block, "OP")?;
    let operator = match op {
        "EQ" => "==",
        "NEQ" => "!=",
        "LT" => "<",
        "LTE" => "<=",
        "GT" => ">",
        "GTE" => ">=",
        other => return Err(EmitError::unknown_mode(block, "OP", other)),
    };
    let precedence = if matches!(op, "EQ" | "NEQ") {
        order::EQUALITY
    } else {
        order::RELATIONAL
    };
    let a = ctx.value_or(block, "A", precedence, ValueKind::Number)?;
    let b = ctx.value_or(block, "B", precedence, ValueKind::Number)?;
    Ok(Translation::value(format!("{a} {operator} {b}"), precedence))
}

/// `&&` / `||`. A single missing operand takes the operator's identity
/// (`true` for and, `false` for or) so it does not change the result.
pub(crate) fn operation(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let (operator, precedence, identity) = match field(block, "OP")? {
        "AND" => ("&&", order::LOGICAL_AND, "true"),
        "OR" => ("||", order::LOGICAL_OR, "false"),
        other => return Err(EmitError::unknown_mode(block, "OP", other)),
    };
    let a = ctx.value(block, "A", precedence)?;
    let b = ctx.value(block, "B", precedence)?;
    let (a, b) = match (a, b) {
        (None, None) => ("false".to_string(), "false".to_string()),
        (a, b) => (
            a.unwrap_or_else(|| identity.to_string()),
            b.unwrap_or_else(|| identity.to_string()),
        ),
    };
    Ok(Translation::value(format!("{a} {operator} {b}"), precedence))
}

pub(crate) fn negate(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let arg = ctx
        .value(block, "BOOL", order::LOGICAL_NOT)?
        .unwrap_or_else(|| "true".to_string());
    Ok(Translation::value(format!("!{arg}"), order::LOGICAL_NOT))
}

pub(crate) fn boolean(block: &Block) -> EmitResult<Translation> {
    let text = match field(block, "BOOL")? {
        "TRUE" => "true",
        "FALSE" => "false",
        other => return Err(EmitError::unknown_mode(block, "BOOL", other)),
    };
    Ok(Translation::value(text, order::ATOMIC))
}

pub(crate) fn ternary(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let condition = ctx.value_or(block, "IF", order::CONDITIONAL, ValueKind::Boolean)?;
    let then = ctx.value_or(block, "THEN", order::CONDITIONAL, ValueKind::Any)?;
    let otherwise = ctx.value_or(block, "ELSE", order::CONDITIONAL, ValueKind::Any)?;
    Ok(Translation::value(
        format!("{condition} ? {then} : {otherwise}"),
        order::CONDITIONAL,
    ))
}
