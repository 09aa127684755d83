//! Loops and loop control.
//!
//! Bounds that are neither plain numbers nor bare identifiers are cached in
//! fresh variables ahead of the loop so they are evaluated once.

use blox_emit::util::{is_number, is_word};
use blox_emit::{field, EmitContext, EmitError, EmitResult, Exit, Translation, ValueKind};
use blox_ir::Block;

use crate::order;
use crate::quote::{format_number, parse_number};

/// `controls_repeat` / `controls_repeat_ext`.
pub(crate) fn repeat<'a>(ctx: &mut EmitContext<'a>, block: &'a Block) -> EmitResult<Translation> {
    let repeats = match block.field_value("TIMES") {
        Some(times) => format_number(parse_number(times)),
        None => ctx.value_or(block, "TIMES", order::ASSIGNMENT, ValueKind::Number)?,
    };
    let branch = ctx.loop_body(block, "DO")?;
    let counter = ctx.fresh_name("count");

    let mut code = String::new();
    let end = if is_word(&repeats) || is_number(&repeats) {
        repeats
    } else {
        let end = ctx.fresh_name("repeat_end");
        code.push_str(&format!("var {end} = {repeats};\n"));
        end
    };
    code.push_str(&format!(
        "for (var {counter} = 0; {counter} < {end}; {counter}++) {{\n{branch}}}\n"
    ));
    Ok(Translation::Statement(code))
}

pub(crate) fn while_until<'a>(
    ctx: &mut EmitContext<'a>,
    block: &'a Block,
) -> EmitResult<Translation> {
    let until = match field(block, "MODE")? {
        "WHILE" => false,
        "UNTIL" => true,
        other => return Err(EmitError::unknown_mode(block, "MODE", other)),
    };
    let outer = if until { order::LOGICAL_NOT } else { order::NONE };
    let condition = ctx.value_or(block, "BOOL", outer, ValueKind::Boolean)?;
    let branch = ctx.loop_body(block, "DO")?;
    let condition = if until {
        format!("!{condition}")
    } else {
        condition
    };
    Ok(Translation::Statement(format!(
        "while ({condition}) {{\n{branch}}}\n"
    )))
}

/// `controls_for`: count from `FROM` to `TO` by `BY`.
///
/// With constant bounds the direction is known and the loop is emitted
/// directly. Otherwise the step's sign is fixed at loop entry, in case a
/// bound changes while the loop runs.
pub(crate) fn count_for<'a>(
    ctx: &mut EmitContext<'a>,
    block: &'a Block,
) -> EmitResult<Translation> {
    let variable = ctx.variable_name(field(block, "VAR")?);
    let from = ctx.value_or(block, "FROM", order::ASSIGNMENT, ValueKind::Number)?;
    let to = ctx.value_or(block, "TO", order::ASSIGNMENT, ValueKind::Number)?;
    let increment = ctx
        .value(block, "BY", order::ASSIGNMENT)?
        .unwrap_or_else(|| "1".to_string());
    let branch = ctx.loop_body(block, "DO")?;

    if is_number(&from) && is_number(&to) && is_number(&increment) {
        let up = parse_number(&from) <= parse_number(&to);
        let (compare, step_op, unit_op) = if up {
            (" <= ", " += ", "++")
        } else {
            (" >= ", " -= ", "--")
        };
        let step = parse_number(&increment).abs();
        let step = if (step - 1.0).abs() < f64::EPSILON {
            unit_op.to_string()
        } else {
            format!("{step_op}{}", format_number(step))
        };
        return Ok(Translation::Statement(format!(
            "for ({variable} = {from}; {variable}{compare}{to}; {variable}{step}) {{\n{branch}}}\n"
        )));
    }

    let mut code = String::new();
    let start = cache_bound(ctx, &mut code, from, &format!("{variable}_start"));
    let end = cache_bound(ctx, &mut code, to, &format!("{variable}_end"));
    let step = ctx.fresh_name(&format!("{variable}_inc"));
    if is_number(&increment) {
        let magnitude = format_number(parse_number(&increment).abs());
        code.push_str(&format!("var {step} = {magnitude};\n"));
    } else {
        code.push_str(&format!("var {step} = Math.abs({increment});\n"));
    }
    let indent = ctx.indent();
    code.push_str(&format!(
        "if ({start} > {end}) {{\n{indent}{step} = -{step};\n}}\n"
    ));
    code.push_str(&format!(
        "for ({variable} = {start}; {step} >= 0 ? {variable} <= {end} : {variable} >= {end}; \
         {variable} += {step}) {{\n{branch}}}\n"
    ));
    Ok(Translation::Statement(code))
}

/// Keep `bound` inline if it is trivial, else declare a fresh variable for
/// it in `code`.
fn cache_bound(ctx: &mut EmitContext<'_>, code: &mut String, bound: String, hint: &str) -> String {
    if is_word(&bound) || is_number(&bound) {
        return bound;
    }
    let name = ctx.fresh_name(hint);
    code.push_str(&format!("var {name} = {bound};\n"));
    name
}

pub(crate) fn for_each<'a>(
    ctx: &mut EmitContext<'a>,
    block: &'a Block,
) -> EmitResult<Translation> {
    let variable = ctx.variable_name(field(block, "VAR")?);
    let list = ctx.value_or(block, "LIST", order::ASSIGNMENT, ValueKind::List)?;
    let branch = ctx.loop_body(block, "DO")?;

    let mut code = String::new();
    let list_var = if is_word(&list) {
        list
    } else {
        let name = ctx.fresh_name(&format!("{variable}_list"));
        code.push_str(&format!("var {name} = {list};\n"));
        name
    };
    let index = ctx.fresh_name(&format!("{variable}_index"));
    let indent = ctx.indent();
    code.push_str(&format!(
        "for (var {index} in {list_var}) {{\n{indent}{variable} = {list_var}[{index}];\n{branch}}}\n"
    ));
    Ok(Translation::Statement(code))
}

/// `break` / `continue`, preceded by every snippet the jump would skip.
pub(crate) fn flow_statement(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let (exit, keyword) = match field(block, "FLOW")? {
        "BREAK" => (Exit::Break, "break"),
        "CONTINUE" => (Exit::Continue, "continue"),
        other => return Err(EmitError::unknown_mode(block, "FLOW", other)),
    };
    let xfix = ctx.exit_injection(block, exit);
    Ok(Translation::Statement(format!("{xfix}{keyword};\n")))
}
