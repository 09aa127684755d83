//! User procedures.
//!
//! A definition block emits nothing in place. Its function is registered
//! as a definition under the procedure's name and ends up ahead of the
//! main code.

use blox_emit::util::prefix_lines;
use blox_emit::{field, DefinitionKey, EmitContext, EmitResult, Exit, Translation, ValueKind};
use blox_ir::Block;
use tracing::debug;

use crate::order;

/// `procedures_defreturn` / `procedures_defnoreturn`.
pub(crate) fn define<'a>(ctx: &mut EmitContext<'a>, block: &'a Block) -> EmitResult<Translation> {
    let name = ctx.procedure_name(field(block, "NAME")?);
    let indent = ctx.indent();

    let mut xfix = String::new();
    xfix.extend(ctx.statement_prefix(block));
    xfix.extend(ctx.statement_suffix(block));
    if !xfix.is_empty() {
        xfix = prefix_lines(&xfix, indent);
    }
    let loop_trap = ctx
        .loop_trap(block)
        .map(|trap| prefix_lines(&trap, indent))
        .unwrap_or_default();

    let branch = ctx.procedure_body(block, "STACK")?;
    let return_value = ctx.value(block, "RETURN", order::NONE)?;

    let args: Vec<String> = block
        .mutation_data()
        .params
        .iter()
        .map(|param| ctx.variable_name(param))
        .collect();

    let mut code = ctx.comment_for(block);
    code.push_str(&format!("function {name}({}) {{\n", args.join(", ")));
    code.push_str(&xfix);
    code.push_str(&loop_trap);
    code.push_str(&branch);
    if let Some(value) = return_value {
        // Revisit the definition block for the return.
        if !branch.is_empty() {
            code.push_str(&xfix);
        }
        code.push_str(&format!("{indent}return {value};\n"));
    }
    code.push('}');

    debug!(procedure = %name, params = args.len(), "defined procedure");
    ctx.define(DefinitionKey::Procedure(name), code);
    Ok(Translation::Nothing)
}

fn call(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<String> {
    let name = ctx.procedure_name(field(block, "NAME")?);
    let count = block.mutation_data().params.len();
    let args = (0..count)
        .map(|i| -> EmitResult<String> {
            Ok(ctx
                .value(block, &format!("ARG{i}"), order::COMMA)?
                .unwrap_or_else(|| "null".to_string()))
        })
        .collect::<EmitResult<Vec<_>>>()?;
    Ok(format!("{name}({})", args.join(", ")))
}

pub(crate) fn call_return(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    Ok(Translation::value(call(ctx, block)?, order::FUNCTION_CALL))
}

pub(crate) fn call_no_return(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    Ok(Translation::Statement(format!("{};\n", call(ctx, block)?)))
}

/// `procedures_ifreturn`: the snippets that would have run after this
/// block and at the end of the procedure run before the `return`.
pub(crate) fn if_return(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let condition = ctx.value_or(block, "CONDITION", order::NONE, ValueKind::Boolean)?;
    let indent = ctx.indent();
    let mut code = format!("if ({condition}) {{\n");
    let exit = ctx.exit_injection(block, Exit::Return);
    if !exit.is_empty() {
        code.push_str(&prefix_lines(&exit, indent));
    }
    if block.mutation_data().has_return {
        let value = ctx
            .value(block, "VALUE", order::NONE)?
            .unwrap_or_else(|| "null".to_string());
        code.push_str(&format!("{indent}return {value};\n"));
    } else {
        code.push_str(&format!("{indent}return;\n"));
    }
    code.push_str("}\n");
    Ok(Translation::Statement(code))
}
