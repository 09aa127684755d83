//! Variable access and the workspace declaration line.

use blox_emit::{field, DefinitionKey, EmitContext, EmitResult, Translation};
use blox_ir::Block;

use crate::order;

pub(crate) fn get(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let name = ctx.variable_name(field(block, "VAR")?);
    Ok(Translation::value(name, order::ATOMIC))
}

pub(crate) fn set(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let value = ctx
        .value(block, "VALUE", order::ASSIGNMENT)?
        .unwrap_or_else(|| "0".to_string());
    let name = ctx.variable_name(field(block, "VAR")?);
    Ok(Translation::Statement(format!("{name} = {value};\n")))
}

/// Declare every workspace variable on one `var` line, ahead of all other
/// definitions.
pub(crate) fn declare_workspace_variables(ctx: &mut EmitContext<'_>) {
    let graph = ctx.graph();
    if graph.variables().is_empty() {
        return;
    }
    let names: Vec<String> = graph
        .variables()
        .iter()
        .map(|variable| ctx.variable_name(variable))
        .collect();
    ctx.define(DefinitionKey::Variables, format!("var {};", names.join(", ")));
}
