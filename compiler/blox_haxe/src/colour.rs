//! Colours, as `'#rrggbb'` strings.

use blox_emit::{field, EmitContext, EmitResult, Translation, ValueKind};
use blox_ir::Block;

use crate::order;
use crate::quote::quote;

const RANDOM: &[&str] = &[
    "function {{name}}() {",
    "  var num = Math.floor(Math.random() * Math.pow(2, 24));",
    "  return '#' + ('00000' + StringTools.hex(num)).substr(-6);",
    "}",
];

const RGB: &[&str] = &[
    "function {{name}}(r: Float, g: Float, b: Float) {",
    "  return '#' + [for (col in [r, g, b]) StringTools.lpad(",
    "    StringTools.hex(Std.int(Math.min(Math.max(col, 0), 255))), '0', 2",
    "  )].join('');",
    "}",
];

const BLEND: &[&str] = &[
    "function {{name}}(c1: String, c2: String, ratio: Float) {",
    "  ratio = Math.max(Math.min(ratio, 1), 0);",
    "  var c1_rgb = [for (i in [1, 3, 5]) Std.parseInt('0x'+c1.substring(i, i+2))];",
    "  var c2_rgb = [for (i in [1, 3, 5]) Std.parseInt('0x'+c2.substring(i, i+2))];",
    "  var rgb = [for (i in 0...3) Math.round(c1_rgb[i] * (1 - ratio) + c2_rgb[i] * ratio)];",
    "  return '#' + [for (col in rgb) ('0' + StringTools.hex(Math.isNaN(col) ? 0 : col)).substr(-2)].join('');",
    "}",
];

pub(crate) fn picker(block: &Block) -> EmitResult<Translation> {
    Ok(Translation::value(quote(field(block, "COLOUR")?), order::ATOMIC))
}

pub(crate) fn random(ctx: &mut EmitContext<'_>) -> EmitResult<Translation> {
    let helper = ctx.provide_helper("colourRandom", RANDOM)?;
    Ok(Translation::value(format!("{helper}()"), order::FUNCTION_CALL))
}

pub(crate) fn rgb(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let mut channel = |slot: &str| -> EmitResult<String> {
        Ok(ctx
            .value(block, slot, order::COMMA)?
            .unwrap_or_else(|| "0".to_string()))
    };
    let red = channel("RED")?;
    let green = channel("GREEN")?;
    let blue = channel("BLUE")?;
    let helper = ctx.provide_helper("colourRgb", RGB)?;
    Ok(Translation::value(
        format!("{helper}({red}, {green}, {blue})"),
        order::FUNCTION_CALL,
    ))
}

pub(crate) fn blend(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let first = ctx.value_or(block, "COLOUR1", order::COMMA, ValueKind::Colour)?;
    let second = ctx.value_or(block, "COLOUR2", order::COMMA, ValueKind::Colour)?;
    let ratio = ctx
        .value(block, "RATIO", order::COMMA)?
        .unwrap_or_else(|| "0.5".to_string());
    let helper = ctx.provide_helper("colourBlend", BLEND)?;
    Ok(Translation::value(
        format!("{helper}({first}, {second}, {ratio})"),
        order::FUNCTION_CALL,
    ))
}
