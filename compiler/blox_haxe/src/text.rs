//! Strings.
//!
//! Index inputs follow the generator's index base. [`get_adjusted`] folds
//! the base and any per-rule offset into the emitted index, at compile
//! time when the index is a literal.

use blox_emit::util::{is_number, is_word};
use blox_emit::{field, EmitContext, EmitError, EmitResult, Precedence, Translation, ValueKind};
use blox_ir::Block;

use crate::order;
use crate::quote::{force_string, format_number, multiline_quote, parse_number, quote};
use crate::HaxeGenerator;

pub(crate) fn literal(block: &Block) -> EmitResult<Translation> {
    Ok(Translation::value(quote(field(block, "TEXT")?), order::ATOMIC))
}

pub(crate) fn multiline(block: &Block) -> EmitResult<Translation> {
    let code = multiline_quote(field(block, "TEXT")?);
    let code = if code.contains('\n') {
        format!("({code})")
    } else {
        code
    };
    Ok(Translation::value(code, order::ATOMIC))
}

/// Concatenate any number of items, coercing each to a string.
pub(crate) fn join(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let items = block.mutation_data().items;
    match items {
        0 => Ok(Translation::value("''", order::ATOMIC)),
        1 => {
            let item = ctx.value_or(block, "ADD0", order::NONE, ValueKind::Text)?;
            Ok(Translation::value(force_string(&item), order::FUNCTION_CALL))
        }
        2 => {
            let a = ctx.value_or(block, "ADD0", order::NONE, ValueKind::Text)?;
            let b = ctx.value_or(block, "ADD1", order::NONE, ValueKind::Text)?;
            Ok(Translation::value(
                format!("{} + {}", force_string(&a), force_string(&b)),
                order::ADDITION,
            ))
        }
        _ => {
            let elements = (0..items)
                .map(|i| ctx.value_or(block, &format!("ADD{i}"), order::COMMA, ValueKind::Text))
                .collect::<EmitResult<Vec<_>>>()?;
            Ok(Translation::value(
                format!("[{}].join('')", elements.join(",")),
                order::FUNCTION_CALL,
            ))
        }
    }
}

pub(crate) fn append(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let name = ctx.variable_name(field(block, "VAR")?);
    let value = ctx.value_or(block, "TEXT", order::NONE, ValueKind::Text)?;
    Ok(Translation::Statement(format!(
        "{name} += {};\n",
        force_string(&value)
    )))
}

pub(crate) fn length(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let text = ctx.value_or(block, "VALUE", order::FUNCTION_CALL, ValueKind::Text)?;
    Ok(Translation::value(format!("{text}.length"), order::MEMBER))
}

pub(crate) fn is_empty(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let text = ctx.value_or(block, "VALUE", order::MEMBER, ValueKind::Text)?;
    Ok(Translation::value(format!("!{text}.length"), order::LOGICAL_NOT))
}

pub(crate) fn index_of(
    generator: &HaxeGenerator,
    ctx: &mut EmitContext<'_>,
    block: &Block,
) -> EmitResult<Translation> {
    let method = match field(block, "END")? {
        "FIRST" => "indexOf",
        "LAST" => "lastIndexOf",
        other => return Err(EmitError::unknown_mode(block, "END", other)),
    };
    let needle = ctx.value_or(block, "FIND", order::NONE, ValueKind::Text)?;
    let text = ctx.value_or(block, "VALUE", order::MEMBER, ValueKind::Text)?;
    let code = format!("{text}.{method}({needle})");
    if generator.one_based_index() {
        return Ok(Translation::value(format!("{code} + 1"), order::ADDITION));
    }
    Ok(Translation::value(code, order::FUNCTION_CALL))
}

const RANDOM_LETTER: &[&str] = &[
    "function {{name}}(text: String) {",
    "  var x = Math.ceil(Math.random() * (text.length-1));",
    "  return text.charAt(x);",
    "}",
];

pub(crate) fn char_at(
    generator: &HaxeGenerator,
    ctx: &mut EmitContext<'_>,
    block: &Block,
) -> EmitResult<Translation> {
    let mode = block.field_value("WHERE").unwrap_or("FROM_START");
    let outer = if mode == "RANDOM" {
        order::NONE
    } else {
        order::MEMBER
    };
    let text = ctx.value_or(block, "VALUE", outer, ValueKind::Text)?;
    let code = match mode {
        "FIRST" => format!("{text}.charAt(0)"),
        "LAST" => format!("{text}.slice(-1)"),
        "FROM_START" => {
            let at = get_adjusted(generator, ctx, block, "AT", Adjust::default())?;
            format!("{text}.charAt({at})")
        }
        "FROM_END" => {
            let at = get_adjusted(generator, ctx, block, "AT", Adjust::delta(1).negated())?;
            format!("{text}.slice({at}).charAt(0)")
        }
        "RANDOM" => {
            let helper = ctx.provide_helper("textRandomLetter", RANDOM_LETTER)?;
            format!("{helper}({text})")
        }
        other => return Err(EmitError::unknown_mode(block, "WHERE", other)),
    };
    Ok(Translation::value(code, order::FUNCTION_CALL))
}

/// Offset applied to an index input by [`get_adjusted`].
#[derive(Copy, Clone, Debug)]
pub(crate) struct Adjust {
    delta: i32,
    negate: bool,
    outer: Precedence,
}

impl Default for Adjust {
    fn default() -> Self {
        Adjust {
            delta: 0,
            negate: false,
            outer: order::NONE,
        }
    }
}

impl Adjust {
    fn delta(delta: i32) -> Self {
        Adjust {
            delta,
            ..Adjust::default()
        }
    }

    #[must_use]
    fn negated(mut self) -> Self {
        self.negate = true;
        self
    }

    #[must_use]
    fn within(mut self, outer: Precedence) -> Self {
        self.outer = outer;
        self
    }
}

/// Index expression for input `slot`, converted to zero-based and shifted
/// by `adjust.delta`, optionally negated.
pub(crate) fn get_adjusted(
    generator: &HaxeGenerator,
    ctx: &mut EmitContext<'_>,
    block: &Block,
    slot: &str,
    adjust: Adjust,
) -> EmitResult<String> {
    let one_based = generator.one_based_index();
    let delta = if one_based { adjust.delta - 1 } else { adjust.delta };
    let default_at = if one_based { "1" } else { "0" };
    let outer = if delta > 0 {
        order::ADDITION
    } else if delta < 0 {
        order::SUBTRACTION
    } else if adjust.negate {
        order::UNARY_NEGATION
    } else {
        adjust.outer
    };
    let at = ctx
        .value(block, slot, outer)?
        .unwrap_or_else(|| default_at.to_string());

    if is_number(&at) {
        let mut value = parse_number(&at) + f64::from(delta);
        if adjust.negate {
            value = -value;
        }
        return Ok(format_number(value));
    }

    let mut at = at;
    let mut inner = None;
    if delta > 0 {
        at = format!("{at} + {delta}");
        inner = Some(order::ADDITION);
    } else if delta < 0 {
        at = format!("{at} - {}", -delta);
        inner = Some(order::SUBTRACTION);
    }
    if adjust.negate {
        at = if delta == 0 {
            format!("-{at}")
        } else {
            format!("-({at})")
        };
        inner = Some(order::UNARY_NEGATION);
    }
    if let Some(inner) = inner {
        if adjust.outer.class() >= inner.class() {
            at = format!("({at})");
        }
    }
    Ok(at)
}

/// Index expression inside a subsequence helper.
fn helper_index(sequence: &str, mode: &str, at: &str) -> String {
    match mode {
        "FIRST" => "0".to_string(),
        "FROM_END" => format!("{sequence}.length - 1 - {at}"),
        "LAST" => format!("{sequence}.length - 1"),
        _ => at.to_string(),
    }
}

fn pascal_case(block: &Block, field_name: &str, mode: &str) -> EmitResult<&'static str> {
    match mode {
        "FIRST" => Ok("First"),
        "LAST" => Ok("Last"),
        "FROM_START" => Ok("FromStart"),
        "FROM_END" => Ok("FromEnd"),
        other => Err(EmitError::unknown_mode(block, field_name, other)),
    }
}

/// A bare identifier or a quoted single word, safe to repeat.
fn is_simple_text(code: &str) -> bool {
    let code = code.strip_prefix('\'').unwrap_or(code);
    let code = code.strip_suffix('\'').unwrap_or(code);
    is_word(code)
}

/// `text_getSubstring`: slice between two positions.
///
/// When an end is measured from the back and the text expression is not
/// safe to repeat, a `subsequence<Where1><Where2>` helper evaluates it once.
pub(crate) fn get_substring(
    generator: &HaxeGenerator,
    ctx: &mut EmitContext<'_>,
    block: &Block,
) -> EmitResult<Translation> {
    let text = ctx.value_or(block, "STRING", order::FUNCTION_CALL, ValueKind::Text)?;
    let where1 = field(block, "WHERE1")?;
    let where2 = field(block, "WHERE2")?;
    let from_back = |mode: &str| matches!(mode, "FROM_END" | "LAST");

    let code = if where1 == "FIRST" && where2 == "LAST" {
        text
    } else if is_simple_text(&text) || !(from_back(where1) || from_back(where2)) {
        let at1 = match where1 {
            "FROM_START" => get_adjusted(generator, ctx, block, "AT1", Adjust::default())?,
            "FROM_END" => {
                let at = get_adjusted(
                    generator,
                    ctx,
                    block,
                    "AT1",
                    Adjust::delta(1).within(order::SUBTRACTION),
                )?;
                format!("{text}.length - {at}")
            }
            "FIRST" => "0".to_string(),
            other => return Err(EmitError::unknown_mode(block, "WHERE1", other)),
        };
        let at2 = match where2 {
            "FROM_START" => get_adjusted(generator, ctx, block, "AT2", Adjust::delta(1))?,
            "FROM_END" => {
                let at = get_adjusted(
                    generator,
                    ctx,
                    block,
                    "AT2",
                    Adjust::default().within(order::SUBTRACTION),
                )?;
                format!("{text}.length - {at}")
            }
            "LAST" => format!("{text}.length"),
            other => return Err(EmitError::unknown_mode(block, "WHERE2", other)),
        };
        format!("{text}.slice({at1}, {at2})")
    } else {
        let at1 = get_adjusted(generator, ctx, block, "AT1", Adjust::default())?;
        let at2 = get_adjusted(generator, ctx, block, "AT2", Adjust::default())?;
        let key = format!(
            "subsequence{}{}",
            pascal_case(block, "WHERE1", where1)?,
            pascal_case(block, "WHERE2", where2)?
        );
        let takes_at1 = matches!(where1, "FROM_END" | "FROM_START");
        let takes_at2 = matches!(where2, "FROM_END" | "FROM_START");

        let mut params = String::from("sequence");
        let mut args = text;
        if takes_at1 {
            params.push_str(", at1");
            args.push_str(&format!(", {at1}"));
        }
        if takes_at2 {
            params.push_str(", at2");
            args.push_str(&format!(", {at2}"));
        }
        let template = [
            format!("function {{{{name}}}}({params}) {{"),
            format!("  var start = {};", helper_index("sequence", where1, "at1")),
            format!("  var end = {} + 1;", helper_index("sequence", where2, "at2")),
            "  return sequence.slice(start, end);".to_string(),
            "}".to_string(),
        ];
        let template: Vec<&str> = template.iter().map(String::as_str).collect();
        let helper = ctx.provide_helper(&key, &template)?;
        format!("{helper}({args})")
    };
    Ok(Translation::value(code, order::FUNCTION_CALL))
}

const TITLE_CASE: &[&str] = &[
    "function {{name}}(str) {",
    "  return str.replace(/\\S+/g,",
    "      function(txt) {return txt[0].toUpperCase() + txt.substring(1).toLowerCase();});",
    "}",
];

pub(crate) fn change_case(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let method = match field(block, "CASE")? {
        "UPPERCASE" => Some(".toUpperCase()"),
        "LOWERCASE" => Some(".toLowerCase()"),
        "TITLECASE" => None,
        other => return Err(EmitError::unknown_mode(block, "CASE", other)),
    };
    let code = if let Some(method) = method {
        let text = ctx.value_or(block, "TEXT", order::MEMBER, ValueKind::Text)?;
        format!("{text}{method}")
    } else {
        let text = ctx.value_or(block, "TEXT", order::NONE, ValueKind::Text)?;
        let helper = ctx.provide_helper("textToTitleCase", TITLE_CASE)?;
        format!("{helper}({text})")
    };
    Ok(Translation::value(code, order::FUNCTION_CALL))
}

pub(crate) fn trim(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let method = match field(block, "MODE")? {
        "LEFT" => ".replace(/^[\\s\\xa0]+/, '')",
        "RIGHT" => ".replace(/[\\s\\xa0]+$/, '')",
        "BOTH" => ".trim()",
        other => return Err(EmitError::unknown_mode(block, "MODE", other)),
    };
    let text = ctx.value_or(block, "TEXT", order::MEMBER, ValueKind::Text)?;
    Ok(Translation::value(format!("{text}{method}"), order::FUNCTION_CALL))
}

pub(crate) fn print(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let message = ctx.value_or(block, "TEXT", order::NONE, ValueKind::Text)?;
    Ok(Translation::Statement(format!("window.alert({message});\n")))
}

/// `text_prompt` / `text_prompt_ext`, optionally parsed as a number.
pub(crate) fn prompt(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let message = match block.field_value("TEXT") {
        Some(text) => quote(text),
        None => ctx.value_or(block, "TEXT", order::NONE, ValueKind::Text)?,
    };
    let mut code = format!("window.prompt({message})");
    match block.field_value("TYPE") {
        None | Some("TEXT") => {}
        Some("NUMBER") => code = format!("Number({code})"),
        Some(other) => return Err(EmitError::unknown_mode(block, "TYPE", other)),
    }
    Ok(Translation::value(code, order::FUNCTION_CALL))
}

const COUNT: &[&str] = &[
    "function {{name}}(haystack, needle) {",
    "  if (needle.length === 0) {",
    "    return haystack.length + 1;",
    "  } else {",
    "    return haystack.split(needle).length - 1;",
    "  }",
    "}",
];

pub(crate) fn count(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let text = ctx.value_or(block, "TEXT", order::MEMBER, ValueKind::Text)?;
    let sub = ctx.value_or(block, "SUB", order::NONE, ValueKind::Text)?;
    let helper = ctx.provide_helper("textCount", COUNT)?;
    Ok(Translation::value(
        format!("{helper}({text}, {sub})"),
        order::SUBTRACTION,
    ))
}

const REPLACE: &[&str] = &[
    "function {{name}}(haystack, needle, replacement) {",
    "  needle = needle.replace(/([-()\\[\\]{}+?*.$\\^|,:#<!\\\\])/g,\"\\\\$1\")",
    "                 .replace(/\\x08/g,\"\\\\x08\");",
    "  return haystack.replace(new RegExp(needle, 'g'), replacement);",
    "}",
];

pub(crate) fn replace(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let text = ctx.value_or(block, "TEXT", order::MEMBER, ValueKind::Text)?;
    let from = ctx.value_or(block, "FROM", order::NONE, ValueKind::Text)?;
    let to = ctx.value_or(block, "TO", order::NONE, ValueKind::Text)?;
    let helper = ctx.provide_helper("textReplace", REPLACE)?;
    Ok(Translation::value(
        format!("{helper}({text}, {from}, {to})"),
        order::MEMBER,
    ))
}

pub(crate) fn reverse(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let text = ctx.value_or(block, "TEXT", order::MEMBER, ValueKind::Text)?;
    Ok(Translation::value(
        format!("[for (i in 0...{text}.length) {text}.charAt({text}.length - i - 1)].join('')"),
        order::FUNCTION_CALL,
    ))
}
