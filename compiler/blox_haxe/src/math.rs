//! Numbers and arithmetic.

use blox_emit::{field, EmitContext, EmitError, EmitResult, Translation, ValueKind};
use blox_ir::Block;

use crate::order;
use crate::quote::{format_number, parse_number};

pub(crate) fn number(block: &Block) -> EmitResult<Translation> {
    let value = parse_number(field(block, "NUM")?);
    let precedence = if value >= 0.0 {
        order::ATOMIC
    } else {
        order::UNARY_NEGATION
    };
    Ok(Translation::value(format_number(value), precedence))
}

/// `+ - * /` inline; power as `Math.pow`, since Haxe has no operator.
pub(crate) fn arithmetic(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let (operator, precedence) = match field(block, "OP")? {
        "ADD" => (Some(" + "), order::ADDITION),
        "MINUS" => (Some(" - "), order::SUBTRACTION),
        "MULTIPLY" => (Some(" * "), order::MULTIPLICATION),
        "DIVIDE" => (Some(" / "), order::DIVISION),
        "POWER" => (None, order::COMMA),
        other => return Err(EmitError::unknown_mode(block, "OP", other)),
    };
    let a = ctx.value_or(block, "A", precedence, ValueKind::Number)?;
    let b = ctx.value_or(block, "B", precedence, ValueKind::Number)?;
    Ok(match operator {
        Some(operator) => Translation::value(format!("{a}{operator}{b}"), precedence),
        None => Translation::value(format!("Math.pow({a}, {b})"), order::FUNCTION_CALL),
    })
}

/// Single-operand functions: negation, roots, logs, rounding, and
/// trigonometry in degrees.
pub(crate) fn single(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let op = field(block, "OP")?;
    if op == "NEG" {
        let mut arg = ctx.value_or(block, "NUM", order::UNARY_NEGATION, ValueKind::Number)?;
        if arg.starts_with('-') {
            // `--x` would be a decrement.
            arg.insert(0, ' ');
        }
        return Ok(Translation::value(format!("-{arg}"), order::UNARY_NEGATION));
    }

    let outer = if matches!(op, "SIN" | "COS" | "TAN") {
        order::DIVISION
    } else {
        order::NONE
    };
    let arg = ctx.value_or(block, "NUM", outer, ValueKind::Number)?;
    let call = |code: String| -> EmitResult<Translation> {
        Ok(Translation::value(code, order::FUNCTION_CALL))
    };
    let ratio = |code: String| -> EmitResult<Translation> {
        Ok(Translation::value(code, order::DIVISION))
    };
    match op {
        "ABS" => call(format!("Math.abs({arg})")),
        "ROOT" => call(format!("Math.sqrt({arg})")),
        "LN" => call(format!("Math.log({arg})")),
        "EXP" => call(format!("Math.exp({arg})")),
        "POW10" => call(format!("Math.pow(10,{arg})")),
        "ROUND" => call(format!("Math.round({arg})")),
        "ROUNDUP" => call(format!("Math.ceil({arg})")),
        "ROUNDDOWN" => call(format!("Math.floor({arg})")),
        "SIN" => call(format!("Math.sin({arg} / 180 * Math.PI)")),
        "COS" => call(format!("Math.cos({arg} / 180 * Math.PI)")),
        "TAN" => call(format!("Math.tan({arg} / 180 * Math.PI)")),
        "LOG10" => ratio(format!("Math.log({arg}) / Math.log(10)")),
        "ASIN" => ratio(format!("Math.asin({arg}) / Math.PI * 180")),
        "ACOS" => ratio(format!("Math.acos({arg}) / Math.PI * 180")),
        "ATAN" => ratio(format!("Math.atan({arg}) / Math.PI * 180")),
        other => Err(EmitError::unknown_mode(block, "OP", other)),
    }
}

pub(crate) fn constant(block: &Block) -> EmitResult<Translation> {
    let (code, precedence) = match field(block, "CONSTANT")? {
        "PI" => ("Math.PI", order::MEMBER),
        "E" => ("Math.E", order::MEMBER),
        "GOLDEN_RATIO" => ("(1 + Math.sqrt(5)) / 2", order::DIVISION),
        "SQRT2" => ("Math.SQRT2", order::MEMBER),
        "SQRT1_2" => ("Math.SQRT1_2", order::MEMBER),
        "INFINITY" => ("Infinity", order::ATOMIC),
        other => return Err(EmitError::unknown_mode(block, "CONSTANT", other)),
    };
    Ok(Translation::value(code, precedence))
}

const IS_PRIME: &[&str] = &[
    "function {{name}}(n) {",
    "  // https://en.wikipedia.org/wiki/Primality_test#Naive_methods",
    "  if (n == 2 || n == 3) {",
    "    return true;",
    "  }",
    "  // False if n is NaN, negative, is 1, or not whole.",
    "  // And false if n is divisible by 2 or 3.",
    "  if (isNaN(n) || n <= 1 || n % 1 != 0 || n % 2 == 0 || n % 3 == 0) {",
    "    return false;",
    "  }",
    "  // Check all the numbers of form 6k +/- 1, up to sqrt(n).",
    "  for (var x = 6; x <= Math.sqrt(n) + 1; x += 6) {",
    "    if (n % (x - 1) == 0 || n % (x + 1) == 0) {",
    "      return false;",
    "    }",
    "  }",
    "  return true;",
    "}",
];

/// Even, odd, prime, whole, positive, negative, divisible-by tests.
pub(crate) fn number_property(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let number = ctx.value_or(block, "NUMBER_TO_CHECK", order::MODULUS, ValueKind::Number)?;
    let code = match field(block, "PROPERTY")? {
        "PRIME" => {
            let is_prime = ctx.provide_helper("mathIsPrime", IS_PRIME)?;
            return Ok(Translation::value(
                format!("{is_prime}({number})"),
                order::FUNCTION_CALL,
            ));
        }
        "EVEN" => format!("{number} % 2 == 0"),
        "ODD" => format!("{number} % 2 == 1"),
        "WHOLE" => format!("{number} % 1 == 0"),
        "POSITIVE" => format!("{number} > 0"),
        "NEGATIVE" => format!("{number} < 0"),
        "DIVISIBLE_BY" => {
            let divisor = ctx.value_or(block, "DIVISOR", order::MODULUS, ValueKind::Number)?;
            format!("{number} % {divisor} == 0")
        }
        other => return Err(EmitError::unknown_mode(block, "PROPERTY", other)),
    };
    Ok(Translation::value(code, order::EQUALITY))
}

pub(crate) fn change(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let delta = ctx.value_or(block, "DELTA", order::ADDITION, ValueKind::Number)?;
    let name = ctx.variable_name(field(block, "VAR")?);
    Ok(Translation::Statement(format!(
        "{name} = (typeof {name} == 'number' ? {name} : 0) + {delta};\n"
    )))
}

const MEAN: &[&str] = &[
    "function {{name}}(myList) {",
    "  return myList.reduce(function(x, y) {return x + y;}) / myList.length;",
    "}",
];

const MEDIAN: &[&str] = &[
    "function {{name}}(myList) {",
    "  var localList = myList.filter(function (x) {return typeof x == 'number';});",
    "  if (!localList.length) return null;",
    "  localList.sort(function(a, b) {return b - a;});",
    "  if (localList.length % 2 == 0) {",
    "    return (localList[localList.length / 2 - 1] + localList[localList.length / 2]) / 2;",
    "  } else {",
    "    return localList[(localList.length - 1) / 2];",
    "  }",
    "}",
];

const MODES: &[&str] = &[
    "function {{name}}(values) {",
    "  var modes = [];",
    "  var counts = [];",
    "  var maxCount = 0;",
    "  for (var i = 0; i < values.length; i++) {",
    "    var value = values[i];",
    "    var found = false;",
    "    var thisCount;",
    "    for (var j = 0; j < counts.length; j++) {",
    "      if (counts[j][0] === value) {",
    "        thisCount = ++counts[j][1];",
    "        found = true;",
    "        break;",
    "      }",
    "    }",
    "    if (!found) {",
    "      counts.push([value, 1]);",
    "      thisCount = 1;",
    "    }",
    "    maxCount = Math.max(thisCount, maxCount);",
    "  }",
    "  for (var j = 0; j < counts.length; j++) {",
    "    if (counts[j][1] == maxCount) {",
    "        modes.push(counts[j][0]);",
    "    }",
    "  }",
    "  return modes;",
    "}",
];

const STANDARD_DEVIATION: &[&str] = &[
    "function {{name}}(numbers) {",
    "  var n = numbers.length;",
    "  if (!n) return null;",
    "  var mean = numbers.reduce(function(x, y) {return x + y;}) / n;",
    "  var variance = 0;",
    "  for (var j = 0; j < n; j++) {",
    "    variance += Math.pow(numbers[j] - mean, 2);",
    "  }",
    "  variance = variance / n;",
    "  return Math.sqrt(variance);",
    "}",
];

const RANDOM_ITEM: &[&str] = &[
    "function {{name}}(list) {",
    "  var x = Math.floor(Math.random() * list.length);",
    "  return list[x];",
    "}",
];

/// Aggregates over a list.
pub(crate) fn on_list(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let code = match field(block, "OP")? {
        "SUM" => {
            let list = ctx.value_or(block, "LIST", order::MEMBER, ValueKind::List)?;
            format!("{list}.reduce(function(x, y) {{return x + y;}})")
        }
        op @ ("MIN" | "MAX") => {
            let list = ctx.value_or(block, "LIST", order::COMMA, ValueKind::List)?;
            let method = if op == "MIN" { "min" } else { "max" };
            format!("Math.{method}.apply(null, {list})")
        }
        op => {
            let (key, template) = match op {
                "AVERAGE" => ("mathMean", MEAN),
                "MEDIAN" => ("mathMedian", MEDIAN),
                "MODE" => ("mathModes", MODES),
                "STD_DEV" => ("mathStandardDeviation", STANDARD_DEVIATION),
                "RANDOM" => ("mathRandomList", RANDOM_ITEM),
                other => return Err(EmitError::unknown_mode(block, "OP", other)),
            };
            let helper = ctx.provide_helper(key, template)?;
            let list = ctx.value_or(block, "LIST", order::NONE, ValueKind::List)?;
            format!("{helper}({list})")
        }
    };
    Ok(Translation::value(code, order::FUNCTION_CALL))
}

pub(crate) fn modulo(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let dividend = ctx.value_or(block, "DIVIDEND", order::MODULUS, ValueKind::Number)?;
    let divisor = ctx.value_or(block, "DIVISOR", order::MODULUS, ValueKind::Number)?;
    Ok(Translation::value(
        format!("{dividend} % {divisor}"),
        order::MODULUS,
    ))
}

pub(crate) fn constrain(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let value = ctx.value_or(block, "VALUE", order::COMMA, ValueKind::Number)?;
    let low = ctx.value_or(block, "LOW", order::COMMA, ValueKind::Number)?;
    let high = ctx
        .value(block, "HIGH", order::COMMA)?
        .unwrap_or_else(|| "Infinity".to_string());
    Ok(Translation::value(
        format!("Math.min(Math.max({value}, {low}), {high})"),
        order::FUNCTION_CALL,
    ))
}

const RANDOM_INT: &[&str] = &[
    "function {{name}}(a, b) {",
    "  if (a > b) {",
    "    // Swap a and b to ensure a is smaller.",
    "    var c = a;",
    "    a = b;",
    "    b = c;",
    "  }",
    "  return Math.floor(Math.random() * (b - a + 1) + a);",
    "}",
];

pub(crate) fn random_int(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let from = ctx.value_or(block, "FROM", order::COMMA, ValueKind::Number)?;
    let to = ctx.value_or(block, "TO", order::COMMA, ValueKind::Number)?;
    let helper = ctx.provide_helper("mathRandomInt", RANDOM_INT)?;
    Ok(Translation::value(
        format!("{helper}({from}, {to})"),
        order::FUNCTION_CALL,
    ))
}

/// Angle of the point `(X, Y)` in degrees.
pub(crate) fn atan2(ctx: &mut EmitContext<'_>, block: &Block) -> EmitResult<Translation> {
    let x = ctx.value_or(block, "X", order::COMMA, ValueKind::Number)?;
    let y = ctx.value_or(block, "Y", order::COMMA, ValueKind::Number)?;
    Ok(Translation::value(
        format!("Math.atan2({y}, {x}) / Math.PI * 180"),
        order::DIVISION,
    ))
}
