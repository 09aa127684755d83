//! Literal rendering.

/// Quote `text` as a Haxe single-quoted string.
///
/// Single-quoted Haxe strings interpolate `$name`, so `$` is doubled.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '$' => out.push_str("$$"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Quote multi-line text as one literal per line joined with `'\n'`.
pub fn multiline_quote(text: &str) -> String {
    text.split('\n')
        .map(quote)
        .collect::<Vec<_>>()
        .join(" + '\\n' +\n")
}

/// Whether `code` is a single single-quoted string literal.
pub fn is_string_literal(code: &str) -> bool {
    let code = code.trim();
    let Some(inner) = code
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
    else {
        return false;
    };
    let mut escaped = false;
    for c in inner.chars() {
        if c == '\'' && !escaped {
            return false;
        }
        escaped = c == '\\' && !escaped;
    }
    true
}

/// Wrap `code` in `Std.string(..)` unless it already is a string literal.
pub fn force_string(code: &str) -> String {
    if is_string_literal(code) {
        code.to_string()
    } else {
        format!("Std.string({code})")
    }
}

/// Parse a numeric field the way the editor stores it. Blank is zero,
/// garbage is NaN.
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    text.parse().unwrap_or(f64::NAN)
}

/// Render a number as source text (`3`, `1.5`, `-2`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        // Adding zero folds -0 into 0.
        format!("{}", value + 0.0)
    }
}
