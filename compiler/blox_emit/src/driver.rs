//! Top-Level Driver
//!
//! One [`Compiler::compile`] call is one run: it builds a fresh
//! [`EmitContext`], lets the target initialize it, translates every
//! top-level stack in editor order, and assembles the document from the
//! registered definitions and the collected code.

use std::fmt;

use blox_ir::BlockGraph;
use tracing::debug;

use crate::{EmitConfig, EmitContext, EmitResult, Generator};

/// A compiled document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmittedDocument {
    /// Definition bodies in registration order.
    pub definitions: Vec<String>,
    /// Top-level code, one entry per stack, joined by newlines.
    pub code: String,
    /// The final document text.
    pub text: String,
}

impl EmittedDocument {
    /// Lay out definitions and code and tidy the whitespace.
    ///
    /// Definitions are separated by one blank line and followed by two
    /// more before the code. Leading blank lines and trailing whitespace on
    /// each line are removed, and the document ends in at most one newline.
    pub fn assemble(definitions: Vec<String>, code: String) -> Self {
        let mut text = String::new();
        if !definitions.is_empty() {
            text.push_str(&definitions.join("\n\n"));
            text.push_str("\n\n\n");
        }
        text.push_str(&code);
        EmittedDocument {
            definitions,
            code,
            text: tidy(&text),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for EmittedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn tidy(text: &str) -> String {
    let mut rest = text;
    while let Some(end) = rest.find('\n') {
        if !rest[..end].trim().is_empty() {
            break;
        }
        rest = &rest[end + 1..];
    }

    let mut out = String::with_capacity(rest.len());
    for line in rest.split_inclusive('\n') {
        match line.strip_suffix('\n') {
            Some(body) => {
                out.push_str(body.trim_end_matches([' ', '\t']));
                out.push('\n');
            }
            None => out.push_str(line),
        }
    }

    let kept = out.trim_end().len();
    if out[kept..].contains('\n') {
        out.truncate(kept);
        out.push('\n');
    }
    out
}

/// Compiles block graphs for one target with one configuration.
pub struct Compiler<'g> {
    generator: &'g dyn Generator,
    config: EmitConfig,
}

impl<'g> Compiler<'g> {
    pub fn new(generator: &'g dyn Generator, config: EmitConfig) -> Self {
        Compiler { generator, config }
    }

    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    /// Compile every top-level stack of `graph`.
    ///
    /// # Errors
    ///
    /// The first fatal [`EmitError`](crate::EmitError) raised by any rule.
    /// No partial document is returned.
    #[tracing::instrument(level = "debug", skip_all, fields(generator = self.generator.name(), blocks = graph.len()))]
    pub fn compile(&self, graph: &BlockGraph) -> EmitResult<EmittedDocument> {
        let mut ctx = EmitContext::new(graph, self.generator, &self.config);
        self.generator.init(&mut ctx)?;

        let mut chunks = Vec::with_capacity(graph.top_blocks().len());
        for &top in graph.top_blocks() {
            let chunk = ctx.block_to_code(top)?;
            if !chunk.is_empty() {
                chunks.push(chunk);
            }
        }

        let definitions = ctx.into_definitions();
        debug!(
            stacks = chunks.len(),
            definitions = definitions.len(),
            "compiled"
        );
        Ok(EmittedDocument::assemble(
            definitions.into_codes(),
            chunks.join("\n"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn assemble_separates_definitions_from_code() {
        let doc = EmittedDocument::assemble(
            vec!["function a() {}".into(), "function b() {}".into()],
            "a();\nb();\n".into(),
        );
        assert_eq!(
            doc.text,
            "function a() {}\n\nfunction b() {}\n\n\na();\nb();\n"
        );
        assert_eq!(doc.to_string(), doc.text);
    }

    #[test]
    fn assemble_without_definitions() {
        let doc = EmittedDocument::assemble(Vec::new(), "x = 1;\n".into());
        assert_eq!(doc.as_str(), "x = 1;\n");
    }

    #[test]
    fn tidy_strips_whitespace() {
        assert_eq!(tidy("\n  \nx = 1;  \n  y();\t\n\n\n"), "x = 1;\n  y();\n");
        assert_eq!(tidy("a\n  \nb"), "a\n\nb");
        assert_eq!(tidy(""), "");
        assert_eq!(tidy("last  "), "last  ");
    }
}
