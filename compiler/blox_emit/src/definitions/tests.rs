use pretty_assertions::assert_eq;

use super::{reindent, DefinitionKey, Definitions};
use crate::names::NameTable;
use crate::EmitError;

const RANDOM_INT: &[&str] = &[
    "function {{name}}(a, b) {",
    "  return a + b;",
    "}",
];

#[test]
fn helper_is_materialized_once() {
    let mut names = NameTable::default();
    let mut defs = Definitions::new();
    let first = defs.provide(&mut names, "randomInt", RANDOM_INT, "  ").unwrap();
    let second = defs.provide(&mut names, "randomInt", RANDOM_INT, "  ").unwrap();
    assert_eq!(first, "randomInt");
    assert_eq!(first, second);
    assert_eq!(defs.len(), 1);
    assert_eq!(
        defs.get(&DefinitionKey::Helper("randomInt".into()))
            .map(|d| d.code.as_str()),
        Some("function randomInt(a, b) {\n  return a + b;\n}")
    );
}

#[test]
fn helper_name_avoids_taken_names() {
    let mut names = NameTable::default();
    names.fresh("randomInt");
    let mut defs = Definitions::new();
    let name = defs.provide(&mut names, "randomInt", RANDOM_INT, "  ").unwrap();
    assert_eq!(name, "randomInt2");
    assert_eq!(
        defs.into_codes(),
        vec!["function randomInt2(a, b) {\n  return a + b;\n}".to_string()]
    );
}

#[test]
fn conflicting_template_is_an_error() {
    let mut names = NameTable::default();
    let mut defs = Definitions::new();
    defs.provide(&mut names, "helper", &["a"], "  ").unwrap();
    assert_eq!(
        defs.provide(&mut names, "helper", &["b"], "  "),
        Err(EmitError::HelperConflict {
            key: "helper".into()
        })
    );
}

#[test]
fn define_keeps_first_position() {
    let mut defs = Definitions::new();
    defs.define(DefinitionKey::Variables, "var a;".into());
    defs.define(DefinitionKey::Procedure("f".into()), "function f() {}".into());
    defs.define(DefinitionKey::Variables, "var a, b;".into());
    assert_eq!(defs.into_codes(), vec!["var a, b;", "function f() {}"]);
}

#[test]
fn reindent_rewrites_two_space_units() {
    assert_eq!(reindent("a\n  b\n    c\n   d", "\t"), "a\n\tb\n\t\tc\n\t d");
    assert_eq!(reindent("  x", "  "), "  x");
}
