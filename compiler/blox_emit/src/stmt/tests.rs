use blox_ir::{Block, BlockGraph, BlockId, BlockKind};
use pretty_assertions::assert_eq;

use crate::context::{Frame, FrameKind};
use crate::test_helpers::{compile_with, num, toy_config, Toy};
use crate::{EmitContext, EmitError, Exit, Injection};

fn print(g: &mut BlockGraph, uid: &str, value: &str) -> Block {
    let arg = num(g, value);
    Block::new(uid, BlockKind::TextPrint).input("TEXT", arg)
}

fn flow(g: &mut BlockGraph, uid: &str, kind: &str) -> BlockId {
    g.add(Block::new(uid, BlockKind::FlowStatements).field("FLOW", kind))
}

fn traced() -> Injection {
    Injection::new()
        .with_statement_prefix("enter(%1);\n")
        .with_statement_suffix("leave(%1);\n")
}

#[test]
fn statements_follow_next_in_order() {
    let mut g = BlockGraph::new();
    let third = print(&mut g, "c", "3");
    let third = g.add(third);
    let second = print(&mut g, "b", "2");
    let second = g.add(second.followed_by(third).disabled());
    let first = print(&mut g, "a", "1");
    g.add_top(first.followed_by(second));
    assert_eq!(compile_with(&g, toy_config()).unwrap(), "print(1);\nprint(3);\n");
}

#[test]
fn top_level_value_becomes_statement() {
    let mut g = BlockGraph::new();
    let n = num(&mut g, "7");
    g.push_top(n);
    assert_eq!(compile_with(&g, toy_config()).unwrap(), "7;\n");
}

#[test]
fn comments_precede_the_statement() {
    let mut g = BlockGraph::new();
    let block = print(&mut g, "a", "1").comment("say hi\ntwice");
    g.add_top(block);
    assert_eq!(
        compile_with(&g, toy_config()).unwrap(),
        "// say hi\n// twice\nprint(1);\n"
    );
}

#[test]
fn unsupported_statement_is_fatal() {
    let mut g = BlockGraph::new();
    g.add_top(Block::new("t", BlockKind::TextAppend).field("VAR", "x"));
    assert_eq!(
        compile_with(&g, toy_config()),
        Err(EmitError::UnsupportedBlock {
            block: "t".into(),
            kind: "text_append",
            target: "toy",
        })
    );
}

#[test]
fn prefix_and_suffix_surround_each_statement() {
    let mut g = BlockGraph::new();
    let second = print(&mut g, "b", "2");
    let second = g.add(second);
    let first = print(&mut g, "a", "1");
    g.add_top(first.followed_by(second));
    let config = toy_config().with_injection(traced());
    assert_eq!(
        compile_with(&g, config).unwrap(),
        "enter('a');\nprint(1);\nleave('a');\nenter('b');\nprint(2);\nleave('b');\n"
    );
}

#[test]
fn loop_trap_at_top_and_suffix_at_bottom_of_body() {
    let mut g = BlockGraph::new();
    let body = print(&mut g, "p", "1");
    let body = g.add(body);
    g.add_top(Block::new("w", BlockKind::WhileUntil).statement("DO", body));
    let config = toy_config().with_injection(
        Injection::new()
            .with_statement_suffix("done(%1);\n")
            .with_loop_trap("trap(%1);\n"),
    );
    assert_eq!(
        compile_with(&g, config).unwrap(),
        "while (false) {\n  trap('w');\n  print(1);\n  done('p');\n  done('w');\n}\ndone('w');\n"
    );
}

#[test]
fn continue_replays_loop_suffix_exactly_once_per_path() {
    // while (false) { continue; print(1); }
    let mut g = BlockGraph::new();
    let after = print(&mut g, "p", "1");
    let after = g.add(after);
    let skip = g.add(
        Block::new("c", BlockKind::FlowStatements)
            .field("FLOW", "CONTINUE")
            .followed_by(after),
    );
    g.add_top(Block::new("w", BlockKind::WhileUntil).statement("DO", skip));
    let config = toy_config().with_injection(Injection::new().with_statement_suffix("s(%1);\n"));
    let text = compile_with(&g, config).unwrap();
    assert_eq!(
        text,
        "while (false) {\n  s('c');\n  s('w');\n  continue;\n  print(1);\n  s('p');\n  s('w');\n}\ns('w');\n"
    );

    let (continue_path, fallthrough_path) = text.split_once("continue;").unwrap();
    let body_end = fallthrough_path.find('}').unwrap();
    assert_eq!(continue_path.matches("s('w')").count(), 1);
    assert_eq!(fallthrough_path[..body_end].matches("s('w')").count(), 1);
}

#[test]
fn flow_statement_places_its_own_prefix() {
    let mut g = BlockGraph::new();
    let brk = flow(&mut g, "b", "BREAK");
    g.add_top(Block::new("w", BlockKind::WhileUntil).statement("DO", brk));
    let config = toy_config().with_injection(traced());
    assert_eq!(
        compile_with(&g, config).unwrap(),
        "enter('w');\nwhile (false) {\n  enter('b');\n  leave('b');\n  leave('w');\n  break;\n  leave('w');\n}\nleave('w');\n"
    );
}

#[test]
fn unknown_flow_is_fatal() {
    let mut g = BlockGraph::new();
    let jump = flow(&mut g, "j", "GOTO");
    g.add_top(Block::new("w", BlockKind::WhileUntil).statement("DO", jump));
    let err = compile_with(&g, toy_config()).unwrap_err();
    assert!(matches!(err, EmitError::UnknownMode { ref value, .. } if value == "GOTO"));
}

#[test]
fn return_replays_procedure_prefix_and_suffix() {
    let mut g = BlockGraph::new();
    let cond = g.add(Block::new("t", BlockKind::LogicBoolean).field("BOOL", "TRUE"));
    let early = g.add(Block::new("r", BlockKind::ProceduresIfReturn).input("CONDITION", cond));
    g.add_top(
        Block::new("f", BlockKind::ProceduresDefNoReturn)
            .field("NAME", "check")
            .statement("STACK", early),
    );
    let config = toy_config().with_injection(traced());
    assert_eq!(
        compile_with(&g, config).unwrap(),
        "function check() {\n  enter('r');\n  if (true) {\n    leave('r');\n    enter('f');\n    leave('f');\n    return;\n  }\n  leave('r');\n}\n"
    );
}

#[test]
fn exit_outside_any_loop_replays_only_own_snippets() {
    let g = BlockGraph::new();
    let config = toy_config().with_injection(traced());
    let ctx = EmitContext::new(&g, &Toy, &config);
    let brk = Block::new("b", BlockKind::FlowStatements).field("FLOW", "BREAK");
    assert_eq!(ctx.exit_injection(&brk, Exit::Break), "enter('b');\nleave('b');\n");
    assert_eq!(ctx.exit_injection(&brk, Exit::Normal), "");
}

#[test]
fn loop_search_stops_at_procedure_boundary() {
    let g = BlockGraph::new();
    let config = toy_config();
    let outer_loop = Block::new("w", BlockKind::WhileUntil);
    let procedure = Block::new("f", BlockKind::ProceduresDefNoReturn);
    let mut ctx = EmitContext::new(&g, &Toy, &config);
    ctx.frames.push(Frame {
        kind: FrameKind::Loop,
        block: &outer_loop,
    });
    assert_eq!(ctx.enclosing_loop().map(Block::uid), Some("w"));
    ctx.frames.push(Frame {
        kind: FrameKind::Procedure,
        block: &procedure,
    });
    assert_eq!(ctx.enclosing_loop(), None);
    assert_eq!(ctx.enclosing_procedure().map(Block::uid), Some("f"));
}

#[test]
fn procedure_definitions_precede_code() {
    let mut g = BlockGraph::new();
    let body = print(&mut g, "p", "1");
    let body = g.add(body);
    g.add_top(
        Block::new("f", BlockKind::ProceduresDefNoReturn)
            .field("NAME", "greet")
            .statement("STACK", body),
    );
    let set = g.add(Block::new("s", BlockKind::VariablesSet).field("VAR", "greet"));
    g.push_top(set);
    assert_eq!(
        compile_with(&g, toy_config()).unwrap(),
        "function greet() {\n  print(1);\n}\n\n\ngreet2 = 0;\n"
    );
}

#[test]
fn each_compile_starts_fresh() {
    let mut g = BlockGraph::new();
    let r = g.add(Block::new("r", BlockKind::MathRandomInt));
    g.push_top(r);
    let expected = "function randomInt(a, b) {\n  return a + rand() % (b - a + 1);\n}\n\n\nrandomInt(0, 0);\n";
    assert_eq!(compile_with(&g, toy_config()).unwrap(), expected);
    assert_eq!(compile_with(&g, toy_config()).unwrap(), expected);
}
