//! C generator tests
//!
//! - program: the translation unit around `main`
//! - statements: blocks, loops and indentation
//! - expressions: builtins, operators and leaves
//! - errors: failures and state after them


use crate::frontend::ast::Node;
use crate::middle::codegen::CGenerator;

pub(super) fn n(value: i64) -> Node {
    Node::number(value)
}

pub(super) fn id(name: &str) -> Node {
    Node::identifier(name)
}

pub(super) fn t(
    tag: &str,
    children: Vec<Node>,
) -> Node {
    Node::interior(tag, children)
}

pub(super) fn call(
    callee: &str,
    args: Vec<Node>,
) -> Node {
    t("invoke", vec![id(callee), t("arglist", args)])
}

pub(super) fn assign(
    name: &str,
    value: Node,
) -> Node {
    t("simple_stmt", vec![t("assign", vec![id(name), value])])
}

pub(super) fn statements(children: Vec<Node>) -> Node {
    t("statements", children)
}

/// Render with a fresh generator
pub(super) fn render(node: &Node) -> String {
    CGenerator::new().generate(node).unwrap()
}
