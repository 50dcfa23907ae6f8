//! Parser tests module
//!
//! - basic: tree shapes for statements and expressions
//! - errors: first-error reporting
//! - fuzz: generated programs


use crate::frontend::ast::Node;

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

pub(super) fn file(statements: Vec<Node>) -> Node {
    t("file", vec![t("statements", statements)])
}

pub(super) fn simple(stmt: Node) -> Node {
    t("simple_stmt", vec![stmt])
}

pub(super) fn assign(
    name: &str,
    value: Node,
) -> Node {
    simple(t("assign", vec![id(name), value]))
}
