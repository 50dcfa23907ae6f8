//! Breadcrumb descriptions for log lines

use super::{Identifier, Interior, Number, Str, Visitor};

/// Describes a node after a caller-supplied prefix: `file:number 42`.
///
/// Does not recurse; the caller decides how the prefix grows.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceVisitor;

impl Visitor for TraceVisitor {
    type Output = String;
    type Args = String;

    fn visit_number(
        &mut self,
        node: &Number,
        prefix: String,
    ) -> String {
        format!("{prefix}:number {}", node.value)
    }

    fn visit_string(
        &mut self,
        node: &Str,
        prefix: String,
    ) -> String {
        format!("{prefix}:string {}", node.value)
    }

    fn visit_identifier(
        &mut self,
        node: &Identifier,
        prefix: String,
    ) -> String {
        format!("{prefix}:id {}", node.name)
    }

    fn visit_interior(
        &mut self,
        node: &Interior,
        prefix: String,
    ) -> String {
        format!("{prefix}:{} with {} children", node.tag, node.children.len())
    }
}
