//! Node kind names

use super::{Identifier, Interior, Number, Str, Visitor};

/// Short name of a node's kind. Interior nodes answer with their tag.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameVisitor;

impl Visitor for NameVisitor {
    type Output = String;
    type Args = ();

    fn visit_number(
        &mut self,
        _node: &Number,
        _args: (),
    ) -> String {
        "number".to_string()
    }

    fn visit_string(
        &mut self,
        _node: &Str,
        _args: (),
    ) -> String {
        "string".to_string()
    }

    fn visit_identifier(
        &mut self,
        _node: &Identifier,
        _args: (),
    ) -> String {
        "identifier".to_string()
    }

    fn visit_interior(
        &mut self,
        node: &Interior,
        _args: (),
    ) -> String {
        node.tag.clone()
    }
}
