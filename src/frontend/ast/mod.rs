//! Abstract syntax tree
//!
//! Four node shapes: three leaves and one n-ary interior node whose `tag`
//! names its syntactic role (`"file"`, `"if_stmt"`, `"+"`, ...). Children
//! are owned by their parent.
//!
//! Operations over the tree implement [`Visitor`]. Each visitor picks its
//! own result type and its own extra argument; [`Node::accept`] hands the
//! node to the method matching its variant.

mod namer;
mod printer;
mod trace;

#[cfg(test)]
mod tests;

pub use namer::NameVisitor;
pub use printer::PrintVisitor;
pub use trace::TraceVisitor;

/// Integer literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    pub value: i64,
}

/// String literal, quotes stripped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Str {
    pub value: String,
}

/// Identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

/// Tagged interior node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interior {
    pub tag: String,
    pub children: Vec<Node>,
}

/// AST node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Number(Number),
    Str(Str),
    Identifier(Identifier),
    Interior(Interior),
}

impl Node {
    pub fn number(value: i64) -> Self {
        Node::Number(Number { value })
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::Str(Str {
            value: value.into(),
        })
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier(Identifier { name: name.into() })
    }

    pub fn interior(
        tag: impl Into<String>,
        children: Vec<Node>,
    ) -> Self {
        Node::Interior(Interior {
            tag: tag.into(),
            children,
        })
    }

    /// Tag of an interior node, `None` for leaves
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Interior(interior) => Some(&interior.tag),
            _ => None,
        }
    }

    /// Children of an interior node; leaves have none
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Interior(interior) => &interior.children,
            _ => &[],
        }
    }

    /// Dispatch to the visitor method for this node's variant
    #[inline]
    pub fn accept<V: Visitor + ?Sized>(
        &self,
        visitor: &mut V,
        args: V::Args,
    ) -> V::Output {
        match self {
            Node::Number(node) => visitor.visit_number(node, args),
            Node::Str(node) => visitor.visit_string(node, args),
            Node::Identifier(node) => visitor.visit_identifier(node, args),
            Node::Interior(node) => visitor.visit_interior(node, args),
        }
    }
}

/// An operation over the tree.
///
/// Every method is required, so a visitor that forgets a variant does not
/// compile. Visitors without extra arguments use `Args = ()`.
pub trait Visitor {
    type Output;
    type Args;

    fn visit_number(
        &mut self,
        node: &Number,
        args: Self::Args,
    ) -> Self::Output;

    fn visit_string(
        &mut self,
        node: &Str,
        args: Self::Args,
    ) -> Self::Output;

    fn visit_identifier(
        &mut self,
        node: &Identifier,
        args: Self::Args,
    ) -> Self::Output;

    fn visit_interior(
        &mut self,
        node: &Interior,
        args: Self::Args,
    ) -> Self::Output;
}
