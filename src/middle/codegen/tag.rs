//! Interior node tags as the generator understands them

use std::fmt;

/// Operators rendered as `(lhs op rhs)`, spelled as their tags
pub const BINARY_OPERATORS: [&str; 9] = ["||", "&&", "==", "!=", "<", ">", "-", "+", "*"];

/// Number of children a tag requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Variadic,
}

impl Arity {
    pub fn accepts(
        self,
        count: usize,
    ) -> bool {
        match self {
            Arity::Exact(n) => n == count,
            Arity::Variadic => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{n}"),
            Arity::Variadic => f.write_str("any number of"),
        }
    }
}

/// Generator view of an interior tag. Parsed once per node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenTag {
    File,
    Statements,
    IfStmt,
    ElseStmt,
    WhileLoop,
    ForLoop,
    Assign,
    Invoke,
    Arglist,
    SimpleStmt,
    Binary(&'static str),
    Not,
    /// Grammar-only wrapper: renders its single child unchanged
    PassThrough,
}

impl GenTag {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "file" => GenTag::File,
            "statements" => GenTag::Statements,
            "if_stmt" => GenTag::IfStmt,
            "else_stmt" => GenTag::ElseStmt,
            "while_loop" => GenTag::WhileLoop,
            "for_loop" => GenTag::ForLoop,
            "assign" => GenTag::Assign,
            "invoke" => GenTag::Invoke,
            "arglist" => GenTag::Arglist,
            "simple_stmt" => GenTag::SimpleStmt,
            "!" => GenTag::Not,
            other => BINARY_OPERATORS
                .iter()
                .find(|op| **op == other)
                .map_or(GenTag::PassThrough, |op| GenTag::Binary(*op)),
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            GenTag::Statements | GenTag::Arglist => Arity::Variadic,
            GenTag::IfStmt | GenTag::ForLoop => Arity::Exact(3),
            GenTag::WhileLoop | GenTag::Assign | GenTag::Invoke | GenTag::Binary(_) => {
                Arity::Exact(2)
            }
            GenTag::File
            | GenTag::ElseStmt
            | GenTag::SimpleStmt
            | GenTag::Not
            | GenTag::PassThrough => Arity::Exact(1),
        }
    }
}
