//! Human-readable tree dump

use std::io::{self, Write};

use super::{Identifier, Interior, Number, Str, Visitor};

/// Writes one line per node, children indented one level below their
/// parent:
///
/// ```text
/// Interior `assign` with `2` children
///     Identifier: `x`
///     Number: `5`
/// ```
pub struct PrintVisitor<W: Write> {
    out: W,
    indent: String,
    level: usize,
}

impl<W: Write> PrintVisitor<W> {
    pub fn new(
        out: W,
        indent: impl Into<String>,
    ) -> Self {
        Self {
            out,
            indent: indent.into(),
            level: 0,
        }
    }

    /// Give back the sink
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(
        &mut self,
        text: std::fmt::Arguments<'_>,
    ) -> io::Result<()> {
        for _ in 0..self.level {
            self.out.write_all(self.indent.as_bytes())?;
        }
        self.out.write_fmt(text)?;
        self.out.write_all(b"\n")
    }
}

impl<W: Write> Visitor for PrintVisitor<W> {
    type Output = io::Result<()>;
    type Args = ();

    fn visit_number(
        &mut self,
        node: &Number,
        _args: (),
    ) -> io::Result<()> {
        self.line(format_args!("Number: `{}`", node.value))
    }

    fn visit_string(
        &mut self,
        node: &Str,
        _args: (),
    ) -> io::Result<()> {
        self.line(format_args!("String: `{}`", node.value))
    }

    fn visit_identifier(
        &mut self,
        node: &Identifier,
        _args: (),
    ) -> io::Result<()> {
        self.line(format_args!("Identifier: `{}`", node.name))
    }

    fn visit_interior(
        &mut self,
        node: &Interior,
        _args: (),
    ) -> io::Result<()> {
        self.line(format_args!(
            "Interior `{}` with `{}` children",
            node.tag,
            node.children.len()
        ))?;
        self.level += 1;
        let result = node.children.iter().try_for_each(|child| child.accept(self, ()));
        self.level -= 1;
        result
    }
}
