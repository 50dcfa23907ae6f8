//! C code generator
//!
//! Lowers a parsed tree into one C translation unit. Interior nodes are
//! dispatched on their tag (see [`GenTag`]); the generator tracks the
//! names assigned so far, which become `value_t` globals, and the current
//! indentation depth of the emitted text.
//!
//! Indentation is absolute: a `statements` list at depth `d` prefixes each
//! of its statements with `d` indent units, and a compound statement closes
//! its braces at the depth it was rendered at. `main`'s body sits at
//! depth 1.

mod scope;
mod tag;
pub mod templates;

#[cfg(test)]
mod tests;

pub use scope::DepthGuard;
pub use tag::{Arity, GenTag};

use indexmap::IndexSet;
use thiserror::Error;
use tracing::{debug, trace};

use crate::frontend::ast::{
    Identifier, Interior, NameVisitor, Node, Number, Str, TraceVisitor, Visitor,
};
use crate::util::config::CodegenConfig;
use templates::PrintArg;

/// Code generation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A tag with a fixed child count got a different one
    #[error("`{tag}` expects {expected} children, got {actual}")]
    Arity {
        tag: String,
        expected: Arity,
        actual: usize,
    },

    /// Something other than a name where a name is assigned to
    #[error("cannot assign to a {found}, expected an identifier")]
    InvalidTarget { found: String },

    /// Children are there but do not have the shape the tag needs
    #[error("malformed `{tag}`: {message}")]
    UnexpectedShape { tag: String, message: String },
}

/// C generator state for one run
#[derive(Debug, Clone)]
pub struct CGenerator {
    config: CodegenConfig,
    /// Names that become globals, in order of first assignment
    declared: IndexSet<String>,
    depth: usize,
}

impl Default for CGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CGenerator {
    pub fn new() -> Self {
        Self::with_config(CodegenConfig::default())
    }

    pub fn with_config(config: CodegenConfig) -> Self {
        let mut generator = Self {
            config,
            declared: IndexSet::new(),
            depth: 1,
        };
        generator.reset();
        generator
    }

    /// Translate a tree, starting from fresh state.
    ///
    /// A failed run leaves no partial output; the generator can be reused.
    pub fn generate(
        &mut self,
        root: &Node,
    ) -> Result<String, GenerationError> {
        self.reset();
        debug!("generating C from `{}`", root.accept(&mut NameVisitor, ()));
        let source = self.render(root)?;
        debug!(
            "generated {} bytes, {} globals",
            source.len(),
            self.declared.len()
        );
        Ok(source)
    }

    /// Current indentation depth
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Names declared so far, placeholder first
    pub fn declared(&self) -> &IndexSet<String> {
        &self.declared
    }

    fn reset(&mut self) {
        self.depth = 1;
        self.declared.clear();
        self.declared.insert(self.config.placeholder.clone());
    }

    /// Enter a nested block; the depth drops back when the guard does
    pub fn nested(&mut self) -> DepthGuard<'_> {
        DepthGuard::new(self)
    }

    fn render(
        &mut self,
        node: &Node,
    ) -> Result<String, GenerationError> {
        node.accept(self, ())
    }

    fn pad(&self) -> String {
        self.config.indent.repeat(self.depth)
    }

    /// `{`, the body one level deeper, and `}` at the current depth
    fn render_block(
        &mut self,
        body: &Node,
    ) -> Result<String, GenerationError> {
        let outer = self.pad();
        let text = {
            let mut inner = self.nested();
            let text = inner.render(body)?;
            if is_statement_list(body) || text.is_empty() {
                text
            } else {
                format!("{}{}", inner.pad(), text)
            }
        };

        if text.is_empty() {
            Ok(format!("{{\n{outer}}}"))
        } else {
            Ok(format!("{{\n{text}\n{outer}}}"))
        }
    }

    fn render_statements(
        &mut self,
        children: &[Node],
    ) -> Result<String, GenerationError> {
        let pad = self.pad();
        let mut lines = Vec::with_capacity(children.len());
        for child in children {
            lines.push(format!("{pad}{}", self.render(child)?));
        }
        Ok(lines.join("\n"))
    }

    fn render_file(
        &mut self,
        body: &Node,
    ) -> Result<String, GenerationError> {
        let body = if is_statement_list(body) {
            self.render(body)?
        } else {
            format!("{}{}", self.pad(), self.render(body)?)
        };
        Ok(templates::program(
            self.declared.iter().map(String::as_str),
            &body,
            &self.config.indent,
        ))
    }

    fn render_if(
        &mut self,
        children: &[Node],
    ) -> Result<String, GenerationError> {
        let condition = self.nested().render(&children[0])?;
        let body = self.render_block(&children[1])?;
        let otherwise = self.render_block(&children[2])?;
        Ok(format!("if ({condition}) {body} else {otherwise}"))
    }

    fn render_while(
        &mut self,
        children: &[Node],
    ) -> Result<String, GenerationError> {
        let condition = self.nested().render(&children[0])?;
        let body = self.render_block(&children[1])?;
        Ok(format!("while ({condition}) {body}"))
    }

    /// Counting loop over a `range_t` kept in its own scope block
    fn render_for(
        &mut self,
        children: &[Node],
    ) -> Result<String, GenerationError> {
        let iterator = self.declare(&children[0])?;
        let range_var = format!("__range_{}", self.depth);
        let outer = self.pad();

        let (inner, range, body) = {
            let mut scope = self.nested();
            let range = scope.render(&children[1])?;
            let body = scope.render_block(&children[2])?;
            (scope.pad(), range, body)
        };

        Ok(format!(
            "{{\n\
             {inner}range_t {range_var} = {range};\n\
             {inner}for ({iterator} = {range_var}.from; \
             range_contains({range_var}, {iterator}); \
             {iterator} += {range_var}.step) {body}\n\
             {outer}}}"
        ))
    }

    fn render_assign(
        &mut self,
        children: &[Node],
    ) -> Result<String, GenerationError> {
        let target = self.declare(&children[0])?;
        let value = self.render(&children[1])?;
        Ok(format!("{target} = {value}"))
    }

    /// Record an assignment target, which must be a name
    fn declare(
        &mut self,
        target: &Node,
    ) -> Result<String, GenerationError> {
        match target {
            Node::Identifier(Identifier { name }) => {
                self.declared.insert(name.clone());
                Ok(name.clone())
            }
            other => Err(GenerationError::InvalidTarget {
                found: other.accept(&mut NameVisitor, ()),
            }),
        }
    }

    fn render_invoke(
        &mut self,
        children: &[Node],
    ) -> Result<String, GenerationError> {
        let args = match &children[1] {
            Node::Interior(Interior { tag, children }) if tag == "arglist" => children,
            other => {
                return Err(GenerationError::UnexpectedShape {
                    tag: "invoke".to_string(),
                    message: format!(
                        "arguments must be an `arglist`, got `{}`",
                        other.accept(&mut NameVisitor, ())
                    ),
                })
            }
        };

        let callee = match &children[0] {
            Node::Identifier(Identifier { name }) => name.as_str(),
            other => {
                let callee = self.render(other)?;
                let args = self.render(&children[1])?;
                return Ok(format!("{callee}({args})"));
            }
        };

        match callee {
            "print" => {
                let mut rendered = Vec::with_capacity(args.len());
                for arg in args {
                    let text = self.render(arg)?;
                    rendered.push(match arg {
                        Node::Str(_) => PrintArg::Text(text),
                        _ => PrintArg::Value(text),
                    });
                }
                Ok(templates::print_call(&rendered))
            }
            "int" => match args.as_slice() {
                [arg] => Ok(templates::parse_int_call(&self.render(arg)?)),
                _ => Err(builtin_arity("int", 1, args.len())),
            },
            "input" => match args.as_slice() {
                [] => Ok(templates::read_line_call()),
                _ => Err(builtin_arity("input", 0, args.len())),
            },
            "range" => {
                let rendered = args
                    .iter()
                    .map(|arg| self.render(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(templates::range_literal(&rendered))
            }
            name => {
                let args = self.render(&children[1])?;
                Ok(format!("{name}({args})"))
            }
        }
    }

    fn render_arglist(
        &mut self,
        children: &[Node],
    ) -> Result<String, GenerationError> {
        let rendered = children
            .iter()
            .map(|child| self.render(child))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rendered.join(", "))
    }
}

impl Visitor for CGenerator {
    type Output = Result<String, GenerationError>;
    type Args = ();

    fn visit_number(
        &mut self,
        node: &Number,
        _args: (),
    ) -> Self::Output {
        Ok(node.value.to_string())
    }

    /// Emitted between double quotes as is; nothing is escaped
    fn visit_string(
        &mut self,
        node: &Str,
        _args: (),
    ) -> Self::Output {
        Ok(format!("\"{}\"", node.value))
    }

    fn visit_identifier(
        &mut self,
        node: &Identifier,
        _args: (),
    ) -> Self::Output {
        Ok(node.name.clone())
    }

    fn visit_interior(
        &mut self,
        node: &Interior,
        _args: (),
    ) -> Self::Output {
        trace!("{}", TraceVisitor.visit_interior(node, format!("depth {}", self.depth)));

        let tag = GenTag::parse(&node.tag);
        let arity = tag.arity();
        if !arity.accepts(node.children.len()) {
            return Err(GenerationError::Arity {
                tag: node.tag.clone(),
                expected: arity,
                actual: node.children.len(),
            });
        }

        let children = node.children.as_slice();
        match tag {
            GenTag::File => self.render_file(&children[0]),
            GenTag::Statements => self.render_statements(children),
            GenTag::IfStmt => self.render_if(children),
            GenTag::ElseStmt | GenTag::PassThrough => self.render(&children[0]),
            GenTag::WhileLoop => self.render_while(children),
            GenTag::ForLoop => self.render_for(children),
            GenTag::Assign => self.render_assign(children),
            GenTag::Invoke => self.render_invoke(children),
            GenTag::Arglist => self.render_arglist(children),
            GenTag::SimpleStmt => Ok(format!("{};", self.render(&children[0])?)),
            GenTag::Binary(op) => {
                let lhs = self.render(&children[0])?;
                let rhs = self.render(&children[1])?;
                Ok(format!("({lhs} {op} {rhs})"))
            }
            GenTag::Not => Ok(format!("(! {})", self.render(&children[0])?)),
        }
    }
}

/// Renders as lines already indented to the current depth
fn is_statement_list(node: &Node) -> bool {
    match node {
        Node::Interior(Interior { tag, children }) => match tag.as_str() {
            "statements" => true,
            "else_stmt" => children.len() == 1 && is_statement_list(&children[0]),
            _ => false,
        },
        _ => false,
    }
}

fn builtin_arity(
    name: &str,
    expected: usize,
    actual: usize,
) -> GenerationError {
    GenerationError::UnexpectedShape {
        tag: "invoke".to_string(),
        message: format!("`{name}` takes {expected} argument(s), got {actual}"),
    }
}
