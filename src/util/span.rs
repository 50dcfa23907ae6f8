//! Source location tracking

use std::fmt;

#[cfg(test)]
mod tests;

/// Source position (line, column, and byte offset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// Byte offset from start of input
    pub offset: usize,
}

impl Position {
    /// Create a new position
    #[inline]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column, offset: 0 }
    }

    /// Create a new position with offset
    #[inline]
    pub fn with_offset(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }

    /// Position of tokens that were never read from the input
    #[inline]
    pub fn dummy() -> Self {
        Self { line: 0, column: 0, offset: 0 }
    }

    #[inline]
    pub fn is_dummy(&self) -> bool {
        self.line == 0
    }
}

impl fmt::Display for Position {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Named source text with a line table, used to render error snippets
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// File name (`<stdin>` for interactive input)
    pub name: String,
    /// File content
    pub content: String,
    /// Byte offset where each line starts
    line_offsets: Vec<usize>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let mut line_offsets = vec![0];
        for (i, b) in content.bytes().enumerate() {
            if b == b'\n' {
                line_offsets.push(i + 1);
            }
        }

        Self {
            name: name.into(),
            content,
            line_offsets,
        }
    }

    /// Text of a 1-indexed line without its line break
    pub fn line_text(
        &self,
        line: usize,
    ) -> Option<&str> {
        let start = *self.line_offsets.get(line.checked_sub(1)?)?;
        let end = self
            .line_offsets
            .get(line)
            .copied()
            .unwrap_or(self.content.len());
        self.content
            .get(start..end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }

}

impl fmt::Display for SourceFile {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
