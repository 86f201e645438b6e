//! Source location tracking

use std::fmt;

/// Source position (line, column, and byte offset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, counted in bytes)
    pub column: usize,
    /// Byte offset from start of text
    pub offset: usize,
}

impl Position {
    /// Position of the first byte of a text
    #[inline]
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Create a new position with offset
    #[inline]
    pub fn with_offset(
        line: usize,
        column: usize,
        offset: usize,
    ) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Position just past the last byte of `text`.
    ///
    /// `\r\n` and lone `\r` count as a single line break, like the lexer does.
    pub fn end_of(text: &str) -> Self {
        let mut pos = Self::start();
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            pos.advance(c);
            if c == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
                pos.offset += 1;
            }
        }
        pos
    }

    /// Move past one character
    #[inline]
    pub fn advance(
        &mut self,
        c: char,
    ) {
        self.offset += c.len_utf8();
        if c == '\n' || c == '\r' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += c.len_utf8();
        }
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

/// Source span (start position to end position)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Span {
    /// Create a new span
    #[inline]
    pub fn new(
        start: Position,
        end: Position,
    ) -> Self {
        Self { start, end }
    }

    /// Length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    /// Check if span is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// The slice of `text` covered by this span
    pub fn slice<'a>(
        &self,
        text: &'a str,
    ) -> Option<&'a str> {
        text.get(self.start.offset..self.end.offset)
    }
}

impl fmt::Display for Span {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "[{} - {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests;
