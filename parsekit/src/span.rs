//! Source locations.
//!
//! A [`Span`] is a half-open byte range `[from, to)` into the source that was
//! handed to the lexer. Spans are plain offsets, not copies of the text: the
//! caller keeps the source alive and unmodified for as long as it wants to read
//! terminal text back through a span.
//!
//! [`Position`] converts an offset into a 0-based line/column pair for
//! human-readable diagnostics.
//!
//! # Examples
//!
//! ```rust
//! # use parsekit::{Position, Span};
//! let source = "1 +\n  2";
//! let sp = Span::new(6, 7);
//! assert_eq!(sp.text(source), Some("2"));
//! assert_eq!(Position::locate(source.as_bytes(), sp.from), Position::new(1, 2));
//! assert_eq!(sp.merge(&Span::new(0, 1)), Span::new(0, 7));
//! ```

use std::fmt;

/// A 0-based line/column position in source text.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// 0-based line number.
    pub line: usize,
    /// 0-based column number (byte position in the line).
    pub column: usize,
}

impl Position {
    /// Creates a new `Position`.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Locates byte `offset` in `source`.
    ///
    /// Offsets past the end are clamped to `source.len()`.
    pub fn locate(source: &[u8], offset: usize) -> Self {
        let offset = offset.min(source.len());
        let before = &source[..offset];
        let line = before.iter().filter(|&&b| b == b'\n').count();
        let column = match before.iter().rposition(|&b| b == b'\n') {
            Some(nl) => offset - nl - 1,
            None => offset,
        };
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open byte range: `[from, to)`.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// First byte covered (inclusive).
    pub from: usize,
    /// One past the last byte covered (exclusive).
    pub to: usize,
}

impl Span {
    /// Creates a new `Span`. `from` must not exceed `to`.
    #[inline]
    pub const fn new(from: usize, to: usize) -> Self {
        debug_assert!(from <= to);
        Self { from, to }
    }

    /// An empty span at `offset`.
    #[inline]
    pub const fn empty(offset: usize) -> Self {
        Self {
            from: offset,
            to: offset,
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.to - self.from
    }

    /// Is this span empty (from == to)?
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.from == self.to
    }

    /// Merge with another span by covering both.
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            from: self.from.min(other.from),
            to: self.to.max(other.to),
        }
    }

    /// The bytes this span covers, or `None` if it does not fit `source`.
    #[inline]
    pub fn slice<'a>(&self, source: &'a [u8]) -> Option<&'a [u8]> {
        source.get(self.from..self.to)
    }

    /// The text this span covers, or `None` if it does not fit `source` or
    /// does not fall on character boundaries.
    #[inline]
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.from..self.to)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.from, self.to)
    }
}
