//! Tokens and token lists.
//!
//! A [`Token`] pairs a terminal identity with the [`Span`] it covers. The
//! lexer produces a [`TokenList`]; the parser reads it without consuming it.

use crate::Span;
use std::collections::TryReserveError;
use std::fmt::Debug;
use std::ops::Index;
use std::slice;

/// Identity of a terminal symbol, as defined by a compiled grammar.
///
/// `END` is the synthetic end-of-input terminal the parser uses as lookahead
/// after the last token. Lexers never need to emit it.
pub trait TerminalID: Copy + Debug + Eq + Into<usize> {
    const COUNT: usize;
    const END: Self;

    /// Display name of the terminal.
    fn label(&self) -> &'static str;
}

/// A terminal category plus the half-open byte range of source it matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<T> {
    pub terminal: T,
    pub span: Span,
}

impl<T> Token<T> {
    #[inline]
    pub const fn new(terminal: T, span: Span) -> Self {
        Self { terminal, span }
    }

    /// The matched text, read back from the source the token was lexed from.
    #[inline]
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        self.span.text(source)
    }

    /// The matched bytes, read back from the source the token was lexed from.
    #[inline]
    pub fn bytes<'a>(&self, source: &'a [u8]) -> Option<&'a [u8]> {
        self.span.slice(source)
    }
}

/// An ordered, indexable sequence of tokens.
///
/// Growth goes through [`TokenList::try_push`], which reports exhaustion
/// instead of aborting the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenList<T> {
    tokens: Vec<Token<T>>,
}

impl<T> Default for TokenList<T> {
    fn default() -> Self {
        Self { tokens: Vec::new() }
    }
}

impl<T> TokenList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a token, failing if the list cannot grow.
    pub fn try_push(&mut self, token: Token<T>) -> Result<(), TryReserveError> {
        self.tokens.try_reserve(1)?;
        self.tokens.push(token);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token<T>> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn last(&self) -> Option<&Token<T>> {
        self.tokens.last()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Token<T>> {
        self.tokens.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token<T>] {
        &self.tokens
    }
}

impl<T> Index<usize> for TokenList<T> {
    type Output = Token<T>;

    fn index(&self, index: usize) -> &Token<T> {
        &self.tokens[index]
    }
}

impl<'a, T> IntoIterator for &'a TokenList<T> {
    type Item = &'a Token<T>;
    type IntoIter = slice::Iter<'a, Token<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl<T> IntoIterator for TokenList<T> {
    type Item = Token<T>;
    type IntoIter = std::vec::IntoIter<Token<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<T> From<Vec<Token<T>>> for TokenList<T> {
    fn from(tokens: Vec<Token<T>>) -> Self {
        Self { tokens }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tid {
        Word,
    }

    #[test]
    fn push_and_index() {
        let mut list = TokenList::new();
        assert!(list.is_empty());
        list.try_push(Token::new(Tid::Word, Span::new(0, 3))).unwrap();
        list.try_push(Token::new(Tid::Word, Span::new(4, 7))).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].span, Span::new(4, 7));
        assert_eq!(list.get(2), None);
        assert_eq!(list.last().map(|t| t.span.from), Some(4));
    }

    #[test]
    fn token_text_reads_back_source() {
        let source = "foo bar";
        let list: TokenList<Tid> = vec![
            Token::new(Tid::Word, Span::new(0, 3)),
            Token::new(Tid::Word, Span::new(4, 7)),
        ]
        .into();
        let words: Vec<_> = list.iter().filter_map(|t| t.text(source)).collect();
        assert_eq!(words, ["foo", "bar"]);
        assert_eq!(list[0].bytes(source.as_bytes()), Some(&b"foo"[..]));
    }

    #[test]
    fn token_text_outside_source_is_none() {
        let t = Token::new(Tid::Word, Span::new(5, 9));
        assert_eq!(t.text("abc"), None);
    }

    #[test]
    fn iterates_in_order() {
        let list: TokenList<Tid> = (0..5)
            .map(|i| Token::new(Tid::Word, Span::new(i, i + 1)))
            .collect::<Vec<_>>()
            .into();
        let froms: Vec<_> = (&list).into_iter().map(|t| t.span.from).collect();
        assert_eq!(froms, [0, 1, 2, 3, 4]);
        assert_eq!(list.into_iter().count(), 5);
    }
}
