//! Human-readable rendering of token lists and trees.
//!
//! Both adapters borrow the source so terminal text can be sliced out of it
//! by span. Text that is not valid UTF-8 is shown lossily, and a span that
//! does not fit the source is shown as `?`.

use crate::tree::{NonterminalID, Tree};
use crate::{TerminalID, Token, TokenList};
use std::fmt;

fn write_text<T>(f: &mut fmt::Formatter<'_>, token: &Token<T>, source: &[u8]) -> fmt::Result {
    match token.bytes(source) {
        Some(bytes) => write!(f, "{}", String::from_utf8_lossy(bytes)),
        None => f.write_str("?"),
    }
}

/// Renders a token list as `(LABEL text) (LABEL text) ...`.
pub struct TokensDisplay<'a, T> {
    tokens: &'a TokenList<T>,
    source: &'a [u8],
}

impl<T> fmt::Display for TokensDisplay<'_, T>
where
    T: TerminalID,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "({} ", token.terminal.label())?;
            write_text(f, token, self.source)?;
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl<T> TokenList<T> {
    pub fn display<'a>(&'a self, source: &'a (impl AsRef<[u8]> + ?Sized)) -> TokensDisplay<'a, T> {
        TokensDisplay {
            tokens: self,
            source: source.as_ref(),
        }
    }
}

/// Renders a tree one node per line, indented two spaces per level.
///
/// Terminals print as `LABEL: text`, nonterminals as `Label:`.
pub struct TreeDisplay<'a, T, N> {
    tree: &'a Tree<T, N>,
    source: &'a [u8],
}

impl<T, N> fmt::Display for TreeDisplay<'_, T, N>
where
    T: TerminalID,
    N: NonterminalID,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, node) in self.tree.pre_order_with_depth() {
            write!(f, "{:indent$}{}:", "", node.label(), indent = depth * 2)?;
            if let Some(token) = node.as_token() {
                f.write_str(" ")?;
                write_text(f, token, self.source)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl<T, N> Tree<T, N> {
    pub fn display<'a>(&'a self, source: &'a (impl AsRef<[u8]> + ?Sized)) -> TreeDisplay<'a, T, N> {
        TreeDisplay {
            tree: self,
            source: source.as_ref(),
        }
    }
}
