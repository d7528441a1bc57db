//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! Runtime for table-driven lexers and parsers.
//!
//! `parsekit` runs grammars that were compiled ahead of time into tables:
//!  * a [`Lexer`] built from [`LexerData`] scans bytes into a [`TokenList`],
//!    using one longest-match DFA per lexer mode;
//!  * a [`Parser`] built from [`ParserData`] runs the SLR(1) shift/reduce
//!    driver over that list and returns an owned [`Tree`].
//!
//! Both stages take a `&mut` [`State`]. On failure the stage returns the
//! [`ErrorKind`] and leaves a human-readable message in the state.
//!
//! Trees are traversed with [`Tree::pre_order`], [`Tree::post_order`],
//! [`Tree::leaves`] or [`walk`], and printed with [`Tree::display`]. None of
//! these recurse on the native stack, and neither do dropping, comparing or
//! `Debug`-formatting a tree.

mod display;
mod error;
mod lexer;
mod parser;
mod span;
mod state;
mod token;
mod tree;
mod walk;

#[cfg(test)]
mod test_data;

pub use crate::display::{TokensDisplay, TreeDisplay};
pub use crate::error::{ErrorKind, GrammarError};
pub use crate::lexer::{Lexer, LexerAction, LexerData, LexerMode, LexerRule, LexerStats};
pub use crate::parser::{
    Parser, ParserAction, ParserAmbigID, ParserData, ParserProdID, ParserStateID, ParserStats,
};
pub use crate::span::{Position, Span};
pub use crate::state::{MAX_MESSAGE_LEN, State, Stats};
pub use crate::token::{TerminalID, Token, TokenList};
pub use crate::tree::{Node, NonterminalID, Tree};
pub use crate::walk::{Leaves, PostOrder, PreOrder, PreOrderWithDepth, walk};
