//! Lexer and parser for the expression grammar, compiled once and reused.

use crate::{LexData, NontermID, ParData, TermID};
use parsekit::{ErrorKind, GrammarError, Lexer, Parser, State, TokenList, Tree};

/// A syntax tree of the expression grammar.
pub type ExprTree = Tree<TermID, NontermID>;

/// The two pipeline stages for the expression grammar.
///
/// Construction compiles the lexer DFAs; after that, `lex` and `parse` take
/// `&self` and may be called for any number of runs, each with its own
/// [`State`].
#[derive(Debug)]
pub struct ExprPipeline {
    lexer: Lexer<LexData>,
    parser: Parser<ParData>,
}

impl ExprPipeline {
    pub fn try_new() -> Result<Self, GrammarError> {
        Ok(Self {
            lexer: Lexer::try_new()?,
            parser: Parser::new(),
        })
    }

    pub fn lex(
        &self,
        state: &mut State,
        source: impl AsRef<[u8]>,
    ) -> Result<TokenList<TermID>, ErrorKind> {
        self.lexer.lex(state, source)
    }

    pub fn parse(
        &self,
        state: &mut State,
        tokens: &TokenList<TermID>,
    ) -> Result<ExprTree, ErrorKind> {
        self.parser.parse(state, tokens)
    }
}
