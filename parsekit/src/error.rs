//! Error types shared by the lexer and the parser.
//!
//! [`ErrorKind`] is the closed taxonomy of pipeline failures. A failing stage
//! returns it as its `Err` value and also writes it, together with a
//! human-readable message, into the run's [`State`](crate::State).
//!
//! [`GrammarError`] is raised earlier, when compiled lexer tables cannot be
//! turned into DFAs. It never occurs during a run.

use thiserror::Error;

/// The kind of failure reported by a pipeline stage.
///
/// Every kind is fatal to the stage that reported it; nothing is retried and
/// no partial token list or tree is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// Resource exhaustion while growing a token list, a parser stack, or a
    /// node's child list.
    #[error("allocation failure")]
    AllocationFailure,

    /// No terminal pattern matches at the current input offset, or the
    /// compiled grammar rejected the input (for example, end of input inside
    /// a comment).
    #[error("lexical error")]
    LexError,

    /// A token cannot extend the grammar's current derivation.
    #[error("syntax error")]
    SyntaxError,
}

/// Compiled lexer tables could not be loaded.
#[derive(Debug, Error)]
pub enum GrammarError {
    /// The number of pattern sets differs from the number of lexer modes.
    #[error("expected {expected} lexer modes, found {found}")]
    ModeCount { expected: usize, found: usize },

    /// A mode's pattern failed to parse as a regular expression.
    #[error("mode {mode}: invalid pattern {pattern:?}: {message}")]
    Pattern {
        mode: usize,
        pattern: &'static str,
        message: std::string::String,
    },

    #[error("nfa build error {0}")]
    Nfa(#[from] regex_automata::nfa::thompson::BuildError),

    #[error("dfa build error {0}")]
    Dfa(#[from] regex_automata::dfa::dense::BuildError),

    /// Pre-serialized DFA bytes were truncated, misaligned or corrupt.
    #[error("dfa deserialize error {0}")]
    Deserialize(#[from] regex_automata::util::wire::DeserializeError),
}
