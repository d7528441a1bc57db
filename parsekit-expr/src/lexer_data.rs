//! Compiled lexer tables for the expression grammar.
//!
//! Two modes: `Expr` scans numbers, identifiers, operators and parentheses
//! and skips whitespace; `Comment` is entered on `/*` and left on `*/`.
//! Reaching the end of input inside a comment is a lexical error.

use crate::TermID;
use parsekit::{LexerAction, LexerData, LexerMode, LexerRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    Expr = 0,
    Comment = 1,
}

impl LexerMode for Mode {
    const COUNT: usize = 2;
}

impl From<Mode> for usize {
    fn from(m: Mode) -> Self {
        m as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Rule {
    Num = 0,
    Ident = 1,
    Plus = 2,
    Minus = 3,
    Times = 4,
    Divide = 5,
    LParen = 6,
    RParen = 7,
    Space = 8,
    CommentBegin = 9,
    CommentEnd = 10,
    CommentText = 11,
    CommentStar = 12,
    End = 13,
}

impl LexerRule for Rule {
    const COUNT: usize = 14;
    const END: Self = Self::End;
}

impl From<Rule> for usize {
    fn from(r: Rule) -> Self {
        r as usize
    }
}

pub struct LexData;
impl LexData {
    const TAB: &'static [&'static [Rule]] = &[
        /* MODE 0 "Expr" */
        &[
            Rule::Num,
            Rule::Ident,
            Rule::Plus,
            Rule::Minus,
            Rule::Times,
            Rule::Divide,
            Rule::LParen,
            Rule::RParen,
            Rule::Space,
            Rule::CommentBegin,
        ],
        /* MODE 1 "Comment" */
        &[Rule::CommentEnd, Rule::CommentText, Rule::CommentStar],
    ];

    const PATTERNS: &'static [&'static [&'static str]] = &[
        &[
            "(?-u:[0-9]+)",
            "(?-u:[A-Za-z_][A-Za-z0-9_]*)",
            "\\+",
            "-",
            "\\*",
            "/",
            "\\(",
            "\\)",
            "(?-u:[ \\t\\r\\n\\x0c]+)",
            "/\\*",
        ],
        &["\\*/", "(?-u:[^*])+", "\\*"],
    ];
}

impl LexerData for LexData {
    type LexerMode = Mode;
    type LexerRule = Rule;
    type TerminalID = TermID;

    fn start_mode() -> Mode {
        Mode::Expr
    }

    fn patterns() -> &'static [&'static [&'static str]] {
        Self::PATTERNS
    }

    fn lookup(mode: Mode, pattern_id: usize) -> Rule {
        Self::TAB[Into::<usize>::into(mode)][pattern_id]
    }

    fn action(mode: Mode, rule: Rule) -> LexerAction<TermID, Mode> {
        match (mode, rule) {
            (Mode::Expr, Rule::Num) => LexerAction::Emit(TermID::Num),
            (Mode::Expr, Rule::Ident) => LexerAction::Emit(TermID::Ident),
            (Mode::Expr, Rule::Plus) => LexerAction::Emit(TermID::Plus),
            (Mode::Expr, Rule::Minus) => LexerAction::Emit(TermID::Minus),
            (Mode::Expr, Rule::Times) => LexerAction::Emit(TermID::Times),
            (Mode::Expr, Rule::Divide) => LexerAction::Emit(TermID::Divide),
            (Mode::Expr, Rule::LParen) => LexerAction::Emit(TermID::LParen),
            (Mode::Expr, Rule::RParen) => LexerAction::Emit(TermID::RParen),
            (Mode::Expr, Rule::Space) => LexerAction::Skip,
            (Mode::Expr, Rule::CommentBegin) => LexerAction::Begin(Mode::Comment),
            (Mode::Expr, Rule::End) => LexerAction::Skip,
            (Mode::Comment, Rule::CommentEnd) => LexerAction::Begin(Mode::Expr),
            (Mode::Comment, Rule::CommentText) => LexerAction::Skip,
            (Mode::Comment, Rule::CommentStar) => LexerAction::Skip,
            (Mode::Comment, Rule::End) => LexerAction::Reject("unterminated comment"),
            _ => LexerAction::Reject("rule not valid in mode"),
        }
    }
}
