//! Per-run diagnostic state.
//!
//! A [`State`] is created by the caller before a pipeline run and passed by
//! `&mut` into every stage. A failing stage records the [`ErrorKind`] and a
//! message here; the caller reads them back after the stage returns `Err`.
//! Only the most recent report is kept.
//!
//! A `State` belongs to exactly one run. Independent runs (including runs on
//! different threads) each use their own.
//!
//! # Examples
//!
//! ```rust
//! # use parsekit::{ErrorKind, State};
//! let mut state = State::new();
//! assert!(state.is_ok());
//!
//! state.report(ErrorKind::SyntaxError, "unexpected PLUS at 3..4");
//! assert_eq!(state.kind(), Some(ErrorKind::SyntaxError));
//! assert_eq!(state.message(), "unexpected PLUS at 3..4");
//!
//! state.init();
//! assert_eq!(state.kind(), None);
//! assert_eq!(state.message(), "");
//! ```

use crate::ErrorKind;
use crate::lexer::LexerStats;
use crate::parser::ParserStats;
use smartstring::alias::String;
use std::fmt::{self, Write};

/// Upper bound, in bytes, on a stored diagnostic message.
pub const MAX_MESSAGE_LEN: usize = 256;

/// Counters collected by both stages of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub lexer: LexerStats,
    pub parser: ParserStats,
}

/// Diagnostic context threaded through the lexer and the parser.
#[derive(Debug, Clone, Default)]
pub struct State {
    kind: Option<ErrorKind>,
    message: String,
    pub(crate) stats: Stats,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the state for a new run: no error, empty message, zeroed stats.
    pub fn init(&mut self) {
        self.kind = None;
        self.message.clear();
        self.stats = Stats::default();
    }

    /// Records a failure, replacing any earlier one.
    ///
    /// The message is truncated to [`MAX_MESSAGE_LEN`] bytes on a character
    /// boundary.
    pub fn report(&mut self, kind: ErrorKind, message: impl fmt::Display) {
        self.kind = Some(kind);
        self.message.clear();
        let mut w = Bounded {
            buf: &mut self.message,
            limit: MAX_MESSAGE_LEN,
        };
        // Bounded never fails; a failing Display impl just leaves a shorter message.
        let _ = write!(w, "{}", message);
        log::debug!("{}: {}", kind, self.message);
    }

    /// Records a failure and hands the kind back, for `return Err(state.fail(..))`.
    pub(crate) fn fail(&mut self, kind: ErrorKind, message: impl fmt::Display) -> ErrorKind {
        self.report(kind, message);
        kind
    }

    /// The kind of the last reported failure, if any.
    #[inline]
    pub fn kind(&self) -> Option<ErrorKind> {
        self.kind
    }

    /// The message of the last reported failure; empty if none.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.kind.is_none()
    }

    #[inline]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}

struct Bounded<'a> {
    buf: &'a mut String,
    limit: usize,
}

impl Write for Bounded<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.limit.saturating_sub(self.buf.len());
        if s.len() <= room {
            self.buf.push_str(s);
        } else {
            let mut end = room;
            while !s.is_char_boundary(end) {
                end -= 1;
            }
            self.buf.push_str(&s[..end]);
            self.limit = self.buf.len();
        }
        Ok(())
    }
}
