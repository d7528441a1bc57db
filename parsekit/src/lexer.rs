//! DFA-driven lexer over compiled lexer tables.
//!
//! A compiled grammar describes its lexer through [`LexerData`]: a set of
//! modes, one ordered pattern list per mode, a table mapping `(mode, pattern)`
//! to a rule, and the [`LexerAction`] each rule performs. [`Lexer`] turns the
//! patterns into one anchored dense DFA per mode and scans the source with
//! longest-match semantics. When two patterns match the same length, the one
//! with the lower pattern id wins.

use crate::{ErrorKind, GrammarError, Position, Span, State, TerminalID, Token, TokenList};
use regex_automata::{
    Anchored, Input, MatchKind, PatternID,
    dfa::{Automaton, StartKind, dense},
    nfa::thompson::{Config as ThomConfig, NFA},
    util::syntax,
};
use std::fmt::Debug;
use std::marker::PhantomData;

pub trait LexerMode: Copy + Debug + Eq + Into<usize> {
    const COUNT: usize;
}

pub trait LexerRule: Copy + Debug + Eq + Into<usize> {
    const COUNT: usize;
    /// Pseudo-rule run once when the input is exhausted.
    const END: Self;
}

/// What the lexer does after a rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerAction<T, M> {
    /// Append a token with the matched span.
    Emit(T),
    /// Append a token, then switch mode.
    EmitBegin(T, M),
    /// Discard the matched bytes.
    Skip,
    /// Discard the matched bytes and switch mode.
    Begin(M),
    /// Fail with [`ErrorKind::LexError`] and the given reason.
    Reject(&'static str),
}

/// Compiled lexer tables.
pub trait LexerData {
    type LexerMode: LexerMode;
    type LexerRule: LexerRule;
    type TerminalID: TerminalID;

    fn start_mode() -> Self::LexerMode;

    /// Regular expressions per mode, in mode order; pattern id is the index.
    fn patterns() -> &'static [&'static [&'static str]];

    /// Pre-serialized native-endian dense DFAs, one per mode, concatenated in
    /// mode order. Each DFA starts on a 4-byte boundary of a 4-byte aligned
    /// buffer. Used instead of [`LexerData::patterns`] when present.
    fn dfa_bytes() -> Option<&'static [u8]> {
        None
    }

    fn lookup(mode: Self::LexerMode, pattern_id: usize) -> Self::LexerRule;

    fn action(
        mode: Self::LexerMode,
        rule: Self::LexerRule,
    ) -> LexerAction<Self::TerminalID, Self::LexerMode>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexerStats {
    pub matches: usize,
    pub tokens: usize,
    pub skipped: usize,
    pub mode_switches: usize,
}

/// A lexer compiled from [`LexerData`].
///
/// `lex` takes `&self`, so one compiled lexer serves any number of runs.
pub struct Lexer<D>
where
    D: LexerData,
{
    dfas: Vec<dense::DFA<Vec<u32>>>,
    _data: PhantomData<D>,
}

impl<D> Debug for Lexer<D>
where
    D: LexerData,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("modes", &self.dfas.len())
            .finish()
    }
}

impl<D> Lexer<D>
where
    D: LexerData,
{
    /// Builds (or deserializes) one DFA per mode.
    pub fn try_new() -> Result<Self, GrammarError> {
        let dfas = match D::dfa_bytes() {
            Some(bytes) => Self::load_dfas(bytes)?,
            None => Self::build_dfas()?,
        };
        log::debug!("lexer ready: {} modes", dfas.len());
        Ok(Self {
            dfas,
            _data: PhantomData,
        })
    }

    fn load_dfas(bytes: &'static [u8]) -> Result<Vec<dense::DFA<Vec<u32>>>, GrammarError> {
        let mut dfas = Vec::with_capacity(D::LexerMode::COUNT);
        let mut offset = 0;
        for _ in 0..D::LexerMode::COUNT {
            let rest = bytes.get(offset..).unwrap_or(&[]);
            let (dfa, len) = dense::DFA::from_bytes(rest)?;
            dfas.push(dfa.to_owned());
            offset = (offset + len).next_multiple_of(4);
        }
        Ok(dfas)
    }

    fn build_dfas() -> Result<Vec<dense::DFA<Vec<u32>>>, GrammarError> {
        let patterns = D::patterns();
        if patterns.len() != D::LexerMode::COUNT {
            return Err(GrammarError::ModeCount {
                expected: D::LexerMode::COUNT,
                found: patterns.len(),
            });
        }

        let conf = syntax::Config::new().utf8(false);
        let mut dfas = Vec::with_capacity(patterns.len());
        for (mode, mode_patterns) in patterns.iter().enumerate() {
            let mut hirs = Vec::with_capacity(mode_patterns.len());
            for &pattern in mode_patterns.iter() {
                let hir = syntax::parse_with(pattern, &conf).map_err(|e| GrammarError::Pattern {
                    mode,
                    pattern,
                    message: e.to_string(),
                })?;
                hirs.push(hir);
            }
            let nfa = NFA::compiler()
                .configure(ThomConfig::new().utf8(false))
                .build_many_from_hir(&hirs)?;
            let dfa = dense::Builder::new()
                .configure(
                    dense::DFA::config()
                        .match_kind(MatchKind::All)
                        .start_kind(StartKind::Anchored),
                )
                .build_from_nfa(&nfa)?;
            log::trace!(
                "mode {}: {} patterns, {} bytes",
                mode,
                mode_patterns.len(),
                dfa.memory_usage()
            );
            dfas.push(dfa);
        }
        Ok(dfas)
    }

    /// Scans `source` into a token list.
    ///
    /// On failure the kind and a message naming the offending offset are
    /// written into `state`, and no token list is returned.
    pub fn lex(
        &self,
        state: &mut State,
        source: impl AsRef<[u8]>,
    ) -> Result<TokenList<D::TerminalID>, ErrorKind> {
        let source = source.as_ref();
        let mut tokens = TokenList::new();
        let mut mode = D::start_mode();
        let mut pos = 0;

        while pos < source.len() {
            state.stats.lexer.matches += 1;
            let Some((pattern, end)) = self.longest_match(state, mode, source, pos)? else {
                let b = source[pos];
                return Err(state.fail(
                    ErrorKind::LexError,
                    format_args!(
                        "no terminal matches byte {} at offset {} ({})",
                        describe_byte(b),
                        pos,
                        Position::locate(source, pos),
                    ),
                ));
            };
            let rule = D::lookup(mode, pattern.as_usize());
            let span = Span::new(pos, end);
            if log::log_enabled!(log::Level::Trace) {
                let bytes = &source[pos..end];
                log::trace!(
                    "MATCHED: mode: {:?}, rule: {:?}, pattern: {}, span: {}, text: {:?}",
                    mode,
                    rule,
                    pattern.as_usize(),
                    span,
                    match std::str::from_utf8(bytes) {
                        Ok(s) => s.to_owned(),
                        Err(_) => hex::encode(bytes),
                    },
                );
            }
            mode = self.apply(state, &mut tokens, source, mode, rule, span)?;
            pos = end;
        }

        mode = self.apply(state, &mut tokens, source, mode, D::LexerRule::END, Span::empty(pos))?;
        log::debug!(
            "lexed {} tokens from {} bytes, final mode {:?}",
            tokens.len(),
            source.len(),
            mode
        );
        Ok(tokens)
    }

    fn apply(
        &self,
        state: &mut State,
        tokens: &mut TokenList<D::TerminalID>,
        source: &[u8],
        mode: D::LexerMode,
        rule: D::LexerRule,
        span: Span,
    ) -> Result<D::LexerMode, ErrorKind> {
        let (emit, next) = match D::action(mode, rule) {
            LexerAction::Emit(t) => (Some(t), mode),
            LexerAction::EmitBegin(t, m) => (Some(t), m),
            LexerAction::Skip => (None, mode),
            LexerAction::Begin(m) => (None, m),
            LexerAction::Reject(reason) => {
                return Err(state.fail(
                    ErrorKind::LexError,
                    format_args!(
                        "{} at offset {} ({})",
                        reason,
                        span.from,
                        Position::locate(source, span.from),
                    ),
                ));
            }
        };
        match emit {
            Some(terminal) => {
                if tokens.try_push(Token::new(terminal, span)).is_err() {
                    return Err(state.fail(
                        ErrorKind::AllocationFailure,
                        format_args!("out of memory growing token list at {} tokens", tokens.len()),
                    ));
                }
                state.stats.lexer.tokens += 1;
            }
            None => state.stats.lexer.skipped += span.len(),
        }
        if next != mode {
            log::trace!("BEGIN: {:?} -> {:?}", mode, next);
            state.stats.lexer.mode_switches += 1;
        }
        Ok(next)
    }

    /// Runs the mode's DFA anchored at `at` and returns the pattern and end
    /// offset of the longest non-empty match.
    fn longest_match(
        &self,
        state: &mut State,
        mode: D::LexerMode,
        source: &[u8],
        at: usize,
    ) -> Result<Option<(PatternID, usize)>, ErrorKind> {
        let dfa = &self.dfas[mode.into()];
        let input = Input::new(source).range(at..).anchored(Anchored::Yes);
        let mut sid = match dfa.start_state_forward(&input) {
            Ok(sid) => sid,
            Err(e) => {
                return Err(state.fail(
                    ErrorKind::LexError,
                    format_args!("cannot start match at offset {}: {}", at, e),
                ));
            }
        };

        // Matches are reported one byte late: a match state entered after
        // feeding the byte at `i` marks a match ending at `i`.
        let mut last_match = None;
        for (i, &b) in source.iter().enumerate().skip(at) {
            sid = dfa.next_state(sid, b);
            if dfa.is_special_state(sid) {
                if dfa.is_match_state(sid) {
                    last_match = Some((dfa.match_pattern(sid, 0), i));
                } else if dfa.is_dead_state(sid) || dfa.is_quit_state(sid) {
                    return Ok(last_match.filter(|&(_, end)| end > at));
                }
            }
        }
        sid = dfa.next_eoi_state(sid);
        if dfa.is_match_state(sid) {
            last_match = Some((dfa.match_pattern(sid, 0), source.len()));
        }
        Ok(last_match.filter(|&(_, end)| end > at))
    }
}

fn describe_byte(b: u8) -> smartstring::alias::String {
    use std::fmt::Write;
    let mut s = smartstring::alias::String::new();
    if b.is_ascii_graphic() || b == b' ' {
        let _ = write!(s, "{:?}", b as char);
    } else {
        let _ = write!(s, "0x{}", hex::encode([b]));
    }
    s
}
