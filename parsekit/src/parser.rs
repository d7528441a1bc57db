//! Table-driven SLR parser that builds owned syntax trees.
//!
//! The compiled grammar supplies an ACTION table (state × terminal), a GOTO
//! table (state × nonterminal), production metadata, and the two candidate
//! actions of every shift/reduce conflict it left in the tables. [`Parser`]
//! drives those tables over a [`TokenList`]: a shift turns the lookahead
//! token into a terminal leaf, and a reduction wraps the top `size` trees of
//! the stack into one nonterminal node.

use crate::tree::{NonterminalID, Tree};
use crate::{ErrorKind, State, TerminalID, Token, TokenList};
use smartstring::alias::String;
use std::fmt::Debug;
use std::marker::PhantomData;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParserAction<US, UP, UA>
where
    US: ParserStateID,
    UP: ParserProdID,
    UA: ParserAmbigID,
{
    Error,
    Accept,
    Shift(US),
    Reduce(UP),
    Ambig(UA),
    Goto(US),
}

pub trait ParserStateID: Copy + Debug + Eq + Into<usize> {
    const COUNT: usize;
}

pub trait ParserAmbigID: Copy + Debug + Eq + Into<usize> {
    const COUNT: usize;
}

pub trait ParserProdID: Copy + Debug + Eq + Into<usize> {
    type NonterminalID: NonterminalID;

    const COUNT: usize;

    fn label(&self) -> &'static str;
    /// The nonterminal this production reduces to.
    fn lhs(&self) -> Self::NonterminalID;
    /// Number of symbols on the right-hand side.
    fn size(&self) -> usize;
}

type Action<D> = ParserAction<
    <D as ParserData>::StateID,
    <D as ParserData>::ProdID,
    <D as ParserData>::AmbigID,
>;

/// Compiled parser tables.
pub trait ParserData {
    type StateID: ParserStateID;
    type AmbigID: ParserAmbigID;
    type ProdID: ParserProdID<NonterminalID = Self::NonterminalID>;
    type TerminalID: TerminalID;
    type NonterminalID: NonterminalID;

    fn start_state() -> Self::StateID;

    fn lookup(
        state_id: Self::StateID,
        terminal_id: Self::TerminalID,
    ) -> ParserAction<Self::StateID, Self::ProdID, Self::AmbigID>;

    fn lookup_goto(
        state_id: Self::StateID,
        nonterminal_id: Self::NonterminalID,
    ) -> ParserAction<Self::StateID, Self::ProdID, Self::AmbigID>;

    /// The `[shift, reduce]` candidates of a conflict.
    fn lookup_ambig(
        ambig_id: Self::AmbigID,
    ) -> [ParserAction<Self::StateID, Self::ProdID, Self::AmbigID>; 2];

    /// Picks one candidate of a conflict given the lookahead terminal.
    ///
    /// Defaults to shifting. Grammars override this to express operator
    /// precedence and associativity.
    fn resolve_ambiguity(
        ambig_id: Self::AmbigID,
        _lookahead: Self::TerminalID,
    ) -> ParserAction<Self::StateID, Self::ProdID, Self::AmbigID> {
        Self::lookup_ambig(ambig_id)[0]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserStats {
    pub tokens: usize,
    pub shifts: usize,
    pub reductions: usize,
    pub ambigs: usize,
}

/// An SLR parser over the tables in `D`.
pub struct Parser<D>
where
    D: ParserData,
{
    _data: PhantomData<D>,
}

impl<D> Debug for Parser<D>
where
    D: ParserData,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser").finish()
    }
}

impl<D> Default for Parser<D>
where
    D: ParserData,
{
    fn default() -> Self {
        Self::new()
    }
}

type ParseTree<D> = Tree<<D as ParserData>::TerminalID, <D as ParserData>::NonterminalID>;

impl<D> Parser<D>
where
    D: ParserData,
{
    pub fn new() -> Self {
        Self { _data: PhantomData }
    }

    /// Parses a whole token list into a single tree.
    ///
    /// Every token ends up as exactly one leaf, in order. On failure the kind
    /// and a message naming the offending token are written into `state`,
    /// and no tree is returned.
    pub fn parse(
        &self,
        state: &mut State,
        tokens: &TokenList<D::TerminalID>,
    ) -> Result<ParseTree<D>, ErrorKind> {
        let mut states: Vec<D::StateID> = Vec::new();
        let mut trees: Vec<ParseTree<D>> = Vec::new();
        let mut index = 0;
        let mut stats = ParserStats::default();

        let mut state_id = D::start_state();
        push(state, &mut states, state_id)?;

        let result = loop {
            let lookahead = tokens.get(index).map_or(D::TerminalID::END, |t| t.terminal);
            if log::log_enabled!(log::Level::Trace) {
                dump_state::<D>(&states, lookahead);
            }

            let action = match D::lookup(state_id, lookahead) {
                Action::<D>::Ambig(ambig) => {
                    log::trace!("Ambig {:?}", ambig);
                    stats.ambigs += 1;
                    D::resolve_ambiguity(ambig, lookahead)
                }
                action => action,
            };

            match action {
                Action::<D>::Shift(new_state) => {
                    log::trace!("Shift {:?}", new_state);
                    let Some(&token) = tokens.get(index) else {
                        break Err(state.fail(
                            ErrorKind::SyntaxError,
                            format_args!("parse tables shift {} at end of input", lookahead.label()),
                        ));
                    };
                    push(state, &mut trees, Tree::Terminal(token))?;
                    push(state, &mut states, new_state)?;
                    state_id = new_state;
                    index += 1;
                    stats.shifts += 1;
                }

                Action::<D>::Reduce(prod_id) => {
                    let size = prod_id.size();
                    log::trace!("Reduce {:?}({}) size {}", prod_id, prod_id.label(), size);
                    if trees.len() < size || states.len() <= size {
                        break Err(state.fail(
                            ErrorKind::SyntaxError,
                            format_args!("parse stack underflow reducing {}", prod_id.label()),
                        ));
                    }
                    let mut children = Vec::new();
                    if children.try_reserve_exact(size).is_err() {
                        break Err(out_of_memory(state, "node children"));
                    }
                    children.extend(trees.drain(trees.len() - size..));
                    states.truncate(states.len() - size);

                    let lhs = prod_id.lhs();
                    let top = states[states.len() - 1];
                    let Action::<D>::Goto(new_state) = D::lookup_goto(top, lhs) else {
                        break Err(state.fail(
                            ErrorKind::SyntaxError,
                            format_args!("parse tables have no goto for {} in {:?}", lhs.label(), top),
                        ));
                    };
                    push(state, &mut trees, Tree::nonterminal(lhs, children))?;
                    push(state, &mut states, new_state)?;
                    state_id = new_state;
                    stats.reductions += 1;
                }

                Action::<D>::Accept => {
                    log::trace!("Accept");
                    match (trees.pop(), trees.is_empty(), index == tokens.len()) {
                        (Some(root), true, true) => break Ok(root),
                        _ => {
                            break Err(state.fail(
                                ErrorKind::SyntaxError,
                                format_args!(
                                    "parse tables accept with {} trees and {} of {} tokens consumed",
                                    trees.len() + 1,
                                    index,
                                    tokens.len()
                                ),
                            ));
                        }
                    }
                }

                Action::<D>::Error => {
                    break Err(unexpected::<D>(state, tokens, index));
                }

                Action::<D>::Ambig(_) | Action::<D>::Goto(_) => {
                    break Err(state.fail(
                        ErrorKind::SyntaxError,
                        format_args!("parse tables give {:?} on {}", action, lookahead.label()),
                    ));
                }
            }
        };

        stats.tokens = index;
        log::debug!(
            "parsed {} of {} tokens: {} shifts, {} reductions, {} ambiguities",
            index,
            tokens.len(),
            stats.shifts,
            stats.reductions,
            stats.ambigs
        );
        state.stats.parser = stats;
        result
    }
}

/// Pushes onto a parser stack, reporting exhaustion instead of aborting.
fn push<X>(state: &mut State, stack: &mut Vec<X>, x: X) -> Result<(), ErrorKind> {
    if stack.try_reserve(1).is_err() {
        return Err(out_of_memory(state, "parser stack"));
    }
    stack.push(x);
    Ok(())
}

fn out_of_memory(state: &mut State, what: &str) -> ErrorKind {
    state.fail(
        ErrorKind::AllocationFailure,
        format_args!("out of memory growing {}", what),
    )
}

fn unexpected<D: ParserData>(
    state: &mut State,
    tokens: &TokenList<D::TerminalID>,
    index: usize,
) -> ErrorKind {
    match tokens.get(index) {
        Some(Token { terminal, span }) => state.fail(
            ErrorKind::SyntaxError,
            format_args!("unexpected {} at {}", terminal.label(), span),
        ),
        None => match tokens.last() {
            Some(Token { terminal, span }) => state.fail(
                ErrorKind::SyntaxError,
                format_args!("unexpected end of input after {} at {}", terminal.label(), span),
            ),
            None => state.fail(ErrorKind::SyntaxError, "unexpected end of input"),
        },
    }
}

fn dump_state<D: ParserData>(states: &[D::StateID], lookahead: D::TerminalID) {
    let mut output = String::new();
    for s in states {
        output.push_str(&format!("<{:?}> ", s));
    }
    log::trace!("{} <-  {}", output, lookahead.label());
}
