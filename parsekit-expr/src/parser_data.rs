//! Compiled SLR(1) tables for the expression grammar.
//!
//! ```text
//! Start -> Expr
//! Expr  -> Expr + Expr      (expr1)
//!        | Expr - Expr      (expr2)
//!        | Expr * Expr      (expr3)
//!        | Expr / Expr      (expr4)
//!        | ( Expr )         (expr5)
//!        | num              (expr6)
//!        | ident            (expr7)
//! ```
//!
//! The sixteen shift/reduce conflicts between the binary productions are
//! kept as ambiguity entries and settled by [`ParData::resolve_ambiguity`].

use parsekit::{
    NonterminalID, ParserAction, ParserAmbigID, ParserData, ParserProdID, ParserStateID,
    TerminalID,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TermID {
    Num = 0,
    Ident = 1,
    Plus = 2,
    Minus = 3,
    Times = 4,
    Divide = 5,
    LParen = 6,
    RParen = 7,
    End = 8,
}

impl TermID {
    pub const LABELS: &'static [&'static str] = &[
        "NUM", "IDENT", "PLUS", "MINUS", "TIMES", "DIVIDE", "LPAREN", "RPAREN", "END",
    ];
}

impl TerminalID for TermID {
    const COUNT: usize = 9;
    const END: Self = Self::End;

    fn label(&self) -> &'static str {
        Self::LABELS[Into::<usize>::into(*self)]
    }
}

impl From<TermID> for usize {
    fn from(t: TermID) -> Self {
        t as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NontermID {
    Start = 0,
    Expr = 1,
}

impl NonterminalID for NontermID {
    const COUNT: usize = 2;

    fn label(&self) -> &'static str {
        ["Start", "Expr"][Into::<usize>::into(*self)]
    }
}

impl From<NontermID> for usize {
    fn from(n: NontermID) -> Self {
        n as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateID(u8);
impl ParserStateID for StateID {
    const COUNT: usize = 15;
}

impl From<StateID> for usize {
    fn from(s: StateID) -> Self {
        s.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbigID(u8);
impl ParserAmbigID for AmbigID {
    const COUNT: usize = 16;
}

impl From<AmbigID> for usize {
    fn from(a: AmbigID) -> Self {
        a.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ProdID {
    Start = 0,
    Expr1 = 1,
    Expr2 = 2,
    Expr3 = 3,
    Expr4 = 4,
    Expr5 = 5,
    Expr6 = 6,
    Expr7 = 7,
}

impl ParserProdID for ProdID {
    type NonterminalID = NontermID;

    const COUNT: usize = 8;

    fn label(&self) -> &'static str {
        [
            "start", "expr1", "expr2", "expr3", "expr4", "expr5", "expr6", "expr7",
        ][Into::<usize>::into(*self)]
    }
    fn lhs(&self) -> NontermID {
        match self {
            ProdID::Start => NontermID::Start,
            _ => NontermID::Expr,
        }
    }
    fn size(&self) -> usize {
        [1, 3, 3, 3, 3, 3, 1, 1][Into::<usize>::into(*self)]
    }
}

impl From<ProdID> for usize {
    fn from(p: ProdID) -> Self {
        p as usize
    }
}

pub type Action = ParserAction<StateID, ProdID, AmbigID>;

const E: Action = Action::Error;

pub struct ParData;
impl ParData {
    // Columns: NUM IDENT PLUS MINUS TIMES DIVIDE LPAREN RPAREN END
    const TAB: &'static [[Action; TermID::COUNT]] = &[
        /* STATE 0 */
        [
            Action::Shift(StateID(3)),
            Action::Shift(StateID(14)),
            E,
            E,
            E,
            E,
            Action::Shift(StateID(2)),
            E,
            E,
        ],
        /* STATE 1 */
        [
            E,
            E,
            Action::Shift(StateID(4)),
            Action::Shift(StateID(5)),
            Action::Shift(StateID(6)),
            Action::Shift(StateID(7)),
            E,
            E,
            Action::Accept,
        ],
        /* STATE 2 */
        [
            Action::Shift(StateID(3)),
            Action::Shift(StateID(14)),
            E,
            E,
            E,
            E,
            Action::Shift(StateID(2)),
            E,
            E,
        ],
        /* STATE 3 */
        [
            E,
            E,
            Action::Reduce(ProdID::Expr6),
            Action::Reduce(ProdID::Expr6),
            Action::Reduce(ProdID::Expr6),
            Action::Reduce(ProdID::Expr6),
            E,
            Action::Reduce(ProdID::Expr6),
            Action::Reduce(ProdID::Expr6),
        ],
        /* STATE 4 */
        [
            Action::Shift(StateID(3)),
            Action::Shift(StateID(14)),
            E,
            E,
            E,
            E,
            Action::Shift(StateID(2)),
            E,
            E,
        ],
        /* STATE 5 */
        [
            Action::Shift(StateID(3)),
            Action::Shift(StateID(14)),
            E,
            E,
            E,
            E,
            Action::Shift(StateID(2)),
            E,
            E,
        ],
        /* STATE 6 */
        [
            Action::Shift(StateID(3)),
            Action::Shift(StateID(14)),
            E,
            E,
            E,
            E,
            Action::Shift(StateID(2)),
            E,
            E,
        ],
        /* STATE 7 */
        [
            Action::Shift(StateID(3)),
            Action::Shift(StateID(14)),
            E,
            E,
            E,
            E,
            Action::Shift(StateID(2)),
            E,
            E,
        ],
        /* STATE 8 */
        [
            E,
            E,
            Action::Shift(StateID(4)),
            Action::Shift(StateID(5)),
            Action::Shift(StateID(6)),
            Action::Shift(StateID(7)),
            E,
            Action::Shift(StateID(13)),
            E,
        ],
        /* STATE 9 */
        [
            E,
            E,
            Action::Ambig(AmbigID(0)),
            Action::Ambig(AmbigID(1)),
            Action::Ambig(AmbigID(2)),
            Action::Ambig(AmbigID(3)),
            E,
            Action::Reduce(ProdID::Expr1),
            Action::Reduce(ProdID::Expr1),
        ],
        /* STATE 10 */
        [
            E,
            E,
            Action::Ambig(AmbigID(4)),
            Action::Ambig(AmbigID(5)),
            Action::Ambig(AmbigID(6)),
            Action::Ambig(AmbigID(7)),
            E,
            Action::Reduce(ProdID::Expr2),
            Action::Reduce(ProdID::Expr2),
        ],
        /* STATE 11 */
        [
            E,
            E,
            Action::Ambig(AmbigID(8)),
            Action::Ambig(AmbigID(9)),
            Action::Ambig(AmbigID(10)),
            Action::Ambig(AmbigID(11)),
            E,
            Action::Reduce(ProdID::Expr3),
            Action::Reduce(ProdID::Expr3),
        ],
        /* STATE 12 */
        [
            E,
            E,
            Action::Ambig(AmbigID(12)),
            Action::Ambig(AmbigID(13)),
            Action::Ambig(AmbigID(14)),
            Action::Ambig(AmbigID(15)),
            E,
            Action::Reduce(ProdID::Expr4),
            Action::Reduce(ProdID::Expr4),
        ],
        /* STATE 13 */
        [
            E,
            E,
            Action::Reduce(ProdID::Expr5),
            Action::Reduce(ProdID::Expr5),
            Action::Reduce(ProdID::Expr5),
            Action::Reduce(ProdID::Expr5),
            E,
            Action::Reduce(ProdID::Expr5),
            Action::Reduce(ProdID::Expr5),
        ],
        /* STATE 14 */
        [
            E,
            E,
            Action::Reduce(ProdID::Expr7),
            Action::Reduce(ProdID::Expr7),
            Action::Reduce(ProdID::Expr7),
            Action::Reduce(ProdID::Expr7),
            E,
            Action::Reduce(ProdID::Expr7),
            Action::Reduce(ProdID::Expr7),
        ],
    ];

    // Columns: Start Expr
    const GOTO: &'static [[Action; NontermID::COUNT]] = &[
        /* STATE 0 */ [E, Action::Goto(StateID(1))],
        /* STATE 1 */ [E, E],
        /* STATE 2 */ [E, Action::Goto(StateID(8))],
        /* STATE 3 */ [E, E],
        /* STATE 4 */ [E, Action::Goto(StateID(9))],
        /* STATE 5 */ [E, Action::Goto(StateID(10))],
        /* STATE 6 */ [E, Action::Goto(StateID(11))],
        /* STATE 7 */ [E, Action::Goto(StateID(12))],
        /* STATE 8 */ [E, E],
        /* STATE 9 */ [E, E],
        /* STATE 10 */ [E, E],
        /* STATE 11 */ [E, E],
        /* STATE 12 */ [E, E],
        /* STATE 13 */ [E, E],
        /* STATE 14 */ [E, E],
    ];

    const AMBIGS: &'static [[Action; 2]] = &[
        /* AMBIG 0 */ [Action::Shift(StateID(4)), Action::Reduce(ProdID::Expr1)],
        /* AMBIG 1 */ [Action::Shift(StateID(5)), Action::Reduce(ProdID::Expr1)],
        /* AMBIG 2 */ [Action::Shift(StateID(6)), Action::Reduce(ProdID::Expr1)],
        /* AMBIG 3 */ [Action::Shift(StateID(7)), Action::Reduce(ProdID::Expr1)],
        /* AMBIG 4 */ [Action::Shift(StateID(4)), Action::Reduce(ProdID::Expr2)],
        /* AMBIG 5 */ [Action::Shift(StateID(5)), Action::Reduce(ProdID::Expr2)],
        /* AMBIG 6 */ [Action::Shift(StateID(6)), Action::Reduce(ProdID::Expr2)],
        /* AMBIG 7 */ [Action::Shift(StateID(7)), Action::Reduce(ProdID::Expr2)],
        /* AMBIG 8 */ [Action::Shift(StateID(4)), Action::Reduce(ProdID::Expr3)],
        /* AMBIG 9 */ [Action::Shift(StateID(5)), Action::Reduce(ProdID::Expr3)],
        /* AMBIG 10 */ [Action::Shift(StateID(6)), Action::Reduce(ProdID::Expr3)],
        /* AMBIG 11 */ [Action::Shift(StateID(7)), Action::Reduce(ProdID::Expr3)],
        /* AMBIG 12 */ [Action::Shift(StateID(4)), Action::Reduce(ProdID::Expr4)],
        /* AMBIG 13 */ [Action::Shift(StateID(5)), Action::Reduce(ProdID::Expr4)],
        /* AMBIG 14 */ [Action::Shift(StateID(6)), Action::Reduce(ProdID::Expr4)],
        /* AMBIG 15 */ [Action::Shift(StateID(7)), Action::Reduce(ProdID::Expr4)],
    ];
}

impl ParserData for ParData {
    type StateID = StateID;
    type AmbigID = AmbigID;
    type ProdID = ProdID;
    type TerminalID = TermID;
    type NonterminalID = NontermID;

    fn start_state() -> StateID {
        StateID(0)
    }
    fn lookup(state_id: StateID, terminal_id: TermID) -> Action {
        Self::TAB[Into::<usize>::into(state_id)][Into::<usize>::into(terminal_id)]
    }
    fn lookup_goto(state_id: StateID, nonterminal_id: NontermID) -> Action {
        Self::GOTO[Into::<usize>::into(state_id)][Into::<usize>::into(nonterminal_id)]
    }
    fn lookup_ambig(ambig_id: AmbigID) -> [Action; 2] {
        Self::AMBIGS[Into::<usize>::into(ambig_id)]
    }

    /// `*` and `/` bind tighter than `+` and `-`; all four are
    /// left-associative.
    fn resolve_ambiguity(ambig_id: AmbigID, lookahead: TermID) -> Action {
        let [shift, reduce] = Self::lookup_ambig(ambig_id);
        let Action::Reduce(prod_id) = reduce else {
            return shift;
        };
        match prod_id {
            // Expr -> Expr + Expr | Expr - Expr
            ProdID::Expr1 | ProdID::Expr2 => match lookahead {
                TermID::Times | TermID::Divide => shift,
                _ => reduce,
            },
            // Expr -> Expr * Expr | Expr / Expr
            _ => reduce,
        }
    }
}
