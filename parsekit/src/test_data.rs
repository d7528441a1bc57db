// Compiled tables for a small list grammar used by the runtime's unit tests.
//
//   Start -> List
//   List  -> List item | List pair |
//
// Terminals: item `a`, pair `aa`, stop `;` (never valid in the grammar).
// Whitespace is skipped; `#` starts a line comment that must end with a newline.

use crate::lexer::{LexerAction, LexerData, LexerMode, LexerRule};
use crate::parser::{ParserAction, ParserAmbigID, ParserData, ParserProdID, ParserStateID};
use crate::tree::NonterminalID;
use crate::TerminalID;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    Main = 0,
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
    Item = 0,
    Pair = 1,
    Stop = 2,
    Space = 3,
    CommentBegin = 4,
    CommentEnd = 5,
    CommentBody = 6,
    End = 7,
}

impl LexerRule for Rule {
    const COUNT: usize = 8;
    const END: Self = Self::End;
}

impl From<Rule> for usize {
    fn from(r: Rule) -> Self {
        r as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Tid {
    Item = 0,
    Pair = 1,
    Stop = 2,
    End = 3,
}

impl TerminalID for Tid {
    const COUNT: usize = 4;
    const END: Self = Self::End;

    fn label(&self) -> &'static str {
        Tid::LABELS[Into::<usize>::into(*self)]
    }
}

impl From<Tid> for usize {
    fn from(t: Tid) -> Self {
        t as usize
    }
}

impl Tid {
    pub const LABELS: &'static [&'static str] = &["ITEM", "PAIR", "STOP", "END"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Nid {
    Start = 0,
    List = 1,
}

impl NonterminalID for Nid {
    const COUNT: usize = 2;

    fn label(&self) -> &'static str {
        ["Start", "List"][Into::<usize>::into(*self)]
    }
}

impl From<Nid> for usize {
    fn from(n: Nid) -> Self {
        n as usize
    }
}

pub struct LexData;
impl LexData {
    const TAB: &'static [&'static [Rule]] = &[
        /* MODE 0 "Main" */ &[Rule::Item, Rule::Pair, Rule::Stop, Rule::Space, Rule::CommentBegin],
        /* MODE 1 "Comment" */ &[Rule::CommentEnd, Rule::CommentBody],
    ];

    const PATTERNS: &'static [&'static [&'static str]] = &[
        &["a", "aa", ";", "(?-u:[ \\n]+)", "#"],
        &["\\n", "(?-u:[^\\n])+"],
    ];
}

impl LexerData for LexData {
    type LexerMode = Mode;
    type LexerRule = Rule;
    type TerminalID = Tid;

    fn start_mode() -> Mode {
        Mode::Main
    }

    fn patterns() -> &'static [&'static [&'static str]] {
        Self::PATTERNS
    }

    fn lookup(mode: Mode, pattern_id: usize) -> Rule {
        Self::TAB[Into::<usize>::into(mode)][pattern_id]
    }

    fn action(mode: Mode, rule: Rule) -> LexerAction<Tid, Mode> {
        match (mode, rule) {
            (Mode::Main, Rule::Item) => LexerAction::Emit(Tid::Item),
            (Mode::Main, Rule::Pair) => LexerAction::Emit(Tid::Pair),
            (Mode::Main, Rule::Stop) => LexerAction::Emit(Tid::Stop),
            (Mode::Main, Rule::Space) => LexerAction::Skip,
            (Mode::Main, Rule::CommentBegin) => LexerAction::Begin(Mode::Comment),
            (Mode::Main, Rule::End) => LexerAction::Skip,
            (Mode::Comment, Rule::CommentEnd) => LexerAction::Begin(Mode::Main),
            (Mode::Comment, Rule::CommentBody) => LexerAction::Skip,
            (Mode::Comment, Rule::End) => LexerAction::Reject("unterminated line comment"),
            _ => LexerAction::Reject("rule not valid in mode"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateID(u8);
impl ParserStateID for StateID {
    const COUNT: usize = 4;
}

impl From<StateID> for usize {
    fn from(s: StateID) -> Self {
        s.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbigID(u8);
impl ParserAmbigID for AmbigID {
    const COUNT: usize = 0;
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
    List1 = 1,
    List2 = 2,
    List3 = 3,
}

impl ParserProdID for ProdID {
    type NonterminalID = Nid;

    const COUNT: usize = 4;

    fn label(&self) -> &'static str {
        ["start", "list1", "list2", "list3"][Into::<usize>::into(*self)]
    }
    fn lhs(&self) -> Nid {
        [Nid::Start, Nid::List, Nid::List, Nid::List][Into::<usize>::into(*self)]
    }
    fn size(&self) -> usize {
        [1, 2, 2, 0][Into::<usize>::into(*self)]
    }
}

impl From<ProdID> for usize {
    fn from(p: ProdID) -> Self {
        p as usize
    }
}

pub type Action = ParserAction<StateID, ProdID, AmbigID>;

pub struct ParData;
impl ParData {
    const TAB: &'static [[Action; Tid::COUNT]] = &[
        /* STATE 0 */ [
            Action::Reduce(ProdID::List3), /* ITEM */
            Action::Reduce(ProdID::List3), /* PAIR */
            Action::Error,                 /* STOP */
            Action::Reduce(ProdID::List3), /* END */
        ],
        /* STATE 1 */ [
            Action::Shift(StateID(2)), /* ITEM */
            Action::Shift(StateID(3)), /* PAIR */
            Action::Error,             /* STOP */
            Action::Accept,            /* END */
        ],
        /* STATE 2 */ [
            Action::Reduce(ProdID::List1), /* ITEM */
            Action::Reduce(ProdID::List1), /* PAIR */
            Action::Error,                 /* STOP */
            Action::Reduce(ProdID::List1), /* END */
        ],
        /* STATE 3 */ [
            Action::Reduce(ProdID::List2), /* ITEM */
            Action::Reduce(ProdID::List2), /* PAIR */
            Action::Error,                 /* STOP */
            Action::Reduce(ProdID::List2), /* END */
        ],
    ];

    const GOTO: &'static [[Action; Nid::COUNT]] = &[
        /* STATE 0 */ [Action::Error, Action::Goto(StateID(1))],
        /* STATE 1 */ [Action::Error, Action::Error],
        /* STATE 2 */ [Action::Error, Action::Error],
        /* STATE 3 */ [Action::Error, Action::Error],
    ];
}

impl ParserData for ParData {
    type StateID = StateID;
    type AmbigID = AmbigID;
    type ProdID = ProdID;
    type TerminalID = Tid;
    type NonterminalID = Nid;

    fn start_state() -> StateID {
        StateID(0)
    }
    fn lookup(state_id: StateID, terminal_id: Tid) -> Action {
        Self::TAB[Into::<usize>::into(state_id)][Into::<usize>::into(terminal_id)]
    }
    fn lookup_goto(state_id: StateID, nonterminal_id: Nid) -> Action {
        Self::GOTO[Into::<usize>::into(state_id)][Into::<usize>::into(nonterminal_id)]
    }
    fn lookup_ambig(_ambig_id: AmbigID) -> [Action; 2] {
        [Action::Error, Action::Error]
    }
}
