//! Grammar tables.
//!
//! A grammar compiler packs the LALR(1) automaton into a handful of
//! flat arrays. [`GrammarTables`] wraps those arrays and answers the
//! questions the engine asks: which action to take for a terminal in a
//! state, where to go after a reduce, which terminal to fall back to.
//!
//! Action codes are partitioned into ranges:
//!
//! | range | meaning |
//! |---|---|
//! | `0..min_shift_reduce` | shift, the code is the new state |
//! | `min_shift_reduce..min_reduce` | shift then reduce by rule `code - min_shift_reduce` |
//! | `min_reduce..error_action` | reduce by rule `code - min_reduce` |
//! | `error_action` | syntax error |
//! | `accept_action` | accept |
//! | `no_action` | unused slot |

mod sql;

pub use sql::{nt, tk, SQL_GRAMMAR};

/// A terminal or nonterminal code.
pub type Symbol = u16;

/// An automaton state, or a pending reduce when `>= min_reduce`.
pub type StateId = u16;

/// Index of a grammar rule.
pub type RuleId = u16;

/// Left-hand side and right-hand side length of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInfo {
    /// Symbol the rule produces.
    pub lhs: Symbol,
    /// Number of stack entries the rule consumes.
    pub rhs_len: u8,
}

impl RuleInfo {
    /// Creates a rule description.
    #[must_use]
    pub const fn new(lhs: Symbol, rhs_len: u8) -> Self {
        Self { lhs, rhs_len }
    }
}

/// A decoded action code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Push the lookahead and move to the state.
    Shift(StateId),
    /// Push the lookahead, then reduce by the rule.
    ShiftReduce(RuleId),
    /// Reduce by the rule without consuming the lookahead.
    Reduce(RuleId),
    /// No valid move.
    Error,
    /// The input is a complete sentence.
    Accept,
    /// Filler; never produced by a well-formed lookup.
    NoAction,
}

/// Packed LALR(1) tables plus the metadata needed to interpret them.
///
/// All arrays are `'static` so one set of tables can back any number of
/// parsers. Tests build small grammars by leaking vectors.
#[derive(Debug)]
pub struct GrammarTables {
    /// Number of states.
    pub state_count: u16,
    /// Number of rules.
    pub rule_count: u16,
    /// Terminals are `0..terminal_count`; 0 is end of input.
    pub terminal_count: u16,
    /// Number of named symbols.
    pub symbol_count: u16,
    /// First shift-reduce action code.
    pub min_shift_reduce: u16,
    /// First reduce action code.
    pub min_reduce: u16,
    /// Syntax error action code.
    pub error_action: u16,
    /// Accept action code.
    pub accept_action: u16,
    /// Filler action code.
    pub no_action: u16,
    /// Terminal that matches any lookahead.
    pub wildcard: Option<Symbol>,
    /// Symbol shifted during error recovery. `None` selects the
    /// abandon-on-first-error policy.
    pub error_symbol: Option<Symbol>,
    /// Packed action codes.
    pub action: &'static [u16],
    /// Symbol each `action` slot belongs to.
    pub lookahead: &'static [u8],
    /// Per-state offset into `action` for terminals.
    pub shift_offset: &'static [i16],
    /// Per-state offset into `action` for gotos.
    pub reduce_offset: &'static [i16],
    /// Per-state default action.
    pub default_action: &'static [u16],
    /// Fallback terminal for each terminal, 0 when there is none.
    pub fallback: &'static [u8],
    /// Rule shapes.
    pub rules: &'static [RuleInfo],
    /// Printable symbol names.
    pub symbol_names: &'static [&'static str],
    /// Printable rule text.
    pub rule_names: &'static [&'static str],
}

impl GrammarTables {
    /// Decodes an action code into its kind.
    #[must_use]
    pub const fn decode(&self, code: u16) -> Action {
        if code < self.min_shift_reduce {
            Action::Shift(code)
        } else if code < self.min_reduce {
            Action::ShiftReduce(code - self.min_shift_reduce)
        } else if code < self.error_action {
            Action::Reduce(code - self.min_reduce)
        } else if code == self.error_action {
            Action::Error
        } else if code == self.accept_action {
            Action::Accept
        } else {
            Action::NoAction
        }
    }

    /// The action code that shifts into the pending-reduce pseudo-state for
    /// `rule`. Stored as a state on the stack after a shift-reduce.
    #[must_use]
    pub const fn pending_reduce(&self, rule: RuleId) -> StateId {
        self.min_reduce + rule
    }

    /// Looks `symbol` up in the packed region starting at `offset`.
    fn packed(&self, offset: i16, symbol: Symbol) -> Option<u16> {
        let slot = usize::try_from(i32::from(offset) + i32::from(symbol)).ok()?;
        let owner = *self.lookahead.get(slot)?;
        (Symbol::from(owner) == symbol).then(|| self.action[slot])
    }

    /// Action for `terminal` in `state`, or `None` when the table has no
    /// entry and the state's default applies.
    #[must_use]
    pub fn lookup_terminal(&self, state: StateId, terminal: Symbol) -> Option<u16> {
        let offset = *self.shift_offset.get(usize::from(state))?;
        self.packed(offset, terminal)
    }

    /// Goto action for `symbol` after a reduce uncovers `state`.
    ///
    /// States past the end of the goto offsets, and misses, use the
    /// default action.
    #[must_use]
    pub fn lookup_goto(&self, state: StateId, symbol: Symbol) -> u16 {
        self.reduce_offset
            .get(usize::from(state))
            .and_then(|&offset| self.packed(offset, symbol))
            .unwrap_or_else(|| self.default_for(state))
    }

    /// Default action for `state`.
    #[must_use]
    pub fn default_for(&self, state: StateId) -> u16 {
        self.default_action
            .get(usize::from(state))
            .copied()
            .unwrap_or(self.error_action)
    }

    /// Single-hop fallback for a terminal.
    #[must_use]
    pub fn fallback_for(&self, terminal: Symbol) -> Option<Symbol> {
        self.fallback
            .get(usize::from(terminal))
            .copied()
            .filter(|&target| target != 0)
            .map(Symbol::from)
    }

    /// Shape of `rule`.
    ///
    /// # Panics
    ///
    /// Panics if `rule` is not a rule of this grammar. Rule numbers only
    /// come out of [`GrammarTables::decode`] so this indicates corrupt
    /// tables.
    #[must_use]
    pub fn rule(&self, rule: RuleId) -> RuleInfo {
        self.rules[usize::from(rule)]
    }

    /// Printable name of a symbol.
    #[must_use]
    pub fn symbol_name(&self, symbol: Symbol) -> &'static str {
        self.symbol_names
            .get(usize::from(symbol))
            .copied()
            .unwrap_or("?")
    }

    /// Printable text of a rule.
    #[must_use]
    pub fn rule_name(&self, rule: RuleId) -> &'static str {
        self.rule_names.get(usize::from(rule)).copied().unwrap_or("?")
    }

    /// Returns true if `symbol` is a terminal.
    #[must_use]
    pub const fn is_terminal(&self, symbol: Symbol) -> bool {
        symbol < self.terminal_count
    }
}
