//! What the engine does when the tables report a syntax error.

use super::stack::ValueStack;
use crate::grammar::{GrammarTables, Symbol};

/// Recovery policy, fixed by the grammar tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryPolicy {
    /// Give up on the first syntax error: drop the lookahead and every
    /// stack entry.
    Abandon,
    /// Pop until a state can shift this symbol, shift it, and carry on.
    ErrorSymbol(Symbol),
}

impl RecoveryPolicy {
    /// The policy the tables were built for.
    #[must_use]
    pub const fn for_tables(tables: &GrammarTables) -> Self {
        match tables.error_symbol {
            Some(symbol) => Self::ErrorSymbol(symbol),
            None => Self::Abandon,
        }
    }
}

/// Rate limiter for syntax error reports.
///
/// After an error, three tokens must be shifted before the next error is
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCounter(i32);

impl Default for ErrorCounter {
    fn default() -> Self {
        Self(-1)
    }
}

impl ErrorCounter {
    /// Grace period after an error.
    pub const GRACE: i32 = 3;

    /// Returns true if an error seen now should be reported.
    #[must_use]
    pub const fn should_report(self) -> bool {
        self.0 < 0
    }

    /// Starts a grace period.
    pub fn arm(&mut self) {
        self.0 = Self::GRACE;
    }

    /// Counts a successful shift.
    pub fn on_shift(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    /// Forgets past errors.
    pub fn clear(&mut self) {
        self.0 = -1;
    }

    /// Shifts left before errors are reported again.
    #[must_use]
    pub const fn remaining(self) -> i32 {
        self.0
    }
}

/// Finds the highest stack entry whose state can shift `error_symbol`.
///
/// Returns the entry's index and the action to take from it. Entries
/// above the index have to be popped first.
#[must_use]
pub fn find_error_state<V>(
    tables: &GrammarTables,
    stack: &ValueStack<V>,
    error_symbol: Symbol,
) -> Option<(usize, u16)> {
    stack
        .iter()
        .enumerate()
        .rev()
        .find_map(|(index, entry)| {
            let action = tables.lookup_goto(entry.state, error_symbol);
            (action < tables.min_reduce).then_some((index, action))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::SQL_GRAMMAR;

    #[test]
    fn test_sql_grammar_abandons() {
        assert_eq!(
            RecoveryPolicy::for_tables(&SQL_GRAMMAR),
            RecoveryPolicy::Abandon
        );
    }

    #[test]
    fn test_error_counter() {
        let mut counter = ErrorCounter::default();
        assert!(counter.should_report());
        counter.arm();
        assert!(!counter.should_report());
        for _ in 0..3 {
            counter.on_shift();
        }
        assert_eq!(counter.remaining(), 0);
        assert!(!counter.should_report());
        counter.on_shift();
        assert!(counter.should_report());
        counter.arm();
        counter.clear();
        assert!(counter.should_report());
    }
}
