//! The shift/reduce automaton.

use std::fmt;

use super::error::ParseError;
use super::recovery::{find_error_state, ErrorCounter, RecoveryPolicy};
use super::stack::{Room, StackEntry, StackFull, StackLimit, ValueStack};
use crate::alloc::AllocError;
use crate::grammar::{tk, Action, GrammarTables, RuleId, StateId, Symbol};
use crate::lexer::{Span, Token};

/// Per-grammar semantics plugged into the [`Engine`].
pub trait Actions {
    /// Semantic value stored on the stack. `Default` is the empty value.
    type Value: Default;

    /// Tables driving the automaton.
    fn tables(&self) -> &'static GrammarTables;

    /// Value pushed when a terminal is shifted.
    fn shift_value(&mut self, token: &Token) -> Self::Value;

    /// Runs the action for `rule`.
    ///
    /// `rhs` holds the rule's right-hand side entries, leftmost first.
    /// Values the action wants to keep must be moved out; whatever is
    /// left is dropped by the engine.
    ///
    /// # Errors
    ///
    /// An [`AllocError`] aborts the whole parse.
    fn reduce(
        &mut self,
        rule: RuleId,
        rhs: &mut [StackEntry<Self::Value>],
    ) -> Result<Self::Value, AllocError>;

    /// Reports a syntax error at `token` and returns its message.
    fn syntax_error(&mut self, token: &Token, fallback_failed: bool) -> String;

    /// Reports that the stack overflowed at `depth`.
    fn stack_overflow(&mut self, depth: usize);

    /// Reports that the allocator refused a node.
    fn allocation_failure(&mut self, _error: &AllocError) {}

    /// Called once the parse is abandoned, after the stack is emptied.
    /// Anything built outside the stack must be dropped here.
    fn abandon(&mut self) {}

    /// Clears per-statement state.
    fn reset(&mut self) {}
}

/// Where the engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Nothing fed since creation or reset.
    Initial,
    /// The last token was shifted.
    Shifting,
    /// In the middle of a reduce chain.
    Reducing,
    /// A statement was accepted.
    Accepted,
    /// The parse was abandoned.
    Failed,
}

/// Outcome of feeding one token.
#[derive(Debug)]
pub enum Status<V> {
    /// The token was consumed; feed the next one.
    Pending,
    /// The input formed a complete sentence.
    Accepted(V),
}

impl<V> Status<V> {
    /// Returns true if a statement was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Table-driven LALR(1) parser.
///
/// Feed it one token at a time with [`Engine::feed`] and close the
/// input with [`Engine::finish`].
pub struct Engine<A: Actions> {
    actions: A,
    tables: &'static GrammarTables,
    policy: RecoveryPolicy,
    stack: ValueStack<A::Value>,
    state: EngineState,
    errors: ErrorCounter,
    fallback_failed: bool,
    last_error: Option<(String, Span)>,
    last_end: usize,
    trace: Option<String>,
}

impl<A: Actions> Engine<A> {
    /// Creates an engine in the `Initial` state.
    pub fn new(actions: A, limit: StackLimit) -> Self {
        let tables = actions.tables();
        Self {
            actions,
            tables,
            policy: RecoveryPolicy::for_tables(tables),
            stack: ValueStack::new(limit),
            state: EngineState::Initial,
            errors: ErrorCounter::default(),
            fallback_failed: false,
            last_error: None,
            last_end: 0,
            trace: None,
        }
    }

    /// Enables tracing of every decision, prefixed with `prompt`.
    #[must_use]
    pub fn with_trace(mut self, prompt: Option<String>) -> Self {
        self.trace = prompt;
        self
    }

    /// The rule actions.
    pub const fn actions(&self) -> &A {
        &self.actions
    }

    /// The rule actions, mutably.
    pub fn actions_mut(&mut self) -> &mut A {
        &mut self.actions
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> EngineState {
        self.state
    }

    /// Stack depth, sentinel included.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// The recovery policy in force.
    pub const fn policy(&self) -> RecoveryPolicy {
        self.policy
    }

    /// Drops every stack value and returns to `Initial`.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.state = EngineState::Initial;
        self.errors.clear();
        self.fallback_failed = false;
        self.last_error = None;
        self.last_end = 0;
        self.actions.reset();
    }

    /// Feeds the end-of-input symbol.
    ///
    /// # Errors
    ///
    /// See [`Engine::feed`].
    pub fn finish(&mut self) -> Result<Status<A::Value>, ParseError> {
        let eof = Token::new(tk::EOF, Span::empty_at(self.last_end));
        self.feed(tk::EOF, eof)
    }

    /// Processes one token: reduces as far as the lookahead allows, then
    /// shifts it, accepts, or fails.
    ///
    /// # Errors
    ///
    /// - [`ParseError::Syntax`] when recovery gives up;
    /// - [`ParseError::StackOverflow`] and [`ParseError::AllocationFailure`],
    ///   which are always fatal;
    /// - [`ParseError::Finished`] after an accept or failure.
    pub fn feed(&mut self, symbol: Symbol, token: Token) -> Result<Status<A::Value>, ParseError> {
        if matches!(self.state, EngineState::Accepted | EngineState::Failed) {
            return Err(ParseError::Finished);
        }
        let tables = self.tables;
        self.last_end = self.last_end.max(token.span.end);
        self.fallback_failed = false;
        self.trace_input(symbol);

        let mut error_hit = false;
        loop {
            let action = self.find_shift_action(symbol);
            match tables.decode(action) {
                Action::Shift(_) | Action::ShiftReduce(_) => {
                    let value = self.actions.shift_value(&token);
                    self.shift(action, symbol, value)?;
                    self.errors.on_shift();
                    self.state = EngineState::Shifting;
                    self.trace_stack();
                    return Ok(Status::Pending);
                }
                Action::Reduce(rule) => {
                    self.state = EngineState::Reducing;
                    if let Some(value) = self.reduce(rule)? {
                        return Ok(Status::Accepted(value));
                    }
                }
                Action::Accept => {
                    // Only reachable through a goto; kept total for
                    // hand-built tables.
                    let value = self
                        .stack
                        .pop()
                        .map(|entry| entry.value)
                        .unwrap_or_default();
                    return Ok(Status::Accepted(self.accept(value)));
                }
                Action::Error | Action::NoAction => {
                    self.trace(format_args!("Syntax Error!"));
                    match self.policy {
                        RecoveryPolicy::Abandon => {
                            let message = self.actions.syntax_error(&token, self.fallback_failed);
                            return Err(self.fail(message, token.span));
                        }
                        RecoveryPolicy::ErrorSymbol(error_symbol) => {
                            if !self.recover(error_symbol, symbol, &token, &mut error_hit)? {
                                self.trace_stack();
                                return Ok(Status::Pending);
                            }
                        }
                    }
                }
            }
        }
    }

    /// Resolves the action for `lookahead` in the top state: direct
    /// lookup, then the fallback terminal, then the wildcard, then the
    /// state's default.
    fn find_shift_action(&mut self, lookahead: Symbol) -> u16 {
        let tables = self.tables;
        let state = self.stack.top().state;
        if state >= tables.min_reduce {
            return state;
        }
        if let Some(action) = tables.lookup_terminal(state, lookahead) {
            return action;
        }
        let resolved = match tables.fallback_for(lookahead) {
            Some(fallback) => {
                self.trace(format_args!(
                    "FALLBACK {} => {}",
                    tables.symbol_name(lookahead),
                    tables.symbol_name(fallback)
                ));
                if let Some(action) = tables.lookup_terminal(state, fallback) {
                    return action;
                }
                fallback
            }
            None => lookahead,
        };
        // Fallbacks are a single hop, so there is nothing left to try.
        self.fallback_failed = true;
        if resolved != tk::EOF {
            if let Some(wildcard) = tables.wildcard {
                if let Some(action) = tables.lookup_terminal(state, wildcard) {
                    self.trace(format_args!(
                        "WILDCARD {} => {}",
                        tables.symbol_name(resolved),
                        tables.symbol_name(wildcard)
                    ));
                    return action;
                }
            }
        }
        tables.default_for(state)
    }

    /// Pushes `value` for `major`. Shift-reduce codes become a pending
    /// reduce state.
    fn shift(&mut self, action: u16, major: Symbol, value: A::Value) -> Result<(), ParseError> {
        let tables = self.tables;
        let state = if action >= tables.min_shift_reduce {
            action + (tables.min_reduce - tables.min_shift_reduce)
        } else {
            action
        };
        match self.stack.push(StackEntry::new(state, major, value)) {
            Ok(room) => {
                self.trace_growth(room);
                self.trace_shift(state, major);
                Ok(())
            }
            Err(full) => Err(self.overflow(full)),
        }
    }

    /// Reduces by `rule`. Returns the accepted value when the goto is the
    /// accept action.
    fn reduce(&mut self, rule: RuleId) -> Result<Option<A::Value>, ParseError> {
        let tables = self.tables;
        let info = tables.rule(rule);
        let size = usize::from(info.rhs_len);
        let uncovered = self.stack.peek(size).map_or(0, |entry| entry.state);
        if size == 0 {
            self.trace(format_args!(
                "Reduce {rule} [{}].",
                tables.rule_name(rule)
            ));
            match self.stack.reserve_one() {
                Ok(room) => self.trace_growth(room),
                Err(full) => return Err(self.overflow(full)),
            }
        } else {
            self.trace(format_args!(
                "Reduce {rule} [{}], pop back to state {uncovered}.",
                tables.rule_name(rule)
            ));
        }

        let depth = self.stack.depth();
        let value = match self.actions.reduce(rule, self.stack.top_mut_slice(size)) {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!(%error, "allocation failure, abandoning parse");
                self.stack.clear();
                self.state = EngineState::Failed;
                self.actions.allocation_failure(&error);
                self.actions.abandon();
                return Err(ParseError::AllocationFailure(error));
            }
        };
        self.stack.truncate(depth - size);

        let goto = tables.lookup_goto(uncovered, info.lhs);
        if goto == tables.accept_action {
            return Ok(Some(self.accept(value)));
        }
        self.shift(goto, info.lhs, value)?;
        Ok(None)
    }

    fn accept(&mut self, value: A::Value) -> A::Value {
        self.trace(format_args!("Accept!"));
        self.errors.clear();
        self.state = EngineState::Accepted;
        value
    }

    /// Error-symbol recovery. Returns `Ok(true)` if the lookahead should
    /// be retried and `Ok(false)` if it was discarded.
    fn recover(
        &mut self,
        error_symbol: Symbol,
        lookahead: Symbol,
        token: &Token,
        error_hit: &mut bool,
    ) -> Result<bool, ParseError> {
        if self.errors.should_report() {
            let message = self.actions.syntax_error(token, self.fallback_failed);
            self.last_error = Some((message, token.span));
        }
        let retry = if self.stack.top().major == error_symbol || *error_hit {
            if lookahead == tk::EOF {
                return Err(self.fail_with_last(token.span));
            }
            self.trace(format_args!(
                "Discard input token {}",
                self.tables.symbol_name(lookahead)
            ));
            false
        } else {
            match find_error_state(self.tables, &self.stack, error_symbol) {
                Some((index, action)) if lookahead != tk::EOF => {
                    while self.stack.depth() > index + 1 {
                        self.pop();
                    }
                    let value = self.actions.shift_value(token);
                    self.shift(action, error_symbol, value)?;
                    true
                }
                _ => return Err(self.fail_with_last(token.span)),
            }
        };
        self.errors.arm();
        *error_hit = true;
        Ok(retry)
    }

    fn pop(&mut self) {
        if let Some(entry) = self.stack.pop() {
            self.trace(format_args!(
                "Popping {}",
                self.tables.symbol_name(entry.major)
            ));
        }
    }

    fn fail(&mut self, message: String, span: Span) -> ParseError {
        self.trace(format_args!("Fail!"));
        while self.stack.depth() > 1 {
            self.pop();
        }
        self.errors.clear();
        self.state = EngineState::Failed;
        self.actions.abandon();
        ParseError::Syntax { message, span }
    }

    fn fail_with_last(&mut self, span: Span) -> ParseError {
        let (message, span) = self
            .last_error
            .take()
            .unwrap_or_else(|| ("syntax error".to_string(), span));
        self.fail(message, span)
    }

    fn overflow(&mut self, full: StackFull) -> ParseError {
        self.trace(format_args!("Stack Overflow!"));
        tracing::debug!(depth = full.depth, "parser stack overflow");
        while self.stack.depth() > 1 {
            self.pop();
        }
        self.state = EngineState::Failed;
        self.actions.stack_overflow(full.depth);
        self.actions.abandon();
        ParseError::StackOverflow { depth: full.depth }
    }

    fn trace(&self, args: fmt::Arguments<'_>) {
        if let Some(prompt) = &self.trace {
            tracing::trace!("{prompt}{args}");
        }
    }

    fn trace_input(&self, symbol: Symbol) {
        if self.trace.is_none() {
            return;
        }
        let state = self.stack.top().state;
        let name = self.tables.symbol_name(symbol);
        if state < self.tables.min_reduce {
            self.trace(format_args!("Input '{name}' in state {state}"));
        } else {
            self.trace(format_args!(
                "Input '{name}' with pending reduce {}",
                state - self.tables.min_reduce
            ));
        }
    }

    fn trace_shift(&self, state: StateId, major: Symbol) {
        let name = self.tables.symbol_name(major);
        if state < self.tables.state_count {
            self.trace(format_args!("Shift '{name}', go to state {state}"));
        } else {
            self.trace(format_args!(
                "Shift '{name}', pending reduce {}",
                state - self.tables.min_reduce
            ));
        }
    }

    fn trace_growth(&self, room: Room) {
        if let Room::Grew { from, to } = room {
            self.trace(format_args!("Stack grows from {from} to {to} entries."));
        }
    }

    fn trace_stack(&self) {
        if self.trace.is_none() {
            return;
        }
        let names: Vec<&str> = self
            .stack
            .iter()
            .skip(1)
            .map(|entry| self.tables.symbol_name(entry.major))
            .collect();
        self.trace(format_args!("Return. Stack=[{}]", names.join(" ")));
    }
}

impl<A: Actions + fmt::Debug> fmt::Debug for Engine<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("actions", &self.actions)
            .field("state", &self.state)
            .field("depth", &self.stack.depth())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::RuleInfo;

    // $ SEMI NUM PLUS | error | program stmts stmt
    const SEMI: Symbol = 1;
    const NUM: Symbol = 2;
    const PLUS: Symbol = 3;
    const ERROR: Symbol = 4;

    /// program ::= stmts. stmts ::= stmts stmt. stmts ::= stmt.
    /// stmt ::= NUM SEMI. stmt ::= error SEMI.
    ///
    /// With a wildcard, state 3 (after NUM) also accepts it in place of
    /// SEMI.
    fn toy_grammar(
        error_symbol: Option<Symbol>,
        wildcard: Option<Symbol>,
    ) -> &'static GrammarTables {
        const FILL: u8 = u8::MAX;
        let mut action = vec![18u16; 48];
        let mut lookahead = vec![FILL; 48];
        if let Some(any) = wildcard {
            action[16 + usize::from(any)] = 9;
            lookahead[16 + usize::from(any)] = u8::try_from(any).unwrap();
        }
        for (slot, code, symbol) in [
            (2, 3, NUM),
            (8, 11, 0),
            (10, 3, NUM),
            (17, 9, SEMI),
            (25, 10, SEMI),
            (36, 4, ERROR),
            (37, 17, 5),
            (38, 1, 6),
            (39, 2, 7),
            (44, 4, ERROR),
            (47, 5, 7),
        ] {
            action[slot] = code;
            lookahead[slot] = u8::try_from(symbol).unwrap();
        }
        Box::leak(Box::new(GrammarTables {
            state_count: 6,
            rule_count: 5,
            terminal_count: 4,
            symbol_count: 8,
            min_shift_reduce: 6,
            min_reduce: 11,
            error_action: 16,
            accept_action: 17,
            no_action: 18,
            wildcard,
            error_symbol,
            action: action.leak(),
            lookahead: lookahead.leak(),
            shift_offset: vec![0i16, 8, 48, 16, 24, 48].leak(),
            reduce_offset: vec![32i16, 40].leak(),
            default_action: vec![16u16, 16, 13, 16, 16, 12].leak(),
            fallback: &[],
            rules: vec![
                RuleInfo::new(5, 1),
                RuleInfo::new(6, 2),
                RuleInfo::new(6, 1),
                RuleInfo::new(7, 2),
                RuleInfo::new(7, 2),
            ]
            .leak(),
            symbol_names: &[
                "$", "SEMI", "NUM", "PLUS", "error", "program", "stmts", "stmt",
            ],
            rule_names: &[
                "program ::= stmts",
                "stmts ::= stmts stmt",
                "stmts ::= stmt",
                "stmt ::= NUM SEMI",
                "stmt ::= error SEMI",
            ],
        }))
    }

    /// Counts valid statements and logs what happened.
    #[derive(Debug)]
    struct Counter {
        tables: &'static GrammarTables,
        reduced: Vec<RuleId>,
        errors: Vec<String>,
        overflows: usize,
    }

    impl Counter {
        fn new(error_symbol: Option<Symbol>) -> Self {
            Self::with_tables(toy_grammar(error_symbol, None))
        }

        fn with_tables(tables: &'static GrammarTables) -> Self {
            Self {
                tables,
                reduced: Vec::new(),
                errors: Vec::new(),
                overflows: 0,
            }
        }
    }

    impl Actions for Counter {
        type Value = i64;

        fn tables(&self) -> &'static GrammarTables {
            self.tables
        }

        fn shift_value(&mut self, _token: &Token) -> i64 {
            0
        }

        fn reduce(&mut self, rule: RuleId, rhs: &mut [StackEntry<i64>]) -> Result<i64, AllocError> {
            assert_eq!(rhs.len(), usize::from(self.tables.rule(rule).rhs_len));
            self.reduced.push(rule);
            Ok(match rule {
                0 | 2 => rhs[0].value,
                1 => rhs[0].value + rhs[1].value,
                3 => 1,
                _ => 0,
            })
        }

        fn syntax_error(&mut self, token: &Token, _fallback_failed: bool) -> String {
            let message = format!("near {}", self.tables.symbol_name(token.code));
            self.errors.push(message.clone());
            message
        }

        fn stack_overflow(&mut self, _depth: usize) {
            self.overflows += 1;
        }
    }

    fn tok(code: Symbol, at: usize) -> Token {
        Token::new(code, Span::new(at, at + 1))
    }

    fn run(engine: &mut Engine<Counter>, input: &[Symbol]) -> Result<Status<i64>, ParseError> {
        for (i, &symbol) in input.iter().enumerate() {
            match engine.feed(symbol, tok(symbol, i))? {
                Status::Pending => {}
                accepted @ Status::Accepted(_) => return Ok(accepted),
            }
        }
        engine.finish()
    }

    #[test]
    fn test_accepts_and_unwinds() {
        let mut engine = Engine::new(Counter::new(None), StackLimit::Fixed(10));
        assert_eq!(engine.state(), EngineState::Initial);
        let status = run(&mut engine, &[NUM, SEMI, NUM, SEMI]).unwrap();
        assert!(matches!(status, Status::Accepted(2)));
        assert_eq!(engine.state(), EngineState::Accepted);
        assert_eq!(engine.depth(), 1);
        assert_eq!(engine.actions().reduced, vec![3, 2, 3, 1, 0]);
    }

    #[test]
    fn test_feed_after_accept_is_refused() {
        let mut engine = Engine::new(Counter::new(None), StackLimit::Fixed(10));
        run(&mut engine, &[NUM, SEMI]).unwrap();
        assert_eq!(engine.feed(NUM, tok(NUM, 0)).unwrap_err(), ParseError::Finished);
        engine.reset();
        assert_eq!(engine.state(), EngineState::Initial);
        assert!(run(&mut engine, &[NUM, SEMI]).unwrap().is_accepted());
    }

    #[test]
    fn test_abandon_policy_fails_on_first_error() {
        let mut engine = Engine::new(Counter::new(None), StackLimit::Fixed(10));
        assert_eq!(engine.policy(), RecoveryPolicy::Abandon);
        engine.feed(NUM, tok(NUM, 0)).unwrap();
        let err = engine.feed(PLUS, tok(PLUS, 1)).unwrap_err();
        assert_eq!(err, ParseError::syntax("near PLUS", Span::new(1, 2)));
        assert_eq!(engine.state(), EngineState::Failed);
        assert_eq!(engine.depth(), 1);
    }

    #[test]
    fn test_error_symbol_recovery_resynchronizes() {
        let mut engine = Engine::new(Counter::new(Some(ERROR)), StackLimit::Fixed(10));
        assert_eq!(engine.policy(), RecoveryPolicy::ErrorSymbol(ERROR));
        let status = run(&mut engine, &[NUM, PLUS, SEMI, NUM, SEMI]).unwrap();
        assert!(matches!(status, Status::Accepted(1)));
        assert_eq!(engine.actions().errors, vec!["near PLUS".to_string()]);
        assert_eq!(engine.actions().reduced, vec![4, 2, 3, 1, 0]);
        assert_eq!(engine.depth(), 1);
    }

    #[test]
    fn test_errors_are_rate_limited() {
        let mut engine = Engine::new(Counter::new(Some(ERROR)), StackLimit::Fixed(10));
        // Second PLUS falls inside the grace period.
        let status = run(&mut engine, &[PLUS, PLUS, SEMI, NUM, SEMI]).unwrap();
        assert!(matches!(status, Status::Accepted(1)));
        assert_eq!(engine.actions().errors.len(), 1);
    }

    #[test]
    fn test_recovery_gives_up_at_end_of_input() {
        let mut engine = Engine::new(Counter::new(Some(ERROR)), StackLimit::Fixed(10));
        engine.feed(PLUS, tok(PLUS, 0)).unwrap();
        let err = engine.finish().unwrap_err();
        assert_eq!(err, ParseError::syntax("near PLUS", Span::new(0, 1)));
        assert_eq!(engine.state(), EngineState::Failed);
        assert_eq!(engine.depth(), 1);
    }

    #[test]
    fn test_fixed_stack_overflows() {
        let mut engine = Engine::new(Counter::new(None), StackLimit::Fixed(2));
        engine.feed(NUM, tok(NUM, 0)).unwrap();
        let err = engine.feed(SEMI, tok(SEMI, 1)).unwrap_err();
        assert_eq!(err, ParseError::StackOverflow { depth: 2 });
        assert_eq!(engine.actions().overflows, 1);
        assert_eq!(engine.state(), EngineState::Failed);
        assert_eq!(engine.depth(), 1);
    }

    #[test]
    fn test_growable_stack_grows() {
        let mut engine = Engine::new(Counter::new(None), StackLimit::Growable { initial: 1 });
        let status = run(&mut engine, &[NUM, SEMI, NUM, SEMI, NUM, SEMI]).unwrap();
        assert!(matches!(status, Status::Accepted(3)));
    }

    #[test]
    fn test_wildcard_matches_unknown_lookahead() {
        let tables = toy_grammar(None, Some(PLUS));
        let mut engine = Engine::new(Counter::with_tables(tables), StackLimit::Fixed(10));
        // NUM has no entry after NUM, so the wildcard slot closes the
        // statement
        assert_eq!(tables.lookup_terminal(3, NUM), None);
        let status = run(&mut engine, &[NUM, NUM, NUM, SEMI]).unwrap();
        assert!(matches!(status, Status::Accepted(2)));
        assert!(engine.actions().errors.is_empty());
    }

    #[test]
    fn test_wildcard_never_matches_end_of_input() {
        let tables = toy_grammar(None, Some(PLUS));
        let mut engine = Engine::new(Counter::with_tables(tables), StackLimit::Fixed(10));
        engine.feed(NUM, tok(NUM, 0)).unwrap();
        // end of input falls through to the state default, a syntax error
        assert_eq!(tables.decode(tables.default_for(3)), Action::Error);
        let err = engine.finish().unwrap_err();
        assert_eq!(err, ParseError::syntax("near $", Span::empty_at(1)));
        assert_eq!(engine.actions().errors, vec!["near $".to_string()]);
        assert_eq!(engine.state(), EngineState::Failed);
    }
}
