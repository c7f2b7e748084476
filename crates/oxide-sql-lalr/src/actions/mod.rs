//! Grammar actions for the SQL dialect.
//!
//! [`SqlActions`] plugs the SQL grammar into the [`Engine`](crate::parser::Engine):
//! each reduce builds an AST fragment from the right-hand side values and
//! leaves it on the stack for the enclosing rule. Rules are grouped by
//! what they build; [`Rhs`] moves the values out of the stack slice.

mod command;
mod ddl;
mod expr;
mod select;
mod trigger;

use std::mem;

use crate::alloc::AllocError;
use crate::ast::{
    Expr, ExprList, ExprSpan, IdList, IndexedBy, LikeOp, Limit, RefArg, Select, SemanticValue,
    SrcList, Statement, TriggerEvent, TriggerStep, With,
};
use crate::context::ParseContext;
use crate::grammar::{GrammarTables, RuleId, Symbol, SQL_GRAMMAR};
use crate::lexer::{Span, Token};
use crate::parser::{Actions, StackEntry};

/// The right-hand side of a rule being reduced.
///
/// Values are moved out, leaving [`SemanticValue::Empty`] behind for the
/// engine to drop. Positions past the end read as empty.
pub(crate) struct Rhs<'s> {
    entries: &'s mut [StackEntry<SemanticValue>],
}

impl<'s> Rhs<'s> {
    pub(crate) fn new(entries: &'s mut [StackEntry<SemanticValue>]) -> Self {
        Self { entries }
    }

    pub(crate) fn take(&mut self, i: usize) -> SemanticValue {
        self.entries
            .get_mut(i)
            .map(|entry| mem::take(&mut entry.value))
            .unwrap_or_default()
    }

    /// Terminal code or nonterminal id at `i`.
    pub(crate) fn major(&self, i: usize) -> Symbol {
        self.entries.get(i).map_or(0, |entry| entry.major)
    }

    pub(crate) fn token(&self, i: usize) -> Token {
        self.entries
            .get(i)
            .and_then(|entry| entry.value.token())
            .unwrap_or_default()
    }

    /// Span of the token at `i`.
    pub(crate) fn span(&self, i: usize) -> Span {
        self.token(i).span
    }

    pub(crate) fn int(&self, i: usize) -> i32 {
        self.entries.get(i).map_or(0, |entry| entry.value.int())
    }

    pub(crate) fn flag(&self, i: usize) -> bool {
        self.int(i) != 0
    }

    pub(crate) fn expr(&mut self, i: usize) -> ExprSpan {
        self.take(i).into_expr_span()
    }

    pub(crate) fn opt_expr(&mut self, i: usize) -> Option<Box<Expr>> {
        self.take(i).into_expr()
    }

    pub(crate) fn list(&mut self, i: usize) -> Option<ExprList> {
        self.take(i).into_expr_list()
    }

    pub(crate) fn select(&mut self, i: usize) -> Option<Box<Select>> {
        self.take(i).into_select()
    }

    pub(crate) fn id_list(&mut self, i: usize) -> Option<IdList> {
        self.take(i).into_id_list()
    }

    pub(crate) fn src_list(&mut self, i: usize) -> Option<SrcList> {
        self.take(i).into_src_list()
    }

    pub(crate) fn with(&mut self, i: usize) -> Option<With> {
        self.take(i).into_with()
    }

    pub(crate) fn limit(&mut self, i: usize) -> Limit {
        self.take(i).into_limit()
    }

    pub(crate) fn steps(&mut self, i: usize) -> Vec<TriggerStep> {
        self.take(i).into_trigger_steps()
    }

    pub(crate) fn statement(&mut self, i: usize) -> Option<Box<Statement>> {
        self.take(i).into_statement()
    }

    pub(crate) fn indexed_by(&mut self, i: usize) -> IndexedBy {
        match self.take(i) {
            SemanticValue::IndexedBy(indexed) => indexed,
            _ => IndexedBy::Default,
        }
    }

    pub(crate) fn trigger_event(&mut self, i: usize) -> Option<TriggerEvent> {
        match self.take(i) {
            SemanticValue::TriggerEvent(event) => Some(event),
            _ => None,
        }
    }

    pub(crate) fn like_op(&self, i: usize) -> Option<LikeOp> {
        match self.entries.get(i).map(|entry| &entry.value) {
            Some(SemanticValue::LikeOp(op)) => Some(*op),
            _ => None,
        }
    }

    pub(crate) fn ref_arg(&self, i: usize) -> RefArg {
        match self.entries.get(i).map(|entry| &entry.value) {
            Some(SemanticValue::RefArg(arg)) => *arg,
            _ => RefArg::default(),
        }
    }
}

/// Builds the AST for the SQL grammar.
#[derive(Debug)]
pub struct SqlActions<'a> {
    ctx: ParseContext<'a>,
}

impl<'a> SqlActions<'a> {
    /// Wraps a parse context.
    #[must_use]
    pub const fn new(ctx: ParseContext<'a>) -> Self {
        Self { ctx }
    }

    /// The parse context.
    #[must_use]
    pub const fn context(&self) -> &ParseContext<'a> {
        &self.ctx
    }

    /// The parse context, mutably.
    pub fn context_mut(&mut self) -> &mut ParseContext<'a> {
        &mut self.ctx
    }
}

impl Actions for SqlActions<'_> {
    type Value = SemanticValue;

    fn tables(&self) -> &'static GrammarTables {
        &SQL_GRAMMAR
    }

    fn shift_value(&mut self, token: &Token) -> SemanticValue {
        if !token.span.is_empty() {
            self.ctx.last_shifted = token.span;
        }
        SemanticValue::Token(*token)
    }

    fn reduce(
        &mut self,
        rule: RuleId,
        rhs: &mut [StackEntry<SemanticValue>],
    ) -> Result<SemanticValue, AllocError> {
        let mut rhs = Rhs::new(rhs);
        let ctx = &mut self.ctx;
        match rule {
            0..=12 | 73..=78 | 131 | 134..=146 | 205..=222 | 248..=254 | 262..=269 => {
                command::reduce(ctx, rule, &mut rhs)
            }
            13..=72 | 255 | 256 | 270..=286 | 293..=298 | 303 | 304 => {
                ddl::reduce(ctx, rule, &mut rhs)
            }
            79..=130 | 132 | 133 | 257..=261 | 287..=290 => select::reduce(ctx, rule, &mut rhs),
            147..=204 | 243..=247 | 291 | 292 => expr::reduce(ctx, rule, &mut rhs),
            223..=242 | 299..=302 => trigger::reduce(ctx, rule, &mut rhs),
            _ => Ok(rhs.take(0)),
        }
    }

    fn syntax_error(&mut self, token: &Token, fallback_failed: bool) -> String {
        self.ctx.syntax_error(token, fallback_failed)
    }

    fn stack_overflow(&mut self, _depth: usize) {
        let at = Span::empty_at(self.ctx.last_shifted.end);
        self.ctx.fatal("parser stack overflow", at);
    }

    fn allocation_failure(&mut self, error: &AllocError) {
        let at = Span::empty_at(self.ctx.last_shifted.end);
        self.ctx.fatal(error.to_string(), at);
    }

    fn abandon(&mut self) {
        self.ctx.clear_pending();
    }

    fn reset(&mut self) {
        self.ctx.reset();
    }
}

/// Value of an empty right-hand side, or of the first symbol otherwise.
pub(crate) fn pass(rhs: &mut Rhs<'_>) -> SemanticValue {
    rhs.take(0)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::alloc::CountingAllocator;
    use crate::config::ParserConfig;
    use crate::grammar::tk;

    #[test]
    fn test_rhs_reads_past_the_end_as_empty() {
        let mut entries = vec![StackEntry::new(
            3,
            tk::ID,
            SemanticValue::Token(Token::new(tk::ID, Span::new(0, 1))),
        )];
        let mut rhs = Rhs::new(&mut entries);
        assert_eq!(rhs.token(0).span, Span::new(0, 1));
        assert_eq!(rhs.major(0), tk::ID);
        assert_eq!(rhs.int(4), 0);
        assert!(rhs.select(2).is_none());
        assert_eq!(rhs.take(0).variant(), "token");
        assert_eq!(rhs.take(0).variant(), "empty");
    }

    #[test]
    fn test_shift_records_last_token() {
        let ctx = ParseContext::new(
            "SELECT 1",
            ParserConfig::default(),
            Arc::new(CountingAllocator::new()),
        );
        let mut actions = SqlActions::new(ctx);
        let value = actions.shift_value(&Token::new(tk::INTEGER, Span::new(7, 8)));
        assert_eq!(value.token().map(|t| t.code), Some(tk::INTEGER));
        actions.shift_value(&Token::new(tk::SEMI, Span::empty_at(8)));
        assert_eq!(actions.context().last_shifted, Span::new(7, 8));
    }
}
