//! Iterative destruction of expression and select trees.
//!
//! Trees built from accepted input can be tens of thousands of levels
//! deep: a long run of unary operators, or a long compound chain. Dropping
//! them field by field would recurse once per level. Instead each node
//! detaches its children onto a [`Teardown`] list and the list is drained
//! in a loop, so every node is dropped with no children left to recurse
//! into.

use std::mem;

use super::expression::{Expr, ExprList, ExprPayload};
use super::select::Select;

/// Nodes waiting to be dropped.
#[derive(Default)]
pub(crate) struct Teardown {
    exprs: Vec<Box<Expr>>,
    selects: Vec<Box<Select>>,
}

impl Teardown {
    /// Queues an expression.
    pub(crate) fn expr(&mut self, expr: Option<Box<Expr>>) {
        self.exprs.extend(expr);
    }

    /// Queues every expression of a list, leaving the items in place.
    pub(crate) fn list(&mut self, list: &mut ExprList) {
        for item in &mut list.items {
            self.exprs.extend(item.expr.take());
        }
    }

    /// Queues a select.
    pub(crate) fn select(&mut self, select: Option<Box<Select>>) {
        self.selects.extend(select);
    }

    /// Drops everything queued, and everything queued while doing so.
    pub(crate) fn run(&mut self) {
        loop {
            if let Some(mut expr) = self.exprs.pop() {
                expr.detach(self);
            } else if let Some(mut select) = self.selects.pop() {
                select.detach(self);
            } else {
                break;
            }
        }
    }
}

impl Expr {
    /// Moves the operands and payload onto `teardown`.
    pub(crate) fn detach(&mut self, teardown: &mut Teardown) {
        teardown.expr(self.left.take());
        teardown.expr(self.right.take());
        match mem::take(&mut self.x) {
            ExprPayload::None => {}
            ExprPayload::List(mut list) => teardown.list(&mut list),
            ExprPayload::Select(select) => teardown.select(Some(select)),
        }
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none() && matches!(self.x, ExprPayload::None)
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        if self.is_leaf() {
            return;
        }
        let mut teardown = Teardown::default();
        self.detach(&mut teardown);
        teardown.run();
    }
}

impl Select {
    /// Moves every expression, subquery and prior arm onto `teardown`.
    pub(crate) fn detach(&mut self, teardown: &mut Teardown) {
        teardown.select(self.prior.take());
        teardown.list(&mut self.result);
        for list in [&mut self.group_by, &mut self.order_by].into_iter().flatten() {
            teardown.list(list);
        }
        for expr in [
            &mut self.where_clause,
            &mut self.having,
            &mut self.limit,
            &mut self.offset,
        ] {
            teardown.expr(expr.take());
        }
        for item in &mut self.src.items {
            teardown.select(item.select.take());
            teardown.expr(item.on.take());
            if let Some(args) = item.func_args.as_mut() {
                teardown.list(args);
            }
        }
        if let Some(with) = self.with.as_mut() {
            for cte in &mut with.ctes {
                teardown.select(cte.select.take());
                if let Some(columns) = cte.columns.as_mut() {
                    teardown.list(columns);
                }
            }
        }
    }
}

impl Drop for Select {
    fn drop(&mut self) {
        let mut teardown = Teardown::default();
        self.detach(&mut teardown);
        teardown.run();
    }
}
