#![allow(dead_code)]

use std::sync::Arc;

use oxide_sql_lalr::ast::{Delete, Expr, Insert, Select, Statement, TableDef, TriggerDef, Update};
use oxide_sql_lalr::{parse_with, CountingAllocator, ParseError, Parsed, ParserConfig};

/// Parses with a counting allocator and checks that dropping the result
/// returns every node.
pub fn parse_counted(sql: &str, config: ParserConfig) -> Result<Parsed, ParseError> {
    let counter = Arc::new(CountingAllocator::new());
    let result = parse_with(sql, config, counter.clone());
    if let Err(e) = &result {
        assert_eq!(counter.live(), 0, "leaked nodes after error on: {sql}\n{e:?}");
    }
    result
}

pub fn parse_full(sql: &str) -> Parsed {
    oxide_sql_lalr::parse(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

/// Parses a statement that must not raise any diagnostic.
pub fn parse(sql: &str) -> Statement {
    let parsed = parse_full(sql);
    assert!(
        parsed.diagnostics.is_empty(),
        "Unexpected diagnostics for: {sql}\n{:?}",
        parsed.diagnostics
    );
    parsed
        .command
        .statement
        .unwrap_or_else(|| panic!("No statement for: {sql}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    oxide_sql_lalr::parse(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

/// The messages of every complaint raised on an otherwise accepted
/// statement.
pub fn complaints(sql: &str) -> Vec<String> {
    parse_full(sql)
        .diagnostics
        .into_iter()
        .map(|d| d.message)
        .collect()
}

pub fn parse_select(sql: &str) -> Box<Select> {
    match parse(sql) {
        Statement::Select(s) => s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn parse_insert(sql: &str) -> Box<Insert> {
    match parse(sql) {
        Statement::Insert(i) => i,
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

pub fn parse_update(sql: &str) -> Box<Update> {
    match parse(sql) {
        Statement::Update(u) => u,
        other => panic!("Expected UPDATE, got {other:?}"),
    }
}

pub fn parse_delete(sql: &str) -> Box<Delete> {
    match parse(sql) {
        Statement::Delete(d) => d,
        other => panic!("Expected DELETE, got {other:?}"),
    }
}

pub fn parse_table(sql: &str) -> Box<TableDef> {
    match parse(sql) {
        Statement::CreateTable(t) => t,
        other => panic!("Expected CREATE TABLE, got {other:?}"),
    }
}

pub fn parse_trigger(sql: &str) -> Box<TriggerDef> {
    match parse(sql) {
        Statement::CreateTrigger(t) => t,
        other => panic!("Expected CREATE TRIGGER, got {other:?}"),
    }
}

/// The single result column of `SELECT <expr>`.
pub fn parse_expr(expr: &str) -> Box<Expr> {
    let sql = format!("SELECT {expr}");
    let mut select = parse_select(&sql);
    assert_eq!(select.result.len(), 1, "Expected one column in: {sql}");
    select.result.items[0]
        .expr
        .take()
        .unwrap_or_else(|| panic!("Empty column in: {sql}"))
}

/// Result expressions of a query, in order.
pub fn columns(select: &Select) -> Vec<&Expr> {
    select.result.exprs().collect()
}
