//! Tests for the parser lifecycle: token feeding, reset, stack limits,
//! allocation failure and node accounting.

mod common;
use common::*;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use oxide_sql_lalr::{
    Command, CountingAllocator, DiagnosticKind, EngineState, Lexer, ParseError, ParserConfig,
    SqlParser, StackLimit, Statement, Status,
};

fn feed_all(parser: &mut SqlParser<'_>, sql: &str) -> Result<Status<Command>, ParseError> {
    let mut status = Status::Pending;
    for token in Lexer::new(sql).tokenize().expect("lexes") {
        status = parser.feed(token)?;
        if status.is_accepted() {
            break;
        }
    }
    Ok(status)
}

fn nested(depth: usize) -> String {
    format!("SELECT {}1{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn every_node_is_returned_after_success() {
    let counter = Arc::new(CountingAllocator::new());
    let sql = "WITH c AS (SELECT 1) SELECT a, b FROM t JOIN c ON t.x = c.y \
               WHERE a IN (1, 2, 3) ORDER BY b LIMIT 1";
    let parsed = oxide_sql_lalr::parse_with(sql, ParserConfig::default(), counter.clone()).unwrap();
    assert!(counter.live() > 0);
    assert!(counter.total() >= counter.live());
    drop(parsed);
    assert_eq!(counter.live(), 0);
}

#[test]
fn every_node_is_returned_after_syntax_error() {
    let counter = Arc::new(CountingAllocator::new());
    let sql = "SELECT a + (b FROM t";
    let mut parser = SqlParser::new(sql, ParserConfig::default(), counter.clone());
    let err = parser.parse_source().unwrap_err();
    assert!(matches!(err, ParseError::Syntax { .. }));
    assert_eq!(parser.state(), EngineState::Failed);
    assert_eq!(parser.depth(), 1);
    assert_eq!(counter.live(), 0);
}

#[test]
fn pending_table_is_dropped_on_error() {
    let counter = Arc::new(CountingAllocator::new());
    let sql = "CREATE TABLE t (a DEFAULT (1 + 2), b CHECK (b > 0) 7)";
    let mut parser = SqlParser::new(sql, ParserConfig::default(), counter.clone());
    assert!(parser.parse_source().is_err());
    assert_eq!(counter.live(), 0);
}

#[test]
fn accepted_statement_leaves_only_sentinel() {
    let sql = "SELECT 1 UNION SELECT 2";
    let counter = Arc::new(CountingAllocator::new());
    let mut parser = SqlParser::new(sql, ParserConfig::default(), counter.clone());
    let status = feed_all(&mut parser, sql).unwrap();
    let Status::Accepted(command) = status else {
        panic!("Expected the statement to be accepted");
    };
    assert!(command.statement.is_some());
    assert_eq!(parser.state(), EngineState::Accepted);
    assert_eq!(parser.depth(), 1);
    drop(command);
    assert_eq!(counter.live(), 0);
}

#[test]
fn feeding_after_accept_is_an_error() {
    let sql = "SELECT 1";
    let counter = Arc::new(CountingAllocator::new());
    let mut parser = SqlParser::new(sql, ParserConfig::default(), counter);
    assert!(parser.parse_source().is_ok());
    let again = Lexer::new(sql).next_token().unwrap();
    assert_eq!(parser.feed(again).unwrap_err(), ParseError::Finished);
}

#[test]
fn reset_allows_a_second_parse() {
    let sql = "SELECT a FROM t";
    let counter = Arc::new(CountingAllocator::new());
    let mut parser = SqlParser::new(sql, ParserConfig::default(), counter.clone());

    let first = parser.parse_source().unwrap();
    drop(first);
    parser.reset();
    assert_eq!(parser.state(), EngineState::Initial);

    let second = parser.parse_source().unwrap();
    assert!(second.statement.is_some());
    drop(second);
    assert_eq!(counter.live(), 0);
}

#[test]
fn reset_mid_statement_drops_partial_values() {
    let sql = "SELECT a, b, c FROM t WHERE a = 1";
    let counter = Arc::new(CountingAllocator::new());
    let mut parser = SqlParser::new(sql, ParserConfig::default(), counter.clone());
    let tokens = Lexer::new(sql).tokenize().unwrap();
    for token in &tokens[..8] {
        assert!(matches!(parser.feed(*token).unwrap(), Status::Pending));
    }
    assert!(parser.depth() > 1);
    assert!(counter.live() > 0);
    parser.reset();
    assert_eq!(parser.depth(), 1);
    assert_eq!(counter.live(), 0);
    assert!(parser.diagnostics().is_empty());
}

#[test]
fn missing_semicolon_is_supplied() {
    for sql in ["SELECT 1", "SELECT 1;", "SELECT 1 ;  "] {
        let parsed = parse_full(sql);
        assert!(parsed.command.statement.is_some(), "{sql}");
        assert!(parsed.diagnostics.is_empty(), "{sql}");
    }
}

#[test]
fn fixed_stack_overflows() {
    let config = ParserConfig::default().with_stack_limit(StackLimit::Fixed(20));
    let counter = Arc::new(CountingAllocator::new());
    let sql = nested(30);
    let mut parser = SqlParser::new(&sql, config, counter.clone());
    let err = parser.parse_source().unwrap_err();
    assert!(matches!(err, ParseError::StackOverflow { .. }));
    assert!(err.is_fatal());
    assert_eq!(parser.state(), EngineState::Failed);
    let fatal: Vec<_> = parser
        .diagnostics()
        .iter()
        .filter(|d| d.kind == DiagnosticKind::Fatal)
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(fatal, vec!["parser stack overflow"]);
    assert_eq!(counter.live(), 0);
}

#[test]
fn growable_stack_handles_deep_nesting() {
    let config = ParserConfig::default().with_stack_limit(StackLimit::Growable { initial: 4 });
    let parsed = parse_counted(&nested(200), config).unwrap();
    assert!(parsed.diagnostics.is_empty());
}

#[test]
fn deep_unary_chain_is_released() {
    let sql = format!("SELECT {}1", "- ".repeat(50_000));
    let config = ParserConfig::default().with_expr_depth_limit(100_000);
    let counter = Arc::new(CountingAllocator::new());
    let parsed = oxide_sql_lalr::parse_with(&sql, config, counter.clone()).unwrap();
    assert!(parsed.diagnostics.is_empty());
    assert!(counter.live() > 50_000);
    drop(parsed);
    assert_eq!(counter.live(), 0);
}

#[test]
fn deep_unary_chain_over_the_depth_limit_is_released() {
    let sql = format!("SELECT {}1", "- ".repeat(50_000));
    let counter = Arc::new(CountingAllocator::new());
    let parsed =
        oxide_sql_lalr::parse_with(&sql, ParserConfig::default(), counter.clone()).unwrap();
    assert!(parsed.command.statement.is_some());
    assert!(!parsed.diagnostics.is_empty());
    assert!(parsed
        .diagnostics
        .iter()
        .all(|d| d.message == "Expression tree is too large (maximum depth 1000)"));
    drop(parsed);
    assert_eq!(counter.live(), 0);
}

#[test]
fn long_compound_chain_is_released() {
    let arms = 50_000;
    let sql = format!("{}SELECT 1", "SELECT 1 UNION ".repeat(arms - 1));
    let config = ParserConfig::default().with_compound_select_limit(0);
    let counter = Arc::new(CountingAllocator::new());
    let parsed = oxide_sql_lalr::parse_with(&sql, config, counter.clone()).unwrap();
    assert!(parsed.diagnostics.is_empty());
    let Some(Statement::Select(select)) = &parsed.command.statement else {
        panic!("Expected a SELECT");
    };
    assert_eq!(select.compound_len(), arms);
    assert!(select.is_compound());
    drop(parsed);
    assert_eq!(counter.live(), 0);
}

#[test]
fn allocation_failure_is_fatal() {
    let counter = Arc::new(CountingAllocator::with_limit(3));
    let sql = "SELECT a, b, c, d FROM t WHERE a = 1";
    let mut parser = SqlParser::new(sql, ParserConfig::default(), counter.clone());
    let err = parser.parse_source().unwrap_err();
    assert!(matches!(err, ParseError::AllocationFailure(_)));
    assert!(err.is_fatal());
    assert!(parser
        .diagnostics()
        .iter()
        .any(|d| d.kind == DiagnosticKind::Fatal));
    assert_eq!(counter.live(), 0);
}

#[test]
fn reporter_sees_every_diagnostic() {
    let sql = "SELECT * FROM a RIGHT JOIN b ON 1 WHERE x IN (SELECT 1) AND #1";
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let counter = Arc::new(CountingAllocator::new());
    let mut parser = SqlParser::new(sql, ParserConfig::default(), counter);
    parser.set_reporter(move |d| sink.borrow_mut().push(d.message.clone()));
    let _ = parser.parse_source().unwrap();
    let messages: Vec<_> = parser.diagnostics().iter().map(|d| d.message.clone()).collect();
    assert_eq!(*seen.borrow(), messages);
    assert_eq!(messages.len(), 2);
}

#[test]
fn syntax_error_is_recorded_as_diagnostic() {
    let sql = "SELECT 1 2";
    let counter = Arc::new(CountingAllocator::new());
    let mut parser = SqlParser::new(sql, ParserConfig::default(), counter);
    let err = parser.parse_source().unwrap_err();
    let diagnostics = parser.take_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::Syntax);
    assert_eq!(diagnostics[0].message, err.to_string());
    assert_eq!(diagnostics[0].span.text(sql), "2");
    assert!(parser.diagnostics().is_empty());
}

#[test]
fn tracing_does_not_change_the_result() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
    let config = ParserConfig::default().with_trace("sql> ");
    let parsed = parse_counted("SELECT a FROM t WHERE b = 1", config).unwrap();
    assert!(parsed.command.statement.is_some());
}
