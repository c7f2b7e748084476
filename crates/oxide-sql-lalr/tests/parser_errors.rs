//! Tests for parser error cases.

mod common;
use common::*;

use oxide_sql_lalr::{ParseError, Span};

fn syntax_message(sql: &str) -> String {
    match parse_err(sql) {
        ParseError::Syntax { message, .. } => message,
        other => panic!("Expected a syntax error for: {sql}, got {other:?}"),
    }
}

#[test]
fn error_unexpected_token() {
    assert_eq!(syntax_message("SELECT 1 2"), "near \"2\": syntax error");
    assert_eq!(syntax_message("TRUNCATE users"), "near \"TRUNCATE\": syntax error");
    assert_eq!(syntax_message("DELETE t"), "near \"t\": syntax error");
}

#[test]
fn error_span_points_at_token() {
    let sql = "SELECT 1 2";
    let err = parse_err(sql);
    let span = err.span().unwrap();
    assert_eq!(span, Span::new(9, 10));
    assert_eq!(span.text(sql), "2");
}

#[test]
fn error_incomplete_input() {
    for sql in ["SELECT (1", "SELECT (1 + 2", "SELECT * FROM", "INSERT INTO t VALUES"] {
        assert_eq!(syntax_message(sql), "unexpected end of input", "{sql}");
    }
}

#[test]
fn error_reserved_keyword() {
    assert_eq!(
        syntax_message("SELECT * FROM select"),
        "keyword \"select\" is reserved"
    );
    assert_eq!(syntax_message("SELECT FROM t"), "keyword \"FROM\" is reserved");
}

#[test]
fn error_second_statement() {
    assert_eq!(syntax_message("SELECT 1;;"), "near \";\": syntax error");
}

#[test]
fn error_unterminated_string() {
    let err = parse_err("SELECT 'abc");
    let ParseError::Lex(lex) = &err else {
        panic!("Expected a lexical error, got {err:?}");
    };
    assert_eq!(lex.text, "'abc");
    assert_eq!(err.to_string(), "unrecognized token: \"'abc\"");
    assert!(!err.is_fatal());
}

#[test]
fn error_malformed_number() {
    assert!(matches!(parse_err("SELECT 123abc"), ParseError::Lex(_)));
}

#[test]
fn error_is_not_fatal() {
    assert!(!parse_err("SELECT 1 2").is_fatal());
}
