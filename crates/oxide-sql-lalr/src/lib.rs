//! # oxide-sql-lalr
//!
//! A table-driven LALR(1) SQL parser that builds an owned AST.
//!
//! This crate provides:
//! - A generic shift/reduce [`Engine`] driven by packed grammar tables,
//!   with fallback and wildcard tokens and a configurable recovery policy
//! - The compiled SQL grammar ([`grammar::SQL_GRAMMAR`]) and the actions
//!   that turn its 305 rules into [`ast`] nodes
//! - A lexer producing the engine's terminal stream
//! - Leak accounting through a pluggable [`NodeAllocator`]
//!
//! ## Parsing a statement
//!
//! ```rust
//! use oxide_sql_lalr::{parse, ExprOp, Statement};
//!
//! let parsed = parse("SELECT name FROM users WHERE id IN (7);").unwrap();
//! let Some(Statement::Select(select)) = parsed.command.statement else {
//!     panic!("expected a query");
//! };
//! assert_eq!(select.src.first_name(), Some("users"));
//! // A one-element IN list is folded into a comparison.
//! let filter = select.where_clause.as_deref().unwrap();
//! assert_eq!(filter.op, ExprOp::Eq);
//! ```
//!
//! ## Feeding tokens
//!
//! [`SqlParser`] accepts tokens one at a time and reports every
//! diagnostic to an optional callback:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use oxide_sql_lalr::{CountingAllocator, Lexer, ParserConfig, SqlParser, Status};
//!
//! let sql = "SELECT 1 UNION SELECT 2";
//! let allocator = Arc::new(CountingAllocator::new());
//! let mut parser = SqlParser::new(sql, ParserConfig::default(), allocator.clone());
//! for token in Lexer::new(sql).tokenize().unwrap() {
//!     if let Status::Accepted(command) = parser.feed(token).unwrap() {
//!         assert!(command.statement.is_some());
//!         drop(command);
//!         break;
//!     }
//! }
//! assert_eq!(allocator.live(), 0);
//! ```

pub mod actions;
pub mod alloc;
pub mod ast;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod grammar;
pub mod lexer;
pub mod parser;

pub use actions::SqlActions;
pub use alloc::{AllocError, CountingAllocator, NodeAllocator, NodeKind, SystemAllocator};
pub use ast::{Command, Expr, ExprOp, Select, Statement};
pub use config::{ParserConfig, StackLimit};
pub use context::ParseContext;
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use lexer::{Lexer, Span, Token};
pub use parser::{
    parse, parse_with, Actions, Engine, EngineState, ParseError, Parsed, SqlParser, Status,
};
