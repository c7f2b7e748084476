//! SQL Parser
//!
//! A table-driven LALR(1) engine. The automaton in [`Engine`] is generic
//! over its [`Actions`]; [`SqlParser`] pairs it with the SQL grammar and
//! its AST-building actions.

mod engine;
mod error;
mod recovery;
mod sql;
mod stack;

pub use engine::{Actions, Engine, EngineState, Status};
pub use error::ParseError;
pub use recovery::{find_error_state, ErrorCounter, RecoveryPolicy};
pub use sql::{parse, parse_with, Parsed, SqlParser};
pub use stack::{Room, StackEntry, StackFull, StackLimit, ValueStack};
