//! SQL Lexer/Tokenizer
//!
//! Turns SQL text into the `(terminal, span, flags)` stream the parser
//! engine consumes.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Keyword, Token, TokenFlags};
pub use tokenizer::{dequote, LexError, Lexer};
