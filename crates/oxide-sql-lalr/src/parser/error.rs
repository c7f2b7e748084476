//! Parser error types.

use thiserror::Error;

use crate::alloc::AllocError;
use crate::lexer::{LexError, Span};

/// Why a parse ended without a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No action for the lookahead, and recovery gave up.
    #[error("{message}")]
    Syntax {
        /// The reported message.
        message: String,
        /// The offending token.
        span: Span,
    },

    /// The text could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The value stack could not take another entry.
    #[error("parser stack overflow")]
    StackOverflow {
        /// Depth at which the push was refused.
        depth: usize,
    },

    /// The node allocator refused a node.
    #[error(transparent)]
    AllocationFailure(#[from] AllocError),

    /// The engine already accepted or failed; call `reset()` first.
    #[error("parser already finished")]
    Finished,
}

impl ParseError {
    /// Creates a syntax error.
    #[must_use]
    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self::Syntax {
            message: message.into(),
            span,
        }
    }

    /// Returns true for errors no retry can fix: stack overflow and
    /// allocation failure.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::StackOverflow { .. } | Self::AllocationFailure(_))
    }

    /// Where the error was detected, if it has a position.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Syntax { span, .. } => Some(*span),
            Self::Lex(err) => Some(err.span),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::NodeKind;

    #[test]
    fn test_display() {
        let err = ParseError::syntax("near \"FROM\": syntax error", Span::new(7, 11));
        assert_eq!(err.to_string(), "near \"FROM\": syntax error");
        assert_eq!(err.span(), Some(Span::new(7, 11)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_fatal_kinds() {
        assert!(ParseError::StackOverflow { depth: 100 }.is_fatal());
        let alloc = ParseError::from(AllocError {
            kind: NodeKind::Expr,
        });
        assert!(alloc.is_fatal());
        assert_eq!(alloc.to_string(), "out of memory allocating expression");
        assert_eq!(
            ParseError::StackOverflow { depth: 3 }.to_string(),
            "parser stack overflow"
        );
    }
}
