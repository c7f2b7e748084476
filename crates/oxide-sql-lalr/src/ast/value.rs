//! The value carried by each parser stack entry.

use super::expression::{Expr, ExprList};
use super::select::{IdList, IndexedBy, Select, SrcList, With};
use super::statement::{Command, Statement, TriggerEvent, TriggerStep};
use crate::lexer::{Span, Token};

/// An expression under construction together with the text it covers.
///
/// The span can be wider than the node's own: `(a)` covers the
/// parentheses while the node is `a`.
#[derive(Debug, Default)]
pub struct ExprSpan {
    /// The node; `None` after an error already reported.
    pub expr: Option<Box<Expr>>,
    /// Covered text.
    pub span: Span,
}

impl ExprSpan {
    /// Pairs a node with its span.
    #[must_use]
    pub const fn new(expr: Option<Box<Expr>>, span: Span) -> Self {
        Self { expr, span }
    }
}

impl From<ExprSpan> for SemanticValue {
    fn from(value: ExprSpan) -> Self {
        Self::Expr(value)
    }
}

/// Foreign key action bits and the mask they replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefArg {
    pub value: i32,
    pub mask: i32,
}

/// `LIMIT` and `OFFSET` expressions.
#[derive(Debug, Default)]
pub struct Limit {
    pub limit: Option<Box<Expr>>,
    pub offset: Option<Box<Expr>>,
}

/// `LIKE`-family operator token and whether it was negated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeOp {
    pub token: Token,
    pub negated: bool,
}

/// A parser stack value. Each symbol's entries always hold the same
/// variant.
///
/// Dropping a value drops everything it owns.
#[derive(Debug, Default)]
pub enum SemanticValue {
    /// Symbols without a value.
    #[default]
    Empty,
    /// Terminals, names and spans of text.
    Token(Token),
    /// Flags, conflict codes, sort orders and operator codes.
    Int(i32),
    /// An expression and its span.
    Expr(ExprSpan),
    /// An optional clause expression.
    OptExpr(Option<Box<Expr>>),
    ExprList(Option<ExprList>),
    Select(Option<Box<Select>>),
    IdList(Option<IdList>),
    SrcList(Option<SrcList>),
    With(Option<With>),
    TriggerEvent(TriggerEvent),
    TriggerSteps(Vec<TriggerStep>),
    RefArg(RefArg),
    Limit(Limit),
    LikeOp(LikeOp),
    IndexedBy(IndexedBy),
    Statement(Option<Box<Statement>>),
    Command(Command),
}

impl SemanticValue {
    /// Name of the live variant.
    #[must_use]
    pub const fn variant(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Token(_) => "token",
            Self::Int(_) => "int",
            Self::Expr(_) => "expr",
            Self::OptExpr(_) => "opt-expr",
            Self::ExprList(_) => "expr-list",
            Self::Select(_) => "select",
            Self::IdList(_) => "id-list",
            Self::SrcList(_) => "src-list",
            Self::With(_) => "with",
            Self::TriggerEvent(_) => "trigger-event",
            Self::TriggerSteps(_) => "trigger-steps",
            Self::RefArg(_) => "ref-arg",
            Self::Limit(_) => "limit",
            Self::LikeOp(_) => "like-op",
            Self::IndexedBy(_) => "indexed-by",
            Self::Statement(_) => "statement",
            Self::Command(_) => "command",
        }
    }

    /// The token, if this is one.
    #[must_use]
    pub const fn token(&self) -> Option<Token> {
        match self {
            Self::Token(token) => Some(*token),
            _ => None,
        }
    }

    /// The integer, or 0.
    #[must_use]
    pub const fn int(&self) -> i32 {
        match self {
            Self::Int(value) => *value,
            _ => 0,
        }
    }

    /// Moves the expression out of an `Expr` or `OptExpr` value.
    #[must_use]
    pub fn into_expr(self) -> Option<Box<Expr>> {
        match self {
            Self::Expr(span) => span.expr,
            Self::OptExpr(expr) => expr,
            _ => None,
        }
    }

    /// Moves the expression and span out of an `Expr` value.
    #[must_use]
    pub fn into_expr_span(self) -> ExprSpan {
        match self {
            Self::Expr(span) => span,
            Self::OptExpr(expr) => {
                let span = expr.as_ref().map(|e| e.span).unwrap_or_default();
                ExprSpan::new(expr, span)
            }
            _ => ExprSpan::default(),
        }
    }

    #[must_use]
    pub fn into_expr_list(self) -> Option<ExprList> {
        match self {
            Self::ExprList(list) => list,
            _ => None,
        }
    }

    #[must_use]
    pub fn into_select(self) -> Option<Box<Select>> {
        match self {
            Self::Select(select) => select,
            _ => None,
        }
    }

    #[must_use]
    pub fn into_id_list(self) -> Option<IdList> {
        match self {
            Self::IdList(list) => list,
            _ => None,
        }
    }

    #[must_use]
    pub fn into_src_list(self) -> Option<SrcList> {
        match self {
            Self::SrcList(list) => list,
            _ => None,
        }
    }

    #[must_use]
    pub fn into_with(self) -> Option<With> {
        match self {
            Self::With(with) => with,
            _ => None,
        }
    }

    #[must_use]
    pub fn into_trigger_steps(self) -> Vec<TriggerStep> {
        match self {
            Self::TriggerSteps(steps) => steps,
            _ => Vec::new(),
        }
    }

    #[must_use]
    pub fn into_limit(self) -> Limit {
        match self {
            Self::Limit(limit) => limit,
            _ => Limit::default(),
        }
    }

    #[must_use]
    pub fn into_statement(self) -> Option<Box<Statement>> {
        match self {
            Self::Statement(statement) => statement,
            _ => None,
        }
    }

    #[must_use]
    pub fn into_command(self) -> Option<Command> {
        match self {
            Self::Command(command) => Some(command),
            _ => None,
        }
    }
}
