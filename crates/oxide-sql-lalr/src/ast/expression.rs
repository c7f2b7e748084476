//! Expression AST types.

use std::fmt;

use super::select::Select;
use crate::alloc::NodeLease;
use crate::grammar::{tk, Symbol};
use crate::lexer::Span;

/// Expression operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprOp {
    // Leaves
    Integer,
    Float,
    String,
    Blob,
    Null,
    Id,
    Variable,
    Asterisk,

    // Structure
    Dot,
    Collate,
    Cast,
    Function,
    Vector,
    Select,
    SelectColumn,
    Exists,
    Case,
    Raise,

    // Logical
    And,
    Or,
    Not,

    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Is,
    IsNot,
    IsNull,
    NotNull,
    Between,
    In,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Rem,
    Concat,
    UMinus,
    UPlus,

    // Bitwise
    BitAnd,
    BitOr,
    BitNot,
    LShift,
    RShift,
}

impl ExprOp {
    /// The operator for a binary, unary-postfix or literal terminal.
    #[must_use]
    pub const fn from_terminal(code: Symbol) -> Option<Self> {
        let op = match code {
            tk::AND => Self::And,
            tk::OR => Self::Or,
            tk::NOT => Self::Not,
            tk::EQ => Self::Eq,
            tk::NE => Self::Ne,
            tk::LT => Self::Lt,
            tk::LE => Self::Le,
            tk::GT => Self::Gt,
            tk::GE => Self::Ge,
            tk::ISNULL => Self::IsNull,
            tk::NOTNULL => Self::NotNull,
            tk::PLUS => Self::Plus,
            tk::MINUS => Self::Minus,
            tk::STAR => Self::Star,
            tk::SLASH => Self::Slash,
            tk::REM => Self::Rem,
            tk::CONCAT => Self::Concat,
            tk::BITAND => Self::BitAnd,
            tk::BITOR => Self::BitOr,
            tk::BITNOT => Self::BitNot,
            tk::LSHIFT => Self::LShift,
            tk::RSHIFT => Self::RShift,
            tk::INTEGER => Self::Integer,
            tk::FLOAT => Self::Float,
            tk::STRING => Self::String,
            tk::BLOB => Self::Blob,
            tk::NULL => Self::Null,
            tk::ID => Self::Id,
            tk::VARIABLE => Self::Variable,
            _ => return None,
        };
        Some(op)
    }

    /// Returns the SQL spelling of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::String => "STRING",
            Self::Blob => "BLOB",
            Self::Null => "NULL",
            Self::Id => "ID",
            Self::Variable => "VARIABLE",
            Self::Asterisk => "*",
            Self::Dot => ".",
            Self::Collate => "COLLATE",
            Self::Cast => "CAST",
            Self::Function => "FUNCTION",
            Self::Vector => "VECTOR",
            Self::Select => "SELECT",
            Self::SelectColumn => "SELECT_COLUMN",
            Self::Exists => "EXISTS",
            Self::Case => "CASE",
            Self::Raise => "RAISE",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Is => "IS",
            Self::IsNot => "IS NOT",
            Self::IsNull => "ISNULL",
            Self::NotNull => "NOTNULL",
            Self::Between => "BETWEEN",
            Self::In => "IN",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Rem => "%",
            Self::Concat => "||",
            Self::UMinus => "-",
            Self::UPlus => "+",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitNot => "~",
            Self::LShift => "<<",
            Self::RShift => ">>",
        }
    }
}

impl fmt::Display for ExprOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expression node flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ExprFlags(u16);

impl ExprFlags {
    /// No flags.
    pub const NONE: Self = Self(0);
    /// Built directly from one token.
    pub const LEAF: Self = Self(1 << 0);
    /// `DISTINCT` aggregate call.
    pub const DISTINCT: Self = Self(1 << 1);
    /// Function written as an infix operator (`LIKE`, `GLOB`, ...).
    pub const INFIX_FUNC: Self = Self(1 << 2);
    /// Takes no part in affinity or collation decisions.
    pub const GENERIC: Self = Self(1 << 3);
    /// The tree contains an explicit `COLLATE`.
    pub const COLLATE: Self = Self(1 << 4);
    /// The tree contains a subquery.
    pub const SUBQUERY: Self = Self(1 << 5);
    /// `int_value` holds the literal.
    pub const INT_VALUE: Self = Self(1 << 6);
    /// The token was written in double quotes.
    pub const DBL_QUOTED: Self = Self(1 << 7);
    /// The payload is a select.
    pub const X_IS_SELECT: Self = Self(1 << 8);

    /// Flags a parent inherits from its children.
    pub const PROPAGATE: Self = Self(Self::COLLATE.0 | Self::SUBQUERY.0);

    /// Returns true if every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Union of two flag sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Intersection of two flag sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// `self` without the flags in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Sets the flags in `other`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clears the flags in `other`.
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

/// Conflict resolution and foreign key actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum OnConflict {
    /// No action.
    None,
    Rollback,
    Abort,
    Fail,
    Ignore,
    Replace,
    Restrict,
    SetNull,
    SetDefault,
    Cascade,
    /// Whatever the table or statement says.
    #[default]
    Default,
}

impl OnConflict {
    /// Decodes the integer carried on the parser stack.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Rollback,
            2 => Self::Abort,
            3 => Self::Fail,
            4 => Self::Ignore,
            5 => Self::Replace,
            6 => Self::Restrict,
            7 => Self::SetNull,
            8 => Self::SetDefault,
            9 => Self::Cascade,
            10 => Self::Default,
            _ => Self::None,
        }
    }

    /// The integer carried on the parser stack.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Rollback => 1,
            Self::Abort => 2,
            Self::Fail => 3,
            Self::Ignore => 4,
            Self::Replace => 5,
            Self::Restrict => 6,
            Self::SetNull => 7,
            Self::SetDefault => 8,
            Self::Cascade => 9,
            Self::Default => 10,
        }
    }

    /// Returns the SQL spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NO ACTION",
            Self::Rollback => "ROLLBACK",
            Self::Abort => "ABORT",
            Self::Fail => "FAIL",
            Self::Ignore => "IGNORE",
            Self::Replace => "REPLACE",
            Self::Restrict => "RESTRICT",
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
            Self::Cascade => "CASCADE",
            Self::Default => "DEFAULT",
        }
    }
}

/// Sort order of an ORDER BY term or index column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SortOrder {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortOrder {
    /// Stack encoding of an unspecified order.
    pub const UNDEFINED: i32 = -1;

    /// Decodes the integer carried on the parser stack. An unspecified
    /// order is ascending.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        if code == 1 {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// What an expression carries besides its operands.
#[derive(Debug, Default)]
pub enum ExprPayload {
    /// Nothing.
    #[default]
    None,
    /// Function arguments, `IN` list, `BETWEEN` bounds, `CASE` arms or
    /// vector elements.
    List(ExprList),
    /// Subquery of `IN`, `EXISTS` or a scalar select.
    Select(Box<Select>),
}

/// An expression node.
///
/// Children are owned. Dropping the root drops the whole tree and returns
/// every lease to its allocator.
#[derive(Debug)]
pub struct Expr {
    /// The operator.
    pub op: ExprOp,
    /// Identifier, literal text, function name, collation or type name.
    /// Quoted text is stored without its quotes.
    pub token: Option<String>,
    /// Left operand.
    pub left: Option<Box<Expr>>,
    /// Right operand.
    pub right: Option<Box<Expr>>,
    /// List or select payload.
    pub x: ExprPayload,
    /// Source text the expression covers.
    pub span: Span,
    /// Node flags.
    pub flags: ExprFlags,
    /// Height of the tree rooted here. Leaves have height 1.
    pub height: usize,
    /// Literal value when [`ExprFlags::INT_VALUE`] is set.
    pub int_value: Option<i32>,
    /// Bound parameter number of a variable.
    pub var_number: Option<u32>,
    /// Column picked out of a vector by a `SelectColumn` node.
    pub column: Option<usize>,
    /// Action requested by `RAISE`.
    pub on_error: Option<OnConflict>,
    #[allow(dead_code)] // held until the node drops
    pub(crate) lease: NodeLease,
}

impl Expr {
    /// Creates a bare node.
    #[must_use]
    pub fn new(op: ExprOp, token: Option<String>, span: Span, lease: NodeLease) -> Self {
        Self {
            op,
            token,
            left: None,
            right: None,
            x: ExprPayload::None,
            span,
            flags: ExprFlags::NONE,
            height: 1,
            int_value: None,
            var_number: None,
            column: None,
            on_error: None,
            lease,
        }
    }

    /// The token text, or `""`.
    #[must_use]
    pub fn text(&self) -> &str {
        self.token.as_deref().unwrap_or("")
    }

    /// The list payload, if any.
    #[must_use]
    pub const fn list(&self) -> Option<&ExprList> {
        match &self.x {
            ExprPayload::List(list) => Some(list),
            _ => None,
        }
    }

    /// The select payload, if any.
    #[must_use]
    pub fn select(&self) -> Option<&Select> {
        match &self.x {
            ExprPayload::Select(select) => Some(select),
            _ => None,
        }
    }

    /// The integer value of a literal, looking through unary `+` and `-`.
    #[must_use]
    pub fn integer(&self) -> Option<i64> {
        let mut negate = false;
        let mut expr = self;
        while !expr.flags.contains(ExprFlags::INT_VALUE) {
            match expr.op {
                ExprOp::UPlus => {}
                ExprOp::UMinus => negate = !negate,
                _ => return None,
            }
            expr = expr.left.as_deref()?;
        }
        let value = i64::from(expr.int_value?);
        Some(if negate { -value } else { value })
    }

    /// Recomputes `height` and the inherited flags from the children.
    pub fn update_height(&mut self) {
        let mut height = 0;
        let mut inherited = ExprFlags::NONE;
        for child in [&self.left, &self.right].into_iter().flatten() {
            height = height.max(child.height);
            inherited = inherited.union(child.flags);
        }
        match &self.x {
            ExprPayload::List(list) => {
                for expr in list.exprs() {
                    height = height.max(expr.height);
                    inherited = inherited.union(expr.flags);
                }
            }
            ExprPayload::Select(select) => {
                height = height.max(select.expr_height());
                inherited.insert(ExprFlags::SUBQUERY);
            }
            ExprPayload::None => {}
        }
        self.height = height + 1;
        self.flags
            .insert(inherited.intersection(ExprFlags::PROPAGATE));
    }
}

/// One entry of an [`ExprList`].
#[derive(Debug, Default)]
pub struct ExprListItem {
    /// The expression. Id lists of column names carry none.
    pub expr: Option<Box<Expr>>,
    /// `AS` alias, assigned column or id list name.
    pub name: Option<String>,
    /// Original text of a result column.
    pub span: Option<String>,
    /// Sort order of ORDER BY and index terms.
    pub sort_order: SortOrder,
}

/// An ordered list of expressions.
#[derive(Debug)]
pub struct ExprList {
    /// The items, in source order.
    pub items: Vec<ExprListItem>,
    #[allow(dead_code)] // held until the list drops
    pub(crate) lease: NodeLease,
}

impl ExprList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new(lease: NodeLease) -> Self {
        Self {
            items: Vec::new(),
            lease,
        }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item for `expr`.
    pub fn push(&mut self, expr: Option<Box<Expr>>) {
        self.items.push(ExprListItem {
            expr,
            ..ExprListItem::default()
        });
    }

    /// The most recently appended item.
    pub fn last_mut(&mut self) -> Option<&mut ExprListItem> {
        self.items.last_mut()
    }

    /// The expressions, skipping empty items.
    pub fn exprs(&self) -> impl Iterator<Item = &Expr> {
        self.items.iter().filter_map(|item| item.expr.as_deref())
    }

    /// The item names, in order.
    pub fn names(&self) -> impl Iterator<Item = Option<&str>> {
        self.items.iter().map(|item| item.name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::alloc::{CountingAllocator, NodeAllocator, NodeKind};

    fn leaf(alloc: &Arc<dyn NodeAllocator>, op: ExprOp, height: usize) -> Box<Expr> {
        let mut expr = Expr::new(
            op,
            None,
            Span::default(),
            NodeLease::acquire(alloc, NodeKind::Expr).unwrap(),
        );
        expr.height = height;
        Box::new(expr)
    }

    #[test]
    fn test_binary_operator_mapping() {
        assert_eq!(ExprOp::from_terminal(tk::PLUS), Some(ExprOp::Plus));
        assert_eq!(ExprOp::from_terminal(tk::NE), Some(ExprOp::Ne));
        assert_eq!(ExprOp::from_terminal(tk::SELECT), None);
        assert_eq!(ExprOp::Concat.to_string(), "||");
    }

    #[test]
    fn test_flags() {
        let mut flags = ExprFlags::LEAF.union(ExprFlags::COLLATE);
        assert!(flags.contains(ExprFlags::LEAF));
        flags.remove(ExprFlags::LEAF);
        assert!(!flags.contains(ExprFlags::LEAF));
        assert_eq!(flags.intersection(ExprFlags::PROPAGATE), ExprFlags::COLLATE);
        assert_eq!(flags.difference(ExprFlags::COLLATE), ExprFlags::NONE);
    }

    #[test]
    fn test_conflict_codes() {
        for code in 0..=10 {
            assert_eq!(OnConflict::from_code(code).code(), code);
        }
        assert_eq!(OnConflict::from_code(9).as_str(), "CASCADE");
        assert_eq!(SortOrder::from_code(SortOrder::UNDEFINED), SortOrder::Asc);
        assert_eq!(SortOrder::from_code(1), SortOrder::Desc);
    }

    #[test]
    fn test_update_height_and_propagation() {
        let counter = Arc::new(CountingAllocator::new());
        let alloc: Arc<dyn NodeAllocator> = counter.clone();
        let mut left = leaf(&alloc, ExprOp::Id, 3);
        left.flags.insert(ExprFlags::COLLATE);
        let right = leaf(&alloc, ExprOp::Integer, 1);
        let mut parent = leaf(&alloc, ExprOp::Plus, 1);
        parent.left = Some(left);
        parent.right = Some(right);
        parent.update_height();
        assert_eq!(parent.height, 4);
        assert!(parent.flags.contains(ExprFlags::COLLATE));
        assert_eq!(counter.live(), 3);
        drop(parent);
        assert_eq!(counter.live(), 0);
    }

    #[test]
    fn test_integer_through_unary() {
        let alloc: Arc<dyn NodeAllocator> = Arc::new(CountingAllocator::new());
        let mut lit = leaf(&alloc, ExprOp::Integer, 1);
        lit.flags.insert(ExprFlags::INT_VALUE);
        lit.int_value = Some(7);
        let mut neg = leaf(&alloc, ExprOp::UMinus, 1);
        neg.left = Some(lit);
        assert_eq!(neg.integer(), Some(-7));

        let mut twice = leaf(&alloc, ExprOp::UMinus, 1);
        twice.left = Some(neg);
        let mut plus = leaf(&alloc, ExprOp::UPlus, 1);
        plus.left = Some(twice);
        assert_eq!(plus.integer(), Some(7));

        let mut not = leaf(&alloc, ExprOp::Not, 1);
        not.left = Some(plus);
        assert_eq!(not.integer(), None);
        assert_eq!(leaf(&alloc, ExprOp::UMinus, 1).integer(), None);
    }
}
