//! SELECT statements, FROM lists and WITH clauses.

use super::expression::{Expr, ExprList};
use crate::alloc::NodeLease;
use crate::grammar::tk;

/// Identity of one select arm within a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectId(pub u32);

/// How an arm combines with its `prior`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CompoundOp {
    /// A plain select; also the first arm of a compound.
    #[default]
    Select,
    Union,
    UnionAll,
    Except,
    Intersect,
}

impl CompoundOp {
    /// Decodes the operator carried on the parser stack: the terminal
    /// code, with `ALL` standing for `UNION ALL`.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        const UNION: i32 = tk::UNION as i32;
        const ALL: i32 = tk::ALL as i32;
        const EXCEPT: i32 = tk::EXCEPT as i32;
        const INTERSECT: i32 = tk::INTERSECT as i32;
        match code {
            UNION => Self::Union,
            ALL => Self::UnionAll,
            EXCEPT => Self::Except,
            INTERSECT => Self::Intersect,
            _ => Self::Select,
        }
    }

    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Union => "UNION",
            Self::UnionAll => "UNION ALL",
            Self::Except => "EXCEPT",
            Self::Intersect => "INTERSECT",
        }
    }
}

/// Select arm flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct SelectFlags(u16);

impl SelectFlags {
    pub const NONE: Self = Self(0);
    /// `SELECT DISTINCT`.
    pub const DISTINCT: Self = Self(1 << 0);
    /// `SELECT ALL`.
    pub const ALL: Self = Self(1 << 1);
    /// Part of a compound chain.
    pub const COMPOUND: Self = Self(1 << 2);
    /// Built from a `VALUES` row.
    pub const VALUES: Self = Self(1 << 3);
    /// One of several `VALUES` rows.
    pub const MULTI_VALUE: Self = Self(1 << 4);
    /// Wraps a parenthesised join in a FROM clause.
    pub const NESTED_FROM: Self = Self(1 << 5);

    /// Decodes the flag word carried on the parser stack.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// The raw flag word.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

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

    /// Sets the flags in `other`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clears the flags in `other`.
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

/// Join operator bits on a FROM item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct JoinType(u8);

impl JoinType {
    pub const NONE: Self = Self(0);
    pub const INNER: Self = Self(0x01);
    pub const CROSS: Self = Self(0x02);
    pub const NATURAL: Self = Self(0x04);
    pub const LEFT: Self = Self(0x08);
    pub const RIGHT: Self = Self(0x10);
    pub const OUTER: Self = Self(0x20);
    /// An unrecognised join keyword was seen.
    pub const ERROR: Self = Self(0x40);

    /// Decodes the join word carried on the parser stack.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// The raw join word.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if every bit in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if any bit in `other` is set.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Union of two bit sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Intersection of two bit sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }
}

/// `INDEXED BY` hint on a table reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub enum IndexedBy {
    /// No hint.
    #[default]
    Default,
    /// `INDEXED BY name`.
    Named(String),
    /// `NOT INDEXED`.
    NotIndexed,
}

/// A list of identifiers, as in `USING (a, b)` or an INSERT column list.
#[derive(Debug)]
pub struct IdList {
    /// The names, dequoted.
    pub names: Vec<String>,
    #[allow(dead_code)] // held until the node drops
    pub(crate) lease: NodeLease,
}

impl IdList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new(lease: NodeLease) -> Self {
        Self {
            names: Vec::new(),
            lease,
        }
    }

    /// Number of names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// One FROM clause term.
#[derive(Debug, Default)]
pub struct SrcItem {
    /// Table name; `None` for a subquery.
    pub name: Option<String>,
    /// `AS` alias.
    pub alias: Option<String>,
    /// Subquery in parentheses.
    pub select: Option<Box<Select>>,
    /// Arguments of a table-valued function.
    pub func_args: Option<ExprList>,
    /// `ON` constraint.
    pub on: Option<Box<Expr>>,
    /// `USING` columns.
    pub using: Option<IdList>,
    /// How this term joins the one before it.
    pub join_type: JoinType,
    /// Index hint.
    pub indexed_by: IndexedBy,
}

/// A FROM clause, or the single table named by a DML statement.
#[derive(Debug)]
pub struct SrcList {
    /// The terms, left to right.
    pub items: Vec<SrcItem>,
    #[allow(dead_code)] // held until the node drops
    pub(crate) lease: NodeLease,
}

impl SrcList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new(lease: NodeLease) -> Self {
        Self {
            items: Vec::new(),
            lease,
        }
    }

    /// Number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Name of the first term.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.items.first().and_then(|item| item.name.as_deref())
    }

    /// Moves each join type one term to the right.
    ///
    /// The grammar attaches the join operator to the term before it; this
    /// puts it on the term it actually joins.
    pub fn shift_join_types(&mut self) {
        for i in (1..self.items.len()).rev() {
            self.items[i].join_type = self.items[i - 1].join_type;
        }
        if let Some(first) = self.items.first_mut() {
            first.join_type = JoinType::NONE;
        }
    }
}

/// One common table expression.
#[derive(Debug)]
pub struct Cte {
    /// Table name.
    pub name: String,
    /// Optional column names.
    pub columns: Option<ExprList>,
    /// The defining query.
    pub select: Option<Box<Select>>,
}

/// A WITH clause.
#[derive(Debug)]
pub struct With {
    /// `WITH RECURSIVE`.
    pub recursive: bool,
    /// The tables, in order.
    pub ctes: Vec<Cte>,
    #[allow(dead_code)] // held until the node drops
    pub(crate) lease: NodeLease,
}

impl With {
    /// Creates an empty clause.
    #[must_use]
    pub const fn new(lease: NodeLease) -> Self {
        Self {
            recursive: false,
            ctes: Vec::new(),
            lease,
        }
    }
}

/// One arm of a possibly compound SELECT.
///
/// A compound is a chain owned from its last arm: each arm owns the one
/// before it through `prior` and names the one after it through `next`.
#[derive(Debug)]
pub struct Select {
    /// Identity of this arm.
    pub id: SelectId,
    /// How this arm combines with `prior`.
    pub op: CompoundOp,
    /// Arm flags.
    pub flags: SelectFlags,
    /// Result columns.
    pub result: ExprList,
    /// FROM clause; empty when absent.
    pub src: SrcList,
    /// WHERE clause.
    pub where_clause: Option<Box<Expr>>,
    /// GROUP BY clause.
    pub group_by: Option<ExprList>,
    /// HAVING clause.
    pub having: Option<Box<Expr>>,
    /// ORDER BY clause.
    pub order_by: Option<ExprList>,
    /// LIMIT expression.
    pub limit: Option<Box<Expr>>,
    /// OFFSET expression.
    pub offset: Option<Box<Expr>>,
    /// WITH clause.
    pub with: Option<With>,
    /// The arm before this one.
    pub prior: Option<Box<Select>>,
    /// The arm after this one.
    pub next: Option<SelectId>,
    #[allow(dead_code)] // held until the node drops
    pub(crate) lease: NodeLease,
}

impl Select {
    /// Iterates the compound chain from this arm back to the first.
    pub fn arms(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |arm| arm.prior.as_deref())
    }

    /// Number of arms in the chain ending here.
    #[must_use]
    pub fn compound_len(&self) -> usize {
        self.arms().count()
    }

    /// Returns true if this is part of a compound.
    #[must_use]
    pub const fn is_compound(&self) -> bool {
        self.flags.contains(SelectFlags::COMPOUND)
    }

    /// Height of the tallest expression in any arm of the chain.
    #[must_use]
    pub fn expr_height(&self) -> usize {
        let mut height = 0;
        for arm in self.arms() {
            for expr in [&arm.where_clause, &arm.having, &arm.limit, &arm.offset]
                .into_iter()
                .flatten()
            {
                height = height.max(expr.height);
            }
            for list in [Some(&arm.result), arm.group_by.as_ref(), arm.order_by.as_ref()]
                .into_iter()
                .flatten()
            {
                height = list.exprs().map(|expr| expr.height).fold(height, usize::max);
            }
        }
        height
    }

    /// Sets `next` and the compound flag along the chain ending here.
    ///
    /// Returns the chain length.
    pub fn link_compound(&mut self) -> usize {
        let mut count = 0;
        let mut next = None;
        let mut arm = Some(self);
        while let Some(current) = arm {
            current.next = next;
            current.flags.insert(SelectFlags::COMPOUND);
            next = Some(current.id);
            count += 1;
            arm = current.prior.as_deref_mut();
        }
        count
    }
}
