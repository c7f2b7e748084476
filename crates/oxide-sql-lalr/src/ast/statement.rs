//! SQL statement AST types.

use super::expression::{Expr, ExprList, OnConflict, SortOrder};
use super::select::{IdList, IndexedBy, Select, With};
use crate::alloc::NodeLease;

/// `EXPLAIN` prefix of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplainMode {
    /// Run the statement.
    #[default]
    None,
    /// `EXPLAIN`.
    Explain,
    /// `EXPLAIN QUERY PLAN`.
    QueryPlan,
}

impl ExplainMode {
    /// Decodes the integer carried on the parser stack.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Explain,
            2 => Self::QueryPlan,
            _ => Self::None,
        }
    }
}

/// The accepted result of a parse: one statement and its EXPLAIN mode.
#[derive(Debug, Default)]
pub struct Command {
    /// EXPLAIN prefix.
    pub explain: ExplainMode,
    /// The statement; `None` for an empty request.
    pub statement: Option<Statement>,
}

/// A parsed SQL statement.
#[derive(Debug)]
pub enum Statement {
    /// `BEGIN [DEFERRED] [TRANSACTION]`.
    Begin,
    /// `COMMIT` or `END`.
    Commit,
    /// `ROLLBACK`.
    Rollback,
    /// `SAVEPOINT name`.
    Savepoint { name: String },
    /// `RELEASE [SAVEPOINT] name`.
    Release { name: String },
    /// `ROLLBACK TO [SAVEPOINT] name`.
    RollbackTo { name: String },
    /// `CREATE TABLE`.
    CreateTable(Box<TableDef>),
    /// `CREATE VIEW`.
    CreateView(Box<ViewDef>),
    /// `CREATE [UNIQUE] INDEX`.
    CreateIndex(Box<IndexDef>),
    /// `CREATE TRIGGER`.
    CreateTrigger(Box<TriggerDef>),
    /// `DROP TABLE|VIEW|INDEX|TRIGGER`.
    Drop(DropStatement),
    /// A query.
    Select(Box<Select>),
    /// `INSERT` or `REPLACE`.
    Insert(Box<Insert>),
    /// `UPDATE`.
    Update(Box<Update>),
    /// `DELETE`.
    Delete(Box<Delete>),
    /// `PRAGMA`.
    Pragma(Pragma),
    /// `REINDEX [name [ON table]]`.
    Reindex {
        name: Option<String>,
        table: Option<String>,
    },
    /// `ANALYZE [table]`.
    Analyze { table: Option<String> },
    /// `ALTER TABLE t RENAME TO n`.
    AlterRename { table: String, new_name: String },
    /// `ALTER TABLE t ADD [COLUMN] def`.
    AlterAddColumn {
        table: String,
        column: Box<ColumnDef>,
        /// Source text of the column definition.
        text: String,
    },
}

impl Statement {
    /// Short name of the statement kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Begin => "BEGIN",
            Self::Commit => "COMMIT",
            Self::Rollback => "ROLLBACK",
            Self::Savepoint { .. } => "SAVEPOINT",
            Self::Release { .. } => "RELEASE",
            Self::RollbackTo { .. } => "ROLLBACK TO",
            Self::CreateTable(_) => "CREATE TABLE",
            Self::CreateView(_) => "CREATE VIEW",
            Self::CreateIndex(_) => "CREATE INDEX",
            Self::CreateTrigger(_) => "CREATE TRIGGER",
            Self::Drop(drop) => drop.kind.as_str(),
            Self::Select(_) => "SELECT",
            Self::Insert(_) => "INSERT",
            Self::Update(_) => "UPDATE",
            Self::Delete(_) => "DELETE",
            Self::Pragma(_) => "PRAGMA",
            Self::Reindex { .. } => "REINDEX",
            Self::Analyze { .. } => "ANALYZE",
            Self::AlterRename { .. } => "ALTER TABLE RENAME",
            Self::AlterAddColumn { .. } => "ALTER TABLE ADD COLUMN",
        }
    }
}

/// A column's DEFAULT clause.
#[derive(Debug)]
pub struct DefaultValue {
    /// The value.
    pub expr: Option<Box<Expr>>,
    /// Source text of the value.
    pub text: String,
}

/// A column definition.
#[derive(Debug, Default)]
pub struct ColumnDef {
    /// Column name.
    pub name: String,
    /// Declared type, as written.
    pub type_name: Option<String>,
    /// `NOT NULL` and its conflict action.
    pub not_null: Option<OnConflict>,
    /// DEFAULT clause.
    pub default: Option<DefaultValue>,
    /// COLLATE clause.
    pub collation: Option<String>,
    /// Declared `PRIMARY KEY` on the column itself.
    pub primary_key: bool,
}

/// Columns a key constraint covers.
#[derive(Debug)]
pub enum KeyColumns {
    /// A column constraint on the named column.
    Column(String),
    /// A table constraint's column list.
    List(ExprList),
}

impl KeyColumns {
    /// The column names, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::Column(name) => vec![name.as_str()],
            Self::List(list) => list
                .items
                .iter()
                .filter_map(|item| {
                    item.name
                        .as_deref()
                        .or_else(|| item.expr.as_ref().map(|expr| expr.text()))
                })
                .collect(),
        }
    }
}

/// `PRIMARY KEY` or `UNIQUE`.
#[derive(Debug)]
pub struct KeyConstraint {
    /// `CONSTRAINT name`.
    pub name: Option<String>,
    /// Covered columns.
    pub columns: KeyColumns,
    /// `ON CONFLICT` action.
    pub on_conflict: OnConflict,
    /// `AUTOINCREMENT`.
    pub autoincrement: bool,
    /// Sort order of a single-column primary key.
    pub sort_order: SortOrder,
}

/// `CHECK (expr)`.
#[derive(Debug)]
pub struct CheckConstraint {
    /// `CONSTRAINT name`.
    pub name: Option<String>,
    /// The condition.
    pub expr: Option<Box<Expr>>,
    /// Source text of the condition.
    pub text: String,
}

/// `ON DELETE` and `ON UPDATE` actions of a foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefActions {
    /// `ON DELETE`.
    pub on_delete: OnConflict,
    /// `ON UPDATE`.
    pub on_update: OnConflict,
}

impl RefActions {
    /// Decodes the packed action word built by the grammar: the delete
    /// action in the low byte, the update action in the next.
    #[must_use]
    pub const fn from_bits(bits: i32) -> Self {
        Self {
            on_delete: OnConflict::from_code(bits & 0xff),
            on_update: OnConflict::from_code((bits >> 8) & 0xff),
        }
    }
}

/// A foreign key constraint.
#[derive(Debug)]
pub struct ForeignKey {
    /// `CONSTRAINT name`.
    pub name: Option<String>,
    /// Child columns.
    pub columns: KeyColumns,
    /// Parent table.
    pub parent: String,
    /// Parent columns; the parent's primary key when absent.
    pub parent_columns: Option<ExprList>,
    /// Referential actions.
    pub actions: RefActions,
    /// `DEFERRABLE INITIALLY DEFERRED`.
    pub deferred: bool,
}

/// `CREATE TABLE`.
#[derive(Debug, Default)]
pub struct TableDef {
    /// Table name.
    pub name: String,
    /// `IF NOT EXISTS`.
    pub if_not_exists: bool,
    /// Columns, in order.
    pub columns: Vec<ColumnDef>,
    /// The primary key.
    pub primary_key: Option<KeyConstraint>,
    /// UNIQUE constraints.
    pub unique: Vec<KeyConstraint>,
    /// CHECK constraints.
    pub checks: Vec<CheckConstraint>,
    /// Foreign keys.
    pub foreign_keys: Vec<ForeignKey>,
    /// `WITHOUT ROWID`.
    pub without_rowid: bool,
    /// `AS select`.
    pub select: Option<Box<Select>>,
}

impl TableDef {
    /// Looks up a column by name, ignoring case.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns
            .iter()
            .find(|column| column.name.eq_ignore_ascii_case(name))
    }
}

/// `CREATE VIEW`.
#[derive(Debug)]
pub struct ViewDef {
    /// View name.
    pub name: String,
    /// `IF NOT EXISTS`.
    pub if_not_exists: bool,
    /// Optional column names.
    pub columns: Option<ExprList>,
    /// The defining query.
    pub select: Option<Box<Select>>,
    /// Source text from `CREATE` through the end of the query.
    pub text: String,
}

/// `CREATE INDEX`.
#[derive(Debug)]
pub struct IndexDef {
    /// Index name.
    pub name: String,
    /// Indexed table.
    pub table: String,
    /// `UNIQUE`.
    pub unique: bool,
    /// `IF NOT EXISTS`.
    pub if_not_exists: bool,
    /// Indexed terms.
    pub columns: Option<ExprList>,
    /// Partial index condition.
    pub where_clause: Option<Box<Expr>>,
}

/// What a DROP statement drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropKind {
    Table,
    View,
    Index,
    Trigger,
}

impl DropKind {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "DROP TABLE",
            Self::View => "DROP VIEW",
            Self::Index => "DROP INDEX",
            Self::Trigger => "DROP TRIGGER",
        }
    }
}

/// `DROP TABLE|VIEW|INDEX|TRIGGER`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropStatement {
    /// Object kind.
    pub kind: DropKind,
    /// Object name.
    pub name: String,
    /// `IF EXISTS`.
    pub if_exists: bool,
    /// Table of a dropped index.
    pub table: Option<String>,
}

/// Rows an INSERT writes.
#[derive(Debug)]
pub enum InsertSource {
    /// `VALUES (...)` or a query.
    Select(Box<Select>),
    /// `DEFAULT VALUES`.
    DefaultValues,
}

/// `INSERT` or `REPLACE`.
#[derive(Debug)]
pub struct Insert {
    /// WITH clause.
    pub with: Option<With>,
    /// `OR` conflict action; `REPLACE` on its own means `OR REPLACE`.
    pub on_conflict: OnConflict,
    /// Target table.
    pub table: String,
    /// Target columns.
    pub columns: Option<IdList>,
    /// Rows.
    pub source: InsertSource,
}

/// `UPDATE`.
#[derive(Debug)]
pub struct Update {
    /// WITH clause.
    pub with: Option<With>,
    /// `OR` conflict action.
    pub on_conflict: OnConflict,
    /// Target table.
    pub table: String,
    /// Index hint.
    pub indexed_by: IndexedBy,
    /// Assignments; each item's name is the assigned column.
    pub set: Option<ExprList>,
    /// WHERE clause.
    pub where_clause: Option<Box<Expr>>,
}

/// `DELETE`.
#[derive(Debug)]
pub struct Delete {
    /// WITH clause.
    pub with: Option<With>,
    /// Target table.
    pub table: String,
    /// Index hint.
    pub indexed_by: IndexedBy,
    /// WHERE clause.
    pub where_clause: Option<Box<Expr>>,
}

/// `PRAGMA`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pragma {
    /// Pragma name.
    pub name: String,
    /// Argument.
    pub value: Option<String>,
    /// Table of a `PRAGMA name = table.index` form.
    pub table: Option<String>,
    /// The numeric argument had a leading minus.
    pub negative: bool,
}

/// When a trigger fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerTime {
    #[default]
    Before,
    After,
    InsteadOf,
}

/// Statement that fires a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEventKind {
    Delete,
    Insert,
    Update,
}

/// A trigger's event.
#[derive(Debug)]
pub struct TriggerEvent {
    /// The statement kind.
    pub kind: TriggerEventKind,
    /// `UPDATE OF` columns.
    pub columns: Option<IdList>,
}

/// What a trigger step does.
#[derive(Debug)]
pub enum TriggerStepKind {
    /// `UPDATE`.
    Update {
        table: String,
        set: Option<ExprList>,
        where_clause: Option<Box<Expr>>,
        on_conflict: OnConflict,
    },
    /// `INSERT`.
    Insert {
        table: String,
        columns: Option<IdList>,
        select: Option<Box<Select>>,
        on_conflict: OnConflict,
    },
    /// `DELETE`.
    Delete {
        table: String,
        where_clause: Option<Box<Expr>>,
    },
    /// A query.
    Select(Option<Box<Select>>),
}

/// One statement of a trigger body.
#[derive(Debug)]
pub struct TriggerStep {
    /// The statement.
    pub kind: TriggerStepKind,
    #[allow(dead_code)] // held until the node drops
    pub(crate) lease: NodeLease,
}

impl TriggerStep {
    /// Creates a step.
    #[must_use]
    pub const fn new(kind: TriggerStepKind, lease: NodeLease) -> Self {
        Self { kind, lease }
    }
}

/// `CREATE TRIGGER`.
#[derive(Debug)]
pub struct TriggerDef {
    /// Trigger name.
    pub name: String,
    /// `IF NOT EXISTS`.
    pub if_not_exists: bool,
    /// When it fires.
    pub time: TriggerTime,
    /// What fires it.
    pub event: TriggerEvent,
    /// Table it is attached to.
    pub table: String,
    /// `WHEN` condition.
    pub when: Option<Box<Expr>>,
    /// Body, in order.
    pub steps: Vec<TriggerStep>,
    /// `CREATE TRIGGER` followed by the source text from the trigger name
    /// through `END`.
    pub text: String,
}
