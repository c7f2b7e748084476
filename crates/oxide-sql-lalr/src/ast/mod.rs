//! Abstract Syntax Tree (AST) types for SQL statements.
//!
//! Every node is built by a grammar action at reduce time and owned by
//! exactly one parent. Each holds a lease from the parser's
//! [`NodeAllocator`](crate::alloc::NodeAllocator), returned on drop.

mod expression;
mod select;
mod statement;
mod teardown;
mod value;

pub use expression::{
    Expr, ExprFlags, ExprList, ExprListItem, ExprOp, ExprPayload, OnConflict, SortOrder,
};
pub use select::{
    CompoundOp, Cte, IdList, IndexedBy, JoinType, Select, SelectFlags, SelectId, SrcItem,
    SrcList, With,
};
pub use statement::{
    CheckConstraint, ColumnDef, Command, DefaultValue, Delete, DropKind, DropStatement,
    ExplainMode, ForeignKey, IndexDef, Insert, InsertSource, KeyColumns, KeyConstraint, Pragma,
    RefActions, Statement, TableDef, TriggerDef, TriggerEvent, TriggerEventKind, TriggerStep,
    TriggerStepKind, TriggerTime, Update, ViewDef,
};
pub use value::{ExprSpan, LikeOp, Limit, RefArg, SemanticValue};
