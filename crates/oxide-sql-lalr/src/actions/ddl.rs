//! `CREATE TABLE` and `ALTER TABLE ... ADD COLUMN`.
//!
//! The table is built up on the context as its pieces are reduced: the
//! header starts it, each column definition and constraint amends it,
//! and the closing rule turns it into a statement.

use super::{pass, Rhs};
use crate::alloc::AllocError;
use crate::ast::{
    CheckConstraint, ColumnDef, DefaultValue, ExprList, ExprOp, ExprSpan, ForeignKey, KeyColumns,
    KeyConstraint, OnConflict, RefActions, RefArg, Select, SemanticValue, SortOrder, Statement,
    TableDef,
};
use crate::context::{PendingTable, ParseContext};
use crate::grammar::RuleId;
use crate::lexer::{Span, Token};

pub(super) fn reduce(
    ctx: &mut ParseContext<'_>,
    rule: RuleId,
    rhs: &mut Rhs<'_>,
) -> Result<SemanticValue, AllocError> {
    let value = match rule {
        // create_table ::= createkw TABLE ifnotexists nm
        13 => {
            start_table(ctx, rhs.token(3), rhs.flag(2));
            SemanticValue::Empty
        }
        15 | 19 | 41 | 43 | 53 | 54 | 56 | 58 | 66 => SemanticValue::Int(0),
        16 | 42 | 57 => SemanticValue::Int(1),
        // create_table_args ::= LP columnlist conslist_opt RP table_options
        17 => SemanticValue::Statement(end_table(ctx, rhs.flag(4), None)),
        // create_table_args ::= AS select
        18 => {
            let select = rhs.select(1);
            SemanticValue::Statement(end_table(ctx, false, select))
        }
        // table_options ::= WITHOUT nm
        20 => {
            let option = rhs.token(1);
            let text = ctx.text(option.span);
            if text.eq_ignore_ascii_case("rowid") {
                SemanticValue::Int(1)
            } else {
                ctx.complain(format!("unknown table option: {text}"), option.span);
                SemanticValue::Int(0)
            }
        }
        // columnname ::= nm typetoken
        21 => {
            let name = rhs.token(0);
            add_column(ctx, name, rhs.token(1));
            SemanticValue::Token(name)
        }
        // nm ::= ID|INDEXED, nm ::= STRING
        22 | 23 => {
            let token = rhs.token(0);
            if token.is_reserved() {
                let text = ctx.text(token.span);
                ctx.complain(format!("keyword \"{text}\" is reserved"), token.span);
            }
            SemanticValue::Token(token)
        }
        24 | 59 => SemanticValue::Token(Token::default()),
        // typetoken ::= typename LP signed RP
        25 => widen(rhs.token(0), rhs.span(3)),
        // typetoken ::= typename LP signed COMMA signed RP
        26 => widen(rhs.token(0), rhs.span(5)),
        // typename ::= typename ID|STRING
        27 => widen(rhs.token(0), rhs.span(1)),
        // ccons ::= CONSTRAINT nm
        28 | 61 => {
            ctx.constraint_name = Some(ctx.name(rhs.token(1)));
            SemanticValue::Empty
        }
        29 => {
            let value = rhs.expr(1);
            add_default(ctx, value);
            SemanticValue::Empty
        }
        30 | 31 => {
            let value = rhs.expr(2);
            add_default(ctx, value);
            SemanticValue::Empty
        }
        // ccons ::= DEFAULT MINUS term
        32 => {
            let term = rhs.expr(2);
            let span = rhs.span(1).to(term.span);
            let expr = ctx.pexpr(ExprOp::UMinus, term.expr, None, span)?;
            add_default(ctx, ExprSpan::new(expr, span));
            SemanticValue::Empty
        }
        // ccons ::= DEFAULT ID|INDEXED
        33 => {
            let value = ctx.span_expr(ExprOp::String, rhs.token(1))?;
            add_default(ctx, value);
            SemanticValue::Empty
        }
        // ccons ::= NOT NULL onconf
        34 => {
            let on_conflict = OnConflict::from_code(rhs.int(2));
            if let Some(column) = last_column(ctx) {
                column.not_null = Some(on_conflict);
            }
            SemanticValue::Empty
        }
        // ccons ::= PRIMARY KEY sortorder onconf autoinc
        35 => {
            let span = rhs.span(0).to(rhs.span(1));
            add_primary_key(ctx, None, rhs.int(3), rhs.flag(4), rhs.int(2), span);
            SemanticValue::Empty
        }
        // ccons ::= UNIQUE onconf
        36 => {
            add_unique(ctx, None, rhs.int(1));
            SemanticValue::Empty
        }
        // ccons ::= CHECK LP expr RP, tcons ::= CHECK LP expr RP onconf
        37 | 64 => {
            let check = rhs.expr(2);
            add_check(ctx, check);
            SemanticValue::Empty
        }
        // ccons ::= REFERENCES nm eidlist_opt refargs
        38 => {
            let to = rhs.list(2);
            add_foreign_key(ctx, None, rhs.token(1), to, rhs.int(3));
            SemanticValue::Empty
        }
        // ccons ::= defer_subclause
        39 => {
            defer_foreign_key(ctx, rhs.flag(0));
            SemanticValue::Empty
        }
        // ccons ::= COLLATE ID|STRING
        40 => {
            let name = ctx.name(rhs.token(1));
            if let Some(column) = last_column(ctx) {
                column.collation = Some(name);
            }
            SemanticValue::Empty
        }
        // refargs ::= refargs refarg
        44 => {
            let arg = rhs.ref_arg(1);
            SemanticValue::Int((rhs.int(0) & !arg.mask) | arg.value)
        }
        45 | 46 => SemanticValue::RefArg(RefArg::default()),
        47 => SemanticValue::RefArg(RefArg {
            value: rhs.int(2),
            mask: 0xff,
        }),
        48 => SemanticValue::RefArg(RefArg {
            value: rhs.int(2) << 8,
            mask: 0xff00,
        }),
        49 => SemanticValue::Int(OnConflict::SetNull.code()),
        50 => SemanticValue::Int(OnConflict::SetDefault.code()),
        51 => SemanticValue::Int(OnConflict::Cascade.code()),
        52 => SemanticValue::Int(OnConflict::Restrict.code()),
        55 => SemanticValue::Int(rhs.int(1)),
        // tconscomma ::= COMMA
        60 => {
            ctx.constraint_name = None;
            SemanticValue::Empty
        }
        // tcons ::= PRIMARY KEY LP sortlist autoinc RP onconf
        62 => {
            let span = rhs.span(0).to(rhs.span(5));
            let columns = rhs.list(3);
            add_primary_key(ctx, columns, rhs.int(6), rhs.flag(4), SortOrder::UNDEFINED, span);
            SemanticValue::Empty
        }
        // tcons ::= UNIQUE LP sortlist RP onconf
        63 => {
            let columns = rhs.list(2);
            add_unique(ctx, columns, rhs.int(4));
            SemanticValue::Empty
        }
        // tcons ::= FOREIGN KEY LP eidlist RP REFERENCES nm eidlist_opt refargs
        //           defer_subclause_opt
        65 => {
            let from = rhs.list(3);
            let to = rhs.list(7);
            add_foreign_key(ctx, from, rhs.token(6), to, rhs.int(8));
            defer_foreign_key(ctx, rhs.flag(9));
            SemanticValue::Empty
        }
        67 | 69 => SemanticValue::Int(OnConflict::Default.code()),
        68 => SemanticValue::Int(rhs.int(2)),
        70 => SemanticValue::Int(rhs.int(1)),
        71 => SemanticValue::Int(OnConflict::Ignore.code()),
        72 => SemanticValue::Int(OnConflict::Replace.code()),

        // cmd ::= ALTER TABLE add_column_fullname ADD kwcolumn_opt columnname carglist
        255 => SemanticValue::Statement(end_add_column(ctx, rhs.token(5))),
        // add_column_fullname ::= fullname
        256 => {
            let name = rhs
                .src_list(0)
                .and_then(|src| src.first_name().map(str::to_string))
                .unwrap_or_default();
            ctx.clear_pending();
            ctx.table = Some(PendingTable {
                def: TableDef {
                    name,
                    ..TableDef::default()
                },
                alter: true,
            });
            SemanticValue::Empty
        }
        // cmd ::= create_table create_table_args
        270 => rhs.take(1),
        271 | 272 | 278..=280 | 282..=284 | 303 | 304 => SemanticValue::Empty,
        _ => pass(rhs),
    };
    Ok(value)
}

/// A token covering `first` through the end of `last`.
fn widen(first: Token, last: Span) -> SemanticValue {
    SemanticValue::Token(Token::with_flags(first.code, first.span.to(last), first.flags))
}

fn last_column<'c>(ctx: &'c mut ParseContext<'_>) -> Option<&'c mut ColumnDef> {
    ctx.table.as_mut()?.def.columns.last_mut()
}

fn start_table(ctx: &mut ParseContext<'_>, name: Token, if_not_exists: bool) {
    ctx.clear_pending();
    ctx.table = Some(PendingTable {
        def: TableDef {
            name: ctx.name(name),
            if_not_exists,
            ..TableDef::default()
        },
        alter: false,
    });
}

fn add_column(ctx: &mut ParseContext<'_>, name: Token, type_token: Token) {
    let column = ctx.name(name);
    let type_name = (!type_token.span.is_empty()).then(|| ctx.text(type_token.span).to_string());
    let limit = ctx.config().column_limit;
    ctx.constraint_name = None;
    let Some(pending) = ctx.table.as_ref() else {
        return;
    };
    if pending.def.columns.len() >= limit {
        let message = format!("too many columns on {}", pending.def.name);
        ctx.complain(message, name.span);
        return;
    }
    if pending.def.columns.iter().any(|existing| existing.name == column) {
        ctx.complain(format!("duplicate column name: {column}"), name.span);
        return;
    }
    if let Some(pending) = ctx.table.as_mut() {
        pending.def.columns.push(ColumnDef {
            name: column,
            type_name,
            ..ColumnDef::default()
        });
    }
}

fn add_default(ctx: &mut ParseContext<'_>, value: ExprSpan) {
    let text = ctx.text(value.span).to_string();
    if let Some(column) = last_column(ctx) {
        column.default = Some(DefaultValue {
            expr: value.expr,
            text,
        });
    }
}

fn add_primary_key(
    ctx: &mut ParseContext<'_>,
    columns: Option<ExprList>,
    on_conflict: i32,
    autoincrement: bool,
    sort_order: i32,
    span: Span,
) {
    let name = ctx.constraint_name.take();
    let Some(pending) = ctx.table.as_mut() else {
        return;
    };
    if pending.def.primary_key.is_some() {
        let message = format!("table \"{}\" has more than one primary key", pending.def.name);
        ctx.complain(message, span);
        return;
    }
    let (columns, sort_order) = match columns {
        Some(list) => {
            let order = match list.items.as_slice() {
                [only] => only.sort_order,
                _ => SortOrder::Asc,
            };
            (KeyColumns::List(list), order)
        }
        None => {
            let Some(column) = pending.def.columns.last() else {
                return;
            };
            (
                KeyColumns::Column(column.name.clone()),
                SortOrder::from_code(sort_order),
            )
        }
    };
    let names: Vec<String> = columns.names().into_iter().map(str::to_string).collect();
    let mut integer_key = false;
    for column in &mut pending.def.columns {
        if names.iter().any(|name| *name == column.name) {
            column.primary_key = true;
            integer_key = column
                .type_name
                .as_deref()
                .is_some_and(|ty| ty.eq_ignore_ascii_case("INTEGER"));
        }
    }
    pending.def.primary_key = Some(KeyConstraint {
        name,
        columns,
        on_conflict: OnConflict::from_code(on_conflict),
        autoincrement,
        sort_order,
    });
    if autoincrement && !(names.len() == 1 && integer_key) {
        ctx.complain("AUTOINCREMENT is only allowed on an INTEGER PRIMARY KEY", span);
    }
}

fn add_unique(ctx: &mut ParseContext<'_>, columns: Option<ExprList>, on_conflict: i32) {
    let name = ctx.constraint_name.take();
    let Some(pending) = ctx.table.as_mut() else {
        return;
    };
    let columns = match columns {
        Some(list) => KeyColumns::List(list),
        None => match pending.def.columns.last() {
            Some(column) => KeyColumns::Column(column.name.clone()),
            None => return,
        },
    };
    pending.def.unique.push(KeyConstraint {
        name,
        columns,
        on_conflict: OnConflict::from_code(on_conflict),
        autoincrement: false,
        sort_order: SortOrder::Asc,
    });
}

fn add_check(ctx: &mut ParseContext<'_>, check: ExprSpan) {
    let name = ctx.constraint_name.take();
    let text = ctx.text(check.span).to_string();
    if let Some(pending) = ctx.table.as_mut() {
        pending.def.checks.push(CheckConstraint {
            name,
            expr: check.expr,
            text,
        });
    }
}

/// Adds a foreign key. Without `from` it is a column constraint on the
/// last column and may name at most one parent column.
fn add_foreign_key(
    ctx: &mut ParseContext<'_>,
    from: Option<ExprList>,
    parent: Token,
    to: Option<ExprList>,
    flags: i32,
) {
    let name = ctx.constraint_name.take();
    let parent_name = ctx.name(parent);
    let Some(pending) = ctx.table.as_ref() else {
        return;
    };
    let to_len = to.as_ref().map_or(0, ExprList::len);
    let columns = match from {
        Some(list) => {
            if to.is_some() && to_len != list.len() {
                ctx.complain(
                    "number of columns in foreign key does not match the number of columns in \
                     the referenced table",
                    parent.span,
                );
                return;
            }
            KeyColumns::List(list)
        }
        None => {
            let Some(column) = pending.def.columns.last() else {
                return;
            };
            if to_len > 1 {
                let message = format!(
                    "foreign key on {} should reference only one column of table {parent_name}",
                    column.name
                );
                ctx.complain(message, parent.span);
                return;
            }
            KeyColumns::Column(column.name.clone())
        }
    };
    if let Some(pending) = ctx.table.as_mut() {
        pending.def.foreign_keys.push(ForeignKey {
            name,
            columns,
            parent: parent_name,
            parent_columns: to,
            actions: RefActions::from_bits(flags),
            deferred: false,
        });
    }
}

fn defer_foreign_key(ctx: &mut ParseContext<'_>, deferred: bool) {
    let last = ctx
        .table
        .as_mut()
        .and_then(|pending| pending.def.foreign_keys.last_mut());
    if let Some(key) = last {
        key.deferred = deferred;
    }
}

fn end_table(
    ctx: &mut ParseContext<'_>,
    without_rowid: bool,
    select: Option<Box<Select>>,
) -> Option<Box<Statement>> {
    let mut pending = ctx.table.take()?;
    ctx.constraint_name = None;
    pending.def.without_rowid = without_rowid;
    pending.def.select = select;
    Some(Box::new(Statement::CreateTable(Box::new(pending.def))))
}

/// Finishes `ALTER TABLE ... ADD COLUMN`. The statement text runs from
/// the column name to the last token of its definition.
fn end_add_column(ctx: &mut ParseContext<'_>, column_name: Token) -> Option<Box<Statement>> {
    let text = ctx
        .text(column_name.span.to(ctx.last_shifted))
        .trim_end_matches(|c: char| c == ';' || c.is_whitespace())
        .to_string();
    let mut pending = ctx.table.take()?;
    ctx.constraint_name = None;
    let column = pending.def.columns.pop()?;
    Some(Box::new(Statement::AlterAddColumn {
        table: pending.def.name,
        column: Box::new(column),
        text,
    }))
}
