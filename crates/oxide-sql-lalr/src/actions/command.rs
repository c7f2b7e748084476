//! Top-level commands: transactions, DML, views, indexes, PRAGMA and the
//! maintenance statements.

use super::{pass, Rhs};
use crate::alloc::AllocError;
use crate::ast::{
    Command, Delete, DropKind, DropStatement, ExplainMode, ExprList, IndexDef, Insert,
    InsertSource, OnConflict, Pragma, SemanticValue, SortOrder, Statement, Update, ViewDef,
};
use crate::context::ParseContext;
use crate::grammar::{tk, RuleId};
use crate::lexer::Token;

fn statement(statement: Statement) -> SemanticValue {
    SemanticValue::Statement(Some(Box::new(statement)))
}

pub(super) fn reduce(
    ctx: &mut ParseContext<'_>,
    rule: RuleId,
    rhs: &mut Rhs<'_>,
) -> Result<SemanticValue, AllocError> {
    let value = match rule {
        // ecmd ::= explain cmdx SEMI
        0 => SemanticValue::Command(Command {
            explain: ExplainMode::from_code(rhs.int(0)),
            statement: rhs.statement(1).map(|statement| *statement),
        }),
        // ecmd ::= SEMI
        1 => {
            ctx.complain("syntax error: empty request", rhs.span(0));
            SemanticValue::Command(Command::default())
        }
        2 => SemanticValue::Int(1),
        3 => SemanticValue::Int(2),
        4 => statement(Statement::Begin),
        5 => SemanticValue::Int(i32::from(tk::DEFERRED)),
        6 => SemanticValue::Int(i32::from(rhs.major(0))),
        7 | 8 => statement(Statement::Commit),
        9 => statement(Statement::Rollback),
        10 => statement(Statement::Savepoint {
            name: ctx.name(rhs.token(1)),
        }),
        11 => statement(Statement::Release {
            name: ctx.name(rhs.token(2)),
        }),
        12 => statement(Statement::RollbackTo {
            name: ctx.name(rhs.token(4)),
        }),

        // DROP TABLE / DROP VIEW
        73 | 77 => {
            let kind = if rule == 73 { DropKind::Table } else { DropKind::View };
            drop_statement(kind, rhs, None)
        }
        74 => SemanticValue::Int(1),
        75 => SemanticValue::Int(0),
        // cmd ::= createkw VIEW ifnotexists nm eidlist_opt AS select
        76 => {
            let start = rhs.span(0);
            let text = ctx.text(start.to(ctx.last_shifted)).trim().to_string();
            statement(Statement::CreateView(Box::new(ViewDef {
                name: ctx.name(rhs.token(3)),
                if_not_exists: rhs.flag(2),
                columns: rhs.list(4),
                select: rhs.select(6),
                text,
            })))
        }
        78 => SemanticValue::Statement(
            rhs.select(0)
                .map(|select| Box::new(Statement::Select(select))),
        ),

        // cmd ::= with DELETE FROM fullname indexed_opt where_opt
        131 => {
            let table = rhs
                .src_list(3)
                .and_then(|src| src.first_name().map(str::to_string))
                .unwrap_or_default();
            statement(Statement::Delete(Box::new(Delete {
                with: rhs.with(0),
                table,
                indexed_by: rhs.indexed_by(4),
                where_clause: rhs.opt_expr(5),
            })))
        }
        // cmd ::= with UPDATE orconf fullname indexed_opt SET setlist where_opt
        134 => {
            let set = rhs.list(6);
            ctx.check_list_length(set.as_ref(), "set list", rhs.span(5));
            let table = rhs
                .src_list(3)
                .and_then(|src| src.first_name().map(str::to_string))
                .unwrap_or_default();
            statement(Statement::Update(Box::new(Update {
                with: rhs.with(0),
                on_conflict: OnConflict::from_code(rhs.int(2)),
                table,
                indexed_by: rhs.indexed_by(4),
                set,
                where_clause: rhs.opt_expr(7),
            })))
        }
        // setlist ::= setlist COMMA nm EQ expr
        135 => {
            let expr = rhs.opt_expr(4);
            let mut list = ctx.list_append(rhs.list(0), expr)?;
            ctx.set_list_name(&mut list, rhs.token(2));
            SemanticValue::ExprList(Some(list))
        }
        // setlist ::= setlist COMMA LP idlist RP EQ expr
        136 => {
            let span = rhs.span(2).to(rhs.span(5));
            let list = rhs.list(0);
            let columns = rhs.id_list(3);
            let expr = rhs.opt_expr(6);
            SemanticValue::ExprList(ctx.append_vector(list, columns, expr, span)?)
        }
        // setlist ::= nm EQ expr
        137 => {
            let expr = rhs.opt_expr(2);
            let mut list = ctx.list_append(None, expr)?;
            ctx.set_list_name(&mut list, rhs.token(0));
            SemanticValue::ExprList(Some(list))
        }
        // setlist ::= LP idlist RP EQ expr
        138 => {
            let span = rhs.span(0).to(rhs.span(3));
            let columns = rhs.id_list(1);
            let expr = rhs.opt_expr(4);
            SemanticValue::ExprList(ctx.append_vector(None, columns, expr, span)?)
        }
        // cmd ::= with insert_cmd INTO fullname idlist_opt select
        // cmd ::= with insert_cmd INTO fullname idlist_opt DEFAULT VALUES
        139 | 140 => {
            let table = rhs
                .src_list(3)
                .and_then(|src| src.first_name().map(str::to_string))
                .unwrap_or_default();
            let source = if rule == 139 {
                match rhs.select(5) {
                    Some(select) => InsertSource::Select(select),
                    None => return Ok(SemanticValue::Statement(None)),
                }
            } else {
                InsertSource::DefaultValues
            };
            statement(Statement::Insert(Box::new(Insert {
                with: rhs.with(0),
                on_conflict: OnConflict::from_code(rhs.int(1)),
                table,
                columns: rhs.id_list(4),
                source,
            })))
        }
        141 => SemanticValue::Int(rhs.int(1)),
        142 => SemanticValue::Int(OnConflict::Replace.code()),
        143 => SemanticValue::IdList(None),
        144 => SemanticValue::IdList(rhs.id_list(1)),
        145 => {
            let list = rhs.id_list(0);
            SemanticValue::IdList(Some(ctx.id_list_append(list, rhs.token(2))?))
        }
        146 => SemanticValue::IdList(Some(ctx.id_list_append(None, rhs.token(0))?)),

        // cmd ::= createkw uniqueflag INDEX ifnotexists nm ON nm LP sortlist RP where_opt
        205 => statement(Statement::CreateIndex(Box::new(IndexDef {
            name: ctx.name(rhs.token(4)),
            table: ctx.name(rhs.token(6)),
            unique: rhs.flag(1),
            if_not_exists: rhs.flag(3),
            columns: rhs.list(8),
            where_clause: rhs.opt_expr(10),
        }))),
        206 => SemanticValue::Int(OnConflict::Abort.code()),
        207 => SemanticValue::Int(OnConflict::None.code()),
        208 => SemanticValue::ExprList(None),
        209 => SemanticValue::ExprList(rhs.list(1)),
        // eidlist ::= eidlist COMMA nm collate sortorder
        210 => id_list_term(ctx, rhs.list(0), rhs.token(2), rhs.int(3), rhs.int(4))?,
        // eidlist ::= nm collate sortorder
        211 => id_list_term(ctx, None, rhs.token(0), rhs.int(1), rhs.int(2))?,
        212 => SemanticValue::Int(0),
        213 => SemanticValue::Int(1),
        // cmd ::= DROP INDEX ifexists fullname ON nm
        214 => {
            let table = Some(ctx.name(rhs.token(5)));
            drop_statement(DropKind::Index, rhs, table)
        }

        // PRAGMA
        215 => pragma(ctx, rhs.token(1), None, None, false),
        216 | 217 => pragma(ctx, rhs.token(1), Some(rhs.token(3)), None, false),
        218 | 219 => pragma(ctx, rhs.token(1), Some(rhs.token(3)), None, true),
        220 => pragma(ctx, rhs.token(1), Some(rhs.token(5)), Some(rhs.token(3)), false),
        221 | 222 => SemanticValue::Token(rhs.token(1)),

        248 => drop_statement(DropKind::Trigger, rhs, None),
        249 => statement(Statement::Reindex {
            name: None,
            table: None,
        }),
        250 => statement(Statement::Reindex {
            name: Some(ctx.name(rhs.token(1))),
            table: None,
        }),
        251 => statement(Statement::Reindex {
            name: Some(ctx.name(rhs.token(1))),
            table: Some(ctx.name(rhs.token(3))),
        }),
        252 => statement(Statement::Analyze { table: None }),
        253 => statement(Statement::Analyze {
            table: Some(ctx.name(rhs.token(1))),
        }),
        // cmd ::= ALTER TABLE fullname RENAME TO nm
        254 => {
            let table = rhs
                .src_list(2)
                .and_then(|src| src.first_name().map(str::to_string))
                .unwrap_or_default();
            statement(Statement::AlterRename {
                table,
                new_name: ctx.name(rhs.token(5)),
            })
        }

        263 => SemanticValue::Int(0),
        265..=269 => SemanticValue::Empty,
        // input ::= ecmd, cmdx ::= cmd
        _ => pass(rhs),
    };
    Ok(value)
}

/// `DROP TABLE|VIEW|INDEX|TRIGGER ifexists fullname ...`.
fn drop_statement(kind: DropKind, rhs: &mut Rhs<'_>, table: Option<String>) -> SemanticValue {
    let name = rhs
        .src_list(3)
        .and_then(|src| src.first_name().map(str::to_string))
        .unwrap_or_default();
    statement(Statement::Drop(DropStatement {
        kind,
        name,
        if_exists: rhs.flag(2),
        table,
    }))
}

/// One column of an index-like name list. `COLLATE` and sort orders are
/// not allowed there.
fn id_list_term(
    ctx: &mut ParseContext<'_>,
    list: Option<ExprList>,
    name: Token,
    collate: i32,
    sort_order: i32,
) -> Result<SemanticValue, AllocError> {
    let mut list = ctx.list_append(list, None)?;
    ctx.set_list_name(&mut list, name);
    if collate != 0 || sort_order != SortOrder::UNDEFINED {
        let column = ctx.text(name.span);
        ctx.complain(
            format!("syntax error after column name \"{column}\""),
            name.span,
        );
    }
    Ok(SemanticValue::ExprList(Some(list)))
}

fn pragma(
    ctx: &ParseContext<'_>,
    name: Token,
    value: Option<Token>,
    table: Option<Token>,
    negative: bool,
) -> SemanticValue {
    statement(Statement::Pragma(Pragma {
        name: ctx.name(name),
        value: value.map(|token| ctx.name(token)),
        table: table.map(|token| ctx.name(token)),
        negative,
    }))
}
