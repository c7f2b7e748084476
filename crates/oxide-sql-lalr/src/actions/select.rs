//! SELECT, compound selects, FROM clauses and WITH.

use super::{pass, Rhs};
use crate::alloc::AllocError;
use crate::ast::{
    CompoundOp, Expr, ExprList, ExprOp, IdList, IndexedBy, JoinType, Limit, Select, SelectFlags,
    SemanticValue, SortOrder, SrcList,
};
use crate::context::{ParseContext, SelectParts};
use crate::grammar::{tk, RuleId};
use crate::lexer::Token;

pub(super) fn reduce(
    ctx: &mut ParseContext<'_>,
    rule: RuleId,
    rhs: &mut Rhs<'_>,
) -> Result<SemanticValue, AllocError> {
    let value = match rule {
        // select ::= with selectnowith
        79 => {
            let with = rhs.with(0);
            let mut select = rhs.select(1);
            if let Some(select) = select.as_mut() {
                select.with = with;
                let span = ctx.last_shifted;
                ctx.double_link(select, span);
            }
            SemanticValue::Select(select)
        }
        // selectnowith ::= selectnowith multiselect_op oneselect
        80 => {
            let left = rhs.select(0);
            let right = rhs.select(2);
            let op = CompoundOp::from_code(rhs.int(1));
            SemanticValue::Select(compound(ctx, left, op, right)?)
        }
        81 | 83 => SemanticValue::Int(i32::from(rhs.major(0))),
        82 => SemanticValue::Int(i32::from(tk::ALL)),
        // oneselect ::= SELECT distinct selcollist from where_opt groupby_opt
        //               having_opt orderby_opt limit_opt
        84 => {
            let Limit { limit, offset } = rhs.limit(8);
            let parts = SelectParts {
                result: rhs.list(2),
                src: rhs.src_list(3),
                where_clause: rhs.opt_expr(4),
                group_by: rhs.list(5),
                having: rhs.opt_expr(6),
                order_by: rhs.list(7),
                flags: select_flags(rhs.int(1)),
                limit,
                offset,
            };
            SemanticValue::Select(Some(ctx.select_new(parts)?))
        }
        // values ::= VALUES LP nexprlist RP
        85 => {
            let parts = SelectParts {
                result: rhs.list(2),
                flags: SelectFlags::VALUES,
                ..SelectParts::default()
            };
            SemanticValue::Select(Some(ctx.select_new(parts)?))
        }
        // values ::= values COMMA LP exprlist RP
        86 => {
            let mut left = rhs.select(0);
            let parts = SelectParts {
                result: rhs.list(3),
                flags: SelectFlags::VALUES.union(SelectFlags::MULTI_VALUE),
                ..SelectParts::default()
            };
            let mut right = ctx.select_new(parts)?;
            if let Some(left) = left.as_mut() {
                left.flags.remove(SelectFlags::MULTI_VALUE);
            }
            right.op = CompoundOp::UnionAll;
            right.prior = left;
            SemanticValue::Select(Some(right))
        }
        87 => SemanticValue::Int(i32::from(SelectFlags::DISTINCT.bits())),
        88 => SemanticValue::Int(i32::from(SelectFlags::ALL.bits())),
        89 => SemanticValue::Int(0),
        90 | 116 | 123 => SemanticValue::ExprList(None),
        // selcollist ::= sclp expr as
        91 => {
            let column = rhs.expr(1);
            let alias = rhs.token(2);
            let text = ctx.text(column.span).to_string();
            let mut list = ctx.list_append(rhs.list(0), column.expr)?;
            if !alias.span.is_empty() {
                ctx.set_list_name(&mut list, alias);
            }
            if let Some(item) = list.last_mut() {
                item.span = Some(text);
            }
            SemanticValue::ExprList(Some(list))
        }
        // selcollist ::= sclp STAR
        92 => {
            let star = ctx.expr(ExprOp::Asterisk, None, rhs.span(1))?;
            SemanticValue::ExprList(Some(ctx.list_append(rhs.list(0), Some(star))?))
        }
        // selcollist ::= sclp nm DOT STAR
        93 => {
            let span = rhs.span(1).to(rhs.span(3));
            let star = ctx.pexpr(ExprOp::Asterisk, None, None, rhs.span(3))?;
            let mut table = ctx.token_expr(ExprOp::Id, rhs.token(1))?;
            table.span = rhs.span(1);
            let dot = ctx.pexpr(ExprOp::Dot, Some(table), star, span)?;
            SemanticValue::ExprList(Some(ctx.list_append(rhs.list(0), dot)?))
        }
        94 => SemanticValue::Token(rhs.token(1)),
        95 => SemanticValue::Token(Token::default()),
        96 | 99 => SemanticValue::SrcList(None),
        // from ::= FROM seltablist
        97 => {
            let mut src = rhs.src_list(1);
            if let Some(src) = src.as_mut() {
                src.shift_join_types();
            }
            SemanticValue::SrcList(src)
        }
        // stl_prefix ::= seltablist joinop
        98 => {
            let mut src = rhs.src_list(0);
            let join = JoinType::from_bits(u8::try_from(rhs.int(1)).unwrap_or_default());
            if let Some(last) = src.as_mut().and_then(|src| src.items.last_mut()) {
                last.join_type = join;
            }
            SemanticValue::SrcList(src)
        }
        // seltablist ::= stl_prefix nm as indexed_opt on_opt using_opt
        100 => {
            let prefix = rhs.src_list(0);
            let indexed_by = rhs.indexed_by(3);
            let on = rhs.opt_expr(4);
            let using = rhs.id_list(5);
            let mut src =
                ctx.append_from_term(prefix, Some(rhs.token(1)), rhs.token(2), None, on, using)?;
            if let Some(last) = src.as_mut().and_then(|src| src.items.last_mut()) {
                last.indexed_by = indexed_by;
            }
            SemanticValue::SrcList(src)
        }
        // seltablist ::= stl_prefix nm LP exprlist RP as on_opt using_opt
        101 => {
            let prefix = rhs.src_list(0);
            let args = rhs.list(3);
            let on = rhs.opt_expr(6);
            let using = rhs.id_list(7);
            let mut src =
                ctx.append_from_term(prefix, Some(rhs.token(1)), rhs.token(5), None, on, using)?;
            if let Some(last) = src.as_mut().and_then(|src| src.items.last_mut()) {
                last.func_args = args;
            }
            SemanticValue::SrcList(src)
        }
        // seltablist ::= stl_prefix LP select RP as on_opt using_opt
        102 => {
            let prefix = rhs.src_list(0);
            let select = rhs.select(2);
            let on = rhs.opt_expr(5);
            let using = rhs.id_list(6);
            SemanticValue::SrcList(ctx.append_from_term(
                prefix,
                None,
                rhs.token(4),
                select,
                on,
                using,
            )?)
        }
        // seltablist ::= stl_prefix LP seltablist RP as on_opt using_opt
        103 => {
            let prefix = rhs.src_list(0);
            let inner = rhs.src_list(2);
            let alias = rhs.token(4);
            let on = rhs.opt_expr(5);
            let using = rhs.id_list(6);
            SemanticValue::SrcList(nested_from(ctx, prefix, inner, alias, on, using)?)
        }
        // fullname ::= nm
        104 => SemanticValue::SrcList(Some(ctx.src_list_append(None, Some(rhs.token(0)))?)),
        105 => SemanticValue::Int(i32::from(JoinType::INNER.bits())),
        106 => join(ctx.join_type(rhs.token(0), None, None)),
        107 => join(ctx.join_type(rhs.token(0), Some(rhs.token(1)), None)),
        108 => join(ctx.join_type(rhs.token(0), Some(rhs.token(1)), Some(rhs.token(2)))),
        109 | 126 | 133 => SemanticValue::OptExpr(rhs.opt_expr(1)),
        110 | 125 | 132 => SemanticValue::OptExpr(None),
        111 => SemanticValue::IndexedBy(IndexedBy::Default),
        112 => SemanticValue::IndexedBy(IndexedBy::Named(ctx.name(rhs.token(2)))),
        113 => SemanticValue::IndexedBy(IndexedBy::NotIndexed),
        114 => SemanticValue::IdList(rhs.id_list(2)),
        115 => SemanticValue::IdList(None),
        117 | 124 => SemanticValue::ExprList(rhs.list(2)),
        // sortlist ::= sortlist COMMA expr sortorder
        118 => {
            let expr = rhs.opt_expr(2);
            let list = ctx.list_append(rhs.list(0), expr)?;
            sorted(list, rhs.int(3))
        }
        // sortlist ::= expr sortorder
        119 => {
            let expr = rhs.opt_expr(0);
            let list = ctx.list_append(None, expr)?;
            sorted(list, rhs.int(1))
        }
        120 => SemanticValue::Int(0),
        121 => SemanticValue::Int(1),
        122 => SemanticValue::Int(SortOrder::UNDEFINED),
        127 => SemanticValue::Limit(Limit::default()),
        128 => SemanticValue::Limit(Limit {
            limit: rhs.opt_expr(1),
            offset: None,
        }),
        129 => SemanticValue::Limit(Limit {
            limit: rhs.opt_expr(1),
            offset: rhs.opt_expr(3),
        }),
        // LIMIT offset, count
        130 => SemanticValue::Limit(Limit {
            offset: rhs.opt_expr(1),
            limit: rhs.opt_expr(3),
        }),

        257 => SemanticValue::With(None),
        258 => SemanticValue::With(rhs.with(1)),
        // with ::= WITH RECURSIVE wqlist
        259 => {
            let mut with = rhs.with(2);
            if let Some(with) = with.as_mut() {
                with.recursive = true;
            }
            SemanticValue::With(with)
        }
        // wqlist ::= nm eidlist_opt AS LP select RP
        260 => {
            let columns = rhs.list(1);
            let select = rhs.select(4);
            SemanticValue::With(Some(ctx.with_add(None, rhs.token(0), columns, select)?))
        }
        // wqlist ::= wqlist COMMA nm eidlist_opt AS LP select RP
        261 => {
            let with = rhs.with(0);
            let columns = rhs.list(3);
            let select = rhs.select(6);
            SemanticValue::With(Some(ctx.with_add(with, rhs.token(2), columns, select)?))
        }
        // sclp ::= selcollist COMMA, and the plain pass-throughs
        _ => pass(rhs),
    };
    Ok(value)
}

fn select_flags(code: i32) -> SelectFlags {
    SelectFlags::from_bits(u16::try_from(code).unwrap_or_default())
}

fn join(join: JoinType) -> SemanticValue {
    SemanticValue::Int(i32::from(join.bits()))
}

fn sorted(mut list: ExprList, order: i32) -> SemanticValue {
    if let Some(item) = list.last_mut() {
        item.sort_order = SortOrder::from_code(order);
    }
    SemanticValue::ExprList(Some(list))
}

/// Joins `right` onto the chain ending in `left`.
///
/// A right arm that is itself a compound (from a parenthesised VALUES
/// list) is wrapped as `SELECT * FROM (right)` first.
fn compound(
    ctx: &mut ParseContext<'_>,
    mut left: Option<Box<Select>>,
    op: CompoundOp,
    right: Option<Box<Select>>,
) -> Result<Option<Box<Select>>, AllocError> {
    let Some(mut right) = right else {
        return Ok(None);
    };
    if right.prior.is_some() {
        let span = ctx.last_shifted;
        ctx.double_link(&mut right, span);
        let src = ctx.append_from_term(None, None, Token::default(), Some(right), None, None)?;
        right = ctx.select_new(SelectParts {
            src,
            ..SelectParts::default()
        })?;
    }
    if let Some(left) = left.as_mut() {
        left.flags.remove(SelectFlags::MULTI_VALUE);
    }
    right.op = op;
    right.prior = left;
    right.flags.remove(SelectFlags::MULTI_VALUE);
    Ok(Some(right))
}

/// `( seltablist )` used as one FROM term.
fn nested_from(
    ctx: &mut ParseContext<'_>,
    prefix: Option<SrcList>,
    inner: Option<SrcList>,
    alias: Token,
    on: Option<Box<Expr>>,
    using: Option<IdList>,
) -> Result<Option<SrcList>, AllocError> {
    let Some(mut inner) = inner else {
        return Ok(prefix);
    };
    if prefix.is_none() && alias.span.is_empty() && on.is_none() && using.is_none() {
        return Ok(Some(inner));
    }
    if inner.len() == 1 {
        let item = inner.items.remove(0);
        let mut src = ctx.append_from_term(prefix, None, alias, item.select, on, using)?;
        if let Some(last) = src.as_mut().and_then(|src| src.items.last_mut()) {
            last.name = item.name;
            last.func_args = item.func_args;
            last.indexed_by = item.indexed_by;
        }
        return Ok(src);
    }
    inner.shift_join_types();
    let subquery = ctx.select_new(SelectParts {
        src: Some(inner),
        flags: SelectFlags::NESTED_FROM,
        ..SelectParts::default()
    })?;
    ctx.append_from_term(prefix, None, alias, Some(subquery), on, using)
}
