//! Expression rules.

use super::{pass, Rhs};
use crate::alloc::AllocError;
use crate::ast::{
    ExprFlags, ExprList, ExprOp, ExprPayload, ExprSpan, LikeOp, OnConflict, SelectFlags,
    SemanticValue,
};
use crate::context::{attach, ParseContext, SelectParts};
use crate::grammar::{tk, RuleId};
use crate::lexer::Span;

pub(super) fn reduce(
    ctx: &mut ParseContext<'_>,
    rule: RuleId,
    rhs: &mut Rhs<'_>,
) -> Result<SemanticValue, AllocError> {
    let value = match rule {
        // expr ::= LP expr RP
        147 => {
            let inner = rhs.expr(1);
            ExprSpan::new(inner.expr, rhs.span(0).to(rhs.span(2))).into()
        }
        148 => ctx.span_expr(ExprOp::Null, rhs.token(0))?.into(),
        149 | 150 => ctx.span_expr(ExprOp::Id, rhs.token(0))?.into(),
        // expr ::= nm DOT nm
        151 => {
            let span = rhs.span(0).to(rhs.span(2));
            let table = ctx.token_expr(ExprOp::Id, rhs.token(0))?;
            let column = ctx.token_expr(ExprOp::Id, rhs.token(2))?;
            ExprSpan::new(ctx.pexpr(ExprOp::Dot, Some(table), Some(column), span)?, span).into()
        }
        // expr ::= nm DOT nm DOT nm
        152 => {
            let span = rhs.span(0).to(rhs.span(4));
            let schema = ctx.token_expr(ExprOp::Id, rhs.token(0))?;
            let table = ctx.token_expr(ExprOp::Id, rhs.token(2))?;
            let column = ctx.token_expr(ExprOp::Id, rhs.token(4))?;
            let inner_span = rhs.span(2).to(rhs.span(4));
            let inner = ctx.pexpr(ExprOp::Dot, Some(table), Some(column), inner_span)?;
            ExprSpan::new(ctx.pexpr(ExprOp::Dot, Some(schema), inner, span)?, span).into()
        }
        // term ::= FLOAT|BLOB
        153 => {
            let op = if rhs.major(0) == tk::BLOB {
                ExprOp::Blob
            } else {
                ExprOp::Float
            };
            ctx.span_expr(op, rhs.token(0))?.into()
        }
        154 => ctx.span_expr(ExprOp::String, rhs.token(0))?.into(),
        // term ::= INTEGER
        155 => {
            let token = rhs.token(0);
            let mut expr = ctx.token_expr(ExprOp::Integer, token)?;
            expr.flags.insert(ExprFlags::LEAF);
            ExprSpan::new(Some(expr), token.span).into()
        }
        // expr ::= VARIABLE
        156 => {
            let token = rhs.token(0);
            let text = ctx.text(token.span);
            if text.starts_with('#') && text[1..].starts_with(|c: char| c.is_ascii_digit()) {
                ctx.complain(format!("near \"{text}\": syntax error"), token.span);
                ExprSpan::new(None, token.span).into()
            } else {
                let mut value = ctx.span_expr(ExprOp::Variable, token)?;
                if let Some(expr) = value.expr.as_mut() {
                    ctx.assign_var_number(expr);
                }
                value.into()
            }
        }
        // expr ::= expr COLLATE ID|STRING
        157 => {
            let operand = rhs.expr(0);
            let span = operand.span.to(rhs.span(2));
            ExprSpan::new(ctx.collate(operand.expr, rhs.token(2), span)?, span).into()
        }
        // expr ::= CAST LP expr AS typetoken RP
        158 => {
            let span = rhs.span(0).to(rhs.span(5));
            let operand = rhs.expr(2);
            let type_token = rhs.token(4);
            let type_name = (!type_token.span.is_empty()).then(|| ctx.name(type_token));
            let mut cast = attach(ctx.expr(ExprOp::Cast, type_name, span)?, operand.expr, None);
            ctx.set_height(&mut cast);
            ExprSpan::new(Some(cast), span).into()
        }
        // expr ::= ID|INDEXED LP distinct exprlist RP
        159 => {
            let name = rhs.token(0);
            let span = name.span.to(rhs.span(4));
            let args = rhs.list(3);
            if args
                .as_ref()
                .is_some_and(|args| args.len() > ctx.config().function_arg_limit)
            {
                let text = ctx.text(name.span);
                ctx.complain(format!("too many arguments on function {text}"), span);
            }
            let mut call = ctx.function(args, name, span)?;
            if rhs.int(2) == i32::from(SelectFlags::DISTINCT.bits()) {
                call.flags.insert(ExprFlags::DISTINCT);
            }
            ExprSpan::new(Some(call), span).into()
        }
        // expr ::= ID|INDEXED LP STAR RP
        160 => {
            let span = rhs.span(0).to(rhs.span(3));
            ExprSpan::new(Some(ctx.function(None, rhs.token(0), span)?), span).into()
        }
        // term ::= CTIME_KW
        161 => {
            let token = rhs.token(0);
            ExprSpan::new(Some(ctx.function(None, token, token.span)?), token.span).into()
        }
        // expr ::= LP nexprlist COMMA expr RP
        162 => {
            let span = rhs.span(0).to(rhs.span(4));
            let last = rhs.opt_expr(3);
            let list = ctx.list_append(rhs.list(1), last)?;
            let mut vector = ctx.expr(ExprOp::Vector, None, span)?;
            vector.x = ExprPayload::List(list);
            ctx.set_height(&mut vector);
            ExprSpan::new(Some(vector), span).into()
        }
        // Binary operators
        163..=170 => {
            let op = match rule {
                163 => ExprOp::And,
                164 => ExprOp::Or,
                170 => ExprOp::Concat,
                _ => ExprOp::from_terminal(rhs.major(1)).unwrap_or(ExprOp::Eq),
            };
            binary(ctx, op, rhs.expr(0), rhs.expr(2))?.into()
        }
        171 => SemanticValue::LikeOp(LikeOp {
            token: rhs.token(0),
            negated: false,
        }),
        172 => SemanticValue::LikeOp(LikeOp {
            token: rhs.token(1),
            negated: true,
        }),
        // expr ::= expr likeop expr [ESCAPE expr]
        173 | 174 => {
            let Some(like) = rhs.like_op(1) else {
                return Ok(SemanticValue::Expr(ExprSpan::default()));
            };
            let lhs = rhs.expr(0);
            let pattern = rhs.expr(2);
            let escape = (rule == 174).then(|| rhs.expr(4));
            let end = escape.as_ref().map_or(pattern.span, |escape| escape.span);
            let span = lhs.span.to(end);
            let mut args = ctx.list_append(None, pattern.expr)?;
            args = ctx.list_append(Some(args), lhs.expr)?;
            if let Some(escape) = escape {
                args = ctx.list_append(Some(args), escape.expr)?;
            }
            let call = ctx.function(Some(args), like.token, span)?;
            let mut value = ExprSpan::new(Some(call), span);
            ctx.negate(like.negated, &mut value)?;
            if let Some(expr) = value.expr.as_mut() {
                expr.flags.insert(ExprFlags::INFIX_FUNC);
            }
            value.into()
        }
        // expr ::= expr ISNULL|NOTNULL
        175 => {
            let op = ExprOp::from_terminal(rhs.major(1)).unwrap_or(ExprOp::IsNull);
            postfix(ctx, op, rhs.expr(0), rhs.span(1))?.into()
        }
        // expr ::= expr NOT NULL
        176 => postfix(ctx, ExprOp::NotNull, rhs.expr(0), rhs.span(2))?.into(),
        // expr ::= expr IS [NOT] expr
        177 | 178 => {
            let (op, null_op, right) = if rule == 177 {
                (ExprOp::Is, ExprOp::IsNull, 2)
            } else {
                (ExprOp::IsNot, ExprOp::NotNull, 3)
            };
            let mut value = binary(ctx, op, rhs.expr(0), rhs.expr(right))?;
            if let Some(expr) = value.expr.as_mut() {
                if expr.right.as_ref().is_some_and(|right| right.op == ExprOp::Null) {
                    expr.op = null_op;
                    expr.right = None;
                    expr.update_height();
                }
            }
            value.into()
        }
        // Prefix operators
        179..=182 => {
            let op = match rule {
                179 => ExprOp::Not,
                180 => ExprOp::BitNot,
                181 => ExprOp::UMinus,
                _ => ExprOp::UPlus,
            };
            let operand = rhs.expr(1);
            let span = rhs.span(0).to(operand.span);
            ExprSpan::new(ctx.pexpr(op, operand.expr, None, span)?, span).into()
        }
        183 | 186 => SemanticValue::Int(0),
        184 | 187 => SemanticValue::Int(1),
        // expr ::= expr between_op expr AND expr
        185 => {
            let operand = rhs.expr(0);
            let low = rhs.opt_expr(2);
            let high = rhs.expr(4);
            let span = operand.span.to(high.span);
            let mut bounds = ctx.list_append(None, low)?;
            bounds = ctx.list_append(Some(bounds), high.expr)?;
            let mut value = ExprSpan::new(
                ctx.pexpr(ExprOp::Between, operand.expr, None, span)?,
                span,
            );
            if let Some(expr) = value.expr.as_mut() {
                expr.x = ExprPayload::List(bounds);
                ctx.set_height(expr);
            }
            ctx.negate(rhs.flag(1), &mut value)?;
            value.into()
        }
        // expr ::= expr in_op LP exprlist RP
        188 => {
            let operand = rhs.expr(0);
            let span = operand.span.to(rhs.span(4));
            in_list(ctx, rhs.flag(1), operand, rhs.list(3), span)?.into()
        }
        // expr ::= LP select RP
        189 => {
            let span = rhs.span(0).to(rhs.span(2));
            let select = rhs.select(1);
            let node = ctx.expr(ExprOp::Select, None, span)?;
            ExprSpan::new(ctx.add_select(Some(node), select), span).into()
        }
        // expr ::= expr in_op LP select RP
        190 => {
            let operand = rhs.expr(0);
            let span = operand.span.to(rhs.span(4));
            let select = rhs.select(3);
            let node = ctx.pexpr(ExprOp::In, operand.expr, None, span)?;
            let mut value = ExprSpan::new(ctx.add_select(node, select), span);
            ctx.negate(rhs.flag(1), &mut value)?;
            value.into()
        }
        // expr ::= expr in_op nm paren_exprlist
        191 => {
            let operand = rhs.expr(0);
            let table = rhs.token(2);
            let span = operand.span.to(table.span);
            let src = ctx.src_list_append(None, Some(table))?;
            let mut select = ctx.select_new(SelectParts {
                src: Some(src),
                ..SelectParts::default()
            })?;
            if let Some(args) = rhs.list(3) {
                if let Some(item) = select.src.items.last_mut() {
                    item.func_args = Some(args);
                }
            }
            let node = ctx.pexpr(ExprOp::In, operand.expr, None, span)?;
            let mut value = ExprSpan::new(ctx.add_select(node, Some(select)), span);
            ctx.negate(rhs.flag(1), &mut value)?;
            value.into()
        }
        // expr ::= EXISTS LP select RP
        192 => {
            let span = rhs.span(0).to(rhs.span(3));
            let select = rhs.select(2);
            let node = ctx.expr(ExprOp::Exists, None, span)?;
            ExprSpan::new(ctx.add_select(Some(node), select), span).into()
        }
        // expr ::= CASE case_operand case_exprlist case_else END
        193 => {
            let span = rhs.span(0).to(rhs.span(4));
            let operand = rhs.opt_expr(1);
            let arms = rhs.list(2);
            let otherwise = rhs.opt_expr(3);
            let mut case = ctx.expr(ExprOp::Case, None, span)?;
            case.left = operand;
            if let Some(mut arms) = arms {
                if otherwise.is_some() {
                    arms.push(otherwise);
                }
                case.x = ExprPayload::List(arms);
            }
            ctx.set_height(&mut case);
            ExprSpan::new(Some(case), span).into()
        }
        // case_exprlist ::= case_exprlist WHEN expr THEN expr
        194 => {
            let when = rhs.opt_expr(2);
            let then = rhs.opt_expr(4);
            let list = ctx.list_append(rhs.list(0), when)?;
            SemanticValue::ExprList(Some(ctx.list_append(Some(list), then)?))
        }
        // case_exprlist ::= WHEN expr THEN expr
        195 => {
            let when = rhs.opt_expr(1);
            let then = rhs.opt_expr(3);
            let list = ctx.list_append(None, when)?;
            SemanticValue::ExprList(Some(ctx.list_append(Some(list), then)?))
        }
        196 => SemanticValue::OptExpr(rhs.opt_expr(1)),
        197 | 199 => SemanticValue::OptExpr(None),
        198 => SemanticValue::OptExpr(rhs.opt_expr(0)),
        200 | 203 => SemanticValue::ExprList(None),
        // nexprlist ::= nexprlist COMMA expr
        201 => {
            let expr = rhs.opt_expr(2);
            SemanticValue::ExprList(Some(ctx.list_append(rhs.list(0), expr)?))
        }
        // nexprlist ::= expr
        202 => {
            let expr = rhs.opt_expr(0);
            SemanticValue::ExprList(Some(ctx.list_append(None, expr)?))
        }
        204 => SemanticValue::ExprList(rhs.list(1)),

        // expr ::= RAISE LP IGNORE RP
        243 => {
            let span = rhs.span(0).to(rhs.span(3));
            let mut raise = ctx.expr(ExprOp::Raise, None, span)?;
            raise.on_error = Some(OnConflict::Ignore);
            ExprSpan::new(Some(raise), span).into()
        }
        // expr ::= RAISE LP raisetype COMMA nm RP
        244 => {
            let span = rhs.span(0).to(rhs.span(5));
            let mut raise = ctx.expr(ExprOp::Raise, Some(ctx.name(rhs.token(4))), span)?;
            raise.on_error = Some(OnConflict::from_code(rhs.int(2)));
            ExprSpan::new(Some(raise), span).into()
        }
        245 => SemanticValue::Int(OnConflict::Rollback.code()),
        246 => SemanticValue::Int(OnConflict::Abort.code()),
        247 => SemanticValue::Int(OnConflict::Fail.code()),
        // expr ::= term, exprlist ::= nexprlist
        _ => pass(rhs),
    };
    Ok(value)
}

fn binary(
    ctx: &mut ParseContext<'_>,
    op: ExprOp,
    left: ExprSpan,
    right: ExprSpan,
) -> Result<ExprSpan, AllocError> {
    let span = left.span.to(right.span);
    Ok(ExprSpan::new(
        ctx.pexpr(op, left.expr, right.expr, span)?,
        span,
    ))
}

fn postfix(
    ctx: &mut ParseContext<'_>,
    op: ExprOp,
    operand: ExprSpan,
    end: Span,
) -> Result<ExprSpan, AllocError> {
    let span = operand.span.to(end);
    Ok(ExprSpan::new(ctx.pexpr(op, operand.expr, None, span)?, span))
}

/// `x [NOT] IN (list)`. An empty list is a constant and a single item
/// is a comparison.
fn in_list(
    ctx: &mut ParseContext<'_>,
    negated: bool,
    operand: ExprSpan,
    list: Option<ExprList>,
    span: Span,
) -> Result<ExprSpan, AllocError> {
    let Some(mut list) = list else {
        let constant = ctx.integer(i32::from(negated), span)?;
        return Ok(ExprSpan::new(Some(constant), span));
    };
    if list.len() == 1 {
        let mut right = list.items.pop().and_then(|item| item.expr);
        if let Some(expr) = right.as_mut() {
            expr.flags.remove(ExprFlags::COLLATE);
            expr.flags.insert(ExprFlags::GENERIC);
        }
        let op = if negated { ExprOp::Ne } else { ExprOp::Eq };
        return Ok(ExprSpan::new(ctx.pexpr(op, operand.expr, right, span)?, span));
    }
    let mut value = ExprSpan::new(ctx.pexpr(ExprOp::In, operand.expr, None, span)?, span);
    if let Some(expr) = value.expr.as_mut() {
        expr.x = ExprPayload::List(list);
        ctx.set_height(expr);
    }
    ctx.negate(negated, &mut value)?;
    Ok(value)
}
