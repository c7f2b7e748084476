//! `CREATE TRIGGER` and the statements of a trigger body.

use super::{pass, Rhs};
use crate::alloc::{AllocError, NodeKind};
use crate::ast::{
    OnConflict, SemanticValue, Statement, TriggerDef, TriggerEvent, TriggerEventKind,
    TriggerStep, TriggerStepKind, TriggerTime,
};
use crate::context::{ParseContext, PendingTrigger};
use crate::grammar::{tk, RuleId};

fn time_code(time: TriggerTime) -> i32 {
    match time {
        TriggerTime::Before => 0,
        TriggerTime::After => 1,
        TriggerTime::InsteadOf => 2,
    }
}

fn time_from_code(code: i32) -> TriggerTime {
    match code {
        1 => TriggerTime::After,
        2 => TriggerTime::InsteadOf,
        _ => TriggerTime::Before,
    }
}

pub(super) fn reduce(
    ctx: &mut ParseContext<'_>,
    rule: RuleId,
    rhs: &mut Rhs<'_>,
) -> Result<SemanticValue, AllocError> {
    let value = match rule {
        // cmd ::= createkw trigger_decl BEGIN trigger_cmd_list END
        223 => {
            let steps = rhs.steps(3);
            let Some(pending) = ctx.trigger.take() else {
                return Ok(SemanticValue::Statement(None));
            };
            let body = ctx.text(rhs.span(1).to(rhs.span(4)));
            SemanticValue::Statement(Some(Box::new(Statement::CreateTrigger(Box::new(
                TriggerDef {
                    name: pending.name,
                    if_not_exists: pending.if_not_exists,
                    time: pending.time,
                    event: pending.event,
                    table: pending.table,
                    when: pending.when,
                    steps,
                    text: format!("CREATE TRIGGER {body}"),
                },
            )))))
        }
        // trigger_decl ::= TRIGGER ifnotexists nm trigger_time trigger_event
        //                  ON fullname foreach_clause when_clause
        224 => {
            let name = rhs.token(2);
            let event = rhs.trigger_event(4).unwrap_or(TriggerEvent {
                kind: TriggerEventKind::Delete,
                columns: None,
            });
            let table = rhs
                .src_list(6)
                .and_then(|src| src.first_name().map(str::to_string))
                .unwrap_or_default();
            ctx.trigger = Some(PendingTrigger {
                name: ctx.name(name),
                if_not_exists: rhs.flag(1),
                time: time_from_code(rhs.int(3)),
                event,
                table,
                when: rhs.opt_expr(8),
            });
            SemanticValue::Token(name)
        }
        225 | 228 => SemanticValue::Int(time_code(TriggerTime::Before)),
        226 => SemanticValue::Int(time_code(TriggerTime::After)),
        227 => SemanticValue::Int(time_code(TriggerTime::InsteadOf)),
        229 => {
            let kind = if rhs.major(0) == tk::DELETE {
                TriggerEventKind::Delete
            } else {
                TriggerEventKind::Insert
            };
            SemanticValue::TriggerEvent(TriggerEvent {
                kind,
                columns: None,
            })
        }
        230 => SemanticValue::TriggerEvent(TriggerEvent {
            kind: TriggerEventKind::Update,
            columns: None,
        }),
        231 => SemanticValue::TriggerEvent(TriggerEvent {
            kind: TriggerEventKind::Update,
            columns: rhs.id_list(2),
        }),
        232 => SemanticValue::OptExpr(None),
        233 => SemanticValue::OptExpr(rhs.opt_expr(1)),
        234 => {
            let mut steps = rhs.steps(0);
            steps.append(&mut rhs.steps(1));
            SemanticValue::TriggerSteps(steps)
        }
        235 => SemanticValue::TriggerSteps(rhs.steps(0)),
        // trnm ::= nm DOT nm
        236 => {
            ctx.complain(
                "qualified table names are not allowed on INSERT, UPDATE, and DELETE \
                 statements within triggers",
                rhs.span(0).to(rhs.span(2)),
            );
            SemanticValue::Token(rhs.token(2))
        }
        237 => {
            ctx.complain(
                "the INDEXED BY clause is not allowed on UPDATE or DELETE statements \
                 within triggers",
                rhs.span(0).to(rhs.span(2)),
            );
            SemanticValue::Empty
        }
        238 => {
            ctx.complain(
                "the NOT INDEXED clause is not allowed on UPDATE or DELETE statements \
                 within triggers",
                rhs.span(0).to(rhs.span(1)),
            );
            SemanticValue::Empty
        }
        // trigger_cmd ::= UPDATE orconf trnm tridxby SET setlist where_opt
        239 => {
            let set = rhs.list(5);
            ctx.check_list_length(set.as_ref(), "set list", rhs.span(4));
            step(
                ctx,
                TriggerStepKind::Update {
                    table: ctx.name(rhs.token(2)),
                    set,
                    where_clause: rhs.opt_expr(6),
                    on_conflict: OnConflict::from_code(rhs.int(1)),
                },
            )?
        }
        // trigger_cmd ::= insert_cmd INTO trnm idlist_opt select
        240 => step(
            ctx,
            TriggerStepKind::Insert {
                table: ctx.name(rhs.token(2)),
                columns: rhs.id_list(3),
                select: rhs.select(4),
                on_conflict: OnConflict::from_code(rhs.int(0)),
            },
        )?,
        // trigger_cmd ::= DELETE FROM trnm tridxby where_opt
        241 => step(
            ctx,
            TriggerStepKind::Delete {
                table: ctx.name(rhs.token(2)),
                where_clause: rhs.opt_expr(4),
            },
        )?,
        242 => step(ctx, TriggerStepKind::Select(rhs.select(0)))?,
        299 | 300 | 302 => SemanticValue::Empty,
        // trnm ::= nm
        _ => pass(rhs),
    };
    Ok(value)
}

fn step(ctx: &ParseContext<'_>, kind: TriggerStepKind) -> Result<SemanticValue, AllocError> {
    let lease = ctx.lease(NodeKind::TriggerStep)?;
    Ok(SemanticValue::TriggerSteps(vec![TriggerStep::new(
        kind, lease,
    )]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_time_codes() {
        for time in [TriggerTime::Before, TriggerTime::After, TriggerTime::InsteadOf] {
            assert_eq!(time_from_code(time_code(time)), time);
        }
        assert_eq!(time_from_code(-1), TriggerTime::Before);
    }
}
