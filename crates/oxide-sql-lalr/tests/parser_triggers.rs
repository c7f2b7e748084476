//! Tests for CREATE TRIGGER and trigger bodies.

mod common;
use common::*;

use oxide_sql_lalr::ast::{ExprOp, OnConflict, TriggerEventKind, TriggerStepKind, TriggerTime};

#[test]
fn trigger_after_insert() {
    let sql = "CREATE TRIGGER tr AFTER INSERT ON t BEGIN INSERT INTO log VALUES (new.a); END";
    let t = parse_trigger(sql);
    assert_eq!(t.name, "tr");
    assert!(!t.if_not_exists);
    assert_eq!(t.time, TriggerTime::After);
    assert_eq!(t.event.kind, TriggerEventKind::Insert);
    assert!(t.event.columns.is_none());
    assert_eq!(t.table, "t");
    assert!(t.when.is_none());
    assert_eq!(t.text, sql);

    assert_eq!(t.steps.len(), 1);
    let TriggerStepKind::Insert {
        table,
        columns,
        select,
        on_conflict,
    } = &t.steps[0].kind
    else {
        panic!("Expected an INSERT step, got {:?}", t.steps[0].kind);
    };
    assert_eq!(table, "log");
    assert!(columns.is_none());
    assert!(select.is_some());
    assert_eq!(*on_conflict, OnConflict::Default);
}

#[test]
fn trigger_before_update_of_with_body() {
    let t = parse_trigger(
        "CREATE TRIGGER IF NOT EXISTS tr BEFORE UPDATE OF a, b ON t FOR EACH ROW \
         WHEN old.a <> new.a BEGIN UPDATE u SET x = new.a WHERE y = old.a; \
         DELETE FROM v WHERE z = 1; SELECT RAISE(ROLLBACK, 'no'); END",
    );
    assert!(t.if_not_exists);
    assert_eq!(t.time, TriggerTime::Before);
    assert_eq!(t.event.kind, TriggerEventKind::Update);
    assert_eq!(
        t.event.columns.as_ref().unwrap().names,
        vec!["a".to_string(), "b".to_string()]
    );
    assert_eq!(t.when.as_ref().unwrap().op, ExprOp::Ne);
    assert!(t.text.starts_with("CREATE TRIGGER tr BEFORE UPDATE OF a, b ON t"));
    assert!(t.text.ends_with("END"));

    assert_eq!(t.steps.len(), 3);
    match &t.steps[0].kind {
        TriggerStepKind::Update {
            table,
            set,
            where_clause,
            ..
        } => {
            assert_eq!(table, "u");
            let names: Vec<_> = set.as_ref().unwrap().names().collect();
            assert_eq!(names, vec![Some("x")]);
            assert!(where_clause.is_some());
        }
        other => panic!("Expected an UPDATE step, got {other:?}"),
    }
    match &t.steps[1].kind {
        TriggerStepKind::Delete {
            table,
            where_clause,
        } => {
            assert_eq!(table, "v");
            assert!(where_clause.is_some());
        }
        other => panic!("Expected a DELETE step, got {other:?}"),
    }
    match &t.steps[2].kind {
        TriggerStepKind::Select(Some(select)) => {
            let raise = select.result.exprs().next().unwrap();
            assert_eq!(raise.op, ExprOp::Raise);
            assert_eq!(raise.on_error, Some(OnConflict::Rollback));
        }
        other => panic!("Expected a SELECT step, got {other:?}"),
    }
}

#[test]
fn trigger_instead_of_delete() {
    let t = parse_trigger("CREATE TRIGGER tr INSTEAD OF DELETE ON v BEGIN SELECT 1; END");
    assert_eq!(t.time, TriggerTime::InsteadOf);
    assert_eq!(t.event.kind, TriggerEventKind::Delete);
    assert_eq!(t.table, "v");
}

#[test]
fn trigger_step_rejects_qualified_table() {
    let parsed = parse_full("CREATE TRIGGER tr DELETE ON t BEGIN DELETE FROM main.u; END");
    assert_eq!(
        parsed.diagnostics[0].message,
        "qualified table names are not allowed on INSERT, UPDATE, and DELETE statements \
         within triggers"
    );
}

#[test]
fn trigger_step_rejects_indexed_by() {
    assert_eq!(
        complaints("CREATE TRIGGER tr DELETE ON t BEGIN DELETE FROM u INDEXED BY i; END"),
        vec![
            "the INDEXED BY clause is not allowed on UPDATE or DELETE statements within \
             triggers"
        ]
    );
}

#[test]
fn trigger_step_rejects_not_indexed() {
    assert_eq!(
        complaints("CREATE TRIGGER tr DELETE ON t BEGIN UPDATE u NOT INDEXED SET a = 1; END"),
        vec![
            "the NOT INDEXED clause is not allowed on UPDATE or DELETE statements within \
             triggers"
        ]
    );
}
