//! Tests for INSERT, REPLACE, UPDATE and DELETE.

mod common;
use common::*;

use oxide_sql_lalr::ast::{ExprOp, IndexedBy, InsertSource, OnConflict, SelectFlags};

#[test]
fn insert_values_with_columns() {
    let i = parse_insert("INSERT INTO t (a, b) VALUES (1, 2)");
    assert_eq!(i.table, "t");
    assert_eq!(i.on_conflict, OnConflict::Default);
    assert_eq!(
        i.columns.as_ref().unwrap().names,
        vec!["a".to_string(), "b".to_string()]
    );
    let InsertSource::Select(rows) = &i.source else {
        panic!("Expected VALUES rows, got {:?}", i.source);
    };
    assert!(rows.flags.contains(SelectFlags::VALUES));
    assert_eq!(rows.result.len(), 2);
}

#[test]
fn insert_or_replace() {
    let i = parse_insert("INSERT OR REPLACE INTO t VALUES (1)");
    assert_eq!(i.on_conflict, OnConflict::Replace);
    assert!(i.columns.is_none());
}

#[test]
fn replace_is_insert_or_replace() {
    let i = parse_insert("REPLACE INTO t SELECT * FROM u");
    assert_eq!(i.on_conflict, OnConflict::Replace);
    let InsertSource::Select(query) = &i.source else {
        panic!("Expected a query, got {:?}", i.source);
    };
    assert_eq!(query.src.first_name(), Some("u"));
}

#[test]
fn insert_default_values() {
    let i = parse_insert("INSERT INTO t DEFAULT VALUES");
    assert!(matches!(i.source, InsertSource::DefaultValues));
}

#[test]
fn insert_with_cte() {
    let i = parse_insert("WITH c AS (SELECT 1) INSERT INTO t SELECT * FROM c");
    let with = i.with.as_ref().unwrap();
    assert_eq!(with.ctes[0].name, "c");
}

#[test]
fn update_set_list() {
    let u = parse_update("UPDATE OR IGNORE t SET a = 1, b = b + 1 WHERE c = 2");
    assert_eq!(u.table, "t");
    assert_eq!(u.on_conflict, OnConflict::Ignore);
    let set = u.set.as_ref().unwrap();
    let names: Vec<_> = set.names().collect();
    assert_eq!(names, vec![Some("a"), Some("b")]);
    let values: Vec<_> = set.exprs().map(|e| e.op).collect();
    assert_eq!(values, vec![ExprOp::Integer, ExprOp::Plus]);
    assert_eq!(u.where_clause.as_ref().unwrap().op, ExprOp::Eq);
    assert_eq!(u.indexed_by, IndexedBy::Default);
}

#[test]
fn update_vector_assignment() {
    let u = parse_update("UPDATE t SET (a, b) = (1, 2)");
    let set = u.set.as_ref().unwrap();
    let names: Vec<_> = set.names().collect();
    assert_eq!(names, vec![Some("a"), Some("b")]);
    let values: Vec<_> = set.exprs().map(|e| e.integer()).collect();
    assert_eq!(values, vec![Some(1), Some(2)]);
}

#[test]
fn update_vector_from_subquery() {
    let u = parse_update("UPDATE t SET (a, b) = (SELECT 1, 2)");
    let set = u.set.as_ref().unwrap();
    let fields: Vec<_> = set.exprs().collect();
    assert_eq!(fields.len(), 2);
    assert!(fields.iter().all(|e| e.op == ExprOp::SelectColumn));
    assert_eq!(fields[0].column, Some(0));
    assert_eq!(fields[1].column, Some(1));
    // the first field owns the subquery
    assert_eq!(fields[0].right.as_ref().unwrap().op, ExprOp::Select);
    assert!(fields[1].right.is_none());
}

#[test]
fn update_vector_size_mismatch() {
    let parsed = parse_full("UPDATE t SET (a, b) = (1, 2, 3)");
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].message, "2 columns assigned 3 values");
}

#[test]
fn update_indexed_by() {
    let u = parse_update("UPDATE t INDEXED BY i SET a = 1");
    assert_eq!(u.indexed_by, IndexedBy::Named("i".to_string()));
}

#[test]
fn update_set_list_limit() {
    let config = oxide_sql_lalr::ParserConfig::default().with_column_limit(1);
    let parsed = parse_counted("UPDATE t SET a = 1, b = 2", config).unwrap();
    let messages: Vec<_> = parsed.diagnostics.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, vec!["too many columns in set list"]);
}

#[test]
fn delete_with_where() {
    let d = parse_delete("DELETE FROM t WHERE a = 1");
    assert_eq!(d.table, "t");
    assert_eq!(d.where_clause.as_ref().unwrap().op, ExprOp::Eq);
}

#[test]
fn delete_not_indexed() {
    let d = parse_delete("DELETE FROM t NOT INDEXED");
    assert_eq!(d.indexed_by, IndexedBy::NotIndexed);
    assert!(d.where_clause.is_none());
}
