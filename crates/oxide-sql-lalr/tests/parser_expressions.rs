//! Tests for expressions: literals, operators and precedence, IN
//! folding, subqueries, CASE, CAST, variables and the expression limits.

mod common;
use common::*;

use oxide_sql_lalr::ast::{ExprFlags, ExprOp, OnConflict};
use oxide_sql_lalr::ParserConfig;

#[test]
fn literals() {
    let s = parse_select("SELECT x'ABCD', 1.5e3, 'it''s', NULL, \"quoted\"");
    let cols = columns(&s);
    assert_eq!(cols[0].op, ExprOp::Blob);
    assert_eq!(cols[1].op, ExprOp::Float);
    assert_eq!(cols[1].text(), "1.5e3");
    assert_eq!(cols[2].op, ExprOp::String);
    assert_eq!(cols[2].text(), "it's");
    assert_eq!(cols[3].op, ExprOp::Null);
    assert_eq!(cols[4].op, ExprOp::Id);
    assert_eq!(cols[4].text(), "quoted");
    assert!(cols[4].flags.contains(ExprFlags::DBL_QUOTED));
}

#[test]
fn integer_literals_fit_in_32_bits() {
    let s = parse_select("SELECT 0x10, 4294967296");
    let cols = columns(&s);
    assert!(cols[0].flags.contains(ExprFlags::INT_VALUE));
    assert_eq!(cols[0].integer(), Some(16));
    assert!(!cols[1].flags.contains(ExprFlags::INT_VALUE));
    assert_eq!(cols[1].text(), "4294967296");
    assert_eq!(cols[1].integer(), None);
}

#[test]
fn unary_operators() {
    let s = parse_select("SELECT -1, +2, ~3, NOT 4");
    let ops: Vec<_> = columns(&s).iter().map(|e| e.op).collect();
    assert_eq!(
        ops,
        vec![ExprOp::UMinus, ExprOp::UPlus, ExprOp::BitNot, ExprOp::Not]
    );
    assert_eq!(columns(&s)[0].integer(), Some(-1));
    assert_eq!(columns(&s)[1].integer(), Some(2));
}

#[test]
fn multiplication_binds_tighter() {
    let e = parse_expr("1 + 2 * 3");
    assert_eq!(e.op, ExprOp::Plus);
    assert_eq!(e.left.as_ref().unwrap().integer(), Some(1));
    assert_eq!(e.right.as_ref().unwrap().op, ExprOp::Star);
    assert_eq!(e.height, 3);
}

#[test]
fn collate_binds_tighter_than_concat() {
    let e = parse_expr("a || b COLLATE nocase");
    assert_eq!(e.op, ExprOp::Concat);
    let right = e.right.as_ref().unwrap();
    assert_eq!(right.op, ExprOp::Collate);
    assert_eq!(right.text(), "nocase");
    assert!(right.flags.contains(ExprFlags::COLLATE));
    assert_eq!(right.left.as_ref().unwrap().text(), "b");
}

#[test]
fn parentheses_keep_inner_node() {
    let e = parse_expr("(1 + 2) * 3");
    assert_eq!(e.op, ExprOp::Star);
    assert_eq!(e.left.as_ref().unwrap().op, ExprOp::Plus);
}

#[test]
fn qualified_names() {
    let s = parse_select("SELECT s.t.c, t.c FROM t");
    let cols = columns(&s);
    let full = cols[0];
    assert_eq!(full.op, ExprOp::Dot);
    assert_eq!(full.left.as_ref().unwrap().text(), "s");
    let rest = full.right.as_ref().unwrap();
    assert_eq!(rest.op, ExprOp::Dot);
    assert_eq!(rest.left.as_ref().unwrap().text(), "t");
    assert_eq!(rest.right.as_ref().unwrap().text(), "c");
    assert_eq!(cols[1].op, ExprOp::Dot);
}

#[test]
fn join_keyword_usable_as_column() {
    let s = parse_select("SELECT left FROM t");
    assert_eq!(columns(&s)[0].op, ExprOp::Id);
    assert_eq!(columns(&s)[0].text(), "left");
}

#[test]
fn null_tests() {
    let s = parse_select("SELECT a IS NULL, a IS NOT NULL, a ISNULL, a NOTNULL, a NOT NULL, a IS b");
    let ops: Vec<_> = columns(&s).iter().map(|e| e.op).collect();
    assert_eq!(
        ops,
        vec![
            ExprOp::IsNull,
            ExprOp::NotNull,
            ExprOp::IsNull,
            ExprOp::NotNull,
            ExprOp::NotNull,
            ExprOp::Is,
        ]
    );
    assert!(columns(&s)[0].right.is_none());
    assert!(columns(&s)[5].right.is_some());
}

#[test]
fn between_and_not_between() {
    let s = parse_select("SELECT a BETWEEN 1 AND 10, a NOT BETWEEN 1 AND 10");
    let cols = columns(&s);
    assert_eq!(cols[0].op, ExprOp::Between);
    assert_eq!(cols[0].list().unwrap().len(), 2);
    assert_eq!(cols[0].left.as_ref().unwrap().text(), "a");
    assert_eq!(cols[1].op, ExprOp::Not);
    assert_eq!(cols[1].left.as_ref().unwrap().op, ExprOp::Between);
}

#[test]
fn like_glob_and_match_are_infix_functions() {
    let s = parse_select("SELECT a LIKE 'x%' ESCAPE '\\', a NOT GLOB 'y*', a MATCH b");
    let cols = columns(&s);

    let like = cols[0];
    assert_eq!(like.op, ExprOp::Function);
    assert_eq!(like.text(), "LIKE");
    assert!(like.flags.contains(ExprFlags::INFIX_FUNC));
    let args = like.list().unwrap();
    assert_eq!(args.len(), 3);
    let arg_ops: Vec<_> = args.exprs().map(|e| e.op).collect();
    assert_eq!(arg_ops, vec![ExprOp::String, ExprOp::Id, ExprOp::String]);

    assert_eq!(cols[1].op, ExprOp::Not);
    let glob = cols[1].left.as_ref().unwrap();
    assert_eq!(glob.text(), "GLOB");
    assert_eq!(glob.list().unwrap().len(), 2);

    assert_eq!(cols[2].text(), "MATCH");
}

#[test]
fn in_single_item_becomes_comparison() {
    let s = parse_select("SELECT a FROM t WHERE a IN (7)");
    let e = s.where_clause.as_ref().unwrap();
    assert_eq!(e.op, ExprOp::Eq);
    let right = e.right.as_ref().unwrap();
    assert_eq!(right.integer(), Some(7));
    assert!(right.flags.contains(ExprFlags::GENERIC));

    let s = parse_select("SELECT a FROM t WHERE a NOT IN (7)");
    assert_eq!(s.where_clause.as_ref().unwrap().op, ExprOp::Ne);
}

#[test]
fn in_empty_list_is_constant() {
    let s = parse_select("SELECT a FROM t WHERE a IN ()");
    assert_eq!(s.where_clause.as_ref().unwrap().integer(), Some(0));

    let s = parse_select("SELECT a FROM t WHERE a NOT IN ()");
    assert_eq!(s.where_clause.as_ref().unwrap().integer(), Some(1));
}

#[test]
fn in_list() {
    let s = parse_select("SELECT a FROM t WHERE a IN (1, 2, 3)");
    let e = s.where_clause.as_ref().unwrap();
    assert_eq!(e.op, ExprOp::In);
    assert_eq!(e.list().unwrap().len(), 3);
    assert_eq!(e.left.as_ref().unwrap().text(), "a");
}

#[test]
fn in_subquery() {
    let s = parse_select("SELECT a FROM t WHERE a IN (SELECT b FROM u)");
    let e = s.where_clause.as_ref().unwrap();
    assert_eq!(e.op, ExprOp::In);
    assert!(e.flags.contains(ExprFlags::X_IS_SELECT));
    assert_eq!(e.select().unwrap().src.first_name(), Some("u"));
}

#[test]
fn in_table_name() {
    let s = parse_select("SELECT a FROM t WHERE a NOT IN u");
    let e = s.where_clause.as_ref().unwrap();
    assert_eq!(e.op, ExprOp::Not);
    let inner = e.left.as_ref().unwrap();
    assert_eq!(inner.op, ExprOp::In);
    assert_eq!(inner.select().unwrap().src.first_name(), Some("u"));
}

#[test]
fn in_table_function() {
    let s = parse_select("SELECT a FROM t WHERE a IN f(1, 2)");
    let e = s.where_clause.as_ref().unwrap();
    let item = &e.select().unwrap().src.items[0];
    assert_eq!(item.name.as_deref(), Some("f"));
    assert_eq!(item.func_args.as_ref().unwrap().len(), 2);
}

#[test]
fn exists_and_scalar_subqueries() {
    let e = parse_expr("EXISTS (SELECT 1)");
    assert_eq!(e.op, ExprOp::Exists);
    assert!(e.select().is_some());
    assert!(e.flags.contains(ExprFlags::SUBQUERY));

    let e = parse_expr("(SELECT max(a) FROM t)");
    assert_eq!(e.op, ExprOp::Select);
    assert_eq!(e.select().unwrap().src.first_name(), Some("t"));
}

#[test]
fn case_with_operand() {
    let s = parse_select("SELECT CASE a WHEN 1 THEN 'one' WHEN 2 THEN 'two' ELSE 'many' END FROM t");
    let e = columns(&s)[0];
    assert_eq!(e.op, ExprOp::Case);
    assert_eq!(e.left.as_ref().unwrap().text(), "a");
    // two WHEN/THEN pairs and the ELSE value
    assert_eq!(e.list().unwrap().len(), 5);
}

#[test]
fn case_without_operand() {
    let e = parse_expr("CASE WHEN a THEN b END");
    assert!(e.left.is_none());
    assert_eq!(e.list().unwrap().len(), 2);
}

#[test]
fn cast_keeps_type_text() {
    let s = parse_select("SELECT CAST(a AS VARCHAR(10)) FROM t");
    let e = columns(&s)[0];
    assert_eq!(e.op, ExprOp::Cast);
    assert_eq!(e.text(), "VARCHAR(10)");
    assert_eq!(e.left.as_ref().unwrap().text(), "a");
}

#[test]
fn functions() {
    let s = parse_select("SELECT count(DISTINCT a), count(*), current_timestamp");
    let cols = columns(&s);
    assert_eq!(cols[0].op, ExprOp::Function);
    assert_eq!(cols[0].text(), "count");
    assert!(cols[0].flags.contains(ExprFlags::DISTINCT));
    assert_eq!(cols[0].list().unwrap().len(), 1);
    assert!(cols[1].list().is_none());
    assert!(!cols[1].flags.contains(ExprFlags::DISTINCT));
    assert_eq!(cols[2].op, ExprOp::Function);
    assert_eq!(cols[2].text(), "current_timestamp");
}

#[test]
fn vectors() {
    let e = parse_expr("(1, 2) = (3, 4)");
    assert_eq!(e.op, ExprOp::Eq);
    let left = e.left.as_ref().unwrap();
    assert_eq!(left.op, ExprOp::Vector);
    assert_eq!(left.list().unwrap().len(), 2);
}

#[test]
fn and_with_zero_folds() {
    let e = parse_expr("a AND 0");
    assert_eq!(e.op, ExprOp::Integer);
    assert_eq!(e.integer(), Some(0));
}

#[test]
fn raise() {
    let e = parse_expr("raise(ignore)");
    assert_eq!(e.op, ExprOp::Raise);
    assert_eq!(e.on_error, Some(OnConflict::Ignore));

    let e = parse_expr("RAISE(ABORT, 'bad')");
    assert_eq!(e.on_error, Some(OnConflict::Abort));
    assert_eq!(e.text(), "bad");
}

#[test]
fn variable_numbers() {
    let s = parse_select("SELECT ?, ?5, :name, @x, $y, :name");
    let numbers: Vec<_> = columns(&s).iter().map(|e| e.var_number).collect();
    assert_eq!(
        numbers,
        vec![Some(1), Some(5), Some(6), Some(7), Some(8), Some(6)]
    );
    assert!(columns(&s).iter().all(|e| e.op == ExprOp::Variable));
}

#[test]
fn hash_variable_is_rejected() {
    assert_eq!(complaints("SELECT #1"), vec!["near \"#1\": syntax error"]);
}

#[test]
fn variable_number_out_of_range() {
    let config = ParserConfig::default().with_variable_limit(3);
    let parsed = parse_counted("SELECT ?5", config).unwrap();
    assert_eq!(
        parsed.diagnostics[0].message,
        "variable number must be between ?1 and ?3"
    );
}

#[test]
fn too_many_variables() {
    let config = ParserConfig::default().with_variable_limit(3);
    let parsed = parse_counted("SELECT ?, ?, ?, ?", config).unwrap();
    let messages: Vec<_> = parsed.diagnostics.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, vec!["too many SQL variables"]);
}

#[test]
fn too_many_function_arguments() {
    let config = ParserConfig::default().with_function_arg_limit(2);
    let parsed = parse_counted("SELECT f(1, 2, 3)", config).unwrap();
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].message, "too many arguments on function f");
}

#[test]
fn expression_depth_limit() {
    let config = ParserConfig::default().with_expr_depth_limit(3);
    let parsed = parse_counted("SELECT 1 + 2 + 3 + 4", config).unwrap();
    let messages: Vec<_> = parsed.diagnostics.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, vec!["Expression tree is too large (maximum depth 3)"]);
}

#[test]
fn spans_cover_source_text() {
    let sql = "SELECT a + b * 2 FROM t";
    let s = parse_select(sql);
    let e = columns(&s)[0];
    assert_eq!(e.span.text(sql), "a + b * 2");
    assert_eq!(s.result.items[0].span.as_deref(), Some("a + b * 2"));
}
