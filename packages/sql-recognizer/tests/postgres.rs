use sql_recognizer::{
    GenericInsertRecognizer, Literal, PostgresInsertRecognizer, SqlInsertRecognizer,
    SqlRecognizer, SqlServerInsertRecognizer, Value,
};
use sqlparser::ast::Statement;
use sqlparser::dialect::{Dialect, GenericDialect, MsSqlDialect, PostgreSqlDialect};
use sqlparser::parser::Parser;

fn parse(dialect: &dyn Dialect, sql: &str) -> Statement {
    let mut statements = Parser::parse_sql(dialect, sql).expect("sql should parse");
    statements.remove(0)
}

#[test]
fn numbered_placeholders_map_to_zero_based_ordinals() {
    let sql = "INSERT INTO t (a, b) VALUES ($2, $1), ($3, -4)";
    let statement = parse(&PostgreSqlDialect {}, sql);
    let recognizer = PostgresInsertRecognizer::new(sql, &statement).expect("recognizer");

    assert_eq!(
        recognizer.insert_rows(&[0]).expect("rows").rows,
        vec![
            vec![Value::Placeholder(1), Value::Placeholder(0)],
            vec![
                Value::Placeholder(2),
                Value::Literal(Literal::Integer(-4))
            ],
        ]
    );
}

#[test]
fn nextval_is_a_sequence_value() {
    let sql = "INSERT INTO orders (id, name) VALUES (nextval('order_seq'), $1)";
    let statement = parse(&PostgreSqlDialect {}, sql);
    let recognizer = PostgresInsertRecognizer::new(sql, &statement).expect("recognizer");

    assert_eq!(
        recognizer.insert_rows(&[0]).expect("rows").rows[0],
        vec![
            Value::Sequence("order_seq".to_string()),
            Value::Placeholder(0)
        ]
    );
}

#[test]
fn table_alias_is_returned() {
    let sql = "INSERT INTO orders AS o (id) VALUES (1)";
    let statement = parse(&PostgreSqlDialect {}, sql);
    let recognizer = PostgresInsertRecognizer::new(sql, &statement).expect("recognizer");

    assert_eq!(recognizer.table_name(), "orders");
    assert_eq!(recognizer.table_alias(), Some("o".to_string()));
}

#[test]
fn on_conflict_is_not_a_duplicate_key_update() {
    let sql = "INSERT INTO t (id, n) VALUES (1, 2) ON CONFLICT (id) DO UPDATE SET n = EXCLUDED.n";
    let statement = parse(&PostgreSqlDialect {}, sql);
    let recognizer = PostgresInsertRecognizer::new(sql, &statement).expect("recognizer");

    assert_eq!(recognizer.duplicate_key_update().expect("clause"), None);
}

#[test]
fn typed_literals_keep_written_form() {
    let sql = "INSERT INTO events (day, payload) VALUES (DATE '2024-01-01', 'x')";
    let statement = parse(&PostgreSqlDialect {}, sql);
    let recognizer = PostgresInsertRecognizer::new(sql, &statement).expect("recognizer");

    assert_eq!(
        recognizer.insert_rows(&[]).expect("rows").rows[0][0],
        Value::Literal(Literal::Typed("DATE '2024-01-01'".to_string()))
    );
}

#[test]
fn bracket_quoted_columns_keep_brackets() {
    let sql = "INSERT INTO [dbo].[orders] ([id], [name]) VALUES (1, N'a')";
    let statement = parse(&MsSqlDialect {}, sql);
    let recognizer = SqlServerInsertRecognizer::new(sql, &statement).expect("recognizer");

    assert_eq!(recognizer.table_name(), "[dbo].[orders]");
    assert_eq!(
        recognizer.insert_columns().expect("columns"),
        Some(vec!["[id]".to_string(), "[name]".to_string()])
    );
    assert_eq!(
        recognizer.insert_rows(&[]).expect("rows").rows[0][1],
        Value::Literal(Literal::Text("a".to_string()))
    );
}

#[test]
fn generic_dialect_reads_nextval_suffix() {
    let sql = "INSERT INTO orders (id) VALUES (order_seq.nextval)";
    let statement = parse(&GenericDialect {}, sql);
    let recognizer = GenericInsertRecognizer::new(sql, &statement).expect("recognizer");

    assert_eq!(
        recognizer.insert_rows(&[0]).expect("rows").rows[0],
        vec![Value::Sequence("order_seq".to_string())]
    );
}
