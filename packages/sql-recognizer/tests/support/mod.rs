#![allow(dead_code)]

use std::marker::PhantomData;

use sql_recognizer::{InsertDialect, InsertRecognizer};
use sqlparser::ast::{Expr, Insert, SetExpr, Statement};
use sqlparser::dialect::Dialect;
use sqlparser::parser::Parser;

/// Parser and quoting for one dialect family under test.
pub struct DialectCase<D> {
    dialect: Box<dyn Dialect>,
    quote: (char, char),
    family: PhantomData<D>,
}

impl<D: InsertDialect> DialectCase<D> {
    pub fn new(dialect: impl Dialect + 'static, quote: (char, char)) -> Self {
        Self {
            dialect: Box::new(dialect),
            quote,
            family: PhantomData,
        }
    }

    pub fn parse(&self, sql: &str) -> Statement {
        let mut statements =
            Parser::parse_sql(&*self.dialect, sql).expect("sql should parse");
        assert_eq!(statements.len(), 1, "expected exactly one statement");
        statements.remove(0)
    }

    pub fn recognizer<'a>(
        &self,
        sql: &'a str,
        statement: &'a Statement,
    ) -> InsertRecognizer<'a, D> {
        InsertRecognizer::new(sql, statement).expect("insert recognizer should build")
    }

    pub fn quoted(&self, name: &str) -> String {
        format!("{}{name}{}", self.quote.0, self.quote.1)
    }
}

pub fn insert_mut(statement: &mut Statement) -> &mut Insert {
    match statement {
        Statement::Insert(insert) => insert,
        other => panic!("expected insert, got {other}"),
    }
}

pub fn values_rows_mut(statement: &mut Statement) -> &mut Vec<Vec<Expr>> {
    let source = insert_mut(statement)
        .source
        .as_mut()
        .expect("insert should have a source");
    match source.body.as_mut() {
        SetExpr::Values(values) => &mut values.rows,
        other => panic!("expected values, got {other}"),
    }
}

#[macro_export]
macro_rules! dialect_test {
    ($name:ident, |$case:ident| $body:block) => {
        paste::paste! {
            #[test]
            fn [<$name _mysql>]() {
                let $case = $crate::support::DialectCase::<sql_recognizer::MySql>::new(
                    sqlparser::dialect::MySqlDialect {},
                    ('`', '`'),
                );
                $body
            }

            #[test]
            fn [<$name _mariadb>]() {
                let $case = $crate::support::DialectCase::<sql_recognizer::MariaDb>::new(
                    sqlparser::dialect::MySqlDialect {},
                    ('`', '`'),
                );
                $body
            }

            #[test]
            fn [<$name _postgres>]() {
                let $case = $crate::support::DialectCase::<sql_recognizer::PostgreSql>::new(
                    sqlparser::dialect::PostgreSqlDialect {},
                    ('"', '"'),
                );
                $body
            }

            #[test]
            fn [<$name _sqlserver>]() {
                let $case = $crate::support::DialectCase::<sql_recognizer::SqlServer>::new(
                    sqlparser::dialect::MsSqlDialect {},
                    ('[', ']'),
                );
                $body
            }
        }
    };
}
