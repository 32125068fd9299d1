use std::marker::PhantomData;

use sqlparser::ast::{
    Assignment, Expr, Ident, Insert, ObjectName, OnInsert, SetExpr, Statement, TableObject,
};
use tracing::instrument;

use crate::dialect::{Generic, InsertDialect, MariaDb, MySql, PostgreSql, SqlServer};
use crate::error::{NodePosition, RecognitionError};
use crate::node::ColumnNode;
use crate::recognizer::{SqlInsertRecognizer, SqlRecognizer};
use crate::types::{InsertRows, RecognizedInsert, SqlType};
use crate::value::{resolve_value, PlaceholderState};

pub type MySqlInsertRecognizer<'a> = InsertRecognizer<'a, MySql>;
pub type MariaDbInsertRecognizer<'a> = InsertRecognizer<'a, MariaDb>;
pub type PostgresInsertRecognizer<'a> = InsertRecognizer<'a, PostgreSql>;
pub type SqlServerInsertRecognizer<'a> = InsertRecognizer<'a, SqlServer>;
pub type GenericInsertRecognizer<'a> = InsertRecognizer<'a, Generic>;

/// Read-only view over one parsed INSERT and the text it was parsed from.
#[derive(Debug)]
pub struct InsertRecognizer<'a, D> {
    original_sql: &'a str,
    insert: &'a Insert,
    table: &'a ObjectName,
    dialect: PhantomData<D>,
}

enum RowSource<'a> {
    Values(&'a [Vec<Expr>]),
    Assignments(&'a [Assignment]),
    DefaultValues,
}

impl<'a, D: InsertDialect> InsertRecognizer<'a, D> {
    pub fn new(original_sql: &'a str, statement: &'a Statement) -> Result<Self, RecognitionError> {
        let Statement::Insert(insert) = statement else {
            return Err(RecognitionError::new(
                NodePosition::Statement,
                format!("expected an INSERT statement, got '{statement}'"),
            ));
        };
        Self::from_insert(original_sql, insert)
    }

    pub fn from_insert(original_sql: &'a str, insert: &'a Insert) -> Result<Self, RecognitionError> {
        let table = match &insert.table {
            TableObject::TableName(name) => name,
            other => {
                return Err(RecognitionError::new(
                    NodePosition::Table,
                    format!("'{other}' is not a table name"),
                ))
            }
        };
        if !insert.assignments.is_empty() && !D::supports_set_form() {
            return Err(RecognitionError::new(
                NodePosition::Statement,
                format!("INSERT ... SET is not available for {}", D::NAME),
            ));
        }
        Ok(Self {
            original_sql,
            insert,
            table,
            dialect: PhantomData,
        })
    }

    /// Snapshot of every recognized field.
    pub fn recognize(
        &self,
        primary_key_positions: &[usize],
    ) -> Result<RecognizedInsert, RecognitionError> {
        Ok(RecognizedInsert {
            original_sql: self.original_sql.to_string(),
            sql_type: self.sql_type(),
            table_name: self.table_name(),
            table_alias: self.table_alias(),
            columns: self.insert_columns()?,
            rows: self.insert_rows(primary_key_positions)?,
            params_value: self.insert_params_value()?,
            duplicate_key_update: self.duplicate_key_update()?,
            ignore: self.is_ignore(),
        })
    }

    fn column_nodes(&self) -> Option<Vec<ColumnNode<'a>>> {
        if !self.insert.columns.is_empty() {
            return Some(self.insert.columns.iter().map(ColumnNode::from_ident).collect());
        }
        if !self.insert.assignments.is_empty() {
            return Some(
                self.insert
                    .assignments
                    .iter()
                    .map(|assignment| ColumnNode::from_assignment_target(&assignment.target))
                    .collect(),
            );
        }
        None
    }

    fn column_idents(&self) -> Result<Option<Vec<&'a Ident>>, RecognitionError> {
        let Some(nodes) = self.column_nodes() else {
            return Ok(None);
        };
        nodes
            .into_iter()
            .map(column_ident)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    fn row_source(&self) -> Result<RowSource<'a>, RecognitionError> {
        let Some(query) = &self.insert.source else {
            if self.insert.assignments.is_empty() {
                return Ok(RowSource::DefaultValues);
            }
            return Ok(RowSource::Assignments(&self.insert.assignments));
        };
        match query.body.as_ref() {
            SetExpr::Values(values) => Ok(RowSource::Values(&values.rows)),
            other => Err(RecognitionError::new(
                NodePosition::Source,
                format!("'{other}' is not a VALUES list"),
            )),
        }
    }

    fn value_rows(&self) -> Result<Vec<Vec<&'a Expr>>, RecognitionError> {
        Ok(match self.row_source()? {
            RowSource::Values(rows) => rows.iter().map(|row| row.iter().collect()).collect(),
            RowSource::Assignments(assignments) => {
                vec![assignments.iter().map(|assignment| &assignment.value).collect()]
            }
            RowSource::DefaultValues => vec![Vec::new()],
        })
    }
}

fn column_ident(node: ColumnNode<'_>) -> Result<&Ident, RecognitionError> {
    match node {
        ColumnNode::Name(ident) => Ok(ident),
        ColumnNode::Unrecognized(text) => Err(RecognitionError::new(
            NodePosition::Column,
            format!("'{text}' is not a column name"),
        )),
    }
}

impl<D: InsertDialect> SqlRecognizer for InsertRecognizer<'_, D> {
    fn original_sql(&self) -> &str {
        self.original_sql
    }

    fn sql_type(&self) -> SqlType {
        SqlType::Insert
    }

    fn table_name(&self) -> String {
        self.table.to_string()
    }

    fn table_alias(&self) -> Option<String> {
        self.insert.table_alias.as_ref().map(ToString::to_string)
    }
}

impl<D: InsertDialect> SqlInsertRecognizer for InsertRecognizer<'_, D> {
    #[instrument(
        name = "recognizer::insert::columns",
        level = "trace",
        skip(self),
        fields(dialect = D::NAME)
    )]
    fn insert_columns(&self) -> Result<Option<Vec<String>>, RecognitionError> {
        Ok(self
            .column_idents()?
            .map(|idents| idents.into_iter().map(ToString::to_string).collect()))
    }

    fn insert_columns_is_empty(&self) -> bool {
        self.insert.columns.is_empty() && self.insert.assignments.is_empty()
    }

    fn insert_columns_unescaped(&self) -> Result<Option<Vec<String>>, RecognitionError> {
        Ok(self
            .column_idents()?
            .map(|idents| idents.into_iter().map(|ident| ident.value.clone()).collect()))
    }

    #[instrument(
        name = "recognizer::insert::rows",
        level = "trace",
        skip(self),
        fields(dialect = D::NAME)
    )]
    fn insert_rows(
        &self,
        primary_key_positions: &[usize],
    ) -> Result<InsertRows, RecognitionError> {
        let value_rows = self.value_rows()?;
        let mut state = PlaceholderState::new();
        let mut rows = Vec::with_capacity(value_rows.len());

        for value_row in value_rows {
            let mut row = Vec::with_capacity(value_row.len());
            for expr in value_row {
                row.push(resolve_value::<D>(expr, &mut state)?);
            }
            rows.push(row);
        }

        Ok(InsertRows {
            rows,
            primary_key_positions: primary_key_positions.to_vec(),
        })
    }

    fn insert_params_value(&self) -> Result<Vec<String>, RecognitionError> {
        Ok(self
            .value_rows()?
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .collect())
    }

    fn duplicate_key_update(&self) -> Result<Option<Vec<String>>, RecognitionError> {
        if !D::supports_duplicate_key_update() {
            return Ok(None);
        }
        let Some(OnInsert::DuplicateKeyUpdate(assignments)) = &self.insert.on else {
            return Ok(None);
        };
        assignments
            .iter()
            .map(|assignment| {
                column_ident(ColumnNode::from_assignment_target(&assignment.target))
                    .map(ToString::to_string)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    fn is_ignore(&self) -> bool {
        self.insert.ignore
    }
}
