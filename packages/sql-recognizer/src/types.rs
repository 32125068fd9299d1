/// Statement category a recognizer is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SqlType {
    Select,
    Insert,
    Update,
    Delete,
    SelectForUpdate,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Literal {
    Integer(i64),
    /// Only for integers above `i64::MAX`.
    UnsignedInteger(u64),
    /// Exactly representable in `f64`.
    Real(f64),
    /// Numeric literal kept as written when no native type holds it exactly.
    Decimal(String),
    Text(String),
    Boolean(bool),
    Blob(Vec<u8>),
    /// Typed literal such as `DATE '2024-01-01'`, kept as written.
    Typed(String),
}

/// One element of a VALUES tuple after resolution.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Value {
    Literal(Literal),
    Null,
    /// 0-based bind-parameter ordinal within the statement.
    Placeholder(usize),
    /// Expression without a static value, e.g. `now()`.
    Expression(String),
    Default,
    Sequence(String),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InsertRows {
    pub rows: Vec<Vec<Value>>,
    pub primary_key_positions: Vec<usize>,
}

impl InsertRows {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[Value]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Values found at the primary-key positions of every row. Positions past
    /// the end of a row are skipped.
    pub fn primary_key_values(&self) -> Vec<Vec<&Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.primary_key_positions
                    .iter()
                    .filter_map(|position| row.get(*position))
                    .collect()
            })
            .collect()
    }
}

/// Everything recognized from one INSERT, ready for the rollback-log builder.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RecognizedInsert {
    pub original_sql: String,
    pub sql_type: SqlType,
    pub table_name: String,
    pub table_alias: Option<String>,
    pub columns: Option<Vec<String>>,
    pub rows: InsertRows,
    pub params_value: Vec<String>,
    pub duplicate_key_update: Option<Vec<String>>,
    pub ignore: bool,
}
