use crate::error::RecognitionError;
use crate::types::{InsertRows, SqlType};

/// Accessors shared by every statement recognizer. All of them are pure reads
/// over the AST the recognizer was built from.
pub trait SqlRecognizer {
    /// The SQL text given at construction, never re-rendered from the AST.
    fn original_sql(&self) -> &str;

    fn sql_type(&self) -> SqlType;

    /// Table identifier as written, quoting included.
    fn table_name(&self) -> String;

    fn table_alias(&self) -> Option<String>;
}

pub trait SqlInsertRecognizer: SqlRecognizer {
    /// `None` when the statement has no column list.
    fn insert_columns(&self) -> Result<Option<Vec<String>>, RecognitionError>;

    fn insert_columns_is_empty(&self) -> bool;

    /// Column names with identifier quoting removed.
    fn insert_columns_unescaped(&self) -> Result<Option<Vec<String>>, RecognitionError>;

    fn insert_rows(&self, primary_key_positions: &[usize])
        -> Result<InsertRows, RecognitionError>;

    /// Text of every VALUES tuple without its parentheses, e.g. `?, ?`.
    fn insert_params_value(&self) -> Result<Vec<String>, RecognitionError>;

    /// Columns assigned in `ON DUPLICATE KEY UPDATE`, `None` without the clause.
    fn duplicate_key_update(&self) -> Result<Option<Vec<String>>, RecognitionError>;

    fn is_ignore(&self) -> bool;
}
