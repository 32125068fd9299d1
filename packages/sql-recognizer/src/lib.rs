mod dialect;
mod error;
mod insert;
mod node;
mod recognizer;
mod types;
mod value;

pub use dialect::{Generic, InsertDialect, MariaDb, MySql, PostgreSql, SqlServer};
pub use error::{NodePosition, RecognitionError};
pub use insert::{
    GenericInsertRecognizer, InsertRecognizer, MariaDbInsertRecognizer, MySqlInsertRecognizer,
    PostgresInsertRecognizer, SqlServerInsertRecognizer,
};
pub use recognizer::{SqlInsertRecognizer, SqlRecognizer};
pub use types::{InsertRows, Literal, RecognizedInsert, SqlType, Value};
