use std::fmt;

/// Where in the INSERT statement a node failed to match an extraction rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodePosition {
    Statement,
    Table,
    Column,
    Value,
    Source,
}

impl fmt::Display for NodePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodePosition::Statement => f.write_str("statement"),
            NodePosition::Table => f.write_str("table reference"),
            NodePosition::Column => f.write_str("column list"),
            NodePosition::Value => f.write_str("values list"),
            NodePosition::Source => f.write_str("insert source"),
        }
    }
}

/// The statement's shape is outside what can be recognized safely, or the
/// AST was built outside the normal parse path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not supported sql syntax in {position}: {message}")]
pub struct RecognitionError {
    pub position: NodePosition,
    pub message: String,
}

impl RecognitionError {
    pub(crate) fn new(position: NodePosition, message: impl Into<String>) -> Self {
        let error = Self {
            position,
            message: message.into(),
        };
        tracing::debug!(position = %error.position, message = %error.message, "rejected sql node");
        error
    }
}
