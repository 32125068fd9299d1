use sqlparser::ast::{AssignmentTarget, Expr, Ident, UnaryOperator, Value as SqlValue};

use crate::dialect::InsertDialect;

/// A node found in a column-list position.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ColumnNode<'a> {
    Name(&'a Ident),
    Unrecognized(String),
}

impl<'a> ColumnNode<'a> {
    pub(crate) fn from_ident(ident: &'a Ident) -> Self {
        ColumnNode::Name(ident)
    }

    pub(crate) fn from_assignment_target(target: &'a AssignmentTarget) -> Self {
        match target {
            AssignmentTarget::ColumnName(name) => {
                let ident = match name.0.as_slice() {
                    [part] => part.as_ident(),
                    _ => None,
                };
                match ident {
                    Some(ident) => ColumnNode::Name(ident),
                    None => ColumnNode::Unrecognized(name.to_string()),
                }
            }
            AssignmentTarget::Tuple(names) => ColumnNode::Unrecognized(format!(
                "({})",
                names
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

/// A node found in a VALUES position.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ValueNode<'a> {
    Literal(&'a SqlValue),
    SignedNumber { negative: bool, raw: &'a str },
    Typed(&'a Expr),
    Null,
    Placeholder(&'a str),
    Default,
    Sequence(String),
    Expression(&'a Expr),
    Unrecognized(&'a Expr),
}

impl<'a> ValueNode<'a> {
    pub(crate) fn classify<D: InsertDialect>(expr: &'a Expr) -> Self {
        if let Some((negative, raw)) = signed_number(expr) {
            return ValueNode::SignedNumber { negative, raw };
        }
        match expr {
            Expr::Value(value) => match &value.value {
                SqlValue::Null => ValueNode::Null,
                SqlValue::Placeholder(token) => ValueNode::Placeholder(token),
                other => ValueNode::Literal(other),
            },
            Expr::TypedString { .. } => ValueNode::Typed(expr),
            Expr::Identifier(ident)
                if ident.quote_style.is_none() && ident.value.eq_ignore_ascii_case("DEFAULT") =>
            {
                ValueNode::Default
            }
            Expr::Wildcard { .. }
            | Expr::QualifiedWildcard { .. }
            | Expr::Prior { .. }
            | Expr::OuterJoin { .. }
            | Expr::Lambda { .. } => ValueNode::Unrecognized(expr),
            _ => match D::sequence_name(expr) {
                Some(name) => ValueNode::Sequence(name),
                None => ValueNode::Expression(expr),
            },
        }
    }
}

// -1, +2.5
fn signed_number(expr: &Expr) -> Option<(bool, &str)> {
    let Expr::UnaryOp { op, expr: inner } = expr else {
        return None;
    };
    let negative = match op {
        UnaryOperator::Minus => true,
        UnaryOperator::Plus => false,
        _ => return None,
    };
    let Expr::Value(value) = inner.as_ref() else {
        return None;
    };
    match &value.value {
        SqlValue::Number(raw, _) => Some((negative, raw.as_str())),
        _ => None,
    }
}
