use sqlparser::ast::{
    Expr, FunctionArg, FunctionArgExpr, FunctionArguments, Ident, Value as SqlValue,
};

/// Per-family hooks for the shared insert recognizer.
pub trait InsertDialect {
    const NAME: &'static str;

    /// `INSERT INTO t SET a = 1, b = 2`.
    fn supports_set_form() -> bool {
        false
    }

    /// `INSERT ... ON DUPLICATE KEY UPDATE`.
    fn supports_duplicate_key_update() -> bool {
        false
    }

    /// Name of the sequence when `expr` draws its value from one.
    fn sequence_name(_expr: &Expr) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MySql;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MariaDb;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostgreSql;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqlServer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generic;

impl InsertDialect for MySql {
    const NAME: &'static str = "mysql";

    fn supports_set_form() -> bool {
        true
    }

    fn supports_duplicate_key_update() -> bool {
        true
    }
}

impl InsertDialect for MariaDb {
    const NAME: &'static str = "mariadb";

    fn supports_set_form() -> bool {
        true
    }

    fn supports_duplicate_key_update() -> bool {
        true
    }
}

impl InsertDialect for PostgreSql {
    const NAME: &'static str = "postgresql";

    fn sequence_name(expr: &Expr) -> Option<String> {
        nextval_call_sequence(expr)
    }
}

impl InsertDialect for SqlServer {
    const NAME: &'static str = "sqlserver";
}

impl InsertDialect for Generic {
    const NAME: &'static str = "generic";

    fn sequence_name(expr: &Expr) -> Option<String> {
        nextval_call_sequence(expr).or_else(|| nextval_suffix_sequence(expr))
    }
}

// nextval('order_seq')
fn nextval_call_sequence(expr: &Expr) -> Option<String> {
    let Expr::Function(function) = expr else {
        return None;
    };
    let is_nextval = function
        .name
        .0
        .last()
        .and_then(|part| part.as_ident())
        .map(|ident| ident.value.eq_ignore_ascii_case("nextval"))
        .unwrap_or(false);
    if !is_nextval {
        return None;
    }
    let FunctionArguments::List(list) = &function.args else {
        return None;
    };
    let [FunctionArg::Unnamed(FunctionArgExpr::Expr(Expr::Value(value)))] = list.args.as_slice()
    else {
        return None;
    };
    match &value.value {
        SqlValue::SingleQuotedString(name) => Some(name.clone()),
        _ => None,
    }
}

// order_seq.nextval
fn nextval_suffix_sequence(expr: &Expr) -> Option<String> {
    let Expr::CompoundIdentifier(parts) = expr else {
        return None;
    };
    let (last, sequence) = parts.split_last()?;
    if sequence.is_empty() || last.quote_style.is_some() {
        return None;
    }
    if !last.value.eq_ignore_ascii_case("nextval") {
        return None;
    }
    Some(
        sequence
            .iter()
            .map(Ident::to_string)
            .collect::<Vec<_>>()
            .join("."),
    )
}
