use std::ops::ControlFlow;

use sqlparser::ast::{Expr, Value as SqlValue, Visit, Visitor};

use crate::dialect::InsertDialect;
use crate::error::{NodePosition, RecognitionError};
use crate::node::ValueNode;
use crate::types::{Literal, Value};

/// Hands out placeholder ordinals in source order across one statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PlaceholderState {
    next_ordinal: usize,
}

impl PlaceholderState {
    pub(crate) fn new() -> Self {
        Self { next_ordinal: 0 }
    }

    /// `?` takes the next ordinal. `?N`, `$N` and `:N` are 1-based in the
    /// text and map to `N - 1`.
    pub(crate) fn resolve(&mut self, token: &str) -> Result<usize, RecognitionError> {
        let trimmed = token.trim();

        if trimmed.is_empty() || trimmed == "?" {
            let ordinal = self.next_ordinal;
            self.next_ordinal += 1;
            return Ok(ordinal);
        }

        let Some(numeric) = trimmed
            .strip_prefix('?')
            .or_else(|| trimmed.strip_prefix('$'))
            .or_else(|| trimmed.strip_prefix(':'))
        else {
            return Err(RecognitionError::new(
                NodePosition::Value,
                format!("unsupported placeholder format '{trimmed}'"),
            ));
        };

        let parsed = parse_1_based_index(trimmed, numeric)?;
        self.next_ordinal = self.next_ordinal.max(parsed);
        Ok(parsed - 1)
    }

    fn skip_nested(&mut self, expr: &Expr) -> Result<(), RecognitionError> {
        let mut visitor = NestedPlaceholders { state: self };
        match expr.visit(&mut visitor) {
            ControlFlow::Break(error) => Err(error),
            ControlFlow::Continue(()) => Ok(()),
        }
    }
}

struct NestedPlaceholders<'a> {
    state: &'a mut PlaceholderState,
}

impl Visitor for NestedPlaceholders<'_> {
    type Break = RecognitionError;

    fn pre_visit_value(&mut self, value: &SqlValue) -> ControlFlow<Self::Break> {
        let SqlValue::Placeholder(token) = value else {
            return ControlFlow::Continue(());
        };
        match self.state.resolve(token) {
            Ok(_) => ControlFlow::Continue(()),
            Err(error) => ControlFlow::Break(error),
        }
    }
}

pub(crate) fn resolve_value<D: InsertDialect>(
    expr: &Expr,
    state: &mut PlaceholderState,
) -> Result<Value, RecognitionError> {
    match ValueNode::classify::<D>(expr) {
        ValueNode::Literal(value) => sql_literal_to_value(value).map(Value::Literal),
        ValueNode::SignedNumber { negative, raw } => {
            parse_number(raw, negative).map(Value::Literal)
        }
        ValueNode::Typed(expr) => Ok(Value::Literal(Literal::Typed(expr.to_string()))),
        ValueNode::Null => Ok(Value::Null),
        ValueNode::Placeholder(token) => state.resolve(token).map(Value::Placeholder),
        ValueNode::Default => Ok(Value::Default),
        ValueNode::Sequence(name) => {
            state.skip_nested(expr)?;
            Ok(Value::Sequence(name))
        }
        ValueNode::Expression(expr) => {
            state.skip_nested(expr)?;
            Ok(Value::Expression(expr.to_string()))
        }
        ValueNode::Unrecognized(expr) => Err(RecognitionError::new(
            NodePosition::Value,
            format!("'{expr}' cannot appear in a values list"),
        )),
    }
}

fn sql_literal_to_value(value: &SqlValue) -> Result<Literal, RecognitionError> {
    match value {
        SqlValue::Number(raw, _) => parse_number(raw, false),
        SqlValue::Boolean(flag) => Ok(Literal::Boolean(*flag)),
        SqlValue::HexStringLiteral(digits) => decode_hex(digits).map(Literal::Blob),
        SqlValue::DollarQuotedString(quoted) => Ok(Literal::Text(quoted.value.clone())),
        other => quoted_text(other)
            .map(|text| Literal::Text(text.to_string()))
            .ok_or_else(|| {
                RecognitionError::new(NodePosition::Value, format!("'{other}' is not a literal"))
            }),
    }
}

// Every string-like literal, whatever its quoting or prefix.
fn quoted_text(value: &SqlValue) -> Option<&str> {
    let text = match value {
        SqlValue::SingleQuotedString(text)
        | SqlValue::DoubleQuotedString(text)
        | SqlValue::TripleSingleQuotedString(text)
        | SqlValue::TripleDoubleQuotedString(text)
        | SqlValue::EscapedStringLiteral(text)
        | SqlValue::UnicodeStringLiteral(text)
        | SqlValue::NationalStringLiteral(text)
        | SqlValue::SingleQuotedRawStringLiteral(text)
        | SqlValue::DoubleQuotedRawStringLiteral(text)
        | SqlValue::TripleSingleQuotedRawStringLiteral(text)
        | SqlValue::TripleDoubleQuotedRawStringLiteral(text)
        | SqlValue::SingleQuotedByteStringLiteral(text)
        | SqlValue::DoubleQuotedByteStringLiteral(text)
        | SqlValue::TripleSingleQuotedByteStringLiteral(text)
        | SqlValue::TripleDoubleQuotedByteStringLiteral(text) => text,
        _ => return None,
    };
    Some(text.as_str())
}

/// Integers keep full width. A fractional or exponent form becomes `Real`
/// only when it fits in `f64` without rounding; anything else is kept
/// verbatim as `Decimal`.
fn parse_number(raw: &str, negative: bool) -> Result<Literal, RecognitionError> {
    let written = if negative {
        format!("-{raw}")
    } else {
        raw.to_string()
    };
    if let Ok(int) = written.parse::<i64>() {
        return Ok(Literal::Integer(int));
    }
    if let Ok(unsigned) = written.parse::<u64>() {
        return Ok(Literal::UnsignedInteger(unsigned));
    }
    match written.parse::<f64>() {
        Ok(real) if real.is_finite() && significant_digits(&written) <= F64_EXACT_DIGITS => {
            Ok(Literal::Real(real))
        }
        Ok(_) => Ok(Literal::Decimal(written)),
        Err(_) => Err(RecognitionError::new(
            NodePosition::Value,
            format!("unsupported numeric literal '{written}'"),
        )),
    }
}

// Any decimal with this many significant digits survives a round trip through f64.
const F64_EXACT_DIGITS: usize = f64::DIGITS as usize;

fn significant_digits(written: &str) -> usize {
    let mantissa = written
        .split(['e', 'E'])
        .next()
        .unwrap_or_default()
        .trim_start_matches(['-', '+']);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    digits.trim_start_matches('0').trim_end_matches('0').len()
}

fn parse_1_based_index(token: &str, numeric: &str) -> Result<usize, RecognitionError> {
    let invalid = || {
        RecognitionError::new(NodePosition::Value, format!("invalid placeholder '{token}'"))
    };
    let parsed = numeric.parse::<usize>().map_err(|_| invalid())?;
    if parsed == 0 {
        return Err(invalid());
    }
    Ok(parsed)
}

/// `X'abc'` and `0xabc` decode as if written with a leading zero digit.
fn decode_hex(digits: &str) -> Result<Vec<u8>, RecognitionError> {
    if let Some(bad) = digits.chars().find(|digit| !digit.is_ascii_hexdigit()) {
        return Err(RecognitionError::new(
            NodePosition::Value,
            format!("invalid hex digit '{bad}' in '{digits}'"),
        ));
    }
    let padded = if digits.len() % 2 == 1 {
        format!("0{digits}")
    } else {
        digits.to_string()
    };
    (0..padded.len())
        .step_by(2)
        .map(|start| {
            u8::from_str_radix(&padded[start..start + 2], 16).map_err(|error| {
                RecognitionError::new(NodePosition::Value, format!("'{digits}': {error}"))
            })
        })
        .collect()
}
