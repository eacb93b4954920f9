//! Shared field validators. Each one takes a parsed payload field and returns
//! either the validated value or the failure for that field; the services
//! compose them in request order with `?`, so the first failure wins and no
//! state is touched.

use serde_json::Value;

use crate::domain::errors::DomainError;
use crate::domain::order::OrderLine;

/// Presence check parameterized by field name. An empty string counts as
/// missing, matching the API's truthiness contract.
pub(crate) fn required_text(
    field: &'static str,
    value: Option<&String>,
) -> Result<String, DomainError> {
    match value {
        Some(s) if !s.is_empty() => Ok(s.clone()),
        _ => Err(DomainError::MissingField(field)),
    }
}

/// Presence check for fields validated further down the chain.
pub(crate) fn required<'a, T>(
    field: &'static str,
    value: Option<&'a T>,
) -> Result<&'a T, DomainError> {
    value.ok_or(DomainError::MissingField(field))
}

/// Accepts only JSON integers greater than zero. Floats, strings, booleans
/// and null all fall through to `None`.
pub(crate) fn positive_integer(value: &Value) -> Option<i64> {
    match value.as_i64() {
        Some(n) if n > 0 => Some(n),
        _ => None,
    }
}

/// A dish price must be a positive integer; presence is checked separately
/// so a missing price reports the field name instead.
pub(crate) fn valid_price(value: &Value) -> Result<i64, DomainError> {
    positive_integer(value).ok_or(DomainError::InvalidPrice)
}

/// An order's dishes must be a non-empty array where every entry has a
/// positive integer quantity; the first offending index is named. A value of
/// any other JSON type is rejected the same way as an empty array.
pub(crate) fn valid_dishes(value: &Value) -> Result<Vec<OrderLine>, DomainError> {
    let lines = match value.as_array() {
        Some(lines) if !lines.is_empty() => lines,
        _ => return Err(DomainError::NoDishes),
    };
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let quantity = line
                .get("quantity")
                .and_then(positive_integer)
                .ok_or(DomainError::InvalidQuantity(index))?;
            Ok(OrderLine {
                dish_id: line.get("dishId").and_then(Value::as_str).map(str::to_string),
                quantity,
            })
        })
        .collect()
}
