//! Helpers that narrow raw JSON field values to their expected types.

use serde_json::Value;
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{OffsetDateTime, PrimitiveDateTime};

use log_events::ScalarValue;

use crate::error::DecodeError;
use crate::fields;

/// Narrows an optional field to a string. JSON null counts as absence.
pub(crate) fn optional_str<'a>(
    value: Option<&'a Value>,
    field: &'static str,
    line: usize,
) -> Result<Option<&'a str>, DecodeError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(_) => Err(DecodeError::UnsupportedFieldType { line, field }),
    }
}

/// Extracts and parses the required event timestamp.
pub(crate) fn required_timestamp(
    value: Option<&Value>,
    line: usize,
) -> Result<OffsetDateTime, DecodeError> {
    match value {
        None | Some(Value::Null) => Err(DecodeError::MissingField {
            line,
            field: fields::TIMESTAMP,
        }),
        Some(Value::String(text)) => parse_timestamp(text, line),
        Some(_) => Err(DecodeError::UnsupportedFieldType {
            line,
            field: fields::TIMESTAMP,
        }),
    }
}

/// Permissive ISO-8601-like grammar: RFC 3339 first, then ISO-8601 with an
/// offset, then offset-naive ISO-8601 taken as UTC.
fn parse_timestamp(text: &str, line: usize) -> Result<OffsetDateTime, DecodeError> {
    OffsetDateTime::parse(text, &Rfc3339)
        .or_else(|_| OffsetDateTime::parse(text, &Iso8601::DEFAULT))
        .or_else(|_| {
            PrimitiveDateTime::parse(text, &Iso8601::DEFAULT).map(PrimitiveDateTime::assume_utc)
        })
        .map_err(|source| DecodeError::InvalidTimestamp {
            line,
            text: text.to_string(),
            source,
        })
}

/// Coerces the event identifier: a string or an unsigned integer.
pub(crate) fn event_id_scalar(value: &Value, line: usize) -> Result<ScalarValue, DecodeError> {
    match value {
        Value::String(text) => Ok(ScalarValue::String(text.clone())),
        Value::Number(number) => match number.as_u64() {
            Some(id) => Ok(ScalarValue::Uint(id)),
            None => Err(DecodeError::UnsupportedFieldType {
                line,
                field: fields::EVENT_ID,
            }),
        },
        _ => Err(DecodeError::UnsupportedFieldType {
            line,
            field: fields::EVENT_ID,
        }),
    }
}
