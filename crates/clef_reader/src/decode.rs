//! Assembly of one event from one JSON document.

use serde_json::Value;

use log_events::{Level, LogEvent, MessageTemplate, Property, PropertyValue, SpanId, TraceId};

use crate::coerce;
use crate::error::DecodeError;
use crate::fields;
use crate::properties::build_property;
use crate::renderings::collect_renderings;

/// Decodes a single complete JSON document into one event.
///
/// Independent of any reader state; failures reference line 1.
pub fn read_event_from_str(document: &str) -> Result<LogEvent, DecodeError> {
    let value: Value =
        serde_json::from_str(document).map_err(|source| DecodeError::Json { line: 1, source })?;
    decode_event_on_line(&value, 1)
}

/// Decodes an already-parsed JSON document into one event.
///
/// Independent of any reader state; failures reference line 1.
pub fn read_event_from_value(document: &Value) -> Result<LogEvent, DecodeError> {
    decode_event_on_line(document, 1)
}

/// Decodes one event document, tagging any failure with `line`.
///
/// All-or-nothing: no partial event is ever produced, and a malformed
/// optional field is a hard failure — only absence falls back to defaults.
pub(crate) fn decode_event_on_line(document: &Value, line: usize) -> Result<LogEvent, DecodeError> {
    let Some(object) = document.as_object() else {
        return Err(DecodeError::NotAnObject { line });
    };

    let timestamp = coerce::required_timestamp(object.get(fields::TIMESTAMP), line)?;

    let template = match coerce::optional_str(
        object.get(fields::MESSAGE_TEMPLATE),
        fields::MESSAGE_TEMPLATE,
        line,
    )? {
        Some(text) => MessageTemplate::parse(text),
        None => match coerce::optional_str(object.get(fields::MESSAGE), fields::MESSAGE, line)? {
            Some(message) => MessageTemplate::from_message(message),
            None => MessageTemplate::empty(),
        },
    };

    let level = match coerce::optional_str(object.get(fields::LEVEL), fields::LEVEL, line)? {
        Some(text) => text.parse().map_err(|_| DecodeError::InvalidLevel {
            line,
            text: text.to_string(),
        })?,
        None => Level::default(),
    };

    let exception = coerce::optional_str(object.get(fields::EXCEPTION), fields::EXCEPTION, line)?
        .map(str::to_string);

    let trace_id =
        match coerce::optional_str(object.get(fields::TRACE_ID), fields::TRACE_ID, line)? {
            Some(text) => TraceId::parse_hex(text).map_err(|source| DecodeError::InvalidId {
                line,
                field: fields::TRACE_ID,
                text: text.to_string(),
                source,
            })?,
            None => TraceId::EMPTY,
        };

    let span_id = match coerce::optional_str(object.get(fields::SPAN_ID), fields::SPAN_ID, line)? {
        Some(text) => SpanId::parse_hex(text).map_err(|source| DecodeError::InvalidId {
            line,
            field: fields::SPAN_ID,
            text: text.to_string(),
            source,
        })?,
        None => SpanId::EMPTY,
    };

    let mut properties: Vec<Property> = Vec::new();
    match object.get(fields::PROPERTIES) {
        None | Some(Value::Null) => {}
        Some(Value::Object(bag)) => {
            // Renderings for the whole line are collected before any value
            // is built, then handed out per member name.
            let mut renderings = collect_renderings(&template, bag, line)?;
            properties.reserve(bag.len());
            for (name, raw_value) in bag {
                let cached = renderings.remove(name.as_str()).unwrap_or_default();
                properties.push(build_property(name, raw_value, cached));
            }
        }
        Some(_) => return Err(DecodeError::PropertiesNotAnObject { line }),
    }

    match object.get(fields::EVENT_ID) {
        None | Some(Value::Null) => {}
        Some(id) => properties.push(Property::new(
            fields::EVENT_ID,
            PropertyValue::scalar(coerce::event_id_scalar(id, line)?),
        )),
    }

    Ok(LogEvent {
        timestamp,
        level,
        exception,
        template,
        properties,
        trace_id,
        span_id,
    })
}
