//! Recursive typing of raw JSON property values.

use serde_json::Value;

use log_events::{
    is_valid_property_name, Property, PropertyValue, Rendering, ScalarValue, UNNAMED_PROPERTY,
};

use crate::fields;

/// Builds one top-level bag member, substituting the sentinel name for an
/// invalid one and attaching the renderings reconstructed for it.
pub(crate) fn build_property(name: &str, value: &Value, renderings: Vec<Rendering>) -> Property {
    let name = if is_valid_property_name(name) {
        name
    } else {
        UNNAMED_PROPERTY
    };
    Property::new(name, build_value(value, renderings))
}

/// Recursively types a raw JSON value. Renderings apply only to the value
/// they were collected for; nothing propagates into nested values.
pub(crate) fn build_value(value: &Value, renderings: Vec<Rendering>) -> PropertyValue {
    match value {
        Value::Null => PropertyValue::scalar(ScalarValue::Null),
        Value::Bool(flag) => scalar_with(ScalarValue::Bool(*flag), renderings),
        Value::Number(number) => scalar_with(number_scalar(number), renderings),
        Value::String(text) => scalar_with(ScalarValue::String(text.clone()), renderings),
        Value::Array(elements) => PropertyValue::Sequence {
            elements: elements
                .iter()
                .map(|element| build_value(element, Vec::new()))
                .collect(),
        },
        Value::Object(members) => {
            let type_tag = members
                .get(fields::TYPE_TAG)
                .and_then(Value::as_str)
                .map(str::to_string);
            let properties = members
                .iter()
                .filter(|(name, _)| name.as_str() != fields::TYPE_TAG)
                .map(|(name, member)| Property::new(name.clone(), build_value(member, Vec::new())))
                .collect();
            PropertyValue::Structured {
                type_tag,
                properties,
            }
        }
    }
}

fn scalar_with(value: ScalarValue, renderings: Vec<Rendering>) -> PropertyValue {
    PropertyValue::Scalar { value, renderings }
}

fn number_scalar(number: &serde_json::Number) -> ScalarValue {
    if let Some(value) = number.as_i64() {
        ScalarValue::Int(value)
    } else if let Some(value) = number.as_u64() {
        ScalarValue::Uint(value)
    } else {
        ScalarValue::Float(number.as_f64().unwrap_or(f64::NAN))
    }
}
