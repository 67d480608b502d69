//! Reconstruction of cached placeholder renderings from the raw property
//! bag.
//!
//! Each placeholder token's exact template text is re-scanned for
//! brace-delimited references (a formatted token's format specifier can
//! itself embed `{name}`-style references); every reference is resolved
//! against the bag and yields one [`Rendering`] whose rendered text is the
//! bag value's raw string form.

use std::collections::HashMap;

use serde_json::{Map, Value};

use log_events::{MessageTemplate, Rendering};

use crate::error::DecodeError;

/// Collects every rendering for the template, grouped by the underlying
/// property name. A reference naming a property absent from the bag fails
/// the decode rather than fabricating a value.
pub(crate) fn collect_renderings(
    template: &MessageTemplate,
    bag: &Map<String, Value>,
    line: usize,
) -> Result<HashMap<String, Vec<Rendering>>, DecodeError> {
    let mut by_name: HashMap<String, Vec<Rendering>> = HashMap::new();

    for token in template.property_tokens() {
        for reference in scan_references(&token.raw) {
            let name = reference.text.strip_prefix('@').unwrap_or(reference.text);
            let Some(raw_value) = bag.get(name) else {
                return Err(DecodeError::MissingRenderedProperty {
                    line,
                    name: name.to_string(),
                });
            };
            by_name
                .entry(name.to_string())
                .or_default()
                .push(Rendering {
                    placeholder: reference.bracketed.to_string(),
                    format: String::new(),
                    rendered: raw_text(raw_value),
                });
        }
    }

    Ok(by_name)
}

/// The raw textual form of a bag value: strings verbatim, everything else
/// compact JSON.
fn raw_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

struct Reference<'a> {
    /// The bracketed span exactly as it appeared, braces included.
    bracketed: &'a str,
    /// The reference between the braces, sigil included.
    text: &'a str,
}

/// Finds every `{name}` / `{@name}` span in `text`, where `name` is one or
/// more ASCII alphanumeric or `_` characters. The scan is flat: nothing
/// nests, and a second `{` inside a candidate restarts the match there.
fn scan_references(text: &str) -> Vec<Reference<'_>> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'{' {
            i += 1;
            continue;
        }
        let start = i;
        let mut j = i + 1;
        if bytes.get(j) == Some(&b'@') {
            j += 1;
        }
        let name_start = j;
        while j < bytes.len() && (bytes[j].is_ascii_alphanumeric() || bytes[j] == b'_') {
            j += 1;
        }
        if j > name_start && bytes.get(j) == Some(&b'}') {
            found.push(Reference {
                bracketed: &text[start..=j],
                text: &text[start + 1..j],
            });
            i = j + 1;
        } else if bytes.get(j) == Some(&b'{') {
            i = j;
        } else {
            i = start + 1;
        }
    }

    found
}
