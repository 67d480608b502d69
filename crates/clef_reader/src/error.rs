use thiserror::Error;

/// Failure to decode a line or document into a log event.
///
/// Every sub-cause maps to this one kind. Variants carry the 1-based line
/// number of the offending input where one applies; one-shot document
/// decoding reports line 1. Decoding is all-or-nothing: no failure ever
/// yields a partial event or a silently defaulted required field.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("line {line}: invalid JSON: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: the event document is not a JSON object")]
    NotAnObject { line: usize },
    #[error("line {line}: the `{field}` field is required")]
    MissingField { line: usize, field: &'static str },
    #[error("line {line}: the `{field}` field is in an unsupported format")]
    UnsupportedFieldType { line: usize, field: &'static str },
    #[error("line {line}: `{text}` is not a valid timestamp: {source}")]
    InvalidTimestamp {
        line: usize,
        text: String,
        #[source]
        source: time::error::Parse,
    },
    #[error("line {line}: `{text}` is not a recognized level")]
    InvalidLevel { line: usize, text: String },
    #[error("line {line}: the `Properties` value is not an object as expected")]
    PropertiesNotAnObject { line: usize },
    #[error("line {line}: the template references `{name}` but the properties bag does not contain it")]
    MissingRenderedProperty { line: usize, name: String },
    #[error("line {line}: `{text}` is not a valid `{field}` identifier: {source}")]
    InvalidId {
        line: usize,
        field: &'static str,
        text: String,
        #[source]
        source: log_events::ParseIdError,
    },
    #[error("failed to read from the log source: {0}")]
    Io(#[from] std::io::Error),
}

impl DecodeError {
    /// The 1-based input line the failure refers to, when one applies.
    pub fn line(&self) -> Option<usize> {
        match self {
            DecodeError::Json { line, .. }
            | DecodeError::NotAnObject { line }
            | DecodeError::MissingField { line, .. }
            | DecodeError::UnsupportedFieldType { line, .. }
            | DecodeError::InvalidTimestamp { line, .. }
            | DecodeError::InvalidLevel { line, .. }
            | DecodeError::PropertiesNotAnObject { line }
            | DecodeError::MissingRenderedProperty { line, .. }
            | DecodeError::InvalidId { line, .. } => Some(*line),
            DecodeError::Io(_) => None,
        }
    }
}
