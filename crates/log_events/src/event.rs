use time::OffsetDateTime;

use crate::{Level, MessageTemplate, Property, PropertyValue, SpanId, TraceId};

/// One fully decoded log event.
///
/// Events are assembled whole and never mutated afterwards. Property order
/// follows the source document.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEvent {
    /// When the event occurred, with UTC offset.
    pub timestamp: OffsetDateTime,
    pub level: Level,
    /// Opaque exception text, carried verbatim.
    pub exception: Option<String>,
    pub template: MessageTemplate,
    pub properties: Vec<Property>,
    /// [`TraceId::EMPTY`] when the event carries no trace context.
    pub trace_id: TraceId,
    pub span_id: SpanId,
}

impl LogEvent {
    /// Looks up a property value by name.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|property| property.name == name)
            .map(|property| &property.value)
    }
}
