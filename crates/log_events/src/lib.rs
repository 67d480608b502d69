#![forbid(unsafe_code)]
//! In-memory model for structured log events.
//!
//! A [`LogEvent`] is a timestamp, a severity [`Level`], an optional opaque
//! exception text, a parsed [`MessageTemplate`], an ordered list of named
//! [`Property`] values, and optional distributed-tracing identifiers
//! ([`TraceId`]/[`SpanId`]). Property values are recursive: scalars,
//! structured values with named sub-properties, or sequences. Scalars may
//! carry cached per-format [`Rendering`]s so that replayed display output is
//! byte-identical to whatever engine originally formatted it.
//!
//! Every value here is constructed fresh and immutable thereafter; there is
//! no shared state between events.

mod event;
mod level;
mod property;
mod template;
mod trace;

pub use event::LogEvent;
pub use level::{Level, ParseLevelError};
pub use property::{
    is_valid_property_name, Property, PropertyValue, Rendering, ScalarValue, UNNAMED_PROPERTY,
};
pub use template::{Destructuring, MessageTemplate, MessageTemplateToken, PropertyToken};
pub use trace::{ParseIdError, SpanId, TraceId};
