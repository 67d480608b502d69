//! Field names recognized at the top level of an event document.
//!
//! Field names are case-sensitive. Anything else in a document is ignored.

/// Required event time, a string in an ISO-8601-like grammar.
pub const TIMESTAMP: &str = "Timestamp";
/// Message template text.
pub const MESSAGE_TEMPLATE: &str = "MessageTemplate";
/// Fallback plain message, escaped into an all-literal template.
pub const MESSAGE: &str = "@m";
/// Severity name; defaults to `Information` when absent.
pub const LEVEL: &str = "Level";
/// Opaque exception text.
pub const EXCEPTION: &str = "Exception";
/// Hex trace identifier.
pub const TRACE_ID: &str = "@tr";
/// Hex span identifier.
pub const SPAN_ID: &str = "@sp";
/// The property bag, also the source for reconstructed renderings.
pub const PROPERTIES: &str = "Properties";
/// Event identifier, folded into the property list under this same name.
pub const EVENT_ID: &str = "@i";

/// Reserved member of a structured property value naming its concrete type.
pub const TYPE_TAG: &str = "$type";
