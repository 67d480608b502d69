#![forbid(unsafe_code)]
//! Decoder for newline-delimited compact JSON log events.
//!
//! Each non-blank input line is one self-contained JSON object describing a
//! log event: a required `Timestamp`, an optional `MessageTemplate` (or a
//! plain `@m` message), a `Level`, an `Exception`, `@tr`/`@sp` trace
//! identifiers, a `Properties` bag, and an `@i` event identifier. The
//! decoder rebuilds a typed [`log_events::LogEvent`] per line, including
//! recursive property typing and the renderings cached for template
//! placeholders. Decoding is all-or-nothing per line, and every failure is
//! tagged with the 1-based line number.
//!
//! ```
//! use clef_reader::ClefReader;
//!
//! let source = concat!(
//!     r#"{"Timestamp":"2024-05-01T10:22:00Z","MessageTemplate":"Hello {Name}","#,
//!     r#""Properties":{"Name":"world"}}"#,
//!     "\n",
//! );
//! let mut reader = ClefReader::new(source.as_bytes());
//! while let Some(event) = reader.read_event()? {
//!     println!("{}", event.template.text());
//! }
//! # Ok::<(), clef_reader::DecodeError>(())
//! ```
//!
//! Streaming entry points are [`ClefReader`] (blocking) and
//! [`AsyncClefReader`] (behind the `tokio` feature, with the line read as
//! the only suspension point). One-shot entry points are
//! [`read_event_from_str`] and [`read_event_from_value`].

mod coerce;
mod decode;
mod error;
pub mod fields;
mod properties;
mod reader;
mod renderings;

pub use decode::{read_event_from_str, read_event_from_value};
pub use error::DecodeError;
pub use reader::{ClefFileReader, ClefReader};

#[cfg(feature = "tokio")]
pub use reader::AsyncClefReader;
