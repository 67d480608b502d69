use std::fmt;

use thiserror::Error;

/// Failure to parse a fixed-width hex identifier.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseIdError {
    #[error("identifier must be exactly {expected} hex characters, got {got}")]
    Length { expected: usize, got: usize },
    #[error("identifier contains a non-hex character")]
    NonHex,
}

/// 16-byte distributed-tracing trace identifier.
///
/// An event that carries no trace context holds [`TraceId::EMPTY`], never an
/// absent value.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct TraceId([u8; 16]);

impl TraceId {
    pub const EMPTY: TraceId = TraceId([0; 16]);

    /// Parses exactly 32 hex characters, either case.
    pub fn parse_hex(text: &str) -> Result<Self, ParseIdError> {
        let mut bytes = [0u8; 16];
        parse_fixed_hex(text, &mut bytes)?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// 8-byte distributed-tracing span identifier.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SpanId([u8; 8]);

impl SpanId {
    pub const EMPTY: SpanId = SpanId([0; 8]);

    /// Parses exactly 16 hex characters, either case.
    pub fn parse_hex(text: &str) -> Result<Self, ParseIdError> {
        let mut bytes = [0u8; 8];
        parse_fixed_hex(text, &mut bytes)?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl fmt::Display for SpanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

fn parse_fixed_hex(text: &str, out: &mut [u8]) -> Result<(), ParseIdError> {
    let expected = out.len() * 2;
    if text.len() != expected {
        return Err(ParseIdError::Length {
            expected,
            got: text.len(),
        });
    }
    for (slot, pair) in out.iter_mut().zip(text.as_bytes().chunks_exact(2)) {
        let hi = hex_nibble(pair[0]).ok_or(ParseIdError::NonHex)?;
        let lo = hex_nibble(pair[1]).ok_or(ParseIdError::NonHex)?;
        *slot = (hi << 4) | lo;
    }
    Ok(())
}

fn hex_nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_lowercase_hex() {
        let text = "0af7651916cd43dd8448eb211c80319c";
        let id = TraceId::parse_hex(text).unwrap();
        assert_eq!(id.to_string(), text);
        assert!(!id.is_empty());
    }

    #[test]
    fn accepts_uppercase_hex() {
        let id = SpanId::parse_hex("B7AD6B7169203331").unwrap();
        assert_eq!(id.to_string(), "b7ad6b7169203331");
    }

    #[test]
    fn rejects_wrong_width() {
        assert_eq!(
            TraceId::parse_hex("abcd"),
            Err(ParseIdError::Length {
                expected: 32,
                got: 4
            })
        );
    }

    #[test]
    fn rejects_non_hex() {
        assert_eq!(
            SpanId::parse_hex("zzzzzzzzzzzzzzzz"),
            Err(ParseIdError::NonHex)
        );
    }

    #[test]
    fn default_is_the_empty_sentinel() {
        assert_eq!(TraceId::default(), TraceId::EMPTY);
        assert!(SpanId::default().is_empty());
    }
}
