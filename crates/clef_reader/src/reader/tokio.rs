use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use log_events::LogEvent;

use crate::error::DecodeError;
use crate::reader::sync::decode_line;

/// Suspension-point twin of [`ClefReader`](crate::ClefReader).
///
/// The line read is the only await point; identical input yields identical
/// events and identical error lines in either mode. Cancelling a pending
/// [`read_event`](AsyncClefReader::read_event) can abandon a partially read
/// line — the line counter stays consistent for bookkeeping, but the reader
/// should be discarded after a cancellation.
pub struct AsyncClefReader<R: AsyncBufRead + Unpin> {
    reader: R,
    line_number: usize,
    buffer: String,
    done: bool,
}

impl<R: AsyncBufRead + Unpin> AsyncClefReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            buffer: String::new(),
            done: false,
        }
    }

    /// Consumes the reader and returns the underlying source.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Lines read so far, counting blank and failed ones.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    /// Reads the next event. `Ok(None)` signals end of input.
    pub async fn read_event(&mut self) -> Result<Option<LogEvent>, DecodeError> {
        if self.done {
            return Ok(None);
        }
        loop {
            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer).await {
                Ok(0) => {
                    self.done = true;
                    return Ok(None);
                }
                Ok(_) => {
                    self.line_number += 1;
                    match decode_line(&self.buffer, self.line_number) {
                        Ok(None) => continue,
                        Ok(Some(event)) => return Ok(Some(event)),
                        Err(err) => {
                            debug!(line = self.line_number, %err, "line failed to decode");
                            return Err(err);
                        }
                    }
                }
                Err(err) => {
                    self.done = true;
                    return Err(DecodeError::Io(err));
                }
            }
        }
    }
}
