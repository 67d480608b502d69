use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::Value;
use tracing::{debug, trace};

use log_events::LogEvent;

use crate::decode::decode_event_on_line;
use crate::error::DecodeError;

/// Streaming reader over newline-delimited compact log events.
///
/// Owns the underlying text source and a 1-based line counter used to tag
/// failures; restrict each instance to one logical consumer. Blank and
/// whitespace-only lines are skipped unconditionally but still advance the
/// counter. A decode failure is returned for that call only — the reader
/// stays usable and the next [`read_event`](ClefReader::read_event)
/// continues with the following line, so callers choose whether one bad
/// line aborts the stream.
#[derive(Debug)]
pub struct ClefReader<R: BufRead> {
    reader: R,
    line_number: usize,
    buffer: String,
    done: bool,
}

impl<R: BufRead> ClefReader<R> {
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
    ///
    /// An unterminated final line that holds at least one character is
    /// treated as a complete line.
    pub fn read_event(&mut self) -> Result<Option<LogEvent>, DecodeError> {
        if self.done {
            return Ok(None);
        }
        loop {
            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
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

impl<R: BufRead> Iterator for ClefReader<R> {
    type Item = Result<LogEvent, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_event().transpose()
    }
}

/// Decodes one raw line; `Ok(None)` for blank lines.
pub(crate) fn decode_line(raw: &str, line_number: usize) -> Result<Option<LogEvent>, DecodeError> {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.chars().all(char::is_whitespace) {
        trace!(line = line_number, "skipping blank line");
        return Ok(None);
    }
    let document: Value = serde_json::from_str(line).map_err(|source| DecodeError::Json {
        line: line_number,
        source,
    })?;
    decode_event_on_line(&document, line_number).map(Some)
}

/// Reader over a log file on disk.
pub type ClefFileReader = ClefReader<BufReader<File>>;

impl ClefFileReader {
    /// Opens `path` behind a buffered reader.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DecodeError> {
        let file = File::open(path.as_ref())?;
        Ok(ClefReader::new(BufReader::new(file)))
    }
}
