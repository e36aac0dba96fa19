//! JSONL line reader.
//!
//! [`JsonlLines`] walks a buffered reader one line at a time and attempts to
//! decode each line as a standalone JSON value. Decode failures are yielded
//! alongside their line number rather than ending iteration; only I/O errors
//! (including invalid UTF-8) are terminal.

use serde::de::DeserializeOwned;
use std::io::{self, BufRead, Lines};
use std::marker::PhantomData;

/// One input line after a decode attempt.
#[derive(Debug)]
pub struct JsonlLine<T> {
    /// 1-based line number in the input.
    pub number: usize,
    pub parsed: Result<T, serde_json::Error>,
}

/// Iterator over the decoded lines of a JSONL stream.
///
/// Trailing whitespace (including a `\r` left by CRLF line endings) is
/// stripped before decoding. Blank lines are not skipped: they fail to decode
/// like any other malformed line.
pub struct JsonlLines<R, T> {
    lines: Lines<R>,
    number: usize,
    _record: PhantomData<fn() -> T>,
}

impl<R: BufRead, T: DeserializeOwned> JsonlLines<R, T> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            number: 0,
            _record: PhantomData,
        }
    }
}

impl<R: BufRead, T: DeserializeOwned> Iterator for JsonlLines<R, T> {
    type Item = io::Result<JsonlLine<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e)),
        };
        self.number += 1;
        Some(Ok(JsonlLine {
            number: self.number,
            parsed: serde_json::from_str(line.trim_end()),
        }))
    }
}
