//! Bounded tail extraction.
//!
//! A run streams the input once, keeps the last `n` well-formed records in a
//! [`TailWindow`], and writes the window out as a single JSON array after the
//! input is exhausted. Memory is bounded by `n` records plus one line.

use crate::config::ExtractConfig;
use crate::error::{ExtractError, IoAction};
use crate::jsonl::JsonlLines;
use crate::output::{ExtractEvent, OutputSink, PROGRESS_INTERVAL};
use crate::safe_io::atomic_write_json;
use crate::window::TailWindow;
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Statistics for a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractSummary {
    /// Input lines seen, valid or not.
    pub lines_read: usize,
    /// Lines that decoded as JSON.
    pub records_parsed: usize,
    pub malformed_lines: usize,
    /// Length of the output array: `min(n, records_parsed)`.
    pub records_written: usize,
    pub output_file: PathBuf,
}

/// The retained window plus the counters gathered while filling it.
#[derive(Debug)]
pub struct TailOutcome {
    pub window: TailWindow<Value>,
    pub lines_read: usize,
    pub records_parsed: usize,
    pub malformed_lines: usize,
}

/// Fill a window of capacity `n` from a JSONL stream.
///
/// Malformed lines are reported as [`ExtractEvent::MalformedLine`] and
/// skipped. A [`ExtractEvent::Progress`] event fires every
/// [`PROGRESS_INTERVAL`] lines. `source` names the stream in I/O errors.
pub fn tail_records<R: BufRead>(
    reader: R,
    n: usize,
    source: &Path,
    sink: &dyn OutputSink,
) -> Result<TailOutcome, ExtractError> {
    let mut outcome = TailOutcome {
        window: TailWindow::new(n),
        lines_read: 0,
        records_parsed: 0,
        malformed_lines: 0,
    };

    for line in JsonlLines::<_, Value>::new(reader) {
        let line = line.map_err(|e| ExtractError::io(IoAction::ReadInput, source, e))?;
        outcome.lines_read = line.number;

        match line.parsed {
            Ok(record) => {
                outcome.records_parsed += 1;
                outcome.window.push(record);
            }
            Err(e) => {
                outcome.malformed_lines += 1;
                sink.emit_event(ExtractEvent::MalformedLine {
                    line: line.number,
                    message: e.to_string(),
                });
            }
        }

        if line.number % PROGRESS_INTERVAL == 0 {
            sink.emit_event(ExtractEvent::Progress { lines: line.number });
        }
    }

    Ok(outcome)
}

/// Extract the last `config.n` records of `config.input_file` into
/// `config.output_file` as a JSON array.
///
/// The output is only touched after the whole input has been read, and is
/// replaced atomically. Any previous file at that path is overwritten.
///
/// # Errors
///
/// [`ExtractError::Io`] if the input cannot be opened or read (including
/// invalid UTF-8), or if the output cannot be written.
pub fn extract_tail(
    config: &ExtractConfig,
    sink: &dyn OutputSink,
) -> Result<ExtractSummary, ExtractError> {
    sink.emit_event(ExtractEvent::Started {
        n: config.n,
        input_file: config.input_file.clone(),
    });

    let file = File::open(&config.input_file)
        .map_err(|e| ExtractError::io(IoAction::OpenInput, &config.input_file, e))?;
    let outcome = tail_records(BufReader::new(file), config.n, &config.input_file, sink)?;

    let records = outcome.window.into_vec();
    let count = records.len();

    sink.emit_event(ExtractEvent::Writing {
        count,
        output_file: config.output_file.clone(),
    });

    atomic_write_json(&config.output_file, &records)
        .map_err(|e| ExtractError::io(IoAction::WriteOutput, &config.output_file, e))?;

    sink.emit_event(ExtractEvent::Done {
        count,
        output_file: config.output_file.clone(),
    });

    let summary = ExtractSummary {
        lines_read: outcome.lines_read,
        records_parsed: outcome.records_parsed,
        malformed_lines: outcome.malformed_lines,
        records_written: count,
        output_file: config.output_file.clone(),
    };
    sink.emit_result(&summary);
    Ok(summary)
}
