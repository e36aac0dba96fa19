use crate::extract::ExtractSummary;
use std::io;
use std::path::PathBuf;

/// Progress notice interval, in input lines (valid and malformed alike).
pub const PROGRESS_INTERVAL: usize = 10_000;

/// Semantic events emitted while an extraction runs.
///
/// Core emits every variant unconditionally; frontends decide how to format
/// them and where they go.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractEvent {
    /// Extraction is starting.
    Started { n: usize, input_file: PathBuf },
    /// A line failed to decode as JSON and was skipped.
    MalformedLine { line: usize, message: String },
    /// Emitted every [`PROGRESS_INTERVAL`] lines with the cumulative count.
    Progress { lines: usize },
    /// Input exhausted; `count` records are about to be written.
    Writing { count: usize, output_file: PathBuf },
    /// Output written successfully.
    Done { count: usize, output_file: PathBuf },
}

/// Abstraction over how extraction progress and results are presented.
///
/// ndtail implements this with OutputHandler (plain text to the console).
/// ndtail-json implements this with JsonOutputSink (JSONL to stdout/stderr).
pub trait OutputSink {
    /// Emit a typed event. Sinks filter and format as appropriate.
    fn emit_event(&self, event: ExtractEvent);

    /// Emit the summary of a completed run.
    ///
    /// Default: no-op. The `Done` event already carries the essentials.
    fn emit_result(&self, summary: &ExtractSummary) {
        let _ = summary;
    }

    /// Signal that the process is about to exit. Called once by the frontend,
    /// including when the run never started (bad arguments or request).
    ///
    /// Default: no-op. The CLI reports failures through `main`'s error return.
    fn emit_done(&self, result: &io::Result<()>) {
        let _ = result;
    }
}

/// A no-op sink for library callers that want a silent run.
pub struct NoopSink;

impl OutputSink for NoopSink {
    fn emit_event(&self, _: ExtractEvent) {}
}

/// A capturing sink for tests: collects events for assertions.
#[cfg(test)]
pub(crate) struct CaptureSink {
    pub events: std::cell::RefCell<Vec<ExtractEvent>>,
}

#[cfg(test)]
impl CaptureSink {
    pub fn new() -> Self {
        Self {
            events: std::cell::RefCell::new(vec![]),
        }
    }

    /// Line numbers of every `MalformedLine` event, in emission order.
    pub fn malformed_lines(&self) -> Vec<usize> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ExtractEvent::MalformedLine { line, .. } => Some(*line),
                _ => None,
            })
            .collect()
    }

    /// Cumulative counts carried by every `Progress` event.
    pub fn progress_marks(&self) -> Vec<usize> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ExtractEvent::Progress { lines } => Some(*lines),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl OutputSink for CaptureSink {
    fn emit_event(&self, event: ExtractEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingSink {
        result_called: std::cell::Cell<bool>,
        done_called: std::cell::Cell<bool>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                result_called: std::cell::Cell::new(false),
                done_called: std::cell::Cell::new(false),
            }
        }
    }

    impl OutputSink for RecordingSink {
        fn emit_event(&self, _: ExtractEvent) {}
        fn emit_result(&self, _: &ExtractSummary) {
            self.result_called.set(true);
        }
        fn emit_done(&self, _: &io::Result<()>) {
            self.done_called.set(true);
        }
    }

    fn summary() -> ExtractSummary {
        ExtractSummary {
            lines_read: 3,
            records_parsed: 2,
            malformed_lines: 1,
            records_written: 2,
            output_file: PathBuf::from("out.json"),
        }
    }

    #[test]
    fn default_methods_are_noops() {
        // NoopSink uses the default impls; calling them must not panic
        let sink = NoopSink;
        sink.emit_event(ExtractEvent::Progress { lines: 10_000 });
        sink.emit_result(&summary());
        sink.emit_done(&Ok(()));
        sink.emit_done(&Err(io::Error::new(io::ErrorKind::NotFound, "x")));
    }

    #[test]
    fn result_and_done_can_be_overridden() {
        let sink = RecordingSink::new();
        sink.emit_result(&summary());
        assert!(sink.result_called.get());
        assert!(!sink.done_called.get());

        sink.emit_done(&Ok(()));
        assert!(sink.done_called.get());
    }
}
