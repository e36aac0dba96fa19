//! Output handling for the CLI.
//!
//! `OutputHandler` prints extraction notices to stdout and malformed-line
//! warnings to stderr, so redirecting stdout keeps a clean progress log.

use ndtail_core::{ExtractEvent, OutputSink};

/// Where a rendered event goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// CLI output handler: notices to stdout, warnings to stderr.
#[derive(Default)]
pub struct OutputHandler;

impl OutputHandler {
    pub fn new() -> Self {
        Self
    }
}

fn render(event: &ExtractEvent) -> (Stream, String) {
    match event {
        ExtractEvent::Started { n, input_file } => (
            Stream::Stdout,
            format!(
                "Extracting last {} JSON objects from {}...",
                n,
                input_file.display()
            ),
        ),
        ExtractEvent::MalformedLine { line, message } => (
            Stream::Stderr,
            format!("Warning: Failed to parse line {}: {}", line, message),
        ),
        ExtractEvent::Progress { lines } => {
            (Stream::Stdout, format!("  Processed {} lines...", lines))
        }
        ExtractEvent::Writing { count, output_file } => (
            Stream::Stdout,
            format!("Writing {} objects to {}...", count, output_file.display()),
        ),
        ExtractEvent::Done { count, output_file } => (
            Stream::Stdout,
            format!(
                "Done! Extracted {} objects to {}",
                count,
                output_file.display()
            ),
        ),
    }
}

impl OutputSink for OutputHandler {
    fn emit_event(&self, event: ExtractEvent) {
        match render(&event) {
            (Stream::Stdout, text) => println!("{}", text),
            (Stream::Stderr, text) => eprintln!("{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_started_notice() {
        let (stream, text) = render(&ExtractEvent::Started {
            n: 100,
            input_file: PathBuf::from("arxiv-metadata-oai-snapshot.json"),
        });
        assert_eq!(stream, Stream::Stdout);
        assert_eq!(
            text,
            "Extracting last 100 JSON objects from arxiv-metadata-oai-snapshot.json..."
        );
    }

    #[test]
    fn test_malformed_line_goes_to_stderr() {
        let (stream, text) = render(&ExtractEvent::MalformedLine {
            line: 2,
            message: "expected value at line 1 column 1".to_string(),
        });
        assert_eq!(stream, Stream::Stderr);
        assert_eq!(
            text,
            "Warning: Failed to parse line 2: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_progress_notice() {
        let (stream, text) = render(&ExtractEvent::Progress { lines: 20_000 });
        assert_eq!(stream, Stream::Stdout);
        assert_eq!(text, "  Processed 20000 lines...");
    }

    #[test]
    fn test_writing_and_done_notices() {
        let out = PathBuf::from("arxiv_sample.json");
        let (_, writing) = render(&ExtractEvent::Writing {
            count: 3,
            output_file: out.clone(),
        });
        let (_, done) = render(&ExtractEvent::Done {
            count: 3,
            output_file: out,
        });
        assert_eq!(writing, "Writing 3 objects to arxiv_sample.json...");
        assert_eq!(done, "Done! Extracted 3 objects to arxiv_sample.json");
    }
}
