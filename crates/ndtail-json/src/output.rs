use ndtail_core::{ExtractEvent, ExtractSummary, OutputSink};
use std::io;

/// Map `io::ErrorKind` to a stable coarse-grained error code string.
fn error_code(e: &io::Error) -> &'static str {
    match e.kind() {
        io::ErrorKind::NotFound => "not_found",
        io::ErrorKind::InvalidInput => "invalid_input",
        io::ErrorKind::PermissionDenied => "permission_denied",
        io::ErrorKind::InvalidData => "invalid_data",
        io::ErrorKind::IsADirectory => "is_a_directory",
        _ => "internal_error",
    }
}

fn event_json(event: &ExtractEvent) -> serde_json::Value {
    match event {
        ExtractEvent::Started { n, input_file } => {
            serde_json::json!({"type": "started", "n": n, "input_file": input_file})
        }
        ExtractEvent::MalformedLine { line, message } => {
            serde_json::json!({"type": "malformed_line", "line": line, "message": message})
        }
        ExtractEvent::Progress { lines } => {
            serde_json::json!({"type": "progress", "lines": lines})
        }
        ExtractEvent::Writing { count, output_file } => {
            serde_json::json!({"type": "writing", "count": count, "output_file": output_file})
        }
        ExtractEvent::Done { count, output_file } => {
            serde_json::json!({"type": "extracted", "count": count,
                               "output_file": output_file})
        }
    }
}

fn done_json(result: &io::Result<()>) -> serde_json::Value {
    match result {
        Ok(()) => serde_json::json!({"type": "done", "ok": true}),
        Err(e) => serde_json::json!({
            "type": "done",
            "ok": false,
            "code": error_code(e),
            "message": e.to_string(),
        }),
    }
}

/// JSONL output sink for ndtail-json.
///
/// Events and the final done signal go to stderr as JSONL; the run summary
/// goes to stdout as a single `result` object.
pub struct JsonOutputSink;

impl OutputSink for JsonOutputSink {
    fn emit_event(&self, event: ExtractEvent) {
        eprintln!("{}", event_json(&event));
    }

    fn emit_result(&self, summary: &ExtractSummary) {
        let mut json = serde_json::json!({"type": "result"});
        if let (Some(obj), Ok(serde_json::Value::Object(fields))) =
            (json.as_object_mut(), serde_json::to_value(summary))
        {
            obj.extend(fields);
        }
        println!("{}", json);
    }

    fn emit_done(&self, result: &io::Result<()>) {
        eprintln!("{}", done_json(result));
    }
}
