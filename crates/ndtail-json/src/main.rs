use std::io::{self, Read};

use ndtail_core::{ExtractRequest, OutputSink, extract_tail};

mod output;

fn run(output: &output::JsonOutputSink) -> io::Result<()> {
    let mut json_str = String::new();
    io::stdin().read_to_string(&mut json_str)?;

    // empty stdin means "all defaults"
    let request: ExtractRequest = if json_str.trim().is_empty() {
        ExtractRequest::default()
    } else {
        serde_json::from_str(&json_str).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid JSON input: {}", e),
            )
        })?
    };

    let config = request.into_config()?;
    extract_tail(&config, output)?;
    Ok(())
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // --json-schema: print request schema and exit
    if args.iter().any(|a| a == "--json-schema") {
        let schema = schemars::schema_for!(ExtractRequest);
        let json = serde_json::to_string_pretty(&schema)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        println!("{}", json);
        return Ok(());
    }

    // --version
    if args.iter().any(|a| a == "--version") {
        println!("ndtail-json {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let output = output::JsonOutputSink;
    let result = run(&output);
    // the done signal already carries the error; keep stderr pure JSONL
    output.emit_done(&result);
    if result.is_err() {
        std::process::exit(1);
    }
    Ok(())
}
