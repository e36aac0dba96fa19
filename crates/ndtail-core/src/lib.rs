//! ndtail-core: keep the last N records of a JSONL file.
//!
//! Streams a newline-delimited JSON file once, retains the most recent N
//! well-formed records in a fixed-capacity window, and writes them out as a
//! single pretty-printed JSON array. Malformed lines are reported and skipped.
//!
//! # Quick Start
//!
//! ```no_run
//! use ndtail_core::{ExtractConfig, NoopSink, extract_tail};
//!
//! fn main() -> std::io::Result<()> {
//!     let config = ExtractConfig {
//!         n: 10,
//!         ..ExtractConfig::default()
//!     };
//!     let summary = extract_tail(&config, &NoopSink)?;
//!     println!("wrote {} records", summary.records_written);
//!     Ok(())
//! }
//! ```
//!
//! Frontends receive progress through an [`OutputSink`]; the core never
//! prints on its own.

pub mod config;
pub mod error;
pub mod extract;
pub mod jsonl;
pub mod output;
pub mod safe_io;
pub mod window;

pub use config::{
    DEFAULT_COUNT, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, ExtractConfig, ExtractRequest,
    capacity_from_i64, parse_capacity,
};
pub use error::{ExtractError, IoAction};
pub use extract::{ExtractSummary, TailOutcome, extract_tail, tail_records};
pub use jsonl::{JsonlLine, JsonlLines};
pub use output::{ExtractEvent, NoopSink, OutputSink, PROGRESS_INTERVAL};
pub use window::TailWindow;
