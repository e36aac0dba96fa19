//! Run configuration.
//!
//! [`ExtractConfig`] is populated once at process start, either from the
//! `ndtail` positional arguments or from an [`ExtractRequest`] read by
//! `ndtail-json`. Both paths validate the record count through the helpers
//! here so the error wording stays the same.

use crate::error::ExtractError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default number of trailing records to keep.
pub const DEFAULT_COUNT: usize = 100;
/// Default destination for the JSON array.
pub const DEFAULT_OUTPUT_FILE: &str = "arxiv_sample.json";
/// Default JSONL source.
pub const DEFAULT_INPUT_FILE: &str = "arxiv-metadata-oai-snapshot.json";

/// Fully resolved settings for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Number of most-recent valid records to keep.
    pub n: usize,
    pub output_file: PathBuf,
    pub input_file: PathBuf,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            n: DEFAULT_COUNT,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
        }
    }
}

/// Parse a record count from text.
///
/// Surrounding whitespace and a leading `+` are accepted. Anything that is
/// not a non-negative integer is an [`ExtractError::Argument`].
pub fn parse_capacity(s: &str) -> Result<usize, ExtractError> {
    let trimmed = s.trim();
    let value: i128 = trimmed
        .parse()
        .map_err(|_| ExtractError::Argument(format!("'{}' is not an integer", s)))?;
    capacity_from_i128(value)
}

/// Validate a signed record count.
pub fn capacity_from_i64(value: i64) -> Result<usize, ExtractError> {
    capacity_from_i128(value.into())
}

fn capacity_from_i128(value: i128) -> Result<usize, ExtractError> {
    if value < 0 {
        return Err(ExtractError::Argument(format!(
            "{} is negative; the count must be zero or greater",
            value
        )));
    }
    usize::try_from(value)
        .map_err(|_| ExtractError::Argument(format!("{} is too large", value)))
}

/// Programmatic request, as read by `ndtail-json` from stdin.
///
/// Every field is optional; omitted fields take the documented defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ExtractRequest {
    /// Number of most-recent records to keep (default 100). Must be >= 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<i64>,
    /// Destination for the JSON array (default "arxiv_sample.json").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<PathBuf>,
    /// Source JSONL file (default "arxiv-metadata-oai-snapshot.json").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_file: Option<PathBuf>,
}

impl ExtractRequest {
    /// Resolve into a run configuration, applying defaults and validating `n`.
    pub fn into_config(self) -> Result<ExtractConfig, ExtractError> {
        let defaults = ExtractConfig::default();
        let n = match self.n {
            Some(n) => capacity_from_i64(n)?,
            None => defaults.n,
        };
        Ok(ExtractConfig {
            n,
            output_file: self.output_file.unwrap_or(defaults.output_file),
            input_file: self.input_file.unwrap_or(defaults.input_file),
        })
    }
}
