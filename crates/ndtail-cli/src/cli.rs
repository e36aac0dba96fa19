//! CLI argument parsing with clap.
//!
//! All three arguments are positional and optional, filled left to right:
//! `ndtail [N] [OUTPUT_FILE] [INPUT_FILE]`.

use clap::{CommandFactory, Parser};
use ndtail_core::{
    DEFAULT_COUNT, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, ExtractConfig, parse_capacity,
};
use std::io::{self, ErrorKind};
use std::path::PathBuf;

const CLI_AFTER_HELP: &str = "\
Examples:
  ndtail                               last 100 records of arxiv-metadata-oai-snapshot.json
  ndtail 500                           last 500 records into arxiv_sample.json
  ndtail 20 recent.json dump.jsonl     last 20 records of dump.jsonl into recent.json

Malformed lines are reported and skipped. The output file is replaced only
after the whole input has been read.";

/// ndtail - keep the last N records of a JSONL file as a JSON array
#[derive(Parser, Debug)]
#[command(
    name = "ndtail",
    about = "Keep the last N records of a JSONL file as a JSON array",
    after_help = CLI_AFTER_HELP,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Number of most-recent records to keep
    #[arg(
        value_name = "N",
        default_value_t = DEFAULT_COUNT,
        value_parser = count_arg,
        allow_negative_numbers = true
    )]
    pub n: usize,

    /// Destination for the JSON array
    #[arg(value_name = "OUTPUT_FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// Source newline-delimited JSON file
    #[arg(value_name = "INPUT_FILE", default_value = DEFAULT_INPUT_FILE)]
    pub input_file: PathBuf,

    /// Show help
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Show version
    #[arg(short = 'V', long = "version")]
    pub version: bool,
}

fn count_arg(s: &str) -> Result<usize, String> {
    parse_capacity(s).map_err(|e| e.to_string())
}

impl Cli {
    pub fn parse_args() -> io::Result<Self> {
        let args: Vec<String> = std::env::args().collect();
        Self::parse_from_args(&args)
    }

    /// Parse CLI arguments from a slice (testable version)
    pub fn parse_from_args(args: &[String]) -> io::Result<Self> {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(cli),
            Err(e) => {
                let msg = e.to_string();
                if msg.contains("unexpected argument") || msg.contains("invalid value") {
                    Err(io::Error::new(ErrorKind::InvalidInput, msg))
                } else {
                    Err(io::Error::other(msg))
                }
            }
        }
    }

    pub fn to_config(&self) -> ExtractConfig {
        ExtractConfig {
            n: self.n,
            output_file: self.output_file.clone(),
            input_file: self.input_file.clone(),
        }
    }

    pub fn print_help() {
        let _ = Self::command().print_help();
    }
}

fn print_version() {
    let branch = option_env!("VERGEN_GIT_BRANCH").unwrap_or("unknown");
    if branch == "main" || branch == "unknown" {
        println!("ndtail v{}", env!("CARGO_PKG_VERSION"));
    } else {
        let sha = option_env!("VERGEN_GIT_SHA")
            .map(|s| &s[..7.min(s.len())])
            .unwrap_or("unknown");
        println!("ndtail v{}-{} ({})", env!("CARGO_PKG_VERSION"), branch, sha);
    }
}

/// Parse the process arguments into a run configuration.
///
/// `--help` and `--version` print and exit. An invalid count is reported
/// before any file is touched.
pub fn parse() -> io::Result<ExtractConfig> {
    let cli = Cli::parse_args()?;

    if cli.help {
        Cli::print_help();
        std::process::exit(0);
    }
    if cli.version {
        print_version();
        std::process::exit(0);
    }

    Ok(cli.to_config())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to create args from a command string (shell-style parsing)
    fn args(s: &str) -> Vec<String> {
        std::iter::once("ndtail".to_string())
            .chain(shlex::split(s).unwrap_or_default())
            .collect()
    }

    fn parse_cli(s: &str) -> io::Result<Cli> {
        Cli::parse_from_args(&args(s))
    }

    #[test]
    fn test_no_args_uses_defaults() {
        let cli = parse_cli("").unwrap();
        assert_eq!(cli.to_config(), ExtractConfig::default());
        assert!(!cli.help);
        assert!(!cli.version);
    }

    #[test]
    fn test_count_only() {
        let config = parse_cli("25").unwrap().to_config();
        assert_eq!(config.n, 25);
        assert_eq!(config.output_file, PathBuf::from("arxiv_sample.json"));
        assert_eq!(
            config.input_file,
            PathBuf::from("arxiv-metadata-oai-snapshot.json")
        );
    }

    #[test]
    fn test_count_and_output() {
        let config = parse_cli("5 out.json").unwrap().to_config();
        assert_eq!(config.n, 5);
        assert_eq!(config.output_file, PathBuf::from("out.json"));
        assert_eq!(
            config.input_file,
            PathBuf::from("arxiv-metadata-oai-snapshot.json")
        );
    }

    #[test]
    fn test_all_positionals() {
        let config = parse_cli("0 'my out.json' data/in.jsonl")
            .unwrap()
            .to_config();
        assert_eq!(config.n, 0);
        assert_eq!(config.output_file, PathBuf::from("my out.json"));
        assert_eq!(config.input_file, PathBuf::from("data/in.jsonl"));
    }

    #[test]
    fn test_non_numeric_count_is_invalid_input() {
        let err = parse_cli("lots out.json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("not an integer"));
    }

    #[test]
    fn test_negative_count_is_invalid_input() {
        let err = parse_cli("-5").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_too_many_positionals_rejected() {
        let err = parse_cli("1 a.json b.jsonl extra").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_help_and_version_flags() {
        assert!(parse_cli("-h").unwrap().help);
        assert!(parse_cli("--help").unwrap().help);
        assert!(parse_cli("-V").unwrap().version);
        assert!(parse_cli("--version").unwrap().version);
    }
}
