// ndtail: CLI frontend for ndtail-core
// Positional argument parsing and console output

mod cli;
mod output;

use output::OutputHandler;
use std::io;

fn main() -> io::Result<()> {
    let config = cli::parse()?;
    let output = OutputHandler::new();

    ndtail_core::extract_tail(&config, &output)?;

    Ok(())
}
