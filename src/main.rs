//! wordstat - word frequency statistics from the command line
//!
//! wordstat provides:
//! - Word counting over files, directories and stdin
//! - Normalization preview for single words
//! - Unified output format (jsonl/json/md/raw)

use anyhow::Result;
use clap::Parser;

use wordstat::cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbose, cli.quiet);
    cli::run(cli)
}
