//! Lumen CLI - main entry point.

use anyhow::Result;
use clap::Parser;

use lumen_cli::cli::{dispatch_command, init_logging, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);
    dispatch_command(cli)
}
