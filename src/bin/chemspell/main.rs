mod commands;
mod common;
mod logging;

use clap::Parser;
use commands::Commands;

/// chemspell
#[derive(clap::Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    pub logging: logging::LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging()?;

    args.command.run()
}
