mod commands;
mod encoder_args;
mod input_output;
mod logging;
mod tokenizer_mode;

use clap::Parser;
use commands::Commands;
use logging::{DEFAULT_VERBOSITY, LogArgs};

/// chartok: character-level transcript tokenizer.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub logging: LogArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging(DEFAULT_VERBOSITY)?;

    args.command.run()
}
