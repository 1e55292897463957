use crate::commands::{cat::CatArgs, list_encoders::ListEncodersArgs};

pub mod cat;
pub mod list_encoders;

/// Subcommands for chartok
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Act as a streaming tokenizer.
    Cat(CatArgs),

    /// List available encoders.
    ListEncoders(ListEncodersArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Cat(cmd) => cmd.run(),
            Commands::ListEncoders(cmd) => cmd.run(),
        }
    }
}
