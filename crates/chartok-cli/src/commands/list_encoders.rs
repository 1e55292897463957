use chartok::registry::list_encoder_hooks;

/// Args for the encoder listing command.
#[derive(clap::Args, Debug)]
pub struct ListEncodersArgs {
    /// Also list aliases.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    aliases: bool,
}

impl ListEncodersArgs {
    /// Run the encoder listing command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let hooks = list_encoder_hooks();
        log::debug!("{} registered encoders", hooks.len());

        for hook in hooks {
            println!("\"{}\" - {}", hook.aliases[0], hook.description);

            if self.aliases {
                for alias in &hook.aliases[1..] {
                    println!("  * \"{alias}\"");
                }
            }
        }

        Ok(())
    }
}
