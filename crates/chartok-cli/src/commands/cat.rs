use std::io::{self, Write};

use chartok::TextEncoder;

use crate::{
    encoder_args::EncoderArgs,
    input_output::{InputArgs, OutputArgs, TranscriptWriter},
    tokenizer_mode::{TokenizerMode, TokenizerModeArgs},
};

/// Args for the cat command.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    #[command(flatten)]
    encoder: EncoderArgs,

    #[command(flatten)]
    tokenizer_mode: TokenizerModeArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl CatArgs {
    /// Run the cat command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let encoder = self.encoder.load_encoder()?;

        let lines = self.input.open_lines()?;
        let mut writer = self.output.open_writer()?;

        run_cat(
            self.tokenizer_mode.mode(),
            lines,
            &mut writer,
            encoder.as_ref(),
        )?;
        Ok(())
    }
}

/// Encode or decode each transcript line; one output line per input line.
fn run_cat<I, W>(
    mode: TokenizerMode,
    lines: I,
    writer: &mut TranscriptWriter<W>,
    encoder: &dyn TextEncoder,
) -> io::Result<()>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    for line in lines {
        let line = line?;
        let text = match mode {
            TokenizerMode::Encode => encoder.encode(&line),
            TokenizerMode::Decode => encoder.decode(&line),
        };
        writer.write_line(&text)?;
    }

    log::info!("{mode:?}: {} lines", writer.lines());
    Ok(())
}
