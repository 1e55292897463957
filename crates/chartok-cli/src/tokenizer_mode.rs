/// The tokenizer mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerMode {
    Encode,
    Decode,
}

/// Mode selection for the tokenizer.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TokenizerModeArgs {
    /// Encode from text to characters.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    encode: bool,

    /// Decode from characters to text.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    decode: bool,
}

impl TokenizerModeArgs {
    /// Get the tokenizer mode.
    ///
    /// The arg group guarantees exactly one flag is set.
    pub fn mode(&self) -> TokenizerMode {
        if self.decode {
            TokenizerMode::Decode
        } else {
            debug_assert!(self.encode);
            TokenizerMode::Encode
        }
    }
}
