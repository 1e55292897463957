use std::sync::Arc;

use chartok::{CharactersAsrOptions, TextEncoder, build_encoder};

/// Encoder selection and option args.
#[derive(clap::Args, Debug)]
pub struct EncoderArgs {
    /// Registered encoder name; see `list-encoders`.
    #[arg(long, default_value = "characters_asr")]
    encoder: String,

    /// JSON options file; flags below override its fields.
    #[arg(long)]
    config: Option<String>,

    /// Symbol substituted for spaces.
    #[arg(long)]
    space_symbol: Option<String>,

    /// Do not append the space symbol to each encoded line.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    no_ends_with_space: bool,

    /// A non-linguistic symbol; may be repeated.
    #[arg(long = "non-lang-sym", conflicts_with = "non_lang_syms_file")]
    non_lang_syms: Vec<String>,

    /// File listing non-linguistic symbols, one per line.
    #[arg(long)]
    non_lang_syms_file: Option<String>,
}

impl EncoderArgs {
    /// Assemble the encoder options.
    pub fn options(&self) -> Result<CharactersAsrOptions, Box<dyn std::error::Error>> {
        let mut options = match &self.config {
            Some(path) => {
                log::info!("options: {path}");
                CharactersAsrOptions::from_json_file(path)?
            }
            None => CharactersAsrOptions::default(),
        };

        if let Some(space_symbol) = &self.space_symbol {
            options = options.with_space_symbol(space_symbol.clone());
        }
        if self.no_ends_with_space {
            options = options.with_ends_with_space(false);
        }
        if !self.non_lang_syms.is_empty() {
            options = options.with_non_lang_syms_list(self.non_lang_syms.iter().cloned());
        }
        if let Some(path) = &self.non_lang_syms_file {
            options = options.with_non_lang_syms_path(path.clone());
        }

        Ok(options)
    }

    /// Build the selected encoder.
    pub fn load_encoder(&self) -> Result<Arc<dyn TextEncoder>, Box<dyn std::error::Error>> {
        let config = serde_json::to_value(self.options()?)?;
        log::debug!("encoder: {} {config}", self.encoder);
        Ok(build_encoder(&self.encoder, &config)?)
    }
}
