//! # Encoder Registry
//!
//! Build [`TextEncoder`]s by name from JSON options.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::encoders::{CharactersAsrOptions, TextEncoder};
use crate::errors::{CTResult, ChartokError};

/// A hook that can be used to build registered encoders.
pub struct ConstEncoderHook {
    /// The aliases for the encoder; the first is the primary name.
    pub aliases: &'static [&'static str],

    /// A short description of the encoder.
    pub description: &'static str,

    /// A function that builds the encoder from its JSON options.
    pub build: fn(&Value) -> CTResult<Arc<dyn TextEncoder>>,
}

fn options_from_value(config: &Value) -> CTResult<CharactersAsrOptions> {
    if config.is_null() {
        return Ok(CharactersAsrOptions::default());
    }
    Ok(CharactersAsrOptions::deserialize(config)?)
}

const ENCODER_HOOKS: &[ConstEncoderHook] = &[ConstEncoderHook {
    aliases: &["characters_asr", "chars"],
    description: "Space-separated characters with a space symbol and atomic non-linguistic symbols.",
    build: |config| {
        let encoder: Arc<dyn TextEncoder> = Arc::new(options_from_value(config)?.build()?);
        Ok(encoder)
    },
}];

/// Find the hook registered under `name`.
pub fn lookup_encoder(name: &str) -> Option<&'static ConstEncoderHook> {
    ENCODER_HOOKS.iter().find(|hook| hook.aliases.contains(&name))
}

/// Build a registered encoder by name.
///
/// ## Arguments
/// * `name` - Any alias of a registered encoder.
/// * `config` - JSON options for the encoder; `null` selects the defaults.
///
/// ## Errors
/// [`ChartokError::UnknownEncoder`] if no encoder is registered under `name`;
/// otherwise whatever the encoder's construction reports.
pub fn build_encoder(
    name: &str,
    config: &Value,
) -> CTResult<Arc<dyn TextEncoder>> {
    match lookup_encoder(name) {
        Some(hook) => {
            log::debug!("building encoder {:?}", hook.aliases[0]);
            (hook.build)(config)
        }
        None => Err(ChartokError::UnknownEncoder(name.to_string())),
    }
}

/// List the registered encoders.
///
/// ## Arguments
/// * `aliases` - Whether to include all aliases or just the primary names.
pub fn list_encoders(aliases: bool) -> Vec<String> {
    let mut names = Vec::new();
    for hook in ENCODER_HOOKS {
        if aliases {
            names.extend(hook.aliases.iter().map(|a| a.to_string()));
        } else {
            names.push(hook.aliases[0].to_string());
        }
    }
    names
}

/// List the registered encoders with their descriptions.
pub fn list_encoder_hooks() -> &'static [ConstEncoderHook] {
    ENCODER_HOOKS
}
