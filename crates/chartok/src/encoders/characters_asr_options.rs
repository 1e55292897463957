use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::encoders::CharactersAsr;
use crate::errors::{CTResult, ChartokError};
use crate::resources::PathResolver;

/// The default space symbol.
pub const DEFAULT_SPACE_SYMBOL: &str = "<space>";

/// Source of the non-linguistic symbol list.
///
/// Serialized untagged: a JSON array is a [`NonLangSyms::List`],
/// a JSON string is a [`NonLangSyms::Path`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NonLangSyms {
    /// An explicit list of symbols.
    List(Vec<String>),

    /// A path to a file listing one symbol per line.
    Path(String),
}

/// Options for configuring a [`CharactersAsr`] encoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CharactersAsrOptions {
    /// The symbol substituted for spaces.
    pub space_symbol: String,

    /// Whether to append the space symbol to each encoded sentence.
    pub ends_with_space: bool,

    /// Non-linguistic symbols, kept as atomic tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_lang_syms: Option<NonLangSyms>,
}

impl Default for CharactersAsrOptions {
    fn default() -> Self {
        Self {
            space_symbol: DEFAULT_SPACE_SYMBOL.to_string(),
            ends_with_space: true,
            non_lang_syms: None,
        }
    }
}

impl CharactersAsrOptions {
    /// Parse options from a JSON string.
    ///
    /// Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> CTResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> CTResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Render the options as pretty-printed JSON.
    pub fn to_json(&self) -> CTResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sets the space symbol.
    pub fn with_space_symbol<S: Into<String>>(
        mut self,
        space_symbol: S,
    ) -> Self {
        self.space_symbol = space_symbol.into();
        self
    }

    /// Sets whether encoded sentences end with the space symbol.
    pub fn with_ends_with_space(
        mut self,
        ends_with_space: bool,
    ) -> Self {
        self.ends_with_space = ends_with_space;
        self
    }

    /// Sets the non-linguistic symbol source.
    pub fn with_non_lang_syms(
        mut self,
        non_lang_syms: Option<NonLangSyms>,
    ) -> Self {
        self.non_lang_syms = non_lang_syms;
        self
    }

    /// Sets an explicit non-linguistic symbol list.
    pub fn with_non_lang_syms_list<I, S>(
        self,
        symbols: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_non_lang_syms(Some(NonLangSyms::List(
            symbols.into_iter().map(Into::into).collect(),
        )))
    }

    /// Sets a non-linguistic symbol file path.
    pub fn with_non_lang_syms_path<S: Into<String>>(
        self,
        path: S,
    ) -> Self {
        self.with_non_lang_syms(Some(NonLangSyms::Path(path.into())))
    }

    /// Check that the options can build a working encoder.
    ///
    /// The space symbol must be non-empty and contain no literal space,
    /// since decoding strips all spaces before restoring the symbol.
    pub fn validate(&self) -> CTResult<()> {
        if self.space_symbol.is_empty() {
            return Err(ChartokError::InvalidOptions(
                "space_symbol must not be empty".to_string(),
            ));
        }
        if self.space_symbol.contains(' ') {
            return Err(ChartokError::InvalidOptions(format!(
                "space_symbol must not contain spaces: {:?}",
                self.space_symbol
            )));
        }
        Ok(())
    }

    /// Build a [`CharactersAsr`] encoder, resolving paths locally.
    pub fn build(&self) -> CTResult<CharactersAsr> {
        CharactersAsr::new(self.clone())
    }

    /// Build a [`CharactersAsr`] encoder with a custom path resolver.
    pub fn build_with_resolver(
        &self,
        resolver: &dyn PathResolver,
    ) -> CTResult<CharactersAsr> {
        CharactersAsr::with_resolver(self.clone(), resolver)
    }
}
