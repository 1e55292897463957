//! # Characters ASR Encoder

use regex::Regex;

use crate::encoders::{
    CharactersAsrOptions,
    NonLangSyms,
    TextEncoder,
    is_transcript_whitespace,
    tokenize_chars,
};
use crate::errors::CTResult;
use crate::regex::exact_match_union_regex;
use crate::resources::{LocalPathResolver, PathResolver, read_symbol_list};

/// Character-level encoder for ASR transcripts.
///
/// Encoding splits text into space-separated characters, substitutes the
/// space symbol for spaces, and keeps non-linguistic symbols whole.
/// Decoding removes all spaces, then restores the space symbol as spaces.
#[derive(Debug, Clone)]
pub struct CharactersAsr {
    space_symbol: String,
    ends_with_space: bool,
    non_lang_syms: Option<Vec<String>>,
    non_lang_syms_re: Option<Regex>,
}

impl CharactersAsr {
    /// Build an encoder, resolving symbol-list paths with [`LocalPathResolver`].
    ///
    /// ## Errors
    /// * [`crate::ChartokError::InvalidOptions`] if the space symbol is empty or
    ///   contains a space; see [`CharactersAsrOptions::validate`].
    /// * [`crate::ChartokError::SymbolFileNotFound`] if the symbol file does not exist.
    /// * [`crate::ChartokError::SymbolFileDecoding`] if the symbol file is not UTF-8.
    pub fn new(options: CharactersAsrOptions) -> CTResult<Self> {
        Self::with_resolver(options, &LocalPathResolver::default())
    }

    /// Build an encoder, resolving symbol-list paths with `resolver`.
    ///
    /// ## Errors
    /// As [`CharactersAsr::new`].
    pub fn with_resolver(
        options: CharactersAsrOptions,
        resolver: &dyn PathResolver,
    ) -> CTResult<Self> {
        options.validate()?;

        let CharactersAsrOptions {
            space_symbol,
            ends_with_space,
            non_lang_syms,
        } = options;

        let non_lang_syms = match non_lang_syms {
            None => None,
            Some(NonLangSyms::List(symbols)) => Some(symbols),
            Some(NonLangSyms::Path(path)) => {
                let local = resolver.resolve_local_path(&path)?;
                Some(read_symbol_list(local)?)
            }
        };

        let non_lang_syms_re = match &non_lang_syms {
            Some(symbols) => exact_match_union_regex(symbols)?,
            None => None,
        };

        log::debug!(
            "characters_asr: space_symbol={space_symbol:?} ends_with_space={ends_with_space} non_lang_syms={}",
            non_lang_syms.as_ref().map_or(0, |s| s.len())
        );

        Ok(Self {
            space_symbol,
            ends_with_space,
            non_lang_syms,
            non_lang_syms_re,
        })
    }

    /// The symbol substituted for spaces.
    pub fn space_symbol(&self) -> &str {
        &self.space_symbol
    }

    /// Whether encoded sentences end with the space symbol.
    pub fn ends_with_space(&self) -> bool {
        self.ends_with_space
    }

    /// The non-linguistic symbols, in configured order.
    pub fn non_lang_syms(&self) -> Option<&[String]> {
        self.non_lang_syms.as_deref()
    }
}

impl TextEncoder for CharactersAsr {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    fn encode(
        &self,
        text: &str,
    ) -> String {
        let mut encoded = tokenize_chars(text, &self.space_symbol, self.non_lang_syms_re.as_ref());
        if self.ends_with_space {
            encoded.push(' ');
            encoded.push_str(&self.space_symbol);
        }
        encoded
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    fn decode(
        &self,
        text: &str,
    ) -> String {
        // Strip separators before restoring spaces; the order matters.
        text.replace(' ', "")
            .replace(&self.space_symbol, " ")
            .trim_matches(is_transcript_whitespace)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChartokError;
    use std::fs;
    use tempdir::TempDir;

    fn check_is_send<T: Send>(_: &T) {}
    fn check_is_sync<T: Sync>(_: &T) {}

    #[test]
    fn test_encode_defaults() {
        let encoder = CharactersAsr::new(Default::default()).unwrap();
        check_is_send(&encoder);
        check_is_sync(&encoder);

        assert_eq!(encoder.space_symbol(), "<space>");
        assert!(encoder.ends_with_space());
        assert_eq!(encoder.non_lang_syms(), None);

        assert_eq!(encoder.encode("ab cd"), "a b <space> c d <space>");
        assert_eq!(encoder.decode("a b <space> c d <space>"), "ab cd");
    }

    #[test]
    fn test_encode_without_suffix() {
        let encoder = CharactersAsrOptions::default()
            .with_ends_with_space(false)
            .build()
            .unwrap();

        assert_eq!(encoder.encode("ab cd"), "a b <space> c d");
        assert!(!encoder.encode("ab cd").ends_with("<space>"));
        assert_eq!(encoder.encode(""), "");
    }

    #[test]
    fn test_empty_input() {
        let encoder = CharactersAsr::new(Default::default()).unwrap();
        assert_eq!(encoder.encode(""), " <space>");
        assert_eq!(encoder.decode(" <space>"), "");
        assert_eq!(encoder.decode(""), "");
    }

    #[test]
    fn test_non_lang_syms_list() {
        let encoder = CharactersAsrOptions::default()
            .with_ends_with_space(false)
            .with_non_lang_syms_list(["<NOISE>"])
            .build()
            .unwrap();

        assert_eq!(
            encoder.non_lang_syms(),
            Some(&["<NOISE>".to_string()][..])
        );
        assert_eq!(encoder.encode("a<NOISE>b"), "a <NOISE> b");
        assert_eq!(encoder.decode("a <NOISE> b"), "a<NOISE>b");
    }

    #[test]
    fn test_empty_non_lang_syms_list() {
        let encoder = CharactersAsrOptions::default()
            .with_non_lang_syms_list(Vec::<String>::new())
            .build()
            .unwrap();

        assert_eq!(encoder.non_lang_syms(), Some(&[][..]));
        assert_eq!(encoder.encode("a<b"), "a < b <space>");
    }

    #[test]
    fn test_custom_space_symbol() {
        let encoder = CharactersAsrOptions::default()
            .with_space_symbol("|")
            .build()
            .unwrap();

        assert_eq!(encoder.encode("hi there"), "h i | t h e r e |");
        assert_eq!(encoder.decode("h i | t h e r e |"), "hi there");
    }

    #[test]
    fn test_decode_order() {
        let encoder = CharactersAsr::new(Default::default()).unwrap();

        // Separator spaces never survive; only the symbol yields spaces.
        assert_eq!(encoder.decode("a  b <space> <space> c"), "ab  c");
        assert_eq!(encoder.decode("<space> a <space>"), "a");
        assert_eq!(encoder.decode("< s p a c e >"), "");
    }

    #[test]
    fn test_non_lang_syms_file() {
        let dir = TempDir::new("chartok_characters_asr").unwrap();
        let path = dir.path().join("nlsyms.txt");
        fs::write(&path, "<NOISE>\n[laughter]  \n").unwrap();

        let encoder = CharactersAsrOptions::default()
            .with_non_lang_syms_path(path.to_str().unwrap())
            .build()
            .unwrap();

        assert_eq!(
            encoder.non_lang_syms(),
            Some(&["<NOISE>".to_string(), "[laughter]".to_string()][..])
        );
        assert_eq!(
            encoder.encode("[laughter] ok<NOISE>"),
            "[laughter] <space> o k <NOISE> <space>"
        );
    }

    #[test]
    fn test_non_lang_syms_file_with_resolver() {
        let dir = TempDir::new("chartok_characters_asr").unwrap();
        fs::write(dir.path().join("nlsyms.txt"), "<UNK>\n").unwrap();

        let resolver = LocalPathResolver::with_base_dir(dir.path());
        let encoder = CharactersAsrOptions::default()
            .with_non_lang_syms_path("nlsyms.txt")
            .build_with_resolver(&resolver)
            .unwrap();

        assert_eq!(encoder.encode("<UNK>"), "<UNK> <space>");
    }

    #[test]
    fn test_missing_symbol_file() {
        let dir = TempDir::new("chartok_characters_asr").unwrap();
        let path = dir.path().join("missing.txt");

        let result = CharactersAsrOptions::default()
            .with_non_lang_syms_path(path.to_str().unwrap())
            .build();
        assert!(matches!(
            result,
            Err(ChartokError::SymbolFileNotFound { .. })
        ));
    }

    #[test]
    fn test_bad_encoding_symbol_file() {
        let dir = TempDir::new("chartok_characters_asr").unwrap();
        let path = dir.path().join("nlsyms.txt");
        fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();

        let result = CharactersAsrOptions::default()
            .with_non_lang_syms_path(path.to_str().unwrap())
            .build();
        assert!(matches!(
            result,
            Err(ChartokError::SymbolFileDecoding { .. })
        ));
    }

    #[test]
    fn test_invalid_space_symbol() {
        for space_symbol in ["", "<sp ace>"] {
            let result = CharactersAsrOptions::default()
                .with_space_symbol(space_symbol)
                .build();
            assert!(matches!(result, Err(ChartokError::InvalidOptions(_))));

            let result = CharactersAsr::with_resolver(
                CharactersAsrOptions::default().with_space_symbol(space_symbol),
                &LocalPathResolver::default(),
            );
            assert!(matches!(result, Err(ChartokError::InvalidOptions(_))));
        }
    }

    #[test]
    fn test_information_separators() {
        let encoder = CharactersAsrOptions::default()
            .with_ends_with_space(false)
            .build()
            .unwrap();

        assert_eq!(encoder.encode("a\x1cb"), "a <space> b");
        assert_eq!(encoder.encode("\x1fab\x1e"), "a b");
        assert_eq!(encoder.decode("a b\x1d"), "ab");
    }
}
