//! # Symbol List Files
//!
//! One non-linguistic symbol per line, UTF-8 encoded.

use std::io::ErrorKind;
use std::path::Path;

use crate::encoders::is_transcript_whitespace;
use crate::errors::{CTResult, ChartokError};

/// Split symbol-list text into entries.
///
/// Lines end at `\r\n`, `\n` or a lone `\r`; a final terminator does not
/// start an empty entry. Each line has its trailing whitespace stripped;
/// order is preserved.
pub fn parse_symbol_list(text: &str) -> Vec<String> {
    let mut symbols = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let (line, tail) = match rest.find(['\n', '\r']) {
            Some(idx) => {
                let width = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                (&rest[..idx], &rest[idx + width..])
            }
            None => (rest, ""),
        };
        symbols.push(line.trim_end_matches(is_transcript_whitespace).to_string());
        rest = tail;
    }
    symbols
}

/// Read a symbol-list file.
///
/// ## Errors
/// * [`ChartokError::SymbolFileNotFound`] if the file does not exist.
/// * [`ChartokError::SymbolFileDecoding`] if the file is not valid UTF-8.
pub fn read_symbol_list<P: AsRef<Path>>(path: P) -> CTResult<Vec<String>> {
    let path = path.as_ref();

    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ChartokError::SymbolFileNotFound {
            path: path.to_path_buf(),
        },
        _ => ChartokError::Io(e),
    })?;

    let text = String::from_utf8(bytes).map_err(|source| ChartokError::SymbolFileDecoding {
        path: path.to_path_buf(),
        source,
    })?;

    let symbols = parse_symbol_list(&text);
    log::debug!(
        "loaded {} non-linguistic symbols from {}",
        symbols.len(),
        path.display()
    );
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempdir::TempDir;

    #[test]
    fn test_parse_symbol_list() {
        assert_eq!(
            parse_symbol_list("<NOISE>\n<SPOKEN_NOISE>  \r\n[laughter]\t\n"),
            vec!["<NOISE>", "<SPOKEN_NOISE>", "[laughter]"]
        );
        assert_eq!(parse_symbol_list("<NOISE>"), vec!["<NOISE>"]);
        assert!(parse_symbol_list("").is_empty());
    }

    #[test]
    fn test_parse_universal_newlines() {
        assert_eq!(parse_symbol_list("<A>\r<B>\n"), vec!["<A>", "<B>"]);
        assert_eq!(parse_symbol_list("<A>\r\n<B>\r"), vec!["<A>", "<B>"]);
        assert_eq!(parse_symbol_list("<A>\r\r<B>"), vec!["<A>", "", "<B>"]);
        assert_eq!(parse_symbol_list("<A>\x1f\n"), vec!["<A>"]);
    }

    #[test]
    fn test_read_symbol_list() {
        let dir = TempDir::new("chartok_symbols").unwrap();
        let path = dir.path().join("non_lang_syms.txt");
        fs::write(&path, "<NOISE>\n<UNK>\n").unwrap();

        assert_eq!(read_symbol_list(&path).unwrap(), vec!["<NOISE>", "<UNK>"]);

        let path = dir.path().join("classic_mac.txt");
        fs::write(&path, "<NOISE>\r<UNK>\r").unwrap();
        assert_eq!(read_symbol_list(&path).unwrap(), vec!["<NOISE>", "<UNK>"]);
    }

    #[test]
    fn test_read_missing() {
        let dir = TempDir::new("chartok_symbols").unwrap();
        let path = dir.path().join("missing.txt");

        assert!(matches!(
            read_symbol_list(&path),
            Err(ChartokError::SymbolFileNotFound { .. })
        ));
    }

    #[test]
    fn test_read_bad_encoding() {
        let dir = TempDir::new("chartok_symbols").unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, b"caf\xe9\n").unwrap();

        match read_symbol_list(&path) {
            Err(ChartokError::SymbolFileDecoding { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
