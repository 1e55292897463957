//! # Character Tokenization

use regex::Regex;

/// Whitespace for transcript normalization.
///
/// Unicode `White_Space`, plus the information separators U+001C..=U+001F.
pub fn is_transcript_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Trim `text` and collapse each run of whitespace into a single space.
///
/// See [`is_transcript_whitespace`].
pub fn normalize_whitespace(text: &str) -> String {
    text.split(is_transcript_whitespace)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_char_tokens<'a>(
    span: &'a str,
    tokens: &mut Vec<&'a str>,
) {
    tokens.extend(
        span.char_indices()
            .map(|(idx, c)| &span[idx..idx + c.len_utf8()]),
    );
}

/// Split text into space-separated character tokens.
///
/// Whitespace is normalized first (see [`normalize_whitespace`]); every
/// remaining space becomes `space`. Matches of `non_lang_syms` are kept as
/// single tokens.
///
/// ## Arguments
/// * `text` - The text to tokenize.
/// * `space` - The symbol substituted for spaces.
/// * `non_lang_syms` - Optional matcher for atomic symbols;
///   see [`crate::regex::exact_match_union_regex`].
///
/// ## Returns
/// The tokens joined by single spaces.
pub fn tokenize_chars(
    text: &str,
    space: &str,
    non_lang_syms: Option<&Regex>,
) -> String {
    let sent = normalize_whitespace(text);

    let mut tokens: Vec<&str> = Vec::with_capacity(sent.len());
    let mut last = 0;
    if let Some(re) = non_lang_syms {
        for m in re.find_iter(&sent) {
            push_char_tokens(&sent[last..m.start()], &mut tokens);
            tokens.push(m.as_str());
            last = m.end();
        }
    }
    push_char_tokens(&sent[last..], &mut tokens);

    tokens
        .into_iter()
        .map(|t| if t == " " { space } else { t })
        .collect::<Vec<_>>()
        .join(" ")
}
