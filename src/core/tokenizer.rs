// src/core/tokenizer.rs
use crate::core::types::Token;
use unicode_segmentation::UnicodeSegmentation;

/// Straight and typographic apostrophes are part of a word (don't, dogs’).
fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '\u{02BC}')
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || is_apostrophe(c)
}

/// Splits text into whitespace-delimited tokens with their byte spans.
///
/// Word-bound segments from UAX #29 are merged until the next whitespace segment, so a token
/// keeps attached punctuation (`pizza!`, `“hello,”`) and never cuts through a grapheme cluster.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut current: Option<(usize, usize)> = None;

    for (offset, segment) in text.split_word_bound_indices() {
        if segment.chars().all(char::is_whitespace) {
            if let Some((start, end)) = current.take() {
                tokens.push(Token { text: &text[start..end], start, end });
            }
            continue;
        }
        let end = offset + segment.len();
        current = match current {
            Some((start, _)) => Some((start, end)),
            None => Some((offset, end)),
        };
    }
    if let Some((start, end)) = current {
        tokens.push(Token { text: &text[start..end], start, end });
    }
    tokens
}

/// Separates a token into its word core and its trailing punctuation run.
///
/// Scans backwards while characters are neither alphanumeric nor apostrophes, so
/// `"world?!"` gives `("world", "?!")` and `"email@example.com."` keeps the inner dots.
pub fn split_punctuation(token: &str) -> (&str, &str) {
    let boundary = token
        .char_indices()
        .rev()
        .find(|&(_, c)| is_word_char(c))
        .map(|(idx, c)| idx + c.len_utf8())
        .unwrap_or(0);
    token.split_at(boundary)
}

/// Strips leading and trailing punctuation, keeping inner characters.
pub fn word_core(token: &str) -> &str {
    let (core, _) = split_punctuation(token);
    core.trim_start_matches(|c: char| !is_word_char(c))
}

/// The punctuation-stripped words of `text`, in order, skipping punctuation-only tokens.
pub fn words(text: &str) -> Vec<String> {
    tokenize(text)
        .iter()
        .map(|token| word_core(token.text))
        .filter(|core| !core.is_empty())
        .map(str::to_string)
        .collect()
}

/// A token split into leading punctuation, word core and trailing punctuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordParts<'a> {
    pub token: Token<'a>,
    pub leading: &'a str,
    pub core: &'a str,
    pub trailing: &'a str,
}

pub fn split_token(token: Token<'_>) -> WordParts<'_> {
    let (body, trailing) = split_punctuation(token.text);
    let core = body.trim_start_matches(|c: char| !is_word_char(c));
    let leading = &body[..body.len() - core.len()];
    WordParts { token, leading, core, trailing }
}

/// The last token of `text` that contains a word.
pub fn last_word(text: &str) -> Option<WordParts<'_>> {
    tokenize(text)
        .into_iter()
        .rev()
        .map(split_token)
        .find(|parts| !parts.core.is_empty())
}
