// src/core/case.rs

/// True when the word has at least one cased letter and no lowercase ones.
pub fn is_all_uppercase(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

pub fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Uppercases the first character only, leaving the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reproduces the capitalization pattern of `original` onto `replacement`.
///
/// All-uppercase originals uppercase the whole replacement; a capitalized original
/// capitalizes only the replacement's first character; anything else is returned as is.
pub fn match_case(original: &str, replacement: &str) -> String {
    if is_all_uppercase(original) {
        replacement.to_uppercase()
    } else if starts_uppercase(original) {
        capitalize(replacement)
    } else {
        replacement.to_string()
    }
}
