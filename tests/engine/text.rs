//! Integration tests for text editing
//!
//! Tests punctuation splitting and in-place replacement of the last word.

use morph_core::{split_punctuation, Inflection, MorphologyEngine};

// =============================================================================
// Punctuation
// =============================================================================

#[test]
fn trailing_punctuation_runs() {
    assert_eq!(split_punctuation("hello,\u{201D}"), ("hello", ",\u{201D}"));
    assert_eq!(split_punctuation("world?!"), ("world", "?!"));
    assert_eq!(split_punctuation("email@example.com."), ("email@example.com", "."));
}

// =============================================================================
// Last-word editing
// =============================================================================

#[test]
fn replace_last_word_splices_in_place() {
    let engine = MorphologyEngine::in_memory("en");
    assert_eq!(
        engine.replace_last_word("I like pizza!", |_| "pizzas".to_string()),
        "I like pizzas!"
    );
    assert_eq!(
        engine.apply_to_last_word("Look at the box?! ", Inflection::Plural),
        "Look at the boxes?! "
    );
    assert_eq!(engine.apply_to_last_word("They RUN.", Inflection::PresentParticiple), "They RUNNING.");
}

#[test]
fn text_without_words_is_untouched() {
    let engine = MorphologyEngine::in_memory("en");
    assert_eq!(engine.replace_last_word("?! ...", |_| "x".to_string()), "?! ...");
    assert_eq!(engine.last_word("?! ..."), None);
}

#[test]
fn insert_not_and_append() {
    let engine = MorphologyEngine::in_memory("en");
    assert_eq!(engine.insert_not("I will go!"), "I will not go");
    assert_eq!(engine.insert_not(""), "not");
    assert_eq!(engine.append_word("I like", "tea"), "I like tea");
}
