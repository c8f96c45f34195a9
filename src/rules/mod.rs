// src/rules/mod.rs
pub mod english;
pub mod tables;

use crate::core::types::{Aspect, Number, Person, PronounVariants, Tense, Voice};
use crate::overrides::Overrides;
use english::English;
use log::debug;

/// The linguistic capabilities every language variant provides.
///
/// Single-word operations consult `overrides` first, then the language's irregular
/// tables, then its regular rules, and return the result in the input's case.
pub trait Morphology: Send + Sync {
    fn present_participle(&self, overrides: &Overrides, verb: &str) -> String;
    fn past(&self, overrides: &Overrides, verb: &str) -> String;
    fn past_participle(&self, overrides: &Overrides, verb: &str) -> String;
    fn third_person(&self, overrides: &Overrides, verb: &str) -> String;
    /// The lemma of an inflected verb, when it can be recovered from overrides or tables.
    fn base(&self, overrides: &Overrides, verb: &str) -> Option<String>;
    #[allow(clippy::too_many_arguments)]
    fn conjugate(
        &self,
        overrides: &Overrides,
        verb: &str,
        person: Person,
        number: Number,
        tense: Tense,
        aspect: Aspect,
        voice: Voice,
    ) -> String;

    fn pluralize(&self, overrides: &Overrides, noun: &str, conservative: bool) -> String;
    fn singularize(&self, overrides: &Overrides, noun: &str, conservative: bool) -> String;

    fn comparative(&self, overrides: &Overrides, adjective: &str) -> String;
    fn superlative(&self, overrides: &Overrides, adjective: &str) -> String;
    fn adverb(&self, overrides: &Overrides, adjective: &str) -> String;
    fn adjective(&self, overrides: &Overrides, adverb: &str) -> String;

    /// "a" or "an" for the given word.
    fn article(&self, overrides: &Overrides, word: &str) -> String;
    fn pronoun_variants(&self, pronoun: &str) -> Option<PronounVariants>;

    fn is_auxiliary(&self, word: &str) -> bool;
    /// Person and number of the subject that starts `words`.
    fn agreement(&self, words: &[String]) -> (Person, Number);
    fn negate(&self, overrides: &Overrides, words: &[String], contract: bool) -> Vec<String>;
    fn yes_no_question(&self, overrides: &Overrides, words: &[String]) -> Vec<String>;
    fn wh_question(&self, overrides: &Overrides, words: &[String], wh_word: &str) -> Vec<String>;
}

/// Languages acknowledged by the engine that have no rules of their own yet.
const DELEGATING_LANGUAGES: &[&str] = &["es", "fr", "de", "it", "pt", "nl", "sv", "da", "nb", "fi"];

/// The rules variant selected for a language.
pub enum LanguageRules {
    English(English),
    /// Placeholder for a language without its own rules; behaves like English.
    Delegating { language: String, fallback: English },
}

impl LanguageRules {
    /// Resolves rules for a primary language subtag.
    pub fn for_language(language: &str) -> Self {
        if language == "en" {
            return LanguageRules::English(English::new());
        }
        if DELEGATING_LANGUAGES.contains(&language) {
            debug!("no morphology rules for '{language}' yet, delegating to English");
        } else {
            debug!("unknown language '{language}', delegating to English");
        }
        LanguageRules::Delegating {
            language: language.to_string(),
            fallback: English::new(),
        }
    }

    pub fn language(&self) -> &str {
        match self {
            LanguageRules::English(_) => "en",
            LanguageRules::Delegating { language, .. } => language,
        }
    }

    pub fn is_delegating(&self) -> bool {
        matches!(self, LanguageRules::Delegating { .. })
    }

    pub fn morphology(&self) -> &dyn Morphology {
        match self {
            LanguageRules::English(english) => english,
            LanguageRules::Delegating { fallback, .. } => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_native_and_others_delegate() {
        let english = LanguageRules::for_language("en");
        assert!(!english.is_delegating());
        assert_eq!(english.language(), "en");

        let french = LanguageRules::for_language("fr");
        assert!(french.is_delegating());
        assert_eq!(french.language(), "fr");
        let overrides = Overrides::new();
        assert_eq!(french.morphology().pluralize(&overrides, "cat", false), "cats");
    }
}
