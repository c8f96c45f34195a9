use crate::core::tokenizer::{self, split_punctuation};
use crate::core::types::{Aspect, Inflection, Number, Person, PronounVariants, Tense, Voice};
use crate::error::Result;
use crate::overrides::{primary_subtag, Overrides, OverridesStore};
use crate::persistence::MemoryBackend;
use crate::rules::{LanguageRules, Morphology};
use log::debug;
use std::sync::Arc;

// The engine owns the active language and resolved rules; overrides are shared through the store.
pub struct MorphologyEngine {
    language: String,
    rules: LanguageRules,
    store: Arc<OverridesStore>,
    conservative_plurals: bool,
}

impl MorphologyEngine {
    pub fn new(store: Arc<OverridesStore>, language: &str) -> Self {
        let language = primary_subtag(language);
        let rules = LanguageRules::for_language(&language);
        Self {
            language,
            rules,
            store,
            conservative_plurals: false,
        }
    }

    /// An engine whose overrides live only for this process.
    pub fn in_memory(language: &str) -> Self {
        Self::new(Arc::new(OverridesStore::new(MemoryBackend::new())), language)
    }

    pub fn set_language(&mut self, language: &str) {
        let language = primary_subtag(language);
        if language != self.language {
            debug!("switching morphology language {} -> {}", self.language, language);
            self.rules = LanguageRules::for_language(&language);
            self.language = language;
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn rules(&self) -> &LanguageRules {
        &self.rules
    }

    pub fn store(&self) -> &Arc<OverridesStore> {
        &self.store
    }

    /// Default for the `conservative` flag when plurals are applied by name.
    pub fn set_conservative_plurals(&mut self, conservative: bool) {
        self.conservative_plurals = conservative;
    }

    pub fn overrides(&self) -> Arc<Overrides> {
        self.store.get(&self.language)
    }

    /// Edits the current language's overrides and persists them.
    pub fn update_overrides<F>(&self, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut Overrides),
    {
        self.store.update(&self.language, mutate)
    }

    fn morphology(&self) -> &dyn Morphology {
        self.rules.morphology()
    }

    // --- Verbs

    pub fn to_ing(&self, verb: &str) -> String {
        self.morphology().present_participle(&self.overrides(), verb)
    }

    pub fn to_past(&self, verb: &str) -> String {
        self.morphology().past(&self.overrides(), verb)
    }

    pub fn to_past_participle(&self, verb: &str) -> String {
        self.morphology().past_participle(&self.overrides(), verb)
    }

    pub fn to_third_person(&self, verb: &str) -> String {
        self.morphology().third_person(&self.overrides(), verb)
    }

    /// The lemma of `verb`, if overrides or the irregular tables know it.
    pub fn base_verb(&self, verb: &str) -> Option<String> {
        self.morphology().base(&self.overrides(), verb)
    }

    pub fn conjugate(
        &self,
        verb: &str,
        person: Person,
        number: Number,
        tense: Tense,
        aspect: Aspect,
        voice: Voice,
    ) -> String {
        self.morphology()
            .conjugate(&self.overrides(), verb, person, number, tense, aspect, voice)
    }

    // --- Nouns

    pub fn pluralize(&self, noun: &str, conservative: bool) -> String {
        self.morphology().pluralize(&self.overrides(), noun, conservative)
    }

    pub fn singularize(&self, noun: &str, conservative: bool) -> String {
        self.morphology().singularize(&self.overrides(), noun, conservative)
    }

    // --- Adjectives and adverbs

    pub fn comparative(&self, adjective: &str) -> String {
        self.morphology().comparative(&self.overrides(), adjective)
    }

    pub fn superlative(&self, adjective: &str) -> String {
        self.morphology().superlative(&self.overrides(), adjective)
    }

    pub fn to_adverb(&self, adjective: &str) -> String {
        self.morphology().adverb(&self.overrides(), adjective)
    }

    pub fn to_adjective(&self, adverb: &str) -> String {
        self.morphology().adjective(&self.overrides(), adverb)
    }

    // --- Articles and pronouns

    pub fn article(&self, word: &str) -> String {
        self.morphology().article(&self.overrides(), word)
    }

    /// "an hour", "a unicorn".
    pub fn with_article(&self, word: &str) -> String {
        format!("{} {}", self.article(word), word)
    }

    pub fn pronoun_variants(&self, pronoun: &str) -> Option<PronounVariants> {
        self.morphology().pronoun_variants(pronoun)
    }

    pub fn is_auxiliary(&self, word: &str) -> bool {
        self.morphology().is_auxiliary(word)
    }

    // --- Clauses

    pub fn agreement(&self, text: &str) -> (Person, Number) {
        self.morphology().agreement(&tokenizer::words(text))
    }

    pub fn negate(&self, text: &str, contract: bool) -> String {
        self.transform_clause(text, |rules, overrides, words| {
            rules.negate(overrides, words, contract)
        })
    }

    pub fn yes_no_question(&self, text: &str) -> String {
        self.transform_clause(text, |rules, overrides, words| {
            rules.yes_no_question(overrides, words)
        })
    }

    pub fn wh_question(&self, text: &str, wh_word: &str) -> String {
        self.transform_clause(text, |rules, overrides, words| {
            rules.wh_question(overrides, words, wh_word)
        })
    }

    /// Runs a clause transform over the words of `text`, keeping the closing punctuation.
    fn transform_clause<F>(&self, text: &str, transform: F) -> String
    where
        F: FnOnce(&dyn Morphology, &Overrides, &[String]) -> Vec<String>,
    {
        let words = tokenizer::words(text);
        let closing = tokenizer::tokenize(text)
            .last()
            .map(|token| split_punctuation(token.text).1.to_string())
            .unwrap_or_default();
        let transformed = transform(self.morphology(), &self.overrides(), &words);
        format!("{}{}", transformed.join(" "), closing)
    }

    // --- Text editing

    pub fn words(&self, text: &str) -> Vec<String> {
        tokenizer::words(text)
    }

    /// The last word of `text` without its trailing punctuation.
    pub fn last_word(&self, text: &str) -> Option<String> {
        tokenizer::last_word(text).map(|parts| parts.core.to_string())
    }

    /// Rewrites the last word of `text` in place, keeping its trailing punctuation and
    /// everything around it. Text without any word is returned unchanged.
    pub fn replace_last_word<F>(&self, text: &str, transform: F) -> String
    where
        F: FnOnce(&str) -> String,
    {
        let Some(parts) = tokenizer::last_word(text) else {
            return text.to_string();
        };
        let replacement = transform(parts.core);
        let mut result = String::with_capacity(text.len() + replacement.len());
        result.push_str(&text[..parts.token.start]);
        result.push_str(parts.leading);
        result.push_str(&replacement);
        result.push_str(parts.trailing);
        result.push_str(&text[parts.token.end..]);
        result
    }

    /// Inserts "not" after the first auxiliary, or appends it when there is none.
    pub fn insert_not(&self, text: &str) -> String {
        let mut words = tokenizer::words(text);
        if words.is_empty() {
            return "not".to_string();
        }
        match words.iter().position(|word| self.is_auxiliary(word)) {
            Some(index) => words.insert(index + 1, "not".to_string()),
            None => words.push("not".to_string()),
        }
        words.join(" ")
    }

    /// Appends `word`, separated by a single space unless `text` is empty or already ends
    /// in whitespace.
    pub fn append_word(&self, text: &str, word: &str) -> String {
        if text.is_empty() || text.ends_with(char::is_whitespace) {
            format!("{text}{word}")
        } else {
            format!("{text} {word}")
        }
    }

    /// Applies a single-word operation by name. Unknown lemmas come back unchanged.
    pub fn apply(&self, op: Inflection, word: &str) -> String {
        match op {
            Inflection::Plural => self.pluralize(word, self.conservative_plurals),
            Inflection::Singular => self.singularize(word, self.conservative_plurals),
            Inflection::Past => self.to_past(word),
            Inflection::PastParticiple => self.to_past_participle(word),
            Inflection::PresentParticiple => self.to_ing(word),
            Inflection::ThirdPerson => self.to_third_person(word),
            Inflection::Base => self.base_verb(word).unwrap_or_else(|| word.to_string()),
            Inflection::Comparative => self.comparative(word),
            Inflection::Superlative => self.superlative(word),
            Inflection::Adverb => self.to_adverb(word),
            Inflection::Adjective => self.to_adjective(word),
        }
    }

    pub fn apply_to_last_word(&self, text: &str, op: Inflection) -> String {
        self.replace_last_word(text, |word| self.apply(op, word))
    }
}
