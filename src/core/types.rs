// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Grammatical person of a clause subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Person {
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Number {
    Singular,
    Plural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tense {
    Past,
    Present,
    Future,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aspect {
    Simple,
    Progressive,
    Perfect,
    PerfectProgressive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Voice {
    Active,
    Passive,
}

/// The five forms of a personal pronoun, e.g. ("he", "him", "his", "his", "himself").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PronounVariants {
    pub subject: String,
    pub object: String,
    pub possessive_determiner: String,
    pub possessive_pronoun: String,
    pub reflexive: String,
}

impl PronounVariants {
    pub fn to_vec(&self) -> Vec<String> {
        vec![
            self.subject.clone(),
            self.object.clone(),
            self.possessive_determiner.clone(),
            self.possessive_pronoun.clone(),
            self.reflexive.clone(),
        ]
    }
}

/// Single-word transformations that can be applied by name, e.g. to the last word of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Inflection {
    Plural,
    Singular,
    Past,
    PastParticiple,
    PresentParticiple,
    ThirdPerson,
    Base,
    Comparative,
    Superlative,
    Adverb,
    Adjective,
}

impl Inflection {
    pub const ALL: [Inflection; 11] = [
        Inflection::Plural,
        Inflection::Singular,
        Inflection::Past,
        Inflection::PastParticiple,
        Inflection::PresentParticiple,
        Inflection::ThirdPerson,
        Inflection::Base,
        Inflection::Comparative,
        Inflection::Superlative,
        Inflection::Adverb,
        Inflection::Adjective,
    ];

    /// Stable numeric code used across the C boundary.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Inflection::Plural => "plural",
            Inflection::Singular => "singular",
            Inflection::Past => "past",
            Inflection::PastParticiple => "participle",
            Inflection::PresentParticiple => "ing",
            Inflection::ThirdPerson => "third",
            Inflection::Base => "base",
            Inflection::Comparative => "comparative",
            Inflection::Superlative => "superlative",
            Inflection::Adverb => "adverb",
            Inflection::Adjective => "adjective",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.name() == name)
    }
}

/// A token produced by the tokenizer: its text and byte span in the source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}
