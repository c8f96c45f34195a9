//! Integration tests for single-word inflection
//!
//! Tests verb forms, lemma recovery, noun number, degree, articles and pronouns.

use morph_core::{Aspect, MorphologyEngine, Number, Person, Tense, Voice};

fn engine() -> MorphologyEngine {
    MorphologyEngine::in_memory("en")
}

// =============================================================================
// Verbs
// =============================================================================

#[test]
fn lemma_round_trips_irregular_past() {
    let engine = engine();
    assert_eq!(engine.base_verb(&engine.to_past("go")).as_deref(), Some("go"));
    assert_eq!(engine.base_verb(&engine.to_past("see")).as_deref(), Some("see"));
}

#[test]
fn lemma_of_regular_form_is_unknown() {
    let engine = engine();
    assert_eq!(engine.base_verb("jumped"), None);
}

#[test]
fn verb_forms_keep_case() {
    let engine = engine();
    assert_eq!(engine.to_ing("Run"), "Running");
    assert_eq!(engine.to_past("CRY"), "CRIED");
    assert_eq!(engine.to_third_person("Wash"), "Washes");
    assert_eq!(engine.to_past_participle("write"), "written");
}

#[test]
fn conjugation_agrees_with_subject() {
    let engine = engine();
    assert_eq!(
        engine.conjugate("go", Person::Third, Number::Singular, Tense::Present, Aspect::Simple, Voice::Active),
        "goes"
    );
    assert_eq!(
        engine.conjugate("write", Person::First, Number::Plural, Tense::Past, Aspect::Progressive, Voice::Active),
        "were writing"
    );
    assert_eq!(
        engine.conjugate("eat", Person::Third, Number::Singular, Tense::Future, Aspect::Simple, Voice::Passive),
        "will be eaten"
    );
}

// =============================================================================
// Nouns
// =============================================================================

#[test]
fn classical_and_irregular_nouns() {
    let engine = engine();
    assert_eq!(engine.pluralize("cactus", false), "cacti");
    assert_eq!(engine.singularize("cacti", false), "cactus");
    assert_eq!(engine.pluralize("child", false), "children");
    assert_eq!(engine.pluralize("Phenomenon", false), "Phenomena");
    assert_eq!(engine.singularize("MICE", false), "MOUSE");
}

#[test]
fn default_singular_of_pants() {
    assert_eq!(engine().singularize("pants", false), "pant");
}

// =============================================================================
// Adjectives, articles, pronouns
// =============================================================================

#[test]
fn degree_and_adverbs() {
    let engine = engine();
    assert_eq!(engine.comparative("Hot"), "Hotter");
    assert_eq!(engine.superlative("easy"), "easiest");
    assert_eq!(engine.superlative("important"), "most important");
    assert_eq!(engine.to_adverb("tragic"), "tragically");
    assert_eq!(engine.to_adjective("slowly"), "slow");
}

#[test]
fn articles_follow_sound() {
    let engine = engine();
    assert_eq!(engine.article("honest"), "an");
    assert_eq!(engine.article("European"), "a");
    assert_eq!(engine.article("MRI"), "an");
    assert_eq!(engine.article("egg"), "an");
    assert_eq!(engine.article("dog"), "a");
}

#[test]
fn pronoun_forms() {
    let engine = engine();
    let forms = engine.pronoun_variants("She").unwrap();
    assert_eq!(forms.subject, "She");
    assert_eq!(forms.object, "her");
    assert_eq!(forms.reflexive, "herself");
    assert!(engine.pronoun_variants("tree").is_none());
}
