//! Integration tests for clause transforms
//!
//! Tests negation and question formation with auxiliaries and do-support.

use morph_core::MorphologyEngine;

fn engine() -> MorphologyEngine {
    MorphologyEngine::in_memory("en")
}

// =============================================================================
// Negation
// =============================================================================

#[test]
fn negation_uses_do_support_without_auxiliary() {
    assert_eq!(engine().negate("I go", false), "I do not go");
    assert_eq!(engine().negate("He eats apples", false), "He does not eat apples");
}

#[test]
fn negation_after_auxiliary() {
    assert_eq!(engine().negate("She is running", false), "She is not running");
    assert_eq!(engine().negate("We can swim", true), "We can't swim");
}

// =============================================================================
// Questions
// =============================================================================

#[test]
fn yes_no_questions() {
    assert_eq!(engine().yes_no_question("You like pizza"), "Do you like pizza");
    assert_eq!(engine().yes_no_question("They are here"), "Are they here");
    assert_eq!(engine().yes_no_question("It works"), "Does it work");
}

#[test]
fn wh_questions() {
    assert_eq!(engine().wh_question("They have gone", "where"), "Where have they gone");
    assert_eq!(engine().wh_question("You want", "what"), "What do you want");
}

#[test]
fn empty_clause_stays_empty() {
    assert_eq!(engine().negate("", false), "");
    assert_eq!(engine().yes_no_question("   "), "");
}

// =============================================================================
// Contractions and longer subjects
// =============================================================================

#[test]
fn contracted_auxiliaries_take_not_and_invert() {
    assert_eq!(engine().negate("I'm tired.", false), "I'm not tired.");
    assert_eq!(engine().negate("She\u{2019}s happy", false), "She\u{2019}s not happy");
    assert_eq!(engine().yes_no_question("I'm tired"), "Am I tired");
    assert_eq!(engine().yes_no_question("She's happy"), "Is she happy");
}

#[test]
fn negated_clauses_are_left_alone_or_inverted_as_written() {
    assert_eq!(engine().negate("You don't like it", false), "You don't like it");
    assert_eq!(engine().yes_no_question("You don't like it"), "Don't you like it");
}

#[test]
fn adjectives_inside_the_subject() {
    assert_eq!(engine().negate("The big dog barks", false), "The big dog does not bark");
    assert_eq!(engine().yes_no_question("My little sister sings"), "Does my little sister sing");
}
