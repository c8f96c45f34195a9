//! Integration tests for per-language overrides
//!
//! Tests precedence over built-in rules, language scoping, and persistence across engines.

use morph_core::persistence::{FileBackend, MemoryBackend};
use morph_core::{Inflection, MorphologyEngine, OverridesStore};
use std::sync::Arc;

fn shared_store() -> Arc<OverridesStore> {
    Arc::new(OverridesStore::new(MemoryBackend::new()))
}

// =============================================================================
// Precedence
// =============================================================================

#[test]
fn plural_override_is_case_matched() {
    let store = shared_store();
    let english = MorphologyEngine::new(Arc::clone(&store), "en");
    english
        .update_overrides(|o| o.set(Inflection::Plural, "child", "children"))
        .unwrap();

    assert_eq!(english.pluralize("child", false), "children");
    assert_eq!(english.pluralize("Child", false), "Children");
    assert_eq!(english.pluralize("CHILD", false), "CHILDREN");
}

#[test]
fn override_beats_irregular_table() {
    let engine = MorphologyEngine::in_memory("en");
    engine
        .update_overrides(|o| o.set(Inflection::Past, "go", "goed"))
        .unwrap();
    assert_eq!(engine.to_past("Go"), "Goed");
    assert_eq!(engine.to_past_participle("go"), "gone");
}

#[test]
fn override_does_not_leak_to_other_languages() {
    let store = shared_store();
    let english = MorphologyEngine::new(Arc::clone(&store), "en");
    let german = MorphologyEngine::new(Arc::clone(&store), "de");
    english
        .update_overrides(|o| o.set(Inflection::Plural, "cat", "kitties"))
        .unwrap();

    assert_eq!(english.pluralize("cat", false), "kitties");
    assert_eq!(german.pluralize("cat", false), "cats");
}

// =============================================================================
// Do-not-change
// =============================================================================

#[test]
fn do_not_change_applies_to_both_directions() {
    let store = shared_store();
    let english = MorphologyEngine::new(Arc::clone(&store), "en");
    let french = MorphologyEngine::new(Arc::clone(&store), "fr");
    english.update_overrides(|o| o.keep_unchanged("pants")).unwrap();

    assert_eq!(english.pluralize("Pants", false), "Pants");
    assert_eq!(english.singularize("PANTS", false), "PANTS");
    assert_eq!(french.singularize("pants", false), "pant");
}

#[test]
fn no_implicit_reverse_mapping() {
    let engine = MorphologyEngine::in_memory("en");
    engine
        .update_overrides(|o| o.set(Inflection::Plural, "gizmo", "gizmosx"))
        .unwrap();
    assert_eq!(engine.pluralize("gizmo", false), "gizmosx");
    assert_ne!(engine.singularize("gizmosx", false), "gizmo");

    engine
        .update_overrides(|o| o.set(Inflection::Singular, "gizmosx", "gizmo"))
        .unwrap();
    assert_eq!(engine.singularize("gizmosx", false), "gizmo");
}

// =============================================================================
// Scoping and persistence
// =============================================================================

#[test]
fn regional_tags_share_one_bundle() {
    let store = shared_store();
    let us = MorphologyEngine::new(Arc::clone(&store), "en-US");
    let gb = MorphologyEngine::new(Arc::clone(&store), "en-GB");
    us.update_overrides(|o| o.set(Inflection::Adverb, "fast", "speedily"))
        .unwrap();
    assert_eq!(gb.to_adverb("fast"), "speedily");
}

#[test]
fn overrides_survive_a_new_store() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = Arc::new(OverridesStore::new(FileBackend::new(dir.path())));
        let engine = MorphologyEngine::new(store, "en");
        engine
            .update_overrides(|o| o.set(Inflection::Comparative, "fun", "more fun"))
            .unwrap();
    }

    let store = Arc::new(OverridesStore::new(FileBackend::new(dir.path())));
    let engine = MorphologyEngine::new(store, "en-AU");
    assert_eq!(engine.comparative("fun"), "more fun");
}

#[test]
fn corrupt_record_reads_as_no_overrides() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("overrides-en.bin"), b"not bincode").unwrap();

    let store = Arc::new(OverridesStore::new(FileBackend::new(dir.path())));
    let engine = MorphologyEngine::new(store, "en");
    assert_eq!(engine.pluralize("child", false), "children");
    assert!(engine.overrides().is_empty());
}
