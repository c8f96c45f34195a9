// C boundary: one process-wide engine behind a lock, for hosts that cannot hold a Rust value.
// Every entry point catches panics and degrades to an empty or unchanged result.
use crate::config::Config;
use crate::core::types::Inflection;
use crate::MorphologyEngine;
use libc::c_char;
use log::{error, info, warn};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

static ENGINE: Lazy<Mutex<Option<MorphologyEngine>>> = Lazy::new(|| Mutex::new(None));

unsafe fn read_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

/// Runs `f` against the engine, returning `None` if it is not initialized or panics.
fn with_engine<T>(name: &str, f: impl FnOnce(&mut MorphologyEngine) -> T) -> Option<T> {
    let result = catch_unwind(AssertUnwindSafe(|| ENGINE.lock().as_mut().map(f)));
    match result {
        Ok(value) => value,
        Err(_) => {
            error!("panic in {name}");
            None
        }
    }
}

#[no_mangle]
pub extern "C" fn morph_engine_init(language: *const c_char) {
    let language = unsafe { read_str(language) }.map(str::to_string);
    let result = catch_unwind(|| {
        let mut engine = ENGINE.lock();
        if engine.is_some() {
            return;
        }
        let mut config = Config::from_env();
        if let Some(language) = language.filter(|l| !l.is_empty()) {
            config.language = language;
        }
        *engine = Some(config.open_engine());
        info!("morphology engine initialized for '{}'", config.language);
    });
    if result.is_err() {
        error!("panic during morphology engine initialization");
        *ENGINE.lock() = None;
    }
}

#[no_mangle]
pub extern "C" fn morph_engine_destroy() {
    if ENGINE.lock().take().is_some() {
        info!("morphology engine released");
    }
}

#[no_mangle]
pub extern "C" fn morph_set_language(language: *const c_char) {
    let Some(language) = (unsafe { read_str(language) }) else { return };
    with_engine("morph_set_language", |engine| engine.set_language(language));
}

/// Applies operation `op` (see `Inflection::from_code`) to `word`. Unknown codes and an
/// uninitialized engine return the word unchanged.
#[no_mangle]
pub extern "C" fn morph_apply(op: u32, word: *const c_char) -> *mut c_char {
    let word = unsafe { read_str(word) }.unwrap_or("");
    let transformed = Inflection::from_code(op)
        .and_then(|op| with_engine("morph_apply", |engine| engine.apply(op, word)));
    into_c_string(transformed.unwrap_or_else(|| word.to_string()))
}

#[no_mangle]
pub extern "C" fn morph_apply_last_word(op: u32, text: *const c_char) -> *mut c_char {
    let text = unsafe { read_str(text) }.unwrap_or("");
    let transformed = Inflection::from_code(op).and_then(|op| {
        with_engine("morph_apply_last_word", |engine| engine.apply_to_last_word(text, op))
    });
    into_c_string(transformed.unwrap_or_else(|| text.to_string()))
}

#[no_mangle]
pub extern "C" fn morph_negate(text: *const c_char, contract: bool) -> *mut c_char {
    let text = unsafe { read_str(text) }.unwrap_or("");
    let negated = with_engine("morph_negate", |engine| engine.negate(text, contract));
    into_c_string(negated.unwrap_or_else(|| text.to_string()))
}

/// Yes/no question, or a wh-question when `wh_word` is non-null and non-empty.
#[no_mangle]
pub extern "C" fn morph_question(text: *const c_char, wh_word: *const c_char) -> *mut c_char {
    let text = unsafe { read_str(text) }.unwrap_or("");
    let wh_word = unsafe { read_str(wh_word) }.filter(|w| !w.is_empty());
    let question = with_engine("morph_question", |engine| match wh_word {
        Some(wh) => engine.wh_question(text, wh),
        None => engine.yes_no_question(text),
    });
    into_c_string(question.unwrap_or_else(|| text.to_string()))
}

#[no_mangle]
pub extern "C" fn morph_insert_not(text: *const c_char) -> *mut c_char {
    let text = unsafe { read_str(text) }.unwrap_or("");
    let result = with_engine("morph_insert_not", |engine| engine.insert_not(text));
    into_c_string(result.unwrap_or_else(|| text.to_string()))
}

/// JSON array of the five pronoun forms, or `[]` when the word is not a pronoun.
#[no_mangle]
pub extern "C" fn morph_pronoun_variants(word: *const c_char) -> *mut c_char {
    let word = unsafe { read_str(word) }.unwrap_or("");
    let forms = with_engine("morph_pronoun_variants", |engine| {
        engine.pronoun_variants(word).map(|v| v.to_vec())
    })
    .flatten()
    .unwrap_or_default();
    into_c_string(serde_json::to_string(&forms).unwrap_or_else(|_| "[]".to_string()))
}

/// JSON array of the punctuation-stripped words of `text`.
#[no_mangle]
pub extern "C" fn morph_words(text: *const c_char) -> *mut c_char {
    let text = unsafe { read_str(text) }.unwrap_or("");
    let words = with_engine("morph_words", |engine| engine.words(text)).unwrap_or_default();
    into_c_string(serde_json::to_string(&words).unwrap_or_else(|_| "[]".to_string()))
}

/// Records a user override for the current language. Returns false if it could not be saved.
#[no_mangle]
pub extern "C" fn morph_set_override(op: u32, word: *const c_char, form: *const c_char) -> bool {
    let (Some(op), Some(word), Some(form)) = (
        Inflection::from_code(op),
        unsafe { read_str(word) },
        unsafe { read_str(form) },
    ) else {
        return false;
    };
    let saved = with_engine("morph_set_override", |engine| {
        engine.update_overrides(|overrides| overrides.set(op, word, form))
    });
    match saved {
        Some(Ok(())) => true,
        Some(Err(e)) => {
            warn!("override kept for this session only: {e}");
            false
        }
        None => false,
    }
}

#[no_mangle]
pub extern "C" fn morph_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}

/// Null-terminated name of operation `op`, or null for an unknown code. Static; do not free.
#[no_mangle]
pub extern "C" fn morph_operation_name(op: u32) -> *const c_char {
    match Inflection::from_code(op) {
        Some(op) => OPERATION_NAMES[op as usize].as_ptr(),
        None => ptr::null(),
    }
}

static OPERATION_NAMES: Lazy<Vec<CString>> = Lazy::new(|| {
    Inflection::ALL
        .iter()
        .map(|op| CString::new(op.name()).unwrap_or_default())
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    fn take(s: *mut c_char) -> String {
        let owned = unsafe { CStr::from_ptr(s) }.to_string_lossy().into_owned();
        morph_free_string(s);
        owned
    }

    #[test]
    fn round_trip_through_the_c_boundary() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("MORPH_ENGINE_DATA_DIR", dir.path());

        let en = CString::new("en-US").unwrap();
        morph_engine_init(en.as_ptr());

        let word = CString::new("Child").unwrap();
        assert_eq!(take(morph_apply(0, word.as_ptr())), "Children");
        assert_eq!(take(morph_apply(99, word.as_ptr())), "Child");

        let text = CString::new("I like pizza!").unwrap();
        assert_eq!(take(morph_apply_last_word(0, text.as_ptr())), "I like pizzas!");

        let clause = CString::new("They are here").unwrap();
        assert_eq!(take(morph_question(clause.as_ptr(), ptr::null())), "Are they here");

        let him = CString::new("him").unwrap();
        assert_eq!(
            take(morph_pronoun_variants(him.as_ptr())),
            r#"["he","him","his","his","himself"]"#
        );

        let gizmo = CString::new("gizmo").unwrap();
        let gizmos = CString::new("gizmosx").unwrap();
        assert!(morph_set_override(0, gizmo.as_ptr(), gizmos.as_ptr()));
        assert_eq!(take(morph_apply(0, gizmo.as_ptr())), "gizmosx");

        let name = unsafe { CStr::from_ptr(morph_operation_name(2)) };
        assert_eq!(name.to_str().unwrap(), "past");

        morph_engine_destroy();
        assert_eq!(take(morph_apply(0, word.as_ptr())), "Child");
    }
}
