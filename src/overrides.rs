// File: src/overrides.rs
use crate::core::types::Inflection;
use crate::error::Result;
use crate::persistence::{decode, encode, OverrideBackend};
use log::{debug, info, warn};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Reduces a language tag to the primary subtag used as the override key ("en-GB" -> "en").
pub fn primary_subtag(tag: &str) -> String {
    let primary = tag.trim().split(['-', '_']).next().unwrap_or("").to_ascii_lowercase();
    if primary.is_empty() {
        "en".to_string()
    } else {
        primary
    }
}

/// User-defined corrections for one language. Keys and values are stored lowercase;
/// callers re-apply the case of the word being transformed. Writes go through
/// `set`, `keep_unchanged` and `set_article` so the lowercase keys hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overrides {
    do_not_change: HashSet<String>,
    plural: HashMap<String, String>,
    singular: HashMap<String, String>,
    past: HashMap<String, String>,
    past_participle: HashMap<String, String>,
    present_participle: HashMap<String, String>,
    third_person: HashMap<String, String>,
    base: HashMap<String, String>,
    comparative: HashMap<String, String>,
    superlative: HashMap<String, String>,
    adverb: HashMap<String, String>,
    adjective: HashMap<String, String>,
    article: HashMap<String, String>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map(&self, op: Inflection) -> &HashMap<String, String> {
        match op {
            Inflection::Plural => &self.plural,
            Inflection::Singular => &self.singular,
            Inflection::Past => &self.past,
            Inflection::PastParticiple => &self.past_participle,
            Inflection::PresentParticiple => &self.present_participle,
            Inflection::ThirdPerson => &self.third_person,
            Inflection::Base => &self.base,
            Inflection::Comparative => &self.comparative,
            Inflection::Superlative => &self.superlative,
            Inflection::Adverb => &self.adverb,
            Inflection::Adjective => &self.adjective,
        }
    }

    fn map_mut(&mut self, op: Inflection) -> &mut HashMap<String, String> {
        match op {
            Inflection::Plural => &mut self.plural,
            Inflection::Singular => &mut self.singular,
            Inflection::Past => &mut self.past,
            Inflection::PastParticiple => &mut self.past_participle,
            Inflection::PresentParticiple => &mut self.present_participle,
            Inflection::ThirdPerson => &mut self.third_person,
            Inflection::Base => &mut self.base,
            Inflection::Comparative => &mut self.comparative,
            Inflection::Superlative => &mut self.superlative,
            Inflection::Adverb => &mut self.adverb,
            Inflection::Adjective => &mut self.adjective,
        }
    }

    /// Looks up `word` (case-insensitively) in the map for `op`.
    pub fn get(&self, op: Inflection, word: &str) -> Option<&str> {
        self.map(op).get(&word.to_lowercase()).map(String::as_str)
    }

    /// Records `word -> form` for `op`. Only this direction is added; the reverse
    /// mapping must be set on its own.
    pub fn set(&mut self, op: Inflection, word: &str, form: &str) {
        self.map_mut(op).insert(word.to_lowercase(), form.to_lowercase());
    }

    pub fn remove(&mut self, op: Inflection, word: &str) -> Option<String> {
        self.map_mut(op).remove(&word.to_lowercase())
    }

    /// Words excluded from noun number changes.
    pub fn unchanged_words(&self) -> impl Iterator<Item = &str> {
        self.do_not_change.iter().map(String::as_str)
    }

    pub fn is_unchanged(&self, word: &str) -> bool {
        self.do_not_change.contains(&word.to_lowercase())
    }

    pub fn keep_unchanged(&mut self, word: &str) {
        self.do_not_change.insert(word.to_lowercase());
    }

    pub fn article_for(&self, word: &str) -> Option<&str> {
        self.article.get(&word.to_lowercase()).map(String::as_str)
    }

    pub fn set_article(&mut self, word: &str, article: &str) {
        self.article.insert(word.to_lowercase(), article.to_lowercase());
    }

    pub fn is_empty(&self) -> bool {
        self.do_not_change.is_empty()
            && self.article.is_empty()
            && Inflection::ALL.iter().all(|&op| self.map(op).is_empty())
    }
}

/// Per-language override bundles, loaded lazily from a backend and cached in memory.
///
/// All mutations run under one write lock, so concurrent read-modify-persist sequences
/// serialize and none is lost. Readers only take the read lock once a language is cached.
pub struct OverridesStore {
    backend: Box<dyn OverrideBackend>,
    cache: RwLock<HashMap<String, Arc<Overrides>>>,
}

impl OverridesStore {
    pub fn new(backend: impl OverrideBackend + 'static) -> Self {
        info!("override store created");
        Self {
            backend: Box::new(backend),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The bundle for `language`, or an empty one if nothing readable was persisted.
    pub fn get(&self, language: &str) -> Arc<Overrides> {
        let key = primary_subtag(language);
        if let Some(overrides) = self.cache.read().get(&key) {
            return Arc::clone(overrides);
        }

        let loaded = Arc::new(self.load_record(&key));
        let mut cache = self.cache.write();
        Arc::clone(cache.entry(key).or_insert(loaded))
    }

    /// Replaces the bundle for `language` and persists it.
    ///
    /// On a write failure the new bundle stays in the cache for this session and the error
    /// is returned for the caller to report.
    pub fn set(&self, language: &str, overrides: Overrides) -> Result<()> {
        self.update(language, move |current| *current = overrides)
    }

    /// Applies `mutate` to the current bundle for `language` and persists the result.
    pub fn update<F>(&self, language: &str, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut Overrides),
    {
        let key = primary_subtag(language);
        let mut cache = self.cache.write();

        let mut next = match cache.get(&key) {
            Some(current) => Overrides::clone(current),
            None => self.load_record(&key),
        };
        mutate(&mut next);

        let persisted = encode(&key, &next).and_then(|bytes| self.backend.store(&key, &bytes));
        cache.insert(key.clone(), Arc::new(next));

        if let Err(e) = &persisted {
            warn!("failed to persist overrides for '{key}': {e}");
        }
        persisted
    }

    /// Drops the cached bundle so the next access reloads it from the backend.
    pub fn evict(&self, language: &str) {
        self.cache.write().remove(&primary_subtag(language));
    }

    fn load_record(&self, key: &str) -> Overrides {
        match self.backend.load(key) {
            Ok(Some(bytes)) => match decode(key, &bytes) {
                Ok(overrides) => {
                    debug!("loaded overrides for '{key}'");
                    overrides
                }
                Err(e) => {
                    warn!("ignoring unreadable overrides: {e}");
                    Overrides::new()
                }
            },
            Ok(None) => Overrides::new(),
            Err(e) => {
                warn!("could not read overrides for '{key}': {e}");
                Overrides::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::persistence::MemoryBackend;
    use std::thread;

    struct FailingBackend;

    impl OverrideBackend for FailingBackend {
        fn load(&self, _key: &str) -> Result<Option<Vec<u8>>> {
            Ok(Some(vec![1, 2, 3]))
        }

        fn store(&self, _key: &str, _bytes: &[u8]) -> Result<()> {
            Err(Error::Io(std::io::Error::other("disk full")))
        }
    }

    #[test]
    fn primary_subtag_groups_regional_variants() {
        assert_eq!(primary_subtag("en-US"), "en");
        assert_eq!(primary_subtag("EN_gb"), "en");
        assert_eq!(primary_subtag("fr"), "fr");
        assert_eq!(primary_subtag(""), "en");
    }

    #[test]
    fn keys_and_values_are_lowercased() {
        let mut overrides = Overrides::new();
        overrides.set(Inflection::Plural, "Child", "CHILDREN");
        assert_eq!(overrides.get(Inflection::Plural, "CHILD"), Some("children"));
        assert_eq!(overrides.get(Inflection::Singular, "children"), None);
        overrides.keep_unchanged("Pants");
        assert!(overrides.is_unchanged("pants"));
        assert_eq!(overrides.unchanged_words().collect::<Vec<_>>(), vec!["pants"]);
        overrides.set_article("Hotel", "AN");
        assert_eq!(overrides.article_for("hotel"), Some("an"));
        let plural_keys: Vec<&str> =
            overrides.map(Inflection::Plural).keys().map(String::as_str).collect();
        assert_eq!(plural_keys, vec!["child"]);
    }

    #[test]
    fn update_is_visible_to_regional_variants() {
        let store = OverridesStore::new(MemoryBackend::new());
        store
            .update("en-US", |o| o.set(Inflection::Plural, "gizmo", "gizmosx"))
            .unwrap();
        assert_eq!(store.get("en-GB").get(Inflection::Plural, "gizmo"), Some("gizmosx"));
        assert!(store.get("fr").is_empty());
    }

    #[test]
    fn evicted_bundles_reload_from_backend() {
        let store = OverridesStore::new(MemoryBackend::new());
        store.update("en", |o| o.keep_unchanged("pants")).unwrap();
        store.evict("en");
        assert!(store.get("en").is_unchanged("pants"));
    }

    #[test]
    fn unreadable_records_read_as_empty_and_failed_writes_keep_cache() {
        let store = OverridesStore::new(FailingBackend);
        assert!(store.get("en").is_empty());

        let result = store.update("en", |o| o.set(Inflection::Past, "go", "goed"));
        assert!(result.is_err());
        assert_eq!(store.get("en").get(Inflection::Past, "go"), Some("goed"));
    }

    #[test]
    fn concurrent_updates_are_not_lost() {
        let store = Arc::new(OverridesStore::new(MemoryBackend::new()));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store
                        .update("en", |o| o.keep_unchanged(&format!("word{i}")))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.get("en").unchanged_words().count(), 8);
    }
}
