// File: src/config.rs
use crate::core::engine::MorphologyEngine;
use crate::overrides::OverridesStore;
use crate::persistence::FileBackend;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

const APP_DIR: &str = "morph-engine";
const LANG_VAR: &str = "MORPH_ENGINE_LANG";
const DATA_DIR_VAR: &str = "MORPH_ENGINE_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// BCP 47 tag; only the primary subtag matters.
    pub language: String,
    /// Where per-language override records are kept.
    pub data_dir: PathBuf,
    pub conservative_plurals: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            data_dir: default_data_dir(),
            conservative_plurals: false,
        }
    }
}

// Falls back to the working directory when the platform reports no home at all.
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

impl Config {
    /// Defaults, overridden by `MORPH_ENGINE_LANG` and `MORPH_ENGINE_DATA_DIR`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(language) = std::env::var(LANG_VAR) {
            if !language.trim().is_empty() {
                config.language = language;
            }
        }
        if let Some(dir) = std::env::var_os(DATA_DIR_VAR) {
            config.data_dir = PathBuf::from(dir);
        }
        config
    }

    /// Builds an engine whose overrides persist under `data_dir`.
    pub fn open_engine(&self) -> MorphologyEngine {
        let store = Arc::new(OverridesStore::new(FileBackend::new(&self.data_dir)));
        let mut engine = MorphologyEngine::new(store, &self.language);
        engine.set_conservative_plurals(self.conservative_plurals);
        engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "language": "en-GB" }"#).unwrap();
        assert_eq!(config.language, "en-GB");
        assert!(!config.conservative_plurals);
        assert!(config.data_dir.ends_with(APP_DIR));
    }

    #[test]
    fn open_engine_persists_under_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            language: "en-US".to_string(),
            data_dir: dir.path().to_path_buf(),
            conservative_plurals: true,
        };
        let engine = config.open_engine();
        assert_eq!(engine.language(), "en");
        assert_eq!(engine.apply(crate::Inflection::Plural, "cactus"), "cactuses");

        engine.update_overrides(|o| o.keep_unchanged("pants")).unwrap();
        assert!(dir.path().join("overrides-en.bin").exists());

        let reopened = config.open_engine();
        assert_eq!(reopened.singularize("pants", false), "pants");
    }
}
