// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod overrides;
pub mod persistence;
pub mod rules;

pub use crate::config::Config;
pub use crate::core::case::match_case;
pub use crate::core::engine::MorphologyEngine;
pub use crate::core::tokenizer::split_punctuation;
pub use crate::core::types::{
    Aspect, Inflection, Number, Person, PronounVariants, Tense, Token, Voice,
};
pub use crate::error::{Error, Result};
pub use crate::overrides::{Overrides, OverridesStore};
