// src/core/mod.rs
pub mod case;
pub mod engine;
pub mod tokenizer;
pub mod types;
