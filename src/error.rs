// src/error.rs
use thiserror::Error;

/// Failures of the override persistence layer. Transformations themselves never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode overrides for '{language}': {source}")]
    Encode {
        language: String,
        #[source]
        source: bincode::Error,
    },

    #[error("failed to decode overrides for '{language}': {source}")]
    Decode {
        language: String,
        #[source]
        source: bincode::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
