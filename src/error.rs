//! Error types for the MLB box score tool

use thiserror::Error;


pub type Result<T> = std::result::Result<T, BoxscoreError>;

/// Failure kinds, kept deliberately coarse: transport problems, documents
/// that don't look like the live feed, and display indices past the end of
/// the result lists.
#[derive(Error, Debug)]
pub enum BoxscoreError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected feed shape: {0}")]
    Format(String),

    #[error("not enough {kind} results: wanted index {index}, have {len}")]
    Index {
        kind: &'static str,
        index: usize,
        len: usize,
    },
}

impl From<serde_json::Error> for BoxscoreError {
    fn from(err: serde_json::Error) -> Self {
        BoxscoreError::Format(err.to_string())
    }
}
