//! Typed error variants for the orthoscan-data crate.

use thiserror::Error;

/// Errors produced while parsing or validating an orthography dataset.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The dataset was not valid JSON or did not have the expected shape.
    #[error("Orthography dataset parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// An integer code point outside the Unicode scalar value range.
    #[error("Invalid code point U+{value:04X}: not a Unicode scalar value")]
    InvalidCodepoint { value: u32 },

    /// A string code point that does not hold exactly one character.
    #[error("Invalid code point {value:?}: expected exactly one character")]
    InvalidCharacter { value: String },
}
