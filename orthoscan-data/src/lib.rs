//! Source dataset shape for the orthoscan orthography catalog.
//!
//! This crate provides:
//! - The nested `code -> script -> territory -> record` dataset types
//! - Code point parsing from either single-character strings or integer scalars
//! - The `"DFLT"` / `"dflt"` sentinel defaults
//! - Typed errors for malformed datasets
//!
//! Reading the dataset from disk is left to the caller; this crate only
//! describes and validates its shape.

pub mod defaults;
mod error;
mod source;

pub use error::SourceError;
pub use source::{CatalogSource, Codepoint, OrthographyInfo, UnicodeInfo};
