//! Orthography coverage scanning for fonts.
//!
//! This crate answers which written-language orthographies a font's character
//! repertoire supports. It provides:
//!
//! - [`Orthography`]: the base, optional and punctuation requirements of one
//!   `(language, script, territory)` variant, with cached scanning and
//!   full/basic/minimal classification
//! - [`OrthographyCatalog`]: every orthography of a dataset, indexed by key,
//!   with default-territory inheritance applied, plus collection queries
//!
//! # Architecture
//!
//! The dataset shape lives in the `orthoscan-data` crate. A catalog is built
//! once from a [`CatalogSource`]; records are staged and indexed first, then
//! a separate pass fills empty requirement tiers from each record's
//! `"dflt"` territory sibling. Probe sets (usually a font's cmap) are plain
//! [`CodepointSet`]s; extracting them from a font file is left to the caller.
//!
//! ```
//! use orthoscan::{ListingLevel, OrthographyCatalog, codepoint_set};
//!
//! let json = r#"{"en": {"DFLT": {"dflt": {
//!     "name": "English",
//!     "unicodes": {"base": ["a", "b", "c"], "punctuation": [".", ","]}
//! }}}}"#;
//! let mut catalog = OrthographyCatalog::from_json_str(json).unwrap();
//! let probe = codepoint_set("abc.,".chars());
//! assert_eq!(catalog.list_supported(&probe, ListingLevel::Full), ["English"]);
//! ```

pub mod catalog;
pub mod codepoints;
mod error;
pub mod orthography;

// Re-export main types for convenience
pub use catalog::{ListingLevel, OrthographyCatalog, SupportReport};
pub use codepoints::{CodepointSet, codepoint_set, codepoint_set_from_scalars};
pub use error::OrthographyError;
pub use orthography::{
    DefaultLookup, FillOutcome, Orthography, OrthographyKey, RequirementSets, ScanResult,
    SupportLevel, TierCoverage,
};
pub use orthoscan_data::{CatalogSource, Codepoint, OrthographyInfo, SourceError, UnicodeInfo};
