//! Dataset types for orthography character requirements.
//!
//! The dataset is a nested JSON object keyed by language code, then script,
//! then territory:
//!
//! ```json
//! {
//!   "en": {
//!     "DFLT": {
//!       "dflt": { "name": "English", "unicodes": { "base": ["a", "b"] } },
//!       "ZA": { "name": "English (South Africa)", "unicodes": {} }
//!     }
//!   }
//! }
//! ```
//!
//! Every leaf key is optional. Code points may be written as single-character
//! strings or as integer scalar values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::SourceError;

/// A single Unicode code point from the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCodepoint")]
pub struct Codepoint(pub char);

impl From<char> for Codepoint {
    fn from(c: char) -> Self {
        Codepoint(c)
    }
}

impl From<Codepoint> for char {
    fn from(cp: Codepoint) -> Self {
        cp.0
    }
}

/// Either accepted spelling of a code point, before validation.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCodepoint {
    Scalar(u32),
    Text(String),
}

impl TryFrom<RawCodepoint> for Codepoint {
    type Error = SourceError;

    fn try_from(raw: RawCodepoint) -> Result<Self, Self::Error> {
        match raw {
            RawCodepoint::Scalar(value) => char::from_u32(value)
                .map(Codepoint)
                .ok_or(SourceError::InvalidCodepoint { value }),
            RawCodepoint::Text(value) => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Codepoint(c)),
                    _ => Err(SourceError::InvalidCharacter { value }),
                }
            }
        }
    }
}

/// The three requirement tiers of one orthography.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnicodeInfo {
    /// Letters required to write the language at all
    #[serde(default)]
    pub base: Vec<Codepoint>,

    /// Supplementary or rare letters
    #[serde(default)]
    pub optional: Vec<Codepoint>,

    /// Punctuation marks
    #[serde(default)]
    pub punctuation: Vec<Codepoint>,
}

/// One leaf record of the dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrthographyInfo {
    /// Human-readable label, e.g. "English"
    #[serde(default)]
    pub name: Option<String>,

    /// Character requirements
    #[serde(default)]
    pub unicodes: UnicodeInfo,
}

impl OrthographyInfo {
    /// Create a record with the given name and no requirements.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            unicodes: UnicodeInfo::default(),
        }
    }

    /// Set the base letters.
    pub fn with_base(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.unicodes.base = chars.into_iter().map(Codepoint).collect();
        self
    }

    /// Set the optional letters.
    pub fn with_optional(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.unicodes.optional = chars.into_iter().map(Codepoint).collect();
        self
    }

    /// Set the punctuation marks.
    pub fn with_punctuation(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.unicodes.punctuation = chars.into_iter().map(Codepoint).collect();
        self
    }
}

type TerritoryMap = BTreeMap<String, OrthographyInfo>;
type ScriptMap = BTreeMap<String, TerritoryMap>;

/// The full nested dataset: `code -> script -> territory -> record`.
///
/// Iteration order is the sorted order of each key level, so every catalog
/// built from the same source sees its records in the same order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogSource {
    languages: BTreeMap<String, ScriptMap>,
}

impl CatalogSource {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dataset from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Insert a leaf record, replacing any record already at that key.
    pub fn insert(
        &mut self,
        code: impl Into<String>,
        script: impl Into<String>,
        territory: impl Into<String>,
        info: OrthographyInfo,
    ) {
        self.languages
            .entry(code.into())
            .or_default()
            .entry(script.into())
            .or_default()
            .insert(territory.into(), info);
    }

    /// Builder form of [`CatalogSource::insert`].
    pub fn with(
        mut self,
        code: impl Into<String>,
        script: impl Into<String>,
        territory: impl Into<String>,
        info: OrthographyInfo,
    ) -> Self {
        self.insert(code, script, territory, info);
        self
    }

    /// Iterate over every leaf as `(code, script, territory, record)`.
    pub fn records(&self) -> impl Iterator<Item = (&str, &str, &str, &OrthographyInfo)> {
        self.languages.iter().flat_map(|(code, scripts)| {
            scripts.iter().flat_map(move |(script, territories)| {
                territories.iter().map(move |(territory, info)| {
                    (code.as_str(), script.as_str(), territory.as_str(), info)
                })
            })
        })
    }

    /// Number of leaf records.
    pub fn len(&self) -> usize {
        self.records().count()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codepoint_from_string_and_integer() {
        let cps: Vec<Codepoint> = serde_json::from_str(r#"["a", 98, "é"]"#).unwrap();
        assert_eq!(cps, vec![Codepoint('a'), Codepoint('b'), Codepoint('é')]);
    }

    #[test]
    fn test_codepoint_rejects_surrogate() {
        let result: Result<Vec<Codepoint>, _> = serde_json::from_str("[55296]");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("U+D800"), "unexpected error: {err}");
    }

    #[test]
    fn test_codepoint_rejects_multi_char_string() {
        let result: Result<Vec<Codepoint>, _> = serde_json::from_str(r#"["ab"]"#);
        assert!(result.is_err());
        let result: Result<Vec<Codepoint>, _> = serde_json::from_str(r#"[""]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let info: OrthographyInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(info.name, None);
        assert!(info.unicodes.base.is_empty());
        assert!(info.unicodes.optional.is_empty());
        assert!(info.unicodes.punctuation.is_empty());

        let info: OrthographyInfo =
            serde_json::from_str(r#"{"name": "Basque", "unicodes": {"base": ["a"]}}"#).unwrap();
        assert_eq!(info.name.as_deref(), Some("Basque"));
        assert_eq!(info.unicodes.base, vec![Codepoint('a')]);
        assert!(info.unicodes.punctuation.is_empty());
    }

    #[test]
    fn test_records_iterate_in_key_order() {
        let source = CatalogSource::new()
            .with("fr", "DFLT", "dflt", OrthographyInfo::named("French"))
            .with("en", "DFLT", "ZA", OrthographyInfo::named("English (ZA)"))
            .with("en", "DFLT", "dflt", OrthographyInfo::named("English"));

        let keys: Vec<_> = source
            .records()
            .map(|(code, script, territory, _)| format!("{code}/{script}/{territory}"))
            .collect();
        assert_eq!(keys, vec!["en/DFLT/ZA", "en/DFLT/dflt", "fr/DFLT/dflt"]);
        assert_eq!(source.len(), 3);
        assert!(!source.is_empty());
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut source = CatalogSource::new();
        source.insert("en", "DFLT", "dflt", OrthographyInfo::named("Old"));
        source.insert("en", "DFLT", "dflt", OrthographyInfo::named("New"));
        assert_eq!(source.len(), 1);
        let (_, _, _, info) = source.records().next().unwrap();
        assert_eq!(info.name.as_deref(), Some("New"));
    }
}
