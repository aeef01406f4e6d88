//! Identity and requirement types for orthographies.

use std::fmt;
use std::sync::Arc;

use orthoscan_data::defaults::{DEFAULT_SCRIPT, DEFAULT_TERRITORY};
use orthoscan_data::{Codepoint, UnicodeInfo};

use crate::codepoints::CodepointSet;

/// Identity of an orthography: language code, script and territory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrthographyKey {
    /// Language code, e.g. "en"
    pub code: String,
    /// Script tag, `"DFLT"` when the language has no explicit script
    pub script: String,
    /// Territory tag, `"dflt"` for the default variant
    pub territory: String,
}

impl OrthographyKey {
    pub fn new(
        code: impl Into<String>,
        script: impl Into<String>,
        territory: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            script: script.into(),
            territory: territory.into(),
        }
    }

    /// Key with the default script and territory.
    pub fn language(code: impl Into<String>) -> Self {
        Self::new(code, DEFAULT_SCRIPT, DEFAULT_TERRITORY)
    }

    /// Whether this key names a default-territory variant.
    pub fn is_default_territory(&self) -> bool {
        self.territory == DEFAULT_TERRITORY
    }

    /// The key of the default-territory variant with the same code and script.
    pub fn default_sibling(&self) -> Self {
        Self::new(self.code.clone(), self.script.clone(), DEFAULT_TERRITORY)
    }
}

impl fmt::Display for OrthographyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.code, self.script, self.territory)
    }
}

/// The three requirement tiers of an orthography.
///
/// Sets are shared behind `Arc` so that inherited tiers point at the parent's
/// data instead of copying it. They are never mutated once a catalog is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequirementSets {
    /// Mandatory letters
    pub base: Arc<CodepointSet>,
    /// Supplementary letters, always disjoint from `base`
    pub optional: Arc<CodepointSet>,
    /// Punctuation marks
    pub punctuation: Arc<CodepointSet>,
}

impl RequirementSets {
    /// Build requirement sets from raw dataset lists.
    ///
    /// Optional entries that also appear in `base` are dropped from `optional`.
    pub fn from_info(info: &UnicodeInfo) -> Self {
        let base: CodepointSet = to_set(&info.base);
        let optional: CodepointSet = to_set(&info.optional)
            .difference(&base)
            .copied()
            .collect();
        let punctuation = to_set(&info.punctuation);
        Self {
            base: Arc::new(base),
            optional: Arc::new(optional),
            punctuation: Arc::new(punctuation),
        }
    }

    /// Whether all three tiers are empty.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.optional.is_empty() && self.punctuation.is_empty()
    }
}

fn to_set(codepoints: &[Codepoint]) -> CodepointSet {
    codepoints.iter().map(|cp| cp.0).collect()
}
