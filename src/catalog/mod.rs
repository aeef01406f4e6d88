//! The orthography catalog.
//!
//! [`OrthographyCatalog`] owns every [`Orthography`] of a dataset. Building
//! one runs in two phases:
//! 1. Staging: one record per dataset leaf, registered in the key index
//! 2. Inheritance: every record fills its empty tiers from its
//!    default-territory sibling
//!
//! After that the catalog answers lookups and support queries for any number
//! of probe sets.

mod report;

use std::collections::HashMap;
use std::fmt;

use orthoscan_data::CatalogSource;
use orthoscan_data::defaults::{DEFAULT_SCRIPT, DEFAULT_TERRITORY};

use crate::codepoints::CodepointSet;
use crate::error::OrthographyError;
use crate::orthography::{
    DefaultLookup, FillOutcome, Orthography, OrthographyKey, RequirementSets, SupportLevel,
};

pub use report::SupportReport;

/// Which records [`OrthographyCatalog::list_supported`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingLevel {
    /// Records with full support
    Full,
    /// Records with exactly basic support; fully supported records are not included
    Basic,
}

/// All orthographies of a dataset, with a key index.
#[derive(Debug, Clone, Default)]
pub struct OrthographyCatalog {
    /// Records in dataset iteration order
    orthographies: Vec<Orthography>,
    /// Key to position in `orthographies`; fixed after construction
    index: HashMap<OrthographyKey, usize>,
}

impl OrthographyCatalog {
    /// Build a catalog from a dataset.
    pub fn new(source: &CatalogSource) -> Self {
        let mut catalog = Self::stage(source);
        catalog.inherit_defaults();
        log::info!(
            "Orthography catalog initialized with {} orthographies",
            catalog.len()
        );
        catalog
    }

    /// Parse a JSON dataset and build a catalog from it.
    pub fn from_json_str(json: &str) -> Result<Self, OrthographyError> {
        let source = CatalogSource::from_json_str(json)?;
        Ok(Self::new(&source))
    }

    /// Construct every record and the index, without inheritance.
    fn stage(source: &CatalogSource) -> Self {
        let mut orthographies = Vec::new();
        let mut index = HashMap::new();
        for (code, script, territory, info) in source.records() {
            let key = OrthographyKey::new(code, script, territory);
            index.insert(key.clone(), orthographies.len());
            orthographies.push(Orthography::new(key, info));
        }
        Self {
            orthographies,
            index,
        }
    }

    /// Run the inheritance pass over every record, in construction order.
    ///
    /// Default-territory records are never modified by the pass, so a
    /// snapshot of their requirement sets resolves parents exactly as a live
    /// lookup would.
    fn inherit_defaults(&mut self) {
        let parents = DefaultSnapshot::capture(&self.orthographies);
        let mut filled = 0usize;
        let mut orphans = 0usize;
        for ortho in &mut self.orthographies {
            match ortho.fill_from_default_orthography(&parents) {
                FillOutcome::MissingParent => orphans += 1,
                outcome if outcome.filled_any() => filled += 1,
                _ => {}
            }
        }
        log::debug!(
            "Inheritance pass: {} records filled from defaults, {} without a default",
            filled,
            orphans
        );
    }

    /// Look up a record by its full key.
    pub fn get(&self, code: &str, script: &str, territory: &str) -> Option<&Orthography> {
        let i = self.position(code, script, territory)?;
        self.orthographies.get(i)
    }

    /// Look up a record by its full key, mutably.
    pub fn get_mut(&mut self, code: &str, script: &str, territory: &str) -> Option<&mut Orthography> {
        let i = self.position(code, script, territory)?;
        self.orthographies.get_mut(i)
    }

    /// Look up the default-script, default-territory record of a language.
    pub fn get_default(&self, code: &str) -> Option<&Orthography> {
        self.get(code, DEFAULT_SCRIPT, DEFAULT_TERRITORY)
    }

    fn position(&self, code: &str, script: &str, territory: &str) -> Option<usize> {
        self.index
            .get(&OrthographyKey::new(code, script, territory))
            .copied()
    }

    /// Scan every record against the probe set.
    ///
    /// Records that already hold a current result keep it; use
    /// [`OrthographyCatalog::rescan_all`] when the probe set changes.
    pub fn scan_all(&mut self, probe: &CodepointSet) {
        for ortho in &mut self.orthographies {
            ortho.scan(probe);
        }
    }

    /// Mark every record's scan result as stale.
    pub fn invalidate_all(&mut self) {
        for ortho in &mut self.orthographies {
            ortho.invalidate();
        }
    }

    /// Invalidate, then scan every record against a new probe set.
    pub fn rescan_all(&mut self, probe: &CodepointSet) {
        self.invalidate_all();
        self.scan_all(probe);
    }

    /// Sorted display names of records supported at the given listing level.
    pub fn list_supported(&mut self, probe: &CodepointSet, level: ListingLevel) -> Vec<String> {
        match level {
            ListingLevel::Full => self.names_where(probe, SupportLevel::Full),
            ListingLevel::Basic => self.names_where(probe, SupportLevel::Basic),
        }
    }

    /// Sorted display names of records with minimal support.
    pub fn list_supported_minimal(&mut self, probe: &CodepointSet) -> Vec<String> {
        self.names_where(probe, SupportLevel::Minimal)
    }

    /// Full, basic and minimal listings, with fully supported names removed
    /// from the basic and minimal lists.
    pub fn support_report(&mut self, probe: &CodepointSet) -> SupportReport {
        let full = self.list_supported(probe, ListingLevel::Full);
        let basic = self.list_supported(probe, ListingLevel::Basic);
        let minimal = self.list_supported_minimal(probe);
        SupportReport::from_listings(full, basic, minimal)
    }

    fn names_where(&mut self, probe: &CodepointSet, level: SupportLevel) -> Vec<String> {
        let mut names: Vec<String> = self
            .orthographies
            .iter_mut()
            .filter_map(|ortho| {
                let hit = ortho.scan(probe).satisfies(level);
                hit.then(|| ortho.display_name())
            })
            .collect();
        names.sort();
        names
    }

    /// Iterate over the records in construction order.
    pub fn iter(&self) -> impl Iterator<Item = &Orthography> {
        self.orthographies.iter()
    }

    /// Iterate over the keys in construction order.
    pub fn keys(&self) -> impl Iterator<Item = &OrthographyKey> {
        self.orthographies.iter().map(Orthography::key)
    }

    pub fn len(&self) -> usize {
        self.orthographies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orthographies.is_empty()
    }
}

impl DefaultLookup for OrthographyCatalog {
    fn default_requirements(&self, code: &str, script: &str) -> Option<&RequirementSets> {
        self.get(code, script, DEFAULT_TERRITORY)
            .map(Orthography::requirements)
    }
}

impl fmt::Display for OrthographyCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<OrthographyCatalog with {} orthographies>",
            self.orthographies.len()
        )
    }
}

/// Requirement sets of every default-territory record, keyed by `(code, script)`.
struct DefaultSnapshot(HashMap<(String, String), RequirementSets>);

impl DefaultSnapshot {
    fn capture(orthographies: &[Orthography]) -> Self {
        Self(
            orthographies
                .iter()
                .filter(|o| o.key().is_default_territory())
                .map(|o| {
                    (
                        (o.code().to_string(), o.script().to_string()),
                        o.requirements().clone(),
                    )
                })
                .collect(),
        )
    }
}

impl DefaultLookup for DefaultSnapshot {
    fn default_requirements(&self, code: &str, script: &str) -> Option<&RequirementSets> {
        self.0.get(&(code.to_string(), script.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codepoints::codepoint_set;
    use orthoscan_data::OrthographyInfo;
    use std::sync::Arc;

    fn english() -> CatalogSource {
        CatalogSource::new()
            .with(
                "en",
                "DFLT",
                "dflt",
                OrthographyInfo::named("English")
                    .with_base(['a', 'b', 'c'])
                    .with_punctuation(['.', ',']),
            )
            .with("en", "DFLT", "ZA", OrthographyInfo::named("English (South Africa)"))
    }

    #[test]
    fn test_index_resolves_every_record() {
        let catalog = OrthographyCatalog::new(&english());
        assert_eq!(catalog.len(), 2);
        for key in catalog.keys() {
            let found = catalog
                .get(&key.code, &key.script, &key.territory)
                .unwrap();
            assert_eq!(found.key(), key);
        }
    }

    #[test]
    fn test_get_unknown_key_returns_none() {
        let catalog = OrthographyCatalog::new(&english());
        assert!(catalog.get("de", "DFLT", "dflt").is_none());
        assert!(catalog.get("en", "Latn", "dflt").is_none());
        assert!(catalog.get_default("en").is_some());
    }

    #[test]
    fn test_inheritance_shares_parent_sets() {
        let catalog = OrthographyCatalog::new(&english());
        let parent = catalog.get_default("en").unwrap();
        let child = catalog.get("en", "DFLT", "ZA").unwrap();
        assert!(Arc::ptr_eq(
            &parent.requirements().base,
            &child.requirements().base
        ));
        assert_eq!(child.punctuation(), parent.punctuation());
    }

    #[test]
    fn test_child_sorted_before_parent_still_inherits() {
        // "AQ" sorts before "dflt", so the child is staged first
        let source = CatalogSource::new()
            .with("xx", "DFLT", "AQ", OrthographyInfo::named("Child"))
            .with(
                "xx",
                "DFLT",
                "dflt",
                OrthographyInfo::named("Parent").with_base(['q']),
            );
        let catalog = OrthographyCatalog::new(&source);
        assert_eq!(catalog.keys().next().unwrap().territory, "AQ");
        let child = catalog.get("xx", "DFLT", "AQ").unwrap();
        assert_eq!(*child.base(), codepoint_set(['q']));
    }

    #[test]
    fn test_catalog_implements_default_lookup() {
        let catalog = OrthographyCatalog::new(&english());
        let reqs = catalog.default_requirements("en", "DFLT").unwrap();
        assert_eq!(reqs.base.len(), 3);
        assert!(catalog.default_requirements("fr", "DFLT").is_none());
    }

    #[test]
    fn test_rescan_all_picks_up_new_probe() {
        let mut catalog = OrthographyCatalog::new(&english());
        catalog.scan_all(&codepoint_set(['a', 'b', 'c', '.', ',']));
        assert!(catalog.iter().all(|o| o.last_scan().unwrap().is_full()));

        // Without invalidation the cached results stay
        catalog.scan_all(&codepoint_set(['a']));
        assert!(catalog.iter().all(|o| o.last_scan().unwrap().is_full()));

        catalog.rescan_all(&codepoint_set(['a']));
        assert!(catalog.iter().all(|o| !o.last_scan().unwrap().is_full()));
    }

    #[test]
    fn test_invalidate_all() {
        let mut catalog = OrthographyCatalog::new(&english());
        catalog.scan_all(&codepoint_set(['a']));
        assert!(catalog.iter().all(Orthography::is_scanned));
        catalog.invalidate_all();
        assert!(catalog.iter().all(|o| !o.is_scanned()));
    }

    #[test]
    fn test_display() {
        let catalog = OrthographyCatalog::new(&english());
        assert_eq!(
            catalog.to_string(),
            "<OrthographyCatalog with 2 orthographies>"
        );
        assert!(OrthographyCatalog::default().is_empty());
    }
}
