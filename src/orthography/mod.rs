//! A single orthography and its support classification.
//!
//! An [`Orthography`] holds the character requirements for one
//! `(code, script, territory)` variant of a written language. It supports:
//! - Filling empty requirement tiers from the default-territory variant
//! - Scanning a probe set, with the result cached until invalidated
//! - Classifying support as full, basic or minimal

mod scan;
mod types;

use std::fmt;
use std::sync::Arc;

use orthoscan_data::OrthographyInfo;

use crate::codepoints::CodepointSet;

pub use scan::{ScanResult, SupportLevel, TierCoverage};
pub use types::{OrthographyKey, RequirementSets};

/// Resolves the default-territory parent of an orthography.
///
/// The catalog implements this; an orthography never stores it, so a record
/// cannot hold on to a catalog that no longer exists.
pub trait DefaultLookup {
    /// Requirement sets of the `(code, script, "dflt")` record, if present.
    fn default_requirements(&self, code: &str, script: &str) -> Option<&RequirementSets>;
}

/// What [`Orthography::fill_from_default_orthography`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// The record is itself a default-territory variant
    NotApplicable,
    /// No default-territory sibling exists; the record was left as is
    MissingParent,
    /// The parent was found; each flag marks a tier replaced by the parent's
    Filled {
        base: bool,
        optional: bool,
        punctuation: bool,
    },
}

impl FillOutcome {
    /// Whether any tier was taken from the parent.
    pub fn filled_any(&self) -> bool {
        matches!(
            self,
            FillOutcome::Filled { base, optional, punctuation } if *base || *optional || *punctuation
        )
    }
}

/// Character requirements of one language/script/territory variant.
#[derive(Debug, Clone)]
pub struct Orthography {
    key: OrthographyKey,
    name: Option<String>,
    requirements: RequirementSets,
    /// `None` when stale
    scan: Option<ScanResult>,
}

impl Orthography {
    /// Create an orthography from a dataset record.
    pub fn new(key: OrthographyKey, info: &OrthographyInfo) -> Self {
        Self {
            key,
            name: info.name.clone(),
            requirements: RequirementSets::from_info(&info.unicodes),
            scan: None,
        }
    }

    pub fn key(&self) -> &OrthographyKey {
        &self.key
    }

    pub fn code(&self) -> &str {
        &self.key.code
    }

    pub fn script(&self) -> &str {
        &self.key.script
    }

    pub fn territory(&self) -> &str {
        &self.key.territory
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The name, or the key (`code/script/territory`) for unnamed records.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.key.to_string(),
        }
    }

    pub fn requirements(&self) -> &RequirementSets {
        &self.requirements
    }

    pub fn base(&self) -> &CodepointSet {
        &self.requirements.base
    }

    pub fn optional(&self) -> &CodepointSet {
        &self.requirements.optional
    }

    pub fn punctuation(&self) -> &CodepointSet {
        &self.requirements.punctuation
    }

    /// Fill empty requirement tiers from the default-territory sibling.
    ///
    /// A tier is replaced only when it is empty here and non-empty on the
    /// parent. Tiers are shared with the parent, not merged. Only meaningful
    /// once every record of the catalog exists.
    pub fn fill_from_default_orthography<L>(&mut self, lookup: &L) -> FillOutcome
    where
        L: DefaultLookup + ?Sized,
    {
        if self.key.is_default_territory() {
            return FillOutcome::NotApplicable;
        }

        let Some(parent) = lookup.default_requirements(&self.key.code, &self.key.script) else {
            log::warn!("No parent orthography found for {}", self.key);
            return FillOutcome::MissingParent;
        };

        let reqs = &mut self.requirements;
        let base = inherit(&mut reqs.base, &parent.base);
        let optional = inherit(&mut reqs.optional, &parent.optional);
        let punctuation = inherit(&mut reqs.punctuation, &parent.punctuation);

        if base || optional || punctuation {
            log::debug!(
                "Filled {} from default (base: {}, optional: {}, punctuation: {})",
                self.key,
                base,
                optional,
                punctuation
            );
            self.scan = None;
        }

        FillOutcome::Filled {
            base,
            optional,
            punctuation,
        }
    }

    /// Scan the probe set unless a current result is cached.
    ///
    /// Call [`Orthography::invalidate`] before scanning a different probe set.
    pub fn scan(&mut self, probe: &CodepointSet) -> &ScanResult {
        let requirements = &self.requirements;
        let key = &self.key;
        self.scan.get_or_insert_with(|| {
            log::trace!("Scanning {}", key);
            ScanResult::compute(requirements, probe)
        })
    }

    /// Compute a fresh result without touching the cache.
    pub fn coverage(&self, probe: &CodepointSet) -> ScanResult {
        ScanResult::compute(&self.requirements, probe)
    }

    /// Mark the cached scan result as stale.
    pub fn invalidate(&mut self) {
        self.scan = None;
    }

    /// Whether a current scan result is cached.
    pub fn is_scanned(&self) -> bool {
        self.scan.is_some()
    }

    /// The cached scan result, if current.
    pub fn last_scan(&self) -> Option<&ScanResult> {
        self.scan.as_ref()
    }

    pub fn support_full(&mut self, probe: &CodepointSet) -> bool {
        self.scan(probe).is_full()
    }

    pub fn support_basic(&mut self, probe: &CodepointSet) -> bool {
        self.scan(probe).is_basic()
    }

    pub fn support_minimal(&mut self, probe: &CodepointSet) -> bool {
        self.scan(probe).is_minimal()
    }

    /// The level this orthography reaches against the probe set, if any.
    pub fn support_level(&mut self, probe: &CodepointSet) -> Option<SupportLevel> {
        self.scan(probe).support_level()
    }
}

impl fmt::Display for Orthography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Orthography \"{}\">", self.display_name())
    }
}

/// Replace `own` with the parent's set if `own` is empty and the parent's is not.
fn inherit(own: &mut Arc<CodepointSet>, parent: &Arc<CodepointSet>) -> bool {
    if own.is_empty() && !parent.is_empty() {
        *own = Arc::clone(parent);
        return true;
    }
    false
}
