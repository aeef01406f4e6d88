//! Scan results and support classification.

use serde::{Deserialize, Serialize};

use super::types::RequirementSets;
use crate::codepoints::CodepointSet;

/// Graduated support levels an orthography can reach against a probe set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportLevel {
    /// Every base, optional and punctuation character present
    Full,
    /// Base and punctuation complete, some optional characters missing
    Basic,
    /// Base complete, some optional and some punctuation characters missing
    Minimal,
}

impl SupportLevel {
    /// Returns all variants of `SupportLevel`
    pub fn variants() -> &'static [SupportLevel] {
        &[SupportLevel::Full, SupportLevel::Basic, SupportLevel::Minimal]
    }

    /// Returns a human-readable display name for this variant
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportLevel::Full => "Full",
            SupportLevel::Basic => "Basic",
            SupportLevel::Minimal => "Minimal",
        }
    }
}

/// Coverage of a single requirement tier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TierCoverage {
    /// Required characters absent from the probe set
    pub missing: CodepointSet,
    /// Size of the requirement set
    pub total: usize,
}

impl TierCoverage {
    fn compute(required: &CodepointSet, probe: &CodepointSet) -> Self {
        Self {
            missing: required.difference(probe).copied().collect(),
            total: required.len(),
        }
    }

    /// Number of missing characters.
    pub fn num_missing(&self) -> usize {
        self.missing.len()
    }

    /// Fraction of the tier present in the probe set.
    ///
    /// An empty tier reports `0.0`, not `1.0`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        1.0 - self.missing.len() as f64 / self.total as f64
    }
}

/// Result of comparing an orthography's requirements with a probe set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanResult {
    pub base: TierCoverage,
    pub optional: TierCoverage,
    pub punctuation: TierCoverage,
}

impl ScanResult {
    pub fn compute(requirements: &RequirementSets, probe: &CodepointSet) -> Self {
        Self {
            base: TierCoverage::compute(&requirements.base, probe),
            optional: TierCoverage::compute(&requirements.optional, probe),
            punctuation: TierCoverage::compute(&requirements.punctuation, probe),
        }
    }

    /// Whether the scanned orthography had no requirements at all.
    pub fn is_vacuous(&self) -> bool {
        self.base.total == 0 && self.optional.total == 0 && self.punctuation.total == 0
    }

    /// Nothing missing in any tier.
    ///
    /// An orthography without any requirements is never fully supported.
    pub fn is_full(&self) -> bool {
        !self.is_vacuous()
            && self.base.num_missing() == 0
            && self.optional.num_missing() == 0
            && self.punctuation.num_missing() == 0
    }

    /// Base and punctuation complete, optional incomplete.
    pub fn is_basic(&self) -> bool {
        self.base.num_missing() == 0
            && self.optional.num_missing() != 0
            && self.punctuation.num_missing() == 0
    }

    /// Base complete, optional and punctuation both incomplete.
    ///
    /// Base and optional complete with punctuation missing satisfies none of
    /// the three predicates.
    pub fn is_minimal(&self) -> bool {
        self.base.num_missing() == 0
            && self.optional.num_missing() != 0
            && self.punctuation.num_missing() != 0
    }

    /// The single level this result satisfies, if any.
    pub fn support_level(&self) -> Option<SupportLevel> {
        if self.is_full() {
            Some(SupportLevel::Full)
        } else if self.is_basic() {
            Some(SupportLevel::Basic)
        } else if self.is_minimal() {
            Some(SupportLevel::Minimal)
        } else {
            None
        }
    }

    /// Whether the result satisfies exactly the given level.
    pub fn satisfies(&self, level: SupportLevel) -> bool {
        match level {
            SupportLevel::Full => self.is_full(),
            SupportLevel::Basic => self.is_basic(),
            SupportLevel::Minimal => self.is_minimal(),
        }
    }
}
