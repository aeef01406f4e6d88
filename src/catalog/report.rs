//! Aggregated support listings for one probe set.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Orthography names grouped by support level.
///
/// `basic` and `minimal` never repeat a name already listed in `full`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportReport {
    pub full: Vec<String>,
    pub basic: Vec<String>,
    pub minimal: Vec<String>,
}

impl SupportReport {
    /// Build a report from the raw sorted listings.
    pub(crate) fn from_listings(full: Vec<String>, basic: Vec<String>, minimal: Vec<String>) -> Self {
        let (basic, minimal): (Vec<String>, Vec<String>) = {
            let full_names: HashSet<&str> = full.iter().map(String::as_str).collect();
            let keep = |name: &String| !full_names.contains(name.as_str());
            (
                basic.into_iter().filter(keep).collect(),
                minimal.into_iter().filter(keep).collect(),
            )
        };
        Self {
            full,
            basic,
            minimal,
        }
    }

    /// Total number of names across all levels.
    pub fn len(&self) -> usize {
        self.full.len() + self.basic.len() + self.minimal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
