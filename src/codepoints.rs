//! Code point sets used for requirements and probes.

use std::collections::BTreeSet;

/// An ordered set of Unicode code points.
///
/// Ordered so that missing-character listings come out the same on every run.
pub type CodepointSet = BTreeSet<char>;

/// Collect any iterator of characters into a probe set.
pub fn codepoint_set<I>(chars: I) -> CodepointSet
where
    I: IntoIterator<Item = char>,
{
    chars.into_iter().collect()
}

/// Collect raw scalar values, e.g. the keys of a font's cmap, into a probe set.
///
/// Values that are not Unicode scalar values (surrogates, out of range) are
/// skipped; some fonts map them anyway.
pub fn codepoint_set_from_scalars<I>(scalars: I) -> CodepointSet
where
    I: IntoIterator<Item = u32>,
{
    let mut skipped = 0usize;
    let set = scalars
        .into_iter()
        .filter_map(|value| {
            let c = char::from_u32(value);
            if c.is_none() {
                skipped += 1;
            }
            c
        })
        .collect();
    if skipped > 0 {
        log::debug!("Skipped {} non-scalar code points in probe set", skipped);
    }
    set
}
