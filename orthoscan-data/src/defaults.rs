//! Sentinel defaults for orthography identity.

/// Script used when a language entry does not name one.
pub const DEFAULT_SCRIPT: &str = "DFLT";

/// Territory used when a language entry does not name one.
///
/// Records in this territory are the parents other territories inherit from.
pub const DEFAULT_TERRITORY: &str = "dflt";
