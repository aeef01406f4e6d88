//! Typed error variants for the orthoscan crate.

use orthoscan_data::SourceError;
use thiserror::Error;

/// Errors that can occur while building an [`OrthographyCatalog`](crate::OrthographyCatalog).
///
/// Lookups, scans and classification never fail; only the dataset boundary
/// does.
#[derive(Error, Debug)]
pub enum OrthographyError {
    /// The source dataset was malformed.
    #[error(transparent)]
    Source(#[from] SourceError),
}
