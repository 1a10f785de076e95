//! Unified error type for the color-match public API.
//!
//! [`MatchError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use thiserror::Error;

use crate::catalog::{CatalogError, ParseColorError};

/// Unified error type for the color-match public API.
///
/// The two root causes are kept distinguishable so callers can tell bad
/// input from bad configuration:
///
/// - [`MatchError::MalformedColor`]: a query color is not 6-digit hex
/// - [`MatchError::InvalidCatalog`]: a catalog is empty or holds a malformed entry
///
/// Batch operations wrap either one in [`MatchError::Item`] to say which
/// palette item failed.
///
/// # Example
///
/// ```
/// use color_match::{Catalog, MatchError};
///
/// fn closest_paint(hex: &str) -> Result<String, MatchError> {
///     let hit = Catalog::paints().find_nearest_hex(hex)?;
///     Ok(hit.entry.name.to_string())
/// }
///
/// assert!(matches!(closest_paint("#12"), Err(MatchError::MalformedColor { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Input color is not exactly six hex digits after an optional '#'
    #[error("malformed color {hex:?}: {source}")]
    MalformedColor {
        /// The rejected input
        hex: String,
        #[source]
        source: ParseColorError,
    },

    /// Catalog is empty or contains an unparsable entry
    #[error("invalid catalog: {0}")]
    InvalidCatalog(#[from] CatalogError),

    /// A palette item failed during batch enrichment
    #[error("palette item {index}: {source}")]
    Item {
        /// Position of the failing item in the input
        index: usize,
        #[source]
        source: Box<MatchError>,
    },
}

impl MatchError {
    pub(crate) fn malformed(hex: &str, source: ParseColorError) -> Self {
        MatchError::MalformedColor {
            hex: hex.to_string(),
            source,
        }
    }

    /// Wrap this error as the failure of palette item `index`.
    pub fn at_item(self, index: usize) -> Self {
        MatchError::Item {
            index,
            source: Box::new(self),
        }
    }

    /// The underlying error with any [`MatchError::Item`] wrapping removed.
    pub fn root(&self) -> &MatchError {
        match self {
            MatchError::Item { source, .. } => source.root(),
            other => other,
        }
    }

    /// Index of the failing palette item, for batch errors.
    pub fn item_index(&self) -> Option<usize> {
        match self {
            MatchError::Item { index, .. } => Some(*index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_color_message() {
        let error = MatchError::malformed("#12", ParseColorError::InvalidLength(2));
        assert_eq!(
            error.to_string(),
            "malformed color \"#12\": invalid hex color length: expected 6 digits, got 2"
        );
    }

    #[test]
    fn test_invalid_catalog_from_catalog_error() {
        let error: MatchError = CatalogError::Empty {
            catalog: "paints".to_string(),
        }
        .into();
        assert_eq!(
            error.to_string(),
            "invalid catalog: catalog \"paints\" has no entries"
        );
        assert_eq!(error.item_index(), None);
    }

    #[test]
    fn test_item_wrapping() {
        let error = MatchError::malformed("zz", ParseColorError::InvalidLength(2)).at_item(4);
        assert_eq!(error.item_index(), Some(4));
        assert!(error.to_string().starts_with("palette item 4: malformed color"));
        assert!(matches!(error.root(), MatchError::MalformedColor { .. }));
    }
}
