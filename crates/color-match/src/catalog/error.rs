//! Error types for catalog operations
//!
//! This module provides error types for color parsing and catalog validation.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when a string is not exactly six hexadecimal digits after the
/// optional `#` prefix is removed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Wrong number of characters after stripping '#' (payload: actual count)
    #[error("invalid hex color length: expected 6 digits, got {0}")]
    InvalidLength(usize),

    /// A character that is not a hexadecimal digit
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),

    /// Channel parse failure reported by the integer parser
    #[error("invalid hex value: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for catalog validation.
///
/// Any of these means the catalog cannot produce a meaningful nearest match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No entries provided
    #[error("catalog {catalog:?} has no entries")]
    Empty {
        /// Catalog display name
        catalog: String,
    },

    /// An entry whose hex value does not parse
    #[error("catalog {catalog:?} entry {index} has invalid color {hex:?}: {source}")]
    InvalidEntry {
        /// Catalog display name
        catalog: String,
        /// Position of the entry in the catalog
        index: usize,
        /// The offending hex string
        hex: String,
        #[source]
        source: ParseColorError,
    },
}
