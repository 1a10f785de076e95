//! Public error type for the color-match crate.
//!
//! [`MatchError`] is what every fallible matching, contrast and enrichment
//! operation returns.

mod error;

pub use error::MatchError;
