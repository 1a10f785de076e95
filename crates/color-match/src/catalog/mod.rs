//! Reference catalogs and nearest-match resolution
//!
//! Two builtin catalogs ship with the crate: artist acrylic paints
//! ([`GOLDEN_HEAVY_BODY_ACRYLICS`]) and coated print-ink swatches
//! ([`PANTONE_COLORS`]). Both are plain `static` tables; [`Catalog`] wraps a
//! table with validation and precomputed Lab values.

mod catalog;
mod entry;
mod error;
mod inks;
mod paints;

pub use catalog::{find_nearest, Catalog, Match, INK_CATALOG_NAME, PAINT_CATALOG_NAME};
pub use entry::{CatalogEntry, InkColor, PaintColor};
pub use error::{CatalogError, ParseColorError};
pub use inks::PANTONE_COLORS;
pub use paints::GOLDEN_HEAVY_BODY_ACRYLICS;
