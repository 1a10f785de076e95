//! Palette enrichment: contrast text color plus nearest paint and ink
//! match for every color of a palette.

mod enricher;
mod record;

pub use enricher::{enrich_palette, Enricher};
pub use record::{ColorRecord, EnrichedColor, PaintMatch, PantoneMatch};
