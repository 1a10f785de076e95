pub mod enrichment;

pub use enrichment::{catalog_lines, EnrichmentService, MatchReport};
