use std::fmt;

use color_match::{
    Catalog, CatalogEntry, EnrichedColor, Enricher, InkColor, Lab, MatchError, PaintColor, Rgb,
    TextColor,
};

use crate::error::AppError;
use crate::models::{AppConfig, PaletteDocument};

/// Nearest paint and ink for a single query color
#[derive(Debug, Clone, PartialEq)]
pub struct MatchReport {
    /// Query as given
    pub hex: String,
    pub text_color: TextColor,
    pub paint: PaintColor,
    pub paint_delta_e: f64,
    pub ink: InkColor,
    pub ink_delta_e: f64,
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  (text {})", self.hex, self.text_color.hex())?;
        writeln!(
            f,
            "  paint  {} {}  dE {:.2}",
            self.paint.name, self.paint.hex, self.paint_delta_e
        )?;
        write!(
            f,
            "  ink    {} {} {}  dE {:.2}",
            self.ink.code, self.ink.name, self.ink.hex, self.ink_delta_e
        )
    }
}

/// Palette enrichment as the command line sees it: configured catalogs,
/// JSON in, JSON out
pub struct EnrichmentService {
    enricher: Enricher,
    pretty: bool,
}

impl EnrichmentService {
    /// Build the service from configuration
    ///
    /// Catalog overrides are validated here, before any palette is read.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let enricher = config.enricher()?;
        tracing::info!(
            paints = %enricher.paint_catalog().name(),
            paint_count = enricher.paint_catalog().len(),
            inks = %enricher.ink_catalog().name(),
            ink_count = enricher.ink_catalog().len(),
            "Catalogs ready"
        );
        Ok(Self {
            enricher,
            pretty: config.output.pretty,
        })
    }

    pub fn paint_catalog(&self) -> &Catalog<PaintColor> {
        self.enricher.paint_catalog()
    }

    pub fn ink_catalog(&self) -> &Catalog<InkColor> {
        self.enricher.ink_catalog()
    }

    /// Whether output is indented unless the caller asks otherwise
    pub fn pretty(&self) -> bool {
        self.pretty
    }

    /// Enrich every record of a palette document
    pub fn enrich_document(&self, doc: PaletteDocument) -> Result<Vec<EnrichedColor>, AppError> {
        let count = doc.len();
        let enriched = self.enricher.enrich(doc.into_records()).inspect_err(|e| {
            tracing::warn!(item = ?e.item_index(), error = %e.root(), "Enrichment failed");
        })?;

        for item in &enriched {
            tracing::debug!(
                hex = %item.record.hex,
                text = item.text_color.hex(),
                paint = item.matching_paint.as_ref().map(|p| &*p.name),
                ink = item.matching_pantone.as_ref().map(|i| &*i.code),
                "Enriched color"
            );
        }
        tracing::info!(items = count, "Enriched palette");
        Ok(enriched)
    }

    /// Parse a palette document and enrich it
    pub fn enrich_json(&self, content: &str) -> Result<Vec<EnrichedColor>, AppError> {
        let doc = PaletteDocument::from_json(content)?;
        self.enrich_document(doc)
    }

    /// Serialize enriched colors as a JSON array
    ///
    /// `compact` forces single-line output regardless of configuration.
    pub fn render(&self, enriched: &[EnrichedColor], compact: bool) -> Result<String, AppError> {
        let result = if self.pretty && !compact {
            serde_json::to_string_pretty(enriched)
        } else {
            serde_json::to_string(enriched)
        };
        result.map_err(|e| AppError::Encode(e.to_string()))
    }

    /// Nearest paint and ink for one hex color
    pub fn match_hex(&self, hex: &str) -> Result<MatchReport, MatchError> {
        let rgb: Rgb = hex.parse().map_err(|source| MatchError::MalformedColor {
            hex: hex.to_string(),
            source,
        })?;
        let query = Lab::from(rgb);
        let paint = self.paint_catalog().find_nearest(query);
        let ink = self.ink_catalog().find_nearest(query);

        tracing::debug!(
            hex,
            paint = %paint.entry.name,
            paint_index = paint.index,
            ink = %ink.entry.code,
            ink_index = ink.index,
            "Matched color"
        );

        Ok(MatchReport {
            hex: hex.to_string(),
            text_color: TextColor::for_background(rgb),
            paint: paint.entry.clone(),
            paint_delta_e: paint.delta_e,
            ink: ink.entry.clone(),
            ink_delta_e: ink.delta_e,
        })
    }

    /// Nearest matches for several colors; stops at the first malformed one
    pub fn match_all<S: AsRef<str>>(&self, hexes: &[S]) -> Result<Vec<MatchReport>, MatchError> {
        hexes
            .iter()
            .enumerate()
            .map(|(index, hex)| {
                self.match_hex(hex.as_ref())
                    .map_err(|e| e.at_item(index))
            })
            .collect()
    }
}

/// One line per catalog entry, for `palette-snoop catalog`
pub fn catalog_lines<E, F>(catalog: &Catalog<E>, label: F) -> Vec<String>
where
    E: CatalogEntry,
    F: Fn(&E) -> String,
{
    catalog
        .entries()
        .iter()
        .map(|entry| format!("{:<40} {}", label(entry), entry.hex()))
        .collect()
}
