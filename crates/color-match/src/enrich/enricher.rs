//! Enricher -- the primary entry point for palette enrichment.
//!
//! [`Enricher`] pairs a paint catalog with an ink catalog and applies
//! contrast selection plus nearest matching to each record of a palette.

use std::borrow::Cow;
use std::str::FromStr;

use super::record::{ColorRecord, EnrichedColor, ENRICHED_KEYS};
use crate::api::MatchError;
use crate::catalog::{Catalog, InkColor, PaintColor};
use crate::color::{Lab, Rgb};
use crate::contrast::TextColor;

/// Palette enrichment over a paint catalog and an ink catalog.
///
/// # Design
///
/// - [`Enricher::builtin()`] uses the shared builtin catalogs without
///   copying them
/// - [`Enricher::new()`] takes caller-supplied catalogs, for example ones
///   loaded from configuration
/// - [`enrich()`](Self::enrich) takes `&self`, so one enricher serves any
///   number of palettes
///
/// Items are independent of each other: item `i`'s result depends only on
/// item `i`'s hex.
///
/// # Example
///
/// ```
/// use color_match::{ColorRecord, Enricher, TextColor};
///
/// let enricher = Enricher::builtin();
/// let palette = vec![ColorRecord::new("#FF0000", "Red", "d")];
/// let enriched = enricher.enrich(palette).unwrap();
///
/// assert_eq!(enriched.len(), 1);
/// assert_eq!(enriched[0].text_color, TextColor::White);
/// assert!(enriched[0].matching_paint.is_some());
/// assert!(enriched[0].matching_pantone.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Enricher {
    paints: Cow<'static, Catalog<PaintColor>>,
    inks: Cow<'static, Catalog<InkColor>>,
}

impl Enricher {
    /// Create an enricher over the given catalogs.
    pub fn new(paints: Catalog<PaintColor>, inks: Catalog<InkColor>) -> Self {
        Self {
            paints: Cow::Owned(paints),
            inks: Cow::Owned(inks),
        }
    }

    /// Create an enricher over the builtin paint and ink catalogs.
    pub fn builtin() -> Self {
        Self {
            paints: Cow::Borrowed(Catalog::paints()),
            inks: Cow::Borrowed(Catalog::inks()),
        }
    }

    /// The paint catalog in use.
    pub fn paint_catalog(&self) -> &Catalog<PaintColor> {
        &self.paints
    }

    /// The ink catalog in use.
    pub fn ink_catalog(&self) -> &Catalog<InkColor> {
        &self.inks
    }

    /// Enrich a single record.
    ///
    /// Output fields left over from an earlier enrichment (for example
    /// when a saved palette is fed back in) are dropped from the
    /// passthrough fields and recomputed.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MalformedColor`] if the record's hex is not a
    /// 6-digit hex color.
    pub fn enrich_one(&self, record: &ColorRecord) -> Result<EnrichedColor, MatchError> {
        let rgb = Rgb::from_str(&record.hex)
            .map_err(|source| MatchError::malformed(&record.hex, source))?;
        let lab = Lab::from(rgb);

        let paint = self.paints.find_nearest(lab);
        let ink = self.inks.find_nearest(lab);

        let mut record = record.clone();
        for key in ENRICHED_KEYS {
            record.extra.shift_remove(key);
        }

        Ok(EnrichedColor {
            record,
            text_color: TextColor::for_background(rgb),
            matching_paint: Some(paint.entry.clone()),
            matching_pantone: Some(ink.entry.clone()),
        })
    }

    /// Enrich a whole palette, preserving order and length.
    ///
    /// # Errors
    ///
    /// The first failing item aborts the batch with [`MatchError::Item`],
    /// which names the item's index and wraps the cause. No partial
    /// result is returned.
    pub fn enrich(&self, records: Vec<ColorRecord>) -> Result<Vec<EnrichedColor>, MatchError> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| self.enrich_one(record).map_err(|e| e.at_item(index)))
            .collect()
    }
}

impl Default for Enricher {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Enrich a palette against the builtin catalogs.
///
/// Shorthand for `Enricher::builtin().enrich(records)`.
pub fn enrich_palette(records: Vec<ColorRecord>) -> Result<Vec<EnrichedColor>, MatchError> {
    Enricher::builtin().enrich(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn two_tone() -> Enricher {
        Enricher::new(
            Catalog::new(
                "two-tone paints",
                vec![
                    PaintColor::new("Lamp Black", "#000000"),
                    PaintColor::new("Flake White", "#FFFFFF"),
                ],
            )
            .unwrap(),
            Catalog::new(
                "two-tone inks",
                vec![
                    InkColor::new("K", "Black", "#000000"),
                    InkColor::new("W", "White", "#FFFFFF"),
                ],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_default_uses_builtin_catalogs() {
        let enricher = Enricher::default();
        assert_eq!(enricher.paint_catalog().len(), Catalog::paints().len());
        assert_eq!(enricher.ink_catalog().len(), Catalog::inks().len());
    }

    #[test]
    fn test_injected_catalogs_are_used() {
        let enricher = two_tone();
        let dark = enricher
            .enrich_one(&ColorRecord::new("#1A1A1A", "Soot", ""))
            .unwrap();
        assert_eq!(dark.matching_paint.unwrap().name, "Lamp Black");
        assert_eq!(dark.matching_pantone.unwrap().code, "K");

        let light = enricher
            .enrich_one(&ColorRecord::new("#EEEEEE", "Chalk", ""))
            .unwrap();
        assert_eq!(light.matching_paint.unwrap().name, "Flake White");
        assert_eq!(light.matching_pantone.unwrap().code, "W");
    }

    #[test]
    fn test_enrich_one_copies_record() {
        let record = ColorRecord::new("#FFD100", "Sun", "petals").with_extra("rank", 2);
        let enriched = Enricher::builtin().enrich_one(&record).unwrap();
        assert_eq!(enriched.record, record);
        assert_eq!(enriched.text_color, TextColor::Black);
    }

    #[test]
    fn test_enrich_one_drops_stale_output_fields() {
        let record = ColorRecord::new("#000000", "Night", "")
            .with_extra("textColor", "#000000")
            .with_extra("matchingPaint", json!({"name": "Wrong", "hex": "#123456"}))
            .with_extra("keep", true);

        let enriched = two_tone().enrich_one(&record).unwrap();
        assert_eq!(enriched.text_color, TextColor::White);
        assert_eq!(enriched.record.extra.len(), 1);
        assert_eq!(enriched.record.extra["keep"], json!(true));
        assert_eq!(enriched.matching_paint.unwrap().name, "Lamp Black");
    }

    #[test]
    fn test_enrich_preserves_order_and_length() {
        let records = vec![
            ColorRecord::new("#FFFFFF", "a", ""),
            ColorRecord::new("#000000", "b", ""),
            ColorRecord::new("#FFFFFF", "c", ""),
        ];
        let enriched = two_tone().enrich(records).unwrap();
        let names: Vec<&str> = enriched.iter().map(|e| e.record.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_enrich_empty_palette() {
        assert_eq!(Enricher::builtin().enrich(Vec::new()).unwrap(), Vec::new());
    }

    #[test]
    fn test_enrich_aborts_on_first_malformed_item() {
        let records = vec![
            ColorRecord::new("#FFFFFF", "ok", ""),
            ColorRecord::new("#12", "short", ""),
            ColorRecord::new("nope", "also bad", ""),
        ];
        let error = Enricher::builtin().enrich(records).unwrap_err();
        assert_eq!(error.item_index(), Some(1));
        match error.root() {
            MatchError::MalformedColor { hex, .. } => assert_eq!(hex, "#12"),
            other => panic!("Expected MalformedColor, got {other:?}"),
        }
    }

    #[test]
    fn test_enrich_palette_shorthand() {
        let enriched = enrich_palette(vec![ColorRecord::new("#FF0000", "Red", "d")]).unwrap();
        assert_eq!(enriched[0].text_color, TextColor::White);
    }
}
