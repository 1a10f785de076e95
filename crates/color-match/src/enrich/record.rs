//! Palette item types flowing through the enrichment pipeline.
//!
//! Records come from outside (a generative model response, a saved file, a
//! test fixture) and may carry fields this crate knows nothing about. Those
//! are kept in [`ColorRecord::extra`] and written back out unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::{InkColor, PaintColor};
use crate::contrast::TextColor;

/// A paint match is a copy of the winning paint catalog entry.
pub type PaintMatch = PaintColor;

/// An ink match is a copy of the winning ink catalog entry.
pub type PantoneMatch = InkColor;

/// Output keys computed by enrichment. Stale copies of these are dropped
/// from [`ColorRecord::extra`] before a record is enriched again.
pub(crate) const ENRICHED_KEYS: [&str; 3] = ["textColor", "matchingPaint", "matchingPantone"];

/// One raw palette color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRecord {
    /// Color as `#RRGGBB` (validated when enriched, not when deserialized)
    pub hex: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Any other fields, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ColorRecord {
    pub fn new(
        hex: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            hex: hex.into(),
            name: name.into(),
            description: description.into(),
            extra: Map::new(),
        }
    }

    /// Add a passthrough field.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// A palette color with its computed text color and catalog matches.
///
/// Serializes flat, with the record's fields first:
///
/// ```json
/// {"hex": "#FF0000", "name": "Red", "description": "d",
///  "textColor": "#FFFFFF",
///  "matchingPaint": {"name": "...", "hex": "..."},
///  "matchingPantone": {"code": "...", "name": "...", "hex": "..."}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedColor {
    #[serde(flatten)]
    pub record: ColorRecord,
    pub text_color: TextColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_paint: Option<PaintMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_pantone: Option<PantoneMatch>,
}
