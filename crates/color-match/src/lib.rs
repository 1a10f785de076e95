#![allow(clippy::module_inception)]

//! color-match: perceptual color matching against reference catalogs
//!
//! Given a palette of hex colors, this library picks a legible text color
//! for each swatch and finds the closest commercial paint and print-ink
//! swatch from builtin (or caller-supplied) catalogs.
//!
//! # Quick Start
//!
//! [`enrich_palette`] runs the whole pipeline against the builtin catalogs:
//!
//! ```
//! use color_match::{enrich_palette, ColorRecord, TextColor};
//!
//! let palette = vec![
//!     ColorRecord::new("#FF0000", "Red", "poppy"),
//!     ColorRecord::new("#F4F3EE", "Paper", "background"),
//! ];
//! let enriched = enrich_palette(palette).unwrap();
//!
//! assert_eq!(enriched[0].text_color, TextColor::White);
//! assert_eq!(enriched[1].text_color, TextColor::Black);
//! assert_eq!(
//!     enriched[1].matching_paint.as_ref().unwrap().name,
//!     "Titanium White"
//! );
//! ```
//!
//! Individual steps are available on their own:
//!
//! ```
//! use color_match::{contrast_color, Catalog, Lab, TextColor};
//!
//! assert_eq!(contrast_color("#000000").unwrap(), TextColor::White);
//!
//! let ink = Catalog::inks().find_nearest(Lab::from_hex("#C8102E").unwrap());
//! assert_eq!(ink.delta_e, 0.0);
//! ```
//!
//! # Color Science
//!
//! ## Matching in CIE L\*a\*b\*
//!
//! sRGB is an encoding, not a perceptual space: two pairs of colors the same
//! RGB distance apart can look very differently far apart. Catalog matching
//! therefore converts every color to CIE L\*a\*b\* (D65 white) and compares
//! with the CIE76 difference, the plain Euclidean distance:
//!
//! ```text
//! dE = sqrt((L1 - L2)^2 + (a1 - a2)^2 + (b1 - b2)^2)
//! ```
//!
//! A dE around 2.3 is the conventional just-noticeable difference.
//!
//! ```text
//! "#RRGGBB"
//!     |
//!     v
//! Rgb        (8-bit channels)
//!     |      gamma decode, scale to 0..100, sRGB primaries
//!     v
//! Xyz        (D65, Y of white = 100)
//!     |      normalize by white, cube root / linear segment
//!     v
//! Lab        (L 0..100)
//! ```
//!
//! All arithmetic is `f64`, so results are reproducible across platforms to
//! well below the precision any catalog is authored at.
//!
//! ## Text Contrast in YIQ
//!
//! Choosing between black and white text needs only a brightness estimate,
//! so [`contrast_color`] uses the YIQ luma `(299 R + 587 G + 114 B) / 1000`
//! on the raw 8-bit channels with a threshold of 128.
//!
//! ## Ties and Duplicates
//!
//! Catalogs may contain the same color twice. Resolution is a linear scan
//! that only replaces the best candidate on a strictly smaller distance, so
//! the earliest entry always wins a tie.

pub mod api;
pub mod catalog;
pub mod color;
pub mod contrast;
pub mod enrich;


pub use api::MatchError;
pub use catalog::{
    find_nearest, Catalog, CatalogEntry, CatalogError, InkColor, Match, PaintColor,
    ParseColorError, GOLDEN_HEAVY_BODY_ACRYLICS, INK_CATALOG_NAME, PAINT_CATALOG_NAME,
    PANTONE_COLORS,
};
pub use color::{delta_e, Lab, Rgb, Xyz, D65_WHITE};
pub use contrast::{contrast_color, yiq_luma, TextColor};
pub use enrich::{enrich_palette, ColorRecord, EnrichedColor, Enricher, PaintMatch, PantoneMatch};
