//! Catalog struct with precomputed Lab values and nearest-match resolution.
//!
//! A [`Catalog`] is validated once at construction: it is never empty and
//! every entry's hex parses. After that, matching cannot fail for a valid
//! query color.

use std::sync::LazyLock;

use super::entry::{CatalogEntry, InkColor, PaintColor};
use super::error::CatalogError;
use super::inks::PANTONE_COLORS;
use super::paints::GOLDEN_HEAVY_BODY_ACRYLICS;
use crate::api::MatchError;
use crate::color::Lab;

/// Display name of the builtin paint catalog.
pub const PAINT_CATALOG_NAME: &str = "Golden Heavy Body Acrylics";

/// Display name of the builtin ink catalog.
pub const INK_CATALOG_NAME: &str = "Pantone Coated";

/// Catalog name used in errors from [`find_nearest`], which works on bare slices.
const UNNAMED_CATALOG: &str = "unnamed";

static PAINTS: LazyLock<Catalog<PaintColor>> = LazyLock::new(|| {
    Catalog::new(PAINT_CATALOG_NAME, GOLDEN_HEAVY_BODY_ACRYLICS.to_vec())
        .expect("builtin paint catalog is valid")
});

static INKS: LazyLock<Catalog<InkColor>> = LazyLock::new(|| {
    Catalog::new(INK_CATALOG_NAME, PANTONE_COLORS.to_vec())
        .expect("builtin ink catalog is valid")
});

/// The winning entry of a nearest-match search.
#[derive(Debug, PartialEq)]
pub struct Match<'a, E> {
    /// Position of the entry in its catalog
    pub index: usize,
    /// The entry itself
    pub entry: &'a E,
    /// CIE76 distance between the query and the entry
    pub delta_e: f64,
}

impl<E> Clone for Match<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Match<'_, E> {}

impl<'a, E> Match<'a, E> {
    /// Replace the current best if `delta_e` is strictly smaller, so the
    /// first of several equally distant entries wins.
    #[inline]
    fn consider(&mut self, index: usize, entry: &'a E, delta_e: f64) {
        if delta_e < self.delta_e {
            *self = Match {
                index,
                entry,
                delta_e,
            };
        }
    }
}

/// A validated, immutable reference catalog.
///
/// Each entry's Lab value is computed once here instead of once per query.
///
/// # Example
///
/// ```
/// use color_match::{Catalog, Lab, PaintColor};
///
/// let catalog = Catalog::new(
///     "studio",
///     vec![
///         PaintColor::new("Black", "#000000"),
///         PaintColor::new("White", "#FFFFFF"),
///     ],
/// )
/// .unwrap();
///
/// let hit = catalog.find_nearest(Lab::from_hex("#202020").unwrap());
/// assert_eq!(hit.entry.name, "Black");
/// ```
#[derive(Debug, Clone)]
pub struct Catalog<E> {
    name: String,
    entries: Vec<E>,
    labs: Vec<Lab>,
}

impl<E: CatalogEntry> Catalog<E> {
    /// Build a catalog, parsing and converting every entry's color.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Empty`] if `entries` is empty
    /// - [`CatalogError::InvalidEntry`] for the first entry whose hex does not parse
    ///
    /// Duplicate colors are accepted.
    pub fn new(name: impl Into<String>, entries: Vec<E>) -> Result<Self, CatalogError> {
        let name = name.into();
        if entries.is_empty() {
            return Err(CatalogError::Empty { catalog: name });
        }

        let labs = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| entry_lab(&name, index, entry))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name,
            entries,
            labs,
        })
    }

    /// Catalog display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: empty catalogs are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    /// Entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&E> {
        self.entries.get(index)
    }

    /// Precomputed Lab value of the entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn lab(&self, index: usize) -> Lab {
        self.labs[index]
    }

    /// Find the entry perceptually closest to `query` (CIE76).
    ///
    /// Linear scan in catalog order; on equal distances the earliest entry
    /// wins.
    pub fn find_nearest(&self, query: Lab) -> Match<'_, E> {
        // Non-empty by construction
        let mut best = Match {
            index: 0,
            entry: &self.entries[0],
            delta_e: query.delta_e(self.labs[0]),
        };
        for (index, (entry, &lab)) in self.entries.iter().zip(&self.labs).enumerate().skip(1) {
            best.consider(index, entry, query.delta_e(lab));
        }
        best
    }

    /// Parse `hex` and find its nearest entry.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MalformedColor`] if `hex` is not a 6-digit hex color.
    pub fn find_nearest_hex(&self, hex: &str) -> Result<Match<'_, E>, MatchError> {
        let query = Lab::from_hex(hex).map_err(|source| MatchError::malformed(hex, source))?;
        Ok(self.find_nearest(query))
    }
}

impl Catalog<PaintColor> {
    /// The builtin paint catalog, shared process-wide.
    pub fn paints() -> &'static Self {
        &PAINTS
    }
}

impl Catalog<InkColor> {
    /// The builtin ink catalog, shared process-wide.
    pub fn inks() -> &'static Self {
        &INKS
    }
}

fn entry_lab<E: CatalogEntry>(catalog: &str, index: usize, entry: &E) -> Result<Lab, CatalogError> {
    Lab::from_hex(entry.hex()).map_err(|source| CatalogError::InvalidEntry {
        catalog: catalog.to_string(),
        index,
        hex: entry.hex().to_string(),
        source,
    })
}

/// Find the entry of `entries` perceptually closest to `query_hex`.
///
/// This is the one-shot form of [`Catalog::find_nearest_hex`] for callers
/// holding a plain slice: entries are converted on the fly rather than
/// precomputed, so prefer a [`Catalog`] when matching many colors.
///
/// # Errors
///
/// - [`MatchError::MalformedColor`] if `query_hex` is not a 6-digit hex color
/// - [`MatchError::InvalidCatalog`] if `entries` is empty or holds a malformed color
///
/// # Example
///
/// ```
/// use color_match::{find_nearest, InkColor, MatchError};
///
/// let inks = [
///     InkColor::new("PMS 186 C", "Red", "#C8102E"),
///     InkColor::new("PMS 300 C", "Blue", "#005EB8"),
/// ];
/// let hit = find_nearest("#C8102E", &inks).unwrap();
/// assert_eq!(hit.entry.code, "PMS 186 C");
/// assert_eq!(hit.delta_e, 0.0);
///
/// let empty: [InkColor; 0] = [];
/// assert!(matches!(
///     find_nearest("#C8102E", &empty),
///     Err(MatchError::InvalidCatalog(_))
/// ));
/// ```
pub fn find_nearest<'a, E: CatalogEntry>(
    query_hex: &str,
    entries: &'a [E],
) -> Result<Match<'a, E>, MatchError> {
    let query =
        Lab::from_hex(query_hex).map_err(|source| MatchError::malformed(query_hex, source))?;

    let Some((first, rest)) = entries.split_first() else {
        return Err(CatalogError::Empty {
            catalog: UNNAMED_CATALOG.to_string(),
        }
        .into());
    };

    let mut best = Match {
        index: 0,
        entry: first,
        delta_e: query.delta_e(entry_lab(UNNAMED_CATALOG, 0, first)?),
    };
    for (offset, entry) in rest.iter().enumerate() {
        let index = offset + 1;
        let lab = entry_lab(UNNAMED_CATALOG, index, entry)?;
        best.consider(index, entry, query.delta_e(lab));
    }
    Ok(best)
}
