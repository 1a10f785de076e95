//! Catalog entry types.
//!
//! Fields are `Cow<'static, str>` so the builtin tables can be `const` data
//! while catalogs loaded from configuration own their strings.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Anything that can sit in a [`Catalog`](super::Catalog): an entry only
/// needs to expose its reference color as a hex string.
pub trait CatalogEntry {
    /// The entry's reference color, `#RRGGBB`.
    fn hex(&self) -> &str;
}

/// A commercial paint color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaintColor {
    pub name: Cow<'static, str>,
    pub hex: Cow<'static, str>,
}

impl PaintColor {
    pub const fn new(name: &'static str, hex: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            hex: Cow::Borrowed(hex),
        }
    }
}

impl CatalogEntry for PaintColor {
    fn hex(&self) -> &str {
        &self.hex
    }
}

/// A standardized print-ink swatch, identified by its swatch code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InkColor {
    pub code: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub hex: Cow<'static, str>,
}

impl InkColor {
    pub const fn new(code: &'static str, name: &'static str, hex: &'static str) -> Self {
        Self {
            code: Cow::Borrowed(code),
            name: Cow::Borrowed(name),
            hex: Cow::Borrowed(hex),
        }
    }
}

impl CatalogEntry for InkColor {
    fn hex(&self) -> &str {
        &self.hex
    }
}

impl<E: CatalogEntry + ?Sized> CatalogEntry for &E {
    fn hex(&self) -> &str {
        (**self).hex()
    }
}
