pub mod config;
pub mod palette;

pub use config::{AppConfig, CatalogOverrides, OutputConfig};
pub use palette::PaletteDocument;
