use crate::assets::AssetLoader;
use crate::error::AppError;
use color_match::{Catalog, Enricher, InkColor, MatchError, PaintColor};
use serde::{Deserialize, Serialize};

/// Catalog name reported for a paint list loaded from config
pub const CUSTOM_PAINTS_NAME: &str = "custom paints";

/// Catalog name reported for an ink list loaded from config
pub const CUSTOM_INKS_NAME: &str = "custom inks";

/// Application configuration loaded from config.yaml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Replacement reference catalogs
    #[serde(default)]
    pub catalogs: CatalogOverrides,

    /// Output formatting
    #[serde(default)]
    pub output: OutputConfig,
}

/// Catalog replacements; `None` keeps the builtin catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogOverrides {
    #[serde(default)]
    pub paints: Option<Vec<PaintColor>>,

    #[serde(default)]
    pub inks: Option<Vec<InkColor>>,
}

/// JSON output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Indent JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text
    ///
    /// An empty or comment-only document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_value(value)?)
    }

    /// Load configuration from AssetLoader (embedded or external)
    ///
    /// A missing external file falls back to the embedded config; a file
    /// that exists but does not parse is an error.
    pub fn load_from_assets(loader: &AssetLoader) -> Result<Self, AppError> {
        let content = loader.read_config_string()?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            source = %loader.config_source(),
            custom_paints = config.catalogs.paints.as_ref().map_or(0, Vec::len),
            custom_inks = config.catalogs.inks.as_ref().map_or(0, Vec::len),
            pretty = config.output.pretty,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Paint catalog to match against: the override if given, else builtin
    pub fn paint_catalog(&self) -> Result<Catalog<PaintColor>, MatchError> {
        match self.catalogs.paints {
            Some(ref paints) => Ok(Catalog::new(CUSTOM_PAINTS_NAME, paints.clone())?),
            None => Ok(Catalog::paints().clone()),
        }
    }

    /// Ink catalog to match against: the override if given, else builtin
    pub fn ink_catalog(&self) -> Result<Catalog<InkColor>, MatchError> {
        match self.catalogs.inks {
            Some(ref inks) => Ok(Catalog::new(CUSTOM_INKS_NAME, inks.clone())?),
            None => Ok(Catalog::inks().clone()),
        }
    }

    /// Build the enricher this configuration describes
    ///
    /// # Errors
    ///
    /// [`MatchError::InvalidCatalog`] if an override is empty or holds a
    /// malformed hex value.
    pub fn enricher(&self) -> Result<Enricher, MatchError> {
        if self.catalogs.paints.is_none() && self.catalogs.inks.is_none() {
            return Ok(Enricher::builtin());
        }
        Ok(Enricher::new(self.paint_catalog()?, self.ink_catalog()?))
    }
}
