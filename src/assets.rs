//! Config loading with an embedded fallback
//!
//! The default `config.yaml` is compiled into the binary:
//!
//! - If no config path is given (no `--config`, no `CONFIG_FILE`): use the embedded config
//! - If a path is given and the file exists: use the file
//! - If a path is given but the file is missing: warn and use the embedded config

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

const CONFIG_NAME: &str = "config.yaml";

/// Where the active configuration comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Compiled-in default, no path configured
    Embedded,
    /// External file that exists
    File(PathBuf),
    /// Path configured but nothing there; the embedded default is used
    Missing(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Embedded => write!(f, "embedded"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Missing(path) => {
                write!(f, "embedded ({} not found)", path.display())
            }
        }
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Config loader with optional filesystem override
pub struct AssetLoader {
    /// External config file path (from `--config` or the CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// `config_file` should be `Some` only if a path was configured.
    /// If `None`, the embedded config is used exclusively.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Create a loader from the CONFIG_FILE env var
    pub fn from_env() -> Self {
        Self::new(std::env::var("CONFIG_FILE").ok().map(PathBuf::from))
    }

    /// Where [`read_config`](Self::read_config) will read from
    pub fn config_source(&self) -> ConfigSource {
        match self.config_file {
            Some(ref path) if path.exists() => ConfigSource::File(path.clone()),
            Some(ref path) => ConfigSource::Missing(path.clone()),
            None => ConfigSource::Embedded,
        }
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        match self.config_source() {
            ConfigSource::File(path) => {
                tracing::debug!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(&path)?));
            }
            ConfigSource::Missing(path) => {
                tracing::warn!(
                    path = %path.display(),
                    "Config file not found, using embedded default"
                );
            }
            ConfigSource::Embedded => {}
        }

        EmbeddedConfig::get(CONFIG_NAME)
            .map(|f| {
                tracing::debug!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write the embedded config to the configured path (init command)
    ///
    /// Uses `./config.yaml` if no path is configured. An existing file is
    /// left alone unless `force` is set.
    pub fn init(&self, force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        let path = self
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("./config.yaml"));

        if !force && path.exists() {
            report.skipped.push(path.display().to_string());
            return Ok(report);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        if let Some(data) = EmbeddedConfig::get(CONFIG_NAME) {
            fs::write(&path, &*data.data)?;
            tracing::info!(path = %path.display(), "Wrote default config");
            report.written.push(path.display().to_string());
        }

        Ok(report)
    }

    /// List embedded assets (for display)
    pub fn list_embedded() -> Vec<String> {
        EmbeddedConfig::iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_present() {
        assert_eq!(AssetLoader::list_embedded(), vec!["config.yaml".to_string()]);
        let loader = AssetLoader::new(None);
        assert_eq!(loader.config_source(), ConfigSource::Embedded);
        let content = loader.read_config_string().unwrap();
        assert!(content.contains("pretty: true"));
    }

    #[test]
    fn test_external_config_preferred() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "output:\n  pretty: false\n").unwrap();

        let loader = AssetLoader::new(Some(path.clone()));
        assert_eq!(loader.config_source(), ConfigSource::File(path));
        assert_eq!(
            loader.read_config_string().unwrap(),
            "output:\n  pretty: false\n"
        );
    }

    #[test]
    fn test_missing_external_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");

        let loader = AssetLoader::new(Some(path.clone()));
        assert_eq!(loader.config_source(), ConfigSource::Missing(path));
        assert!(loader.read_config_string().unwrap().contains("pretty: true"));
    }

    #[test]
    fn test_config_source_display() {
        assert_eq!(ConfigSource::Embedded.to_string(), "embedded");
        assert_eq!(
            ConfigSource::Missing(PathBuf::from("x.yaml")).to_string(),
            "embedded (x.yaml not found)"
        );
    }

    #[test]
    fn test_init_writes_then_skips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let loader = AssetLoader::new(Some(path.clone()));

        let first = loader.init(false).unwrap();
        assert_eq!(first.written.len(), 1);
        assert!(first.skipped.is_empty());
        assert!(path.exists());

        fs::write(&path, "# edited\n").unwrap();
        let second = loader.init(false).unwrap();
        assert!(second.written.is_empty());
        assert_eq!(second.skipped.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# edited\n");

        let forced = loader.init(true).unwrap();
        assert_eq!(forced.written.len(), 1);
        assert!(fs::read_to_string(&path).unwrap().contains("pretty: true"));
    }
}
