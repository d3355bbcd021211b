//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `VIMKIT_<SECTION>__<KEY>`, e.g.
//!    `VIMKIT_PATHS__CONFIG_ROOT=/tmp/nvim`
//! 3. Config file (`--config`, or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where output goes and where catalog overlays live.
    pub paths: PathsConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Generation behaviour.
    pub generation: GenerationConfig,
    /// Log sinks.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub config_root: Option<PathBuf>,
    pub cache_root: Option<PathBuf>,
    /// Directory scanned for `*.toml` catalog overlays.
    pub catalog_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Skip every confirmation prompt.
    pub assume_yes: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to this file.
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; an explicit
    /// file must exist, the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);

        let settings = Config::builder()
            .add_source(Config::try_from(&Self::default()).context("invalid built-in defaults")?)
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(config_file.is_some()),
            )
            .add_source(
                Environment::with_prefix("VIMKIT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.vimkit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "vimkit", "vimkit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".vimkit.toml"))
    }

    /// `$XDG_CONFIG_HOME/nvim` unless configured.
    pub fn config_root(&self) -> Option<PathBuf> {
        self.paths.config_root.clone().or_else(|| {
            directories::BaseDirs::new().map(|dirs| dirs.config_dir().join("nvim"))
        })
    }

    /// `$XDG_CACHE_HOME/vim` unless configured.
    pub fn cache_root(&self) -> Option<PathBuf> {
        self.paths.cache_root.clone().or_else(|| {
            directories::BaseDirs::new().map(|dirs| dirs.cache_dir().join("vim"))
        })
    }

    pub fn catalog_dir(&self) -> Option<&Path> {
        self.paths.catalog_dir.as_deref()
    }
}
