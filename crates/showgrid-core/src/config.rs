//! Configuration types for showgrid.
//!
//! [`Config::load`] reads `~/.config/showgrid/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. The reviews endpoint may be
//! overridden by the `REVIEWS_ENDPOINT` environment variable, and again by the
//! caller via [`Config::with_endpoint`] (the `--endpoint` flag).
//! [`Config::defaults`] returns the built-in defaults without touching the
//! filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{date, error::ConfigError};

/// Environment variable holding the reviews endpoint URL.
pub const ENDPOINT_ENV: &str = "REVIEWS_ENDPOINT";

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[source]
# endpoint = "https://example.com/reviews.json"

[ui]
theme       = "default"
show_count  = true
date_format = "%B %Y"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// File the configuration was layered from, for error messages.
    #[serde(skip)]
    pub path: PathBuf,
}

/// `[source]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_show_count")]
    pub show_count: bool,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_theme() -> String { "default".to_string() }
fn default_show_count() -> bool { true }
fn default_date_format() -> String { date::MONTH_YEAR.to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_count: default_show_count(),
            date_format: default_date_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/showgrid/config.toml`, layered on top of the
    /// built-in defaults and under `REVIEWS_ENDPOINT`. Creates the file with
    /// defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load from an explicit file, which may be missing.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        Self::layered(Some(path), std::env::var(ENDPOINT_ENV).ok())
    }

    /// Built-in defaults under `REVIEWS_ENDPOINT`, without touching the
    /// filesystem. Used when the config file cannot be read or created.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::layered(None, std::env::var(ENDPOINT_ENV).ok())
    }

    /// Defaults, then `path`, then `env_endpoint`. A blank environment value
    /// does not mask the file.
    fn layered(path: Option<&Path>, env_endpoint: Option<String>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }
        let env_endpoint = env_endpoint.filter(|e| !e.trim().is_empty());
        let mut cfg: Config = builder
            .set_override_option("source.endpoint", env_endpoint)?
            .build()?
            .try_deserialize()?;
        cfg.path = path.map(Path::to_path_buf).unwrap_or_default();
        Ok(cfg)
    }

    /// Parse a configuration from TOML text layered on the defaults.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(src, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Override the endpoint when `endpoint` is set and not blank.
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.source.endpoint = Some(endpoint);
        }
        self
    }

    /// The configured endpoint. Empty values count as unset.
    pub fn endpoint(&self) -> Result<&str, ConfigError> {
        self.source
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::MissingEndpoint {
                path: self.path.display().to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Default config file location, honouring `XDG_CONFIG_HOME`.
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("showgrid")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
