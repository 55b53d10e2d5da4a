//! showgrid-fetch — review source adapters for showgrid.
//!
//! A [`ReviewSource`] reads one JSON payload and hands it to
//! [`showgrid_core::normalize`]. Each load is a single attempt: there is no
//! retry and no partial result.

pub mod file;
pub mod http;

use std::path::PathBuf;

use showgrid_core::{config::Config, ConfigError, ReviewRecord};
use thiserror::Error;

pub use http::HttpSource;

/// Everything that can fail a load.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The endpoint answered with a non-2xx status.
    #[error("reviews fetch failed with status {status}")]
    Status { status: u16 },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where review payloads come from.
#[derive(Debug, Clone)]
pub enum ReviewSource {
    /// The configured HTTP endpoint.
    Http(HttpSource),
    /// A JSON file on disk with the same payload shapes as the endpoint.
    File(PathBuf),
}

impl ReviewSource {
    /// Build the HTTP source from configuration, failing early when no
    /// endpoint is configured.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let endpoint = config.endpoint()?;
        Ok(ReviewSource::Http(HttpSource::new(endpoint)?))
    }

    /// Fetch and normalise the full review set.
    pub async fn load(&self) -> Result<Vec<ReviewRecord>, FetchError> {
        match self {
            ReviewSource::Http(source) => source.fetch().await,
            ReviewSource::File(path) => file::load(path).await,
        }
    }

    /// Short human-readable description for status lines.
    pub fn describe(&self) -> String {
        match self {
            ReviewSource::Http(source) => source.endpoint().to_string(),
            ReviewSource::File(path) => path.display().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
