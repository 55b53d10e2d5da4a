//! File source — reads a reviews payload from disk.

use std::path::Path;

use showgrid_core::{normalize, ReviewRecord};

use crate::FetchError;

pub async fn load(path: &Path) -> Result<Vec<ReviewRecord>, FetchError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let payload: serde_json::Value = serde_json::from_slice(&bytes)?;
    let records = normalize(payload);
    tracing::info!(path = %path.display(), records = records.len(), "reviews loaded from file");
    Ok(records)
}
