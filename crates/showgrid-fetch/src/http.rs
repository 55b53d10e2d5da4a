//! HTTP source — a single `GET` against the configured reviews endpoint.

use reqwest::header::{HeaderValue, ACCEPT};
use showgrid_core::{normalize, ReviewRecord};

use crate::FetchError;

#[derive(Debug, Clone)]
pub struct HttpSource {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("showgrid/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { endpoint: endpoint.into(), client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the payload and normalise it.
    ///
    /// Any 2xx status is success. The body is decoded as JSON regardless of
    /// the response content type.
    pub async fn fetch(&self) -> Result<Vec<ReviewRecord>, FetchError> {
        tracing::info!(endpoint = %self.endpoint, "fetching reviews");

        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(endpoint = %self.endpoint, status = status.as_u16(), "reviews fetch rejected");
            return Err(FetchError::Status { status: status.as_u16() });
        }

        let body = response.bytes().await?;
        let payload: serde_json::Value = serde_json::from_slice(&body)?;
        let records = normalize(payload);

        tracing::info!(
            endpoint = %self.endpoint,
            status = status.as_u16(),
            bytes = body.len(),
            records = records.len(),
            "reviews loaded"
        );
        Ok(records)
    }
}
