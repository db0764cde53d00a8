use std::time::Duration;

use anyhow::Result;
use placement_core::{PredictionRequest, SampleStudent, StatsSummary};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::PredictResponse;

pub const DEFAULT_API_BASE: &str = "http://localhost:5001/api";

/// Every way a call to the scoring service can fail.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Malformed(String),
}

/// Thin JSON client for the placement API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    api_base: String,
}

impl ApiClient {
    /// `timeout` of `None` leaves the transport default in place.
    pub fn new(api_base: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Ok(Self { client, api_base })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path)
    }

    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictResponse, RemoteError> {
        let url = self.endpoint("predict");
        tracing::debug!(
            target: "placement_network",
            url = %url,
            cgpa = request.cgpa(),
            iq = request.iq(),
            "POST predict"
        );
        let response = self.client.post(&url).json(request).send().await?;
        read_json(response).await
    }

    pub async fn stats(&self) -> Result<StatsSummary, RemoteError> {
        let url = self.endpoint("stats");
        tracing::debug!(target: "placement_network", url = %url, "GET stats");
        let response = self.client.get(&url).send().await?;
        read_json(response).await
    }

    pub async fn sample_data(&self) -> Result<Vec<SampleStudent>, RemoteError> {
        let url = self.endpoint("sample-data");
        tracing::debug!(target: "placement_network", url = %url, "GET sample-data");
        let response = self.client.get(&url).send().await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
    let status = response.status();
    if !status.is_success() {
        return Err(RemoteError::Status(status));
    }
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|error| RemoteError::Malformed(error.to_string()))
}
