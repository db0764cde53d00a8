use async_trait::async_trait;
use placement_core::{PredictionRequest, PredictionResult, ScoreSource, Scorer};

use crate::ApiClient;

/// Scorer backed by `POST /api/predict`.
#[derive(Debug, Clone)]
pub struct RemoteScorer {
    client: ApiClient,
}

impl RemoteScorer {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[async_trait]
impl Scorer for RemoteScorer {
    fn kind(&self) -> ScoreSource {
        ScoreSource::Remote
    }

    fn name(&self) -> &'static str {
        "remote-api"
    }

    async fn score(&self, request: &PredictionRequest) -> anyhow::Result<PredictionResult> {
        let response = self.client.predict(request).await?;
        if let Some(model_type) = response.model_type.as_deref() {
            tracing::debug!(target: "placement_network", model_type, "remote model answered");
        }
        Ok(response.into_result()?)
    }
}
