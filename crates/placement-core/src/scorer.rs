use async_trait::async_trait;

use crate::{PredictionRequest, PredictionResult, ScoreSource};

#[async_trait]
pub trait Scorer: Send + Sync {
    fn kind(&self) -> ScoreSource;
    fn name(&self) -> &'static str;
    async fn score(&self, request: &PredictionRequest) -> anyhow::Result<PredictionResult>;
}
