use placement_core::{PredictionResult, ScoreSource};
use serde::Deserialize;

use crate::RemoteError;

/// Body of a successful `POST /api/predict`.
///
/// Only the four required fields are interpreted; servers may add more
/// (`message`, `fun_message`, `model_type`, ...) and those are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictResponse {
    pub prediction: u8,
    pub probability: f64,
    pub cgpa: f64,
    pub iq: f64,
    #[serde(default)]
    pub model_type: Option<String>,
}

impl PredictResponse {
    pub fn into_result(self) -> Result<PredictionResult, RemoteError> {
        let outcome = match self.prediction {
            0 => false,
            1 => true,
            other => {
                return Err(RemoteError::Malformed(format!(
                    "prediction must be 0 or 1, got {other}"
                )))
            }
        };
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(RemoteError::Malformed(format!(
                "probability {} outside [0, 1]",
                self.probability
            )));
        }
        Ok(PredictionResult::new(
            outcome,
            self.probability,
            self.cgpa,
            self.iq,
            ScoreSource::Remote,
        ))
    }
}
