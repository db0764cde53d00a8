use serde::{Deserialize, Serialize};

/// Which scorer produced a [`PredictionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    Remote,
    Local,
}

impl std::fmt::Display for ScoreSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ScoreSource::Remote => "remote",
            ScoreSource::Local => "local",
        };
        write!(f, "{label}")
    }
}

/// Outcome of a single scoring call. Fields are read-only once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    outcome: bool,
    confidence: f64,
    cgpa: f64,
    iq: f64,
    source: ScoreSource,
}

impl PredictionResult {
    pub fn new(outcome: bool, confidence: f64, cgpa: f64, iq: f64, source: ScoreSource) -> Self {
        Self {
            outcome,
            confidence,
            cgpa,
            iq,
            source,
        }
    }

    /// `true` when the candidate is predicted to be placed.
    pub fn outcome(&self) -> bool {
        self.outcome
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Confidence as a whole percentage, rounded half away from zero.
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }

    pub fn cgpa(&self) -> f64 {
        self.cgpa
    }

    pub fn iq(&self) -> f64 {
        self.iq
    }

    pub fn source(&self) -> ScoreSource {
        self.source
    }

    pub fn label(&self) -> &'static str {
        if self.outcome {
            "Placed"
        } else {
            "Not Placed"
        }
    }
}
