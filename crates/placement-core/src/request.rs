use std::ops::RangeInclusive;

use serde::Serialize;

use crate::ValidationError;

pub const CGPA_RANGE: RangeInclusive<f64> = 0.0..=10.0;
pub const IQ_RANGE: RangeInclusive<f64> = 50.0..=200.0;

/// A validated pair of scorer inputs.
///
/// Serializes to the `{cgpa, iq}` body expected by `POST /api/predict`.
/// The only way to obtain one is through [`PredictionRequest::new`] or
/// [`PredictionRequest::parse`], so every value handed to a scorer is in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionRequest {
    cgpa: f64,
    iq: f64,
}

impl PredictionRequest {
    pub fn new(cgpa: f64, iq: f64) -> Result<Self, ValidationError> {
        // NaN fails `contains`, so it is rejected along with out-of-range values.
        if !CGPA_RANGE.contains(&cgpa) {
            return Err(ValidationError::Cgpa);
        }
        if !IQ_RANGE.contains(&iq) {
            return Err(ValidationError::Iq);
        }
        Ok(Self { cgpa, iq })
    }

    /// Validate raw text fields as typed by the user.
    pub fn parse(cgpa: &str, iq: &str) -> Result<Self, ValidationError> {
        let cgpa = cgpa.trim().parse::<f64>().map_err(|_| ValidationError::Cgpa)?;
        let iq = iq.trim().parse::<f64>().map_err(|_| ValidationError::Iq)?;
        Self::new(cgpa, iq)
    }

    pub fn cgpa(&self) -> f64 {
        self.cgpa
    }

    pub fn iq(&self) -> f64 {
        self.iq
    }
}
