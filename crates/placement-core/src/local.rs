//! Embedded fallback scorer.
//!
//! The score is the sum of two independent step functions, one per input.
//! Each band table is ordered by descending inclusive lower bound; the first
//! band whose bound the value reaches wins, and values below every bound get
//! the floor points.

use async_trait::async_trait;

use crate::{PredictionRequest, PredictionResult, ScoreSource, Scorer};

const CGPA_BANDS: [(f64, u32); 6] = [
    (9.0, 60),
    (8.0, 50),
    (7.5, 40),
    (7.0, 30),
    (6.5, 20),
    (6.0, 10),
];
const CGPA_FLOOR: u32 = 5;

const IQ_BANDS: [(f64, u32); 5] = [
    (140.0, 40),
    (130.0, 35),
    (120.0, 30),
    (110.0, 20),
    (100.0, 10),
];
const IQ_FLOOR: u32 = 5;

/// Confidence must be strictly above this for a positive outcome.
pub const PLACEMENT_THRESHOLD: f64 = 0.5;

fn band_points(value: f64, bands: &[(f64, u32)], floor: u32) -> u32 {
    bands
        .iter()
        .find(|(lower, _)| value >= *lower)
        .map_or(floor, |(_, points)| *points)
}

pub fn cgpa_points(cgpa: f64) -> u32 {
    band_points(cgpa, &CGPA_BANDS, CGPA_FLOOR)
}

pub fn iq_points(iq: f64) -> u32 {
    band_points(iq, &IQ_BANDS, IQ_FLOOR)
}

/// Total points in `[10, 100]`.
pub fn local_score(request: &PredictionRequest) -> u32 {
    cgpa_points(request.cgpa()) + iq_points(request.iq())
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalScorer;

impl LocalScorer {
    pub fn evaluate(&self, request: &PredictionRequest) -> PredictionResult {
        let confidence = f64::from(local_score(request)) / 100.0;
        PredictionResult::new(
            confidence > PLACEMENT_THRESHOLD,
            confidence,
            request.cgpa(),
            request.iq(),
            ScoreSource::Local,
        )
    }
}

#[async_trait]
impl Scorer for LocalScorer {
    fn kind(&self) -> ScoreSource {
        ScoreSource::Local
    }

    fn name(&self) -> &'static str {
        "local-bands"
    }

    async fn score(&self, request: &PredictionRequest) -> anyhow::Result<PredictionResult> {
        Ok(self.evaluate(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn evaluate(cgpa: f64, iq: f64) -> PredictionResult {
        LocalScorer.evaluate(&PredictionRequest::new(cgpa, iq).unwrap())
    }

    #[test]
    fn top_bands_give_full_confidence() {
        let result = evaluate(9.0, 140.0);
        assert_eq!(result.confidence(), 1.0);
        assert!(result.outcome());
        assert_eq!(result.source(), ScoreSource::Local);
    }

    #[test]
    fn floor_bands_give_ten_percent() {
        let result = evaluate(5.9, 90.0);
        assert_eq!(result.confidence(), 0.10);
        assert!(!result.outcome());
    }

    #[test]
    fn exactly_half_is_not_placed() {
        let result = evaluate(7.0, 110.0);
        assert_eq!(result.confidence(), 0.50);
        assert!(!result.outcome());
    }

    #[test]
    fn cgpa_band_edges_are_inclusive() {
        let cases = [
            (10.0, 60),
            (9.0, 60),
            (8.99, 50),
            (8.0, 50),
            (7.5, 40),
            (7.49, 30),
            (7.0, 30),
            (6.5, 20),
            (6.0, 10),
            (5.99, 5),
            (0.0, 5),
        ];
        for (cgpa, points) in cases {
            assert_eq!(cgpa_points(cgpa), points, "cgpa {cgpa}");
        }
    }

    #[test]
    fn iq_band_edges_are_inclusive() {
        let cases = [
            (200.0, 40),
            (140.0, 40),
            (139.9, 35),
            (130.0, 35),
            (120.0, 30),
            (110.0, 20),
            (100.0, 10),
            (99.9, 5),
            (50.0, 5),
        ];
        for (iq, points) in cases {
            assert_eq!(iq_points(iq), points, "iq {iq}");
        }
    }

    #[test]
    fn echoes_inputs() {
        let result = evaluate(6.8, 123.0);
        assert_eq!(result.cgpa(), 6.8);
        assert_eq!(result.iq(), 123.0);
        assert_eq!(result.confidence(), 0.50);
    }

    #[tokio::test]
    async fn trait_path_matches_evaluate() {
        let request = PredictionRequest::new(8.1, 135.0).unwrap();
        let via_trait = LocalScorer.score(&request).await.unwrap();
        assert_eq!(via_trait, LocalScorer.evaluate(&request));
        assert_eq!(via_trait.confidence(), 0.85);
    }

    proptest! {
        #[test]
        fn scoring_is_deterministic(cgpa in 0.0f64..=10.0, iq in 50.0f64..=200.0) {
            let first = evaluate(cgpa, iq);
            let second = evaluate(cgpa, iq);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn confidence_is_bounded_and_drives_outcome(cgpa in 0.0f64..=10.0, iq in 50.0f64..=200.0) {
            let result = evaluate(cgpa, iq);
            prop_assert!((0.0..=1.0).contains(&result.confidence()));
            prop_assert_eq!(result.outcome(), result.confidence() > 0.5);
        }
    }
}
