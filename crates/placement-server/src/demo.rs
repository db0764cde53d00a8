/// `(threshold cgpa, threshold iq, probability)`, checked top to bottom with
/// strict comparisons. Every tier listed here predicts placement.
const TIERS: [(f64, f64, f64); 3] = [(7.0, 120.0, 0.85), (6.5, 110.0, 0.65), (6.0, 100.0, 0.45)];
const REJECT_PROBABILITY: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoPrediction {
    pub prediction: u8,
    pub probability: f64,
}

pub fn demo_prediction(cgpa: f64, iq: f64) -> DemoPrediction {
    TIERS
        .iter()
        .find(|(min_cgpa, min_iq, _)| cgpa > *min_cgpa && iq > *min_iq)
        .map_or(
            DemoPrediction {
                prediction: 0,
                probability: REJECT_PROBABILITY,
            },
            |(_, _, probability)| DemoPrediction {
                prediction: 1,
                probability: *probability,
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_use_strict_bounds() {
        assert_eq!(demo_prediction(7.1, 121.0).probability, 0.85);
        assert_eq!(demo_prediction(7.0, 121.0).probability, 0.65);
        assert_eq!(demo_prediction(6.6, 111.0).probability, 0.65);
        assert_eq!(demo_prediction(6.1, 101.0).probability, 0.45);
        assert_eq!(demo_prediction(6.1, 101.0).prediction, 1);
    }

    #[test]
    fn everything_else_is_rejected() {
        let rejected = demo_prediction(6.0, 100.0);
        assert_eq!(rejected.prediction, 0);
        assert_eq!(rejected.probability, 0.25);
        assert_eq!(demo_prediction(9.5, 95.0).prediction, 0);
    }
}
