use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use placement_core::{LocalScorer, PredictionRequest, PredictionResult, Scorer};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PredictError {
    #[error("a prediction is already in flight")]
    Busy,
}

/// Routes a request to the remote scorer and degrades to the embedded
/// band table when the remote side fails for any reason.
///
/// Only one prediction may be in flight at a time. A second call made while
/// the first is awaiting the remote scorer is rejected with
/// [`PredictError::Busy`] rather than queued.
pub struct Predictor {
    remote: Option<Box<dyn Scorer>>,
    local: LocalScorer,
    in_flight: AtomicBool,
    fallbacks: AtomicU64,
}

impl Predictor {
    pub fn new(remote: Box<dyn Scorer>) -> Self {
        Self {
            remote: Some(remote),
            local: LocalScorer,
            in_flight: AtomicBool::new(false),
            fallbacks: AtomicU64::new(0),
        }
    }

    /// Predictor that never leaves the process.
    pub fn offline() -> Self {
        Self {
            remote: None,
            local: LocalScorer,
            in_flight: AtomicBool::new(false),
            fallbacks: AtomicU64::new(0),
        }
    }

    pub fn is_offline(&self) -> bool {
        self.remote.is_none()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Number of times the remote scorer failed and the local table answered.
    pub fn fallback_count(&self) -> u64 {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictError> {
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(PredictError::Busy)?;

        let Some(remote) = self.remote.as_ref() else {
            tracing::debug!(target: "placement_broker", "offline; scoring locally");
            return Ok(self.local.evaluate(request));
        };

        match remote.score(request).await {
            Ok(result) => {
                tracing::debug!(
                    target: "placement_broker",
                    scorer = remote.name(),
                    outcome = result.outcome(),
                    confidence = result.confidence(),
                    "remote prediction"
                );
                Ok(result)
            }
            Err(error) => {
                self.fallbacks.fetch_add(1, Ordering::Relaxed);
                tracing::info!(
                    target: "placement_broker",
                    scorer = remote.name(),
                    error = %error,
                    "remote scorer unavailable; using local band table"
                );
                Ok(self.local.evaluate(request))
            }
        }
    }
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("remote", &self.remote.as_ref().map(|scorer| scorer.name()))
            .field("in_flight", &self.is_busy())
            .field("fallbacks", &self.fallback_count())
            .finish()
    }
}

/// Holds the trigger disabled until dropped, on every exit path.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_is_exclusive_and_released_on_drop() {
        let flag = AtomicBool::new(false);
        let first = InFlightGuard::acquire(&flag).expect("first acquire");
        assert!(InFlightGuard::acquire(&flag).is_none());
        drop(first);
        assert!(InFlightGuard::acquire(&flag).is_some());
    }

    #[tokio::test]
    async fn offline_predictor_scores_locally() {
        let predictor = Predictor::offline();
        let request = PredictionRequest::new(9.0, 140.0).unwrap();
        let result = predictor.predict(&request).await.unwrap();
        assert!(result.outcome());
        assert_eq!(result.confidence(), 1.0);
        assert_eq!(predictor.fallback_count(), 0);
        assert!(!predictor.is_busy());
    }
}
