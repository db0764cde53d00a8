pub mod error;
pub mod history;
pub mod local;
pub mod messages;
pub mod request;
pub mod result;
pub mod sample;
pub mod scorer;
pub mod stats;

pub use error::ValidationError;
pub use history::{History, HistoryEntry, HISTORY_CAPACITY};
pub use local::LocalScorer;
pub use request::PredictionRequest;
pub use result::{PredictionResult, ScoreSource};
pub use sample::SampleStudent;
pub use scorer::Scorer;
pub use stats::{BackendStatus, StatsSummary};
