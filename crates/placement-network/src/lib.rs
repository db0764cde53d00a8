pub mod client;
pub mod remote;
pub mod wire;

pub use client::{ApiClient, RemoteError, DEFAULT_API_BASE};
pub use remote::RemoteScorer;
pub use wire::PredictResponse;
