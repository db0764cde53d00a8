//! Demo implementation of the placement scoring API.
//!
//! - `demo.rs`: tiered heuristic used when no trained model is available
//! - `dataset.rs`: summary stats from a CSV dataset, with demo fallback
//! - `app.rs`: axum router, handlers and error bodies

pub mod app;
pub mod dataset;
pub mod demo;

pub use app::{router, serve};
pub use dataset::{load_stats, resolve_stats};
