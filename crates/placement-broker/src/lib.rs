pub mod broker;
pub mod connectivity;

pub use broker::{PredictError, Predictor};
pub use connectivity::{check_backend, Connectivity};
