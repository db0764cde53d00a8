use thiserror::Error;

/// Rejection raised by the input collector before any scorer is consulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("CGPA must be between 0 and 10")]
    Cgpa,
    #[error("IQ must be between 50 and 200")]
    Iq,
}
