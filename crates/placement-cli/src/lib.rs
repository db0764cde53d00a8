pub mod cli;
pub mod config;
pub mod session;

pub use config::{Config, ConfigError};
pub use session::{Flow, Session, Submission};
