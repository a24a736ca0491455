//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompatError {
    #[error("FEATURE/{0}")]
    InvalidFeatureKey(String),

    #[error("TARGET/{0}")]
    InvalidTarget(String),

    #[error("DATABASE/{0}")]
    Database(String),

    #[error("CONFIG/{0}")]
    Config(String),

    #[error("TEMPLATE/{0}")]
    Template(String),
}
