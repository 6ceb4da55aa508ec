//! Session-level errors
//!
//! Configuration and catalog problems are fatal and are reported before any
//! worker starts. Numeric overflow is not an error here: it is a per-equation
//! `Magnitude::Overflow`.

use crate::catalog::CatalogError;
use thiserror::Error;

/// Invalid search parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("MaxExponent must be at least 0, got {0}")]
    NegativeMaxExponent(i64),

    #[error("MagnitudeDeviation must be greater than 1, got {0}")]
    InvalidRange(f64),

    #[error("At least one search worker is required")]
    NoWorkers,

    #[error("{constants} constants with MaxExponent={max_exponent} give more than 2^64 equations")]
    SpaceTooLarge { constants: usize, max_exponent: i64 },
}

/// Errors that stop a search session
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Refusing to search an empty constant catalog")]
    EmptyCatalog,

    #[error("Could not start search worker: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("Search worker {0} panicked")]
    WorkerPanicked(usize),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for session operations
pub type SearchResult<T> = Result<T, SearchError>;
