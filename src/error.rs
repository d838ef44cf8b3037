//! Error types for the fallible edges of the crate.
//!
//! The scoring core is total and never returns these; they cover classifier
//! output validation and advisory table loading.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiagnosisError {
    #[error("expected {expected} class probabilities, got {actual}")]
    ProbabilityLength { expected: usize, actual: usize },

    #[error("class probability at index {index} is not a number")]
    ProbabilityNaN { index: usize },

    #[error("confidence must be a finite number, got {0}")]
    NonFiniteConfidence(f64),

    #[error("failed to read advisory tables from {path:?}")]
    TableLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse advisory tables from {path:?}")]
    TableParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, DiagnosisError>;
