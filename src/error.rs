//! Error types for the analysis pipeline

use thiserror::Error;

/// Errors that can occur while building series or running analyses
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    #[error("invalid quantile: {0} (must be strictly between 0 and 1)")]
    InvalidQuantile(f64),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("configuration parse error: {0}")]
    ConfigParse(String),

    #[error("price series dates must be strictly increasing (violation at index {index})")]
    UnorderedDates { index: usize },

    #[error("price series length mismatch: {dates} dates vs {values} values")]
    LengthMismatch { dates: usize, values: usize },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
