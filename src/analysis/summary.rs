//! Moment summary of a return series
//!
//! The headline numbers shown next to the distribution plots. Spread and
//! shape statistics are undefined for very short or flat series and are
//! reported as `None` in that case.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

// Spread below this is treated as flat; moment ratios would be noise.
const MIN_SPREAD: f64 = 1e-12;

/// Descriptive statistics of a return series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,

    /// Sample standard deviation (n - 1); `None` for fewer than 2 values
    pub std_dev: Option<f64>,

    /// Central-moment skewness `m3 / m2^1.5`; `None` below 3 values or for a
    /// flat series
    pub skewness: Option<f64>,

    /// Excess kurtosis `m4 / m2^2 - 3`; `None` below 4 values or for a flat
    /// series
    pub excess_kurtosis: Option<f64>,
}

/// Summarize a return series, ignoring non-finite values.
pub fn return_summary(values: &[f64]) -> Result<ReturnSummary> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Err(AnalysisError::InsufficientData(
            "no finite values to summarize".to_string(),
        ));
    }

    let n = finite.len() as f64;
    let mean = finite.iter().sum::<f64>() / n;

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut m2 = 0.0;
    let mut m3 = 0.0;
    let mut m4 = 0.0;
    for v in &finite {
        min = min.min(*v);
        max = max.max(*v);
        let d = v - mean;
        m2 += d * d;
        m3 += d * d * d;
        m4 += d * d * d * d;
    }
    m2 /= n;
    m3 /= n;
    m4 /= n;

    let std_dev = if finite.len() >= 2 {
        Some((m2 * n / (n - 1.0)).sqrt())
    } else {
        None
    };

    let skewness = if finite.len() >= 3 && m2 > MIN_SPREAD * MIN_SPREAD {
        Some(m3 / m2.powf(1.5))
    } else {
        None
    };

    let excess_kurtosis = if finite.len() >= 4 && m2 > MIN_SPREAD * MIN_SPREAD {
        Some(m4 / (m2 * m2) - 3.0)
    } else {
        None
    };

    Ok(ReturnSummary {
        count: finite.len(),
        mean,
        min,
        max,
        std_dev,
        skewness,
        excess_kurtosis,
    })
}
