//! Return histogram construction

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Equal-width histogram of a return series.
///
/// `bin_edges` has one more element than `counts`; bin `i` covers
/// `[bin_edges[i], bin_edges[i + 1])`, with the final bin closed on the right
/// so the maximum observation is counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramData {
    pub bin_edges: Vec<f64>,
    pub counts: Vec<u64>,
}

impl HistogramData {
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn total_count(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Bucket values into `bins` equal-width bins spanning the observed min/max.
///
/// Non-finite values are ignored. A degenerate span (all values equal) is
/// widened before dividing so the bin width stays positive.
pub fn histogram(values: &[f64], bins: usize) -> Result<HistogramData> {
    if bins == 0 {
        return Err(AnalysisError::InvalidParameter(
            "histogram bin count must be positive".to_string(),
        ));
    }

    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Err(AnalysisError::InsufficientData(
            "no finite values to bucket".to_string(),
        ));
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in &finite {
        min = min.min(*v);
        max = max.max(*v);
    }

    if min == max {
        // Widen flat ranges so the width below is non-zero
        let adjust = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
        min -= adjust;
        max += adjust;
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0u64; bins];
    for v in &finite {
        let index = (((v - min) / width).floor() as usize).min(bins - 1);
        counts[index] += 1;
    }

    let bin_edges: Vec<f64> = (0..=bins).map(|i| min + width * i as f64).collect();

    Ok(HistogramData { bin_edges, counts })
}
