//! Tail-risk estimation
//!
//! Implements the one-sided tail measures reported by the dashboard:
//! - VaR: empirical quantile of the return distribution, with linear
//!   interpolation between order statistics
//! - Expected Shortfall: mean of all returns at or below VaR

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// VaR and Expected Shortfall at a single quantile level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailRiskSummary {
    /// Quantile level the summary was computed at (e.g. 0.05)
    pub quantile: f64,

    /// Empirical q-quantile of the return distribution
    pub value_at_risk: f64,

    /// Mean of all returns <= VaR. `None` when no return qualifies, which
    /// can happen for degenerate inputs; this is reported as explicitly
    /// undefined rather than coerced to zero.
    pub expected_shortfall: Option<f64>,

    /// Number of observations that entered the shortfall mean
    pub tail_observations: usize,
}

/// Empirical quantile of an ascending-sorted slice.
///
/// Uses linear interpolation between order statistics at `q * (n - 1)`,
/// matching the standard estimator. Returns `None` for an empty slice.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let q = q.clamp(0.0, 1.0);
    let n = sorted.len();
    let position = q * (n - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;

    if lower == upper {
        return Some(sorted[lower]);
    }

    let weight = position - lower as f64;
    Some(sorted[lower] * (1.0 - weight) + sorted[upper] * weight)
}

/// Compute VaR and Expected Shortfall over a return series.
///
/// Non-finite values are filtered before sorting. Fails with
/// [`AnalysisError::InvalidQuantile`] for a quantile outside (0, 1) and with
/// [`AnalysisError::InsufficientData`] when no finite returns remain.
pub fn tail_risk(returns: &[f64], quantile: f64) -> Result<TailRiskSummary> {
    if quantile <= 0.0 || quantile >= 1.0 {
        return Err(AnalysisError::InvalidQuantile(quantile));
    }

    let mut sorted: Vec<f64> = returns.iter().copied().filter(|r| r.is_finite()).collect();
    if sorted.is_empty() {
        return Err(AnalysisError::InsufficientData(
            "no finite returns for tail-risk estimation".to_string(),
        ));
    }
    sorted.sort_by(f64::total_cmp);

    let Some(value_at_risk) = quantile_sorted(&sorted, quantile) else {
        return Err(AnalysisError::InsufficientData(
            "no finite returns for tail-risk estimation".to_string(),
        ));
    };

    let tail: Vec<f64> = sorted
        .iter()
        .copied()
        .take_while(|r| *r <= value_at_risk)
        .collect();

    let expected_shortfall = if tail.is_empty() {
        None
    } else {
        Some(tail.iter().sum::<f64>() / tail.len() as f64)
    };

    Ok(TailRiskSummary {
        quantile,
        value_at_risk,
        expected_shortfall,
        tail_observations: tail.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_returns() -> Vec<f64> {
        vec![
            -0.05, -0.03, -0.02, -0.01, 0.00,
            0.01, 0.02, 0.03, 0.04, 0.05,
            -0.04, 0.01, 0.02, -0.01, 0.03,
            0.00, -0.02, 0.01, 0.02, -0.01,
        ]
    }

    #[test]
    fn test_quantile_interpolation() {
        let sorted = vec![1.0, 2.0, 3.0, 4.0];
        // position = 0.5 * 3 = 1.5 -> midpoint of 2.0 and 3.0
        assert_eq!(quantile_sorted(&sorted, 0.5), Some(2.5));
        assert_eq!(quantile_sorted(&sorted, 0.0), Some(1.0));
        assert_eq!(quantile_sorted(&sorted, 1.0), Some(4.0));
        assert_eq!(quantile_sorted(&[], 0.5), None);
    }

    #[test]
    fn test_median_quantile_matches_median() {
        let summary = tail_risk(&[0.03, -0.01, 0.02, -0.02, 0.01], 0.5).unwrap();
        assert!((summary.value_at_risk - 0.01).abs() < 1e-12);

        // Even length interpolates between the two middle order statistics
        let summary = tail_risk(&[0.04, 0.01, 0.02, 0.03], 0.5).unwrap();
        assert!((summary.value_at_risk - 0.025).abs() < 1e-12);
    }

    #[test]
    fn test_var_and_es_ordering() {
        let summary = tail_risk(&create_test_returns(), 0.05).unwrap();

        assert!(summary.value_at_risk < 0.0);
        let es = summary.expected_shortfall.unwrap();
        assert!(es <= summary.value_at_risk);
        assert!(summary.tail_observations >= 1);
    }

    #[test]
    fn test_constant_returns() {
        let summary = tail_risk(&[0.0, 0.0, 0.0], 0.05).unwrap();

        assert_eq!(summary.value_at_risk, 0.0);
        // Every return satisfies <= VaR, so the shortfall is defined and zero
        assert_eq!(summary.expected_shortfall, Some(0.0));
        assert_eq!(summary.tail_observations, 3);
    }

    #[test]
    fn test_two_equal_returns_boundary() {
        let r = (1.1f64).ln();
        let summary = tail_risk(&[r, r], 0.05).unwrap();

        assert!((summary.value_at_risk - r).abs() < 1e-12);
        assert_eq!(summary.expected_shortfall, Some(summary.value_at_risk));
    }

    #[test]
    fn test_invalid_quantile() {
        assert!(matches!(
            tail_risk(&[0.01, 0.02], 0.0),
            Err(AnalysisError::InvalidQuantile(_))
        ));
        assert!(matches!(
            tail_risk(&[0.01, 0.02], 1.0),
            Err(AnalysisError::InvalidQuantile(_))
        ));
        assert!(tail_risk(&[0.01, 0.02], 1.5).is_err());
    }

    #[test]
    fn test_empty_and_non_finite_input() {
        assert!(matches!(
            tail_risk(&[], 0.05),
            Err(AnalysisError::InsufficientData(_))
        ));
        assert!(tail_risk(&[f64::NAN, f64::INFINITY], 0.05).is_err());
    }

    #[test]
    fn test_non_finite_values_ignored() {
        let summary = tail_risk(&[f64::NAN, -0.02, 0.01, 0.03], 0.5).unwrap();
        assert!((summary.value_at_risk - 0.01).abs() < 1e-12);
    }
}
