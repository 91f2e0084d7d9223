//! Analyzer configuration
//!
//! Typically loaded from YAML or JSON files; every field has a default so a
//! partial document is enough.

use serde::{Deserialize, Serialize};

use crate::analysis::qq::ReferenceDistribution;
use crate::error::{AnalysisError, Result};

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Quantile level for VaR/ES (strictly between 0 and 1)
    pub tail_quantile: f64,

    /// Number of equal-width histogram bins
    pub histogram_bins: usize,

    /// Degrees of freedom of the Student-t reference
    pub student_t_dof: f64,

    /// Shape of the generalized-error reference
    pub ged_shape: f64,

    /// Random seed for reproducible Q-Q sampling (None = entropy)
    pub random_seed: Option<u64>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            tail_quantile: 0.05,
            histogram_bins: 30,
            student_t_dof: 10.0,
            ged_shape: 1.5,
            random_seed: None,
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a YAML string.
    ///
    /// # Example
    ///
    /// ```
    /// use riskview::AnalyzerConfig;
    ///
    /// let config = AnalyzerConfig::from_yaml("tail_quantile: 0.01\nrandom_seed: 42\n").unwrap();
    /// assert_eq!(config.tail_quantile, 0.01);
    /// assert_eq!(config.histogram_bins, 30); // default
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| AnalysisError::ConfigParse(format!("failed to parse YAML: {}", e)))
    }

    /// Load configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| AnalysisError::ConfigParse(format!("failed to parse JSON: {}", e)))
    }

    /// The reference distributions the configuration implies, in the fixed
    /// order the dashboard renders them.
    pub fn reference_distributions(&self) -> Vec<ReferenceDistribution> {
        vec![
            ReferenceDistribution::Normal,
            ReferenceDistribution::StudentT {
                degrees_of_freedom: self.student_t_dof,
            },
            ReferenceDistribution::Laplace,
            ReferenceDistribution::GeneralizedError {
                shape: self.ged_shape,
            },
        ]
    }

    /// Validate parameter ranges.
    pub(crate) fn validate(&self) -> Result<()> {
        if !self.tail_quantile.is_finite()
            || self.tail_quantile <= 0.0
            || self.tail_quantile >= 1.0
        {
            return Err(AnalysisError::InvalidQuantile(self.tail_quantile));
        }

        if self.histogram_bins == 0 {
            return Err(AnalysisError::InvalidParameter(
                "histogram_bins must be positive".to_string(),
            ));
        }

        if !self.student_t_dof.is_finite() || self.student_t_dof <= 0.0 {
            return Err(AnalysisError::InvalidParameter(format!(
                "student_t_dof must be positive, got {}",
                self.student_t_dof
            )));
        }

        if !self.ged_shape.is_finite() || self.ged_shape <= 0.0 {
            return Err(AnalysisError::InvalidParameter(format!(
                "ged_shape must be positive, got {}",
                self.ged_shape
            )));
        }

        Ok(())
    }
}
