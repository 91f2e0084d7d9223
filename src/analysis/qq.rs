//! Q-Q plot construction against reference distributions
//!
//! For each reference distribution a synthetic sample of the same size as the
//! observed return series is drawn, both sides are sorted ascending
//! independently, and the vectors are paired index-by-index. Draws are fresh
//! on every call, so output differs between calls unless the analyzer
//! configuration pins a random seed.

use rand::Rng;
use rand_distr::{Distribution, Gamma, Normal, StudentT};
use serde::{Deserialize, Serialize};
use statrs::distribution::Laplace;
use statrs::function::gamma::gamma;

use crate::error::{AnalysisError, Result};

/// Closed set of reference distributions the dashboard compares returns
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ReferenceDistribution {
    /// Standard normal
    Normal,

    /// Student-t with the given degrees of freedom, location 0, scale 1
    StudentT { degrees_of_freedom: f64 },

    /// Standard double-exponential (Laplace), location 0, scale 1
    Laplace,

    /// Generalized error distribution with the given shape, scaled to unit
    /// variance so that shape = 2 coincides with the standard normal
    GeneralizedError { shape: f64 },
}

impl ReferenceDistribution {
    /// Display label used by the presentation layer
    pub fn label(&self) -> &'static str {
        match self {
            ReferenceDistribution::Normal => "Normal",
            ReferenceDistribution::StudentT { .. } => "Student-t",
            ReferenceDistribution::Laplace => "Double-Exponential",
            ReferenceDistribution::GeneralizedError { .. } => "Generalized-Error",
        }
    }
}

/// Sampler for a single reference distribution.
///
/// Built once per analyzer so parameter validation happens up front and
/// drawing itself cannot fail.
#[derive(Debug, Clone)]
pub(crate) enum ReferenceSampler {
    Normal(Normal<f64>),
    StudentT(StudentT<f64>),
    Laplace(Laplace),
    GeneralizedError {
        magnitude: Gamma<f64>,
        scale: f64,
        inv_shape: f64,
    },
}

impl ReferenceSampler {
    pub(crate) fn new(reference: ReferenceDistribution) -> Result<Self> {
        match reference {
            ReferenceDistribution::Normal => {
                let normal = Normal::new(0.0, 1.0)
                    .map_err(|e| AnalysisError::InvalidParameter(e.to_string()))?;
                Ok(ReferenceSampler::Normal(normal))
            }
            ReferenceDistribution::StudentT { degrees_of_freedom } => {
                if !degrees_of_freedom.is_finite() || degrees_of_freedom <= 0.0 {
                    return Err(AnalysisError::InvalidParameter(format!(
                        "Student-t degrees of freedom must be positive, got {}",
                        degrees_of_freedom
                    )));
                }
                let student = StudentT::new(degrees_of_freedom)
                    .map_err(|e| AnalysisError::InvalidParameter(e.to_string()))?;
                Ok(ReferenceSampler::StudentT(student))
            }
            ReferenceDistribution::Laplace => {
                let laplace = Laplace::new(0.0, 1.0)
                    .map_err(|e| AnalysisError::InvalidParameter(e.to_string()))?;
                Ok(ReferenceSampler::Laplace(laplace))
            }
            ReferenceDistribution::GeneralizedError { shape } => {
                if !shape.is_finite() || shape <= 0.0 {
                    return Err(AnalysisError::InvalidParameter(format!(
                        "generalized-error shape must be positive, got {}",
                        shape
                    )));
                }
                let magnitude = Gamma::new(1.0 / shape, 1.0)
                    .map_err(|e| AnalysisError::InvalidParameter(e.to_string()))?;
                // Unit-variance scale: lambda = sqrt(Gamma(1/b) / Gamma(3/b))
                let scale = (gamma(1.0 / shape) / gamma(3.0 / shape)).sqrt();
                Ok(ReferenceSampler::GeneralizedError {
                    magnitude,
                    scale,
                    inv_shape: 1.0 / shape,
                })
            }
        }
    }

    pub(crate) fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            ReferenceSampler::Normal(normal) => normal.sample(rng),
            ReferenceSampler::StudentT(student) => student.sample(rng),
            ReferenceSampler::Laplace(laplace) => laplace.sample(rng),
            ReferenceSampler::GeneralizedError {
                magnitude,
                scale,
                inv_shape,
            } => {
                // |X/lambda|^shape ~ Gamma(1/shape, 1) with a random sign
                let g: f64 = magnitude.sample(rng);
                let x = scale * g.powf(*inv_shape);
                if rng.gen::<bool>() {
                    x
                } else {
                    -x
                }
            }
        }
    }
}

/// One theoretical-vs-sample quantile pairing.
///
/// `theoretical` and `sample` have equal length and are each sorted
/// ascending; point `i` of the plot is `(theoretical[i], sample[i])`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QqPlot {
    pub distribution: ReferenceDistribution,
    pub theoretical: Vec<f64>,
    pub sample: Vec<f64>,
}

/// Q-Q plots for every configured reference distribution, in a fixed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QqPlotSet {
    pub plots: Vec<QqPlot>,
}

impl QqPlotSet {
    pub fn len(&self) -> usize {
        self.plots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    /// Look up a plot by its display label.
    pub fn get(&self, label: &str) -> Option<&QqPlot> {
        self.plots.iter().find(|p| p.distribution.label() == label)
    }
}

pub(crate) fn build_plot_set<R: Rng + ?Sized>(
    references: &[(ReferenceDistribution, ReferenceSampler)],
    returns: &[f64],
    rng: &mut R,
) -> QqPlotSet {
    let mut sample: Vec<f64> = returns.iter().copied().filter(|r| r.is_finite()).collect();
    sample.sort_by(f64::total_cmp);

    let plots = references
        .iter()
        .map(|(reference, sampler)| {
            let mut theoretical: Vec<f64> =
                (0..sample.len()).map(|_| sampler.draw(rng)).collect();
            theoretical.sort_by(f64::total_cmp);
            QqPlot {
                distribution: *reference,
                theoretical,
                sample: sample.clone(),
            }
        })
        .collect();

    QqPlotSet { plots }
}

/// Build Q-Q plots for `returns` against the given reference distributions.
///
/// Fails on invalid distribution parameters or when no finite returns
/// remain. Sampling state comes from `rng`; pass a seeded RNG for
/// reproducible output.
pub fn qq_plot_set<R: Rng + ?Sized>(
    returns: &[f64],
    references: &[ReferenceDistribution],
    rng: &mut R,
) -> Result<QqPlotSet> {
    if !returns.iter().any(|r| r.is_finite()) {
        return Err(AnalysisError::InsufficientData(
            "no finite returns for Q-Q construction".to_string(),
        ));
    }

    let samplers = references
        .iter()
        .map(|reference| Ok((*reference, ReferenceSampler::new(*reference)?)))
        .collect::<Result<Vec<_>>>()?;

    Ok(build_plot_set(&samplers, returns, rng))
}
