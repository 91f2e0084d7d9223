//! Analysis orchestration
//!
//! [`RiskAnalyzer`] validates its configuration once at construction; after
//! that a call to [`RiskAnalyzer::analyze`] cannot fail. Inputs that clean
//! down to an empty return series produce [`AnalysisReport::insufficient`],
//! the uniform fallback shape the presentation layer renders.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analysis::histogram::{histogram, HistogramData};
use crate::analysis::qq::{build_plot_set, QqPlotSet, ReferenceDistribution, ReferenceSampler};
use crate::analysis::summary::{return_summary, ReturnSummary};
use crate::analysis::tail::{tail_risk, TailRiskSummary};
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::provider::{PriceProvider, ProviderError};
use crate::series::{LogReturnSeries, PriceSeries, TimeSeriesData};

/// Everything one analysis request produces.
///
/// Every product is `None` when the input had fewer than two usable prices
/// (or the upstream fetch failed); otherwise every product is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: Option<ReturnSummary>,
    pub histogram: Option<HistogramData>,
    pub qq_plots: Option<QqPlotSet>,
    pub time_series: Option<TimeSeriesData>,
    pub tail_risk: Option<TailRiskSummary>,
}

impl AnalysisReport {
    /// The uniform "insufficient data" report.
    pub fn insufficient() -> Self {
        Self {
            summary: None,
            histogram: None,
            qq_plots: None,
            time_series: None,
            tail_risk: None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        self.summary.is_none()
            && self.histogram.is_none()
            && self.qq_plots.is_none()
            && self.time_series.is_none()
            && self.tail_risk.is_none()
    }
}

/// Risk and distribution analyzer.
///
/// One analyzer can serve any number of independent requests; it holds no
/// per-request state. Q-Q sampling is the only randomized step and draws
/// from a fresh RNG per call, seeded from the configuration when a seed is
/// set.
pub struct RiskAnalyzer {
    config: AnalyzerConfig,
    references: Vec<(ReferenceDistribution, ReferenceSampler)>,
}

impl RiskAnalyzer {
    /// Create an analyzer, validating the configuration and reference
    /// distribution parameters up front.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;

        let references = config
            .reference_distributions()
            .into_iter()
            .map(|reference| Ok((reference, ReferenceSampler::new(reference)?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { config, references })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run the full analysis over a price series.
    ///
    /// Derives the log-return series, then computes each product
    /// independently over it. Returns the insufficient report when fewer
    /// than two usable prices remain.
    pub fn analyze(&self, prices: &PriceSeries) -> AnalysisReport {
        let returns = LogReturnSeries::from_prices(prices);
        debug!(
            prices = prices.len(),
            returns = returns.len(),
            "running analysis"
        );

        if returns.is_empty() {
            return AnalysisReport::insufficient();
        }

        let mut rng = match self.config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        // Returns are non-empty and finite and the configuration is
        // validated, so each product call succeeds.
        AnalysisReport {
            summary: return_summary(&returns.values).ok(),
            histogram: histogram(&returns.values, self.config.histogram_bins).ok(),
            qq_plots: Some(build_plot_set(&self.references, &returns.values, &mut rng)),
            time_series: Some(TimeSeriesData::new(prices, &returns)),
            tail_risk: tail_risk(&returns.values, self.config.tail_quantile).ok(),
        }
    }

    /// Analyze the outcome of an upstream fetch.
    ///
    /// Any provider failure becomes the insufficient report; the core never
    /// retries.
    pub fn analyze_fetch(
        &self,
        fetched: std::result::Result<PriceSeries, ProviderError>,
    ) -> AnalysisReport {
        match fetched {
            Ok(prices) => self.analyze(&prices),
            Err(e) => {
                warn!(error = %e, "upstream fetch failed, reporting insufficient data");
                AnalysisReport::insufficient()
            }
        }
    }

    /// Fetch a ticker through a provider and analyze the result.
    pub fn analyze_ticker<P: PriceProvider>(
        &self,
        provider: &P,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AnalysisReport {
        self.analyze_fetch(provider.fetch_prices(ticker, start, end))
    }
}
