//! # riskview: Return-Distribution and Tail-Risk Analytics
//!
//! This library backs a market dashboard: given an adjusted-close price
//! series fetched from a data provider, it derives log returns and produces
//! the plain data structures the presentation layer renders.
//!
//! ## Products
//!
//! - **Tail risk**: empirical VaR and Expected Shortfall at a quantile
//! - **Histogram**: equal-width return histogram
//! - **Q-Q plots**: sample quantiles paired against Normal, Student-t,
//!   double-exponential and generalized-error references
//! - **Time series**: aligned price and return tracks for plotting
//! - **Summary**: moments of the return distribution
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use riskview::{AnalyzerConfig, PriceSeries, RiskAnalyzer};
//!
//! let dates: Vec<NaiveDate> = (1..=6)
//!     .map(|d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap())
//!     .collect();
//! let prices =
//!     PriceSeries::new(dates, vec![100.0, 101.5, 99.8, 102.0, 101.2, 103.4]).unwrap();
//!
//! // Pin the seed so Q-Q sampling is reproducible
//! let config = AnalyzerConfig {
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let analyzer = RiskAnalyzer::new(config).unwrap();
//! let report = analyzer.analyze(&prices);
//!
//! assert!(!report.is_insufficient());
//! let tail = report.tail_risk.unwrap();
//! assert!(tail.expected_shortfall.unwrap() <= tail.value_at_risk);
//! ```
//!
//! Analysis is synchronous and stateless: one call, one report. The only
//! randomized step is Q-Q sampling, controlled by `random_seed`; everything
//! else is a pure function of the input series.

pub mod analysis;
mod analyzer;
mod config;
mod error;
mod provider;
mod series;

pub use analysis::{
    HistogramData, QqPlot, QqPlotSet, ReferenceDistribution, ReturnSummary, TailRiskSummary,
};
pub use analyzer::{AnalysisReport, RiskAnalyzer};
pub use config::AnalyzerConfig;
pub use error::AnalysisError;
pub use provider::{InMemoryProvider, PriceProvider, ProviderError};
pub use series::{LogReturnSeries, PriceSeries, TimeSeriesData};
