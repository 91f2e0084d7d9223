//! # Analysis products
//!
//! Each submodule derives one independently renderable product from the same
//! log-return series:
//!
//! - `tail`: VaR and Expected Shortfall at a quantile
//! - `histogram`: equal-width return histogram
//! - `qq`: Q-Q pairings against reference distributions
//! - `summary`: moment summary of the return distribution

pub mod histogram;
pub mod qq;
pub mod summary;
pub mod tail;

pub use histogram::{histogram, HistogramData};
pub use qq::{qq_plot_set, QqPlot, QqPlotSet, ReferenceDistribution};
pub use summary::{return_summary, ReturnSummary};
pub use tail::{quantile_sorted, tail_risk, TailRiskSummary};
