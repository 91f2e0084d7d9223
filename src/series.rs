//! Price and return series types
//!
//! A [`PriceSeries`] is the raw input fetched from a market-data provider:
//! adjusted close prices keyed by strictly increasing dates. A
//! [`LogReturnSeries`] is derived from it on every request and is the series
//! all analysis products operate on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{AnalysisError, Result};

/// Ordered (date, adjusted close) series as returned by a provider.
///
/// Dates must be strictly increasing; prices may contain gaps (NaN) or
/// non-positive values, which are cleaned during the return transform rather
/// than rejected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub dates: Vec<NaiveDate>,
    pub values: Vec<f64>,
}

impl PriceSeries {
    /// Build a series from parallel date/price vectors.
    ///
    /// Fails if the vectors differ in length or the dates are not strictly
    /// increasing. An empty series is valid and means "no data".
    pub fn new(dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(AnalysisError::LengthMismatch {
                dates: dates.len(),
                values: values.len(),
            });
        }

        for (i, pair) in dates.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(AnalysisError::UnorderedDates { index: i + 1 });
            }
        }

        Ok(Self { dates, values })
    }

    /// Build a series from (date, price) pairs.
    pub fn from_pairs(pairs: Vec<(NaiveDate, f64)>) -> Result<Self> {
        let (dates, values) = pairs.into_iter().unzip();
        Self::new(dates, values)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// First and last date, or `None` for an empty series.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.dates.first(), self.dates.last()) {
            (Some(first), Some(last)) => Some((*first, *last)),
            _ => None,
        }
    }

    /// Sub-series restricted to `start..=end`.
    pub fn slice_range(&self, start: NaiveDate, end: NaiveDate) -> Self {
        let mut dates = Vec::new();
        let mut values = Vec::new();
        for (date, value) in self.dates.iter().zip(self.values.iter()) {
            if *date >= start && *date <= end {
                dates.push(*date);
                values.push(*value);
            }
        }
        // Order is inherited from self, so no re-validation needed.
        Self { dates, values }
    }
}

/// Log returns `ln(p[i] / p[i-1])` derived from a [`PriceSeries`].
///
/// Each return carries the date of the later price in its pair. Pairs whose
/// return is non-finite (zero, negative or missing prices) are dropped along
/// with their date, so the series stays aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogReturnSeries {
    pub dates: Vec<NaiveDate>,
    pub values: Vec<f64>,
}

impl LogReturnSeries {
    /// Derive log returns from consecutive price pairs.
    ///
    /// Never fails: if fewer than two usable prices remain the result is
    /// empty, which callers must treat as "insufficient data".
    pub fn from_prices(prices: &PriceSeries) -> Self {
        let mut dates = Vec::new();
        let mut values = Vec::new();
        let mut dropped = 0usize;

        for i in 1..prices.len() {
            let r = (prices.values[i] / prices.values[i - 1]).ln();
            if r.is_finite() {
                dates.push(prices.dates[i]);
                values.push(r);
            } else {
                dropped += 1;
            }
        }

        if dropped > 0 {
            warn!(dropped, kept = values.len(), "dropped non-finite log returns");
        }

        Self { dates, values }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Price and log-return sequences side by side, ready for time-series plots.
///
/// The return track is one element shorter than the price track for a clean
/// series and shorter still when returns were dropped during cleaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesData {
    pub price_dates: Vec<NaiveDate>,
    pub prices: Vec<f64>,
    pub return_dates: Vec<NaiveDate>,
    pub returns: Vec<f64>,
}

impl TimeSeriesData {
    pub fn new(prices: &PriceSeries, returns: &LogReturnSeries) -> Self {
        Self {
            price_dates: prices.dates.clone(),
            prices: prices.values.clone(),
            return_dates: returns.dates.clone(),
            returns: returns.values.clone(),
        }
    }
}
