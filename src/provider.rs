//! Upstream market-data boundary
//!
//! The analyzer never talks to a provider directly; it accepts the outcome of
//! a fetch and maps any failure to an "insufficient data" report. Retry
//! policy, if any, belongs to the provider implementation.

use std::collections::HashMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::series::PriceSeries;

/// Errors surfaced by a market-data provider
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("ticker not found: {0}")]
    TickerNotFound(String),

    #[error("no data for {ticker} between {start} and {end}")]
    EmptyRange {
        ticker: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("provider request failed: {0}")]
    Request(String),
}

/// Blocking price fetch for a ticker over a date range.
///
/// Implementations talk to an actual data vendor; the core only depends on
/// this trait.
pub trait PriceProvider {
    fn fetch_prices(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, ProviderError>;
}

/// Provider backed by preloaded series, for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    series: HashMap<String, PriceSeries>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a full price history for a ticker.
    pub fn insert(&mut self, ticker: impl Into<String>, series: PriceSeries) {
        self.series.insert(ticker.into(), series);
    }
}

impl PriceProvider for InMemoryProvider {
    fn fetch_prices(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, ProviderError> {
        let series = self
            .series
            .get(ticker)
            .ok_or_else(|| ProviderError::TickerNotFound(ticker.to_string()))?;

        let window = series.slice_range(start, end);
        if window.is_empty() {
            return Err(ProviderError::EmptyRange {
                ticker: ticker.to_string(),
                start,
                end,
            });
        }

        Ok(window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn sample_series() -> PriceSeries {
        PriceSeries::from_pairs(vec![
            (date(1), 100.0),
            (date(2), 101.0),
            (date(3), 99.5),
            (date(4), 102.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_fetch_full_range() {
        let mut provider = InMemoryProvider::new();
        provider.insert("ACME", sample_series());

        let series = provider.fetch_prices("ACME", date(1), date(4)).unwrap();
        assert_eq!(series.len(), 4);
    }

    #[test]
    fn test_fetch_sub_range() {
        let mut provider = InMemoryProvider::new();
        provider.insert("ACME", sample_series());

        let series = provider.fetch_prices("ACME", date(2), date(3)).unwrap();
        assert_eq!(series.dates, vec![date(2), date(3)]);
    }

    #[test]
    fn test_unknown_ticker() {
        let provider = InMemoryProvider::new();
        let result = provider.fetch_prices("NOPE", date(1), date(4));
        assert!(matches!(result, Err(ProviderError::TickerNotFound(_))));
    }

    #[test]
    fn test_empty_window() {
        let mut provider = InMemoryProvider::new();
        provider.insert("ACME", sample_series());

        let result = provider.fetch_prices("ACME", date(10), date(20));
        assert!(matches!(result, Err(ProviderError::EmptyRange { .. })));
    }
}
