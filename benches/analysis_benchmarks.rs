//! Benchmarks for the analysis pipeline
//!
//! Run with: cargo bench

use chrono::NaiveDate;
use riskview::{AnalyzerConfig, PriceSeries, RiskAnalyzer};

fn main() {
    println!("=== Analysis Pipeline Benchmarks ===\n");

    let prices = synthetic_prices(2_520); // ~10 years of trading days
    let config = AnalyzerConfig {
        random_seed: Some(42),
        ..Default::default()
    };
    let analyzer = RiskAnalyzer::new(config).expect("valid default config");

    benchmark_full_analysis(&analyzer, &prices);
    benchmark_products(&analyzer, &prices);
}

fn synthetic_prices(days: u64) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2014, 1, 1).expect("valid date");
    let mut value = 100.0;
    let mut pairs = Vec::with_capacity(days as usize);
    for day in 0..days {
        value *= 1.0 + ((day as f64) * 0.11).sin() * 0.01;
        let date = start
            .checked_add_days(chrono::Days::new(day))
            .expect("date in range");
        pairs.push((date, value));
    }
    PriceSeries::from_pairs(pairs).expect("ordered synthetic series")
}

fn benchmark_full_analysis(analyzer: &RiskAnalyzer, prices: &PriceSeries) {
    println!("## Full report ({} prices)", prices.len());

    let start = std::time::Instant::now();
    for _ in 0..100 {
        let _ = analyzer.analyze(prices);
    }
    let elapsed = start.elapsed();
    println!("  100 iterations: {:?}", elapsed);
    println!("  Average: {:?}", elapsed / 100);
    println!();
}

fn benchmark_products(analyzer: &RiskAnalyzer, prices: &PriceSeries) {
    use riskview::analysis::{histogram, return_summary, tail_risk};
    use riskview::LogReturnSeries;

    let returns = LogReturnSeries::from_prices(prices);
    println!("## Individual products ({} returns)", returns.len());

    let start = std::time::Instant::now();
    for _ in 0..1000 {
        let _ = LogReturnSeries::from_prices(prices);
    }
    println!("  Log-return transform (1000 iterations): {:?}", start.elapsed());

    let start = std::time::Instant::now();
    for _ in 0..1000 {
        let _ = tail_risk(&returns.values, analyzer.config().tail_quantile);
    }
    println!("  Tail risk (1000 iterations): {:?}", start.elapsed());

    let start = std::time::Instant::now();
    for _ in 0..1000 {
        let _ = histogram(&returns.values, analyzer.config().histogram_bins);
    }
    println!("  Histogram (1000 iterations): {:?}", start.elapsed());

    let start = std::time::Instant::now();
    for _ in 0..1000 {
        let _ = return_summary(&returns.values);
    }
    println!("  Summary (1000 iterations): {:?}", start.elapsed());
    println!();
}
