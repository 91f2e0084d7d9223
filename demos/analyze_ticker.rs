//! Full analysis walkthrough over a synthetic price history
//!
//! Demonstrates the provider boundary, a seeded analyzer, and every product
//! in the report.
//!
//! Run with: cargo run --example analyze_ticker

use chrono::NaiveDate;
use riskview::{AnalyzerConfig, InMemoryProvider, PriceSeries, RiskAnalyzer};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Return Distribution & Tail Risk Analysis ===\n");

    // 1. Register a synthetic price history with the provider
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad start date")?;
    let mut value = 100.0;
    let mut pairs = Vec::new();
    for day in 0..250u64 {
        let swing = ((day as f64) * 0.45).sin() * 0.015;
        let bias = if day % 23 == 0 { -0.02 } else { 0.001 };
        value *= 1.0 + swing + bias;
        let date = start
            .checked_add_days(chrono::Days::new(day))
            .ok_or("date overflow")?;
        pairs.push((date, value));
    }
    let end = pairs[pairs.len() - 1].0;

    let mut provider = InMemoryProvider::new();
    provider.insert("ACME", PriceSeries::from_pairs(pairs)?);
    info!(ticker = "ACME", days = 250, "registered price history");

    // 2. Configure a seeded analyzer for reproducible Q-Q output
    let config = AnalyzerConfig {
        tail_quantile: 0.05,
        random_seed: Some(42),
        ..Default::default()
    };
    let analyzer = RiskAnalyzer::new(config)?;

    // 3. Run the analysis
    let report = analyzer.analyze_ticker(&provider, "ACME", start, end);
    if report.is_insufficient() {
        println!("insufficient data, nothing to report");
        return Ok(());
    }

    // 4. Return summary
    if let Some(summary) = &report.summary {
        println!("--- Return Summary ---");
        println!("Observations: {}", summary.count);
        println!("Mean return:  {:>8.4}%", summary.mean * 100.0);
        if let Some(std_dev) = summary.std_dev {
            println!("Std dev:      {:>8.4}%", std_dev * 100.0);
        }
        if let Some(skew) = summary.skewness {
            println!("Skewness:     {:>8.4}", skew);
        }
        if let Some(kurt) = summary.excess_kurtosis {
            println!("Excess kurt:  {:>8.4}", kurt);
        }
        println!();
    }

    // 5. Tail risk
    if let Some(tail) = &report.tail_risk {
        println!("--- Tail Risk (q = {}) ---", tail.quantile);
        println!("VaR: {:>8.4}%", tail.value_at_risk * 100.0);
        match tail.expected_shortfall {
            Some(es) => println!(
                "ES:  {:>8.4}% (over {} tail observations)",
                es * 100.0,
                tail.tail_observations
            ),
            None => println!("ES:  undefined (no returns at or below VaR)"),
        }
        println!();
    }

    // 6. Histogram
    if let Some(hist) = &report.histogram {
        println!("--- Histogram ({} bins) ---", hist.bins());
        let peak = hist.counts.iter().copied().max().unwrap_or(1).max(1);
        for i in 0..hist.bins() {
            if hist.counts[i] == 0 {
                continue;
            }
            let bar_len = (hist.counts[i] * 40 / peak) as usize;
            println!(
                "[{:>8.4}, {:>8.4})  {:>3}  {}",
                hist.bin_edges[i] * 100.0,
                hist.bin_edges[i + 1] * 100.0,
                hist.counts[i],
                "#".repeat(bar_len.max(1))
            );
        }
        println!();
    }

    // 7. Q-Q pairings
    if let Some(qq) = &report.qq_plots {
        println!("--- Q-Q Plots (first/last pairings) ---");
        for plot in &qq.plots {
            let n = plot.sample.len();
            println!(
                "{:<20} ({:>7.4}, {:>7.4}) ... ({:>7.4}, {:>7.4})",
                plot.distribution.label(),
                plot.theoretical[0],
                plot.sample[0],
                plot.theoretical[n - 1],
                plot.sample[n - 1]
            );
        }
        println!();
    }

    println!("=== Analysis Complete ===");

    Ok(())
}
