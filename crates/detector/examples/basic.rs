//! Basic example demonstrating streaming anomaly detection
//!
//! Run with: cargo run --example basic -p detector

use detector::prelude::*;
use detector::{create_alert, MemorySink};
use source::{FixedSource, SyntheticConfig, SyntheticSource};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== detector Basic Examples ===\n");

    // 1. Observe samples one at a time
    println!("1. Single detector (window=5, threshold=3.0)");
    let mut detector = ZScoreDetector::new(5, 3.0)?;
    for value in [10.0, 10.0, 10.0, 10.0, 10.0, 100.0] {
        let c = detector.observe_value(value)?;
        println!(
            "   [{}] value={:>6.1} z={:>5.2} mean={:>5.1} std={:>5.1} -> {}",
            c.index(),
            c.value(),
            c.z_score,
            c.stats.mean,
            c.stats.std_dev,
            c.classification.name()
        );
    }
    println!("   A lone spike in a window of 5 can never exceed z=2.0\n");

    // 2. A larger window catches the same spike
    println!("2. Larger window (window=20, threshold=3.0)");
    let mut values = vec![10.0; 19];
    values.push(100.0);
    let mut pipeline = StreamPipeline::new(FixedSource::new(values), ZScoreDetector::new(20, 3.0)?);
    let mut sink = MemorySink::new();
    pipeline.run(&mut sink, None)?;
    for c in sink.anomalies() {
        println!("   {}", create_alert(&c).message);
    }
    println!();

    // 3. Invalid samples are skipped, the stream carries on
    println!("3. Rejected samples");
    let mut pipeline = StreamPipeline::new(
        FixedSource::new(vec![1.0, 2.0, f64::NAN, 3.0]),
        ZScoreDetector::default(),
    );
    let mut sink = MemorySink::new();
    let summary = pipeline.run(&mut sink, None)?;
    for r in sink.rejected() {
        println!("   index {}: {}", r.sample.index, r.reason);
    }
    println!("   summary: {:?}\n", summary);

    // 4. Seeded synthetic stream
    println!("4. Synthetic stream (5000 points, seed 42)");
    let config = SyntheticConfig::default().with_num_points(5_000).with_seed(42);
    let source = SyntheticSource::new(config)?;
    println!("   source: {}", source.describe());
    let mut pipeline = StreamPipeline::new(source, ZScoreDetector::default());
    let mut sink = MemorySink::new();
    let summary = pipeline.run(&mut sink, None)?;
    println!(
        "   processed={} anomalies={} rejected={}",
        summary.processed, summary.anomalies, summary.rejected
    );
    for c in sink.anomalies().iter().take(5) {
        println!("   {}", create_alert(c).message);
    }

    Ok(())
}
