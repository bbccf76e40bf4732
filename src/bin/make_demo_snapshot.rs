use anyhow::Result;
use cycle_advisor::AnalysisRequest;
use cycle_advisor::config::DEMO_SNAPSHOT_PATH;
use cycle_advisor::data::SnapshotFile;
use cycle_advisor::models::SampleSeries;
use cycle_advisor::utils::TimeUtils;
use std::path::PathBuf;

// Last sample lands on 2025-08-29T19:00:00Z
const END_MS: i64 = 1_756_494_000_000;

fn main() -> Result<()> {
    build_demo_snapshot()
}

fn build_demo_snapshot() -> Result<()> {
    // BTC grinding up, dominance bleeding, weekly cycle up: altcoin rotation
    let btc_price = drift_series(24, TimeUtils::MS_IN_H, 108_000.0, 0.0009);
    let btc_dominance = drift_series(24, TimeUtils::MS_IN_H, 57.4, -0.0012);
    let weekly_cycle = drift_series(168, TimeUtils::MS_IN_H, 104_500.0, 0.0002);
    let monthly_cycle = drift_series(99, TimeUtils::MS_IN_D, 98_000.0, 0.0011);

    let request = AnalysisRequest {
        btc_price,
        btc_dominance,
        weekly_cycle,
        monthly_cycle: Some(monthly_cycle),
    };

    let output_path = PathBuf::from(DEMO_SNAPSHOT_PATH);
    SnapshotFile::new(request).save_to_path(&output_path)?;

    println!("✅ Demo snapshot written to {:?}", output_path);
    Ok(())
}

/// `count` evenly spaced samples ending at END_MS, compounding `drift` per step.
fn drift_series(count: usize, interval_ms: i64, start_value: f64, drift: f64) -> SampleSeries {
    let start_ms = END_MS - (count as i64 - 1) * interval_ms;
    let values: Vec<f64> = (0..count)
        .map(|i| start_value * (1.0 + drift).powi(i as i32))
        .collect();
    SampleSeries::from_values(start_ms, interval_ms, &values)
}
