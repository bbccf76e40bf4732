#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use domain::{RiskLevel, TrendHorizon, TrendLabel};
pub use engine::{AdvisorEngine, AnalysisReport, AnalysisRequest};
pub use errors::EngineError;
pub use models::{ConflictInfo, Recommendation, SampleSeries, TrendResult, TrendSnapshot};

use anyhow::{Result, bail};
use std::path::PathBuf;

use crate::config::{ANALYSIS, AnalysisConfig, DEBUG_FLAGS, load_config, validate_config};
use crate::data::{SnapshotFile, load_collector_file};
use crate::utils::TimeUtils;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON snapshot holding every horizon's series
    #[arg(long, conflicts_with_all = ["btc", "dominance", "weekly", "monthly"])]
    pub snapshot: Option<PathBuf>,

    /// Collector output: hourly BTC candles (24h)
    #[arg(long, requires_all = ["dominance", "weekly"])]
    pub btc: Option<PathBuf>,

    /// Collector output: hourly BTC dominance (24h)
    #[arg(long)]
    pub dominance: Option<PathBuf>,

    /// Collector output: hourly BTC candles (168h) for the weekly cycle
    #[arg(long)]
    pub weekly: Option<PathBuf>,

    /// Collector output: daily BTC candles (99d) for the monthly cycle
    #[arg(long)]
    pub monthly: Option<PathBuf>,

    /// JSON analysis config; sections left out keep their defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Threshold (%) for the BTC and BTC.D short trends
    #[arg(long)]
    pub short_threshold: Option<f64>,

    /// Threshold (%) for the weekly cycle
    #[arg(long)]
    pub weekly_threshold: Option<f64>,

    /// Threshold (%) for the monthly cycle
    #[arg(long)]
    pub monthly_threshold: Option<f64>,

    /// Number of trailing samples the short trends are measured over
    #[arg(long)]
    pub short_lookback: Option<usize>,

    /// Max gap (hours) between samples of the hourly series
    #[arg(long)]
    pub max_gap_hours: Option<f64>,

    /// Max gap (hours) between samples of the monthly series
    #[arg(long)]
    pub monthly_max_gap_hours: Option<f64>,

    /// Minimum samples a series needs
    #[arg(long)]
    pub min_samples: Option<usize>,

    /// Confidence points per aligned pair of trends
    #[arg(long)]
    pub confidence_step: Option<i32>,

    /// Confidence points removed on a weekly/monthly conflict
    #[arg(long)]
    pub confidence_penalty: Option<i32>,

    /// Lowest confidence (%) a recommendation can report
    #[arg(long)]
    pub confidence_floor: Option<u8>,

    /// Highest confidence (%) a recommendation can report
    #[arg(long)]
    pub confidence_ceiling: Option<u8>,

    /// Print the report as JSON instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

fn note_override(name: &str, value: impl std::fmt::Display) {
    if DEBUG_FLAGS.print_config_overrides {
        log::info!("cli override: {name} = {value}");
    }
}

fn hours_to_ms(hours: f64) -> i64 {
    (hours * TimeUtils::MS_IN_H as f64).round() as i64
}

impl Cli {
    /// Defaults (or `--config`), then CLI overrides, then validation.
    pub fn resolve_config(&self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ANALYSIS.clone(),
        };

        if let Some(t) = self.short_threshold {
            note_override("short_threshold", t);
            config.btc_price.threshold_pct = t;
            config.btc_dominance.threshold_pct = t;
        }
        if let Some(t) = self.weekly_threshold {
            note_override("weekly_threshold", t);
            config.weekly_cycle.threshold_pct = t;
        }
        if let Some(t) = self.monthly_threshold {
            note_override("monthly_threshold", t);
            config.monthly_cycle.threshold_pct = t;
        }
        if let Some(n) = self.short_lookback {
            note_override("short_lookback", n);
            config.btc_price.lookback_samples = Some(n);
            config.btc_dominance.lookback_samples = Some(n);
        }
        if let Some(hours) = self.max_gap_hours {
            note_override("max_gap_hours", hours);
            let gap_ms = hours_to_ms(hours);
            config.btc_price.max_gap_ms = gap_ms;
            config.btc_dominance.max_gap_ms = gap_ms;
            config.weekly_cycle.max_gap_ms = gap_ms;
        }
        if let Some(hours) = self.monthly_max_gap_hours {
            note_override("monthly_max_gap_hours", hours);
            config.monthly_cycle.max_gap_ms = hours_to_ms(hours);
        }
        if let Some(n) = self.min_samples {
            note_override("min_samples", n);
            config.min_samples = n;
        }
        if let Some(step) = self.confidence_step {
            note_override("confidence_step", step);
            config.confidence.agreement_step = step;
        }
        if let Some(penalty) = self.confidence_penalty {
            note_override("confidence_penalty", penalty);
            config.confidence.conflict_penalty = penalty;
        }
        if let Some(floor) = self.confidence_floor {
            note_override("confidence_floor", floor);
            config.confidence.floor = floor;
        }
        if let Some(ceiling) = self.confidence_ceiling {
            note_override("confidence_ceiling", ceiling);
            config.confidence.ceiling = ceiling;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Read the input series from `--snapshot` or from the collector files.
    pub fn load_request(&self) -> Result<AnalysisRequest> {
        if let Some(path) = &self.snapshot {
            return Ok(SnapshotFile::load_from_path(path)?.data);
        }

        let (Some(btc), Some(dominance), Some(weekly)) = (&self.btc, &self.dominance, &self.weekly)
        else {
            bail!("no input: pass --snapshot, or --btc, --dominance and --weekly");
        };

        Ok(AnalysisRequest {
            btc_price: load_collector_file(btc)?,
            btc_dominance: load_collector_file(dominance)?,
            weekly_cycle: load_collector_file(weekly)?,
            monthly_cycle: self
                .monthly
                .as_deref()
                .map(load_collector_file)
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_apply() {
        let cli = Cli::parse_from([
            "cycle-advisor",
            "--snapshot",
            "s.json",
            "--short-threshold",
            "0.3",
            "--max-gap-hours",
            "2",
            "--confidence-step",
            "10",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.btc_price.threshold_pct, 0.3);
        assert_eq!(config.btc_dominance.threshold_pct, 0.3);
        assert_eq!(config.weekly_cycle.threshold_pct, ANALYSIS.weekly_cycle.threshold_pct);
        assert_eq!(config.weekly_cycle.max_gap_ms, 2 * TimeUtils::MS_IN_H);
        assert_eq!(config.monthly_cycle.max_gap_ms, ANALYSIS.monthly_cycle.max_gap_ms);
        assert_eq!(config.confidence.agreement_step, 10);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let cli = Cli {
            confidence_floor: Some(96),
            ..Default::default()
        };
        let err = cli.resolve_config().unwrap_err();
        assert!(err.to_string().contains("floor (96)"));
    }

    #[test]
    fn test_snapshot_conflicts_with_collector_files() {
        let parsed = Cli::try_parse_from([
            "cycle-advisor",
            "--snapshot",
            "s.json",
            "--btc",
            "btc.txt",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_every_flag_has_help() {
        use clap::CommandFactory;
        let command = Cli::command();
        for arg in command.get_arguments() {
            assert!(arg.get_help().is_some(), "--{} has no help text", arg.get_id());
        }
    }

    #[test]
    fn test_missing_input_is_reported() {
        let err = Cli::default().load_request().unwrap_err();
        assert!(err.to_string().contains("no input"));
    }
}
