use strum::IntoEnumIterator;

use super::analysis::AnalysisConfig;
use crate::domain::TrendHorizon;
use crate::errors::EngineError;

/// Validate invariants that serde alone cannot enforce.
///
/// All violations are collected and reported together.
pub fn validate_config(config: &AnalysisConfig) -> Result<(), EngineError> {
    let mut errors: Vec<String> = Vec::new();

    if config.min_samples < 2 {
        errors.push(format!(
            "min_samples: a trend needs at least 2 samples, got {}",
            config.min_samples
        ));
    }

    for horizon in TrendHorizon::iter() {
        validate_horizon(config, horizon, &mut errors);
    }

    validate_confidence(config, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(EngineError::Config(format!(
            "validation failed ({} error{}):\n  - {}",
            errors.len(),
            if errors.len() == 1 { "" } else { "s" },
            errors.join("\n  - ")
        )))
    }
}

fn validate_horizon(config: &AnalysisConfig, horizon: TrendHorizon, errors: &mut Vec<String>) {
    let settings = config.horizon(horizon);

    if !settings.threshold_pct.is_finite() || settings.threshold_pct <= 0.0 {
        errors.push(format!(
            "{horizon}.threshold_pct must be a positive number, got {}",
            settings.threshold_pct
        ));
    }

    if settings.max_gap_ms <= 0 {
        errors.push(format!(
            "{horizon}.max_gap_ms must be positive, got {}",
            settings.max_gap_ms
        ));
    }

    if let Some(lookback) = settings.lookback_samples {
        if lookback < config.min_samples {
            errors.push(format!(
                "{horizon}.lookback_samples ({lookback}) is below min_samples ({})",
                config.min_samples
            ));
        }
    }
}

fn validate_confidence(config: &AnalysisConfig, errors: &mut Vec<String>) {
    let c = &config.confidence;

    if c.floor > c.ceiling {
        errors.push(format!(
            "confidence: floor ({}) is above ceiling ({})",
            c.floor, c.ceiling
        ));
    }
    if c.agreement_step < 0 {
        errors.push(format!(
            "confidence.agreement_step must not be negative, got {}",
            c.agreement_step
        ));
    }
    if c.conflict_penalty < 0 {
        errors.push(format!(
            "confidence.conflict_penalty must not be negative, got {}",
            c.conflict_penalty
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ANALYSIS;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&ANALYSIS).is_ok());
    }

    #[test]
    fn test_collects_every_violation() {
        let mut config = ANALYSIS.clone();
        config.weekly_cycle.threshold_pct = 0.0;
        config.monthly_cycle.max_gap_ms = -1;
        config.confidence.floor = 96;

        let err = validate_config(&config).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
        let msg = err.to_string();
        assert!(msg.contains("3 errors"));
        assert!(msg.contains("weekly_cycle.threshold_pct"));
        assert!(msg.contains("monthly_cycle.max_gap_ms"));
        assert!(msg.contains("floor (96)"));
    }

    #[test]
    fn test_lookback_below_minimum() {
        let mut config = ANALYSIS.clone();
        config.btc_price.lookback_samples = Some(1);
        let msg = validate_config(&config).unwrap_err().to_string();
        assert!(msg.contains("btc_price.lookback_samples"));
    }
}
