use chrono::{DateTime, Utc};
use rayon::prelude::*;
use std::time::Instant;

use crate::analysis::{assemble, classify, detect_snapshot_conflict, lookup_key, score};
use crate::config::{ANALYSIS, AnalysisConfig, validate_config};
use crate::errors::EngineError;
use crate::models::{TrendResult, TrendSnapshot};

use super::messages::{AnalysisRequest, AnalysisReport};

/// Runs the classification -> matrix -> assembly pipeline.
///
/// Stateless between runs: the only thing it owns is the configuration.
pub struct AdvisorEngine {
    config: AnalysisConfig,
}

impl AdvisorEngine {
    /// Validate `config` and build an engine around it.
    pub fn new(config: AnalysisConfig) -> Result<Self, EngineError> {
        validate_config(&config)?;
        Ok(Self { config })
    }

    /// Classify every supplied series and produce the recommendation.
    ///
    /// Any classification or continuity failure aborts the run; no
    /// recommendation is fabricated from partial data.
    pub fn analyze(
        &self,
        request: &AnalysisRequest,
        now: DateTime<Utc>,
    ) -> Result<AnalysisReport, EngineError> {
        let start = Instant::now();

        // 1. Classify (pure, disjoint inputs -> safe to fan out)
        let classified: Vec<Result<TrendResult, EngineError>> = request
            .jobs()
            .into_par_iter()
            .map(|(horizon, series)| classify(series, horizon, &self.config))
            .collect();

        // 2. Barrier: all labels must be present before the lookup.
        //    Errors surface in horizon order, so the first one reported is deterministic.
        let results = classified.into_iter().collect::<Result<Vec<_>, _>>()?;
        let snapshot = TrendSnapshot::from_results(results);

        // 3. Decide
        let key = snapshot.decision_key()?;
        let matrix_entry = lookup_key(key);
        let conflict = detect_snapshot_conflict(&snapshot);
        let confidence = score(&snapshot, &conflict, &self.config.confidence);

        // 4. Assemble
        let recommendation = assemble(&snapshot, &matrix_entry, &conflict, confidence, now)?;

        let duration_ms = start.elapsed().as_millis();
        log::info!(
            "Recommendation: {} | confidence {}% | {}ms",
            recommendation,
            confidence,
            duration_ms
        );

        Ok(AnalysisReport {
            snapshot,
            conflict,
            matrix_entry,
            recommendation,
            duration_ms,
        })
    }
}

impl Default for AdvisorEngine {
    fn default() -> Self {
        Self {
            config: ANALYSIS.clone(),
        }
    }
}
