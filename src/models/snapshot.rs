use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::domain::{TrendHorizon, TrendLabel};
use crate::errors::EngineError;
use crate::models::TrendResult;

/// The classified trends of one analysis run.
///
/// Mandatory members are optional here so a snapshot can be filled in as
/// classifications complete; `decision_key` is where their presence is enforced.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TrendSnapshot {
    pub btc_price: Option<TrendResult>,
    pub btc_dominance: Option<TrendResult>,
    pub weekly_cycle: Option<TrendResult>,
    pub monthly_cycle: Option<TrendResult>,
}

/// The three labels the decision matrix is keyed by.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DecisionKey {
    pub btc: TrendLabel,
    pub dominance: TrendLabel,
    pub weekly_cycle: TrendLabel,
}

impl DecisionKey {
    pub fn new(btc: TrendLabel, dominance: TrendLabel, weekly_cycle: TrendLabel) -> Self {
        Self {
            btc,
            dominance,
            weekly_cycle,
        }
    }
}

impl TrendSnapshot {
    pub fn from_results(results: impl IntoIterator<Item = TrendResult>) -> Self {
        let mut snapshot = Self::default();
        for result in results {
            snapshot.insert(result);
        }
        snapshot
    }

    /// Store a result in the slot of its horizon, replacing any earlier one.
    pub fn insert(&mut self, result: TrendResult) {
        *self.slot_mut(result.horizon) = Some(result);
    }

    pub fn get(&self, horizon: TrendHorizon) -> Option<&TrendResult> {
        match horizon {
            TrendHorizon::BtcPrice => self.btc_price.as_ref(),
            TrendHorizon::BtcDominance => self.btc_dominance.as_ref(),
            TrendHorizon::WeeklyCycle => self.weekly_cycle.as_ref(),
            TrendHorizon::MonthlyCycle => self.monthly_cycle.as_ref(),
        }
    }

    fn slot_mut(&mut self, horizon: TrendHorizon) -> &mut Option<TrendResult> {
        match horizon {
            TrendHorizon::BtcPrice => &mut self.btc_price,
            TrendHorizon::BtcDominance => &mut self.btc_dominance,
            TrendHorizon::WeeklyCycle => &mut self.weekly_cycle,
            TrendHorizon::MonthlyCycle => &mut self.monthly_cycle,
        }
    }

    pub fn missing_mandatory(&self) -> Vec<TrendHorizon> {
        TrendHorizon::iter()
            .filter(|h| h.is_mandatory() && self.get(*h).is_none())
            .collect()
    }

    pub fn decision_key(&self) -> Result<DecisionKey, EngineError> {
        match (&self.btc_price, &self.btc_dominance, &self.weekly_cycle) {
            (Some(btc), Some(dominance), Some(weekly)) => Ok(DecisionKey::new(
                btc.label,
                dominance.label,
                weekly.label,
            )),
            _ => Err(EngineError::Assembly {
                missing: self
                    .missing_mandatory()
                    .iter()
                    .map(|h| h.key())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}
