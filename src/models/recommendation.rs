use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{RiskLevel, TrendLabel};
use crate::models::DecisionKey;

/// Agreement between the weekly (MWC) and monthly (HWC) cycles.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConflictInfo {
    /// No monthly confirmation was supplied
    NotApplicable,
    Aligned {
        weekly: TrendLabel,
        monthly: TrendLabel,
    },
    Conflict {
        weekly: TrendLabel,
        monthly: TrendLabel,
    },
}

impl ConflictInfo {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ConflictInfo::Conflict { .. })
    }

    /// Human readable warning; empty unless the cycles disagree.
    pub fn warning(&self) -> String {
        match self {
            ConflictInfo::Conflict { weekly, monthly } => {
                format!("MWC-HWC conflict ({weekly} vs {monthly})")
            }
            _ => String::new(),
        }
    }
}

/// One row of the decision matrix
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixEntry {
    pub key: DecisionKey,
    pub text: &'static str,
    pub risk: RiskLevel,
}

impl fmt::Display for MatrixEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} risk)", self.text, self.risk)
    }
}

/// The advisor's output. Built once per run, never mutated or stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub text: String,
    pub risk_level: RiskLevel,
    /// In [floor, ceiling] of the confidence settings (50..=95 by default)
    pub confidence: u8,
    pub risk_context: String,
    pub generated_at: DateTime<Utc>,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} risk)", self.text, self.risk_level)
    }
}
