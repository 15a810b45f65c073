//! Threshold bands turning a continuous risk score into discrete tiers.
//!
//! Three classifiers exist side by side and answer different questions:
//! the evidence-aware claim risk, the linguistic loading of the wording, and the
//! coarser band shown on the stylometric score gauge.

use super::domain::{RiskScore, StanceSummary};
use serde::Serialize;

pub const EVIDENCE_HIGH_THRESHOLD: f64 = 80.0;
pub const EVIDENCE_MEDIUM_THRESHOLD: f64 = 50.0;

pub const LINGUISTIC_HIGH_THRESHOLD: f64 = 60.0;
pub const LINGUISTIC_MEDIUM_THRESHOLD: f64 = 30.0;

/// Exclusive bounds: a score must be strictly above these.
pub const GAUGE_HIGH_BOUND: f64 = 70.0;
pub const GAUGE_MEDIUM_BOUND: f64 = 40.0;

/// Overall claim risk, aware of which evidence was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
    /// Only neutral context exists; nothing verifies or refutes the claim.
    Unknown,
}

impl RiskTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Linguistic loading of the claim text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinguisticTier {
    /// Neutral wording.
    Low,
    Medium,
    High,
}

impl LinguisticTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    pub const fn is_neutral(self) -> bool {
        matches!(self, Self::Low)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeBand {
    Low,
    Medium,
    High,
}

impl GaugeBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }
}

pub fn classify_evidence_risk(score: RiskScore, stance: &StanceSummary) -> RiskTier {
    let score = score.value();
    if score >= EVIDENCE_HIGH_THRESHOLD {
        RiskTier::High
    } else if score >= EVIDENCE_MEDIUM_THRESHOLD {
        RiskTier::Medium
    } else if stance.neutral > 0 && stance.supports == 0 && stance.refutes == 0 {
        RiskTier::Unknown
    } else {
        RiskTier::Low
    }
}

pub fn classify_linguistic_risk(score: RiskScore) -> LinguisticTier {
    let score = score.value();
    if score >= LINGUISTIC_HIGH_THRESHOLD {
        LinguisticTier::High
    } else if score >= LINGUISTIC_MEDIUM_THRESHOLD {
        LinguisticTier::Medium
    } else {
        LinguisticTier::Low
    }
}

pub fn classify_gauge(score: RiskScore) -> GaugeBand {
    let score = score.value();
    if score > GAUGE_HIGH_BOUND {
        GaugeBand::High
    } else if score > GAUGE_MEDIUM_BOUND {
        GaugeBand::Medium
    } else {
        GaugeBand::Low
    }
}
