//! Claim verification synthesis.
//!
//! Turns three independent upstream signals (stance-tagged evidence, a
//! linguistic risk score with token saliency, and detected rhetorical signals)
//! into one deterministic [`SynthesizedReport`]. Every function here is pure:
//! identical inputs always produce structurally equal reports.

pub mod briefing;
pub mod conflict;
pub mod domain;
pub mod grouping;
pub mod narrative;
pub mod report;
pub mod router;
pub mod saliency;
pub mod tiers;

pub use briefing::BriefingNote;
pub use conflict::{detect, ConflictState};
pub use domain::{
    AnalysisResult, EvidenceItem, RiskScore, Signal, Stance, StanceLabel, StanceSummary,
    SynthesisError, Token,
};
pub use grouping::{group, StanceGroups};
pub use narrative::{compose, Narrative};
pub use report::{assemble, DisclosedGroup, DisclosureLimits, GroupedEvidence, SynthesizedReport};
pub use router::report_router;
pub use saliency::{style, style_uncapped, StyledToken, VisualBucket};
pub use tiers::{
    classify_evidence_risk, classify_gauge, classify_linguistic_risk, GaugeBand, LinguisticTier,
    RiskTier,
};
