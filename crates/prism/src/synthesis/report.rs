use super::conflict::{detect, ConflictState};
use super::domain::{
    AnalysisResult, EvidenceItem, RiskScore, Signal, StanceLabel, StanceSummary, Token,
};
use super::grouping::group;
use super::narrative::{compose, headline, VerdictSource};
use super::saliency::{legend_visible, style_tokens, StyledToken};
use super::tiers::{
    classify_evidence_risk, classify_gauge, classify_linguistic_risk, GaugeBand, LinguisticTier,
    RiskTier,
};
use serde::Serialize;
use tracing::debug;

pub const CONFLICT_REVEAL_LIMIT: usize = 1;
pub const DEFAULT_REVEAL_LIMIT: usize = 2;
pub const NEUTRAL_REVEAL_LIMIT: usize = 1;

/// One stance group with its initial reveal limit. Items are never truncated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisclosedGroup {
    pub stance: StanceLabel,
    pub stance_label: &'static str,
    pub items: Vec<EvidenceItem>,
    pub limit: usize,
}

impl DisclosedGroup {
    fn new(stance: StanceLabel, items: Vec<EvidenceItem>, limit: usize) -> Self {
        let limit = if items.is_empty() { 0 } else { limit };
        Self {
            stance,
            stance_label: stance.label(),
            items,
            limit,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn visible(&self) -> &[EvidenceItem] {
        &self.items[..self.limit.min(self.items.len())]
    }

    pub fn hidden_count(&self) -> usize {
        self.items.len().saturating_sub(self.limit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisclosureLimits {
    pub supports: usize,
    pub refutes: usize,
    pub neutral: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedEvidence {
    pub refutes: DisclosedGroup,
    pub supports: DisclosedGroup,
    pub neutral: DisclosedGroup,
}

impl GroupedEvidence {
    pub fn total(&self) -> usize {
        self.refutes.len() + self.supports.len() + self.neutral.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn limits(&self) -> DisclosureLimits {
        DisclosureLimits {
            supports: self.supports.limit,
            refutes: self.refutes.limit,
            neutral: self.neutral.limit,
        }
    }

    /// Non-empty groups in presentation order: refuting, supporting, neutral.
    pub fn sections(&self) -> impl Iterator<Item = &DisclosedGroup> {
        [&self.refutes, &self.supports, &self.neutral]
            .into_iter()
            .filter(|group| !group.is_empty())
    }
}

/// Single synthesized output consumed by both the interactive view and the briefing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynthesizedReport {
    pub risk_score: RiskScore,
    pub display_score: u8,
    pub risk_tier: RiskTier,
    pub risk_tier_label: &'static str,
    pub linguistic_tier: LinguisticTier,
    pub gauge_band: GaugeBand,
    pub conflict_state: ConflictState,
    pub stance_summary: StanceSummary,
    pub headline: &'static str,
    pub verdict_text: String,
    pub linguistic_verdict: String,
    pub linguistic_verdict_source: VerdictSource,
    pub why_text: &'static str,
    pub interpretation_text: &'static str,
    pub signals: Vec<Signal>,
    pub evidence: GroupedEvidence,
    pub styled_tokens: Vec<StyledToken>,
    pub legend_visible: bool,
}

impl SynthesizedReport {
    pub fn has_evidence(&self) -> bool {
        !self.evidence.is_empty()
    }

    pub fn has_annotations(&self) -> bool {
        !self.styled_tokens.is_empty()
    }
}

pub fn assemble(
    evidence: &[EvidenceItem],
    risk_score: f64,
    tokens: &[Token],
    signals: &[Signal],
    explicit_verdict: Option<&str>,
) -> SynthesizedReport {
    let risk_score = RiskScore::new(risk_score);

    let groups = group(evidence);
    let stance_summary = groups.summary();
    debug_assert_eq!(stance_summary.total(), evidence.len());

    let conflict_state = detect(&groups);
    let risk_tier = classify_evidence_risk(risk_score, &stance_summary);
    let linguistic_tier = classify_linguistic_risk(risk_score);
    let narrative = compose(
        conflict_state,
        &stance_summary,
        linguistic_tier,
        signals,
        explicit_verdict,
    );

    let (supports, refutes, neutral) = groups.into_parts();
    let side_limit = if conflict_state.is_conflicting() {
        CONFLICT_REVEAL_LIMIT
    } else {
        DEFAULT_REVEAL_LIMIT
    };
    let evidence = GroupedEvidence {
        refutes: DisclosedGroup::new(StanceLabel::Refutes, refutes, side_limit),
        supports: DisclosedGroup::new(StanceLabel::Supports, supports, side_limit),
        neutral: DisclosedGroup::new(StanceLabel::Neutral, neutral, NEUTRAL_REVEAL_LIMIT),
    };

    debug!(
        risk = risk_score.value(),
        tier = risk_tier.label(),
        conflict = ?conflict_state,
        evidence = stance_summary.total(),
        "synthesized report"
    );

    SynthesizedReport {
        risk_score,
        display_score: risk_score.display(),
        risk_tier,
        risk_tier_label: risk_tier.label(),
        linguistic_tier,
        gauge_band: classify_gauge(risk_score),
        conflict_state,
        stance_summary,
        headline: headline(risk_tier),
        verdict_text: narrative.verdict,
        linguistic_verdict: narrative.linguistic_verdict,
        linguistic_verdict_source: narrative.linguistic_verdict_source,
        why_text: narrative.why_this_matters,
        interpretation_text: narrative.interpretation,
        signals: narrative.signals,
        evidence,
        styled_tokens: style_tokens(tokens, risk_score),
        legend_visible: legend_visible(risk_score),
    }
}

impl AnalysisResult {
    pub fn synthesize(&self) -> SynthesizedReport {
        assemble(
            &self.evidence,
            self.style_risk_score,
            &self.heatmap,
            &self.linguistic_signals,
            self.linguistic_verdict.as_deref(),
        )
    }
}
