//! Fixed template tables for every narrative surface of a report.
//!
//! Each table is keyed on exactly one closed enum so every cell can be listed
//! and tested on its own. The evidence-facing and linguistic-facing verdicts
//! are separate surfaces and never borrow each other's wording.

use super::conflict::ConflictState;
use super::domain::{Signal, StanceSummary};
use super::tiers::{LinguisticTier, RiskTier};
use serde::Serialize;

/// Signals beyond this many are dropped, keeping upstream priority order.
pub const MAX_DISPLAY_SIGNALS: usize = 3;

pub const NO_EVIDENCE_VERDICT: &str = "No evidence found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictSource {
    Upstream,
    Template,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Narrative {
    pub verdict: String,
    pub linguistic_verdict: String,
    pub linguistic_verdict_source: VerdictSource,
    pub why_this_matters: &'static str,
    pub interpretation: &'static str,
    pub signals: Vec<Signal>,
}

pub fn compose(
    conflict: ConflictState,
    stance: &StanceSummary,
    tier: LinguisticTier,
    signals: &[Signal],
    explicit_verdict: Option<&str>,
) -> Narrative {
    let explicit = explicit_verdict
        .map(str::trim)
        .filter(|verdict| !verdict.is_empty());

    let (linguistic_verdict, linguistic_verdict_source) = match explicit {
        Some(verdict) => (verdict.to_string(), VerdictSource::Upstream),
        None => (
            linguistic_verdict(tier).to_string(),
            VerdictSource::Template,
        ),
    };

    Narrative {
        verdict: evidence_verdict(conflict, stance),
        linguistic_verdict,
        linguistic_verdict_source,
        why_this_matters: why_this_matters(tier),
        interpretation: interpretation(tier, conflict),
        signals: display_signals(signals),
    }
}

pub fn evidence_verdict(conflict: ConflictState, stance: &StanceSummary) -> String {
    match conflict {
        ConflictState::Conflicting => format!(
            "Conflicting evidence: {} refuting, {} supporting.",
            stance.refutes, stance.supports
        ),
        ConflictState::OneSidedRefute => "Sources refute this claim.".to_string(),
        ConflictState::OneSidedSupport => "Sources support this claim.".to_string(),
        ConflictState::NeutralOnly => "Context found, no direct verification.".to_string(),
        ConflictState::Empty => NO_EVIDENCE_VERDICT.to_string(),
    }
}

pub const fn linguistic_verdict(tier: LinguisticTier) -> &'static str {
    match tier {
        LinguisticTier::Low => {
            "This claim uses generally neutral language, facilitating objective verification."
        }
        LinguisticTier::Medium => {
            "This text contains some patterns that may warrant additional verification."
        }
        LinguisticTier::High => {
            "This text employs language or structure often associated with high-risk or unverified content."
        }
    }
}

pub const fn why_this_matters(tier: LinguisticTier) -> &'static str {
    match tier {
        LinguisticTier::Low => "Neutral wording makes it easier to verify using external sources.",
        LinguisticTier::Medium => {
            "Some linguistic patterns may influence interpretation; cross-check with evidence."
        }
        LinguisticTier::High => {
            "Loaded language may bypass critical analysis; verify facts independently."
        }
    }
}

pub const fn interpretation(tier: LinguisticTier, conflict: ConflictState) -> &'static str {
    match (tier, conflict.is_conflicting()) {
        (LinguisticTier::Low, _) => {
            "The wording is neutral, so the verdict rests on the sources found."
        }
        (LinguisticTier::High, _) => {
            "The wording carries strong persuasive loading; treat the claim with caution whatever the sources say."
        }
        (LinguisticTier::Medium, true) => {
            "Moderate linguistic risk combined with mixed evidence leaves this claim unresolved."
        }
        (LinguisticTier::Medium, false) => {
            "Moderate linguistic risk; cross-check the specific details against the sources found."
        }
    }
}

/// Headline for the risk summary strip, keyed on the evidence-aware tier.
pub const fn headline(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::High => "Credible sources directly refute this claim.",
        RiskTier::Medium => "Evidence is conflicting or only partially supports the claim.",
        RiskTier::Unknown => "Only neutral context found. No direct verification available.",
        RiskTier::Low => "This claim matches widely reported events.",
    }
}

pub fn display_signals(signals: &[Signal]) -> Vec<Signal> {
    signals.iter().take(MAX_DISPLAY_SIGNALS).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATES: [ConflictState; 5] = [
        ConflictState::Conflicting,
        ConflictState::OneSidedSupport,
        ConflictState::OneSidedRefute,
        ConflictState::NeutralOnly,
        ConflictState::Empty,
    ];
    const ALL_LINGUISTIC: [LinguisticTier; 3] = [
        LinguisticTier::Low,
        LinguisticTier::Medium,
        LinguisticTier::High,
    ];

    fn stance(supports: usize, refutes: usize, neutral: usize) -> StanceSummary {
        StanceSummary {
            supports,
            refutes,
            neutral,
        }
    }

    fn signals(count: usize) -> Vec<Signal> {
        (0..count)
            .map(|idx| Signal::new(format!("signal-{idx}"), "trigger", "explanation"))
            .collect()
    }

    #[test]
    fn conflicting_verdict_names_both_counts() {
        let verdict = evidence_verdict(ConflictState::Conflicting, &stance(3, 2, 4));
        assert_eq!(verdict, "Conflicting evidence: 2 refuting, 3 supporting.");
    }

    #[test]
    fn evidence_verdict_table_covers_every_state() {
        for state in ALL_STATES {
            assert!(!evidence_verdict(state, &stance(1, 1, 1)).is_empty());
        }
        assert_eq!(
            evidence_verdict(ConflictState::Empty, &stance(0, 0, 0)),
            NO_EVIDENCE_VERDICT
        );
        assert!(evidence_verdict(ConflictState::OneSidedRefute, &stance(0, 2, 0)).contains("refute"));
        assert!(evidence_verdict(ConflictState::NeutralOnly, &stance(0, 0, 2))
            .contains("no direct verification"));
    }

    #[test]
    fn linguistic_tables_are_distinct_per_tier() {
        for (idx, tier) in ALL_LINGUISTIC.iter().enumerate() {
            for other in &ALL_LINGUISTIC[idx + 1..] {
                assert_ne!(linguistic_verdict(*tier), linguistic_verdict(*other));
                assert_ne!(why_this_matters(*tier), why_this_matters(*other));
            }
        }
    }

    #[test]
    fn explicit_verdict_overrides_linguistic_template_only() {
        let narrative = compose(
            ConflictState::OneSidedSupport,
            &stance(2, 0, 0),
            LinguisticTier::High,
            &[],
            Some("Upstream says this is sensational."),
        );

        assert_eq!(narrative.linguistic_verdict, "Upstream says this is sensational.");
        assert_eq!(narrative.linguistic_verdict_source, VerdictSource::Upstream);
        assert_eq!(narrative.verdict, "Sources support this claim.");
        assert_eq!(narrative.why_this_matters, why_this_matters(LinguisticTier::High));
    }

    #[test]
    fn blank_explicit_verdict_falls_back_to_template() {
        let narrative = compose(
            ConflictState::Empty,
            &stance(0, 0, 0),
            LinguisticTier::Low,
            &[],
            Some("   "),
        );

        assert_eq!(narrative.linguistic_verdict_source, VerdictSource::Template);
        assert_eq!(
            narrative.linguistic_verdict,
            linguistic_verdict(LinguisticTier::Low)
        );
    }

    #[test]
    fn interpretation_folds_in_conflict_only_for_medium_tier() {
        let medium_mixed = interpretation(LinguisticTier::Medium, ConflictState::Conflicting);
        let medium_clear = interpretation(LinguisticTier::Medium, ConflictState::OneSidedRefute);
        assert!(medium_mixed.contains("mixed evidence"));
        assert!(!medium_clear.contains("mixed evidence"));

        for state in ALL_STATES {
            assert_eq!(
                interpretation(LinguisticTier::High, state),
                interpretation(LinguisticTier::High, ConflictState::Empty)
            );
            assert!(!interpretation(LinguisticTier::Low, state).contains("mixed evidence"));
        }
    }

    #[test]
    fn signals_are_truncated_in_upstream_order() {
        let narrative = compose(
            ConflictState::Empty,
            &stance(0, 0, 0),
            LinguisticTier::Medium,
            &signals(5),
            None,
        );

        let names: Vec<_> = narrative
            .signals
            .iter()
            .map(|signal| signal.name.as_str())
            .collect();
        assert_eq!(names, ["signal-0", "signal-1", "signal-2"]);
        assert_eq!(display_signals(&signals(2)).len(), 2);
    }

    #[test]
    fn headline_table_covers_every_evidence_tier() {
        assert!(headline(RiskTier::High).contains("refute"));
        assert!(headline(RiskTier::Unknown).contains("neutral context"));
        assert_ne!(headline(RiskTier::Low), headline(RiskTier::Medium));
    }
}
