use super::domain::{EvidenceItem, Token};
use super::report::SynthesizedReport;
use super::saliency::print_emphasis;
use super::tiers::{GaugeBand, LinguisticTier};
use chrono::NaiveDate;
use serde::Serialize;

pub const REFERENCE_LENGTH: usize = 8;
pub const CONTEXTUAL_SOURCE_CAP: usize = 5;

const SENSATIONALISM_NOTE: &str =
    "Linguistic analysis suggests high potential for sensationalism or manipulation. ";
const INCONCLUSIVE_NOTE: &str = "This claim has mixed or inconclusive evidence.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BriefingToken {
    pub token: String,
    pub emphasized: bool,
}

/// Printable briefing derived from an already-synthesized report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BriefingNote {
    pub reference: String,
    pub generated_on: NaiveDate,
    pub risk_assessment: LinguisticTier,
    pub risk_assessment_label: &'static str,
    pub display_score: u8,
    pub executive_summary: String,
    pub refuting: Vec<EvidenceItem>,
    pub supporting: Vec<EvidenceItem>,
    pub contextual: Vec<EvidenceItem>,
    pub contextual_total: usize,
    pub annotated_text: Vec<BriefingToken>,
    pub conclusion: &'static str,
}

impl BriefingNote {
    pub fn from_report(report: &SynthesizedReport, job_id: &str, generated_on: NaiveDate) -> Self {
        let evidence = &report.evidence;
        let has_refutes = !evidence.refutes.is_empty();
        let has_supports = !evidence.supports.is_empty();

        let mut executive_summary = String::new();
        if report.gauge_band == GaugeBand::High {
            executive_summary.push_str(SENSATIONALISM_NOTE);
        }
        if has_refutes {
            executive_summary.push_str(
                "Credible sources directly refute the core assertions of this claim.",
            );
        } else if has_supports {
            executive_summary.push_str("Multiple sources confirm the details of this event.");
        } else if executive_summary.is_empty() {
            executive_summary.push_str(INCONCLUSIVE_NOTE);
        }

        let conclusion = if has_refutes {
            "This claim is contradicted by available evidence from credible sources."
        } else if has_supports {
            "This claim is supported by multiple independent reports."
        } else {
            "Insufficient definitive evidence found to verify this claim."
        };

        let annotated_text = report
            .styled_tokens
            .iter()
            .map(|styled| BriefingToken {
                token: styled.token.clone(),
                emphasized: print_emphasis(&Token::new(styled.token.as_str(), styled.score)),
            })
            .collect();

        Self {
            reference: job_id.chars().take(REFERENCE_LENGTH).collect(),
            generated_on,
            risk_assessment: report.linguistic_tier,
            risk_assessment_label: report.linguistic_tier.label(),
            display_score: report.display_score,
            executive_summary: executive_summary.trim_end().to_string(),
            refuting: evidence.refutes.items.clone(),
            supporting: evidence.supports.items.clone(),
            contextual: evidence
                .neutral
                .items
                .iter()
                .take(CONTEXTUAL_SOURCE_CAP)
                .cloned()
                .collect(),
            contextual_total: evidence.neutral.len(),
            annotated_text,
            conclusion,
        }
    }
}
