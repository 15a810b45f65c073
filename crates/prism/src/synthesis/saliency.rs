//! Maps token saliency onto discrete visual buckets.
//!
//! How salient a word is and how alarming it should look are separate
//! questions. When the claim as a whole reads as neutral, token-level emphasis
//! is capped at a subtle underline no matter how high the individual score is.

use super::domain::{RiskScore, Token};
use serde::Serialize;

/// Scores below this never render.
pub const SALIENCY_FLOOR: f64 = 0.15;
pub const STRONG_SALIENCY: f64 = 0.6;
/// Overall risk below which the claim counts as neutral context.
pub const NEUTRAL_CONTEXT_CEILING: f64 = 30.0;
/// Print styling emphasises tokens strictly above this score.
pub const PRINT_EMPHASIS_THRESHOLD: f64 = 0.45;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualBucket {
    None,
    SubtleUnderline,
    MediumUnderline,
    StrongHighlight,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledToken {
    pub token: String,
    pub score: f64,
    pub bucket: VisualBucket,
    /// Continuous rendering weight in `[0, 1]`; zero when nothing renders.
    pub intensity: f64,
}

/// Context-aware bucketing for callers that know the overall risk.
pub fn style(token: &Token, overall_risk: RiskScore) -> VisualBucket {
    let score = token.saliency();
    if score < SALIENCY_FLOOR {
        return VisualBucket::None;
    }
    if overall_risk.value() < NEUTRAL_CONTEXT_CEILING {
        return VisualBucket::SubtleUnderline;
    }
    bucket_by_score(score)
}

/// Two-threshold bucketing for contexts without an aggregate score.
pub fn style_uncapped(token: &Token) -> VisualBucket {
    let score = token.saliency();
    if score < SALIENCY_FLOOR {
        return VisualBucket::None;
    }
    bucket_by_score(score)
}

fn bucket_by_score(score: f64) -> VisualBucket {
    if score < STRONG_SALIENCY {
        VisualBucket::MediumUnderline
    } else {
        VisualBucket::StrongHighlight
    }
}

/// Single-threshold emphasis used by the printable briefing.
pub fn print_emphasis(token: &Token) -> bool {
    token.saliency() > PRINT_EMPHASIS_THRESHOLD
}

/// The legend explains highlight colours, which neutral claims never show.
pub fn legend_visible(overall_risk: RiskScore) -> bool {
    overall_risk.value() >= NEUTRAL_CONTEXT_CEILING
}

pub fn style_tokens(tokens: &[Token], overall_risk: RiskScore) -> Vec<StyledToken> {
    tokens
        .iter()
        .map(|token| {
            let bucket = style(token, overall_risk);
            styled(token, bucket)
        })
        .collect()
}

pub fn style_tokens_uncapped(tokens: &[Token]) -> Vec<StyledToken> {
    tokens
        .iter()
        .map(|token| styled(token, style_uncapped(token)))
        .collect()
}

fn styled(token: &Token, bucket: VisualBucket) -> StyledToken {
    let score = token.saliency();
    let intensity = match bucket {
        VisualBucket::None => 0.0,
        _ => score,
    };
    StyledToken {
        token: token.token.clone(),
        score,
        bucket,
        intensity,
    }
}
