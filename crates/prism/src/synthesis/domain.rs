use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Stance of a single evidence item toward the claim under analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StanceLabel {
    Supports,
    Refutes,
    #[default]
    Neutral,
}

impl StanceLabel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Supports, Self::Refutes, Self::Neutral]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Supports => "Supporting",
            Self::Refutes => "Refuting",
            Self::Neutral => "Neutral",
        }
    }

    /// Unrecognized labels fall back to neutral.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "supports" => Self::Supports,
            "refutes" => Self::Refutes,
            _ => Self::Neutral,
        }
    }
}

impl<'de> Deserialize<'de> for StanceLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(Value::String(label)) => Self::parse(&label),
            _ => Self::Neutral,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stance {
    #[serde(default)]
    pub label: StanceLabel,
    /// Non-numeric confidences read as 0; numbers clamp into `[0, 1]`.
    #[serde(default, deserialize_with = "lenient_confidence")]
    pub confidence: f64,
}

/// Evidence item as produced by the upstream retriever.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_stance",
        skip_serializing_if = "Option::is_none"
    )]
    pub stance: Option<Stance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credibility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl EvidenceItem {
    pub fn new(text: impl Into<String>, label: StanceLabel) -> Self {
        Self {
            text: text.into(),
            url: None,
            stance: Some(Stance {
                label,
                confidence: 1.0,
            }),
            credibility: None,
            score: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn stance_label(&self) -> StanceLabel {
        self.stance
            .as_ref()
            .map(|stance| stance.label)
            .unwrap_or_default()
    }
}

/// Saliency weight of one text unit toward the linguistic risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub token: String,
    pub score: f64,
}

impl Token {
    pub fn new(token: impl Into<String>, score: f64) -> Self {
        Self {
            token: token.into(),
            score,
        }
    }

    /// Saliency clamped into `[0, 1]`; NaN counts as zero.
    pub fn saliency(&self) -> f64 {
        if self.score.is_nan() {
            return 0.0;
        }
        self.score.clamp(0.0, 1.0)
    }
}

/// Detected rhetorical pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub name: String,
    #[serde(default)]
    pub trigger: String,
    #[serde(default)]
    pub explanation: String,
}

impl Signal {
    pub fn new(
        name: impl Into<String>,
        trigger: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            trigger: trigger.into(),
            explanation: explanation.into(),
        }
    }

    /// Short label used for signal pills.
    pub fn pill_label(&self) -> &str {
        match self.name.as_str() {
            "Causal Absolutes" => "Causal verb",
            "Emotional Loading" => "Emotional language",
            "Attribution Gap" => "No attribution",
            "Conspiracy Framing" => "Conspiracy framing",
            other => other,
        }
    }
}

/// Overall risk score in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct RiskScore(f64);

impl RiskScore {
    pub const MAX: f64 = 100.0;

    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            warn!("risk score is NaN; treating as 0");
            return Self(0.0);
        }
        if !(0.0..=Self::MAX).contains(&raw) {
            warn!(raw, "risk score outside [0, 100]; clamping");
        }
        Self(raw.clamp(0.0, Self::MAX))
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    /// Rounded for display only. Classification always uses [`RiskScore::value`].
    pub fn display(self) -> u8 {
        self.0.round() as u8
    }
}

impl From<f64> for RiskScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Per-stance item counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StanceSummary {
    #[serde(default)]
    pub supports: usize,
    #[serde(default)]
    pub refutes: usize,
    #[serde(default)]
    pub neutral: usize,
}

impl StanceSummary {
    pub const fn total(&self) -> usize {
        self.supports + self.refutes + self.neutral
    }

    pub const fn count(&self, label: StanceLabel) -> usize {
        match label {
            StanceLabel::Supports => self.supports,
            StanceLabel::Refutes => self.refutes,
            StanceLabel::Neutral => self.neutral,
        }
    }
}

/// Completed analysis payload from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub style_risk_score: f64,
    /// Informational only; groups are always recomputed from `evidence`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stance_summary: Option<StanceSummary>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub evidence: Vec<EvidenceItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub heatmap: Vec<Token>,
    #[serde(default)]
    pub linguistic_verdict: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub linguistic_signals: Vec<Signal>,
}

impl AnalysisResult {
    pub fn from_json(raw: &str) -> Result<Self, SynthesisError> {
        let value: Value = serde_json::from_str(raw).map_err(SynthesisError::Payload)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, SynthesisError> {
        match value.get("evidence") {
            None | Some(Value::Null) | Some(Value::Array(_)) => {}
            Some(other) => {
                return Err(SynthesisError::EvidenceNotSequence {
                    found: json_kind(other),
                })
            }
        }

        serde_json::from_value(value).map_err(SynthesisError::Payload)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_confidence<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_f64)
        .filter(|confidence| !confidence.is_nan())
        .map_or(0.0, |confidence| confidence.clamp(0.0, 1.0)))
}

/// Any stance that is not an object is dropped, so the item groups as neutral.
fn lenient_stance<'de, D>(deserializer: D) -> Result<Option<Stance>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("evidence must be a sequence, found {found}")]
    EvidenceNotSequence { found: &'static str },
    #[error("malformed analysis payload: {0}")]
    Payload(#[source] serde_json::Error),
}
