use metrics_exporter_prometheus::PrometheusHandle;
use prism::error::AppError;
use prism::synthesis::AnalysisResult;
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn read_analysis(path: &Path) -> Result<AnalysisResult, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(AnalysisResult::from_json(&raw)?)
}

/// Conflicting-evidence sample used by the demo command.
pub(crate) const SAMPLE_ANALYSIS: &str = r#"{
    "style_risk_score": 64.2,
    "stance_summary": {"supports": 2, "refutes": 1, "neutral": 2},
    "evidence": [
        {"text": "Health agency review finds no causal link between the supplement and recovery time.", "url": "https://www.health.example.gov/reviews/supplement", "stance": {"label": "refutes", "confidence": 0.87}, "credibility": "high", "score": 0.79},
        {"text": "Small clinical trial reports faster recovery among participants taking the supplement.", "url": "https://journal.example.org/trial-2291", "stance": {"label": "supports", "confidence": 0.71}, "credibility": "medium", "score": 0.74},
        {"text": "Manufacturer press release claims the supplement cures fatigue.", "url": "https://press.example.com/release", "stance": {"label": "supports", "confidence": 0.64}, "credibility": "low", "score": 0.69},
        {"text": "Overview of dietary supplement regulation.", "url": "https://www.example.edu/supplements", "stance": {"label": "neutral", "confidence": 0.55}, "score": 0.51},
        {"text": "Interview with a sports nutritionist on recovery habits."}
    ],
    "heatmap": [
        {"token": "This", "score": 0.02},
        {"token": "miracle", "score": 0.81},
        {"token": "supplement", "score": 0.12},
        {"token": "completely", "score": 0.64},
        {"token": "cures", "score": 0.47},
        {"token": "fatigue", "score": 0.09}
    ],
    "linguistic_verdict": null,
    "linguistic_signals": [
        {"name": "Emotional Loading", "trigger": "miracle", "explanation": "Emotionally charged wording invites acceptance without evidence."},
        {"name": "Causal Absolutes", "trigger": "completely cures", "explanation": "States an unqualified causal effect."}
    ]
}"#;

pub(crate) fn sample_analysis() -> Result<AnalysisResult, AppError> {
    Ok(AnalysisResult::from_json(SAMPLE_ANALYSIS)?)
}
