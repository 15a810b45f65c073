use prism::synthesis::{
    assemble, AnalysisResult, BriefingNote, ConflictState, DisclosureLimits, EvidenceItem,
    LinguisticTier, RiskTier, Signal, StanceLabel, Token, VisualBucket,
};
use chrono::NaiveDate;

fn evidence(labels: &[StanceLabel]) -> Vec<EvidenceItem> {
    labels
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            EvidenceItem::new(format!("{} source {idx}", label.label()), *label)
                .with_url(format!("https://news.example.org/articles/{idx}"))
        })
        .collect()
}

fn sample_signals() -> Vec<Signal> {
    vec![
        Signal::new(
            "Causal Absolutes",
            "causes",
            "Asserts a direct causal link without qualification.",
        ),
        Signal::new(
            "Emotional Loading",
            "shocking",
            "Uses emotionally charged vocabulary.",
        ),
        Signal::new(
            "Attribution Gap",
            "experts say",
            "Cites unnamed authorities.",
        ),
        Signal::new(
            "Conspiracy Framing",
            "they don't want you to know",
            "Frames the claim as suppressed knowledge.",
        ),
    ]
}

fn sample_tokens() -> Vec<Token> {
    vec![
        Token::new("Shocking", 0.72),
        Token::new("study", 0.12),
        Token::new("proves", 0.55),
        Token::new("everything", 0.31),
    ]
}

#[test]
fn refuted_high_risk_claim_end_to_end() {
    let items = evidence(&[
        StanceLabel::Refutes,
        StanceLabel::Neutral,
        StanceLabel::Refutes,
    ]);

    let report = assemble(&items, 85.0, &sample_tokens(), &sample_signals(), None);

    assert_eq!(report.conflict_state, ConflictState::OneSidedRefute);
    assert_eq!(report.risk_tier, RiskTier::High);
    assert_eq!(report.linguistic_tier, LinguisticTier::High);
    assert!(report.verdict_text.to_lowercase().contains("refute"));
    assert_eq!(report.evidence.refutes.limit, 2);
    assert_eq!(report.evidence.neutral.limit, 1);
    assert_eq!(report.evidence.supports.limit, 0);

    let refute_texts: Vec<_> = report
        .evidence
        .refutes
        .items
        .iter()
        .map(|item| item.text.as_str())
        .collect();
    assert_eq!(refute_texts, ["Refuting source 0", "Refuting source 2"]);

    assert_eq!(report.signals.len(), 3);
    assert_eq!(report.signals[2].pill_label(), "No attribution");
    assert_eq!(report.styled_tokens[0].bucket, VisualBucket::StrongHighlight);
    assert_eq!(report.styled_tokens[2].bucket, VisualBucket::MediumUnderline);
}

#[test]
fn empty_evidence_low_risk_end_to_end() {
    let report = assemble(&[], 10.0, &[], &[], None);

    assert_eq!(report.conflict_state, ConflictState::Empty);
    assert_eq!(report.risk_tier, RiskTier::Low);
    assert_eq!(report.linguistic_tier, LinguisticTier::Low);
    assert_eq!(report.verdict_text, "No evidence found.");
    assert!(!report.has_evidence());
    assert_eq!(report.evidence.sections().count(), 0);
    assert!(report.signals.is_empty());
    assert!(!report.has_annotations());
}

#[test]
fn conflicting_evidence_discloses_one_item_per_side() {
    let mut labels = vec![StanceLabel::Supports; 3];
    labels.extend([StanceLabel::Refutes; 2]);
    labels.extend([StanceLabel::Neutral; 4]);

    let report = assemble(&evidence(&labels), 52.0, &[], &[], None);

    assert_eq!(report.conflict_state, ConflictState::Conflicting);
    assert_eq!(
        report.evidence.limits(),
        DisclosureLimits {
            supports: 1,
            refutes: 1,
            neutral: 1,
        }
    );
    assert_eq!(report.evidence.total(), labels.len());
    assert_eq!(
        report.verdict_text,
        "Conflicting evidence: 2 refuting, 3 supporting."
    );
    assert!(report.interpretation_text.contains("mixed evidence"));
}

#[test]
fn one_sided_support_discloses_two() {
    let mut labels = vec![StanceLabel::Supports; 3];
    labels.extend([StanceLabel::Neutral; 4]);

    let report = assemble(&evidence(&labels), 45.0, &[], &[], None);

    assert_eq!(
        report.evidence.limits(),
        DisclosureLimits {
            supports: 2,
            refutes: 0,
            neutral: 1,
        }
    );
    assert_eq!(report.evidence.supports.hidden_count(), 1);
}

#[test]
fn assembling_twice_yields_equal_reports() {
    let items = evidence(&[
        StanceLabel::Supports,
        StanceLabel::Refutes,
        StanceLabel::Neutral,
    ]);
    let tokens = sample_tokens();
    let signals = sample_signals();

    let first = assemble(&items, 63.5, &tokens, &signals, Some("Upstream verdict"));
    let second = assemble(&items, 63.5, &tokens, &signals, Some("Upstream verdict"));

    assert_eq!(first, second);
}

#[test]
fn reports_can_be_computed_in_parallel() {
    let items = evidence(&[StanceLabel::Refutes, StanceLabel::Supports]);
    let tokens = sample_tokens();
    let expected = assemble(&items, 71.0, &tokens, &[], None);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| assemble(&items, 71.0, &tokens, &[], None)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("thread completes"), expected);
        }
    });
}

#[test]
fn upstream_payload_synthesizes_and_exports_briefing() {
    let payload = r#"{
        "style_risk_score": 27.4,
        "stance_summary": {"supports": 1, "refutes": 0, "neutral": 6},
        "evidence": [
            {"text": "Official statistics confirm the figure.", "url": "https://stats.example.gov/report", "stance": {"label": "supports", "confidence": 0.88}, "credibility": "high", "score": 0.81},
            {"text": "Context 1", "stance": {"label": "neutral", "confidence": 0.5}},
            {"text": "Context 2"},
            {"text": "Context 3", "stance": {"label": "unrelated", "confidence": 0.2}},
            {"text": "Context 4"},
            {"text": "Context 5"},
            {"text": "Context 6"}
        ],
        "heatmap": [{"token": "Unemployment", "score": 0.2}, {"token": "fell", "score": 0.9}],
        "linguistic_verdict": "",
        "linguistic_signals": null
    }"#;

    let result = AnalysisResult::from_json(payload).expect("payload parses");
    let report = result.synthesize();

    assert_eq!(report.conflict_state, ConflictState::OneSidedSupport);
    assert_eq!(report.risk_tier, RiskTier::Low);
    assert_eq!(report.evidence.neutral.len(), 6);
    assert!(report
        .styled_tokens
        .iter()
        .all(|token| token.bucket == VisualBucket::SubtleUnderline));
    assert!(!report.legend_visible);

    let generated_on = NaiveDate::from_ymd_opt(2025, 11, 3).expect("valid date");
    let briefing = BriefingNote::from_report(&report, "a1b2c3d4e5f6", generated_on);
    assert_eq!(briefing.reference, "a1b2c3d4");
    assert_eq!(briefing.contextual.len(), 5);
    assert_eq!(briefing.supporting.len(), 1);
    assert_eq!(
        briefing.conclusion,
        "This claim is supported by multiple independent reports."
    );
}
