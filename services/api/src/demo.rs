use crate::infra::{read_analysis, sample_analysis};
use chrono::Local;
use clap::Args;
use prism::config::AppConfig;
use prism::error::AppError;
use prism::synthesis::saliency::VisualBucket;
use prism::synthesis::{AnalysisResult, BriefingNote, SynthesizedReport};
use prism::telemetry::{self, LogSink};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Completed analysis result as produced by the backend (JSON)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Job identifier used to reference an exported briefing
    #[arg(long)]
    pub(crate) job_id: Option<String>,
    /// Render the printable briefing note instead of the interactive report
    #[arg(long)]
    pub(crate) briefing: bool,
    /// Emit JSON instead of plain text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Also render the printable briefing note
    #[arg(long)]
    pub(crate) briefing: bool,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    init_cli_telemetry()?;

    let ReportArgs {
        input,
        job_id,
        briefing,
        json,
    } = args;

    let result = read_analysis(&input)?;
    let job_id = job_id.unwrap_or_else(|| {
        input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    render(&result, &job_id, briefing, json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    init_cli_telemetry()?;

    let result = sample_analysis()?;
    println!("Prism synthesis demo");
    render(&result, "demo-0001", false, false)?;
    if args.briefing {
        println!();
        render(&result, "demo-0001", true, false)?;
    }
    Ok(())
}

fn init_cli_telemetry() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_with_sink(&config.telemetry, LogSink::Stderr)?;
    Ok(())
}

fn render(
    result: &AnalysisResult,
    job_id: &str,
    briefing: bool,
    json: bool,
) -> Result<(), AppError> {
    let report = result.synthesize();

    if briefing {
        let note = BriefingNote::from_report(&report, job_id, Local::now().date_naive());
        if json {
            print_json(&note)?;
        } else {
            render_briefing(&note);
        }
    } else if json {
        print_json(&report)?;
    } else {
        render_report(&report);
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", to_json(value)?);
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    Ok(json)
}

pub(crate) fn render_report(report: &SynthesizedReport) {
    println!(
        "\n{} RISK ({}%): {}",
        report.risk_tier_label, report.display_score, report.headline
    );

    if report.has_annotations() {
        println!("\nLinguistic verdict");
        println!("- {}", report.linguistic_verdict);
        println!("Why this matters: {}", report.why_text);

        if !report.signals.is_empty() {
            println!("\nSignals");
            for signal in &report.signals {
                println!(
                    "- [{}] {} (trigger: {}): {}",
                    signal.pill_label(),
                    signal.name,
                    signal.trigger,
                    signal.explanation
                );
            }
        }

        println!("\nAnnotated text");
        println!("{}", annotate(report));
    }

    println!("\nVerification context");
    if !report.has_evidence() {
        println!("{}", report.verdict_text);
    } else {
        println!(
            "{} ({} sources)",
            report.verdict_text,
            report.evidence.total()
        );
        for section in report.evidence.sections() {
            println!("\n{} ({})", section.stance_label, section.len());
            for item in section.visible() {
                let source = item.url.as_deref().unwrap_or("Unknown Source");
                println!("- {} | {}", source, item.text);
            }
            let hidden = section.hidden_count();
            if hidden > 0 {
                println!("  ... {hidden} more");
            }
        }
    }

    println!("\nInterpretation: {}", report.interpretation_text);
}

fn annotate(report: &SynthesizedReport) -> String {
    report
        .styled_tokens
        .iter()
        .map(|styled| match styled.bucket {
            VisualBucket::None => styled.token.clone(),
            VisualBucket::SubtleUnderline => format!("_{}_", styled.token),
            VisualBucket::MediumUnderline => format!("__{}__", styled.token),
            VisualBucket::StrongHighlight => format!("**{}**", styled.token),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn render_briefing(note: &BriefingNote) {
    println!("PRISM INTELLIGENCE - ANALYSIS BRIEFING");
    println!("Verification Report | {} | REF: {}", note.generated_on, note.reference);

    println!("\nExecutive summary");
    println!("Risk assessment: {}", note.risk_assessment_label);
    println!("Linguistic risk score: {}/100", note.display_score);
    println!("{}", note.executive_summary);

    if !note.annotated_text.is_empty() {
        println!("\nLinguistic analysis");
        let text = note
            .annotated_text
            .iter()
            .map(|token| {
                if token.emphasized {
                    format!("_{}_", token.token)
                } else {
                    token.token.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("{text}");
    }

    println!("\nVerification evidence");
    for (title, items) in [
        ("Refuting sources", &note.refuting),
        ("Supporting sources", &note.supporting),
        ("Contextual sources", &note.contextual),
    ] {
        if items.is_empty() {
            continue;
        }
        println!("{title}");
        for item in items {
            let source = item.url.as_deref().unwrap_or("Unknown Source");
            println!("- {}: \"{}\"", source, item.text);
        }
    }
    if note.contextual_total > note.contextual.len() {
        println!(
            "({} further contextual sources omitted)",
            note.contextual_total - note.contextual.len()
        );
    }

    println!("\nConclusion: {}", note.conclusion);
}
