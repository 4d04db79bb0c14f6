//! Human-readable rendering of an evaluation

use bidfit_core::{EvaluationResult, ScaleAlignment};
use bidfit_steps::{
    EVIDENCE_QUALITY_WEIGHT, EXPERIENCE_WEIGHT, REPUTATION_IMPACT_WEIGHT, SCALE_FIT_WEIGHT,
};
use std::fmt::Write;

pub fn render(result: &EvaluationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Evaluation: {}", result.company_name);
    let _ = writeln!(out);

    let _ = writeln!(out, "Key signals");
    let _ = writeln!(
        out,
        "  comparable experience : {}",
        yes_no(result.signals.has_comparable_experience)
    );
    let _ = writeln!(
        out,
        "  scale alignment       : {}",
        scale(result.signals.scale_alignment)
    );
    let _ = writeln!(
        out,
        "  recent negative news  : {}",
        yes_no(result.signals.recent_negative_news)
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Scoring breakdown        score  weight  weighted");
    let rows = [
        ("experience", result.scores.experience, EXPERIENCE_WEIGHT, result.weighted.experience),
        ("scale fit", result.scores.scale_fit, SCALE_FIT_WEIGHT, result.weighted.scale_fit),
        (
            "evidence quality",
            result.scores.evidence_quality,
            EVIDENCE_QUALITY_WEIGHT,
            result.weighted.evidence_quality,
        ),
        (
            "reputation impact",
            result.scores.reputation_impact,
            REPUTATION_IMPACT_WEIGHT,
            result.weighted.reputation_impact,
        ),
    ];
    for (label, score, weight, weighted) in rows {
        let _ = writeln!(out, "  {label:<22} {score:>5.2}  {weight:>6.2}  {weighted:>8.3}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Overall confidence: {:.3}", result.overall_confidence);
    let _ = writeln!(out);
    let _ = writeln!(out, "Why this confidence?");
    let _ = writeln!(out, "  {}", result.explanation);

    if !result.sources.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Sources");
        for source in &result.sources {
            let _ = writeln!(out, "  - {source}");
        }
    }
    out
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn scale(value: ScaleAlignment) -> &'static str {
    match value {
        ScaleAlignment::Low => "Low",
        ScaleAlignment::Medium => "Medium",
        ScaleAlignment::High => "High",
    }
}
