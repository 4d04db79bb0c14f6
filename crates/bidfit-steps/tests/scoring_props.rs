//! Property tests for the scoring arithmetic

use bidfit_core::ScoreBreakdown;
use bidfit_steps::{overall_confidence, validate_sub_scores, weighted_contributions, WEIGHTS};
use proptest::prelude::*;

fn sub_score() -> impl Strategy<Value = f64> {
    0.0..=1.0f64
}

fn breakdown() -> impl Strategy<Value = ScoreBreakdown> {
    (sub_score(), sub_score(), sub_score(), sub_score()).prop_map(
        |(experience, scale_fit, evidence_quality, reputation_impact)| ScoreBreakdown {
            experience,
            scale_fit,
            evidence_quality,
            reputation_impact,
        },
    )
}

#[test]
fn weights_sum_to_exactly_one() {
    let total: f64 = WEIGHTS.iter().sum();
    assert!((total - 1.0).abs() < f64::EPSILON);
}

proptest! {
    // Every valid sub-score vector stays within the confidence bounds.
    #[test]
    fn confidence_is_bounded(scores in breakdown()) {
        prop_assert!(validate_sub_scores(&scores).is_ok());
        let overall = overall_confidence(&scores);
        prop_assert!((0.0..=1.0).contains(&overall));
    }

    // Raising any single sub-score never lowers the confidence.
    #[test]
    fn confidence_is_monotone_per_component(
        scores in breakdown(),
        component in 0usize..4,
        bump in 0.0..=1.0f64,
    ) {
        let mut raised = scores;
        let slot = match component {
            0 => &mut raised.experience,
            1 => &mut raised.scale_fit,
            2 => &mut raised.evidence_quality,
            _ => &mut raised.reputation_impact,
        };
        *slot = (*slot + bump).min(1.0);
        prop_assert!(overall_confidence(&raised) >= overall_confidence(&scores));
    }

    // Pointwise-dominating sub-scores dominate overall: a company whose
    // prior work is larger-scale (experience and scale_fit no lower,
    // everything else equal) is never penalized.
    #[test]
    fn dominating_scores_never_lose(
        scores in breakdown(),
        exp_gain in 0.0..=1.0f64,
        scale_gain in 0.0..=1.0f64,
    ) {
        let larger = ScoreBreakdown {
            experience: (scores.experience + exp_gain).min(1.0),
            scale_fit: (scores.scale_fit + scale_gain).min(1.0),
            ..scores
        };
        prop_assert!(overall_confidence(&larger) >= overall_confidence(&scores));
    }

    // The exposed weighted contributions always recompose into the
    // overall confidence.
    #[test]
    fn contributions_recompose(scores in breakdown()) {
        let weighted = weighted_contributions(&scores);
        let overall = overall_confidence(&scores);
        prop_assert!((weighted.total() - overall).abs() < 1e-12);
        prop_assert!((weighted.experience - scores.experience * WEIGHTS[0]).abs() < 1e-12);
    }
}
