//! Scoring Property Tests
//!
//! Invariants of the diagnosis core checked over generated labels and
//! confidences with proptest.

use leaf_diagnosis::labels::CLASS_NAMES;
use leaf_diagnosis::{
    calculate_health_score, classify_severity, diagnose, infer_pathogen_type, normalize_confidence,
    PathogenCategory, SeverityTier,
};
use proptest::prelude::*;

fn disease_label() -> impl Strategy<Value = &'static str> {
    prop::sample::select(
        CLASS_NAMES
            .iter()
            .copied()
            .filter(|label| !label.to_lowercase().contains("healthy"))
            .collect::<Vec<_>>(),
    )
}

fn healthy_label() -> impl Strategy<Value = &'static str> {
    prop::sample::select(
        CLASS_NAMES
            .iter()
            .copied()
            .filter(|label| label.ends_with("healthy"))
            .collect::<Vec<_>>(),
    )
}

// ============================================================================
// Health score bounds
// ============================================================================

proptest! {
    #[test]
    fn disease_score_never_below_floor(label in disease_label(), c in 0.0f64..=1.0) {
        let score = calculate_health_score(label, c);
        prop_assert!(score >= 10.0);
        prop_assert!(score <= 65.0);
    }

    #[test]
    fn healthy_score_capped_at_100(label in healthy_label(), c in 0.0f64..=1.0) {
        let score = calculate_health_score(label, c);
        prop_assert!((0.0..=100.0).contains(&score));
        prop_assert_eq!(score, (c * 120.0).min(100.0));
    }

    #[test]
    fn disease_score_non_increasing_in_confidence(
        label in disease_label(),
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(calculate_health_score(label, lo) >= calculate_health_score(label, hi));
    }

    #[test]
    fn unmatched_disease_label_uses_default_base(
        crop in "[A-Z][a-z]{2,8}",
        condition in "[A-Z][a-z]{2,10}",
        c in 0.0f64..=1.0,
    ) {
        let label = format!("{}___{}", crop, condition);
        let lower = label.to_lowercase();
        let keywords = [
            "healthy", "virus", "mosaic", "bacterial", "mite", "spider",
            "late_blight", "early_blight", "mold", "rust", "scab", "mildew",
        ];
        prop_assume!(!keywords.iter().any(|k| lower.contains(k)));

        prop_assert_eq!(infer_pathogen_type(&label), PathogenCategory::Fungus);
        prop_assert_eq!(calculate_health_score(&label, c), (60.0 * (1.0 - 0.5 * c)).max(10.0));
    }

    #[test]
    fn healthy_score_non_decreasing_in_confidence(
        label in healthy_label(),
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(calculate_health_score(label, lo) <= calculate_health_score(label, hi));
    }
}

// ============================================================================
// Totality and consistency
// ============================================================================

proptest! {
    #[test]
    fn diagnose_is_total(label in ".{0,64}", raw in -1000.0f64..1000.0) {
        let diagnosis = diagnose(&label, raw);
        prop_assert!(diagnosis.health_score.is_finite());
        prop_assert_eq!(diagnosis.severity, classify_severity(diagnosis.health_score));
        prop_assert_eq!(diagnosis.pathogen, infer_pathogen_type(&label));
    }

    #[test]
    fn healthy_keyword_wins(prefix in "[a-z_ ]{0,16}", suffix in "(virus|mosaic|bacterial|spider_mite|rust)") {
        let label = format!("{}HEALTHY{}", prefix, suffix);
        prop_assert_eq!(infer_pathogen_type(&label), PathogenCategory::Healthy);
    }

    #[test]
    fn percentages_normalize_to_fractions(raw in 1.0001f64..100.0) {
        prop_assert!((normalize_confidence(raw) - raw / 100.0).abs() < 1e-12);
    }

    #[test]
    fn severity_tiers_partition_scores(score in 0.0f64..=100.0) {
        let tier = classify_severity(score);
        let expected = if score <= 10.0 {
            SeverityTier::High
        } else if score < 50.0 {
            SeverityTier::Medium
        } else {
            SeverityTier::Good
        };
        prop_assert_eq!(tier, expected);
    }
}
