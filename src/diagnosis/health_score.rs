//! Health Score
//!
//! Maps (label, confidence) to a synthetic 0-100 plant vigor score.
//!
//! Healthy labels: `min(100, confidence * 120)`, no floor.
//! Disease labels: base score from an ordered keyword table, scaled by
//! `1 - confidence * 0.5`, floored at 10.
//!
//! The constants are empirical and pinned exactly; downstream reports and
//! tests depend on these literal values.

/// Multiplier applied to confidence for healthy detections.
pub const HEALTHY_CONFIDENCE_MULTIPLIER: f64 = 120.0;

/// Upper bound of the health score.
pub const MAX_HEALTH_SCORE: f64 = 100.0;

/// Lower bound of the health score for disease labels.
pub const MIN_DISEASE_SCORE: f64 = 10.0;

/// Fraction of the base score removed at confidence 1.0.
pub const CONFIDENCE_DECAY: f64 = 0.5;

/// Base score when no keyword in `BASE_SCORES` matches.
pub const DEFAULT_BASE_SCORE: f64 = 60.0;

/// Disease base scores, evaluated top to bottom (first match wins).
///
/// | Keyword      | Base |
/// |--------------|------|
/// | virus        | 30   |
/// | late_blight  | 35   |
/// | early_blight | 45   |
/// | bacterial    | 40   |
/// | mold         | 55   |
/// | rust         | 50   |
/// | scab         | 60   |
/// | mildew       | 65   |
pub const BASE_SCORES: &[(&str, f64)] = &[
    ("virus", 30.0),
    ("late_blight", 35.0),
    ("early_blight", 45.0),
    ("bacterial", 40.0),
    ("mold", 55.0),
    ("rust", 50.0),
    ("scab", 60.0),
    ("mildew", 65.0),
];

/// Normalize a raw classifier confidence to [0, 1].
///
/// Values above 1 are treated as percentages and divided by 100.
/// Values at or below 1 are returned unchanged (no clamping).
pub fn normalize_confidence(raw: f64) -> f64 {
    if raw <= 1.0 {
        raw
    } else {
        raw / 100.0
    }
}

/// Base score for a disease label (already lowercased).
pub fn disease_base_score(label_lower: &str) -> f64 {
    BASE_SCORES
        .iter()
        .find(|(keyword, _)| label_lower.contains(*keyword))
        .map(|(_, base)| *base)
        .unwrap_or(DEFAULT_BASE_SCORE)
}

/// Calculate health score based on disease label and confidence.
///
/// `confidence` is expected pre-normalized (see `normalize_confidence`); values
/// outside [0, 1] are not rejected. Total over any string and any float.
///
/// # Examples
/// ```
/// use leaf_diagnosis::diagnosis::calculate_health_score;
///
/// assert_eq!(calculate_health_score("Tomato___healthy", 1.0), 100.0);
/// assert_eq!(calculate_health_score("Tomato___Late_blight", 0.0), 35.0);
/// assert_eq!(calculate_health_score("Tomato___Late_blight", 1.0), 17.5);
/// ```
pub fn calculate_health_score(label: &str, confidence: f64) -> f64 {
    let label_lower = label.to_lowercase();

    if label_lower.contains("healthy") {
        return (confidence * HEALTHY_CONFIDENCE_MULTIPLIER).min(MAX_HEALTH_SCORE);
    }

    let base_score = disease_base_score(&label_lower);
    let adjusted = base_score * (1.0 - confidence * CONFIDENCE_DECAY);
    adjusted.max(MIN_DISEASE_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_healthy_branch() {
        assert_eq!(calculate_health_score("X___healthy", 0.0), 0.0);
        assert_eq!(calculate_health_score("X___healthy", 1.0), 100.0);
        assert_eq!(calculate_health_score("X___healthy", 0.9), 100.0);
        assert_relative_eq!(calculate_health_score("X___Healthy", 0.5), 60.0);
    }

    #[test]
    fn test_nan_confidence_absorbed_by_bounds() {
        // f64::min / f64::max return the non-NaN operand
        assert_eq!(calculate_health_score("Tomato___healthy", f64::NAN), 100.0);
        assert_eq!(calculate_health_score("Tomato___Late_blight", f64::NAN), 10.0);
        assert_eq!(calculate_health_score("garbage", f64::NAN), 10.0);
        assert!(normalize_confidence(f64::NAN).is_nan());
    }

    #[test]
    fn test_healthy_cap_threshold() {
        // 100 is reached once confidence * 120 >= 100, i.e. confidence >= 5/6
        assert!(calculate_health_score("Apple___healthy", 0.83) < 100.0);
        assert_eq!(calculate_health_score("Apple___healthy", 0.834), 100.0);
    }

    #[test]
    fn test_late_blight() {
        assert_eq!(calculate_health_score("Tomato___Late_blight", 0.0), 35.0);
        assert_eq!(calculate_health_score("Tomato___Late_blight", 1.0), 17.5);
    }

    #[test]
    fn test_base_scores_per_keyword() {
        let cases = [
            ("Tomato___Tomato_mosaic_virus", 30.0),
            ("Potato___Late_blight", 35.0),
            ("Potato___Early_blight", 45.0),
            ("Peach___Bacterial_spot", 40.0),
            ("Tomato___Leaf_Mold", 55.0),
            ("Corn_(maize)___Common_rust_", 50.0),
            ("Apple___Apple_scab", 60.0),
            ("Squash___Powdery_mildew", 65.0),
            ("Grape___Black_rot", 60.0),
        ];
        for (label, base) in cases {
            assert_eq!(calculate_health_score(label, 0.0), base, "label {}", label);
        }
    }

    #[test]
    fn test_first_match_wins() {
        // "virus" precedes "bacterial" in the table
        assert_eq!(calculate_health_score("bacterial virus", 0.0), 30.0);
        // "rust" precedes "mildew"
        assert_eq!(calculate_health_score("mildew rust", 0.0), 50.0);
    }

    #[test]
    fn test_default_formula() {
        for c in [0.0_f64, 0.25, 0.5, 0.75, 1.0] {
            let expected = (60.0 * (1.0 - 0.5 * c)).max(10.0);
            assert_relative_eq!(calculate_health_score("Grape___Esca_(Black_Measles)", c), expected);
        }
    }

    #[test]
    fn test_floor_applies_outside_unit_range() {
        // Unnormalized confidence drives the adjusted score negative
        assert_eq!(calculate_health_score("Tomato___Tomato_mosaic_virus", 5.0), 10.0);
    }

    #[test]
    fn test_normalize_confidence() {
        assert_eq!(normalize_confidence(0.3), 0.3);
        assert_eq!(normalize_confidence(1.0), 1.0);
        assert_relative_eq!(normalize_confidence(87.5), 0.875);
        assert_eq!(normalize_confidence(100.0), 1.0);
        assert_eq!(normalize_confidence(-0.2), -0.2);
    }
}
