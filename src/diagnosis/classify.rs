//! Classification functions for leaf diagnosis.
//!
//! Ordered keyword rules: the first rule whose keyword appears in the
//! lowercased label wins, so rule order is part of the contract.

use crate::diagnosis::types::*;

// ============================================================================
// Pathogen Classification
// ============================================================================

/// Keyword rules for pathogen classification, evaluated top to bottom.
/// Labels matching no rule fall through to `PathogenCategory::Fungus`.
pub const PATHOGEN_RULES: &[(&[&str], PathogenCategory)] = &[
    (&["healthy"], PathogenCategory::Healthy),
    (&["virus", "mosaic"], PathogenCategory::Virus),
    (&["bacterial"], PathogenCategory::Bacterium),
    (&["mite", "spider"], PathogenCategory::Arthropod),
];

/// Fallback category for rust, blight, scab, mold, mildew and anything else
/// without a more specific keyword.
pub const DEFAULT_PATHOGEN: PathogenCategory = PathogenCategory::Fungus;

/// Classify a disease label into a pathogen category.
///
/// Case-insensitive, total: every string maps to exactly one category.
/// - contains "healthy": Healthy
/// - contains "virus" or "mosaic": Virus
/// - contains "bacterial": Bacterium
/// - contains "mite" or "spider": Arthropod
/// - otherwise: Fungus
pub fn infer_pathogen_type(label: &str) -> PathogenCategory {
    let label_lower = label.to_lowercase();

    PATHOGEN_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| label_lower.contains(*k)))
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_PATHOGEN)
}

// ============================================================================
// Severity Classification
// ============================================================================

/// Score at or below which severity is High.
pub const HIGH_SEVERITY_MAX_SCORE: f64 = 10.0;

/// Score from which severity is Good.
pub const GOOD_SEVERITY_MIN_SCORE: f64 = 50.0;

/// Classify severity tier from a health score.
/// No hysteresis: the same score always gives the same tier.
pub fn classify_severity(health_score: f64) -> SeverityTier {
    SeverityTier::from_score(health_score)
}
