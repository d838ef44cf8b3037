//! Recovery timeline steps per severity tier.

use crate::diagnosis::SeverityTier;

pub static HIGH_TIMELINE: &[&str] = &[
    "Immediate: Begin treatment within 24–48 hours",
    "2–4 weeks: Remove severely infected plants",
    "1 season: Strict prevention and sanitation",
];

pub static MEDIUM_TIMELINE: &[&str] = &[
    "Immediate: Apply recommended treatment",
    "2–4 weeks: Remove infected leaves",
    "1 season: Improve soil and crop rotation",
];

/// Good tier: light-touch monitoring for a plant with a mild infection.
pub static GOOD_TIMELINE: &[&str] = &[
    "Immediate: Monitor plant regularly",
    "2–4 weeks: Observe symptom changes",
    "1 season: Preventive care",
];

/// Shown instead of a timeline when the plant is healthy.
pub const NO_RECOVERY_NEEDED: &str = "No recovery actions required (plant is healthy).";

pub fn timeline(tier: SeverityTier) -> &'static [&'static str] {
    match tier {
        SeverityTier::High => HIGH_TIMELINE,
        SeverityTier::Medium => MEDIUM_TIMELINE,
        SeverityTier::Good => GOOD_TIMELINE,
    }
}
