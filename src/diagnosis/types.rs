//! Shared data types for leaf diagnosis.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::diagnosis::classify::{GOOD_SEVERITY_MIN_SCORE, HIGH_SEVERITY_MAX_SCORE};

/// Coarse class of disease-causing agent, or healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathogenCategory {
    Healthy,
    Virus,
    Bacterium,
    Arthropod,
    Fungus,
}

impl PathogenCategory {
    /// All categories, in classification rule order.
    pub const ALL: [PathogenCategory; 5] = [
        PathogenCategory::Healthy,
        PathogenCategory::Virus,
        PathogenCategory::Bacterium,
        PathogenCategory::Arthropod,
        PathogenCategory::Fungus,
    ];

    /// Display name, also used as the treatment table key.
    pub fn as_str(&self) -> &'static str {
        match self {
            PathogenCategory::Healthy => "Healthy",
            PathogenCategory::Virus => "Virus",
            PathogenCategory::Bacterium => "Bacterium",
            PathogenCategory::Arthropod => "Arthropod",
            PathogenCategory::Fungus => "Fungus",
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, PathogenCategory::Healthy)
    }
}

impl fmt::Display for PathogenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Triage bucket derived from the health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeverityTier {
    High,
    Medium,
    Good,
}

impl SeverityTier {
    pub const ALL: [SeverityTier; 3] = [SeverityTier::High, SeverityTier::Medium, SeverityTier::Good];

    /// Derive severity from a health score (0-100).
    /// - score <= 10: High
    /// - score < 50: Medium
    /// - otherwise: Good
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s <= HIGH_SEVERITY_MAX_SCORE => SeverityTier::High,
            s if s < GOOD_SEVERITY_MIN_SCORE => SeverityTier::Medium,
            _ => SeverityTier::Good,
        }
    }

    /// Display name, also used as the recovery timeline key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::High => "High",
            SeverityTier::Medium => "Medium",
            SeverityTier::Good => "Good",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall plant status shown in the report header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantStatus {
    Healthy,
    Diseased,
}

impl PlantStatus {
    pub fn from_pathogen(pathogen: PathogenCategory) -> Self {
        if pathogen.is_healthy() {
            PlantStatus::Healthy
        } else {
            PlantStatus::Diseased
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlantStatus::Healthy => "HEALTHY ✅",
            PlantStatus::Diseased => "DISEASED ⚠️",
        }
    }
}
