use serde::{Deserialize, Serialize};

use crate::advisory::Treatment;
use crate::diagnosis::{PathogenCategory, PlantStatus, SeverityTier};

/// Complete diagnosis report, in section order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisReport {
    pub detection: DetectionSection,
    pub pathogen_biology: PathogenBiologySection,
    pub damage_assessment: Vec<DamageBand>,
    pub treatment: TreatmentSection,
    pub recovery: RecoverySection,
    pub yield_tips: YieldTipsSection,
    pub maintenance: Vec<String>,
    pub action_plan: Vec<String>,
    pub summary: ReportSummary,
    pub recommendations: Vec<String>,
    /// Formatted as `%Y-%m-%d %H:%M:%S`
    pub generated_at: String,
}

/// Section 1: what the classifier saw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionSection {
    pub label: String,
    pub crop: String,
    /// Human-readable condition, e.g. "Late blight"
    pub condition: String,
    pub confidence_percent: f64,
    pub status: PlantStatus,
    pub status_label: String,
    pub health_score: f64,
    pub severity: SeverityTier,
}

/// Section 2: pathogen category and protein reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathogenBiologySection {
    pub pathogen: PathogenCategory,
    pub uniprot_id: Option<String>,
    pub sequence: Option<String>,
    pub alphafold_url: Option<String>,
}

/// One leaf-area damage band with its expected yield impact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageBand {
    pub level: String,
    pub leaf_area: String,
    pub yield_impact: String,
}

/// Section 4: what to apply, if anything
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreatmentSection {
    /// Healthy plant: no pesticide, preventive practices only
    Preventive { practices: Vec<String> },
    Products {
        chemical: Vec<Treatment>,
        organic: Vec<Treatment>,
    },
    /// No treatment entry for the pathogen category
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoverySection {
    pub steps: Vec<String>,
    /// Set instead of steps for healthy plants or missing timelines
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldTipsSection {
    pub crop: String,
    pub tips: Vec<String>,
    /// True when no crop-specific tips were found
    pub generic: bool,
}

/// Closing summary block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub diagnosis: String,
    pub status_label: String,
    pub health_score: f64,
    pub treatment_priority: SeverityTier,
    pub expected_recovery: String,
    pub next_review: String,
}
