//! Report Generator
//!
//! Assembles the nine report sections for one `Diagnosis`:
//! detection, pathogen biology, damage assessment, treatment, recovery,
//! yield tips, long-term maintenance, action plan and summary.
//!
//! Public API:
//! - ReportGenerator::new() -> Self
//! - ReportGenerator::generate(diagnosis, tables) -> DiagnosisReport
//! - ReportGenerator::generate_at(diagnosis, tables, generated_at) -> DiagnosisReport

use chrono::{DateTime, Utc};

use crate::advisory::{AdvisoryTables, GENERIC_YIELD_TIP, NO_RECOVERY_NEEDED, PREVENTIVE_PRACTICES};
use crate::diagnosis::SeverityTier;
use crate::labels::display_condition;
use crate::report::content::{
    ACTION_PLAN_DISEASED, ACTION_PLAN_HEALTHY, CONSULT_EXTENSION, DAMAGE_BANDS, MAINTENANCE,
    RECOMMENDATIONS, RECOVERY_ROUTINE, RECOVERY_TREATMENT, REVIEW_DISEASED, REVIEW_HEALTHY,
    TIMESTAMP_FORMAT,
};
use crate::report::types::*;
use crate::scorer::Diagnosis;

/// Report generator - stateless, all lookups go through `AdvisoryTables`.
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a report stamped with the current time.
    pub fn generate(&self, diagnosis: &Diagnosis, tables: &AdvisoryTables) -> DiagnosisReport {
        self.generate_at(diagnosis, tables, Utc::now())
    }

    /// Generate a report with a fixed timestamp.
    pub fn generate_at(
        &self,
        diagnosis: &Diagnosis,
        tables: &AdvisoryTables,
        generated_at: DateTime<Utc>,
    ) -> DiagnosisReport {
        let report = DiagnosisReport {
            detection: detection_section(diagnosis),
            pathogen_biology: pathogen_biology_section(diagnosis, tables),
            damage_assessment: damage_bands(),
            treatment: treatment_section(diagnosis, tables),
            recovery: recovery_section(diagnosis, tables),
            yield_tips: yield_tips_section(diagnosis, tables),
            maintenance: to_strings(MAINTENANCE),
            action_plan: action_plan(diagnosis),
            summary: summary(diagnosis),
            recommendations: to_strings(RECOMMENDATIONS),
            generated_at: generated_at.format(TIMESTAMP_FORMAT).to_string(),
        };

        tracing::debug!(
            label = %diagnosis.label,
            severity = diagnosis.severity.as_str(),
            generic_tips = report.yield_tips.generic,
            "generated report"
        );

        report
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SECTIONS
// ============================================================================

fn detection_section(diagnosis: &Diagnosis) -> DetectionSection {
    DetectionSection {
        label: diagnosis.label.clone(),
        crop: diagnosis.crop.clone(),
        condition: display_condition(&diagnosis.condition),
        confidence_percent: diagnosis.confidence_percent(),
        status: diagnosis.status,
        status_label: diagnosis.status.label().to_string(),
        health_score: diagnosis.health_score,
        severity: diagnosis.severity,
    }
}

fn pathogen_biology_section(diagnosis: &Diagnosis, tables: &AdvisoryTables) -> PathogenBiologySection {
    let protein = tables.protein_for(&diagnosis.label);

    PathogenBiologySection {
        pathogen: diagnosis.pathogen,
        uniprot_id: protein.map(|p| p.uniprot_id.clone()),
        sequence: protein.and_then(|p| p.sequence.clone()),
        alphafold_url: protein.map(|p| p.alphafold_url()),
    }
}

fn damage_bands() -> Vec<DamageBand> {
    DAMAGE_BANDS
        .iter()
        .map(|band| DamageBand {
            level: band.level.to_string(),
            leaf_area: band.leaf_area.to_string(),
            yield_impact: band.yield_impact.to_string(),
        })
        .collect()
}

fn treatment_section(diagnosis: &Diagnosis, tables: &AdvisoryTables) -> TreatmentSection {
    if diagnosis.is_healthy() {
        return TreatmentSection::Preventive {
            practices: to_strings(PREVENTIVE_PRACTICES),
        };
    }

    match tables.treatment_for(diagnosis.pathogen) {
        Some(plan) => TreatmentSection::Products {
            chemical: plan.chemical.clone(),
            organic: plan.organic.clone(),
        },
        None => TreatmentSection::Unavailable,
    }
}

fn recovery_section(diagnosis: &Diagnosis, tables: &AdvisoryTables) -> RecoverySection {
    // Healthy plants skip the timeline only in the Good tier
    if diagnosis.is_healthy() && diagnosis.severity == SeverityTier::Good {
        return RecoverySection {
            steps: Vec::new(),
            note: Some(NO_RECOVERY_NEEDED.to_string()),
        };
    }

    let steps = tables.timeline_for(diagnosis.severity).to_vec();
    let note = steps.is_empty().then(|| CONSULT_EXTENSION.to_string());
    RecoverySection { steps, note }
}

fn yield_tips_section(diagnosis: &Diagnosis, tables: &AdvisoryTables) -> YieldTipsSection {
    match tables.yield_tips_for(&diagnosis.crop) {
        Some(tips) if !tips.is_empty() => YieldTipsSection {
            crop: diagnosis.crop.clone(),
            tips: tips.to_vec(),
            generic: false,
        },
        _ => YieldTipsSection {
            crop: diagnosis.crop.clone(),
            tips: vec![GENERIC_YIELD_TIP.to_string()],
            generic: true,
        },
    }
}

fn action_plan(diagnosis: &Diagnosis) -> Vec<String> {
    if diagnosis.is_healthy() {
        to_strings(ACTION_PLAN_HEALTHY)
    } else {
        to_strings(ACTION_PLAN_DISEASED)
    }
}

fn summary(diagnosis: &Diagnosis) -> ReportSummary {
    let healthy = diagnosis.is_healthy();

    ReportSummary {
        diagnosis: format!(
            "{} ({:.2}% confidence)",
            diagnosis.label,
            diagnosis.confidence_percent()
        ),
        status_label: diagnosis.status.label().to_string(),
        health_score: diagnosis.health_score,
        treatment_priority: diagnosis.severity,
        expected_recovery: if healthy { RECOVERY_ROUTINE } else { RECOVERY_TREATMENT }.to_string(),
        next_review: if healthy { REVIEW_HEALTHY } else { REVIEW_DISEASED }.to_string(),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
