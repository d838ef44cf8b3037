//! Diagnosis Scorer - Main coordinator for scoring a single prediction
//!
//! Composes the core steps for one `(label, confidence)` pair:
//! normalize confidence -> classify pathogen -> health score -> severity tier.

use serde::{Deserialize, Serialize};

use crate::diagnosis::{
    calculate_health_score, classify_severity, infer_pathogen_type, normalize_confidence,
    PathogenCategory, PlantStatus, SeverityTier,
};
use crate::error::{DiagnosisError, Result};
use crate::labels::{condition_name, crop_name};

/// Diagnosis result for one classifier prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub label: String,
    pub crop: String,
    pub condition: String,
    /// Normalized confidence in [0, 1] for well-formed input
    pub confidence: f64,
    pub pathogen: PathogenCategory,
    pub health_score: f64,
    pub severity: SeverityTier,
    pub status: PlantStatus,
}

impl Diagnosis {
    /// Confidence as a percentage for display.
    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }

    pub fn is_healthy(&self) -> bool {
        self.pathogen.is_healthy()
    }
}

/// Diagnose a classifier prediction.
///
/// `raw_confidence` may be a probability or a percentage; it is normalized
/// before scoring. Total: unknown labels fall back to Fungus / base score 60.
pub fn diagnose(label: &str, raw_confidence: f64) -> Diagnosis {
    let confidence = normalize_confidence(raw_confidence);
    let pathogen = infer_pathogen_type(label);
    let health_score = calculate_health_score(label, confidence);
    let severity = classify_severity(health_score);

    tracing::debug!(
        label,
        confidence,
        pathogen = pathogen.as_str(),
        health_score,
        severity = severity.as_str(),
        "diagnosed prediction"
    );

    Diagnosis {
        label: label.to_string(),
        crop: crop_name(label).to_string(),
        condition: condition_name(label).to_string(),
        confidence,
        pathogen,
        health_score,
        severity,
        status: PlantStatus::from_pathogen(pathogen),
    }
}

/// Like `diagnose`, but rejects NaN and infinite confidences.
///
/// For input boundaries (CLI, deserialized requests) where a non-finite value
/// indicates a broken upstream classifier rather than a real prediction.
pub fn try_diagnose(label: &str, raw_confidence: f64) -> Result<Diagnosis> {
    if !raw_confidence.is_finite() {
        return Err(DiagnosisError::NonFiniteConfidence(raw_confidence));
    }
    Ok(diagnose(label, raw_confidence))
}
