//! Classifier Prediction
//!
//! Boundary type for the output of the external image classifier. Model
//! loading and inference live outside this crate; we only receive either a
//! `(label, confidence)` pair or a probability vector over `CLASS_NAMES`.

use serde::{Deserialize, Serialize};

use crate::error::{DiagnosisError, Result};
use crate::labels::{class_name, NUM_CLASSES};
use crate::scorer::{diagnose, Diagnosis};

/// Number of alternative classes kept from a probability vector.
pub const TOP_K: usize = 5;

/// A single top-k entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedClass {
    pub index: usize,
    pub label: String,
    pub probability: f32,
}

/// Top-1 prediction from the external classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    /// Raw confidence as reported by the classifier (probability or percentage)
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_k: Vec<RankedClass>,
}

impl Prediction {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
            top_k: Vec::new(),
        }
    }

    /// Build a prediction from a probability distribution over all classes.
    ///
    /// The vector must have exactly `NUM_CLASSES` entries in `CLASS_NAMES`
    /// order and contain no NaN. Ties resolve to the lowest index.
    pub fn from_probabilities(probabilities: &[f32]) -> Result<Self> {
        if probabilities.len() != NUM_CLASSES {
            return Err(DiagnosisError::ProbabilityLength {
                expected: NUM_CLASSES,
                actual: probabilities.len(),
            });
        }
        if let Some(index) = probabilities.iter().position(|p| p.is_nan()) {
            return Err(DiagnosisError::ProbabilityNaN { index });
        }

        let mut indexed: Vec<(usize, f32)> = probabilities.iter().copied().enumerate().collect();
        // Stable sort keeps lower indices first among equal probabilities
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1));

        let top_k: Vec<RankedClass> = indexed
            .iter()
            .take(TOP_K)
            .filter_map(|&(index, probability)| {
                class_name(index).map(|label| RankedClass {
                    index,
                    label: label.to_string(),
                    probability,
                })
            })
            .collect();

        // Length was checked above, so top_k is non-empty
        let best = &top_k[0];

        tracing::debug!(
            label = best.label.as_str(),
            probability = best.probability,
            "selected top-1 class"
        );

        Ok(Self {
            label: best.label.clone(),
            confidence: f64::from(best.probability),
            top_k,
        })
    }

    /// Run the diagnosis core on this prediction.
    pub fn diagnose(&self) -> Diagnosis {
        diagnose(&self.label, self.confidence)
    }
}
