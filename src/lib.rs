//! Leaf Diagnosis
//!
//! Turns a plant-leaf classifier prediction (label + confidence) into a
//! diagnosis and a multi-section advisory report.
//!
//! - `labels/`: PlantVillage class vocabulary and label parsing
//! - `diagnosis/`: pathogen classification, health score, severity tiers
//! - `scorer`: single-prediction coordinator
//! - `prediction`: class probability vectors -> top-1 + top-k
//! - `advisory/`: treatment, recovery, yield and protein lookup tables
//! - `report/`: report generation and markdown / JSON / HTML formatters

pub mod labels;
pub mod diagnosis;
pub mod scorer;
pub mod prediction;
pub mod advisory;
pub mod report;
pub mod error;

// Re-export commonly used types
pub use diagnosis::{
    calculate_health_score, classify_severity, infer_pathogen_type, normalize_confidence,
    PathogenCategory, PlantStatus, SeverityTier,
};
pub use scorer::{diagnose, try_diagnose, Diagnosis};
pub use prediction::{Prediction, RankedClass};
pub use advisory::AdvisoryTables;
pub use report::{
    DiagnosisReport, HtmlFormatter, JsonFormatter, MarkdownFormatter, ReportFormat, ReportGenerator,
};
pub use error::{DiagnosisError, Result};
