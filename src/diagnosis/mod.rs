//! Diagnosis Core
//!
//! The two functions with decision logic:
//! - `infer_pathogen_type`: label -> pathogen category (ordered keyword rules)
//! - `calculate_health_score`: (label, confidence) -> health score
//!
//! Plus severity derivation and confidence normalization. Everything here is
//! pure, total and allocation-light; safe to call from any thread.

pub mod types;
pub mod classify;
pub mod health_score;

pub use types::{PathogenCategory, PlantStatus, SeverityTier};
pub use classify::{classify_severity, infer_pathogen_type};
pub use health_score::{calculate_health_score, normalize_confidence};
