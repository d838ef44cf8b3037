//! Diagnosis report generation
//!
//! `ReportGenerator` turns a `Diagnosis` plus `AdvisoryTables` into a
//! structured `DiagnosisReport`; the formatters render it as markdown,
//! JSON or standalone HTML.

pub mod content;
pub mod formatters;
pub mod generator;
pub mod types;

pub use formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter, ReportFormat};
pub use generator::ReportGenerator;
pub use types::*;
