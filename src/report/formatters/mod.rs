pub mod markdown;
pub mod json;
pub mod html;

pub use markdown::MarkdownFormatter;
pub use json::JsonFormatter;
pub use html::HtmlFormatter;

use crate::advisory::Treatment;
use crate::report::content::NOT_AVAILABLE;

/// Output format selector for callers that pick a formatter at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
    Html,
}

/// `- Name | Dose: ... | Purpose: ...` body shared by the text formatters
pub(crate) fn treatment_line(treatment: &Treatment) -> String {
    format!(
        "{} | Dose: {} | Purpose: {}",
        treatment.name, treatment.dose, treatment.purpose
    )
}

pub(crate) fn or_not_available(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}
