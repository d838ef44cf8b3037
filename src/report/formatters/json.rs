use crate::report::types::DiagnosisReport;

/// JSON formatter for diagnosis reports
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format report as pretty-printed JSON
    pub fn format(report: &DiagnosisReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// Format report as compact JSON (no whitespace)
    pub fn format_compact(report: &DiagnosisReport) -> Result<String, serde_json::Error> {
        serde_json::to_string(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::AdvisoryTables;
    use crate::report::ReportGenerator;
    use crate::scorer::diagnose;
    use chrono::{TimeZone, Utc};

    fn sample_report(label: &str, confidence: f64) -> DiagnosisReport {
        let diagnosis = diagnose(label, confidence);
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 5).unwrap();
        ReportGenerator::new().generate_at(&diagnosis, AdvisoryTables::shared(), at)
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&sample_report("Tomato___Bacterial_spot", 0.8)).unwrap();

        assert!(json.contains("\"pathogen\": \"Bacterium\""));
        assert!(json.contains("\"kind\": \"products\""));
        assert!(json.contains("\"generated_at\": \"2024-03-01 09:30:05\""));
    }

    #[test]
    fn test_format_compact_parses_back() {
        let report = sample_report("Grape___healthy", 0.75);
        let json = JsonFormatter::format_compact(&report).unwrap();

        assert!(!json.contains('\n'));
        assert!(json.contains("\"kind\":\"preventive\""));
        let parsed: DiagnosisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
