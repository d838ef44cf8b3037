use crate::report::content::{
    CONSULT_EXTENSION, NO_PESTICIDE, PREVENTIVE_INTRO, SEQUENCE_NOT_AVAILABLE, TREATMENT_UNAVAILABLE,
};
use crate::report::formatters::{or_not_available, treatment_line};
use crate::report::types::{DiagnosisReport, TreatmentSection};

/// Markdown formatter for diagnosis reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format report as markdown
    pub fn format(report: &DiagnosisReport) -> String {
        let mut md = String::with_capacity(4096);
        let detection = &report.detection;

        md.push_str(&format!("# Leaf Diagnosis: {}\n\n", detection.label));

        // 1. Detection
        md.push_str("## 📊 1. Detection Results\n\n");
        md.push_str(&format!("- **Predicted Disease:** {}\n", detection.label));
        md.push_str(&format!("- **Crop:** {}\n", detection.crop));
        if !detection.condition.is_empty() {
            md.push_str(&format!("- **Condition:** {}\n", detection.condition));
        }
        md.push_str(&format!(
            "- **Detection Confidence:** {:.2}%\n",
            detection.confidence_percent
        ));
        md.push_str(&format!("- **Plant Status:** {}\n", detection.status_label));
        md.push_str(&format!("- **Health Score:** {:.1}%\n", detection.health_score));
        md.push_str(&format!("- **Disease Severity:** {}\n\n", detection.severity));

        // 2. Pathogen biology
        let biology = &report.pathogen_biology;
        md.push_str("## 🦠 2. Pathogen Biology\n\n");
        md.push_str(&format!("- **Pathogen Type:** {}\n", biology.pathogen));
        md.push_str(&format!(
            "- **UniProt ID:** {}\n",
            or_not_available(biology.uniprot_id.as_deref())
        ));
        md.push_str(&format!(
            "- **Key Protein Sequence:** `{}`\n",
            biology.sequence.as_deref().unwrap_or(SEQUENCE_NOT_AVAILABLE)
        ));
        md.push_str(&format!(
            "- **3D Structure Prediction:** {}\n\n",
            or_not_available(biology.alphafold_url.as_deref())
        ));

        // 3. Damage assessment
        md.push_str("## 🔍 3. Damage Assessment\n\n");
        for band in &report.damage_assessment {
            md.push_str(&format!(
                "- **{}:** {} – {}\n",
                band.level, band.leaf_area, band.yield_impact
            ));
        }
        md.push('\n');

        // 4. Treatment
        md.push_str("## 💊 4. Treatment Recommendations\n\n");
        match &report.treatment {
            TreatmentSection::Preventive { practices } => {
                md.push_str(&format!("- {}\n", NO_PESTICIDE));
                md.push_str(&format!("- {}\n", PREVENTIVE_INTRO));
                for practice in practices {
                    md.push_str(&format!("  - {}\n", practice));
                }
            }
            TreatmentSection::Products { chemical, organic } => {
                md.push_str("**Chemical Control:**\n\n");
                for treatment in chemical {
                    md.push_str(&format!("- {}\n", treatment_line(treatment)));
                }
                md.push_str("\n**Organic / Biological Control:**\n\n");
                for treatment in organic {
                    md.push_str(&format!("- {}\n", treatment_line(treatment)));
                }
            }
            TreatmentSection::Unavailable => {
                md.push_str(&format!("- {}\n", TREATMENT_UNAVAILABLE));
                md.push_str(&format!("- {}\n", CONSULT_EXTENSION));
            }
        }
        md.push('\n');

        // 5. Recovery
        md.push_str("## 📅 5. Recovery Timeline\n\n");
        for step in &report.recovery.steps {
            md.push_str(&format!("- {}\n", step));
        }
        if let Some(note) = &report.recovery.note {
            md.push_str(&format!("- {}\n", note));
        }
        md.push('\n');

        // 6-8. Numbered lists
        md.push_str("## 🌾 6. Yield Boosting Techniques\n\n");
        push_numbered(&mut md, &report.yield_tips.tips);

        md.push_str("## 🌱 7. Long-Term Health Maintenance\n\n");
        push_numbered(&mut md, &report.maintenance);

        md.push_str("## ✅ 8. Immediate Action Plan\n\n");
        push_numbered(&mut md, &report.action_plan);

        // 9. Summary
        let summary = &report.summary;
        md.push_str("---\n\n");
        md.push_str("## 📋 Report Summary\n\n");
        md.push_str(&format!("- **Diagnosis:** {}\n", summary.diagnosis));
        md.push_str(&format!("- **Status:** {}\n", summary.status_label));
        md.push_str(&format!("- **Health Score:** {:.1}%\n", summary.health_score));
        md.push_str(&format!("- **Treatment Priority:** {}\n", summary.treatment_priority));
        md.push_str(&format!("- **Expected Recovery:** {}\n", summary.expected_recovery));
        md.push_str(&format!("- **Next Review:** {}\n\n", summary.next_review));

        md.push_str("💡 **Recommendations:**\n\n");
        for recommendation in &report.recommendations {
            md.push_str(&format!("- {}\n", recommendation));
        }
        md.push('\n');

        md.push_str(&format!("*Report generated: {}*\n", report.generated_at));
        md
    }
}

fn push_numbered(md: &mut String, items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        md.push_str(&format!("{}. {}\n", i + 1, item));
    }
    md.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::AdvisoryTables;
    use crate::report::ReportGenerator;
    use crate::scorer::diagnose;
    use chrono::{TimeZone, Utc};

    fn render(label: &str, confidence: f64) -> String {
        let diagnosis = diagnose(label, confidence);
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 5).unwrap();
        let report = ReportGenerator::new().generate_at(&diagnosis, AdvisoryTables::shared(), at);
        MarkdownFormatter::format(&report)
    }

    #[test]
    fn test_format_diseased() {
        let md = render("Tomato___Late_blight", 95.0);

        assert!(md.contains("# Leaf Diagnosis: Tomato___Late_blight"));
        assert!(md.contains("- **Detection Confidence:** 95.00%"));
        assert!(md.contains("- **Plant Status:** DISEASED ⚠️"));
        assert!(md.contains("- **Disease Severity:** Medium"));
        assert!(md.contains("**Chemical Control:**"));
        assert!(md.contains("1. Begin treatment within 24–48 hours"));
        assert!(md.contains("5. Isolate affected plants if possible"));
        assert!(md.contains("- **Next Review:** 2 weeks"));
        assert!(md.ends_with("*Report generated: 2024-03-01 09:30:05*\n"));
    }

    #[test]
    fn test_format_healthy() {
        let md = render("Potato___healthy", 0.5);

        assert!(md.contains("- **Health Score:** 60.0%"));
        assert!(md.contains("- No pesticide required."));
        assert!(md.contains("  - Maintain proper irrigation schedule"));
        assert!(md.contains("- No recovery actions required (plant is healthy)."));
        assert!(!md.contains("**Chemical Control:**"));
    }

    #[test]
    fn test_format_sections_in_order() {
        let md = render("Corn_(maize)___Common_rust_", 0.6);
        let headings: Vec<usize> = ["## 📊 1.", "## 🦠 2.", "## 🔍 3.", "## 💊 4.", "## 📅 5.", "## 🌾 6.", "## 🌱 7.", "## ✅ 8.", "## 📋"]
            .iter()
            .map(|h| md.find(h).unwrap())
            .collect();
        assert!(headings.windows(2).all(|w| w[0] < w[1]));
        assert!(md.contains("1. Use high-yielding hybrids"));
    }
}
