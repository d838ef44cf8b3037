use crate::report::content::{
    CONSULT_EXTENSION, NO_PESTICIDE, PREVENTIVE_INTRO, SEQUENCE_NOT_AVAILABLE, TREATMENT_UNAVAILABLE,
};
use crate::report::formatters::or_not_available;
use crate::report::types::{DiagnosisReport, TreatmentSection};
use crate::advisory::Treatment;
use crate::diagnosis::PlantStatus;
use askama_escape::Html;

/// HTML formatter for diagnosis reports
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Format report as standalone HTML with embedded CSS
    pub fn format(report: &DiagnosisReport) -> String {
        let mut html = String::with_capacity(6144);
        let detection = &report.detection;

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(&format!(
            "<title>Leaf Diagnosis: {}</title>\n",
            escape(&detection.label)
        ));
        html.push_str("<style>\n");
        html.push_str("body { font-family: system-ui, sans-serif; max-width: 800px; margin: 40px auto; padding: 20px; line-height: 1.6; }\n");
        html.push_str("h1 { color: #2c3e50; margin-bottom: 10px; }\n");
        html.push_str("h2 { color: #34495e; border-bottom: 2px solid #ecf0f1; padding-bottom: 5px; margin-top: 30px; }\n");
        html.push_str(".status { padding: 15px; margin: 15px 0; border-radius: 4px; }\n");
        html.push_str(".healthy { background: #d4edda; border-left: 4px solid #28a745; }\n");
        html.push_str(".diseased { background: #f8d7da; border-left: 4px solid #dc3545; }\n");
        html.push_str(".score { font-size: 1.5em; font-weight: bold; color: #2c3e50; }\n");
        html.push_str(".sequence { font-family: monospace; word-break: break-all; }\n");
        html.push_str("table { width: 100%; border-collapse: collapse; margin: 16px 0; }\n");
        html.push_str("th { background: #34495e; color: white; text-align: left; padding: 12px; font-weight: 600; }\n");
        html.push_str("td { padding: 12px; border-bottom: 1px solid #ecf0f1; }\n");
        html.push_str("footer { color: #6c757d; font-style: italic; margin-top: 30px; }\n");
        html.push_str("</style>\n</head>\n<body>\n");

        // 1. Detection
        html.push_str(&format!("<h1>{}</h1>\n", escape(&detection.label)));
        let status_class = match detection.status {
            PlantStatus::Healthy => "healthy",
            PlantStatus::Diseased => "diseased",
        };
        html.push_str(&format!(
            "<div class=\"status {}\">\n<p><strong>{}</strong></p>\n",
            status_class,
            escape(&detection.status_label)
        ));
        html.push_str(&format!(
            "<p class=\"score\">Health Score: {:.1}%</p>\n",
            detection.health_score
        ));
        html.push_str("</div>\n");

        html.push_str("<h2>1. Detection Results</h2>\n<ul>\n");
        push_item(&mut html, "Predicted Disease", &detection.label);
        push_item(&mut html, "Crop", &detection.crop);
        push_item(
            &mut html,
            "Detection Confidence",
            &format!("{:.2}%", detection.confidence_percent),
        );
        push_item(&mut html, "Disease Severity", detection.severity.as_str());
        html.push_str("</ul>\n");

        // 2. Pathogen biology
        let biology = &report.pathogen_biology;
        html.push_str("<h2>2. Pathogen Biology</h2>\n<ul>\n");
        push_item(&mut html, "Pathogen Type", biology.pathogen.as_str());
        push_item(&mut html, "UniProt ID", or_not_available(biology.uniprot_id.as_deref()));
        html.push_str(&format!(
            "<li><strong>Key Protein Sequence:</strong> <span class=\"sequence\">{}</span></li>\n",
            escape(biology.sequence.as_deref().unwrap_or(SEQUENCE_NOT_AVAILABLE))
        ));
        match &biology.alphafold_url {
            Some(url) => html.push_str(&format!(
                "<li><strong>3D Structure Prediction:</strong> <a href=\"{0}\">{0}</a></li>\n",
                escape(url)
            )),
            None => push_item(&mut html, "3D Structure Prediction", or_not_available(None)),
        }
        html.push_str("</ul>\n");

        // 3. Damage assessment
        html.push_str("<h2>3. Damage Assessment</h2>\n");
        html.push_str("<table>\n<thead><tr><th>Level</th><th>Leaf Area</th><th>Yield Impact</th></tr></thead>\n<tbody>\n");
        for band in &report.damage_assessment {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&band.level),
                escape(&band.leaf_area),
                escape(&band.yield_impact)
            ));
        }
        html.push_str("</tbody>\n</table>\n");

        // 4. Treatment
        html.push_str("<h2>4. Treatment Recommendations</h2>\n");
        match &report.treatment {
            TreatmentSection::Preventive { practices } => {
                html.push_str(&format!("<p>{}</p>\n", NO_PESTICIDE));
                html.push_str(&format!("<p>{}</p>\n", PREVENTIVE_INTRO));
                push_list(&mut html, "ul", practices);
            }
            TreatmentSection::Products { chemical, organic } => {
                html.push_str("<h3>Chemical Control</h3>\n");
                push_treatment_table(&mut html, chemical);
                html.push_str("<h3>Organic / Biological Control</h3>\n");
                push_treatment_table(&mut html, organic);
            }
            TreatmentSection::Unavailable => {
                html.push_str(&format!("<p>{}</p>\n", TREATMENT_UNAVAILABLE));
                html.push_str(&format!("<p>{}</p>\n", CONSULT_EXTENSION));
            }
        }

        // 5. Recovery
        html.push_str("<h2>5. Recovery Timeline</h2>\n");
        if !report.recovery.steps.is_empty() {
            push_list(&mut html, "ul", &report.recovery.steps);
        }
        if let Some(note) = &report.recovery.note {
            html.push_str(&format!("<p>{}</p>\n", escape(note)));
        }

        html.push_str("<h2>6. Yield Boosting Techniques</h2>\n");
        push_list(&mut html, "ol", &report.yield_tips.tips);

        html.push_str("<h2>7. Long-Term Health Maintenance</h2>\n");
        push_list(&mut html, "ol", &report.maintenance);

        html.push_str("<h2>8. Immediate Action Plan</h2>\n");
        push_list(&mut html, "ol", &report.action_plan);

        // 9. Summary
        let summary = &report.summary;
        html.push_str("<h2>Report Summary</h2>\n<ul>\n");
        push_item(&mut html, "Diagnosis", &summary.diagnosis);
        push_item(&mut html, "Status", &summary.status_label);
        push_item(&mut html, "Health Score", &format!("{:.1}%", summary.health_score));
        push_item(&mut html, "Treatment Priority", summary.treatment_priority.as_str());
        push_item(&mut html, "Expected Recovery", &summary.expected_recovery);
        push_item(&mut html, "Next Review", &summary.next_review);
        html.push_str("</ul>\n");

        html.push_str("<h3>Recommendations</h3>\n");
        push_list(&mut html, "ul", &report.recommendations);

        html.push_str(&format!(
            "<footer>Report generated: {}</footer>\n",
            escape(&report.generated_at)
        ));
        html.push_str("</body>\n</html>\n");
        html
    }
}

/// Escape text for HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    askama_escape::escape(text, Html).to_string()
}

fn push_item(html: &mut String, key: &str, value: &str) {
    html.push_str(&format!("<li><strong>{}:</strong> {}</li>\n", key, escape(value)));
}

fn push_list(html: &mut String, tag: &str, items: &[String]) {
    html.push_str(&format!("<{}>\n", tag));
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", escape(item)));
    }
    html.push_str(&format!("</{}>\n", tag));
}

fn push_treatment_table(html: &mut String, treatments: &[Treatment]) {
    html.push_str("<table>\n<thead><tr><th>Product</th><th>Dose</th><th>Purpose</th></tr></thead>\n<tbody>\n");
    for t in treatments {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&t.name),
            escape(&t.dose),
            escape(&t.purpose)
        ));
    }
    html.push_str("</tbody>\n</table>\n");
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
        HtmlFormatter::format(&report)
    }

    #[test]
    fn test_format_html() {
        let html = render("Apple___Cedar_apple_rust", 0.3);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<div class=\"status diseased\">"));
        assert!(html.contains("<h3>Chemical Control</h3>"));
        assert!(html.contains("<a href=\"https:"));
        assert!(html.contains("A0A2H4I8D6\">"));
        assert!(html.contains("<footer>Report generated: 2024-03-01 09:30:05</footer>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_format_html_escapes_label() {
        let html = render("<script>alert('x')</script>___healthy", 0.9);

        assert!(!html.contains("<script>"));
        assert!(!html.contains("alert('x')"));
        assert!(html.contains("&lt;script&gt;alert("));
        assert!(html.contains("<div class=\"status healthy\">"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a & b < c > \"d\""), "a &amp; b &lt; c &gt; &quot;d&quot;");
        assert_eq!(escape("Late blight"), "Late blight");
        assert_eq!(escape("Dose: 2–2.5 ml"), "Dose: 2–2.5 ml");
        assert!(!escape("it's").contains('\''));
    }
}
