//! Fixed report text that does not depend on the diagnosis.

pub struct DamageBandText {
    pub level: &'static str,
    pub leaf_area: &'static str,
    pub yield_impact: &'static str,
}

pub static DAMAGE_BANDS: &[DamageBandText] = &[
    DamageBandText { level: "LOW", leaf_area: "<20% leaf area affected", yield_impact: "Minor yield impact (5–15%)" },
    DamageBandText { level: "MEDIUM", leaf_area: "20–50%", yield_impact: "Moderate yield impact (20–40%)" },
    DamageBandText { level: "HIGH", leaf_area: ">50%", yield_impact: "Severe yield impact (45–70%)" },
];

pub static MAINTENANCE: &[&str] = &[
    "Monitor plant health regularly",
    "Maintain optimal growing conditions",
    "Consult with local agricultural experts",
];

pub static ACTION_PLAN_HEALTHY: &[&str] = &[
    "Maintain proper irrigation and nutrition",
    "Monitor weekly for early disease signs",
    "Continue preventive care practices",
];

pub static ACTION_PLAN_DISEASED: &[&str] = &[
    "Begin treatment within 24–48 hours",
    "Remove severely infected plant material",
    "Adjust irrigation to minimize leaf wetness",
    "Monitor progress weekly",
    "Isolate affected plants if possible",
];

pub static RECOMMENDATIONS: &[&str] = &[
    "For severe infections, consult local agricultural extension",
    "Always follow pesticide label instructions",
    "Consider integrated pest management approaches",
    "Keep records of treatments and plant responses",
];

pub const NO_PESTICIDE: &str = "No pesticide required.";
pub const PREVENTIVE_INTRO: &str = "Follow good agronomic and preventive practices:";
pub const TREATMENT_UNAVAILABLE: &str = "Treatment data not available.";
pub const CONSULT_EXTENSION: &str = "Consult local agricultural extension services.";

pub const RECOVERY_ROUTINE: &str = "Routine care";
pub const RECOVERY_TREATMENT: &str = "Follow treatment schedule";
pub const REVIEW_HEALTHY: &str = "1 month";
pub const REVIEW_DISEASED: &str = "2 weeks";

/// `chrono` format for `DiagnosisReport::generated_at`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const NOT_AVAILABLE: &str = "N/A";
pub const SEQUENCE_NOT_AVAILABLE: &str = "Sequence not available";
