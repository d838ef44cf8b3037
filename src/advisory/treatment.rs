//! Treatment Database
//!
//! Chemical and organic/biological control products per pathogen category.
//! Healthy plants have no entry; the report lists preventive practices instead.

use crate::diagnosis::PathogenCategory;

/// A single control product with dose and purpose
#[derive(Debug, Clone)]
pub struct TreatmentEntry {
    pub name: &'static str,
    pub dose: &'static str,
    pub purpose: &'static str,
}

/// Chemical + organic controls for one pathogen category
#[derive(Debug, Clone)]
pub struct TreatmentSet {
    pub category: PathogenCategory,
    pub chemical: &'static [TreatmentEntry],
    pub organic: &'static [TreatmentEntry],
}

// ============================================================================
// EMBEDDED TREATMENT DATA
// ============================================================================

pub static TREATMENTS: &[TreatmentSet] = &[
    TreatmentSet {
        category: PathogenCategory::Virus,
        chemical: &[
            TreatmentEntry { name: "Imidacloprid 17.8% SL", dose: "0.3 ml/L", purpose: "Vector (whitefly) control" },
            TreatmentEntry { name: "Thiamethoxam 25% WG", dose: "0.25 g/L", purpose: "Vector suppression" },
        ],
        organic: &[
            TreatmentEntry { name: "Neem Oil (1500 ppm)", dose: "3–5 ml/L", purpose: "Reduces vector population" },
            TreatmentEntry { name: "Yellow sticky traps", dose: "10–12 traps/acre", purpose: "Monitoring & control" },
        ],
    },
    TreatmentSet {
        category: PathogenCategory::Fungus,
        chemical: &[
            TreatmentEntry { name: "Mancozeb 75% WP", dose: "2–2.5 g/L", purpose: "Protective fungicide" },
            TreatmentEntry { name: "Carbendazim 50% WP", dose: "1 g/L", purpose: "Systemic control" },
        ],
        organic: &[
            TreatmentEntry { name: "Neem oil", dose: "3 ml/L", purpose: "Fungal suppression" },
            TreatmentEntry { name: "Trichoderma viride", dose: "5 g/L soil drench", purpose: "Biocontrol" },
        ],
    },
    TreatmentSet {
        category: PathogenCategory::Bacterium,
        chemical: &[
            TreatmentEntry { name: "Copper Oxychloride 50% WP", dose: "2.5–3 g/L", purpose: "Bacterial suppression" },
            TreatmentEntry { name: "Streptocycline", dose: "0.1 g/L", purpose: "Bacteriostatic" },
        ],
        organic: &[
            TreatmentEntry { name: "Neem extract", dose: "5 ml/L", purpose: "Reduces spread" },
            TreatmentEntry { name: "Field sanitation", dose: "Remove infected plants", purpose: "Prevention" },
        ],
    },
    TreatmentSet {
        category: PathogenCategory::Arthropod,
        chemical: &[
            TreatmentEntry { name: "Abamectin 1.9% EC", dose: "0.5 ml/L", purpose: "Mite control" },
        ],
        organic: &[
            TreatmentEntry { name: "Neem oil", dose: "3 ml/L", purpose: "Mite suppression" },
        ],
    },
];

/// Preventive practices shown instead of products for healthy plants.
pub static PREVENTIVE_PRACTICES: &[&str] = &[
    "Maintain proper irrigation schedule",
    "Apply balanced fertilizers based on soil test",
    "Ensure good air circulation and spacing",
    "Monitor weekly for early disease or pest signs",
];
