//! Advisory Tables
//!
//! Static lookup data used to assemble diagnosis reports:
//! - Treatment database keyed by pathogen category
//! - Recovery timeline keyed by severity tier
//! - Yield boosting tips keyed by crop
//! - Protein references (UniProt / AlphaFold) keyed by label
//!
//! The embedded tables are immutable configuration. A JSON file may override
//! any subset of entries; overrides replace built-ins key by key.

pub mod treatment;
pub mod recovery;
pub mod yield_tips;
pub mod protein;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::diagnosis::{PathogenCategory, SeverityTier};
use crate::error::{DiagnosisError, Result};
use crate::labels::crop_key;

pub use protein::alphafold_url;
pub use recovery::NO_RECOVERY_NEEDED;
pub use treatment::PREVENTIVE_PRACTICES;
pub use yield_tips::GENERIC_YIELD_TIP;

/// A control product with dose and purpose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Treatment {
    pub name: String,
    pub dose: String,
    pub purpose: String,
}

/// Chemical and organic/biological controls for one pathogen category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreatmentPlan {
    pub chemical: Vec<Treatment>,
    pub organic: Vec<Treatment>,
}

/// UniProt reference for a label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinRecord {
    pub uniprot_id: String,
    #[serde(default)]
    pub sequence: Option<String>,
}

impl ProteinRecord {
    pub fn alphafold_url(&self) -> String {
        alphafold_url(&self.uniprot_id)
    }
}

/// All advisory lookup tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryTables {
    /// Keyed by `PathogenCategory::as_str()`
    pub treatments: FxHashMap<String, TreatmentPlan>,
    /// Keyed by `SeverityTier::as_str()`
    pub recovery_timelines: FxHashMap<String, Vec<String>>,
    /// Keyed by crop key (e.g. "Corn") or full crop name
    pub yield_tips: FxHashMap<String, Vec<String>>,
    /// Keyed by full label
    pub proteins: FxHashMap<String, ProteinRecord>,
}

static SHARED_TABLES: OnceLock<AdvisoryTables> = OnceLock::new();

impl AdvisoryTables {
    /// Build tables from the embedded data.
    pub fn builtin() -> Self {
        let treatments = treatment::TREATMENTS
            .iter()
            .map(|set| {
                let owned_entries = |entries: &[treatment::TreatmentEntry]| {
                    entries
                        .iter()
                        .map(|e| Treatment {
                            name: e.name.to_string(),
                            dose: e.dose.to_string(),
                            purpose: e.purpose.to_string(),
                        })
                        .collect::<Vec<_>>()
                };
                (
                    set.category.as_str().to_string(),
                    TreatmentPlan {
                        chemical: owned_entries(set.chemical),
                        organic: owned_entries(set.organic),
                    },
                )
            })
            .collect();

        let recovery_timelines = SeverityTier::ALL
            .iter()
            .map(|tier| (tier.as_str().to_string(), to_strings(recovery::timeline(*tier))))
            .collect();

        let yield_tips = yield_tips::YIELD_TIPS
            .iter()
            .map(|(crop, tips)| (crop.to_string(), to_strings(tips)))
            .collect();

        let proteins = protein::PROTEINS
            .iter()
            .map(|p| {
                (
                    p.label.to_string(),
                    ProteinRecord {
                        uniprot_id: p.uniprot_id.to_string(),
                        sequence: p.sequence.map(str::to_string),
                    },
                )
            })
            .collect();

        Self {
            treatments,
            recovery_timelines,
            yield_tips,
            proteins,
        }
    }

    /// Process-wide built-in tables, initialized on first use.
    pub fn shared() -> &'static AdvisoryTables {
        SHARED_TABLES.get_or_init(Self::builtin)
    }

    /// Load a JSON override file and merge it over the built-in tables.
    ///
    /// The file may contain any subset of `treatments`, `recovery_timelines`,
    /// `yield_tips` and `proteins`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| DiagnosisError::TableLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let overrides: AdvisoryTables =
            serde_json::from_str(&contents).map_err(|source| DiagnosisError::TableParse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(
            "Loaded advisory overrides from {:?}: {} treatments, {} timelines, {} crops, {} proteins",
            path,
            overrides.treatments.len(),
            overrides.recovery_timelines.len(),
            overrides.yield_tips.len(),
            overrides.proteins.len(),
        );

        Ok(Self::builtin().merged(overrides))
    }

    /// Replace entries in `self` with those present in `overrides`.
    pub fn merged(mut self, overrides: AdvisoryTables) -> Self {
        self.treatments.extend(overrides.treatments);
        self.recovery_timelines.extend(overrides.recovery_timelines);
        self.yield_tips.extend(overrides.yield_tips);
        self.proteins.extend(overrides.proteins);
        self
    }

    /// Treatment plan for a pathogen category. Healthy plants get none.
    pub fn treatment_for(&self, category: PathogenCategory) -> Option<&TreatmentPlan> {
        if category.is_healthy() {
            return None;
        }
        self.treatments.get(category.as_str())
    }

    /// Recovery steps for a severity tier; empty if the tier has no entry.
    pub fn timeline_for(&self, tier: SeverityTier) -> &[String] {
        self.recovery_timelines
            .get(tier.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Yield tips for a crop: exact crop name first, then its crop key.
    pub fn yield_tips_for(&self, crop: &str) -> Option<&[String]> {
        self.yield_tips
            .get(crop)
            .or_else(|| self.yield_tips.get(crop_key(crop)))
            .map(Vec::as_slice)
    }

    pub fn protein_for(&self, label: &str) -> Option<&ProteinRecord> {
        self.proteins.get(label)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_sizes() {
        let tables = AdvisoryTables::builtin();
        assert_eq!(tables.treatments.len(), 4);
        assert_eq!(tables.recovery_timelines.len(), 3);
        assert_eq!(tables.yield_tips.len(), 14);
        assert_eq!(tables.proteins.len(), 38);
    }

    #[test]
    fn test_treatment_for_healthy_is_none() {
        let tables = AdvisoryTables::shared();
        assert!(tables.treatment_for(PathogenCategory::Healthy).is_none());
        let fungus = tables.treatment_for(PathogenCategory::Fungus).unwrap();
        assert_eq!(fungus.chemical[0].name, "Mancozeb 75% WP");
    }

    #[test]
    fn test_every_disease_category_has_treatment() {
        let tables = AdvisoryTables::builtin();
        for category in PathogenCategory::ALL {
            match tables.treatment_for(category) {
                None => assert!(category.is_healthy(), "missing plan for {}", category),
                Some(plan) => {
                    assert!(!plan.chemical.is_empty());
                    assert!(!plan.organic.is_empty());
                }
            }
        }

        let arthropod = tables.treatment_for(PathogenCategory::Arthropod).unwrap();
        assert_eq!(arthropod.chemical[0].name, "Abamectin 1.9% EC");
        assert_eq!(arthropod.chemical[0].dose, "0.5 ml/L");
    }

    #[test]
    fn test_yield_tips_crop_key_fallback() {
        let tables = AdvisoryTables::shared();
        let corn = tables.yield_tips_for("Corn_(maize)").unwrap();
        assert_eq!(corn[0], "Use high-yielding hybrids");
        assert!(tables.yield_tips_for("Pepper,_bell").is_some());
        assert!(tables.yield_tips_for("Mango").is_none());
    }

    #[test]
    fn test_timeline_for() {
        let tables = AdvisoryTables::builtin();
        assert_eq!(tables.timeline_for(SeverityTier::High).len(), 3);
        assert!(tables.timeline_for(SeverityTier::Good)[0].contains("Monitor"));

        let empty = AdvisoryTables::default();
        assert!(empty.timeline_for(SeverityTier::Medium).is_empty());
    }

    #[test]
    fn test_merge_overrides_keeps_other_entries() {
        let mut overrides = AdvisoryTables::default();
        overrides
            .yield_tips
            .insert("Mango".to_string(), vec!["Prune after harvest".to_string()]);
        overrides
            .yield_tips
            .insert("Tomato".to_string(), vec!["Stake early".to_string()]);

        let tables = AdvisoryTables::builtin().merged(overrides);
        assert_eq!(tables.yield_tips.len(), 15);
        assert_eq!(tables.yield_tips_for("Tomato").unwrap(), ["Stake early".to_string()]);
        assert_eq!(tables.treatments.len(), 4);
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"treatments": {{"Virus": {{"chemical": [{{"name": "X", "dose": "1 ml/L", "purpose": "Y"}}]}}}}}}"#
        )
        .unwrap();

        let tables = AdvisoryTables::load(file.path()).unwrap();
        let virus = tables.treatment_for(PathogenCategory::Virus).unwrap();
        assert_eq!(virus.chemical.len(), 1);
        assert!(virus.organic.is_empty());
        assert_eq!(tables.proteins.len(), 38);
    }

    #[test]
    fn test_load_errors() {
        let missing = AdvisoryTables::load(Path::new("/nonexistent/leaf_tables.json"));
        assert!(matches!(missing, Err(DiagnosisError::TableLoad { .. })));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            AdvisoryTables::load(file.path()),
            Err(DiagnosisError::TableParse { .. })
        ));
    }
}
