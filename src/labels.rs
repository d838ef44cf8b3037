//! PlantVillage label vocabulary
//!
//! Classifier labels have the form `"<Crop>___<Condition>"`, e.g.
//! `"Tomato___Late_blight"` or `"Apple___healthy"`. The scoring core treats labels
//! as opaque strings; this module only provides the closed 38-class vocabulary
//! and the crop/condition split used for advisory lookups.

/// Separator between crop and condition in a label.
pub const LABEL_DELIMITER: &str = "___";

/// Number of classes the upstream classifier predicts.
pub const NUM_CLASSES: usize = 38;

/// PlantVillage class names in classifier index order.
pub const CLASS_NAMES: [&str; NUM_CLASSES] = [
    "Apple___Apple_scab",
    "Apple___Black_rot",
    "Apple___Cedar_apple_rust",
    "Apple___healthy",
    "Blueberry___healthy",
    "Cherry_(including_sour)___Powdery_mildew",
    "Cherry_(including_sour)___healthy",
    "Corn_(maize)___Cercospora_leaf_spot Gray_leaf_spot",
    "Corn_(maize)___Common_rust_",
    "Corn_(maize)___Northern_Leaf_Blight",
    "Corn_(maize)___healthy",
    "Grape___Black_rot",
    "Grape___Esca_(Black_Measles)",
    "Grape___Leaf_blight_(Isariopsis_Leaf_Spot)",
    "Grape___healthy",
    "Orange___Haunglongbing_(Citrus_greening)",
    "Peach___Bacterial_spot",
    "Peach___healthy",
    "Pepper,_bell___Bacterial_spot",
    "Pepper,_bell___healthy",
    "Potato___Early_blight",
    "Potato___Late_blight",
    "Potato___healthy",
    "Raspberry___healthy",
    "Soybean___healthy",
    "Squash___Powdery_mildew",
    "Strawberry___Leaf_scorch",
    "Strawberry___healthy",
    "Tomato___Bacterial_spot",
    "Tomato___Early_blight",
    "Tomato___Late_blight",
    "Tomato___Leaf_Mold",
    "Tomato___Septoria_leaf_spot",
    "Tomato___Spider_mites Two-spotted_spider_mite",
    "Tomato___Target_Spot",
    "Tomato___Tomato_Yellow_Leaf_Curl_Virus",
    "Tomato___Tomato_mosaic_virus",
    "Tomato___healthy",
];

/// Get the class name for a given classifier index.
pub fn class_name(index: usize) -> Option<&'static str> {
    CLASS_NAMES.get(index).copied()
}

/// Get the classifier index for a given class name.
pub fn class_index(name: &str) -> Option<usize> {
    CLASS_NAMES.iter().position(|&n| n == name)
}

/// True if the label is one of the 38 known classes (exact match).
pub fn is_known_label(label: &str) -> bool {
    class_index(label).is_some()
}

/// Crop part of a label: everything before the first delimiter.
/// A label without a delimiter is returned whole.
pub fn crop_name(label: &str) -> &str {
    label.split(LABEL_DELIMITER).next().unwrap_or(label)
}

/// Condition part of a label: everything after the first delimiter, or "".
pub fn condition_name(label: &str) -> &str {
    label
        .split_once(LABEL_DELIMITER)
        .map(|(_, condition)| condition)
        .unwrap_or("")
}

/// Reduce a crop name to its leading word for table lookups.
///
/// `"Corn_(maize)"` -> `"Corn"`, `"Pepper,_bell"` -> `"Pepper"`,
/// `"Cherry_(including_sour)"` -> `"Cherry"`, `"Tomato"` -> `"Tomato"`.
pub fn crop_key(crop: &str) -> &str {
    let trimmed = crop.trim();
    let end = trimmed
        .find(|c: char| c == '_' || c == ',' || c == '(' || c.is_whitespace())
        .unwrap_or(trimmed.len());
    &trimmed[..end]
}

/// Human-readable condition, e.g. `"Late_blight"` -> `"Late blight"`.
pub fn display_condition(condition: &str) -> String {
    condition
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name() {
        assert_eq!(class_name(0), Some("Apple___Apple_scab"));
        assert_eq!(class_name(37), Some("Tomato___healthy"));
        assert_eq!(class_name(38), None);
    }

    #[test]
    fn test_class_index() {
        assert_eq!(class_index("Apple___Apple_scab"), Some(0));
        assert_eq!(class_index("Tomato___Late_blight"), Some(30));
        assert_eq!(class_index("Unknown___class"), None);
    }

    #[test]
    fn test_is_known_label() {
        assert!(is_known_label("Tomato___Late_blight"));
        assert!(is_known_label("Corn_(maize)___Common_rust_"));
        // Exact match only
        assert!(!is_known_label("tomato___late_blight"));
        assert!(!is_known_label("Mango___Anthracnose"));
        assert!(!is_known_label(""));
    }

    #[test]
    fn test_crop_and_condition() {
        assert_eq!(crop_name("Tomato___Late_blight"), "Tomato");
        assert_eq!(condition_name("Tomato___Late_blight"), "Late_blight");
        assert_eq!(crop_name("Pepper,_bell___healthy"), "Pepper,_bell");
        assert_eq!(crop_name("no delimiter"), "no delimiter");
        assert_eq!(condition_name("no delimiter"), "");
    }

    #[test]
    fn test_crop_key() {
        assert_eq!(crop_key("Corn_(maize)"), "Corn");
        assert_eq!(crop_key("Pepper,_bell"), "Pepper");
        assert_eq!(crop_key("Cherry_(including_sour)"), "Cherry");
        assert_eq!(crop_key("Tomato"), "Tomato");
        assert_eq!(crop_key(""), "");
    }

    #[test]
    fn test_display_condition() {
        assert_eq!(display_condition("Common_rust_"), "Common rust");
        assert_eq!(
            display_condition("Spider_mites Two-spotted_spider_mite"),
            "Spider mites Two-spotted spider mite"
        );
    }

    #[test]
    fn test_every_class_has_delimiter() {
        for name in CLASS_NAMES {
            assert!(name.contains(LABEL_DELIMITER), "{} lacks delimiter", name);
            assert!(!crop_name(name).is_empty());
        }
    }
}
