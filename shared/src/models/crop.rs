//! Crop catalogs: indicator labels and acceptability profiles
//!
//! Two catalogs live here and must not be conflated. `CROP_LABELS` is the
//! fixed, versioned list of indicator fields the regression model was
//! trained with — prediction correctness depends entirely on its order.
//! The profile table maps crop keys to acceptable environmental ranges and
//! may list crops the model was never trained on.

use serde::{Deserialize, Serialize};

/// Version of the indicator catalog; bump when the training set changes
pub const CROP_CATALOG_VERSION: u32 = 1;

/// Indicator labels in canonical (alphabetical) order
///
/// The feature vector carries one boolean indicator per entry, in exactly
/// this order. Do not reorder or insert without retraining the model.
pub const CROP_LABELS: &[&str] = &[
    "apple",
    "banana",
    "blackgram",
    "chickpea",
    "coconut",
    "coffee",
    "cotton",
    "grapes",
    "jute",
    "kidneybeans",
    "lentil",
    "maize",
    "mango",
    "mothbeans",
    "mungbean",
    "muskmelon",
    "orange",
    "papaya",
    "pigeonpeas",
    "pomegranate",
    "rice",
    "watermelon",
];

/// Crop used when the requested key has no profile of its own
pub const DEFAULT_CROP: &str = "rice";

/// Acceptable environmental ranges for a crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropProfile {
    pub crop: String,
    /// [low, high] in °C, inclusive on both bounds
    pub temperature_range: (f64, f64),
    /// [low, high] in %, inclusive on both bounds
    pub humidity_range: (f64, f64),
    /// [low, high] in mm, inclusive on both bounds
    pub rainfall_range: (f64, f64),
}

struct ProfileRow {
    crop: &'static str,
    temperature: (f64, f64),
    humidity: (f64, f64),
    rainfall: (f64, f64),
}

const PROFILES: &[ProfileRow] = &[
    ProfileRow {
        crop: "rice",
        temperature: (20.0, 35.0),
        humidity: (60.0, 80.0),
        rainfall: (100.0, 200.0),
    },
    ProfileRow {
        crop: "wheat",
        temperature: (15.0, 25.0),
        humidity: (50.0, 70.0),
        rainfall: (75.0, 150.0),
    },
    ProfileRow {
        crop: "maize",
        temperature: (18.0, 27.0),
        humidity: (50.0, 75.0),
        rainfall: (60.0, 110.0),
    },
    ProfileRow {
        crop: "cotton",
        temperature: (21.0, 30.0),
        humidity: (50.0, 80.0),
        rainfall: (60.0, 110.0),
    },
    ProfileRow {
        crop: "coffee",
        temperature: (20.0, 30.0),
        humidity: (70.0, 90.0),
        rainfall: (150.0, 250.0),
    },
];

impl From<&ProfileRow> for CropProfile {
    fn from(row: &ProfileRow) -> Self {
        CropProfile {
            crop: row.crop.to_string(),
            temperature_range: row.temperature,
            humidity_range: row.humidity,
            rainfall_range: row.rainfall,
        }
    }
}

/// Look up a crop profile without falling back
pub fn known_profile(crop: &str) -> Option<CropProfile> {
    let key = crop.trim().to_lowercase();
    PROFILES.iter().find(|row| row.crop == key).map(CropProfile::from)
}

/// Resolve the profile for a crop, substituting the default for unknown keys
///
/// Unknown crops are not an error condition. The first profile row is the
/// default crop.
pub fn profile_for(crop: &str) -> CropProfile {
    known_profile(crop).unwrap_or_else(|| CropProfile::from(&PROFILES[0]))
}

/// Whether a crop key is part of the indicator catalog
pub fn is_catalog_crop(crop: &str) -> bool {
    let key = crop.trim().to_lowercase();
    CROP_LABELS.contains(&key.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_sorted_and_unique() {
        let mut sorted = CROP_LABELS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, CROP_LABELS);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let profile = known_profile("Rice").unwrap();
        assert_eq!(profile.crop, "rice");
        assert_eq!(profile.temperature_range, (20.0, 35.0));
    }

    #[test]
    fn test_unknown_crop_resolves_to_default() {
        let profile = profile_for("dragonfruit");
        assert_eq!(profile.crop, DEFAULT_CROP);
        assert_eq!(PROFILES[0].crop, DEFAULT_CROP);
    }

    #[test]
    fn test_wheat_profiled_but_not_in_catalog() {
        assert!(known_profile("wheat").is_some());
        assert!(!is_catalog_crop("wheat"));
    }
}
