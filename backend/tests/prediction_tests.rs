//! Prediction pipeline integration tests
//!
//! Covers soil input validation, feature vector assembly, and crop
//! suitability evaluation against the shared pipeline core.

use proptest::prelude::*;
use serde_json::json;

use shared::{
    build_feature_vector, evaluate, feature_count, feature_names, EnvironmentEstimate, SoilInput,
    SoilSample, CROP_LABELS, DEFAULT_CROP,
};

fn sample() -> SoilSample {
    SoilSample {
        nitrogen: 90.0,
        phosphorus: 40.0,
        potassium: 35.0,
        ph: 6.5,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Valid input converts to a sample with the same values
    #[test]
    fn test_soil_input_accepts_numbers_and_numeric_strings() {
        let input: SoilInput = serde_json::from_value(json!({
            "nitrogen": 90, "phosphorus": "40", "potassium": 35.0, "ph": "6.5"
        }))
        .unwrap();

        let sample = input.validate().unwrap();
        assert_eq!(sample.nitrogen, 90.0);
        assert_eq!(sample.phosphorus, 40.0);
        assert_eq!(sample.ph, 6.5);
    }

    /// A missing required field names itself in the error
    #[test]
    fn test_missing_soil_field_is_named() {
        let input: SoilInput = serde_json::from_value(json!({
            "nitrogen": 90, "phosphorus": 40, "ph": 6.5
        }))
        .unwrap();

        let err = input.validate().unwrap_err();
        assert_eq!(err.field(), "potassium");
    }

    /// The Kaggle-style shorthand keys are accepted
    #[test]
    fn test_soil_input_short_aliases() {
        let input: SoilInput = serde_json::from_value(json!({
            "N": 90, "P": 40, "K": 35, "pH": 6.5
        }))
        .unwrap();

        assert!(input.validate().is_ok());
    }

    /// The feature vector leads with the four continuous fields
    #[test]
    fn test_feature_vector_layout() {
        let vector = build_feature_vector(&sample(), "rice", None);

        assert_eq!(vector.len(), feature_count());
        assert_eq!(&vector.values()[..4], &[90.0, 40.0, 35.0, 6.5]);
    }

    /// Column names are stable across invocations
    #[test]
    fn test_feature_names_stable() {
        assert_eq!(feature_names(), feature_names());
        assert_eq!(feature_names().len(), feature_count());
    }

    /// A crop outside the catalog still evaluates, against the default profile
    #[test]
    fn test_unknown_crop_falls_back_to_default_profile() {
        let estimate = EnvironmentEstimate::new(27.0, 70.0, 150.0);
        let result = evaluate("dragonfruit", &estimate);

        assert_eq!(result.profile.crop, DEFAULT_CROP);
    }

    /// Range bounds count as suitable
    #[test]
    fn test_suitability_bounds_inclusive() {
        // Rice: 20-35°C, 60-80%, 100-200mm
        assert!(evaluate("rice", &EnvironmentEstimate::new(20.0, 60.0, 100.0)).overall_ok);
        assert!(evaluate("rice", &EnvironmentEstimate::new(35.0, 80.0, 200.0)).overall_ok);
        assert!(!evaluate("rice", &EnvironmentEstimate::new(35.1, 80.0, 200.0)).overall_ok);
    }

    /// Wheat at 40°C is unsuitable on temperature alone
    #[test]
    fn test_wheat_heat_stress() {
        let result = evaluate("wheat", &EnvironmentEstimate::new(40.0, 60.0, 100.0));

        assert!(!result.temperature_ok);
        assert!(result.humidity_ok);
        assert!(result.rainfall_ok);
        assert!(!result.overall_ok);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for plausible soil nutrient values
    fn nutrient_strategy() -> impl Strategy<Value = f64> {
        0.0..=200.0f64
    }

    /// Strategy for soil pH values
    fn ph_strategy() -> impl Strategy<Value = f64> {
        3.0..=10.0f64
    }

    /// Strategy picking a crop from the catalog
    fn catalog_crop_strategy() -> impl Strategy<Value = &'static str> {
        proptest::sample::select(CROP_LABELS)
    }

    /// Strategy for environment estimates over a wide range
    fn estimate_strategy() -> impl Strategy<Value = EnvironmentEstimate> {
        (-10.0..=55.0f64, 0.0..=100.0f64, 0.0..=500.0f64)
            .prop_map(|(t, h, r)| EnvironmentEstimate::new(t, h, r))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The vector has a fixed length and exactly one indicator set for
        /// any catalog crop
        #[test]
        fn prop_feature_vector_one_hot(
            n in nutrient_strategy(),
            p in nutrient_strategy(),
            k in nutrient_strategy(),
            ph in ph_strategy(),
            crop in catalog_crop_strategy()
        ) {
            let sample = SoilSample { nitrogen: n, phosphorus: p, potassium: k, ph };
            let vector = build_feature_vector(&sample, crop, None);

            prop_assert_eq!(vector.len(), feature_count());

            let indicators = &vector.values()[4..];
            let set: Vec<usize> = indicators
                .iter()
                .enumerate()
                .filter(|(_, v)| **v == 1.0)
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(set.len(), 1);
            prop_assert_eq!(CROP_LABELS[set[0]], crop);
        }

        /// Assembly is deterministic for identical inputs
        #[test]
        fn prop_feature_vector_deterministic(
            n in nutrient_strategy(),
            p in nutrient_strategy(),
            k in nutrient_strategy(),
            ph in ph_strategy(),
            crop in catalog_crop_strategy()
        ) {
            let sample = SoilSample { nitrogen: n, phosphorus: p, potassium: k, ph };
            prop_assert_eq!(
                build_feature_vector(&sample, crop, None),
                build_feature_vector(&sample, crop, None)
            );
        }

        /// Overall suitability is exactly the conjunction of the dimensions
        #[test]
        fn prop_overall_is_conjunction(
            estimate in estimate_strategy(),
            crop in catalog_crop_strategy()
        ) {
            let result = evaluate(crop, &estimate);
            prop_assert_eq!(
                result.overall_ok,
                result.temperature_ok && result.humidity_ok && result.rainfall_ok
            );
        }

        /// Evaluation never panics, whatever the crop string
        #[test]
        fn prop_evaluate_total_over_crop_names(
            estimate in estimate_strategy(),
            crop in "[a-zA-Z ]{0,24}"
        ) {
            let result = evaluate(&crop, &estimate);
            prop_assert!(!result.profile.crop.is_empty());
        }
    }
}
