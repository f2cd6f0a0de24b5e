//! Crop suitability evaluation

use serde::{Deserialize, Serialize};

use crate::models::{profile_for, CropProfile, EnvironmentEstimate};

/// Per-dimension and overall suitability judgment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuitabilityResult {
    pub temperature_ok: bool,
    pub humidity_ok: bool,
    pub rainfall_ok: bool,
    /// AND of the three dimensions; no weighting, no partial credit
    pub overall_ok: bool,
    /// The profile the estimate was judged against
    pub profile: CropProfile,
}

/// Judge estimated conditions against a crop's acceptable ranges
///
/// Unknown crops resolve to the default profile and never fail. Each
/// dimension is suitable iff the value lies within [low, high] inclusive.
pub fn evaluate(crop: &str, estimate: &EnvironmentEstimate) -> SuitabilityResult {
    let profile = profile_for(crop);

    let temperature_ok = within(estimate.temperature, profile.temperature_range);
    let humidity_ok = within(estimate.humidity, profile.humidity_range);
    let rainfall_ok = within(estimate.rainfall, profile.rainfall_range);

    SuitabilityResult {
        temperature_ok,
        humidity_ok,
        rainfall_ok,
        overall_ok: temperature_ok && humidity_ok && rainfall_ok,
        profile,
    }
}

fn within(value: f64, (low, high): (f64, f64)) -> bool {
    value >= low && value <= high
}
