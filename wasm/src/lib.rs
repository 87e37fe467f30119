//! EVERLIV WASM Module
//!
//! This crate provides WebAssembly bindings so the dashboard can run the
//! scoring pipeline in the browser without a round trip to the backend.

use everliv_shared::labs::{classify_trend, LabAnalysis};
use everliv_shared::profile::HealthProfile;
use everliv_shared::scoring::compute_health_score;
use wasm_bindgen::prelude::*;

/// Compute the composite health score
///
/// Takes the profile and the lab-analysis list as JSON, returns the
/// score object as JSON.
#[wasm_bindgen]
pub fn health_score(profile_json: &str, analyses_json: &str) -> Result<String, String> {
    let profile: HealthProfile =
        serde_json::from_str(profile_json).map_err(|e| format!("invalid profile: {}", e))?;
    let analyses: Vec<LabAnalysis> =
        serde_json::from_str(analyses_json).map_err(|e| format!("invalid analyses: {}", e))?;

    let score = compute_health_score(&profile, &analyses);
    serde_json::to_string(&score).map_err(|e| e.to_string())
}

/// Classify a biomarker trend between two consecutive observations
///
/// Returns "improving", "worsening" or "stable".
#[wasm_bindgen]
pub fn marker_trend(previous: f64, latest: f64, optimal: f64) -> String {
    classify_trend(previous, latest, optimal).as_str().to_string()
}

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}
