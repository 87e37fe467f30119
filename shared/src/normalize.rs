//! Profile normalizer, the first stage of the scoring pipeline
//!
//! Converts a raw `HealthProfile` plus lab analyses into the canonical
//! inputs the aggregator expects. Side-effect-free, no I/O.
//!
//! Out-of-range numeric fields become "unknown" (excluded from scoring)
//! rather than clamped, and non-numeric marker values are dropped, so a
//! sloppy profile or lab report degrades the score's precision but never
//! produces an error.

use crate::labs::{parse_marker_value, LabAnalysis};
use crate::profile::HealthProfile;
use crate::weights::{match_marker, marker_penalty, MarkerBucket, MarkerSpec};

/// A matched, parsed lab-marker value ready for deviation scoring
#[derive(Debug, Clone, Copy)]
pub struct MarkerReading {
    pub spec: &'static MarkerSpec,
    pub value: f64,
}

impl MarkerReading {
    /// Deviation-proportional penalty for this reading
    pub fn impact(&self) -> f64 {
        marker_penalty(self.spec, self.value)
    }

    pub fn bucket(&self) -> MarkerBucket {
        self.spec.bucket
    }
}

/// Canonical scoring inputs produced by normalization
#[derive(Debug, Clone)]
pub struct NormalizedInputs {
    pub profile: HealthProfile,
    pub markers: Vec<MarkerReading>,
    /// Whether any lab analyses were supplied at all; the lab rule group
    /// only runs when true, even if no markers matched the weight table
    pub has_lab_data: bool,
}

/// Normalize a profile and lab analyses into scoring inputs
pub fn normalize(profile: &HealthProfile, analyses: &[LabAnalysis]) -> NormalizedInputs {
    NormalizedInputs {
        profile: sanitize_profile(profile),
        markers: collect_markers(analyses),
        has_lab_data: !analyses.is_empty(),
    }
}

/// Drop out-of-range or non-finite profile fields
///
/// The ranges are deliberately generous; this guards against data-entry
/// garbage (negative ages, 40-hour sleep), not clinical outliers.
fn sanitize_profile(profile: &HealthProfile) -> HealthProfile {
    let mut sanitized = profile.clone();

    sanitized.age = profile.age.filter(|a| (1..=130).contains(a));
    sanitized.height_cm = profile
        .height_cm
        .filter(|h| h.is_finite() && (50.0..=300.0).contains(h));
    sanitized.weight_kg = profile
        .weight_kg
        .filter(|w| w.is_finite() && (20.0..=500.0).contains(w));
    sanitized.sleep_hours = profile
        .sleep_hours
        .filter(|s| s.is_finite() && (0.0..=24.0).contains(s));
    sanitized.stress_level = profile.stress_level.filter(|s| (0..=10).contains(s));
    sanitized.mental_health_score = profile.mental_health_score.filter(|m| (0..=100).contains(m));

    sanitized
        .medical_conditions
        .retain(|c| !c.trim().is_empty());
    sanitized.family_history.retain(|c| !c.trim().is_empty());

    sanitized
}

/// Flatten lab analyses into matched, parsed marker readings
///
/// Unmatched marker names and unparseable values are silently skipped.
fn collect_markers(analyses: &[LabAnalysis]) -> Vec<MarkerReading> {
    let mut readings = Vec::new();
    for analysis in analyses {
        for marker in &analysis.markers {
            let Some(spec) = match_marker(&marker.name) else {
                continue;
            };
            let Some(value) = parse_marker_value(&marker.value) else {
                continue;
            };
            readings.push(MarkerReading { spec, value });
        }
    }
    readings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labs::LabMarker;
    use chrono::{TimeZone, Utc};

    fn analysis(markers: Vec<LabMarker>) -> LabAnalysis {
        LabAnalysis {
            performed_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            markers,
        }
    }

    fn marker(name: &str, value: &str) -> LabMarker {
        LabMarker {
            name: name.to_string(),
            value: value.to_string(),
            unit: None,
            status: None,
        }
    }

    #[test]
    fn test_out_of_range_fields_become_unknown() {
        let profile = HealthProfile {
            age: Some(-3),
            sleep_hours: Some(40.0),
            stress_level: Some(99),
            mental_health_score: Some(150),
            weight_kg: Some(f64::NAN),
            ..Default::default()
        };

        let inputs = normalize(&profile, &[]);
        assert_eq!(inputs.profile.age, None);
        assert_eq!(inputs.profile.sleep_hours, None);
        assert_eq!(inputs.profile.stress_level, None);
        assert_eq!(inputs.profile.mental_health_score, None);
        assert_eq!(inputs.profile.weight_kg, None);
    }

    #[test]
    fn test_valid_fields_pass_through_unchanged() {
        let profile = HealthProfile {
            age: Some(34),
            sleep_hours: Some(7.5),
            stress_level: Some(4),
            medical_conditions: vec!["диабет".into(), "  ".into()],
            ..Default::default()
        };

        let inputs = normalize(&profile, &[]);
        assert_eq!(inputs.profile.age, Some(34));
        assert_eq!(inputs.profile.sleep_hours, Some(7.5));
        assert_eq!(inputs.profile.medical_conditions, vec!["диабет".to_string()]);
    }

    #[test]
    fn test_markers_matched_and_parsed() {
        let analyses = vec![analysis(vec![
            marker("Глюкоза", "5,8"),
            marker("неизвестный показатель", "3.0"),
            marker("СОЭ", "не определено"),
        ])];

        let inputs = normalize(&HealthProfile::default(), &analyses);
        assert!(inputs.has_lab_data);
        assert_eq!(inputs.markers.len(), 1);
        assert_eq!(inputs.markers[0].spec.key, "glucose");
        assert_eq!(inputs.markers[0].value, 5.8);
    }

    #[test]
    fn test_no_analyses_means_no_lab_data() {
        let inputs = normalize(&HealthProfile::default(), &[]);
        assert!(!inputs.has_lab_data);
        assert!(inputs.markers.is_empty());

        // An empty analysis still counts as supplied lab data
        let inputs = normalize(&HealthProfile::default(), &[analysis(vec![])]);
        assert!(inputs.has_lab_data);
    }
}
