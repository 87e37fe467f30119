//! Static scoring weight tables
//!
//! All rule weights live here as constant data rather than branching logic,
//! so tuning the tables is a content update, not a code change.
//!
//! # Invariants
//!
//! 1. Condition and family-history weights are never positive
//! 2. Lab marker penalties are deviation-proportional and never negative
//! 3. Marker matching is substring-based on normalized (lowercased,
//!    trimmed) names; the first matching spec wins

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Score delta applied for a medical condition not present in the table
pub const DEFAULT_CONDITION_WEIGHT: f64 = -5.0;

/// Score delta applied for a family-history entry not present in the table
pub const DEFAULT_FAMILY_HISTORY_WEIGHT: f64 = -3.0;

/// Known chronic conditions and their score deltas
pub static MEDICAL_CONDITION_WEIGHTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("диабет", -12.0),
        ("сахарный диабет", -12.0),
        ("гипертония", -10.0),
        ("артериальная гипертензия", -10.0),
        ("ишемическая болезнь сердца", -15.0),
        ("астма", -6.0),
        ("хобл", -10.0),
        ("ожирение", -8.0),
        ("анемия", -5.0),
        ("гипотиреоз", -6.0),
        ("артрит", -5.0),
        ("остеопороз", -5.0),
        ("депрессия", -7.0),
        ("гастрит", -3.0),
    ])
});

/// Family-history entries and their score deltas
pub static FAMILY_HISTORY_WEIGHTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("онкология", -8.0),
        ("рак", -8.0),
        ("болезни сердца", -6.0),
        ("инфаркт", -6.0),
        ("инсульт", -5.0),
        ("диабет", -4.0),
        ("сахарный диабет", -4.0),
        ("гипертония", -3.0),
        ("альцгеймер", -4.0),
    ])
});

/// Factor family a lab marker contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerBucket {
    Metabolic,
    Inflammatory,
    Other,
}

/// One entry of the lab-marker weight table
///
/// `patterns` are matched as substrings of the normalized marker name;
/// `exclude` substrings disqualify a match. This preserves the loose
/// matching behavior of lab-report text (e.g. any name containing
/// "холестерин" without "лпнп"/"лпвп" is total cholesterol).
#[derive(Debug, Clone, Copy)]
pub struct MarkerSpec {
    /// Canonical key used for history grouping
    pub key: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Optimal reference value (value == optimal contributes zero penalty)
    pub optimal: f64,
    /// Penalty multiplier applied to relative deviation
    pub weight: f64,
    pub bucket: MarkerBucket,
    pub patterns: &'static [&'static str],
    pub exclude: &'static [&'static str],
}

/// Lab-marker weight table
///
/// Order matters: more specific specs come first so that e.g.
/// "гликированный гемоглобин" never matches plain hemoglobin.
pub static MARKER_SPECS: &[MarkerSpec] = &[
    MarkerSpec {
        key: "hba1c",
        label: "Гликированный гемоглобин",
        optimal: 5.2,
        weight: 2.5,
        bucket: MarkerBucket::Metabolic,
        patterns: &["гликированный", "гликогемоглобин", "hba1c"],
        exclude: &[],
    },
    MarkerSpec {
        key: "glucose",
        label: "Глюкоза",
        optimal: 5.0,
        weight: 2.0,
        bucket: MarkerBucket::Metabolic,
        patterns: &["глюкоза", "glucose"],
        exclude: &[],
    },
    MarkerSpec {
        key: "ldl",
        label: "Холестерин ЛПНП",
        optimal: 3.0,
        weight: 2.0,
        bucket: MarkerBucket::Metabolic,
        patterns: &["лпнп", "ldl"],
        exclude: &[],
    },
    MarkerSpec {
        key: "hdl",
        label: "Холестерин ЛПВП",
        optimal: 1.5,
        weight: 1.5,
        bucket: MarkerBucket::Metabolic,
        patterns: &["лпвп", "hdl"],
        exclude: &[],
    },
    MarkerSpec {
        key: "cholesterol",
        label: "Общий холестерин",
        optimal: 5.0,
        weight: 1.5,
        bucket: MarkerBucket::Metabolic,
        patterns: &["холестерин", "cholesterol"],
        exclude: &["лпнп", "лпвп", "ldl", "hdl"],
    },
    MarkerSpec {
        key: "triglycerides",
        label: "Триглицериды",
        optimal: 1.3,
        weight: 1.5,
        bucket: MarkerBucket::Metabolic,
        patterns: &["триглицерид", "triglycerid"],
        exclude: &[],
    },
    MarkerSpec {
        key: "crp",
        label: "С-реактивный белок",
        optimal: 1.0,
        weight: 1.5,
        bucket: MarkerBucket::Inflammatory,
        patterns: &["срб", "с-реактивный", "c-реактивный", "crp"],
        exclude: &[],
    },
    MarkerSpec {
        key: "esr",
        label: "СОЭ",
        optimal: 10.0,
        weight: 1.0,
        bucket: MarkerBucket::Inflammatory,
        patterns: &["соэ", "esr", "скорость оседания"],
        exclude: &[],
    },
    MarkerSpec {
        key: "hemoglobin",
        label: "Гемоглобин",
        optimal: 140.0,
        weight: 0.5,
        bucket: MarkerBucket::Other,
        patterns: &["гемоглобин", "hemoglobin", "hgb"],
        exclude: &["гликированный", "гликогемоглобин", "hba1c"],
    },
    MarkerSpec {
        key: "ferritin",
        label: "Ферритин",
        optimal: 100.0,
        weight: 0.8,
        bucket: MarkerBucket::Other,
        patterns: &["ферритин", "ferritin"],
        exclude: &[],
    },
    MarkerSpec {
        key: "vitamin_d",
        label: "Витамин D",
        optimal: 50.0,
        weight: 1.0,
        bucket: MarkerBucket::Other,
        patterns: &["витамин d", "витамин д", "25-oh", "vitamin d"],
        exclude: &[],
    },
    MarkerSpec {
        key: "tsh",
        label: "ТТГ",
        optimal: 2.0,
        weight: 1.2,
        bucket: MarkerBucket::Other,
        patterns: &["ттг", "тиреотропный", "tsh"],
        exclude: &[],
    },
    MarkerSpec {
        key: "creatinine",
        label: "Креатинин",
        optimal: 80.0,
        weight: 1.0,
        bucket: MarkerBucket::Other,
        patterns: &["креатинин", "creatinine"],
        exclude: &[],
    },
];

/// Normalize a condition/marker name for table lookup
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Look up the score delta for a medical condition
pub fn condition_weight(name: &str) -> f64 {
    MEDICAL_CONDITION_WEIGHTS
        .get(normalize_name(name).as_str())
        .copied()
        .unwrap_or(DEFAULT_CONDITION_WEIGHT)
}

/// Look up the score delta for a family-history entry
pub fn family_history_weight(name: &str) -> f64 {
    FAMILY_HISTORY_WEIGHTS
        .get(normalize_name(name).as_str())
        .copied()
        .unwrap_or(DEFAULT_FAMILY_HISTORY_WEIGHT)
}

/// Match a raw lab-marker name against the weight table
///
/// Returns `None` for markers outside the table; such markers are ignored
/// by scoring (many lab panels contain markers we do not weight).
pub fn match_marker(raw_name: &str) -> Option<&'static MarkerSpec> {
    let name = normalize_name(raw_name);
    if name.is_empty() {
        return None;
    }
    MARKER_SPECS.iter().find(|spec| {
        spec.patterns.iter().any(|p| name.contains(p))
            && !spec.exclude.iter().any(|e| name.contains(e))
    })
}

/// Deviation-proportional penalty for a marker value
///
/// penalty = |value - optimal| / optimal * weight, always >= 0
pub fn marker_penalty(spec: &MarkerSpec, value: f64) -> f64 {
    (value - spec.optimal).abs() / spec.optimal * spec.weight
}
