//! Lab analysis types and biomarker trend classification
//!
//! A `LabAnalysis` is one uploaded lab report: a timestamp plus a list of
//! raw markers. Marker values arrive as free text (lab reports are messy);
//! numeric parsing happens at normalization and non-numeric values are
//! dropped rather than treated as errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::weights::{match_marker, MarkerSpec};

/// Relative change below which a series is considered stable, percent
pub const STABLE_TREND_THRESHOLD_PCT: f64 = 5.0;

/// One raw marker line from a lab report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabMarker {
    pub name: String,
    /// Raw value as printed on the report; parsed to f64 at normalization
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// One lab report with its markers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabAnalysis {
    pub performed_at: DateTime<Utc>,
    pub markers: Vec<LabMarker>,
}

/// A single dated observation of one biomarker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerObservation {
    pub value: f64,
    pub observed_at: DateTime<Utc>,
}

/// Trend direction for a biomarker series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Worsening,
    Stable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Improving => "improving",
            TrendDirection::Worsening => "worsening",
            TrendDirection::Stable => "stable",
        }
    }
}

/// Observations of one biomarker across time, most recent first
#[derive(Debug, Clone)]
pub struct BiomarkerHistory {
    pub spec: &'static MarkerSpec,
    observations: Vec<MarkerObservation>,
}

impl BiomarkerHistory {
    /// Build a history series for one marker from raw observations
    ///
    /// Observations are sorted by timestamp descending.
    pub fn new(spec: &'static MarkerSpec, mut observations: Vec<MarkerObservation>) -> Self {
        observations.sort_by(|a, b| b.observed_at.cmp(&a.observed_at));
        Self { spec, observations }
    }

    pub fn observations(&self) -> &[MarkerObservation] {
        &self.observations
    }

    pub fn latest(&self) -> Option<&MarkerObservation> {
        self.observations.first()
    }

    /// Trend from the two most recent observations
    ///
    /// Returns `None` when fewer than two observations exist.
    pub fn trend(&self) -> Option<TrendDirection> {
        let latest = self.observations.first()?;
        let previous = self.observations.get(1)?;
        Some(classify_trend(previous.value, latest.value, self.spec.optimal))
    }
}

/// Classify the movement between two consecutive observations
///
/// A change within ±5% is stable. Beyond that, moving toward the marker's
/// optimal value is improving, moving away is worsening.
pub fn classify_trend(previous: f64, latest: f64, optimal: f64) -> TrendDirection {
    if previous.abs() < f64::EPSILON {
        return TrendDirection::Stable;
    }
    let change_pct = (latest - previous) / previous * 100.0;
    if change_pct.abs() <= STABLE_TREND_THRESHOLD_PCT {
        return TrendDirection::Stable;
    }
    if (latest - optimal).abs() < (previous - optimal).abs() {
        TrendDirection::Improving
    } else {
        TrendDirection::Worsening
    }
}

/// Group parsed marker readings from multiple analyses into per-marker series
pub fn build_histories(analyses: &[LabAnalysis]) -> Vec<BiomarkerHistory> {
    let mut grouped: Vec<(&'static MarkerSpec, Vec<MarkerObservation>)> = Vec::new();

    for analysis in analyses {
        for marker in &analysis.markers {
            let Some(spec) = match_marker(&marker.name) else {
                continue;
            };
            let Some(value) = parse_marker_value(&marker.value) else {
                continue;
            };
            let observation = MarkerObservation {
                value,
                observed_at: analysis.performed_at,
            };
            match grouped.iter_mut().find(|(s, _)| s.key == spec.key) {
                Some((_, observations)) => observations.push(observation),
                None => grouped.push((spec, vec![observation])),
            }
        }
    }

    grouped
        .into_iter()
        .map(|(spec, observations)| BiomarkerHistory::new(spec, observations))
        .collect()
}

/// Parse a raw marker value into a number
///
/// Russian lab reports use comma decimal separators, so "5,4" parses as
/// 5.4. Returns `None` for non-numeric or non-finite values.
pub fn parse_marker_value(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', ".");
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}
